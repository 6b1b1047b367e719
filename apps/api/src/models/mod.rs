pub mod document;
pub mod result;

pub use document::{Document, DocumentFormat};
pub use result::ScoredResult;
