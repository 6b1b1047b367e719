//! Request flow for matching résumés against a job description.
//! Extraction and ranking are CPU-bound and run inside tokio::task::spawn_blocking.

pub mod handlers;
pub mod page;
pub mod pipeline;
pub mod policy;
pub mod upload;

pub use pipeline::{run_match, MatchError, MatchReport};
pub use policy::{SkipPolicy, SkipReason, SkipWarning};
pub use upload::UploadedFile;
