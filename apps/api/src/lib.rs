//! Résumé matcher: ranks uploaded résumés against a job description by
//! TF-IDF cosine similarity.

pub mod config;
pub mod errors;
pub mod extraction;
pub mod matching;
pub mod models;
pub mod ranking;
pub mod routes;
pub mod state;
