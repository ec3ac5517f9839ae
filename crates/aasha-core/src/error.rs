//! Error types for Aasha

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Companion error: {0}")]
    Companion(String),
}

pub type Result<T> = std::result::Result<T, Error>;
