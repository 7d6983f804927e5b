use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BanditError>;

#[derive(Error, Debug)]
pub enum BanditError {
    /// The policy selector is not one of `egreedy`, `oi` or `ucb`.
    #[error("unknown policy '{0}', expected one of 'egreedy', 'oi' or 'ucb'")]
    InvalidPolicyKind(String),

    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}
