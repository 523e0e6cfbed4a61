use std::convert::Infallible;
use std::io;

/// Failures that abort a digest computation. None of them is retried; the digest of the affected
/// input is abandoned.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("failed to read from the byte source: {0}")]
    SourceRead(#[from] io::Error),
    #[error("invalid configuration for {algorithm}: {reason}")]
    InvalidConfiguration {
        algorithm: &'static str,
        reason: String,
    },
}

impl From<Infallible> for HashError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
