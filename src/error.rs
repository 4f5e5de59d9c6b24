use thiserror::Error;

/// Failures while wiring the effect into its host page or window.
///
/// Image loading never shows up here: a missing flake image only switches
/// the batch to circles.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    #[error("snow container '#{0}' not found")]
    MissingContainer(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("snowfall stopped after {generated} of {total} flakes")]
    IncompleteSnowfall { generated: usize, total: usize },

    #[error("max snowflake size must be greater than 1vw, got {0}")]
    InvalidMaxSize(f64),
}

pub type Result<T> = std::result::Result<T, StageError>;
