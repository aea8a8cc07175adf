

use thiserror::Error;

/// Errors surfaced by the induction planning core.
#[derive(Debug, Error)]
pub enum InductError {
    // Raised by the input boundary; handled once at the outermost
    // level with a single corrective message, never retried.
    #[error("invalid dimension input '{input}', expected a numeric value")]
    InvalidDimensionInput { input: String },

    // The scene builder refuses to guess a visualization for a
    // category it has no induction path for.
    #[error("no induction rendering path for category '{category}'")]
    UnrecognizedCategory { category: &'static str },
}
