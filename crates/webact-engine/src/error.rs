use crate::assertion::AssertionError;
use crate::resolution::{AmbiguousError, ResolutionError};
use thiserror::Error;
use webact_common::SessionError;

/// Failure of a single test step.
///
/// The variants keep "couldn't find it" (`Resolution`), "found too many"
/// (`Ambiguous`) and "found it, but state was wrong" (`Assertion`) distinct,
/// so callers can tell them apart. Driver failures pass through unchanged;
/// nothing here is caught, downgraded or retried.
#[derive(Error, Debug)]
pub enum StepError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Ambiguous(#[from] AmbiguousError),

    #[error(transparent)]
    Assertion(#[from] AssertionError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
