use thiserror::Error;

/// Errors raised by the underlying browser session transport.
///
/// These propagate to the caller unchanged: a lost session or a driver
/// timeout is a real failure, not something the action layer retries or
/// masks.
#[derive(Error, Debug, Clone)]
pub enum SessionError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Stale element: {0}")]
    StaleElement(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Session lost: {0}")]
    SessionLost(String),

    #[error("Not supported: {0}")]
    NotSupported(String),
}
