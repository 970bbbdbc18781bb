use thiserror::Error;

/// Errors raised while delivering a digest.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Failed to render digest: {0}")]
    Render(String),
    #[error("Failed to deliver digest to {recipient}: {reason}")]
    Delivery { recipient: String, reason: String },
}
