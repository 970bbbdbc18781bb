use async_trait::async_trait;

use super::{DigestMessage, NotifyError};

/// Delivers rendered digests to their recipients.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &DigestMessage) -> Result<(), NotifyError>;
}
