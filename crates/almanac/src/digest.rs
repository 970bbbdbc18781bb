//! Digest rendering and delivery.
//!
//! The core decides what goes into a digest; this module turns a
//! [`DigestMessage`] into HTML and hands it to a delivery channel.

use askama::Template;
use async_trait::async_trait;

use almanac_core::digest::{
    DigestItem, DigestMessage, Notifier, NotifyError, DIGEST_FOOTER, DIGEST_HEADING,
};

/// One rendered line of the digest body.
struct DigestLine<'a> {
    when: &'a str,
    subject: &'a str,
    description: &'a str,
}

impl<'a> From<&'a DigestItem> for DigestLine<'a> {
    fn from(item: &'a DigestItem) -> Self {
        Self {
            when: &item.when,
            subject: &item.subject,
            description: item.description.as_deref().unwrap_or_default(),
        }
    }
}

/// Body language when the recipient has no preference.
const DEFAULT_LANGUAGE: &str = "en";

#[derive(Template)]
#[template(path = "digest.html")]
struct DigestTemplate<'a> {
    language: &'a str,
    heading: &'a str,
    footer: &'a str,
    items: Vec<DigestLine<'a>>,
}

/// Render the HTML body of a digest message.
pub fn render_digest_html(message: &DigestMessage) -> Result<String, NotifyError> {
    let template = DigestTemplate {
        language: message.language.as_deref().unwrap_or(DEFAULT_LANGUAGE),
        heading: DIGEST_HEADING,
        footer: DIGEST_FOOTER,
        items: message.items.iter().map(DigestLine::from).collect(),
    };

    template
        .render()
        .map_err(|err| NotifyError::Render(err.to_string()))
}

/// A [`Notifier`] that writes rendered digests to the log instead of sending mail.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    sender: String,
}

impl LogNotifier {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &DigestMessage) -> Result<(), NotifyError> {
        let body = render_digest_html(message)?;

        tracing::info!(
            from = %self.sender,
            to = %message.recipient,
            subject = %message.subject,
            language = message.language.as_deref().unwrap_or(DEFAULT_LANGUAGE),
            items = message.items.len(),
            "Digest sent"
        );
        tracing::debug!(to = %message.recipient, %body, "Digest body");

        Ok(())
    }
}
