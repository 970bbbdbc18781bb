use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::UserId;

/// One line of a digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestItem {
    /// Start time, or "All Day".
    pub when: String,
    pub subject: String,
    pub description: Option<String>,
}

/// Today's occurrences for one user, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestMessage {
    pub user_id: UserId,
    pub recipient: String,
    pub language: Option<String>,
    pub date: NaiveDate,
    pub subject: String,
    pub items: Vec<DigestItem>,
}
