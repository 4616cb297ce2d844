//! Tip records: community hints attached to a quiz.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A hint or correction submitted for a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub id: i64,
    /// The quiz this tip belongs to.
    pub quiz_id: i64,
    pub text: String,
    /// Display name of whoever submitted the tip.
    pub author: String,
    /// Whether the quiz owner has accepted the tip.
    pub accepted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a tip.
#[derive(Debug, Clone)]
pub struct NewTip {
    pub quiz_id: i64,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}
