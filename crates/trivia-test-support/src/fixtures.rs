//! Record builders shared by tests.

use chrono::{DateTime, TimeZone, Utc};
use trivia_core::quiz::Quiz;
use trivia_core::tip::Tip;

/// The instant every fixture is stamped with.
///
/// # Panics
///
/// Never; the date is a valid constant.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

/// A quiz owned by author `1`.
#[must_use]
pub fn quiz(id: i64, question: &str, answer: &str) -> Quiz {
    Quiz {
        id,
        question: question.to_owned(),
        answer: answer.to_owned(),
        author_id: 1,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

/// An unaccepted tip.
#[must_use]
pub fn tip(id: i64, quiz_id: i64, text: &str) -> Tip {
    Tip {
        id,
        quiz_id,
        text: text.to_owned(),
        author: "tester".to_owned(),
        accepted: false,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}
