//! Quiz records and answer matching.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A question/answer pair owned by an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Stable identifier.
    pub id: i64,
    /// The question text shown to players.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// Owning user.
    pub author_id: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Quiz {
    /// Returns `true` if `submitted` matches this quiz's answer, ignoring
    /// case and surrounding whitespace.
    #[must_use]
    pub fn accepts(&self, submitted: &str) -> bool {
        normalize_answer(submitted) == normalize_answer(&self.answer)
    }
}

/// Normalizes an answer for comparison: trims and lowercases.
#[must_use]
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Fields needed to insert a quiz.
#[derive(Debug, Clone)]
pub struct NewQuiz {
    pub question: String,
    pub answer: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Listing filter for quiz queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizFilter {
    /// Free-text search over the question. Runs of spaces act as wildcards.
    pub search: Option<String>,
    /// Restrict to quizzes owned by this user.
    pub author_id: Option<i64>,
}

impl QuizFilter {
    /// The search term, if it is non-blank.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// SQL `LIKE` pattern equivalent of the search term.
    #[must_use]
    pub fn like_pattern(&self) -> Option<String> {
        self.search_term().map(|term| {
            let joined = term.split_whitespace().collect::<Vec<_>>().join("%");
            format!("%{joined}%")
        })
    }

    /// In-memory evaluation of the filter, consistent with [`Self::like_pattern`].
    #[must_use]
    pub fn matches(&self, quiz: &Quiz) -> bool {
        if self.author_id.is_some_and(|author| author != quiz.author_id) {
            return false;
        }
        let Some(term) = self.search_term() else {
            return true;
        };
        let haystack = quiz.question.to_lowercase();
        let mut rest = haystack.as_str();
        for fragment in term.split_whitespace() {
            let fragment = fragment.to_lowercase();
            match rest.find(&fragment) {
                Some(at) => rest = &rest[at + fragment.len()..],
                None => return false,
            }
        }
        true
    }
}
