//! Query handlers for the quiz authoring context.

use serde::Serialize;
use trivia_core::error::DomainError;
use trivia_core::quiz::{Quiz, QuizFilter};
use trivia_core::repository::{QuizRepository, TipRepository};
use trivia_core::tip::Tip;

/// Quizzes shown per listing page.
pub const ITEMS_PER_PAGE: u64 = 10;

/// A quiz as shown to players: the answer is never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub id: i64,
    pub question: String,
    pub author_id: i64,
}

impl From<&Quiz> for QuizSummary {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id,
            question: quiz.question.clone(),
            author_id: quiz.author_id,
        }
    }
}

/// Listing parameters as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct QuizListQuery {
    /// Free-text search over questions.
    pub search: Option<String>,
    /// Restrict to one author's quizzes.
    pub author_id: Option<i64>,
    /// 1-based page number; missing or non-positive means the first page.
    pub pageno: Option<i64>,
}

/// Pagination details of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub pageno: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// One page of quizzes.
#[derive(Debug, Clone, Serialize)]
pub struct QuizIndexView {
    pub quizzes: Vec<QuizSummary>,
    /// The search term echoed back (empty when none).
    pub search: String,
    pub title: String,
    pub page: PageInfo,
}

/// A quiz with its tips.
#[derive(Debug, Clone, Serialize)]
pub struct QuizDetailView {
    pub quiz: QuizSummary,
    pub tips: Vec<Tip>,
}

/// Outcome of answering a single quiz.
#[derive(Debug, Clone, Serialize)]
pub struct SingleCheckView {
    pub quiz: QuizSummary,
    pub answer: String,
    pub result: bool,
}

/// Lists one page of quizzes matching the query.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn list_quizzes(
    query: &QuizListQuery,
    repo: &dyn QuizRepository,
) -> Result<QuizIndexView, DomainError> {
    let filter = QuizFilter {
        search: query.search.clone(),
        author_id: query.author_id,
    };
    let pageno = query
        .pageno
        .and_then(|p| u64::try_from(p).ok())
        .filter(|p| *p > 0)
        .unwrap_or(1);

    let total_items = repo.count(&filter).await?;
    let quizzes = repo
        .find_page(&filter, ITEMS_PER_PAGE.saturating_mul(pageno - 1), ITEMS_PER_PAGE)
        .await?;

    let title = match query.author_id {
        Some(author_id) => format!("Questions of user {author_id}"),
        None => "Questions".to_owned(),
    };

    Ok(QuizIndexView {
        quizzes: quizzes.iter().map(QuizSummary::from).collect(),
        search: filter.search_term().unwrap_or_default().to_owned(),
        title,
        page: PageInfo {
            pageno,
            per_page: ITEMS_PER_PAGE,
            total_items,
            total_pages: total_items.div_ceil(ITEMS_PER_PAGE),
        },
    })
}

/// Loads a quiz together with its tips.
///
/// # Errors
///
/// Returns `DomainError::QuizNotFound` if the quiz does not exist.
pub async fn get_quiz_with_tips(
    quiz_id: i64,
    quizzes: &dyn QuizRepository,
    tips: &dyn TipRepository,
) -> Result<QuizDetailView, DomainError> {
    let quiz = quizzes.find_by_id(quiz_id).await?;
    let tips = tips.list_for_quiz(quiz_id).await?;
    Ok(QuizDetailView {
        quiz: QuizSummary::from(&quiz),
        tips,
    })
}

/// Checks an answer to a single quiz; nothing is recorded.
#[must_use]
pub fn check_single_answer(quiz: &Quiz, answer: &str) -> SingleCheckView {
    SingleCheckView {
        quiz: QuizSummary::from(quiz),
        answer: answer.to_owned(),
        result: quiz.accepts(answer),
    }
}

#[cfg(test)]
mod tests {
    use trivia_core::error::DomainError;
    use trivia_core::quiz::Quiz;
    use trivia_test_support::{
        FailingQuizRepository, InMemoryQuizRepository, InMemoryTipRepository, quiz, tip,
    };

    use super::*;

    fn many_quizzes(n: i64) -> Vec<Quiz> {
        (1..=n).map(|i| quiz(i, &format!("Question {i}"), "x")).collect()
    }

    #[tokio::test]
    async fn test_list_quizzes_defaults_to_first_page() {
        // Arrange
        let repo = InMemoryQuizRepository::new(many_quizzes(23));

        // Act
        let view = list_quizzes(&QuizListQuery::default(), &repo).await.unwrap();

        // Assert
        assert_eq!(view.quizzes.len(), 10);
        assert_eq!(view.quizzes[0].id, 1);
        assert_eq!(view.title, "Questions");
        assert_eq!(
            view.page,
            PageInfo {
                pageno: 1,
                per_page: 10,
                total_items: 23,
                total_pages: 3,
            }
        );
    }

    #[tokio::test]
    async fn test_list_quizzes_returns_requested_page() {
        let repo = InMemoryQuizRepository::new(many_quizzes(23));
        let query = QuizListQuery {
            pageno: Some(3),
            ..QuizListQuery::default()
        };

        let view = list_quizzes(&query, &repo).await.unwrap();

        let ids: Vec<i64> = view.quizzes.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![21, 22, 23]);
    }

    #[tokio::test]
    async fn test_list_quizzes_treats_non_positive_page_as_first() {
        let repo = InMemoryQuizRepository::new(many_quizzes(3));
        let query = QuizListQuery {
            pageno: Some(-4),
            ..QuizListQuery::default()
        };

        let view = list_quizzes(&query, &repo).await.unwrap();

        assert_eq!(view.page.pageno, 1);
        assert_eq!(view.quizzes.len(), 3);
    }

    #[tokio::test]
    async fn test_list_quizzes_applies_search_and_author() {
        // Arrange
        let mut theirs = quiz(3, "Capital of France", "Paris");
        theirs.author_id = 2;
        let repo = InMemoryQuizRepository::new(vec![
            quiz(1, "Capital of Italy", "Rome"),
            quiz(2, "Largest ocean", "Pacific"),
            theirs,
        ]);
        let query = QuizListQuery {
            search: Some(" capital ".to_owned()),
            author_id: Some(1),
            pageno: None,
        };

        // Act
        let view = list_quizzes(&query, &repo).await.unwrap();

        // Assert
        let ids: Vec<i64> = view.quizzes.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(view.search, "capital");
        assert_eq!(view.title, "Questions of user 1");
        assert_eq!(view.page.total_items, 1);
    }

    #[tokio::test]
    async fn test_list_quizzes_propagates_repository_failure() {
        let result = list_quizzes(&QuizListQuery::default(), &FailingQuizRepository).await;
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }

    #[tokio::test]
    async fn test_get_quiz_with_tips_includes_only_its_tips() {
        let quizzes = InMemoryQuizRepository::new(vec![quiz(1, "2+2", "4")]);
        let tips = InMemoryTipRepository::new(vec![tip(1, 1, "even"), tip(2, 7, "other")]);

        let view = get_quiz_with_tips(1, &quizzes, &tips).await.unwrap();

        assert_eq!(view.quiz.question, "2+2");
        assert_eq!(view.tips.len(), 1);
        assert_eq!(view.tips[0].text, "even");
    }

    #[tokio::test]
    async fn test_get_quiz_with_tips_returns_not_found() {
        let quizzes = InMemoryQuizRepository::new(Vec::new());
        let tips = InMemoryTipRepository::default();

        let result = get_quiz_with_tips(8, &quizzes, &tips).await;

        assert!(matches!(result, Err(DomainError::QuizNotFound(8))));
    }

    #[test]
    fn test_check_single_answer_normalizes() {
        let view = check_single_answer(&quiz(1, "2+2", "Four"), "  FOUR ");
        assert!(view.result);
        assert_eq!(view.answer, "  FOUR ");
    }
}
