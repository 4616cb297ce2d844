//! Test repositories: in-memory and failing `QuizRepository` /
//! `TipRepository` implementations.

use std::sync::Mutex;

use async_trait::async_trait;
use trivia_core::error::DomainError;
use trivia_core::quiz::{NewQuiz, Quiz, QuizFilter};
use trivia_core::repository::{QuizRepository, TipRepository};
use trivia_core::tip::{NewTip, Tip};

/// A quiz repository backed by a `Vec`, kept ordered by id.
#[derive(Debug, Default)]
pub struct InMemoryQuizRepository {
    quizzes: Mutex<Vec<Quiz>>,
    list_calls: Mutex<usize>,
}

impl InMemoryQuizRepository {
    /// Create a repository holding `quizzes`.
    #[must_use]
    pub fn new(mut quizzes: Vec<Quiz>) -> Self {
        quizzes.sort_by_key(|q| q.id);
        Self {
            quizzes: Mutex::new(quizzes),
            list_calls: Mutex::new(0),
        }
    }

    /// Returns a snapshot of the stored quizzes.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn quizzes(&self) -> Vec<Quiz> {
        self.quizzes.lock().unwrap().clone()
    }

    /// How many times `list_all` has been called.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn list_all_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    /// Removes a quiz behind the caller's back, as another user would.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn remove(&self, id: i64) {
        self.quizzes.lock().unwrap().retain(|q| q.id != id);
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn list_all(&self) -> Result<Vec<Quiz>, DomainError> {
        *self.list_calls.lock().unwrap() += 1;
        Ok(self.quizzes.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Quiz, DomainError> {
        self.quizzes
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(DomainError::QuizNotFound(id))
    }

    async fn count(&self, filter: &QuizFilter) -> Result<u64, DomainError> {
        let quizzes = self.quizzes.lock().unwrap();
        Ok(quizzes.iter().filter(|q| filter.matches(q)).count() as u64)
    }

    async fn find_page(
        &self,
        filter: &QuizFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Quiz>, DomainError> {
        let quizzes = self.quizzes.lock().unwrap();
        Ok(quizzes
            .iter()
            .filter(|q| filter.matches(q))
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn create(&self, quiz: NewQuiz) -> Result<Quiz, DomainError> {
        let mut quizzes = self.quizzes.lock().unwrap();
        let id = quizzes.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let created = Quiz {
            id,
            question: quiz.question,
            answer: quiz.answer,
            author_id: quiz.author_id,
            created_at: quiz.created_at,
            updated_at: quiz.created_at,
        };
        quizzes.push(created.clone());
        Ok(created)
    }

    async fn update(&self, quiz: &Quiz) -> Result<(), DomainError> {
        let mut quizzes = self.quizzes.lock().unwrap();
        let stored = quizzes
            .iter_mut()
            .find(|q| q.id == quiz.id)
            .ok_or(DomainError::QuizNotFound(quiz.id))?;
        stored.question.clone_from(&quiz.question);
        stored.answer.clone_from(&quiz.answer);
        stored.updated_at = quiz.updated_at;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut quizzes = self.quizzes.lock().unwrap();
        let before = quizzes.len();
        quizzes.retain(|q| q.id != id);
        if quizzes.len() == before {
            return Err(DomainError::QuizNotFound(id));
        }
        Ok(())
    }
}

/// A quiz repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingQuizRepository;

fn connection_refused() -> DomainError {
    DomainError::Infrastructure("connection refused".into())
}

#[async_trait]
impl QuizRepository for FailingQuizRepository {
    async fn list_all(&self) -> Result<Vec<Quiz>, DomainError> {
        Err(connection_refused())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Quiz, DomainError> {
        Err(connection_refused())
    }

    async fn count(&self, _filter: &QuizFilter) -> Result<u64, DomainError> {
        Err(connection_refused())
    }

    async fn find_page(
        &self,
        _filter: &QuizFilter,
        _offset: u64,
        _limit: u64,
    ) -> Result<Vec<Quiz>, DomainError> {
        Err(connection_refused())
    }

    async fn create(&self, _quiz: NewQuiz) -> Result<Quiz, DomainError> {
        Err(connection_refused())
    }

    async fn update(&self, _quiz: &Quiz) -> Result<(), DomainError> {
        Err(connection_refused())
    }

    async fn delete(&self, _id: i64) -> Result<(), DomainError> {
        Err(connection_refused())
    }
}

/// A tip repository backed by a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryTipRepository {
    tips: Mutex<Vec<Tip>>,
}

impl InMemoryTipRepository {
    /// Create a repository holding `tips`.
    #[must_use]
    pub fn new(tips: Vec<Tip>) -> Self {
        Self {
            tips: Mutex::new(tips),
        }
    }

    /// Returns a snapshot of the stored tips.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn tips(&self) -> Vec<Tip> {
        self.tips.lock().unwrap().clone()
    }
}

#[async_trait]
impl TipRepository for InMemoryTipRepository {
    async fn find_by_id(&self, id: i64) -> Result<Tip, DomainError> {
        self.tips
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(DomainError::TipNotFound(id))
    }

    async fn list_for_quiz(&self, quiz_id: i64) -> Result<Vec<Tip>, DomainError> {
        let mut tips: Vec<Tip> = self
            .tips
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.quiz_id == quiz_id)
            .cloned()
            .collect();
        tips.sort_by_key(|t| t.id);
        Ok(tips)
    }

    async fn create(&self, tip: NewTip) -> Result<Tip, DomainError> {
        let mut tips = self.tips.lock().unwrap();
        let id = tips.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let created = Tip {
            id,
            quiz_id: tip.quiz_id,
            text: tip.text,
            author: tip.author,
            accepted: false,
            created_at: tip.created_at,
            updated_at: tip.created_at,
        };
        tips.push(created.clone());
        Ok(created)
    }

    async fn update(&self, tip: &Tip) -> Result<(), DomainError> {
        let mut tips = self.tips.lock().unwrap();
        let stored = tips
            .iter_mut()
            .find(|t| t.id == tip.id)
            .ok_or(DomainError::TipNotFound(tip.id))?;
        stored.text.clone_from(&tip.text);
        stored.accepted = tip.accepted;
        stored.updated_at = tip.updated_at;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut tips = self.tips.lock().unwrap();
        let before = tips.len();
        tips.retain(|t| t.id != id);
        if tips.len() == before {
            return Err(DomainError::TipNotFound(id));
        }
        Ok(())
    }
}

/// A tip repository that always returns an infrastructure error.
#[derive(Debug)]
pub struct FailingTipRepository;

#[async_trait]
impl TipRepository for FailingTipRepository {
    async fn find_by_id(&self, _id: i64) -> Result<Tip, DomainError> {
        Err(connection_refused())
    }

    async fn list_for_quiz(&self, _quiz_id: i64) -> Result<Vec<Tip>, DomainError> {
        Err(connection_refused())
    }

    async fn create(&self, _tip: NewTip) -> Result<Tip, DomainError> {
        Err(connection_refused())
    }

    async fn update(&self, _tip: &Tip) -> Result<(), DomainError> {
        Err(connection_refused())
    }

    async fn delete(&self, _id: i64) -> Result<(), DomainError> {
        Err(connection_refused())
    }
}
