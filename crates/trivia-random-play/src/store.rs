//! Play session persistence abstraction.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use trivia_core::error::DomainError;
use trivia_core::session::SessionId;

use crate::domain::play_session::{PlaySession, PlayState};

/// A `PlayState` read from the store, with the version to hand back on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedPlayState {
    /// Store version; `0` when nothing is stored for the session.
    pub version: i64,
    /// The stored state.
    pub state: PlayState,
}

/// Per-session storage of the random play state.
///
/// Writes are compare-and-swap on `expected_version`, so two requests that
/// race on the same session cannot both apply their transition.
#[async_trait]
pub trait PlaySessionStore: Send + Sync {
    /// Load the state stored for `session_id` (`NoSession` if absent).
    async fn load(&self, session_id: SessionId) -> Result<VersionedPlayState, DomainError>;

    /// Replace the stored state. Saving `PlayState::NoSession` clears it.
    ///
    /// Returns `DomainError::ConcurrencyConflict` if the stored version is no
    /// longer `expected_version`.
    async fn save(
        &self,
        session_id: SessionId,
        expected_version: i64,
        state: &PlayState,
    ) -> Result<(), DomainError>;
}

/// Process-local `PlaySessionStore`.
///
/// Versions come from one store-wide counter, so a session that is cleared
/// and started again never reuses a version a stale writer might hold.
#[derive(Debug, Default)]
pub struct InMemoryPlaySessionStore {
    inner: Mutex<Slots>,
}

#[derive(Debug, Default)]
struct Slots {
    next_version: i64,
    sessions: HashMap<SessionId, (i64, PlaySession)>,
}

impl InMemoryPlaySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions with a play-through in progress.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the internal lock is poisoned.
    pub fn active_sessions(&self) -> Result<usize, DomainError> {
        Ok(self.lock()?.sessions.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Slots>, DomainError> {
        self.inner
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("session store mutex poisoned: {e}")))
    }
}

#[async_trait]
impl PlaySessionStore for InMemoryPlaySessionStore {
    async fn load(&self, session_id: SessionId) -> Result<VersionedPlayState, DomainError> {
        let slots = self.lock()?;
        Ok(match slots.sessions.get(&session_id) {
            Some((version, session)) => VersionedPlayState {
                version: *version,
                state: PlayState::InProgress(session.clone()),
            },
            None => VersionedPlayState {
                version: 0,
                state: PlayState::NoSession,
            },
        })
    }

    async fn save(
        &self,
        session_id: SessionId,
        expected_version: i64,
        state: &PlayState,
    ) -> Result<(), DomainError> {
        let mut slots = self.lock()?;
        let actual = slots.sessions.get(&session_id).map_or(0, |(v, _)| *v);
        if actual != expected_version {
            return Err(DomainError::ConcurrencyConflict {
                session_id: session_id.0,
                expected: expected_version,
                actual,
            });
        }

        match state {
            PlayState::NoSession => {
                slots.sessions.remove(&session_id);
            }
            PlayState::InProgress(session) => {
                slots.next_version += 1;
                let version = slots.next_version;
                slots.sessions.insert(session_id, (version, session.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_progress() -> PlayState {
        PlayState::start([1, 2, 3])
    }

    #[tokio::test]
    async fn test_load_missing_session_returns_no_session_at_version_zero() {
        let store = InMemoryPlaySessionStore::new();

        let loaded = store.load(SessionId::generate()).await.unwrap();

        assert_eq!(loaded.version, 0);
        assert_eq!(loaded.state, PlayState::NoSession);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips_state_with_new_version() {
        // Arrange
        let store = InMemoryPlaySessionStore::new();
        let session_id = SessionId::generate();

        // Act
        store.save(session_id, 0, &in_progress()).await.unwrap();
        let loaded = store.load(session_id).await.unwrap();

        // Assert
        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.state, in_progress());
        assert_eq!(store.active_sessions().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_with_stale_version_is_rejected_and_leaves_state() {
        // Arrange
        let store = InMemoryPlaySessionStore::new();
        let session_id = SessionId::generate();
        store.save(session_id, 0, &in_progress()).await.unwrap();

        // Act
        let result = store.save(session_id, 0, &PlayState::NoSession).await;

        // Assert
        match result {
            Err(DomainError::ConcurrencyConflict {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 0);
                assert_eq!(actual, 1);
            }
            other => panic!("expected ConcurrencyConflict, got {other:?}"),
        }
        assert!(store.load(session_id).await.unwrap().state.is_playing());
    }

    #[tokio::test]
    async fn test_cleared_and_restarted_session_never_reuses_a_version() {
        // Arrange
        let store = InMemoryPlaySessionStore::new();
        let session_id = SessionId::generate();
        store.save(session_id, 0, &in_progress()).await.unwrap();
        store.save(session_id, 1, &PlayState::NoSession).await.unwrap();
        store.save(session_id, 0, &in_progress()).await.unwrap();

        // Act
        let stale = store.save(session_id, 1, &PlayState::NoSession).await;

        // Assert
        assert!(matches!(
            stale,
            Err(DomainError::ConcurrencyConflict { actual: 2, .. })
        ));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemoryPlaySessionStore::new();
        let mine = SessionId::generate();
        let theirs = SessionId::generate();

        store.save(mine, 0, &in_progress()).await.unwrap();

        assert!(!store.load(theirs).await.unwrap().state.is_playing());
    }
}
