//! Cookie-carried session identity.
//!
//! The random play state of a client is keyed by a UUID kept in an
//! HTTP-only cookie. A missing or unreadable cookie starts a new identity.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use trivia_core::session::SessionId;

/// Settings of the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    /// Cookie name.
    pub name: String,
    /// Whether the cookie is only sent over HTTPS.
    pub secure: bool,
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self {
            name: "trivia_session".to_owned(),
            secure: false,
        }
    }
}

impl SessionCookie {
    /// Returns the session identity carried by `jar`, minting and setting a
    /// new one when there is none. The returned jar must be part of the
    /// response so a new cookie reaches the client.
    #[must_use]
    pub fn resolve(&self, jar: CookieJar) -> (CookieJar, SessionId) {
        let existing = jar
            .get(&self.name)
            .and_then(|cookie| cookie.value().parse::<SessionId>().ok());
        if let Some(session_id) = existing {
            return (jar, session_id);
        }

        let session_id = SessionId::generate();
        let cookie = Cookie::build((self.name.clone(), session_id.to_string()))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .build();
        tracing::debug!(%session_id, "issued new session cookie");
        (jar.add(cookie), session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_a_valid_cookie() {
        // Arrange
        let known = SessionId::generate();
        let jar = CookieJar::new().add(Cookie::new("trivia_session", known.to_string()));

        // Act
        let (jar, session_id) = SessionCookie::default().resolve(jar);

        // Assert
        assert_eq!(session_id, known);
        assert_eq!(jar.iter().count(), 1);
    }

    #[test]
    fn test_resolve_issues_cookie_when_missing() {
        let (jar, session_id) = SessionCookie::default().resolve(CookieJar::new());

        let cookie = jar.get("trivia_session").unwrap();
        assert_eq!(cookie.value(), session_id.to_string());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_resolve_replaces_garbage_cookie() {
        let jar = CookieJar::new().add(Cookie::new("trivia_session", "not-a-uuid"));

        let (jar, session_id) = SessionCookie::default().resolve(jar);

        assert_eq!(jar.get("trivia_session").unwrap().value(), session_id.to_string());
    }
}
