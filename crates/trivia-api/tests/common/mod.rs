//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;
use trivia_core::clock::Clock;
use trivia_core::quiz::Quiz;
use trivia_core::rng::DeterministicRng;
use trivia_random_play::store::InMemoryPlaySessionStore;
use trivia_test_support::{
    FixedClock, InMemoryQuizRepository, InMemoryTipRepository, MockRng, SequenceRng, fixed_now,
};

use trivia_api::build_router;
use trivia_api::session::SessionCookie;
use trivia_api::state::AppState;

/// The full router plus handles on its in-memory backends.
pub struct TestApp {
    pub router: Router,
    pub quizzes: Arc<InMemoryQuizRepository>,
    pub tips: Arc<InMemoryTipRepository>,
    pub sessions: Arc<InMemoryPlaySessionStore>,
}

/// A response reduced to what the tests look at.
pub struct TestResponse {
    pub status: StatusCode,
    /// `name=value` of a `Set-Cookie` header, if one was sent.
    pub cookie: Option<String>,
    pub json: serde_json::Value,
}

/// Build the full app over in-memory repositories, drawing the lowest
/// pooled quiz every time.
pub fn build_test_app(quizzes: Vec<Quiz>) -> TestApp {
    build_with_rng(quizzes, Arc::new(Mutex::new(MockRng)))
}

/// Build the full app with a scripted RNG for tests that need a specific
/// draw order.
pub fn build_test_app_with_rng(quizzes: Vec<Quiz>, rng: SequenceRng) -> TestApp {
    build_with_rng(quizzes, Arc::new(Mutex::new(rng)))
}

fn build_with_rng(quizzes: Vec<Quiz>, rng: Arc<Mutex<dyn DeterministicRng + Send>>) -> TestApp {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(fixed_now()));
    let quiz_repository = Arc::new(InMemoryQuizRepository::new(quizzes));
    let tip_repository = Arc::new(InMemoryTipRepository::default());
    let session_store = Arc::new(InMemoryPlaySessionStore::new());
    let app_state = AppState::new(
        clock,
        rng,
        quiz_repository.clone(),
        tip_repository.clone(),
        session_store.clone(),
        SessionCookie::default(),
    );

    TestApp {
        router: build_router(app_state),
        quizzes: quiz_repository,
        tips: tip_repository,
        sessions: session_store,
    }
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_owned);
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    TestResponse {
        status,
        cookie,
        json,
    }
}

/// Send a GET request, optionally carrying a session cookie.
pub async fn get_json(app: &Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// Send a request with a JSON body.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Send a bodiless request with the given method.
pub async fn send_empty(app: &Router, method: &str, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}
