//! Integration tests for random play, driven through the session cookie.

mod common;

use axum::http::StatusCode;
use trivia_test_support::{SequenceRng, quiz};

fn arithmetic() -> Vec<trivia_core::quiz::Quiz> {
    vec![quiz(1, "2+2", "4"), quiz(2, "3+3", "6")]
}

#[tokio::test]
async fn test_all_correct_answers_win_and_clear_the_session() {
    // Second quiz of the pool first, then the only one left.
    let app = common::build_test_app_with_rng(arithmetic(), SequenceRng::new(vec![1, 0]));

    // GET /randomplay starts a play-through and issues the cookie.
    let first = common::get_json(&app.router, "/randomplay", None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.json["view"], "random_play");
    assert_eq!(first.json["quiz"]["id"], 2);
    assert_eq!(first.json["score"], 0);
    let cookie = first.cookie.expect("session cookie issued");

    // Correct answer: continue with score 1.
    let checked = common::get_json(&app.router, "/randomcheck/2?answer=6", Some(&cookie)).await;
    assert_eq!(checked.status, StatusCode::OK);
    assert_eq!(checked.json["view"], "random_result");
    assert_eq!(checked.json["result"], true);
    assert_eq!(checked.json["score"], 1);

    let progress = common::get_json(&app.router, "/randomplay/progress", Some(&cookie)).await;
    assert_eq!(progress.json["remaining"], 1);

    // The other quiz comes next.
    let second = common::get_json(&app.router, "/randomplay", Some(&cookie)).await;
    assert_eq!(second.json["quiz"]["id"], 1);
    assert_eq!(second.json["score"], 1);

    // Last correct answer wins.
    let won = common::get_json(&app.router, "/randomcheck/1?answer=4", Some(&cookie)).await;
    assert_eq!(won.status, StatusCode::OK);
    assert_eq!(won.json["view"], "random_nomore");
    assert_eq!(won.json["score"], 2);
    assert_eq!(app.sessions.active_sessions().unwrap(), 0);
}

#[tokio::test]
async fn test_repeated_play_requests_offer_the_same_question() {
    // A single scripted draw: a second draw would panic the RNG.
    let app = common::build_test_app_with_rng(arithmetic(), SequenceRng::new(vec![1]));

    let first = common::get_json(&app.router, "/randomplay", None).await;
    let cookie = first.cookie.unwrap();
    let again = common::get_json(&app.router, "/randomplay", Some(&cookie)).await;

    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.json["quiz"]["id"], first.json["quiz"]["id"]);
    assert_eq!(again.json["score"], 0);
}

#[tokio::test]
async fn test_wrong_first_answer_loses_with_zero_and_restarts_fresh() {
    let app = common::build_test_app(arithmetic());

    let first = common::get_json(&app.router, "/randomplay", None).await;
    let cookie = first.cookie.unwrap();

    let lost = common::get_json(&app.router, "/randomcheck/1?answer=5", Some(&cookie)).await;
    assert_eq!(lost.status, StatusCode::OK);
    assert_eq!(lost.json["view"], "random_result");
    assert_eq!(lost.json["result"], false);
    assert_eq!(lost.json["score"], 0);
    assert_eq!(app.sessions.active_sessions().unwrap(), 0);

    // Nothing is pending any more, so a replayed check is rejected.
    let replay = common::get_json(&app.router, "/randomcheck/1?answer=4", Some(&cookie)).await;
    assert_eq!(replay.status, StatusCode::BAD_REQUEST);
    assert_eq!(replay.json["error"], "invalid_state");

    // The next play reseeds the full pool.
    common::get_json(&app.router, "/randomplay", Some(&cookie)).await;
    let progress = common::get_json(&app.router, "/randomplay/progress", Some(&cookie)).await;
    assert_eq!(progress.json["playing"], true);
    assert_eq!(progress.json["remaining"], 2);
    assert_eq!(progress.json["score"], 0);
}

#[tokio::test]
async fn test_resubmitted_wrong_answer_for_answered_quiz_ends_play() {
    let app = common::build_test_app(arithmetic());
    let first = common::get_json(&app.router, "/randomplay", None).await;
    let cookie = first.cookie.unwrap();
    let correct = common::get_json(&app.router, "/randomcheck/1?answer=4", Some(&cookie)).await;
    assert_eq!(correct.json["score"], 1);

    // The browser goes back and submits a wrong answer to quiz 1 again.
    let lost = common::get_json(&app.router, "/randomcheck/1?answer=5", Some(&cookie)).await;

    assert_eq!(lost.status, StatusCode::OK);
    assert_eq!(lost.json["view"], "random_result");
    assert_eq!(lost.json["result"], false);
    assert_eq!(lost.json["score"], 1);
    assert_eq!(app.sessions.active_sessions().unwrap(), 0);
}

#[tokio::test]
async fn test_correct_answer_to_question_not_shown_is_400() {
    let app = common::build_test_app(arithmetic());
    let first = common::get_json(&app.router, "/randomplay", None).await;
    assert_eq!(first.json["quiz"]["id"], 1);
    let cookie = first.cookie.unwrap();

    let response = common::get_json(&app.router, "/randomcheck/2?answer=6", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["error"], "invalid_state");
    let progress = common::get_json(&app.router, "/randomplay/progress", Some(&cookie)).await;
    assert_eq!(progress.json["score"], 0);
    assert_eq!(progress.json["current_quiz_id"], 1);
}

#[tokio::test]
async fn test_sessions_are_isolated_per_cookie() {
    let app = common::build_test_app(arithmetic());

    let alice = common::get_json(&app.router, "/randomplay", None).await;
    let bob = common::get_json(&app.router, "/randomplay", None).await;
    let alice_cookie = alice.cookie.unwrap();
    let bob_cookie = bob.cookie.unwrap();
    assert_ne!(alice_cookie, bob_cookie);

    common::get_json(&app.router, "/randomcheck/1?answer=4", Some(&alice_cookie)).await;

    let alice_progress =
        common::get_json(&app.router, "/randomplay/progress", Some(&alice_cookie)).await;
    let bob_progress =
        common::get_json(&app.router, "/randomplay/progress", Some(&bob_cookie)).await;
    assert_eq!(alice_progress.json["score"], 1);
    assert_eq!(bob_progress.json["score"], 0);
    assert_eq!(bob_progress.json["remaining"], 2);
}

#[tokio::test]
async fn test_quiz_deleted_mid_play_is_skipped() {
    let app = common::build_test_app(arithmetic());
    let first = common::get_json(&app.router, "/randomplay", None).await;
    let cookie = first.cookie.unwrap();
    common::get_json(&app.router, "/randomcheck/1?answer=4", Some(&cookie)).await;

    // Quiz 2 is removed before it is shown.
    let deleted = common::send_empty(&app.router, "DELETE", "/quizzes/2").await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let next = common::get_json(&app.router, "/randomplay", Some(&cookie)).await;
    assert_eq!(next.json["view"], "random_nomore");
    assert_eq!(next.json["score"], 1);
}

#[tokio::test]
async fn test_check_of_unknown_quiz_is_404() {
    let app = common::build_test_app(arithmetic());
    let first = common::get_json(&app.router, "/randomplay", None).await;
    let cookie = first.cookie.unwrap();

    let response = common::get_json(&app.router, "/randomcheck/42?answer=4", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json["error"], "quiz_not_found");
    // The pending question is untouched.
    let progress = common::get_json(&app.router, "/randomplay/progress", Some(&cookie)).await;
    assert_eq!(progress.json["current_quiz_id"], 1);
}
