//! Engine Tests
//!
//! The send/reply loop: seeded greeting, composing delay, pending-reply
//! serialization, cancellation on close/reset and the send throttle.
//! Delay behavior runs under `start_paused` so no test actually sleeps.

use std::time::Duration;

use crate::engine::{ChatEngine, ReplyDelay};
use crate::error::AppError;
use crate::session::{Sender, WELCOME_MESSAGE};

fn instant_engine() -> ChatEngine {
    ChatEngine::new().with_delay(ReplyDelay::none())
}

#[tokio::test]
async fn test_open_session_is_seeded() {
    let session = ChatEngine::new().open_session();
    let messages = session.messages().await;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender, Sender::Bot);
    assert_eq!(messages[0].text, WELCOME_MESSAGE);
    assert!(!session.is_typing().await);
}

#[tokio::test]
async fn test_send_appends_user_message_and_reply() {
    let engine = instant_engine();
    let session = engine.open_session();

    let reply = session
        .send_and_wait("Hi, what's my balance?")
        .await
        .expect("reply");
    assert_eq!(reply.sender, Sender::Bot);

    let messages = session.messages().await;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].sender, Sender::User);
    assert_eq!(messages[1].text, "Hi, what's my balance?");
    assert_eq!(messages[2].id, reply.id);
    assert!(messages.windows(2).all(|w| w[0].id < w[1].id));
    assert!(!session.is_typing().await);
}

#[tokio::test]
async fn test_input_is_trimmed_before_recording() {
    let engine = instant_engine();
    let session = engine.open_session();

    session.send_and_wait("  hello  ").await.expect("reply");
    assert_eq!(session.messages().await[1].text, "hello");
}

#[tokio::test]
async fn test_empty_send_records_nothing() {
    let session = ChatEngine::new().open_session();

    for input in ["", "   ", "\n\t"] {
        assert!(matches!(
            session.send(input).await,
            Err(AppError::EmptyMessage)
        ));
    }
    assert_eq!(session.messages().await.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_composing_indicator_spans_the_delay() {
    let engine = ChatEngine::new().with_delay(ReplyDelay::fixed(Duration::from_secs(1)));
    let session = engine.open_session();

    let reply = session.send("hello").await.expect("scheduled");
    assert!(session.is_typing().await);

    tokio::time::advance(Duration::from_millis(500)).await;
    assert!(session.is_typing().await, "still composing at 500ms");
    assert_eq!(session.messages().await.len(), 2, "no reply before the delay");

    tokio::time::advance(Duration::from_millis(600)).await;
    let message = reply.await.expect("reply after the delay");
    assert_eq!(message.sender, Sender::Bot);
    assert!(!session.is_typing().await);
    assert_eq!(session.messages().await.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_send_while_composing_is_rejected() {
    let engine = ChatEngine::new().with_delay(ReplyDelay::fixed(Duration::from_secs(1)));
    let session = engine.open_session();

    let _reply = session.send("hello").await.expect("scheduled");
    assert!(matches!(
        session.send("hello again").await,
        Err(AppError::ReplyPending)
    ));

    // the rejected send recorded nothing
    assert_eq!(session.messages().await.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_close_cancels_the_pending_reply() {
    let engine = ChatEngine::new().with_delay(ReplyDelay::fixed(Duration::from_secs(1)));
    let session = engine.open_session();

    let reply = session.send("hello").await.expect("scheduled");
    session.close().await;

    tokio::time::advance(Duration::from_secs(5)).await;
    assert!(reply.await.is_err(), "cancelled reply must not resolve");

    // greeting + user message, frozen; the bot reply never landed
    let messages = session.messages().await;
    assert_eq!(messages.len(), 2);
    assert!(!session.is_typing().await);
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_and_reseeds() {
    let engine = ChatEngine::new().with_delay(ReplyDelay::fixed(Duration::from_secs(1)));
    let session = engine.open_session();

    session.send("hello").await.expect("scheduled");
    session.reset().await;
    tokio::time::advance(Duration::from_secs(5)).await;

    let messages = session.messages().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, WELCOME_MESSAGE);

    // the restarted session accepts sends again
    let reply = session.send_and_wait("hey").await.expect("reply");
    assert_eq!(reply.sender, Sender::Bot);
}

#[tokio::test]
async fn test_send_after_close_fails() {
    let session = instant_engine().open_session();
    session.close().await;

    assert!(matches!(
        session.send("hello").await,
        Err(AppError::SessionClosed)
    ));
}

#[tokio::test]
async fn test_throttle_kicks_in() {
    let engine = instant_engine();
    let session = engine.open_session();

    for i in 0..20 {
        session
            .send_and_wait("hello")
            .await
            .unwrap_or_else(|e| panic!("send {i} failed: {e}"));
    }
    assert!(matches!(
        session.send("one too many").await,
        Err(AppError::RateLimited)
    ));
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let engine = instant_engine();
    let a = engine.open_session();
    let b = engine.open_session();

    assert_ne!(a.id(), b.id());

    a.send_and_wait("hello").await.expect("reply");
    assert_eq!(a.messages().await.len(), 3);
    assert_eq!(b.messages().await.len(), 1);
}
