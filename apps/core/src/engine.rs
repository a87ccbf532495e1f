//! Chat engine: the cooperative send/reply loop behind the widget.
//!
//! Input is serialized through one open session, so there is never a
//! concurrent classification for the same conversation. Each send appends
//! the user message, classifies it, and schedules the bot reply after a
//! base-plus-jitter delay while the composing indicator is shown. Closing
//! or restarting the session cancels a pending reply so a discarded
//! conversation is never updated.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::brain::Responder;
use crate::error::AppError;
use crate::rate_limiter::SendThrottle;
use crate::session::{ChatMessage, ChatSession};

/// Default artificial reply delay: a one second base plus up to one second
/// of jitter, the cadence of the original widget.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_JITTER: Duration = Duration::from_millis(1000);

/// How many sends one session may fire per minute before being throttled.
const SENDS_PER_MINUTE: usize = 20;

/// The artificial "composing" delay before a bot reply appears.
#[derive(Debug, Clone, Copy)]
pub struct ReplyDelay {
    base: Duration,
    jitter: Duration,
}

impl ReplyDelay {
    pub const fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    /// A fixed delay with no jitter, mainly for deterministic tests.
    pub const fn fixed(base: Duration) -> Self {
        Self::new(base, Duration::ZERO)
    }

    /// An immediate reply (no sleep at all).
    pub const fn none() -> Self {
        Self::fixed(Duration::ZERO)
    }

    /// Draws one delay: base plus a uniform slice of the jitter.
    pub fn sample(&self) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.base;
        }
        self.base + Duration::from_millis(rand::thread_rng().gen_range(0..jitter_ms))
    }
}

impl Default for ReplyDelay {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DELAY, DEFAULT_JITTER)
    }
}

struct EngineShared {
    responder: Responder,
    delay: ReplyDelay,
    throttle: Mutex<SendThrottle>,
}

/// Factory for open chat sessions. Cheap to clone; all sessions share the
/// responder configuration and the send throttle.
#[derive(Clone)]
pub struct ChatEngine {
    shared: Arc<EngineShared>,
}

impl ChatEngine {
    /// An engine over the built-in Krotoa responder and default delay.
    pub fn new() -> Self {
        Self::with_responder(Responder::new())
    }

    pub fn with_responder(responder: Responder) -> Self {
        Self {
            shared: Arc::new(EngineShared {
                responder,
                delay: ReplyDelay::default(),
                throttle: Mutex::new(SendThrottle::new(
                    SENDS_PER_MINUTE,
                    Duration::from_secs(60),
                )),
            }),
        }
    }

    /// Replaces the reply delay (e.g. [`ReplyDelay::none`] in tests).
    pub fn with_delay(self, delay: ReplyDelay) -> Self {
        let shared = Arc::new(EngineShared {
            responder: self.shared.responder.clone(),
            delay,
            throttle: Mutex::new(SendThrottle::new(
                SENDS_PER_MINUTE,
                Duration::from_secs(60),
            )),
        });
        Self { shared }
    }

    /// Opens a new widget session, seeded with the welcome greeting.
    pub fn open_session(&self) -> OpenSession {
        let state = ChatSession::new();
        let id = state.id.clone();
        info!(session_id = %id, "chat session opened");
        OpenSession {
            id,
            shared: Arc::clone(&self.shared),
            state: Arc::new(Mutex::new(state)),
            pending: Mutex::new(None),
        }
    }
}

impl Default for ChatEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One open chat widget bound to its engine.
pub struct OpenSession {
    id: String,
    shared: Arc<EngineShared>,
    state: Arc<Mutex<ChatSession>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl OpenSession {
    /// The stable session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Submits a user message.
    ///
    /// Validates the input (empty or whitespace-only sends record nothing),
    /// appends the user message, and schedules the bot reply after the
    /// engine's delay. The returned receiver resolves with the bot message
    /// once it has been appended; it errs if the session closes first.
    ///
    /// A send while a previous reply is still composing fails with
    /// [`AppError::ReplyPending`], mirroring the widget's disabled send
    /// button.
    pub async fn send(&self, text: &str) -> Result<oneshot::Receiver<ChatMessage>, AppError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AppError::EmptyMessage);
        }

        let mut pending = self.pending.lock().await;
        if pending.as_ref().is_some_and(|task| !task.is_finished()) {
            return Err(AppError::ReplyPending);
        }

        if !self.shared.throttle.lock().await.allow(&self.id) {
            return Err(AppError::RateLimited);
        }

        {
            let mut state = self.state.lock().await;
            state.push_user(trimmed)?;
            state.set_typing(true);
        }

        let reply_text = self.shared.responder.classify_and_respond(trimmed);
        let delay = self.shared.delay.sample();
        debug!(session_id = %self.id, delay_ms = delay.as_millis() as u64, "reply scheduled");

        let (reply_tx, reply_rx) = oneshot::channel();
        let state = Arc::clone(&self.state);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut session = state.lock().await;
            session.set_typing(false);
            // A session closed mid-compose swallows the reply.
            if let Ok(message) = session.push_bot(reply_text) {
                let _ = reply_tx.send(message.clone());
            }
        });
        *pending = Some(task);

        Ok(reply_rx)
    }

    /// [`send`](Self::send), then waits for the bot reply.
    pub async fn send_and_wait(&self, text: &str) -> Result<ChatMessage, AppError> {
        let reply = self.send(text).await?;
        reply.await.map_err(|_| AppError::SessionClosed)
    }

    /// Snapshot of the conversation history, oldest first.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.state.lock().await.messages().to_vec()
    }

    /// Whether the composing indicator should be shown.
    pub async fn is_typing(&self) -> bool {
        self.state.lock().await.is_typing()
    }

    async fn cancel_pending(&self) {
        if let Some(task) = self.pending.lock().await.take() {
            task.abort();
        }
    }

    /// Closes the widget: cancels any pending reply and freezes the log.
    pub async fn close(&self) {
        self.cancel_pending().await;
        self.state.lock().await.close();
        self.shared.throttle.lock().await.forget(&self.id);
        info!(session_id = %self.id, "chat session closed");
    }

    /// Restarts the widget: cancels any pending reply and resets the log to
    /// the single seeded greeting.
    pub async fn reset(&self) {
        self.cancel_pending().await;
        self.state.lock().await.reset();
        debug!(session_id = %self.id, "chat session reset");
    }
}
