//! # Brain Module
//!
//! The rule-based core behind the Krotoa chat widget. Classifies free-text
//! user input into a fixed set of banking intents and answers from canned
//! reply pools. No model, no I/O: a handful of ordered keyword rules.
//!
//! ## Components
//! - `intent`: ordered keyword-substring classification
//! - `responses`: per-intent reply pools with uniform-random selection
//! - [`Responder`]: the classify-then-draw entry point the widget calls

pub mod intent;
pub mod responses;

pub use intent::{Intent, IntentClassifier, IntentMatch};
pub use responses::ResponsePool;

use rand::Rng;
use tracing::debug;

use crate::error::AppError;

/// Classifier and reply selector in one: the `classify_and_respond`
/// contract of the chat widget.
///
/// Stateless apart from its static configuration; every call independently
/// re-samples the matched pool.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    classifier: IntentClassifier,
    pool: ResponsePool,
}

impl Responder {
    /// A responder over the built-in Peoples Bank reply pools.
    pub fn new() -> Self {
        Self::default()
    }

    /// A responder over a caller-supplied pool (must cover every category).
    pub fn with_pool(pool: ResponsePool) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            pool,
        }
    }

    /// Classifies the input without drawing a reply.
    pub fn classify(&self, text: &str) -> IntentMatch {
        self.classifier.classify(text)
    }

    /// Classifies the input and returns one reply from the matched pool.
    ///
    /// Never fails: unmatched input (including the empty string) answers
    /// from the default pool.
    pub fn classify_and_respond(&self, text: &str) -> String {
        self.respond_with(text, &mut rand::thread_rng())
    }

    /// Same as [`classify_and_respond`](Self::classify_and_respond) with an
    /// injected RNG, for deterministic callers.
    pub fn respond_with<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        let matched = self.classifier.classify(text);
        debug!(
            intent = matched.intent.label(),
            keyword = matched.keyword,
            "classified chat message"
        );
        self.pool.draw(matched.intent, rng).to_string()
    }

    /// The underlying reply pool.
    pub fn pool(&self) -> &ResponsePool {
        &self.pool
    }
}

/// Convenience constructor validating a custom pool before use.
pub fn responder_with_pools(
    pools: std::collections::HashMap<Intent, Vec<String>>,
) -> Result<Responder, AppError> {
    Ok(Responder::with_pool(ResponsePool::new(pools)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_comes_from_matched_pool() {
        let responder = Responder::new();

        let reply = responder.classify_and_respond("Where is the nearest branch?");
        assert!(responder
            .pool()
            .replies(Intent::Branches)
            .iter()
            .any(|r| *r == reply));
    }

    #[test]
    fn test_greeting_wins_over_balance() {
        let responder = Responder::new();

        let reply = responder.classify_and_respond("Hi, what's my balance?");
        assert!(responder
            .pool()
            .replies(Intent::Greeting)
            .iter()
            .any(|r| *r == reply));
    }

    #[test]
    fn test_gibberish_answers_from_default_pool() {
        let responder = Responder::new();

        let reply = responder.classify_and_respond("asdkjasd");
        assert!(responder
            .pool()
            .replies(Intent::Fallback)
            .iter()
            .any(|r| *r == reply));
    }
}
