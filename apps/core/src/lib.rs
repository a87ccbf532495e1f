//! # Krotoa Core
//!
//! The engine behind the Peoples Bank demo front-end: a rule-based chat
//! assistant plus the in-memory demo data and derived figures the pages
//! render. Everything is mock data - there is no backend, no persistence
//! and no real authentication. "Login" sets a flag and "balances" are
//! hard-coded constants.
//!
//! ## Modules
//! - [`brain`]: keyword intent classification and canned reply selection
//! - [`engine`]: the send/reply loop with composing delay and cancellation
//! - [`session`]: append-only per-widget conversation state
//! - [`dataset`]: the static demo dataset (customer, accounts, branches)
//! - [`dashboard`]: balance aggregation, transaction filtering, ZAR formatting
//! - [`auth`]: the demo sign-in flag
//! - [`telemetry`]: tracing subscriber installation for hosts
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use krotoa_core::engine::ChatEngine;
//!
//! let engine = ChatEngine::new();
//! let session = engine.open_session();
//! let reply = session.send_and_wait("Where is the nearest branch?").await?;
//! println!("{}", reply.text);
//! ```

pub mod auth;
pub mod brain;
pub mod dashboard;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod models;
pub mod rate_limiter;
pub mod session;
pub mod telemetry;

pub use brain::{Intent, IntentClassifier, Responder, ResponsePool};
pub use engine::{ChatEngine, OpenSession, ReplyDelay};
pub use error::AppError;
pub use session::{ChatMessage, ChatSession, Sender};

#[cfg(test)]
mod tests;
