//! Test Module
//!
//! Cross-module test suites for the demo assistant core.
//!
//! ## Test Categories
//! - `brain_tests`: intent classification and reply-pool selection
//! - `engine_tests`: the send/reply loop, delays, cancellation, throttling
//! - `bank_tests`: demo dataset, dashboard figures and the sign-in flag

pub mod engine_tests;
