//! Tracing setup for host applications embedding the engine.
//!
//! The crate itself only emits `tracing` events; a host that wants them
//! calls [`init_telemetry`] once at startup to install a JSON (bunyan)
//! subscriber filtered by `RUST_LOG`.

use anyhow::Context;
use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Installs the global tracing subscriber.
///
/// `default_filter` applies when `RUST_LOG` is not set (e.g. `"info"`).
/// Fails if a subscriber is already installed.
pub fn init_telemetry(service_name: &str, default_filter: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let formatting_layer = BunyanFormattingLayer::new(service_name.to_string(), std::io::stdout);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    set_global_default(subscriber).context("failed to install tracing subscriber")?;
    Ok(())
}
