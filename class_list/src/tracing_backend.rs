// Copyright 2026 the class_list Authors
// SPDX-License-Identifier: Apache-2.0

//! Configures a suitable default [`tracing`] implementation for applications using this crate.
//!
//! On native targets this logs to stdout with a concise format and a filter which can be
//! overwritten using `RUST_LOG`. On the web, events go to the browser console.
//! This will include all [`DEBUG`](tracing::Level::DEBUG) messages in debug mode,
//! and all [`INFO`](tracing::Level::INFO) level messages in release mode.
//!
//! If a `tracing` backend is already configured, this will not overwrite that.

use std::error::Error;

use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::TracingSubscriberHasBeenSetError;

#[cfg(not(target_arch = "wasm32"))]
fn default_tracing_subscriber_native(
    default_level: LevelFilter,
) -> (impl Subscriber, Option<Box<dyn Error>>) {
    use time::macros::format_description;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::time::UtcTime;

    // Use EnvFilter to allow the user to override the log level without recompiling.
    let env_filter_builder = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("RUST_LOG");
    let err = env_filter_builder
        .from_env()
        .err()
        .map(|err| format!("failed to parse RUST_LOG environment variable: {err:#}").into());
    let env_filter = env_filter_builder.from_env_lossy();

    let timer = UtcTime::new(format_description!(
        // We append a `Z` here to indicate clearly that this is a UTC time
        "[hour repr:24]:[minute]:[second].[subsecond digits:3]Z"
    ));
    // If modifying, also update the module level docs
    let console_layer = tracing_subscriber::fmt::layer()
        .with_timer(timer)
        .with_target(false)
        .with_filter(env_filter);

    (tracing_subscriber::registry().with(console_layer), err)
}

#[cfg(target_arch = "wasm32")]
fn default_tracing_subscriber_wasm(
    max_level: LevelFilter,
) -> (impl Subscriber, Option<Box<dyn Error>>) {
    // Ignored if the panic hook is already set
    console_error_panic_hook::set_once();

    // `LevelFilter::OFF` has no level, in which case no layer is installed.
    let wasm_layer = max_level.into_level().map(|level| {
        let config = tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build();
        tracing_wasm::WASMLayer::new(config)
    });

    (tracing_subscriber::registry().with(wasm_layer), None)
}

/// Constructs a default tracing subscriber with a given `max_level` filter.
///
/// Also returns a recoverable error, e.g. when `RUST_LOG` couldn't be parsed.
pub fn default_tracing_subscriber(
    max_level: LevelFilter,
) -> (impl Subscriber, Option<Box<dyn Error>>) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        default_tracing_subscriber_native(max_level)
    }

    #[cfg(target_arch = "wasm32")]
    {
        default_tracing_subscriber_wasm(max_level)
    }
}

fn verify_subscriber_has_not_been_set() -> Result<(), TracingSubscriberHasBeenSetError> {
    // `has_been_set` is doc(hidden), but `tracing` itself depends on it for the whole 0.1 series.
    if tracing_core::dispatcher::has_been_set() {
        return Err(TracingSubscriberHasBeenSetError);
    }
    Ok(())
}

fn try_init_with_level(default_level: LevelFilter) -> Result<(), TracingSubscriberHasBeenSetError> {
    verify_subscriber_has_not_been_set()?;

    let (subscriber, err) = default_tracing_subscriber(default_level);

    // We may ignore potential errors here because we already checked that no subscriber has been set.
    let _ = tracing::subscriber::set_global_default(subscriber);
    if let Some(err) = err {
        tracing::error!(err, "Logging init had recoverable error");
    }

    Ok(())
}

/// Initialise tracing with a default subscriber for a unit test.
///
/// This only shows warnings and errors, to limit noise.
pub fn try_init_test_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    try_init_with_level(LevelFilter::WARN)
}

/// Initialise tracing with a default subscriber for an end-user application.
pub fn try_init_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    // Default level is DEBUG in --dev, INFO in --release.
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    try_init_with_level(default_level)
}
