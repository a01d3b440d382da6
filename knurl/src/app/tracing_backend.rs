// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! Configures a suitable default [`tracing`] implementation for a host embedding knurl.
//!
//! Console output uses a compact format: UTC time of day with millisecond precision, no
//! target. The filter defaults to [`DEBUG`](tracing::Level::DEBUG) in debug builds and
//! [`INFO`](tracing::Level::INFO) in release builds, and can be overridden with `RUST_LOG`.
//! In debug builds, every event is also written to a `knurl-*.log` file in the
//! temporary directory, regardless of the filter.
//!
//! If a `tracing` backend is already configured, this will not overwrite it.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use time::macros::format_description;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

/// Where the full debug log goes, named after the current time.
fn log_file_path() -> PathBuf {
    let id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    std::env::temp_dir().join(format!("knurl-{id:016}.log"))
}

/// Constructs a default tracing subscriber with a given `max_level` filter.
///
/// Returns the subscriber, and the error in case of a recoverable error: an invalid
/// `RUST_LOG`, or a log file which couldn't be created.
pub fn default_tracing_subscriber(
    max_level: LevelFilter,
) -> (impl Subscriber, Option<Box<dyn Error>>) {
    let mut errors: Vec<String> = Vec::new();

    let env_filter_builder = EnvFilter::builder()
        .with_default_directive(max_level.into())
        .with_env_var("RUST_LOG");
    if let Err(err) = env_filter_builder.from_env() {
        errors.push(format!("failed to parse RUST_LOG environment variable: {err:#}"));
    }
    let env_filter = env_filter_builder.from_env_lossy();

    // We append a `Z` to make clear this is UTC.
    let timer = UtcTime::new(format_description!(
        "[hour repr:24]:[minute]:[second].[subsecond digits:3]Z"
    ));
    let console_layer = tracing_subscriber::fmt::layer()
        .with_timer(timer.clone())
        .with_target(false)
        .with_filter(env_filter);

    // Skipped in release builds, for performance.
    let log_file_layer = if cfg!(debug_assertions) {
        let path = log_file_path();
        match File::create(&path) {
            Ok(file) => {
                #[allow(clippy::print_stderr, reason = "Tracing isn't set up yet")]
                {
                    eprintln!("---");
                    eprintln!("Writing full logs to {}", path.display());
                    eprintln!("---");
                }
                // Unfiltered: this layer logs every event.
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_timer(timer)
                        .with_writer(file)
                        .with_ansi(false),
                )
            }
            Err(err) => {
                errors.push(format!(
                    "failed to create log file {}: {err}",
                    path.display()
                ));
                None
            }
        }
    } else {
        None
    };

    let registry = tracing_subscriber::registry()
        .with(console_layer)
        .with(log_file_layer);

    let err = (!errors.is_empty()).then(|| errors.join("; ").into());
    (registry, err)
}

/// An Error indicating that a tracing subscriber has been set before.
#[derive(Debug)]
pub struct TracingSubscriberHasBeenSetError;

impl fmt::Display for TracingSubscriberHasBeenSetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad("A tracing subscriber has been set before.")
    }
}

impl Error for TracingSubscriberHasBeenSetError {}

/// Verify that a tracing subscriber has not been set before or return with an error.
fn verify_subscriber_has_not_been_set() -> Result<(), TracingSubscriberHasBeenSetError> {
    // `has_been_set` is doc(hidden), but `tracing` itself relies on it.
    if tracing_core::dispatcher::has_been_set() {
        return Err(TracingSubscriberHasBeenSetError);
    }
    Ok(())
}

fn init_with_level(default_level: LevelFilter) -> Result<(), TracingSubscriberHasBeenSetError> {
    verify_subscriber_has_not_been_set()?;

    let (subscriber, err) = default_tracing_subscriber(default_level);

    // Can't fail: we just checked that no subscriber has been set.
    let _ = tracing::subscriber::set_global_default(subscriber);
    if let Some(err) = err {
        tracing::error!("Initialising logging encountered recoverable error: {err}");
    }

    Ok(())
}

/// Initialise tracing with a default subscriber for a unit test.
///
/// Only warnings and errors reach the console, to limit noise.
pub fn try_init_test_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    init_with_level(LevelFilter::WARN)
}

/// Initialise tracing with a default subscriber for an application.
pub fn try_init_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    // DEBUG logs a few lines per gesture; INFO only noteworthy things.
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    init_with_level(default_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_init_test_tracing_errors() {
        let _first_result = try_init_test_tracing();
        let second_result = try_init_test_tracing();
        assert!(second_result.is_err());
    }

    #[test]
    fn log_files_are_prefixed() {
        let path = log_file_path();
        let name = path.file_name().and_then(|name| name.to_str()).unwrap();
        assert!(name.starts_with("knurl-"));
        assert!(name.ends_with(".log"));
    }
}
