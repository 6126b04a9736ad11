//! Mock snapshot source for testing.
//!
//! [`MockSource`] implements [`SnapshotSource`] so synchronizer behavior
//! can be tested without a device on the network.
//!
//! # Features
//!
//! - **Scripted fetches**: enqueue per-call results with optional latency,
//!   which makes overlapping-fetch scenarios reproducible
//! - **Failure injection**: fail all fallback fetches, or reject commands
//! - **Call counters**: observe how many fetches/sends were issued

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use farmsight_types::{SensorCommand, SensorSnapshot};

use crate::error::{Error, Result};
use crate::source::SnapshotSource;

/// One scripted fetch outcome.
#[derive(Debug, Clone)]
struct ScriptedFetch {
    delay: Duration,
    result: std::result::Result<SensorSnapshot, String>,
}

/// A mock field device for testing.
///
/// Scripted outcomes are consumed first, in order; once the script is
/// exhausted, fetches return the fallback snapshot (or the injected
/// failure message).
///
/// # Example
///
/// ```
/// use farmsight_core::{MockSource, SnapshotSource};
/// use farmsight_types::SensorSnapshot;
///
/// #[tokio::main]
/// async fn main() {
///     let source = MockSource::new();
///     source
///         .set_snapshot(SensorSnapshot {
///             temperature: 24.0,
///             ..Default::default()
///         })
///         .await;
///
///     let snapshot = source.fetch().await.unwrap();
///     assert_eq!(snapshot.temperature, 24.0);
///     assert_eq!(source.fetch_count(), 1);
/// }
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    script: Mutex<VecDeque<ScriptedFetch>>,
    fallback: Mutex<SensorSnapshot>,
    fail_message: Mutex<Option<String>>,
    reject_commands: AtomicBool,
    fetch_count: AtomicU32,
    send_count: AtomicU32,
    sent: Mutex<Vec<SensorCommand>>,
}

impl MockSource {
    /// Create a mock source serving the default (all-zero) snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source with a fallback snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: SensorSnapshot) -> Self {
        Self {
            fallback: Mutex::new(snapshot),
            ..Default::default()
        }
    }

    /// Replace the fallback snapshot served once the script is exhausted.
    pub async fn set_snapshot(&self, snapshot: SensorSnapshot) {
        *self.fallback.lock().await = snapshot;
    }

    /// Enqueue a successful fetch with the given latency.
    pub async fn enqueue_ok(&self, delay: Duration, snapshot: SensorSnapshot) {
        self.script.lock().await.push_back(ScriptedFetch {
            delay,
            result: Ok(snapshot),
        });
    }

    /// Enqueue a failing fetch with the given latency.
    pub async fn enqueue_err(&self, delay: Duration, message: &str) {
        self.script.lock().await.push_back(ScriptedFetch {
            delay,
            result: Err(message.to_string()),
        });
    }

    /// Make all fallback fetches fail with `message`.
    pub async fn fail_fetches(&self, message: &str) {
        *self.fail_message.lock().await = Some(message.to_string());
    }

    /// Clear an injected fetch failure.
    pub async fn clear_failure(&self) {
        *self.fail_message.lock().await = None;
    }

    /// Make `send` reject commands with an API error.
    pub fn reject_commands(&self, reject: bool) {
        self.reject_commands.store(reject, Ordering::SeqCst);
    }

    /// Number of fetches issued so far.
    #[must_use]
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::SeqCst)
    }

    /// Number of sends issued so far (accepted or rejected).
    #[must_use]
    pub fn send_count(&self) -> u32 {
        self.send_count.load(Ordering::SeqCst)
    }

    /// Commands accepted so far, in order.
    pub async fn sent_commands(&self) -> Vec<SensorCommand> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl SnapshotSource for MockSource {
    type Snapshot = SensorSnapshot;
    type Command = SensorCommand;

    async fn fetch(&self) -> Result<SensorSnapshot> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        let scripted = self.script.lock().await.pop_front();
        if let Some(step) = scripted {
            if !step.delay.is_zero() {
                tokio::time::sleep(step.delay).await;
            }
            return step.result.map_err(Error::invalid_data);
        }

        if let Some(message) = self.fail_message.lock().await.clone() {
            return Err(Error::invalid_data(message));
        }

        Ok(self.fallback.lock().await.clone())
    }

    async fn send(&self, command: &SensorCommand) -> Result<()> {
        self.send_count.fetch_add(1, Ordering::SeqCst);

        if self.reject_commands.load(Ordering::SeqCst) {
            return Err(Error::Api {
                status: 500,
                message: format!("rejected command {}", command.name()),
            });
        }

        self.sent.lock().await.push(*command);
        Ok(())
    }

    fn apply(snapshot: &mut SensorSnapshot, command: &SensorCommand) {
        snapshot.apply(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fallback_snapshot_and_counter() {
        let source = MockSource::with_snapshot(SensorSnapshot {
            humidity: 55.0,
            ..Default::default()
        });

        let snapshot = source.fetch().await.unwrap();
        assert_eq!(snapshot.humidity, 55.0);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_script_consumed_in_order() {
        let source = MockSource::new();
        source
            .enqueue_ok(
                Duration::ZERO,
                SensorSnapshot {
                    temperature: 1.0,
                    ..Default::default()
                },
            )
            .await;
        source.enqueue_err(Duration::ZERO, "boom").await;

        assert_eq!(source.fetch().await.unwrap().temperature, 1.0);
        assert!(source.fetch().await.is_err());
        // Script exhausted: back to the fallback.
        assert_eq!(source.fetch().await.unwrap().temperature, 0.0);
    }

    #[tokio::test]
    async fn test_injected_failure_and_recovery() {
        let source = MockSource::new();
        source.fail_fetches("device offline").await;
        assert!(source.fetch().await.is_err());

        source.clear_failure().await;
        assert!(source.fetch().await.is_ok());
    }

    #[tokio::test]
    async fn test_command_rejection() {
        let source = MockSource::new();
        source.reject_commands(true);

        let result = source.send(&SensorCommand::SpeakerEnabled(true)).await;
        assert!(matches!(result, Err(Error::Api { status: 500, .. })));
        assert_eq!(source.send_count(), 1);
        assert!(source.sent_commands().await.is_empty());
    }
}
