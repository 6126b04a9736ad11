//! Generic polling synchronizer for remote snapshots.
//!
//! A [`Synchronizer`] keeps a local copy of one remote data source fresh:
//! it fetches immediately on start, re-fetches on a fixed interval, exposes
//! a manual [`refresh`](Synchronizer::refresh), and pushes user commands
//! back through the source with an optimistic local patch followed by a
//! reconciling fetch.
//!
//! Ticks never wait for in-flight fetches, so a slow response can overlap
//! the next tick. Every fetch is tagged with a monotonically increasing
//! sequence number and a completion is only committed when it is newer than
//! the last committed one — last-issued-wins, not last-arrived-wins.
//!
//! The poll loop is an owned tokio task with graceful shutdown via a
//! cancellation token; dropping the synchronizer cancels it, so teardown is
//! guaranteed by scope exit.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use time::OffsetDateTime;
use tokio::sync::watch;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::source::SnapshotSource;

/// Options for a polling synchronizer.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Interval between scheduled fetches.
    pub poll_interval: Duration,
    /// Delay between a successful command send and the reconciling fetch.
    pub reconcile_delay: Duration,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(3500),
            reconcile_delay: Duration::from_millis(500),
        }
    }
}

impl SyncOptions {
    /// Options tuned for the field device (3.5 s poll).
    #[must_use]
    pub fn device() -> Self {
        Self::default()
    }

    /// Options tuned for the analysis endpoint (30 s poll).
    #[must_use]
    pub fn analysis() -> Self {
        Self {
            poll_interval: Duration::from_secs(30),
            ..Default::default()
        }
    }

    /// Options with a specific poll interval.
    #[must_use]
    pub fn with_interval(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval.is_zero() {
            return Err(Error::invalid_config("poll_interval must be > 0"));
        }
        if self.reconcile_delay.is_zero() {
            return Err(Error::invalid_config("reconcile_delay must be > 0"));
        }
        Ok(())
    }
}

/// Observable state of one synchronized data source.
///
/// The snapshot is always the last good value: a failed fetch sets
/// `last_error` but never blanks the data (stale-but-available policy).
#[derive(Debug, Clone)]
pub struct SyncState<T> {
    /// Last successfully fetched snapshot (optimistic patches included).
    pub snapshot: T,
    /// Error message from the most recent failed fetch, cleared on success.
    pub last_error: Option<String>,
    /// When the snapshot was last replaced by a successful fetch.
    pub updated_at: Option<OffsetDateTime>,
    revision: u64,
}

impl<T: Default> Default for SyncState<T> {
    fn default() -> Self {
        Self {
            snapshot: T::default(),
            last_error: None,
            updated_at: None,
            revision: 0,
        }
    }
}

impl<T> SyncState<T> {
    /// Monotonic revision counter; bumps on every commit and patch.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether any fetch has succeeded since start.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.updated_at.is_some()
    }
}

/// A background polling task keeping a [`SyncState`] fresh.
///
/// # Example
///
/// ```no_run
/// use farmsight_core::{DeviceClient, SyncOptions, Synchronizer};
/// use farmsight_types::SensorCommand;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DeviceClient::new("http://192.168.1.50")?;
/// let sync = Synchronizer::start(client, SyncOptions::device())?;
///
/// let mut rx = sync.subscribe();
/// rx.changed().await?;
/// println!("temperature: {:.1}", rx.borrow().snapshot.temperature);
///
/// sync.send_command(SensorCommand::WaterPumpActive(true)).await?;
/// sync.stop();
/// # Ok(())
/// # }
/// ```
pub struct Synchronizer<S: SnapshotSource> {
    inner: Arc<SyncInner<S>>,
    cancel_token: CancellationToken,
    handle: tokio::task::JoinHandle<()>,
}

struct SyncInner<S: SnapshotSource> {
    source: S,
    state: watch::Sender<SyncState<S::Snapshot>>,
    issued: AtomicU64,
    reconcile_delay: Duration,
    cancel_token: CancellationToken,
}

impl<S: SnapshotSource> Synchronizer<S> {
    /// Start polling: an immediate fetch, then one per interval tick.
    pub fn start(source: S, options: SyncOptions) -> Result<Self> {
        options.validate()?;

        let cancel_token = CancellationToken::new();
        let (state, _) = watch::channel(SyncState::default());
        let inner = Arc::new(SyncInner {
            source,
            state,
            issued: AtomicU64::new(0),
            reconcile_delay: options.reconcile_delay,
            cancel_token: cancel_token.clone(),
        });

        let task_token = cancel_token.clone();
        let task_inner = Arc::clone(&inner);
        let handle = tokio::spawn(async move {
            let mut ticker = interval(options.poll_interval);
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => {
                        debug!("poll task cancelled, stopping");
                        break;
                    }
                    _ = ticker.tick() => {
                        // Ticks never wait for in-flight fetches; stale
                        // completions are rejected at commit time.
                        let fetch_inner = Arc::clone(&task_inner);
                        tokio::spawn(async move {
                            fetch_once(&fetch_inner).await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            inner,
            cancel_token,
            handle,
        })
    }

    /// Clone of the current sync state.
    #[must_use]
    pub fn state(&self) -> SyncState<S::Snapshot> {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver observes every committed fetch and optimistic patch.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SyncState<S::Snapshot>> {
        self.inner.state.subscribe()
    }

    /// Issue a manual fetch now, outside the poll schedule.
    ///
    /// The result lands in the sync state like any scheduled fetch: a
    /// failure sets the error field and keeps the previous snapshot.
    pub async fn refresh(&self) {
        fetch_once(&self.inner).await;
    }

    /// Send a command to the source and optimistically patch local state.
    ///
    /// On send success the named field is patched immediately under a fresh
    /// sequence number (so older in-flight fetches cannot clobber it) and a
    /// reconciling fetch is scheduled after the configured delay.
    ///
    /// On send failure the patch is not applied: local state keeps its
    /// pre-command value and the error is returned to the caller.
    pub async fn send_command(&self, command: S::Command) -> Result<()> {
        if let Err(e) = self.inner.source.send(&command).await {
            warn!(error = %e, "command send failed, local state unchanged");
            return Err(e);
        }

        let seq = self.inner.next_seq();
        self.inner.state.send_modify(|state| {
            state.revision = seq;
            S::apply(&mut state.snapshot, &command);
        });

        let inner = Arc::clone(&self.inner);
        let token = self.cancel_token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(inner.reconcile_delay) => {
                    fetch_once(&inner).await;
                }
            }
        });

        Ok(())
    }

    /// Stop the poll task gracefully.
    pub fn stop(self) {
        self.cancel_token.cancel();
    }

    /// Whether the poll task is still running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Whether the synchronizer has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

impl<S: SnapshotSource> Drop for Synchronizer<S> {
    fn drop(&mut self) {
        // Guarantees the poll task stops even when stop() was never called.
        self.cancel_token.cancel();
    }
}

impl<S: SnapshotSource> SyncInner<S> {
    fn next_seq(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn commit(&self, seq: u64, result: Result<S::Snapshot>) {
        if self.cancel_token.is_cancelled() {
            debug!(seq, "synchronizer stopped, discarding fetch result");
            return;
        }

        self.state.send_modify(|state| {
            if seq <= state.revision {
                debug!(
                    seq,
                    committed = state.revision,
                    "discarding stale fetch result"
                );
                return;
            }
            state.revision = seq;
            match result {
                Ok(snapshot) => {
                    state.snapshot = snapshot;
                    state.last_error = None;
                    state.updated_at = Some(OffsetDateTime::now_utc());
                }
                Err(e) => {
                    // Keep the last good snapshot; surface the error only.
                    warn!(error = %e, "fetch failed, keeping previous snapshot");
                    state.last_error = Some(e.to_string());
                }
            }
        });
    }
}

async fn fetch_once<S: SnapshotSource>(inner: &SyncInner<S>) {
    let seq = inner.next_seq();
    let result = inner.source.fetch().await;
    inner.commit(seq, result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let opts = SyncOptions::default();
        assert_eq!(opts.poll_interval, Duration::from_millis(3500));
        assert_eq!(opts.reconcile_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_options_analysis_interval() {
        let opts = SyncOptions::analysis();
        assert_eq!(opts.poll_interval, Duration::from_secs(30));
        assert_eq!(opts.reconcile_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_options_validate_rejects_zero_interval() {
        let opts = SyncOptions::with_interval(Duration::ZERO);
        assert!(opts.validate().is_err());

        let opts = SyncOptions {
            reconcile_delay: Duration::ZERO,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_state_default_has_no_data() {
        let state = SyncState::<u32>::default();
        assert!(!state.has_data());
        assert_eq!(state.revision(), 0);
        assert!(state.last_error.is_none());
    }
}
