//! Trait abstraction over snapshot-producing endpoints.
//!
//! The [`SnapshotSource`] trait is the seam between the generic polling
//! synchronizer and concrete HTTP clients, and it is what lets tests swap
//! in a scripted [`crate::mock::MockSource`] without network access.

use async_trait::async_trait;

use crate::error::Result;

/// A remote data source that serves full-state snapshots and optionally
/// accepts control commands.
///
/// `fetch` returns the complete current state; the synchronizer replaces its
/// local copy wholesale on every success. `send` pushes one command and
/// `apply` is the pure local patch used for the optimistic update after a
/// successful send.
///
/// Read-only sources (e.g. the analysis endpoint) use an uninhabited
/// `Command` type, which makes `send_command` statically uncallable.
#[async_trait]
pub trait SnapshotSource: Send + Sync + 'static {
    /// Full-state record replaced wholesale on each successful fetch.
    type Snapshot: Clone + Default + Send + Sync + 'static;

    /// Control command accepted by the source's write path.
    type Command: Send + Sync + 'static;

    /// Fetch the current snapshot from the remote endpoint.
    async fn fetch(&self) -> Result<Self::Snapshot>;

    /// Send a command to the remote endpoint.
    async fn send(&self, command: &Self::Command) -> Result<()>;

    /// Patch the single field named by `command` into `snapshot`.
    ///
    /// Must be pure: no I/O, no awaiting. Called while holding the state
    /// cell's lock.
    fn apply(snapshot: &mut Self::Snapshot, command: &Self::Command);
}

/// Command type for sources that expose no write path.
///
/// Uninhabited, so `send`/`apply` for such sources are unreachable by
/// construction.
#[derive(Debug, Clone, Copy)]
pub enum NoCommand {}

/// Sharing a source between a synchronizer and direct callers is done by
/// wrapping it in `Arc`; the synchronizer takes ownership of its source.
#[async_trait]
impl<S: SnapshotSource> SnapshotSource for std::sync::Arc<S> {
    type Snapshot = S::Snapshot;
    type Command = S::Command;

    async fn fetch(&self) -> Result<Self::Snapshot> {
        (**self).fetch().await
    }

    async fn send(&self, command: &Self::Command) -> Result<()> {
        (**self).send(command).await
    }

    fn apply(snapshot: &mut Self::Snapshot, command: &Self::Command) {
        S::apply(snapshot, command);
    }
}
