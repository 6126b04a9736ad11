//! Integration tests for the polling synchronizer against a mock source.
//!
//! All tests run on a paused tokio clock (`start_paused`), so interval and
//! delay behavior is deterministic and the tests complete instantly.

use std::sync::Arc;
use std::time::Duration;

use farmsight_core::{MockSource, SyncOptions, Synchronizer};
use farmsight_types::{SensorCommand, SensorSnapshot};

fn snapshot_with_temperature(temperature: f64) -> SensorSnapshot {
    SensorSnapshot {
        temperature,
        ..Default::default()
    }
}

/// A long interval so scheduled polls don't interfere with a scenario.
fn quiet_options() -> SyncOptions {
    SyncOptions::with_interval(Duration::from_secs(3600))
}

#[tokio::test(start_paused = true)]
async fn initial_fetch_is_immediate() {
    let source = Arc::new(MockSource::with_snapshot(snapshot_with_temperature(21.5)));
    let sync = Synchronizer::start(Arc::clone(&source), quiet_options()).unwrap();

    tokio::time::sleep(Duration::from_millis(1)).await;

    assert_eq!(source.fetch_count(), 1);
    let state = sync.state();
    assert!(state.has_data());
    assert_eq!(state.snapshot.temperature, 21.5);
    assert!(state.last_error.is_none());

    sync.stop();
}

#[tokio::test(start_paused = true)]
async fn polls_on_every_tick() {
    let source = Arc::new(MockSource::new());
    let sync = Synchronizer::start(
        Arc::clone(&source),
        SyncOptions::with_interval(Duration::from_millis(100)),
    )
    .unwrap();

    tokio::time::sleep(Duration::from_secs(1)).await;

    // Ticks at 0ms, 100ms, ..., 1000ms.
    assert!(source.fetch_count() >= 10, "got {}", source.fetch_count());

    sync.stop();
}

#[tokio::test(start_paused = true)]
async fn successful_fetch_replaces_snapshot_wholesale() {
    let source = Arc::new(MockSource::new());
    source
        .enqueue_ok(Duration::ZERO, snapshot_with_temperature(18.0))
        .await;
    source
        .set_snapshot(SensorSnapshot {
            temperature: 19.0,
            water_pump_active: true,
            ..Default::default()
        })
        .await;

    let sync = Synchronizer::start(Arc::clone(&source), quiet_options()).unwrap();
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(sync.state().snapshot.temperature, 18.0);
    assert!(!sync.state().snapshot.water_pump_active);

    sync.refresh().await;
    let state = sync.state();
    assert_eq!(state.snapshot.temperature, 19.0);
    assert!(state.snapshot.water_pump_active);

    sync.stop();
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_keeps_last_good_snapshot_and_sets_error() {
    let source = Arc::new(MockSource::with_snapshot(snapshot_with_temperature(25.0)));
    let sync = Synchronizer::start(Arc::clone(&source), quiet_options()).unwrap();
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(sync.state().snapshot.temperature, 25.0);

    source.fail_fetches("device offline").await;
    sync.refresh().await;

    let state = sync.state();
    assert_eq!(state.snapshot.temperature, 25.0, "stale data must survive");
    let error = state.last_error.expect("error flag must be set");
    assert!(error.contains("device offline"));

    // Recovery on the next successful fetch clears the flag.
    source.clear_failure().await;
    sync.refresh().await;
    assert!(sync.state().last_error.is_none());

    sync.stop();
}

#[tokio::test(start_paused = true)]
async fn command_success_patches_optimistically_and_reconciles() {
    let source = Arc::new(MockSource::new());
    let sync = Synchronizer::start(Arc::clone(&source), quiet_options()).unwrap();
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(source.fetch_count(), 1);
    assert!(!sync.state().snapshot.water_pump_active);

    sync.send_command(SensorCommand::WaterPumpActive(true))
        .await
        .unwrap();

    // Patch is visible immediately, before any reconciling fetch.
    assert!(sync.state().snapshot.water_pump_active);
    assert_eq!(source.sent_commands().await, vec![SensorCommand::WaterPumpActive(true)]);
    assert_eq!(source.fetch_count(), 1);

    // The reconcile fetch fires after the 500 ms delay, not before.
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(source.fetch_count(), 1);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(source.fetch_count(), 2);

    sync.stop();
}

#[tokio::test(start_paused = true)]
async fn command_failure_leaves_state_untouched() {
    let source = Arc::new(MockSource::with_snapshot(snapshot_with_temperature(22.0)));
    let sync = Synchronizer::start(Arc::clone(&source), quiet_options()).unwrap();
    tokio::time::sleep(Duration::from_millis(1)).await;

    source.reject_commands(true);
    let result = sync.send_command(SensorCommand::WaterPumpActive(true)).await;
    assert!(result.is_err());

    let state = sync.state();
    assert!(!state.snapshot.water_pump_active, "no optimistic patch on failure");
    assert_eq!(state.snapshot.temperature, 22.0);

    // No reconcile fetch is scheduled for a failed command.
    let fetches_before = source.fetch_count();
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(source.fetch_count(), fetches_before);

    sync.stop();
}

#[tokio::test(start_paused = true)]
async fn stale_response_does_not_overwrite_newer_commit() {
    let source = Arc::new(MockSource::new());
    // First fetch is slow and would report 1.0; the manual refresh that
    // follows is fast and reports 2.0.
    source
        .enqueue_ok(Duration::from_secs(1), snapshot_with_temperature(1.0))
        .await;
    source
        .enqueue_ok(Duration::ZERO, snapshot_with_temperature(2.0))
        .await;
    source.set_snapshot(snapshot_with_temperature(2.0)).await;

    let sync = Synchronizer::start(Arc::clone(&source), quiet_options()).unwrap();

    // The initial (slow) fetch is in flight; refresh overtakes it.
    sync.refresh().await;
    let state = sync.state();
    assert_eq!(state.snapshot.temperature, 2.0);
    let revision = state.revision();

    // Let the slow fetch complete; its result must be discarded.
    tokio::time::sleep(Duration::from_secs(2)).await;
    let state = sync.state();
    assert_eq!(state.snapshot.temperature, 2.0, "last-issued must win");
    assert_eq!(state.revision(), revision);

    sync.stop();
}

#[tokio::test(start_paused = true)]
async fn optimistic_patch_survives_older_inflight_fetch() {
    let source = Arc::new(MockSource::new());
    // The poll in flight when the command lands reports the pump off.
    source
        .enqueue_ok(Duration::from_secs(1), SensorSnapshot::default())
        .await;

    let sync = Synchronizer::start(Arc::clone(&source), quiet_options()).unwrap();

    sync.send_command(SensorCommand::WaterPumpActive(true))
        .await
        .unwrap();
    assert!(sync.state().snapshot.water_pump_active);

    // Old fetch completes after the patch: it must not clear the toggle.
    // The reconcile fetch (pump on, via fallback) confirms it instead.
    source
        .set_snapshot(SensorSnapshot {
            water_pump_active: true,
            ..Default::default()
        })
        .await;
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert!(sync.state().snapshot.water_pump_active);

    sync.stop();
}

#[tokio::test(start_paused = true)]
async fn stop_cancels_polling() {
    let source = Arc::new(MockSource::new());
    let sync = Synchronizer::start(
        Arc::clone(&source),
        SyncOptions::with_interval(Duration::from_millis(100)),
    )
    .unwrap();

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(sync.is_active());
    sync.stop();

    tokio::time::sleep(Duration::from_millis(10)).await;
    let fetches_after_stop = source.fetch_count();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(source.fetch_count(), fetches_after_stop);
}

#[tokio::test(start_paused = true)]
async fn drop_cancels_polling() {
    let source = Arc::new(MockSource::new());
    {
        let _sync = Synchronizer::start(
            Arc::clone(&source),
            SyncOptions::with_interval(Duration::from_millis(100)),
        )
        .unwrap();
        tokio::time::sleep(Duration::from_millis(250)).await;
    }

    tokio::time::sleep(Duration::from_millis(10)).await;
    let fetches_after_drop = source.fetch_count();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(source.fetch_count(), fetches_after_drop);
}

#[tokio::test(start_paused = true)]
async fn subscribers_observe_commits() {
    let source = Arc::new(MockSource::with_snapshot(snapshot_with_temperature(30.0)));
    let sync = Synchronizer::start(Arc::clone(&source), quiet_options()).unwrap();

    let mut rx = sync.subscribe();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().snapshot.temperature, 30.0);

    sync.stop();
}
