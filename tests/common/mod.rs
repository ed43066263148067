//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use counter_store::counter::{self, CounterReducer, CounterState, FEATURE_KEY};
use counter_store::store::{FeatureHandle, NotifyPolicy, Store, Subscription};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Store with only the counter slice, starting at `count`.
pub fn counter_store(count: i64, policy: NotifyPolicy) -> (Store, FeatureHandle<CounterReducer>) {
    let store = counter::register_with_state(
        Store::builder().notify_policy(policy),
        CounterState::new(count),
    )
    .expect("register counter")
    .build();
    let handle = store
        .feature::<CounterReducer>(FEATURE_KEY)
        .expect("counter feature");
    (store, handle)
}

/// Subscribe to the count and collect every pushed value.
pub fn record_counts(handle: &FeatureHandle<CounterReducer>) -> (Arc<Mutex<Vec<i64>>>, Subscription) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let subscription = handle.subscribe(counter::select_count, move |value: &i64| {
        sink.lock().push(*value);
    });
    (log, subscription)
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
