//! Typed access to one feature slice.

use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::watch;

use super::policy::NotifyPolicy;
use super::slice::SliceShared;
use super::store::Store;
use super::subscription::{Callback, Subscription};
use crate::mvi::Reducer;

/// Typed view of the slice managed by reducer `R`.
pub struct FeatureHandle<R: Reducer> {
    store: Store,
    key: String,
    shared: Arc<SliceShared<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for FeatureHandle<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            key: self.key.clone(),
            shared: Arc::clone(&self.shared),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> std::fmt::Debug for FeatureHandle<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureHandle")
            .field("key", &self.key)
            .finish()
    }
}

impl<R: Reducer> FeatureHandle<R> {
    pub(crate) fn new(store: Store, key: String, shared: Arc<SliceShared<R::State>>) -> Self {
        Self {
            store,
            key,
            shared,
            _reducer: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Dispatch through the owning store; every slice sees the intent.
    pub fn dispatch(&self, intent: R::Intent) {
        self.store.dispatch(intent);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.shared.state.lock().clone()
    }

    pub fn select<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        selector(&self.shared.state.lock())
    }

    /// Push `selector(state)` to `callback`, immediately and then after
    /// transitions.
    ///
    /// With [`NotifyPolicy::Changed`] a value equal to the last delivered one
    /// is not pushed again. With [`NotifyPolicy::Always`] every handled intent
    /// produces a push.
    pub fn subscribe<T, S, F>(&self, selector: S, mut callback: F) -> Subscription
    where
        T: PartialEq + Send + 'static,
        S: Fn(&R::State) -> T + Send + 'static,
        F: FnMut(&T) + Send + 'static,
    {
        let distinct = self.store.notify_policy() == NotifyPolicy::Changed;
        let mut last: Option<T> = None;
        let mut deliver: Callback<R::State> = Box::new(move |state| {
            let value = selector(state);
            if distinct && last.as_ref() == Some(&value) {
                return;
            }
            callback(&value);
            last = Some(value);
        });

        self.store.exclusive(|| {
            let initial = self.state();
            deliver(&initial);
            let id = self.shared.subscribers.lock().insert(deliver);
            tracing::debug!(feature = %self.key, id, "Subscribed");
            Subscription::new(&self.shared.subscribers, id)
        })
    }

    /// Live view of `selector(state)` as a `tokio::sync::watch` receiver.
    pub fn watch<T, S>(&self, selector: S) -> Watch<T>
    where
        T: PartialEq + Clone + Send + Sync + 'static,
        S: Fn(&R::State) -> T + Send + 'static,
    {
        let (sender, mut receiver) = watch::channel(self.select(&selector));
        let subscription = self.subscribe(selector, move |value: &T| {
            sender.send_replace(value.clone());
        });
        // The initial push is not news to the receiver.
        let _ = receiver.borrow_and_update();
        Watch {
            receiver,
            _subscription: subscription,
        }
    }

    /// Number of live subscribers on this slice.
    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.lock().len()
    }
}

/// A [`watch::Receiver`] kept fed by a store subscription.
///
/// Only the latest value is retained; use [`FeatureHandle::subscribe`] to
/// observe every transition.
pub struct Watch<T> {
    receiver: watch::Receiver<T>,
    _subscription: Subscription,
}

impl<T: Clone> Watch<T> {
    /// Latest value, marking it as seen.
    pub fn get(&mut self) -> T {
        self.receiver.borrow_and_update().clone()
    }

    /// Whether a value arrived since the last [`Watch::get`].
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Wait for the next pushed value.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.receiver.changed().await
    }

    pub fn receiver(&self) -> &watch::Receiver<T> {
        &self.receiver
    }
}
