use std::any::{type_name, Any};
use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};

use super::error::StoreError;
use super::handle::FeatureHandle;
use super::policy::NotifyPolicy;
use super::slice::{FeatureSlice, Notification, Slice};
use crate::mvi::{Intent, Reducer};

/// Collects feature registrations before the store is built.
#[derive(Default)]
pub struct StoreBuilder {
    slices: Vec<Box<dyn Slice>>,
    policy: NotifyPolicy,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify_policy(mut self, policy: NotifyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register reducer `R` under `key`, starting from `R::State::default()`.
    pub fn feature<R: Reducer>(self, key: impl Into<String>) -> Result<Self, StoreError> {
        self.feature_with_state::<R>(key, R::State::default())
    }

    /// Register reducer `R` under `key`, starting from `state`.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateFeature`] if `key` is taken.
    pub fn feature_with_state<R: Reducer>(
        mut self,
        key: impl Into<String>,
        state: R::State,
    ) -> Result<Self, StoreError> {
        let key = key.into();
        if self.slices.iter().any(|slice| slice.key() == key) {
            return Err(StoreError::DuplicateFeature { key });
        }

        tracing::info!(
            feature = %key,
            reducer = type_name::<R>(),
            initial = ?state,
            "Feature registered"
        );
        self.slices.push(Box::new(FeatureSlice::<R>::new(key, state)));
        Ok(self)
    }

    pub fn build(self) -> Store {
        Store {
            shared: Arc::new(StoreShared {
                inner: Mutex::new(StoreInner {
                    slices: self.slices,
                    queue: VecDeque::new(),
                    draining: false,
                }),
                gate: ReentrantMutex::new(()),
                policy: self.policy,
            }),
        }
    }
}

/// Handle to the application store.
///
/// Cloning is cheap; all clones share the same slices and queue.
#[derive(Clone)]
pub struct Store {
    shared: Arc<StoreShared>,
}

struct StoreShared {
    inner: Mutex<StoreInner>,
    /// Held for the whole of a drain or a subscription so that deliveries
    /// never interleave. Reentrant because callbacks run under it.
    gate: ReentrantMutex<()>,
    policy: NotifyPolicy,
}

struct StoreInner {
    slices: Vec<Box<dyn Slice>>,
    queue: VecDeque<Box<dyn Any + Send>>,
    /// True while some caller is applying queued intents.
    draining: bool,
}

impl Store {
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    pub fn notify_policy(&self) -> NotifyPolicy {
        self.shared.policy
    }

    /// Keys of every registered feature, in registration order.
    pub fn feature_keys(&self) -> Vec<String> {
        self.shared
            .inner
            .lock()
            .slices
            .iter()
            .map(|slice| slice.key().to_string())
            .collect()
    }

    /// Typed handle to the slice registered under `key`.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownFeature`] if nothing is registered under
    /// `key`, or [`StoreError::FeatureTypeMismatch`] if it is registered with
    /// a reducer other than `R`.
    pub fn feature<R: Reducer>(&self, key: &str) -> Result<FeatureHandle<R>, StoreError> {
        let inner = self.shared.inner.lock();
        let slice = inner
            .slices
            .iter()
            .find(|slice| slice.key() == key)
            .ok_or_else(|| StoreError::UnknownFeature {
                key: key.to_string(),
            })?;
        let slice = slice
            .as_any()
            .downcast_ref::<FeatureSlice<R>>()
            .ok_or_else(|| StoreError::FeatureTypeMismatch {
                key: key.to_string(),
                expected: type_name::<R>(),
            })?;
        Ok(FeatureHandle::new(self.clone(), key.to_string(), slice.shared()))
    }

    /// Queue `intent` for every slice.
    ///
    /// Fire-and-forget: if no other dispatch is in progress the intent is
    /// applied and delivered before this returns, otherwise it is applied
    /// by whoever is already draining the queue, after everything queued
    /// before it.
    pub fn dispatch<I: Intent>(&self, intent: I) {
        tracing::debug!(?intent, "Dispatch");
        {
            let mut inner = self.shared.inner.lock();
            inner.queue.push_back(Box::new(intent));
            if inner.draining {
                return;
            }
            inner.draining = true;
        }
        self.drain();
    }

    /// Run `f` with the queue held, then apply whatever it queued.
    pub(crate) fn exclusive<T>(&self, f: impl FnOnce() -> T) -> T {
        let _gate = self.shared.gate.lock();
        let owns_drain = {
            let mut inner = self.shared.inner.lock();
            !std::mem::replace(&mut inner.draining, true)
        };
        let result = {
            let _reset = DrainReset::armed(&self.shared, owns_drain);
            f()
        };
        if owns_drain {
            self.drain();
        }
        result
    }

    /// Apply queued intents until the queue is empty.
    ///
    /// The caller must have set `draining`.
    fn drain(&self) {
        let _gate = self.shared.gate.lock();
        let reset = DrainReset::armed(&self.shared, true);
        loop {
            let notifications: Vec<Notification> = {
                let mut inner = self.shared.inner.lock();
                let Some(action) = inner.queue.pop_front() else {
                    inner.draining = false;
                    break;
                };
                let policy = self.shared.policy;
                inner
                    .slices
                    .iter_mut()
                    .filter_map(|slice| slice.apply(&*action, policy))
                    .collect()
            };
            for notify in notifications {
                notify();
            }
        }
        reset.disarm();
    }
}

/// Clears `draining` if a subscriber callback panics mid-drain so later
/// dispatches are not stranded in the queue.
struct DrainReset<'a> {
    shared: Option<&'a StoreShared>,
}

impl<'a> DrainReset<'a> {
    fn armed(shared: &'a StoreShared, owns_drain: bool) -> Self {
        Self {
            shared: owns_drain.then_some(shared),
        }
    }

    fn disarm(mut self) {
        self.shared = None;
    }
}

impl Drop for DrainReset<'_> {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.take() {
            if std::thread::panicking() {
                let mut inner = shared.inner.lock();
                inner.draining = false;
                inner.queue.clear();
            }
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("features", &self.feature_keys())
            .field("policy", &self.shared.policy)
            .finish()
    }
}
