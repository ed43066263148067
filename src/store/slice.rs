//! Type-erased feature slices held by the store.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;

use super::policy::NotifyPolicy;
use super::subscription::{notify_all, Subscribers};
use crate::mvi::Reducer;

/// Deferred subscriber delivery, run after the store lock is released.
pub(crate) type Notification = Box<dyn FnOnce() + Send>;

/// State and subscribers of one slice, shared with its feature handles.
pub(crate) struct SliceShared<S> {
    pub(crate) state: Mutex<S>,
    pub(crate) subscribers: Arc<Mutex<Subscribers<S>>>,
}

pub(crate) trait Slice: Send {
    fn key(&self) -> &str;

    /// Run the reducer for `action`, returning the delivery to perform if
    /// subscribers should hear about it.
    fn apply(&mut self, action: &dyn Any, policy: NotifyPolicy) -> Option<Notification>;

    fn as_any(&self) -> &dyn Any;
}

pub(crate) struct FeatureSlice<R: Reducer> {
    key: String,
    shared: Arc<SliceShared<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> FeatureSlice<R> {
    pub(crate) fn new(key: String, state: R::State) -> Self {
        Self {
            key,
            shared: Arc::new(SliceShared {
                state: Mutex::new(state),
                subscribers: Arc::new(Mutex::new(Subscribers::new())),
            }),
            _reducer: PhantomData,
        }
    }

    pub(crate) fn shared(&self) -> Arc<SliceShared<R::State>> {
        Arc::clone(&self.shared)
    }
}

impl<R: Reducer> Slice for FeatureSlice<R> {
    fn key(&self) -> &str {
        &self.key
    }

    fn apply(&mut self, action: &dyn Any, policy: NotifyPolicy) -> Option<Notification> {
        let Some(intent) = action.downcast_ref::<R::Intent>() else {
            tracing::trace!(feature = %self.key, "Action ignored by slice");
            return None;
        };

        let snapshot = {
            let mut state = self.shared.state.lock();
            let next = R::reduce(state.clone(), intent.clone());
            let changed = next != *state;
            if changed {
                tracing::debug!(
                    feature = %self.key,
                    old = ?*state,
                    new = ?next,
                    "State changed"
                );
            }
            *state = next;
            if !changed && policy == NotifyPolicy::Changed {
                return None;
            }
            state.clone()
        };

        let subscribers = Arc::clone(&self.shared.subscribers);
        Some(Box::new(move || notify_all(&subscribers, &snapshot)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
