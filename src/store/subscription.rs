//! Callback registration lists and the RAII handle that unregisters them.

use std::collections::HashSet;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

pub(crate) type Callback<S> = Box<dyn FnMut(&S) + Send>;

pub(crate) struct Subscribers<S> {
    next_id: u64,
    entries: Vec<(u64, Callback<S>)>,
    /// Set while `notify_all` has moved `entries` out.
    notifying: bool,
    /// Ids removed while their callback was moved out for notification.
    cancelled: HashSet<u64>,
}

impl<S> Subscribers<S> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
            notifying: false,
            cancelled: HashSet::new(),
        }
    }

    pub(crate) fn insert(&mut self, callback: Callback<S>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    fn remove(&mut self, id: u64) {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        if self.entries.len() == before && self.notifying {
            self.cancelled.insert(id);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Invoke every registered callback with `state`.
///
/// No lock is held while callbacks run, so a callback may subscribe to or
/// unsubscribe from the same list.
pub(crate) fn notify_all<S>(list: &Mutex<Subscribers<S>>, state: &S) {
    let entries = {
        let mut guard = list.lock();
        guard.notifying = true;
        std::mem::take(&mut guard.entries)
    };
    let mut delivery = Delivery { list, entries };

    for (id, callback) in delivery.entries.iter_mut() {
        if list.lock().cancelled.contains(id) {
            continue;
        }
        callback(state);
    }
}

/// Callbacks moved out of a list for delivery.
///
/// Puts them back on drop, including when a callback panics, so one bad
/// subscriber does not take the others with it.
struct Delivery<'a, S> {
    list: &'a Mutex<Subscribers<S>>,
    entries: Vec<(u64, Callback<S>)>,
}

impl<S> Drop for Delivery<'_, S> {
    fn drop(&mut self) {
        let mut guard = self.list.lock();
        guard.notifying = false;
        let cancelled = std::mem::take(&mut guard.cancelled);
        let mut entries = std::mem::take(&mut self.entries);
        entries.retain(|(id, _)| !cancelled.contains(id));
        // Subscriptions added during notification go after the existing ones.
        entries.append(&mut guard.entries);
        guard.entries = entries;
    }
}

/// Handle to a registered subscriber.
///
/// Dropping it unsubscribes the callback.
#[must_use = "dropping a Subscription unsubscribes it immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub(crate) fn new<S: Send + 'static>(list: &Arc<Mutex<Subscribers<S>>>, id: u64) -> Self {
        let list: Weak<Mutex<Subscribers<S>>> = Arc::downgrade(list);
        Self {
            unsubscribe: Some(Box::new(move || {
                if let Some(list) = list.upgrade() {
                    list.lock().remove(id);
                }
            })),
        }
    }

    /// Unsubscribe now instead of at drop.
    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(log: &Arc<Mutex<Vec<i32>>>) -> Callback<i32> {
        let log = Arc::clone(log);
        Box::new(move |value| log.lock().push(*value))
    }

    #[test]
    fn notify_reaches_every_subscriber() {
        let list = Arc::new(Mutex::new(Subscribers::new()));
        let log = Arc::new(Mutex::new(Vec::new()));
        list.lock().insert(recorder(&log));
        list.lock().insert(recorder(&log));

        notify_all(&list, &7);
        assert_eq!(*log.lock(), vec![7, 7]);
    }

    #[test]
    fn dropping_subscription_removes_callback() {
        let list = Arc::new(Mutex::new(Subscribers::new()));
        let log = Arc::new(Mutex::new(Vec::new()));
        let id = list.lock().insert(recorder(&log));
        let subscription = Subscription::new(&list, id);

        drop(subscription);
        notify_all(&list, &1);
        assert!(log.lock().is_empty());
        assert_eq!(list.lock().len(), 0);
    }

    #[test]
    fn unsubscribe_during_notify_skips_later_callback() {
        let list: Arc<Mutex<Subscribers<i32>>> = Arc::new(Mutex::new(Subscribers::new()));
        let log = Arc::new(Mutex::new(Vec::new()));
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let slot_in_cb = Arc::clone(&slot);
        list.lock().insert(Box::new(move |_| {
            if let Some(subscription) = slot_in_cb.lock().take() {
                subscription.unsubscribe();
            }
        }));
        let id = list.lock().insert(recorder(&log));
        *slot.lock() = Some(Subscription::new(&list, id));

        notify_all(&list, &3);
        notify_all(&list, &4);
        assert!(log.lock().is_empty());
        assert_eq!(list.lock().len(), 1);
    }

    #[test]
    fn subscribe_during_notify_is_kept_for_next_round() {
        let list: Arc<Mutex<Subscribers<i32>>> = Arc::new(Mutex::new(Subscribers::new()));
        let log = Arc::new(Mutex::new(Vec::new()));

        let list_in_cb = Arc::clone(&list);
        let log_in_cb = Arc::clone(&log);
        let mut added = false;
        list.lock().insert(Box::new(move |_| {
            if !added {
                added = true;
                list_in_cb.lock().insert(recorder(&log_in_cb));
            }
        }));

        notify_all(&list, &1);
        assert!(log.lock().is_empty());
        notify_all(&list, &2);
        assert_eq!(*log.lock(), vec![2]);
        assert_eq!(list.lock().len(), 2);
    }

    #[test]
    fn panicking_callback_keeps_list_intact() {
        let list: Arc<Mutex<Subscribers<i32>>> = Arc::new(Mutex::new(Subscribers::new()));
        let log = Arc::new(Mutex::new(Vec::new()));
        list.lock().insert(Box::new(|value| {
            if *value == 1 {
                panic!("subscriber failure");
            }
        }));
        list.lock().insert(recorder(&log));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            notify_all(&list, &1);
        }));
        assert!(result.is_err());
        assert_eq!(list.lock().len(), 2);
        assert!(!list.lock().notifying);

        notify_all(&list, &2);
        assert_eq!(*log.lock(), vec![2]);
    }
}
