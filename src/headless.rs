//! Dispatching a fixed list of intents without a display.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::counter::{select_count, CounterIntent, CounterReducer, FEATURE_KEY};
use crate::store::{Store, StoreError};

/// Dispatch `intents` in order and return every value pushed to a count
/// subscriber, starting with the value at subscription time.
pub fn observe(
    store: &Store,
    intents: impl IntoIterator<Item = CounterIntent>,
) -> Result<Vec<i64>, StoreError> {
    let counter = store.feature::<CounterReducer>(FEATURE_KEY)?;
    let observed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&observed);
    let subscription = counter.subscribe(select_count, move |value: &i64| {
        sink.lock().push(*value);
    });

    for intent in intents {
        counter.dispatch(intent);
    }
    drop(subscription);

    let values = std::mem::take(&mut *observed.lock());
    Ok(values)
}
