//! The counter feature: intents, state, reducer and selectors, plus the
//! wiring that registers them in a store under [`FEATURE_KEY`].

mod intent;
mod reducer;
mod selectors;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use selectors::select_count;
pub use state::CounterState;

use crate::store::{StoreBuilder, StoreError};

/// Key of the counter slice in the application store.
pub const FEATURE_KEY: &str = "count";

/// Register the counter slice with its default state.
pub fn register(builder: StoreBuilder) -> Result<StoreBuilder, StoreError> {
    builder.feature::<CounterReducer>(FEATURE_KEY)
}

/// Register the counter slice starting from `state`.
pub fn register_with_state(
    builder: StoreBuilder,
    state: CounterState,
) -> Result<StoreBuilder, StoreError> {
    builder.feature_with_state::<CounterReducer>(FEATURE_KEY, state)
}
