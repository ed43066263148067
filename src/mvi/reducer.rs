//! Reducer trait for MVI architecture.

use std::any::Any;

use super::intent::Intent;
use super::state::FeatureState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer: 'static {
    /// The state type this reducer operates on.
    type State: FeatureState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Like [`Reducer::reduce`], starting from the default state when none
    /// exists yet.
    fn reduce_or_init(state: Option<Self::State>, intent: Self::Intent) -> Self::State {
        Self::reduce(state.unwrap_or_default(), intent)
    }

    /// Reduce an action of unknown type.
    ///
    /// Actions that are not `Self::Intent` leave the state untouched.
    fn reduce_any(state: Self::State, action: &dyn Any) -> Self::State {
        match action.downcast_ref::<Self::Intent>() {
            Some(intent) => Self::reduce(state, intent.clone()),
            None => state,
        }
    }
}
