//! Base trait for intents (dispatched actions) in MVI architecture.

use std::any::Any;
use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents are immutable, transient messages. The store hands every
/// dispatched intent to every registered slice, so they must be cheap to
/// clone and identifiable at runtime (`Any`) for slices to tell their own
/// intents from foreign ones.
pub trait Intent: Any + Clone + Debug + Send + 'static {}
