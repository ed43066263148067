//! Base trait for feature state in MVI architecture.

use std::fmt::Debug;

/// Marker trait for feature state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for suppressing no-op notifications)
/// - Defaultable (the initial state of a freshly registered slice)
pub trait FeatureState: Clone + PartialEq + Default + Debug + Send + Sync + 'static {}
