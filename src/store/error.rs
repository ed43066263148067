use thiserror::Error;

/// Errors raised while wiring features into a store.
///
/// Reducers themselves never fail; these only cover registration and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Feature '{key}' is already registered")]
    DuplicateFeature { key: String },

    #[error("Feature '{key}' is not registered")]
    UnknownFeature { key: String },

    #[error("Feature '{key}' is not managed by reducer {expected}")]
    FeatureTypeMismatch { key: String, expected: &'static str },
}
