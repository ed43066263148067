use serde::{Deserialize, Serialize};

/// When subscribers are pushed a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyPolicy {
    /// Only after transitions that produce a different value.
    #[default]
    Changed,
    /// After every intent the slice's reducer handles, even when the
    /// resulting state equals the previous one.
    Always,
}
