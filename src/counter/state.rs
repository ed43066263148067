use crate::mvi::FeatureState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    /// May go negative; there is no floor.
    pub count: i64,
}

impl FeatureState for CounterState {}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}
