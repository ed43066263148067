use super::state::CounterState;

/// Current value of the counter.
pub fn select_count(state: &CounterState) -> i64 {
    state.count
}
