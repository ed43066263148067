use crate::counter::intent::CounterIntent;
use crate::counter::state::CounterState;
use crate::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Wrapping keeps the reducer total at the i64 bounds.
        match intent {
            CounterIntent::Increment => CounterState {
                count: state.count.wrapping_add(1),
            },
            CounterIntent::Decrement => CounterState {
                count: state.count.wrapping_sub(1),
            },
            CounterIntent::Reset => CounterState { count: 0 },
        }
    }
}
