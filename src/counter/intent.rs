use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    /// Back to zero regardless of the current value.
    Reset,
}

impl Intent for CounterIntent {}
