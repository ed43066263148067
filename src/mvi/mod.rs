//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every feature slice in the store is described by these traits.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Selector ──→ View
//!    ↑                                          │
//!    └──────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of one feature slice
//! - **Intent**: User actions or system events, no side effects of their own
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::FeatureState;
