//! A counter feature on top of a small feature-slice store.
//!
//! The [`counter`] module holds the pure state machine, [`store`] the
//! container that serializes dispatches and pushes selected values to
//! subscribers, and [`ui`] a terminal view wired to both.

pub mod cli;
pub mod config;
pub mod counter;
pub mod headless;
pub mod logging;
pub mod mvi;
pub mod store;
pub mod ui;
