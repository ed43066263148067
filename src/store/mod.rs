//! Application-wide store composed of independent feature slices.
//!
//! Each slice is a reducer registered under a stable string key. The store
//! owns every slice's state, applies dispatched intents one at a time in
//! dispatch order, and pushes the resulting state to subscribers before the
//! next intent is applied.
//!
//! The store is an explicit handle: clone it and pass it to whichever
//! component needs it.

mod error;
mod handle;
mod policy;
mod slice;
#[allow(clippy::module_inception)]
mod store;
mod subscription;

pub use error::StoreError;
pub use handle::{FeatureHandle, Watch};
pub use policy::NotifyPolicy;
pub use store::{Store, StoreBuilder};
pub use subscription::Subscription;
