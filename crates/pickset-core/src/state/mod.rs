//! Command dispatch.
//!
//! Front ends translate gestures (clicks, keystrokes, drags) into
//! [`Command`]s and hand them to a [`Store`]. The store applies each command
//! to the selection engine and reports what changed as [`Event`]s.

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod store;
pub mod types;

pub use dispatch::CoreStore;
pub use errors::DispatchError;
pub use events::Event;
pub use store::Store;
pub use types::Command;
