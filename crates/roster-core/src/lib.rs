//! Core systems for Roster.
//!
//! This crate provides the foundational components of the Roster list-adapter
//! toolkit:
//!
//! - **Signal/Slot System**: Type-safe change notifications with connection
//!   management
//! - **Thread Affinity**: Debug assertions for the single-UI-thread contract
//! - **Logging**: `tracing` targets and macros shared across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use roster_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;
pub mod thread_check;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use thread_check::ThreadAffinity;
