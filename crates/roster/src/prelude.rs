//! Prelude module for Roster.
//!
//! This module re-exports the most commonly used types for convenient
//! importing:
//!
//! ```
//! use roster::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use roster_core::{ConnectionId, Signal};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{ListStore, StoreSignals};

// ============================================================================
// View Boundaries
// ============================================================================

pub use crate::view::{ChildId, RowWidget, SpanCapable, SpanLookup};

// ============================================================================
// Adapter
// ============================================================================

pub use crate::adapter::{EntranceGate, ListAdapter, RowBinder, RowKind};
