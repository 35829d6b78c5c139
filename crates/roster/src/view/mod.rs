//! Boundaries to the host framework's widgets and layout managers.
//!
//! The adapter core never sees concrete widgets or layout managers. The host
//! wraps its row widgets in [`RowWidget`] and its layout manager in
//! [`SpanCapable`]; everything the adapter does to the view side goes through
//! these two traits.

mod row;
mod span_layout;

pub use row::{ChildId, RowClickHandler, RowWidget};
pub use span_layout::{SpanCapable, SpanLookup};
