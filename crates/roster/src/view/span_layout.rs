//! Capability handle over span-aware layout managers.
//!
//! Some layout managers arrange rows in multiple columns (uniform grids,
//! staggered grids). Adapters need certain row kinds to occupy the full
//! cross-axis span regardless of column count, so each concrete layout
//! manager is wrapped in a [`SpanCapable`] adapter exposing just the span
//! capabilities, and the adapter core decides against those capabilities
//! rather than against concrete layout types.
//!
//! A layout with no multi-column concept (a plain vertical list) implements
//! the trait with all defaults, and span overrides silently degrade to
//! no-ops.

use std::sync::Arc;

use super::row::RowWidget;

/// A span-size lookup: maps a position to the number of grid columns the row
/// at that position occupies.
pub type SpanLookup = Arc<dyn Fn(usize) -> usize + Send + Sync>;

/// Span capabilities of a layout manager.
///
/// All methods default to the "no span support" behavior, so a linear layout
/// wrapper is an empty impl.
pub trait SpanCapable: Send + Sync {
    /// `true` for staggered layouts that support per-row full-span layout
    /// parameters.
    fn is_staggered_multi_span(&self) -> bool {
        false
    }

    /// Total cross-axis span count. Single-column layouts report 1.
    fn span_count(&self) -> usize {
        1
    }

    /// Marks the given row's layout parameters to occupy the full cross-axis
    /// span (staggered layouts only).
    fn set_full_span(&self, row: &dyn RowWidget) {
        let _ = row;
    }

    /// `true` for uniform grids that resolve per-position span sizes through
    /// a lookup function.
    fn supports_span_lookup(&self) -> bool {
        false
    }

    /// The currently installed span-size lookup, or `None` if this layout has
    /// no span-lookup concept or none is installed yet.
    fn span_size_lookup(&self) -> Option<SpanLookup> {
        None
    }

    /// Installs a span-size lookup, replacing the current one.
    fn set_span_size_lookup(&self, lookup: SpanLookup) {
        let _ = lookup;
    }
}
