//! Full-span override installation for multi-column layouts.
//!
//! Footer and placeholder rows must stretch across every column. Staggered
//! layouts take a per-row layout-parameter flag; uniform grids take a
//! span-size lookup that must be wrapped around whatever lookup is already
//! installed, so a consumer's own span policy keeps working for ordinary
//! positions.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::view::{RowWidget, SpanCapable};

use super::kind::RowKind;

/// Resolves a position to its row kind at lookup time.
///
/// The wrapping grid lookup outlives any single bind, so it captures one of
/// these instead of a snapshot of adapter state.
pub(crate) type KindLookup = Arc<dyn Fn(usize) -> RowKind + Send + Sync>;

/// Applies the full-span policy for one bound row of `target` kind.
///
/// Staggered layouts with more than one span get the row's layout parameters
/// marked directly. Grid layouts get a wrapping span-size lookup installed —
/// once per target kind, tracked in `installed` — that returns the full span
/// count for positions resolving to `target` and delegates everything else to
/// the previously installed lookup (span size 1 if there was none). Layouts
/// with neither capability are left alone.
pub(crate) fn apply_full_span(
    layout: &dyn SpanCapable,
    row: &dyn RowWidget,
    target: RowKind,
    resolver: &KindLookup,
    installed: &Mutex<Vec<RowKind>>,
) {
    if layout.is_staggered_multi_span() {
        if layout.span_count() != 1 {
            layout.set_full_span(row);
        }
    } else if layout.supports_span_lookup() {
        let mut installed = installed.lock();
        if installed.contains(&target) {
            return;
        }
        installed.push(target);

        let previous = layout.span_size_lookup();
        let total = layout.span_count();
        let resolver = resolver.clone();
        tracing::debug!(
            target: "roster::span",
            kind = ?target,
            total,
            chained = previous.is_some(),
            "installing span-size lookup"
        );
        layout.set_span_size_lookup(Arc::new(move |position| {
            if resolver(position) == target {
                total
            } else if let Some(previous) = &previous {
                previous(position)
            } else {
                1
            }
        }));
    }
}
