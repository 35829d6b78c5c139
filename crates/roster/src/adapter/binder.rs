//! Consumer extension points for item rows.

use crate::view::RowWidget;

/// Binds item data into row widgets.
///
/// This is the consumer side of a [`ListAdapter`](super::ListAdapter): the
/// adapter owns kind resolution, footer/placeholder handling, click wiring and
/// animation gating, while the binder supplies what only the consumer knows —
/// which item layout a position uses and how an item's fields map onto that
/// layout's children.
///
/// # Example
///
/// ```
/// use roster::adapter::RowBinder;
/// use roster::view::{ChildId, RowWidget};
///
/// struct Headline {
///     title: String,
/// }
///
/// struct HeadlineBinder;
///
/// impl RowBinder<Headline> for HeadlineBinder {
///     fn bind_item(&self, row: &dyn RowWidget, _position: usize, item: &Headline) {
///         row.set_text(ChildId(10), &item.title);
///     }
/// }
/// ```
pub trait RowBinder<T>: Send + Sync {
    /// The item-layout subtype for the row at `position`.
    ///
    /// Lets one list mix several item layouts. The default is a single
    /// subtype, 0.
    fn item_kind_for(&self, position: usize) -> u32 {
        let _ = position;
        0
    }

    /// Binds one item into an already-created row widget.
    fn bind_item(&self, row: &dyn RowWidget, position: usize, item: &T);
}
