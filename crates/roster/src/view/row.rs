//! The row-widget boundary consumed by list adapters.
//!
//! Adapters never touch concrete widgets. The host framework inflates a row's
//! widget tree and hands it to the adapter behind [`RowWidget`]; the adapter
//! only sets child text, starts loading indicators, attaches click handlers,
//! and drives entrance animation playback through this trait.

/// Identifies a child view inside a row's widget tree.
///
/// Row layouts owned by the adapter (footer, placeholder) publish the ids of
/// the children the adapter binds; consumer layouts define their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildId(pub u32);

/// Click handler attached to a whole row.
pub type RowClickHandler = Box<dyn Fn() + Send + Sync>;

/// A recyclable row widget, as seen by the adapter.
///
/// Implemented by the host framework around its concrete view-holder type.
/// The same widget instance is rebound to different positions as the pool
/// recycles it, which is why [`current_position`](Self::current_position) is
/// queried at interaction time rather than captured at creation.
pub trait RowWidget: Send + Sync {
    /// Sets the text of a child view.
    fn set_text(&self, child: ChildId, text: &str);

    /// Starts the loading indicator child (footer rows).
    fn begin_loading(&self, child: ChildId);

    /// The row's current adapter position, or `None` once the row has been
    /// detached or recycled out of the list.
    fn current_position(&self) -> Option<usize>;

    /// Attaches a click handler to the whole row. A later call replaces the
    /// previous handler.
    fn set_on_click(&self, handler: RowClickHandler);

    /// Starts the entrance animation for this row.
    fn play_entrance(&self);

    /// Cancels a running entrance animation, if any.
    fn cancel_entrance(&self);
}
