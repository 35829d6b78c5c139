//! The list adapter core.
//!
//! [`ListAdapter`] binds a [`ListStore`] to a recycling list surface: it
//! resolves positions to row kinds, wires click handling at row creation,
//! performs bind-time side effects (data binding, full-span overrides,
//! entrance animation, load-more signaling) and owns the footer/placeholder
//! flags that reshape the effective position range.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use roster_core::thread_check::ThreadAffinity;

use crate::model::ListStore;
use crate::view::{ChildId, RowWidget, SpanCapable};

use super::binder::RowBinder;
use super::entrance::EntranceGate;
use super::kind::RowKind;
use super::span::{self, KindLookup};

/// Child id of the loading indicator inside the adapter-owned footer row.
pub const FOOTER_SPINNER: ChildId = ChildId(1);

/// Child id of the message label inside the adapter-owned placeholder row.
pub const PLACEHOLDER_MESSAGE: ChildId = ChildId(2);

/// Handler invoked with the clicked row and its current position.
pub type ItemClickHandler = dyn Fn(&dyn RowWidget, usize) + Send + Sync;

/// Handler invoked when the placeholder row is clicked (typically a retry).
pub type PlaceholderClickHandler = dyn Fn() + Send + Sync;

/// Handler invoked when the terminal position is bound past the threshold.
pub type LoadMoreHandler = dyn Fn() + Send + Sync;

/// Flags and values shared between the adapter and the span-size lookup it
/// installs into grid layouts. The lookup outlives individual binds, so it
/// reads these through an `Arc` rather than a snapshot.
struct AdapterState {
    show_footer: AtomicBool,
    show_placeholder: AtomicBool,
    load_more_threshold: AtomicUsize,
    placeholder_message: Mutex<String>,
}

impl AdapterState {
    fn new() -> Self {
        Self {
            show_footer: AtomicBool::new(false),
            show_placeholder: AtomicBool::new(false),
            load_more_threshold: AtomicUsize::new(0),
            placeholder_message: Mutex::new(String::new()),
        }
    }
}

/// Number of positions the list currently reports.
fn effective_count_of<T: Send + Sync + 'static>(
    state: &AdapterState,
    store: &ListStore<T>,
) -> usize {
    if state.show_placeholder.load(Ordering::SeqCst) {
        return 1;
    }
    store.len() + usize::from(state.show_footer.load(Ordering::SeqCst))
}

/// Resolves a position to its row kind under the current flags.
fn resolve_kind<T: Send + Sync + 'static>(
    state: &AdapterState,
    store: &ListStore<T>,
    binder: &dyn RowBinder<T>,
    position: usize,
) -> RowKind {
    if state.show_placeholder.load(Ordering::SeqCst) {
        return RowKind::Placeholder;
    }
    if state.show_footer.load(Ordering::SeqCst)
        && position + 1 == effective_count_of(state, store)
    {
        return RowKind::Footer;
    }
    RowKind::Item(binder.item_kind_for(position))
}

/// Adapter between a [`ListStore`] and a recycling list surface.
///
/// The host framework queries [`effective_count`](Self::effective_count) and
/// [`row_kind_at`](Self::row_kind_at), creates a row widget per kind and hands
/// it to [`prepare_row`](Self::prepare_row), then calls
/// [`bind_row`](Self::bind_row) every time the row is (re)bound to a
/// position and [`on_row_detached`](Self::on_row_detached) when it leaves the
/// viewport. All calls arrive on the host's UI thread; binds may arrive in
/// any position order as the pool recycles.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use roster::adapter::{ListAdapter, RowBinder};
/// use roster::view::{ChildId, RowWidget};
///
/// struct TitleBinder;
///
/// impl RowBinder<String> for TitleBinder {
///     fn bind_item(&self, row: &dyn RowWidget, _position: usize, item: &String) {
///         row.set_text(ChildId(10), item);
///     }
/// }
///
/// let adapter = ListAdapter::new(
///     vec!["first".to_string(), "second".to_string()],
///     Arc::new(TitleBinder),
/// );
///
/// assert_eq!(adapter.effective_count(), 2);
/// adapter.set_on_load_more(|| println!("fetch next page"));
/// ```
pub struct ListAdapter<T> {
    store: Arc<ListStore<T>>,
    binder: Arc<dyn RowBinder<T>>,
    layout: Option<Arc<dyn SpanCapable>>,
    state: Arc<AdapterState>,
    resolver: KindLookup,
    gate: EntranceGate,
    animate_entrances: bool,
    item_click: Mutex<Option<Arc<ItemClickHandler>>>,
    placeholder_click: Mutex<Option<Arc<PlaceholderClickHandler>>>,
    load_more: Mutex<Option<Arc<LoadMoreHandler>>>,
    installed_span_kinds: Mutex<Vec<RowKind>>,
    affinity: ThreadAffinity,
}

impl<T: Send + Sync + 'static> ListAdapter<T> {
    /// Creates an adapter owning the given items, with entrance animation on
    /// and no span-aware layout.
    pub fn new(items: Vec<T>, binder: Arc<dyn RowBinder<T>>) -> Self {
        let store = Arc::new(ListStore::new(items));
        let state = Arc::new(AdapterState::new());

        let resolver: KindLookup = {
            let state = state.clone();
            let store = store.clone();
            let binder = binder.clone();
            Arc::new(move |position| resolve_kind(&state, &store, binder.as_ref(), position))
        };

        Self {
            store,
            binder,
            layout: None,
            state,
            resolver,
            gate: EntranceGate::new(),
            animate_entrances: true,
            item_click: Mutex::new(None),
            placeholder_click: Mutex::new(None),
            load_more: Mutex::new(None),
            installed_span_kinds: Mutex::new(Vec::new()),
            affinity: ThreadAffinity::current(),
        }
    }

    /// Sets the span capability handle of the host's layout manager.
    pub fn with_layout(mut self, layout: Arc<dyn SpanCapable>) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Enables or disables entrance animation for item rows.
    pub fn with_entrance_animation(mut self, animate: bool) -> Self {
        self.animate_entrances = animate;
        self
    }

    // =========================================================================
    // Store
    // =========================================================================

    /// The store backing this adapter.
    ///
    /// The returned handle is live: connect to its signals for change
    /// notifications, or read items directly.
    pub fn store(&self) -> &Arc<ListStore<T>> {
        &self.store
    }

    /// Inserts an item at `position`. See [`ListStore::insert`].
    pub fn insert(&self, position: usize, item: T) {
        self.store.insert(position, item);
    }

    /// Removes and returns the item at `position`. See [`ListStore::remove`].
    pub fn remove(&self, position: usize) -> T {
        self.store.remove(position)
    }

    /// Appends a batch of items. See [`ListStore::extend`].
    pub fn extend(&self, items: Vec<T>) {
        self.store.extend(items);
    }

    /// Replaces all items. See [`ListStore::set_items`].
    ///
    /// The entrance-animation watermark is deliberately left in place, so
    /// replacement content at already-seen positions does not re-animate.
    pub fn set_items(&self, items: Vec<T>) {
        self.store.set_items(items);
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Number of positions the list currently reports.
    ///
    /// 1 while the placeholder is shown; otherwise the item count plus one
    /// for a shown footer.
    pub fn effective_count(&self) -> usize {
        effective_count_of(&self.state, &self.store)
    }

    /// Resolves a position to its row kind under the current flags.
    pub fn row_kind_at(&self, position: usize) -> RowKind {
        (self.resolver)(position)
    }

    // =========================================================================
    // Footer / placeholder
    // =========================================================================

    /// Shows the trailing footer row, notifying its insertion.
    pub fn show_footer(&self) {
        self.affinity.debug_assert_same_thread();
        let position = self.effective_count();
        self.store.signals().emit_rows_inserted(position, position, || {
            self.state.show_footer.store(true, Ordering::SeqCst);
        });
    }

    /// Shows the footer and sets the load-more threshold, without notifying.
    ///
    /// The silent form exists for list setup before the first page of data
    /// arrives, when there is no attached view to notify yet.
    pub fn show_footer_with_threshold(&self, threshold: usize) {
        self.affinity.debug_assert_same_thread();
        self.state.show_footer.store(true, Ordering::SeqCst);
        self.state.load_more_threshold.store(threshold, Ordering::SeqCst);
    }

    /// Hides the footer row, notifying its removal.
    pub fn hide_footer(&self) {
        self.affinity.debug_assert_same_thread();
        let position = self.effective_count().saturating_sub(1);
        self.store.signals().emit_rows_removed(position, position, || {
            self.state.show_footer.store(false, Ordering::SeqCst);
        });
    }

    /// Shows or hides the placeholder row that replaces the whole list,
    /// with the message it displays. Emits no notification; pair with a
    /// wholesale refresh when toggling against live content.
    pub fn set_placeholder(&self, shown: bool, message: impl Into<String>) {
        self.affinity.debug_assert_same_thread();
        self.state.show_placeholder.store(shown, Ordering::SeqCst);
        *self.state.placeholder_message.lock() = message.into();
    }

    /// `true` while the placeholder replaces the list.
    pub fn placeholder_shown(&self) -> bool {
        self.state.show_placeholder.load(Ordering::SeqCst)
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Registers the item-click handler. The last registration wins; rows
    /// created before any registration stay without a handler.
    pub fn set_on_item_click<F>(&self, handler: F)
    where
        F: Fn(&dyn RowWidget, usize) + Send + Sync + 'static,
    {
        *self.item_click.lock() = Some(Arc::new(handler));
    }

    /// Registers the placeholder-click handler (typically a retry action).
    /// The last registration wins.
    pub fn set_on_placeholder_click<F>(&self, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *self.placeholder_click.lock() = Some(Arc::new(handler));
    }

    /// Registers the load-more handler. The last registration wins.
    ///
    /// The handler re-fires on every bind of the terminal position while the
    /// threshold condition holds; it must debounce itself (e.g. ignore calls
    /// while a fetch is in flight).
    pub fn set_on_load_more<F>(&self, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *self.load_more.lock() = Some(Arc::new(handler));
    }

    // =========================================================================
    // Row lifecycle
    // =========================================================================

    /// Wires click handling into a freshly created row of the given kind.
    ///
    /// Item rows get a handler that re-resolves the row's current position at
    /// click time and drops the click if the row has been detached meanwhile.
    /// The placeholder row gets the placeholder handler; the footer gets none.
    pub fn prepare_row(&self, kind: RowKind, row: &Arc<dyn RowWidget>) {
        match kind {
            RowKind::Footer => {}
            RowKind::Placeholder => {
                if let Some(handler) = self.placeholder_click.lock().clone() {
                    row.set_on_click(Box::new(move || handler()));
                }
            }
            _ => {
                if let Some(handler) = self.item_click.lock().clone() {
                    let weak = Arc::downgrade(row);
                    row.set_on_click(Box::new(move || {
                        let Some(row) = weak.upgrade() else {
                            return;
                        };
                        if let Some(position) = row.current_position() {
                            handler(row.as_ref(), position);
                        }
                    }));
                }
            }
        }
    }

    /// Binds the row at `position`, performing all bind-time side effects.
    ///
    /// # Panics
    ///
    /// Panics if an item position is out of the store's range; positions must
    /// lie inside `0..effective_count()`.
    pub fn bind_row(&self, row: &dyn RowWidget, position: usize) {
        self.affinity.debug_assert_same_thread();
        let kind = self.row_kind_at(position);
        match kind {
            RowKind::Footer => {
                self.apply_full_span(row, kind);
                row.begin_loading(FOOTER_SPINNER);
            }
            RowKind::Placeholder => {
                self.apply_full_span(row, kind);
                let message = self.state.placeholder_message.lock();
                row.set_text(PLACEHOLDER_MESSAGE, message.as_str());
            }
            _ => {
                {
                    let items = self.store.items();
                    self.binder.bind_item(row, position, &items[position]);
                }
                if self.animate_entrances && self.gate.should_animate(position) {
                    row.play_entrance();
                }
            }
        }
        self.maybe_request_more(position);
    }

    /// Notifies the adapter that a row left the viewport.
    ///
    /// Cancels a running entrance animation so a recycled widget does not
    /// replay it at its next position.
    pub fn on_row_detached(&self, row: &dyn RowWidget) {
        if self.animate_entrances {
            row.cancel_entrance();
        }
    }

    fn apply_full_span(&self, row: &dyn RowWidget, target: RowKind) {
        let Some(layout) = &self.layout else {
            return;
        };
        span::apply_full_span(
            layout.as_ref(),
            row,
            target,
            &self.resolver,
            &self.installed_span_kinds,
        );
    }

    /// Fires the load-more handler when the terminal position is bound and
    /// the effective count has reached the threshold. Level-triggered on
    /// purpose: every qualifying bind fires again.
    fn maybe_request_more(&self, position: usize) {
        if self.state.show_placeholder.load(Ordering::SeqCst) {
            return;
        }
        let Some(handler) = self.load_more.lock().clone() else {
            return;
        };
        let count = self.effective_count();
        if position + 1 == count
            && count >= self.state.load_more_threshold.load(Ordering::SeqCst)
        {
            tracing::trace!(target: "roster::adapter", position, count, "requesting more rows");
            handler();
        }
    }
}

static_assertions::assert_impl_all!(ListAdapter<String>: Send, Sync);
