//! Generic list store implementation.
//!
//! `ListStore<T>` owns the ordered item collection behind a list adapter and
//! pairs every mutation with a change notification, so the host list surface
//! can keep its viewport in sync without diffing.

use parking_lot::RwLock;

use roster_core::thread_check::ThreadAffinity;
use roster_core::Signal;

/// Collection of signals emitted by a [`ListStore`].
///
/// The host framework connects to these signals to stay synchronized with the
/// store. Row arguments are `(first, last)` inclusive position ranges.
///
/// # Signal Usage
///
/// - **Before modifications**: `rows_about_to_be_*` or `about_to_reset`
/// - **After modifications**: `rows_*` or `reset`
pub struct StoreSignals {
    /// Emitted just before rows are inserted. Args: (first row, last row)
    pub rows_about_to_be_inserted: Signal<(usize, usize)>,

    /// Emitted after rows have been inserted. Args: (first row, last row)
    pub rows_inserted: Signal<(usize, usize)>,

    /// Emitted just before rows are removed. Args: (first row, last row)
    pub rows_about_to_be_removed: Signal<(usize, usize)>,

    /// Emitted after rows have been removed. Args: (first row, last row)
    pub rows_removed: Signal<(usize, usize)>,

    /// Emitted before the store is reset wholesale.
    pub about_to_reset: Signal<()>,

    /// Emitted after the store has been reset wholesale.
    pub reset: Signal<()>,
}

impl Default for StoreSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreSignals {
    /// Creates a new set of store signals.
    pub fn new() -> Self {
        Self {
            rows_about_to_be_inserted: Signal::new(),
            rows_inserted: Signal::new(),
            rows_about_to_be_removed: Signal::new(),
            rows_removed: Signal::new(),
            about_to_reset: Signal::new(),
            reset: Signal::new(),
        }
    }

    /// Emits signals for row insertion.
    ///
    /// Calls the provided function between the about-to and after signals.
    pub fn emit_rows_inserted<F>(&self, first: usize, last: usize, insert_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_inserted.emit((first, last));
        insert_fn();
        self.rows_inserted.emit((first, last));
    }

    /// Emits signals for row removal.
    ///
    /// Calls the provided function between the about-to and after signals.
    pub fn emit_rows_removed<F>(&self, first: usize, last: usize, remove_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_removed.emit((first, last));
        remove_fn();
        self.rows_removed.emit((first, last));
    }

    /// Emits signals for a wholesale reset.
    ///
    /// Calls the provided function between the about-to and after signals.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        self.about_to_reset.emit(());
        reset_fn();
        self.reset.emit(());
    }
}

/// An ordered, mutable item collection with paired change notifications.
///
/// The store is the single owner of its items. All mutation goes through
/// methods that emit the matching [`StoreSignals`] notification; the one
/// deliberate exception is [`items_mut`](Self::items_mut), documented below.
///
/// # Example
///
/// ```
/// use roster::model::ListStore;
///
/// let store = ListStore::new(vec!["Apple".to_string(), "Banana".to_string()]);
///
/// store.signals().rows_inserted.connect(|&(first, last)| {
///     println!("rows {first}..={last} inserted");
/// });
///
/// store.insert(1, "Apricot".to_string());
/// assert_eq!(store.len(), 3);
/// ```
pub struct ListStore<T> {
    items: RwLock<Vec<T>>,
    signals: StoreSignals,
    affinity: ThreadAffinity,
}

impl<T: Send + Sync + 'static> ListStore<T> {
    /// Creates a store owning the given items.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            signals: StoreSignals::new(),
            affinity: ThreadAffinity::current(),
        }
    }

    /// Creates an empty store.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the number of items in the store.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Inserts an item at the specified position and notifies a single
    /// insertion there.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`.
    pub fn insert(&self, position: usize, item: T) {
        self.affinity.debug_assert_same_thread();
        self.signals.emit_rows_inserted(position, position, || {
            self.items.write().insert(position, item);
        });
    }

    /// Removes and returns the item at the specified position, notifying a
    /// single removal there.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    pub fn remove(&self, position: usize) -> T {
        self.affinity.debug_assert_same_thread();
        let mut removed = None;
        self.signals.emit_rows_removed(position, position, || {
            removed = Some(self.items.write().remove(position));
        });
        removed.unwrap()
    }

    /// Appends a batch of items, notifying one contiguous range insertion
    /// starting at the prior size.
    ///
    /// An empty batch is a no-op and emits nothing.
    pub fn extend(&self, items: Vec<T>) {
        self.affinity.debug_assert_same_thread();
        if items.is_empty() {
            return;
        }
        let first = self.items.read().len();
        let last = first + items.len() - 1;
        self.signals.emit_rows_inserted(first, last, || {
            self.items.write().extend(items);
        });
    }

    /// Replaces the entire collection and notifies a wholesale reset.
    ///
    /// No positional diffing is attempted; connected views are expected to
    /// rebuild from scratch.
    pub fn set_items(&self, items: Vec<T>) {
        self.affinity.debug_assert_same_thread();
        tracing::debug!(target: "roster::store", count = items.len(), "store reset");
        self.signals.emit_reset(|| {
            *self.items.write() = items;
        });
    }

    /// Returns read access to the live collection.
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Returns write access to the live collection, bypassing notification.
    ///
    /// This is a deliberate escape hatch: mutations made through the returned
    /// guard emit no signals, so connected views will not learn about them
    /// until the next notifying mutation or reset. Prefer the notifying
    /// methods unless you are batching changes you will announce yourself.
    pub fn items_mut(&self) -> impl std::ops::DerefMut<Target = Vec<T>> + '_ {
        self.affinity.debug_assert_same_thread();
        self.items.write()
    }

    /// Returns the signals for this store.
    pub fn signals(&self) -> &StoreSignals {
        &self.signals
    }
}

static_assertions::assert_impl_all!(ListStore<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_new_and_len() {
        let store = ListStore::new(vec!["a", "b", "c"]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());

        let empty = ListStore::<&str>::empty();
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_insert_and_signal() {
        let store = ListStore::new(vec!["a", "b", "c"]);
        let inserted = Arc::new(Mutex::new(Vec::new()));

        let recv = inserted.clone();
        store.signals().rows_inserted.connect(move |&(first, last)| {
            recv.lock().push((first, last));
        });

        store.insert(1, "x");

        assert_eq!(*store.items(), vec!["a", "x", "b", "c"]);
        let events = inserted.lock();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], (1, 1));
    }

    #[test]
    fn test_remove_and_signal() {
        let store = ListStore::new(vec!["a", "b", "c"]);
        let removed = Arc::new(Mutex::new(Vec::new()));

        let recv = removed.clone();
        store.signals().rows_removed.connect(move |&(first, last)| {
            recv.lock().push((first, last));
        });

        let item = store.remove(1);
        assert_eq!(item, "b");
        assert_eq!(store.len(), 2);

        let events = removed.lock();
        assert_eq!(events[0], (1, 1));
    }

    #[test]
    fn test_extend_signals_one_range() {
        let store = ListStore::new(vec!["a", "b", "c"]);
        let inserted = Arc::new(Mutex::new(Vec::new()));

        let recv = inserted.clone();
        store.signals().rows_inserted.connect(move |&(first, last)| {
            recv.lock().push((first, last));
        });

        store.extend(vec!["d", "e"]);

        assert_eq!(*store.items(), vec!["a", "b", "c", "d", "e"]);
        let events = inserted.lock();
        assert_eq!(events.len(), 1);
        // One contiguous insertion covering positions 3 and 4.
        assert_eq!(events[0], (3, 4));
    }

    #[test]
    fn test_extend_empty_batch_is_silent() {
        let store = ListStore::new(vec!["a"]);
        let count = Arc::new(Mutex::new(0));

        let recv = count.clone();
        store.signals().rows_inserted.connect(move |_| {
            *recv.lock() += 1;
        });

        store.extend(Vec::new());
        assert_eq!(*count.lock(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_items_resets() {
        let store = ListStore::new(vec!["a", "b", "c"]);
        let order = Arc::new(Mutex::new(Vec::new()));

        let recv = order.clone();
        store.signals().about_to_reset.connect(move |_| {
            recv.lock().push("about");
        });
        let recv = order.clone();
        store.signals().reset.connect(move |_| {
            recv.lock().push("done");
        });

        store.set_items(vec!["x"]);

        assert_eq!(*store.items(), vec!["x"]);
        assert_eq!(*order.lock(), vec!["about", "done"]);
    }

    #[test]
    fn test_about_to_signals_fire_before_mutation() {
        let store = Arc::new(ListStore::new(vec!["a", "b"]));
        let len_seen = Arc::new(Mutex::new(None));

        let recv = len_seen.clone();
        let probe = store.clone();
        store
            .signals()
            .rows_about_to_be_inserted
            .connect(move |_| {
                *recv.lock() = Some(probe.len());
            });

        store.insert(2, "c");
        // The about-to edge observes the pre-mutation length.
        assert_eq!(*len_seen.lock(), Some(2));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_items_mut_bypasses_notification() {
        let store = ListStore::new(vec!["a"]);
        let count = Arc::new(Mutex::new(0));

        let recv = count.clone();
        store.signals().rows_inserted.connect(move |_| {
            *recv.lock() += 1;
        });

        store.items_mut().push("b");

        assert_eq!(store.len(), 2);
        assert_eq!(*count.lock(), 0);
    }
}
