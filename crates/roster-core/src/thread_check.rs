//! Thread affinity verification utilities for Roster.
//!
//! Adapters and stores are driven by the single UI/interaction thread of the
//! host list framework. This module provides debug assertions that catch
//! accidental cross-thread mutation early, without imposing any cost on
//! release builds.
//!
//! # Usage
//!
//! ```
//! use roster_core::thread_check::ThreadAffinity;
//!
//! struct Counter {
//!     affinity: ThreadAffinity,
//!     value: std::cell::Cell<i32>,
//! }
//!
//! impl Counter {
//!     fn new() -> Self {
//!         Self {
//!             affinity: ThreadAffinity::current(),
//!             value: std::cell::Cell::new(0),
//!         }
//!     }
//!
//!     fn set_value(&self, v: i32) {
//!         // In debug builds, panic if called from the wrong thread
//!         self.affinity.debug_assert_same_thread();
//!         self.value.set(v);
//!     }
//! }
//! ```

use std::thread::ThreadId;

/// Thread affinity tracker for objects.
///
/// Records the thread on which an object was created and provides methods to
/// verify that subsequent operations occur on the same thread.
#[derive(Debug, Clone, Copy)]
pub struct ThreadAffinity {
    thread_id: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Create a new thread affinity tracker for the current thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            thread_id: std::thread::current().id(),
        }
    }

    /// Get the thread ID this affinity is bound to.
    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Check if the current thread matches this affinity.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    /// Assert that we are on the same thread as the affinity.
    ///
    /// This always runs (debug and release builds).
    ///
    /// # Panics
    ///
    /// Panics with a descriptive message if called from a different thread.
    #[inline]
    pub fn assert_same_thread(&self) {
        self.assert_same_thread_with_msg("object accessed from wrong thread")
    }

    /// Assert that we are on the same thread, with a custom message.
    ///
    /// # Panics
    ///
    /// Panics if called from a different thread.
    pub fn assert_same_thread_with_msg(&self, msg: &str) {
        if !self.is_same_thread() {
            self.panic_wrong_thread(msg);
        }
    }

    /// Debug-only assertion that we are on the same thread.
    ///
    /// This is a no-op in release builds.
    #[inline]
    pub fn debug_assert_same_thread(&self) {
        #[cfg(debug_assertions)]
        self.assert_same_thread();
    }

    /// Debug-only assertion with a custom message.
    #[inline]
    pub fn debug_assert_same_thread_with_msg(&self, msg: &str) {
        #[cfg(debug_assertions)]
        self.assert_same_thread_with_msg(msg);
        #[cfg(not(debug_assertions))]
        let _ = msg;
    }

    #[cold]
    #[inline(never)]
    fn panic_wrong_thread(&self, msg: &str) -> ! {
        let current = std::thread::current();
        let current_name = current.name().unwrap_or("<unnamed>");
        let current_id = current.id();

        panic!(
            "THREAD AFFINITY VIOLATION: {msg}\n\
             Object was created on thread: {:?}\n\
             Current thread: \"{current_name}\" (ID: {current_id:?})\n\
             Stores and adapters must only be mutated from the thread that\n\
             created them (the host framework's UI thread).",
            self.thread_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_thread_affinity_same_thread() {
        let affinity = ThreadAffinity::current();
        assert!(affinity.is_same_thread());
        // Should not panic
        affinity.assert_same_thread();
    }

    #[test]
    fn test_thread_affinity_different_thread() {
        let affinity = ThreadAffinity::current();
        let main_thread_id = std::thread::current().id();

        let result = Arc::new(AtomicBool::new(false));
        let result_clone = result.clone();

        let handle = std::thread::spawn(move || {
            // is_same_thread should return false from a different thread
            result_clone.store(!affinity.is_same_thread(), Ordering::SeqCst);
        });

        handle.join().unwrap();
        assert!(
            result.load(Ordering::SeqCst),
            "is_same_thread() should return false from different thread"
        );

        // Verify we're back on the original thread
        assert_eq!(std::thread::current().id(), main_thread_id);
    }

    #[test]
    fn test_thread_affinity_panic_on_wrong_thread() {
        let affinity = ThreadAffinity::current();

        let result = std::thread::spawn(move || {
            affinity.assert_same_thread();
        })
        .join();

        // The spawned thread should have panicked
        assert!(result.is_err(), "Expected thread to panic with affinity violation");
    }

    #[test]
    fn test_thread_affinity_with_custom_message() {
        let affinity = ThreadAffinity::current();
        // Should not panic on same thread
        affinity.assert_same_thread_with_msg("Custom message");
    }

    #[test]
    fn test_thread_affinity_default() {
        let affinity = ThreadAffinity::default();
        assert!(affinity.is_same_thread());
    }

    #[test]
    fn test_thread_affinity_clone() {
        let affinity1 = ThreadAffinity::current();
        let affinity2 = affinity1;

        assert_eq!(affinity1.thread_id(), affinity2.thread_id());
        assert!(affinity2.is_same_thread());
    }
}
