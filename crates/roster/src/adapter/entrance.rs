//! Entrance-animation gating.

use std::sync::atomic::{AtomicI64, Ordering};

/// Decides, per bind, whether a row plays its entrance animation.
///
/// The gate tracks the highest position that has already animated. Only a
/// bind at a strictly greater position animates, so rows re-entering from
/// above during upward scrolling (or opportunistic rebinds of already-seen
/// positions) stay still, while rows appearing for the first time at the
/// bottom slide in.
///
/// The watermark survives wholesale data replacement; hosts that want fresh
/// content to animate again after a reset call [`reset`](Self::reset)
/// explicitly.
pub struct EntranceGate {
    /// Highest position already animated; -1 before any bind.
    last_animated: AtomicI64,
}

impl Default for EntranceGate {
    fn default() -> Self {
        Self::new()
    }
}

impl EntranceGate {
    /// Creates a gate that has not animated any position yet.
    pub fn new() -> Self {
        Self {
            last_animated: AtomicI64::new(-1),
        }
    }

    /// Returns `true` and advances the watermark iff `position` is beyond it.
    pub fn should_animate(&self, position: usize) -> bool {
        let position = position as i64;
        let previous = self.last_animated.fetch_max(position, Ordering::SeqCst);
        position > previous
    }

    /// The highest position that has animated, or `None` if none has.
    pub fn last_animated(&self) -> Option<usize> {
        let last = self.last_animated.load(Ordering::SeqCst);
        usize::try_from(last).ok()
    }

    /// Forgets the watermark so the next bind at any position animates.
    pub fn reset(&self) {
        self.last_animated.store(-1, Ordering::SeqCst);
    }
}
