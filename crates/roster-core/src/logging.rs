//! Logging facilities for Roster.
//!
//! Roster uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Call sites use the target names in [`targets`] so logs can be filtered per
//! subsystem, e.g. `RUST_LOG=roster::adapter=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "roster_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "roster_core::signal";
    /// Store mutation target.
    pub const STORE: &str = "roster::store";
    /// Adapter binding/resolution target.
    pub const ADAPTER: &str = "roster::adapter";
    /// Span override installation target.
    pub const SPAN: &str = "roster::span";
}

/// Macros for common tracing patterns.
///
/// These are re-exported for convenience but are just wrappers around the
/// `tracing` crate macros with a consistent target.
#[macro_export]
macro_rules! roster_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "roster_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! roster_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "roster_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! roster_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "roster_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! roster_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "roster_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! roster_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "roster_core", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_namespaced() {
        assert!(targets::SIGNAL.starts_with(targets::CORE));
        for target in [targets::STORE, targets::ADAPTER, targets::SPAN] {
            assert!(target.starts_with("roster::"));
        }
    }

    #[test]
    fn test_macros_emit() {
        tracing_subscriber::fmt().with_test_writer().try_init().ok();
        roster_trace!("trace message");
        roster_debug!(value = 3, "debug message");
        roster_info!("info message");
        roster_warn!("warn message");
        roster_error!("error message");
    }
}
