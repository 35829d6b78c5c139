//! Data ownership for list adapters.
//!
//! The model layer owns the ordered item collection and announces every
//! mutation through signals, so the view side never has to diff. Positions in
//! store signals are raw item positions; the adapter layer maps them onto the
//! effective position range it reports to the host (which may add a footer or
//! collapse to a single placeholder).
//!
//! # Example
//!
//! ```
//! use roster::model::ListStore;
//!
//! let store = ListStore::new(vec!["Apple".to_string(), "Banana".to_string()]);
//!
//! store.signals().rows_inserted.connect(|&(first, last)| {
//!     println!("rows {first}..={last} inserted");
//! });
//!
//! store.extend(vec!["Cherry".to_string()]);
//! assert_eq!(store.len(), 3);
//! ```

mod list_store;

pub use list_store::{ListStore, StoreSignals};
