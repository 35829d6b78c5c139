//! Roster - a Model/View adapter toolkit for recycling list surfaces.
//!
//! Roster sits between an ordered, mutable item collection and a scrollable
//! list surface that recycles row widgets. It decides *which logical kind*
//! each position is and *when* to ask for more data; the host framework owns
//! scrolling, recycling, measurement and painting.
//!
//! - **Model** ([`model`]): [`ListStore<T>`](model::ListStore) owns the items
//!   and pairs every mutation with a change signal.
//! - **View boundaries** ([`view`]): [`RowWidget`](view::RowWidget) and
//!   [`SpanCapable`](view::SpanCapable) wrap the host's widgets and layout
//!   managers.
//! - **Adapter** ([`adapter`]): [`ListAdapter<T>`](adapter::ListAdapter)
//!   resolves row kinds, wires clicks, gates entrance animations, installs
//!   full-span overrides and fires load-more signaling.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use roster::prelude::*;
//!
//! struct TitleBinder;
//!
//! impl RowBinder<String> for TitleBinder {
//!     fn bind_item(&self, row: &dyn RowWidget, _position: usize, item: &String) {
//!         row.set_text(ChildId(10), item);
//!     }
//! }
//!
//! let adapter = ListAdapter::new(
//!     vec!["first".to_string(), "second".to_string()],
//!     Arc::new(TitleBinder),
//! );
//!
//! // The host framework drives the adapter:
//! assert_eq!(adapter.effective_count(), 2);
//! assert_eq!(adapter.row_kind_at(1), RowKind::Item(0));
//!
//! // Consumers register callbacks:
//! adapter.set_on_item_click(|_row, position| println!("row {position} clicked"));
//! adapter.set_on_load_more(|| println!("fetch next page"));
//! ```

pub mod adapter;
pub mod model;
pub mod prelude;
pub mod view;

pub use roster_core::{ConnectionGuard, ConnectionId, Signal, ThreadAffinity};
