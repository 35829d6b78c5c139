//! The adapter layer.
//!
//! [`ListAdapter`] is the piece the host framework talks to: it resolves
//! positions to [`RowKind`]s, wires clicks at row creation, binds data and
//! side effects per position, and signals for more data near the end of the
//! list. Consumers plug in a [`RowBinder`] for their item layouts.

mod binder;
mod entrance;
mod kind;
mod list_adapter;
mod span;

pub use binder::RowBinder;
pub use entrance::EntranceGate;
pub use kind::RowKind;
pub use list_adapter::{
    ItemClickHandler, ListAdapter, LoadMoreHandler, PlaceholderClickHandler, FOOTER_SPINNER,
    PLACEHOLDER_MESSAGE,
};
