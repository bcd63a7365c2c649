//! Category picker widget.
//!
//! The widget owns a [`PickerState`] over a shared [`Catalog`](crate::catalog::Catalog)
//! and talks to its embedding application only through the [`Host`] trait.
//! Rendering is a pure projection into a [`PresentationTree`] that the host
//! mounts however it likes.

mod host;
mod render;
mod state;
mod widget;

pub use host::{Anchor, Host};
pub use render::{render, CategoryTab, GridCell, PresentationTree};
pub use state::{PickerState, Visibility};
pub use widget::{Command, EmojiPicker, InvocationPolicy};

#[cfg(test)]
pub(crate) use host::testing;
