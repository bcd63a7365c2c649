//! Category-based emoji picker.
//!
//! The core is [`picker::EmojiPicker`]: it tracks the active category and
//! visibility over an immutable [`catalog::Catalog`], projects that state into
//! a [`picker::PresentationTree`], and reports chosen items to a
//! [`picker::Host`]. The remaining modules make up the terminal host shipped
//! as the `emojipick` binary.

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod events;
pub mod log;
pub mod picker;
pub mod surface;
pub mod tui;
