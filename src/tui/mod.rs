//! Terminal rendering for the host application.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;
