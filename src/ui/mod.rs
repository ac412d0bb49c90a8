//! Terminal dashboard: state, key handling and rendering.

pub mod app;
pub mod confirm;
pub mod detail;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notice;
pub mod render;
pub mod runtime;
pub mod table;
pub mod terminal_guard;
pub mod theme;
