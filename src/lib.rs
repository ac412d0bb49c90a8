pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod format;
pub mod logging;
pub mod ui;
pub mod view;
