//! Estate terminal dashboard library exports.

pub mod config;
pub mod error;
pub mod events;
pub mod form;
pub mod keys;
pub mod logging;
pub mod state;
pub mod theme;
pub mod views;
pub mod widgets;
