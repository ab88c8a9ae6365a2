//! Web server for the interactive cleaning UI.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
