//! Screen state, input handling and the actions the main loop carries out.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
