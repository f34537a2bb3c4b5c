//! SessionDetector service: responsibility and boundaries
//!
//! This module is responsible ONLY for turning ambient session signals
//! (XDG variables, display markers, compositor sockets) into a classified
//! `Environment` and a canonical window-manager identifier. It reads the
//! process environment once and never touches configuration or commands;
//! command lookup belongs to `services::command_resolver`.

mod environment;
mod signals;
mod window_manager;

pub use self::environment::{DisplayServer, Environment};
pub use self::signals::SessionSignals;
pub use self::window_manager::{detect_window_manager, GENERIC_WM};
