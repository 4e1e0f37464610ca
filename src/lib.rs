//! Window management core for a full-screen desktop shell.
//!
//! The core ([`shell::Shell`]) owns floating windows, their drag and resize
//! gestures, N workspaces, a global focus ring and the overlay layout. The
//! remaining modules make up a terminal host that drives it.

pub mod actions;
pub mod command;
pub mod config;
pub mod constants;
pub mod content;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod keybindings;
pub mod layout;
pub mod notifications;
pub mod overlay;
pub mod runner;
pub mod shell;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
pub mod workspace;

pub use command::{Command, Outcome, PointerEvent, PointerOutcome, ShellEvent};
pub use error::{ShellError, ShellResult};
pub use shell::Shell;
pub use window::{FloatRect, Point, WindowId};
