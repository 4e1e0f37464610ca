//! Error taxonomy for shell operations.
//!
//! Every variant is local and recoverable. Hosts are expected to surface
//! them as transient notifications; nothing here terminates the process.

use thiserror::Error;

use crate::window::WindowId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("workspace index {index} is out of range (have {count})")]
    InvalidWorkspaceIndex { index: usize, count: usize },

    #[error("window {0:?} already has a gesture in progress")]
    GestureInProgress(WindowId),

    #[error("window {0:?} is no longer open")]
    StaleHandle(WindowId),

    #[error("unknown content kind `{0}`")]
    UnknownContentKind(String),

    #[error("no window has input focus")]
    NoFocusedWindow,
}

pub type ShellResult<T> = Result<T, ShellError>;
