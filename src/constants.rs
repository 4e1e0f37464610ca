//! Shared crate-wide constants.
//!
//! All geometry is expressed in logical units. The terminal host maps one
//! cell to `CELL_WIDTH` × `CELL_HEIGHT` logical units.

/// Smallest width a resize gesture may produce.
pub const MIN_WINDOW_WIDTH: u16 = 200;

/// Smallest height a resize gesture may produce.
pub const MIN_WINDOW_HEIGHT: u16 = 100;

/// Side length of the square resize grip anchored at a window's
/// bottom-right corner.
pub const RESIZE_GRIP_SIZE: u16 = 12;

/// Height of the title bar strip that starts a drag gesture.
pub const TITLE_BAR_HEIGHT: u16 = 32;

/// Width of each title bar button (minimize, maximize, close).
pub const TITLE_BUTTON_WIDTH: u16 = 28;

/// Padding between the last title bar button and the window's right edge.
pub const TITLE_BUTTON_PADDING: u16 = 8;

/// Size given to freshly opened windows.
pub const DEFAULT_WINDOW_WIDTH: u16 = 640;
pub const DEFAULT_WINDOW_HEIGHT: u16 = 360;

/// Offset of the first window in a workspace from the content area origin.
pub const CASCADE_ORIGIN: i32 = 40;

/// Step applied per window already present in the target workspace.
pub const CASCADE_STEP: i32 = 24;

/// Inset applied on every side of the content area when maximizing.
pub const MAXIMIZE_INSET: u16 = 10;

pub const DEFAULT_WORKSPACE_COUNT: usize = 4;

/// Upper bound accepted from configuration.
pub const MAX_WORKSPACE_COUNT: usize = 32;

/// Logical units covered by one terminal cell in the host.
pub const CELL_WIDTH: i32 = 8;
pub const CELL_HEIGHT: i32 = 16;
