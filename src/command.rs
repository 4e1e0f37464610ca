//! Messages into and out of the shell.
//!
//! Input sources translate raw events into [`Command`]s and hand them to
//! `Shell::update`; subscribers learn about lifecycle changes through
//! [`ShellEvent`]s.

use ratatui::layout::Size;

use crate::content::ContentKind;
use crate::overlay::OverlayLayout;
use crate::window::{Point, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Launch {
        kind: ContentKind,
        workspace: Option<usize>,
    },
    Close(WindowId),
    CloseFocused,
    Minimize(WindowId),
    MinimizeFocused,
    Restore(WindowId),
    ToggleMaximize(WindowId),
    ToggleMaximizeFocused,
    Focus(WindowId),
    CycleNext,
    CyclePrev,
    SwitchTo(usize),
    SwitchBy(isize),
    DisplayResized(Size),
    Pointer(PointerEvent),
    /// Abandon any drag or resize in progress, e.g. after a lost pointer-up.
    EndGesture,
}

/// Result of routing a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The shell used the event; it must not reach window content.
    Consumed,
    /// The event belongs to whatever lies under the pointer, if anything.
    Passed { target: Option<WindowId> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Launched(WindowId),
    Closed(WindowId),
    Focused(Option<WindowId>),
    WorkspaceSwitched(usize),
    Overlays(OverlayLayout),
    Pointer(PointerOutcome),
    GestureEnded(bool),
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    WindowOpened(WindowId),
    WindowClosed(WindowId),
    WorkspaceSwitched(usize),
}
