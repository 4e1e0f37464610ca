//! Per-window pointer gesture state.
//!
//! A session is `Idle` until a pointer-down lands on the title bar (drag) or
//! on the bottom-right grip (resize). While active it maps pointer positions
//! to new bounds relative to where the gesture started.

use super::{FloatRect, Point};
use crate::layout::floating::{apply_move, apply_resize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionSession {
    #[default]
    Idle,
    Dragging {
        anchor: Point,
        initial: FloatRect,
    },
    Resizing {
        anchor: Point,
        initial: FloatRect,
    },
}

impl InteractionSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::Dragging { .. } => Some(GestureKind::Drag),
            Self::Resizing { .. } => Some(GestureKind::Resize),
        }
    }

    /// Start a gesture. Returns `false` and leaves the current session
    /// untouched when one is already running.
    pub fn begin(&mut self, kind: GestureKind, anchor: Point, initial: FloatRect) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = match kind {
            GestureKind::Drag => Self::Dragging { anchor, initial },
            GestureKind::Resize => Self::Resizing { anchor, initial },
        };
        true
    }

    /// Bounds implied by the pointer being at `pointer`, or `None` when idle.
    pub fn track(&self, pointer: Point) -> Option<FloatRect> {
        match *self {
            Self::Idle => None,
            Self::Dragging { anchor, initial } => Some(apply_move(initial, anchor, pointer)),
            Self::Resizing { anchor, initial } => Some(apply_resize(initial, anchor, pointer)),
        }
    }

    /// Return to idle. Reports whether a gesture was running.
    pub fn end(&mut self) -> bool {
        let was_active = !self.is_idle();
        *self = Self::Idle;
        was_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: FloatRect = FloatRect::new(100, 100, 640, 360);

    #[test]
    fn drag_moves_origin_by_pointer_delta() {
        let mut s = InteractionSession::default();
        assert!(s.begin(GestureKind::Drag, Point::new(300, 110), START));
        let moved = s.track(Point::new(350, 80)).expect("dragging");
        assert_eq!(moved, FloatRect::new(150, 70, 640, 360));
    }

    #[test]
    fn resize_clamps_to_minimum() {
        let mut s = InteractionSession::default();
        assert!(s.begin(GestureKind::Resize, Point::new(735, 455), START));
        let resized = s.track(Point::new(735 - 900, 455 - 900)).expect("resizing");
        assert_eq!(resized, FloatRect::new(100, 100, 200, 100));
    }

    #[test]
    fn second_begin_is_rejected_and_keeps_session() {
        let mut s = InteractionSession::default();
        assert!(s.begin(GestureKind::Drag, Point::new(0, 0), START));
        assert!(!s.begin(GestureKind::Resize, Point::new(9, 9), START));
        assert_eq!(s.kind(), Some(GestureKind::Drag));
    }

    #[test]
    fn end_returns_to_idle() {
        let mut s = InteractionSession::default();
        assert!(!s.end());
        s.begin(GestureKind::Resize, Point::new(1, 1), START);
        assert!(s.end());
        assert!(s.is_idle());
        assert_eq!(s.track(Point::new(5, 5)), None);
    }
}
