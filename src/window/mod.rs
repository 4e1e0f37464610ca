pub mod focus;
pub mod interaction;

use std::fmt;

use slotmap::new_key_type;

use crate::content::Content;
use crate::layout::rect_contains;

pub use focus::FocusRing;
pub use interaction::{GestureKind, InteractionSession};

new_key_type! {
    /// Handle to an open window. Keys are generational, so a handle whose
    /// window has been closed never resolves again.
    pub struct WindowId;
}

/// Pointer position in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`, saturating.
    pub const fn delta_from(self, origin: Point) -> (i32, i32) {
        (self.x.saturating_sub(origin.x), self.y.saturating_sub(origin.y))
    }
}

/// Signed floating rectangle origin with unsigned size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl FloatRect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    // Edges saturate: windows may be dragged arbitrarily far off-screen.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    pub fn contains(&self, point: Point) -> bool {
        rect_contains(*self, point)
    }
}

impl fmt::Display for FloatRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}

/// A floating window owned by exactly one workspace.
#[derive(Debug)]
pub struct Window {
    title: String,
    bounds: FloatRect,
    saved_bounds: Option<FloatRect>,
    maximized: bool,
    minimized: bool,
    workspace: usize,
    session: InteractionSession,
    content: Box<dyn Content>,
}

impl Window {
    pub(crate) fn new(content: Box<dyn Content>, bounds: FloatRect, workspace: usize) -> Self {
        Self {
            title: content.title().to_string(),
            bounds,
            saved_bounds: None,
            maximized: false,
            minimized: false,
            workspace,
            session: InteractionSession::default(),
            content,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bounds(&self) -> FloatRect {
        self.bounds
    }

    pub(crate) fn set_bounds(&mut self, bounds: FloatRect) {
        self.bounds = bounds;
    }

    /// Bounds captured before maximizing; `None` while not maximized.
    pub fn saved_bounds(&self) -> Option<FloatRect> {
        self.saved_bounds
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub(crate) fn set_minimized(&mut self, minimized: bool) {
        self.minimized = minimized;
    }

    /// Index of the workspace container holding this window.
    pub fn workspace(&self) -> usize {
        self.workspace
    }

    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut InteractionSession {
        &mut self.session
    }

    pub fn content(&self) -> &dyn Content {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> &mut dyn Content {
        self.content.as_mut()
    }

    /// Toggle between `target` and the bounds saved before maximizing.
    ///
    /// Restoring without saved bounds keeps the current bounds.
    pub(crate) fn toggle_maximize(&mut self, target: FloatRect) {
        if self.maximized {
            if let Some(prev) = self.saved_bounds.take() {
                self.bounds = prev;
            }
            self.maximized = false;
        } else {
            self.saved_bounds = Some(self.bounds);
            self.bounds = target;
            self.maximized = true;
        }
    }

    pub(crate) fn into_content(self) -> Box<dyn Content> {
        self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentKind, PlaceholderContent};

    fn window(bounds: FloatRect) -> Window {
        Window::new(
            Box::new(PlaceholderContent::new(ContentKind::Editor)),
            bounds,
            0,
        )
    }

    #[test]
    fn title_comes_from_content() {
        let w = window(FloatRect::new(0, 0, 640, 360));
        assert_eq!(w.title(), "Editor");
    }

    #[test]
    fn maximize_round_trip_restores_bounds() {
        let start = FloatRect::new(100, 100, 640, 360);
        let mut w = window(start);
        let target = FloatRect::new(10, 58, 1900, 1002);
        w.toggle_maximize(target);
        assert!(w.is_maximized());
        assert_eq!(w.bounds(), target);
        assert_eq!(w.saved_bounds(), Some(start));
        w.toggle_maximize(target);
        assert!(!w.is_maximized());
        assert_eq!(w.bounds(), start);
        assert_eq!(w.saved_bounds(), None);
    }

    #[test]
    fn restore_without_saved_bounds_keeps_current() {
        let start = FloatRect::new(5, 6, 300, 200);
        let mut w = window(start);
        w.maximized = true;
        w.toggle_maximize(FloatRect::new(0, 0, 1, 1));
        assert!(!w.is_maximized());
        assert_eq!(w.bounds(), start);
    }

    #[test]
    fn point_delta() {
        let a = Point::new(150, 70);
        assert_eq!(a.delta_from(Point::new(100, 100)), (50, -30));
    }
}
