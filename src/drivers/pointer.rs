//! Conversions between terminal cells and logical units.
//!
//! A cell covers `CELL_WIDTH` × `CELL_HEIGHT` logical units. Pointer
//! positions are reported at cell centers, and a logical rectangle occupies
//! exactly the cells whose centers it contains, so drawing and hit testing
//! agree.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Rect, Size};

use crate::command::PointerEvent;
use crate::constants::{CELL_HEIGHT, CELL_WIDTH};
use crate::window::{FloatRect, Point};

pub fn cell_center(column: u16, row: u16) -> Point {
    Point::new(
        column as i32 * CELL_WIDTH + CELL_WIDTH / 2,
        row as i32 * CELL_HEIGHT + CELL_HEIGHT / 2,
    )
}

/// Logical display size for a surface of `cells`.
pub fn display_size(cells: Size) -> Size {
    Size::new(
        cells.width.saturating_mul(CELL_WIDTH as u16),
        cells.height.saturating_mul(CELL_HEIGHT as u16),
    )
}

/// Left-button activity as a pointer event; everything else is ignored.
pub fn pointer_event(mouse: &MouseEvent) -> Option<PointerEvent> {
    let point = cell_center(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down(point)),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(PointerEvent::Move(point))
        }
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up(point)),
        _ => None,
    }
}

fn ceil_div(a: i64, b: i64) -> i64 {
    -((-a).div_euclid(b))
}

// First cell and cell count along one axis. Computed in i64 so rectangles
// at the far ends of the i32 range convert without overflow.
fn span_to_cells(start: i32, len: u16, cell: i32) -> (i32, u16) {
    let (start, cell) = (i64::from(start), i64::from(cell));
    let half = cell / 2;
    let first = ceil_div(start - half, cell);
    let end = ceil_div(start + i64::from(len) - half, cell);
    (first as i32, (end - first).clamp(0, i64::from(u16::MAX)) as u16)
}

/// Cells covered by a logical rectangle. The result may start off-screen.
pub fn logical_to_cells(rect: FloatRect) -> FloatRect {
    let (x, width) = span_to_cells(rect.x, rect.width, CELL_WIDTH);
    let (y, height) = span_to_cells(rect.y, rect.height, CELL_HEIGHT);
    FloatRect::new(x, y, width, height)
}

pub fn area_to_cells(rect: Rect) -> FloatRect {
    logical_to_cells(FloatRect::new(
        rect.x as i32,
        rect.y as i32,
        rect.width,
        rect.height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn cell_centers() {
        assert_eq!(cell_center(0, 0), Point::new(4, 8));
        assert_eq!(cell_center(10, 3), Point::new(84, 56));
    }

    #[test]
    fn cells_follow_center_rule() {
        // panel 48 tall covers rows whose centers are 8, 24, 40
        let panel = area_to_cells(Rect {
            x: 0,
            y: 0,
            width: 1600,
            height: 48,
        });
        assert_eq!(panel, FloatRect::new(0, 0, 200, 3));
        let off = logical_to_cells(FloatRect::new(-20, 100, 640, 32));
        assert_eq!(off, FloatRect::new(-3, 6, 80, 2));
    }

    #[test]
    fn drawn_cells_hit_the_same_rect() {
        let rect = FloatRect::new(37, 61, 211, 99);
        let cells = logical_to_cells(rect);
        for col in cells.x..cells.right() {
            for row in cells.y..cells.bottom() {
                assert!(rect.contains(cell_center(col as u16, row as u16)));
            }
        }
        assert!(!rect.contains(cell_center((cells.right()) as u16, cells.y as u16)));
    }

    #[test]
    fn only_left_button_maps() {
        let mut ev = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(pointer_event(&ev), Some(PointerEvent::Down(Point::new(20, 24))));
        ev.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(pointer_event(&ev), None);
        ev.kind = MouseEventKind::Up(MouseButton::Left);
        assert_eq!(pointer_event(&ev), Some(PointerEvent::Up(Point::new(20, 24))));
    }

    #[test]
    fn cells_for_rects_at_the_i32_limits() {
        let rect = FloatRect::new(i32::MAX - 3, i32::MIN, 640, 16);
        assert_eq!(
            logical_to_cells(rect),
            FloatRect::new(268_435_455, -134_217_728, 80, 1)
        );
    }
}
