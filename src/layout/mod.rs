pub mod floating;

use ratatui::prelude::Rect;

use crate::window::{FloatRect, Point};

pub fn rect_contains(rect: FloatRect, point: Point) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    point.x >= rect.x && point.x < rect.right() && point.y >= rect.y && point.y < rect.bottom()
}

/// Clip a signed rectangle to `bounds`, returning an empty `Rect` when
/// nothing of it is visible.
pub fn float_rect_visible(rect: FloatRect, bounds: Rect) -> Rect {
    let bounds_x0 = bounds.x as i32;
    let bounds_y0 = bounds.y as i32;
    let bounds_x1 = bounds_x0 + bounds.width as i32;
    let bounds_y1 = bounds_y0 + bounds.height as i32;
    let x0 = rect.x.max(bounds_x0);
    let y0 = rect.y.max(bounds_y0);
    let x1 = rect.right().min(bounds_x1);
    let y1 = rect.bottom().min(bounds_y1);
    if x1 <= x0 || y1 <= y0 {
        return Rect::default();
    }
    Rect {
        x: x0 as u16,
        y: y0 as u16,
        width: (x1 - x0) as u16,
        height: (y1 - y0) as u16,
    }
}

/// Unsigned counterpart used for overlay hit tests.
pub fn area_contains(rect: Rect, point: Point) -> bool {
    rect_contains(
        FloatRect::new(rect.x as i32, rect.y as i32, rect.width, rect.height),
        point,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edge_cases() {
        let empty = FloatRect::new(0, 0, 0, 5);
        assert!(!rect_contains(empty, Point::new(0, 0)));
        let r = FloatRect::new(-3, 1, 3, 3);
        assert!(rect_contains(r, Point::new(-3, 1)));
        assert!(!rect_contains(r, Point::new(0, 1)));
        assert!(!rect_contains(r, Point::new(-1, 4)));
    }

    #[test]
    fn float_rect_visible_clips_negative_offsets() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let rect = FloatRect::new(-5, 3, 20, 6);
        let visible = float_rect_visible(rect, bounds);
        assert_eq!(visible.x, 0);
        assert_eq!(visible.y, 3);
        assert_eq!(visible.width, 15);
        assert_eq!(visible.height, 6);
    }

    #[test]
    fn float_rect_visible_fully_offscreen_is_empty() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let rect = FloatRect::new(200, 3, 20, 6);
        assert_eq!(float_rect_visible(rect, bounds), Rect::default());
    }

    #[test]
    fn area_contains_matches_signed_variant() {
        let area = Rect {
            x: 8,
            y: 56,
            width: 64,
            height: 100,
        };
        assert!(area_contains(area, Point::new(8, 56)));
        assert!(!area_contains(area, Point::new(72, 56)));
    }
}
