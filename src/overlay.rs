//! Overlay layout: the top panel, the side dock and the notification tray.
//!
//! Overlay rectangles are derived from the display size and a handful of
//! fixed metrics. They are recomputed on every display change and never
//! touch window geometry.

use ratatui::layout::{Rect, Size};
use serde::{Deserialize, Serialize};

use crate::constants::MAXIMIZE_INSET;
use crate::layout::area_contains;
use crate::window::{FloatRect, Point};

/// Fixed layout constants for the overlays, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayMetrics {
    pub panel_height: u16,
    pub dock_width: u16,
    pub margin: u16,
    pub tray_width: u16,
    pub tray_height: u16,
    /// Gap between the tray's right edge and the display's right edge.
    pub tray_right_gap: u16,
}

impl Default for OverlayMetrics {
    fn default() -> Self {
        Self {
            panel_height: 48,
            dock_width: 64,
            margin: 8,
            tray_width: 320,
            tray_height: 400,
            tray_right_gap: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayLayout {
    pub panel: Rect,
    pub dock: Rect,
    pub tray: Rect,
}

/// Compute all three overlay rectangles for `display`.
pub fn compute(display: Size, metrics: &OverlayMetrics) -> OverlayLayout {
    let panel_height = metrics.panel_height.min(display.height);
    let below_panel = panel_height.saturating_add(metrics.margin);
    let panel = Rect {
        x: 0,
        y: 0,
        width: display.width,
        height: panel_height,
    };
    let dock = Rect {
        x: metrics.margin,
        y: below_panel,
        width: metrics.dock_width,
        height: display
            .height
            .saturating_sub(panel_height)
            .saturating_sub(metrics.margin.saturating_mul(2)),
    };
    let tray = Rect {
        x: display
            .width
            .saturating_sub(metrics.tray_width)
            .saturating_sub(metrics.tray_right_gap),
        y: below_panel,
        width: metrics.tray_width,
        height: metrics.tray_height,
    };
    OverlayLayout { panel, dock, tray }
}

/// Display area below the panel where windows live.
pub fn content_area(display: Size, metrics: &OverlayMetrics) -> Rect {
    let panel_height = metrics.panel_height.min(display.height);
    Rect {
        x: 0,
        y: panel_height,
        width: display.width,
        height: display.height - panel_height,
    }
}

/// Bounds a window takes when maximized: the content area inset on every side.
pub fn maximized_bounds(display: Size, metrics: &OverlayMetrics) -> FloatRect {
    let area = content_area(display, metrics);
    let inset = MAXIMIZE_INSET;
    FloatRect {
        x: area.x as i32 + inset as i32,
        y: area.y as i32 + inset as i32,
        width: area.width.saturating_sub(inset * 2),
        height: area.height.saturating_sub(inset * 2),
    }
}

const DOCK_PADDING: i32 = 6;
const DOCK_ICON: i32 = 44;
const DOCK_SPACING: i32 = 8;

const PANEL_PADDING: i32 = 8;
const PANEL_BUTTON: i32 = 36;
const PANEL_SPACING: i32 = 6;

/// Index of the dock icon under `point`, if any of the first `slots` icons
/// is hit. Icons are stacked top to bottom.
pub fn dock_slot_at(layout: &OverlayLayout, point: Point, slots: usize) -> Option<usize> {
    if !area_contains(layout.dock, point) {
        return None;
    }
    let rel = point.y - layout.dock.y as i32 - DOCK_PADDING;
    stacked_slot(rel, DOCK_ICON, DOCK_SPACING, slots)
}

/// Index of the panel button under `point`. Buttons run left to right from
/// the panel's left edge.
pub fn panel_button_at(layout: &OverlayLayout, point: Point, buttons: usize) -> Option<usize> {
    if !area_contains(layout.panel, point) {
        return None;
    }
    let rel = point.x - layout.panel.x as i32 - PANEL_PADDING;
    stacked_slot(rel, PANEL_BUTTON, PANEL_SPACING, buttons)
}

/// Logical rectangle of dock icon `slot`.
pub fn dock_slot_rect(layout: &OverlayLayout, slot: usize) -> FloatRect {
    let dock = layout.dock;
    FloatRect::new(
        dock.x as i32 + (dock.width as i32 - DOCK_ICON) / 2,
        dock.y as i32 + DOCK_PADDING + (DOCK_ICON + DOCK_SPACING) * slot as i32,
        DOCK_ICON as u16,
        DOCK_ICON as u16,
    )
}

/// Logical rectangle of panel button `index`, centered vertically.
pub fn panel_button_rect(layout: &OverlayLayout, index: usize) -> FloatRect {
    let panel = layout.panel;
    FloatRect::new(
        panel.x as i32 + PANEL_PADDING + (PANEL_BUTTON + PANEL_SPACING) * index as i32,
        panel.y as i32 + (panel.height as i32 - PANEL_BUTTON) / 2,
        PANEL_BUTTON as u16,
        PANEL_BUTTON as u16,
    )
}

fn stacked_slot(rel: i32, size: i32, spacing: i32, slots: usize) -> Option<usize> {
    if rel < 0 {
        return None;
    }
    let stride = size + spacing;
    let slot = (rel / stride) as usize;
    (rel % stride < size && slot < slots).then_some(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> OverlayMetrics {
        OverlayMetrics::default()
    }

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn full_hd_layout() {
        let l = compute(Size::new(1920, 1080), &metrics());
        assert_eq!(l.panel, rect(0, 0, 1920, 48));
        assert_eq!(l.dock, rect(8, 56, 64, 1016));
        assert_eq!(l.tray, rect(1580, 56, 320, 400));
    }

    #[test]
    fn dock_height_follows_display_resize() {
        let m = metrics();
        let before = compute(Size::new(1920, 1080), &m);
        let after = compute(Size::new(1280, 720), &m);
        assert_ne!(before.dock.height, after.dock.height);
        assert_eq!(after.dock.height, 720 - 48 - 16);
        assert_eq!(after.panel.width, 1280);
    }

    #[test]
    fn tiny_display_saturates() {
        let l = compute(Size::new(100, 20), &metrics());
        assert_eq!(l.panel.height, 20);
        assert_eq!(l.dock.height, 0);
        assert_eq!(l.tray.x, 0);
    }

    #[test]
    fn maximized_bounds_inset_below_panel() {
        let r = maximized_bounds(Size::new(1920, 1080), &metrics());
        assert_eq!(r, FloatRect::new(10, 58, 1900, 1012));
    }

    #[test]
    fn dock_slots_skip_spacing() {
        let l = compute(Size::new(1920, 1080), &metrics());
        let x = 20;
        assert_eq!(dock_slot_at(&l, Point::new(x, 56 + 6), 4), Some(0));
        assert_eq!(dock_slot_at(&l, Point::new(x, 56 + 6 + 45), 4), None);
        assert_eq!(dock_slot_at(&l, Point::new(x, 56 + 6 + 52), 4), Some(1));
        assert_eq!(dock_slot_at(&l, Point::new(x, 56 + 6 + 52 * 4), 4), None);
        assert_eq!(dock_slot_at(&l, Point::new(200, 70), 4), None);
    }

    #[test]
    fn panel_buttons_left_to_right() {
        let l = compute(Size::new(1920, 1080), &metrics());
        assert_eq!(panel_button_at(&l, Point::new(4, 10), 3), None);
        assert_eq!(panel_button_at(&l, Point::new(8, 10), 3), Some(0));
        assert_eq!(panel_button_at(&l, Point::new(8 + 42, 10), 3), Some(1));
        assert_eq!(panel_button_at(&l, Point::new(8 + 84 + 35, 10), 3), Some(2));
        assert_eq!(panel_button_at(&l, Point::new(8 + 126, 10), 3), None);
    }

    #[test]
    fn slot_rects_agree_with_hit_tests() {
        let l = compute(Size::new(1280, 720), &metrics());
        for slot in 0..4 {
            let r = dock_slot_rect(&l, slot);
            let center = Point::new(r.x + r.width as i32 / 2, r.y + r.height as i32 / 2);
            assert_eq!(dock_slot_at(&l, center, 4), Some(slot));
        }
        let b = panel_button_rect(&l, 2);
        assert_eq!(b, FloatRect::new(92, 6, 36, 36));
        assert_eq!(panel_button_at(&l, Point::new(b.x, b.y), 3), Some(2));
    }
}
