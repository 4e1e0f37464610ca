use crate::constants::{
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, RESIZE_GRIP_SIZE, TITLE_BAR_HEIGHT, TITLE_BUTTON_PADDING,
    TITLE_BUTTON_WIDTH,
};
use crate::window::{FloatRect, Point};

/// What a pointer-down on a window's chrome asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Drag,
    Minimize,
    Maximize,
    Close,
}

/// Title bar buttons, left to right.
pub const HEADER_BUTTONS: [HeaderAction; 3] = [
    HeaderAction::Minimize,
    HeaderAction::Maximize,
    HeaderAction::Close,
];

pub fn title_bar_for(rect: FloatRect) -> FloatRect {
    FloatRect {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: TITLE_BAR_HEIGHT.min(rect.height),
    }
}

/// The square grip at the bottom-right corner that starts a resize.
pub fn resize_grip_for(rect: FloatRect) -> FloatRect {
    let size = RESIZE_GRIP_SIZE;
    FloatRect {
        x: rect.right() - size.min(rect.width) as i32,
        y: rect.bottom() - size.min(rect.height) as i32,
        width: size.min(rect.width),
        height: size.min(rect.height),
    }
}

/// Rectangle of one title bar button, right-aligned with padding.
pub fn header_button_rect(rect: FloatRect, action: HeaderAction) -> Option<FloatRect> {
    let slot = HEADER_BUTTONS.iter().position(|a| *a == action)? as i32;
    let count = HEADER_BUTTONS.len() as i32;
    let bar = title_bar_for(rect);
    let first = bar
        .right()
        .saturating_sub(TITLE_BUTTON_PADDING as i32 + count * TITLE_BUTTON_WIDTH as i32);
    let x = first.saturating_add(slot * TITLE_BUTTON_WIDTH as i32);
    if x < bar.x {
        return None;
    }
    Some(FloatRect {
        x,
        y: bar.y,
        width: TITLE_BUTTON_WIDTH,
        height: bar.height,
    })
}

/// Classify a point on the title bar. `None` when it is not on the bar.
pub fn header_action_at(rect: FloatRect, point: Point) -> Option<HeaderAction> {
    if !title_bar_for(rect).contains(point) {
        return None;
    }
    let button = HEADER_BUTTONS.iter().copied().find(|action| {
        header_button_rect(rect, *action).is_some_and(|button| button.contains(point))
    });
    Some(button.unwrap_or(HeaderAction::Drag))
}

pub fn in_resize_grip(rect: FloatRect, point: Point) -> bool {
    resize_grip_for(rect).contains(point)
}

/// Translate `initial` by the pointer's travel since `anchor`. No clamping:
/// windows may leave the screen entirely.
pub fn apply_move(initial: FloatRect, anchor: Point, pointer: Point) -> FloatRect {
    let (dx, dy) = pointer.delta_from(anchor);
    FloatRect {
        x: initial.x.saturating_add(dx),
        y: initial.y.saturating_add(dy),
        ..initial
    }
}

/// Grow or shrink `initial` from its bottom-right corner. The origin never
/// moves and the result never drops below the minimum window size.
pub fn apply_resize(initial: FloatRect, anchor: Point, pointer: Point) -> FloatRect {
    let (dx, dy) = pointer.delta_from(anchor);
    let max_dim = u16::MAX as i32;
    let width = (initial.width as i32)
        .saturating_add(dx)
        .clamp(MIN_WINDOW_WIDTH as i32, max_dim);
    let height = (initial.height as i32)
        .saturating_add(dy)
        .clamp(MIN_WINDOW_HEIGHT as i32, max_dim);
    FloatRect {
        width: width as u16,
        height: height as u16,
        ..initial
    }
}
