//! Window drag/resize geometry helpers used by the desktop reducer.

use crate::model::{PointerPosition, WindowRect};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 1000;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 700;
/// Pointer travel (in px) before an armed header press becomes a drag.
///
/// Windows use a pure pixel threshold where desktop icons use an arming timer
/// with a movement short-circuit; the two strategies are intentionally
/// different (see [`crate::icon_controller`]).
pub const WINDOW_DRAG_THRESHOLD_PX: i32 = 4;
/// Title bar height; subtracted from the window height for the content viewport.
pub const WINDOW_HEADER_HEIGHT_PX: i32 = 36;

/// True once pointer travel from `start` exceeds the drag threshold on either axis.
pub fn exceeds_drag_threshold(start: PointerPosition, now: PointerPosition) -> bool {
    (now.x - start.x).abs() > WINDOW_DRAG_THRESHOLD_PX
        || (now.y - start.y).abs() > WINDOW_DRAG_THRESHOLD_PX
}

/// Rect for an in-progress drag: translated by the pointer delta, then clamped so
/// the top-left corner never goes negative. No clamp on the bottom/right edge.
pub fn dragged_rect(
    rect_start: WindowRect,
    pointer_start: PointerPosition,
    pointer: PointerPosition,
) -> WindowRect {
    rect_start
        .offset(pointer.x - pointer_start.x, pointer.y - pointer_start.y)
        .clamped_origin()
}

/// Rect for an in-progress resize from the bottom-right handle: grows with the
/// pointer delta, clamped to the configured minimum. Growth is unbounded.
pub fn resized_rect(
    rect_start: WindowRect,
    pointer_start: PointerPosition,
    pointer: PointerPosition,
) -> WindowRect {
    WindowRect {
        w: rect_start.w + (pointer.x - pointer_start.x),
        h: rect_start.h + (pointer.y - pointer_start.y),
        ..rect_start
    }
    .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
}

/// Height available to the window content viewport below the header.
///
/// Recomputed on every resize tick and after drags end; must stay idempotent and
/// cheap since it runs per frame while resizing.
pub fn content_viewport_height(window_height: i32) -> i32 {
    (window_height - WINDOW_HEADER_HEIGHT_PX).max(0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const START_RECT: WindowRect = WindowRect {
        x: 120,
        y: 80,
        w: 1200,
        h: 800,
    };
    const START_PTR: PointerPosition = PointerPosition { x: 400, y: 100 };

    #[test]
    fn threshold_requires_more_than_four_pixels() {
        let nudge = PointerPosition { x: 404, y: 96 };
        let pull = PointerPosition { x: 400, y: 105 };
        assert!(!exceeds_drag_threshold(START_PTR, nudge));
        assert!(exceeds_drag_threshold(START_PTR, pull));
    }

    #[test]
    fn dragged_rect_follows_pointer_delta() {
        let rect = dragged_rect(START_RECT, START_PTR, PointerPosition { x: 430, y: 60 });
        assert_eq!((rect.x, rect.y), (150, 40));
        assert_eq!((rect.w, rect.h), (1200, 800));
    }

    #[test]
    fn dragged_rect_clamps_top_left_never_negative() {
        let rect = dragged_rect(
            START_RECT,
            START_PTR,
            PointerPosition { x: -900, y: -900 },
        );
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn dragged_rect_allows_overflow_past_bottom_right() {
        let rect = dragged_rect(
            START_RECT,
            START_PTR,
            PointerPosition { x: 5000, y: 5000 },
        );
        assert_eq!((rect.x, rect.y), (4720, 4980));
    }

    #[test]
    fn resized_rect_clamps_to_minimum_only() {
        let shrunk = resized_rect(START_RECT, START_PTR, PointerPosition { x: 0, y: 0 });
        assert_eq!((shrunk.w, shrunk.h), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));

        let grown = resized_rect(START_RECT, START_PTR, PointerPosition { x: 3000, y: 2000 });
        assert_eq!((grown.w, grown.h), (3800, 2700));
        assert_eq!((grown.x, grown.y), (START_RECT.x, START_RECT.y));
    }

    #[test]
    fn content_viewport_height_is_idempotent_and_non_negative() {
        assert_eq!(content_viewport_height(800), 764);
        assert_eq!(
            content_viewport_height(800),
            content_viewport_height(800)
        );
        assert_eq!(content_viewport_height(10), 0);
    }
}
