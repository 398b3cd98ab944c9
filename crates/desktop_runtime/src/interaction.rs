//! Pure geometry for pointer-driven window gestures.

use crate::model::{
    DesktopViewport, PointerPosition, ResizeEdge, SnapPreview, SnapRegion, WindowRect,
};

/// Pointer travel (px, exclusive) before a title-bar press becomes a drag.
pub const DRAG_START_THRESHOLD: i32 = 3;
/// Distance from a screen edge (px, inclusive) that arms a snap preview.
pub const SNAP_EDGE_THRESHOLD: i32 = 8;
/// Horizontal strip of a dragged window that must stay on screen.
pub const MIN_VISIBLE_WIDTH: i32 = 100;

/// Pointer delta between two positions.
pub fn pointer_delta(start: PointerPosition, current: PointerPosition) -> (i32, i32) {
    (current.x - start.x, current.y - start.y)
}

pub fn drag_exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_START_THRESHOLD || dy.abs() > DRAG_START_THRESHOLD
}

/// Keeps the title bar reachable: never above the screen and never more than
/// `w - MIN_VISIBLE_WIDTH` off either side.
pub fn clamp_drag_position(x: i32, y: i32, width: i32, viewport: DesktopViewport) -> (i32, i32) {
    let y = y.max(0);
    let x = x
        .max(-width + MIN_VISIBLE_WIDTH)
        .min(viewport.width - MIN_VISIBLE_WIDTH);
    (x, y)
}

pub fn detect_snap_preview(
    pointer: PointerPosition,
    viewport: DesktopViewport,
) -> Option<SnapPreview> {
    if pointer.y <= SNAP_EDGE_THRESHOLD {
        Some(SnapPreview::Maximize)
    } else if pointer.x <= SNAP_EDGE_THRESHOLD {
        Some(SnapPreview::Left)
    } else if pointer.x >= viewport.width - SNAP_EDGE_THRESHOLD {
        Some(SnapPreview::Right)
    } else {
        None
    }
}

/// Rect produced by dragging `edge` by `(dx, dy)` from `start`.
///
/// West and north edges keep the opposite edge anchored once the minimum size is reached.
pub fn resize_rect(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    min_w: i32,
    min_h: i32,
) -> WindowRect {
    let mut rect = start;
    if edge.moves_east() {
        rect.w = (start.w + dx).max(min_w);
    }
    if edge.moves_west() {
        rect.w = (start.w - dx).max(min_w);
        rect.x = start.x + start.w - rect.w;
    }
    if edge.moves_south() {
        rect.h = (start.h + dy).max(min_h);
    }
    if edge.moves_north() {
        rect.h = (start.h - dy).max(min_h);
        rect.y = start.y + start.h - rect.h;
    }
    rect
}

/// Work-area rect a snap region fills. `None` for [`SnapRegion::None`].
pub fn snap_region_rect(region: SnapRegion, viewport: DesktopViewport) -> Option<WindowRect> {
    let area = viewport.work_area();
    let half_w = area.w / 2;
    let half_h = area.h / 2;
    let rect = match region {
        SnapRegion::None => return None,
        SnapRegion::Left => WindowRect::new(0, 0, half_w, area.h),
        SnapRegion::Right => WindowRect::new(half_w, 0, area.w - half_w, area.h),
        SnapRegion::TopLeft => WindowRect::new(0, 0, half_w, half_h),
        SnapRegion::TopRight => WindowRect::new(half_w, 0, area.w - half_w, half_h),
        SnapRegion::BottomLeft => WindowRect::new(0, half_h, half_w, area.h - half_h),
        SnapRegion::BottomRight => {
            WindowRect::new(half_w, half_h, area.w - half_w, area.h - half_h)
        }
    };
    Some(rect)
}

/// Snap region a half-screen preview resolves to. Maximize has none.
pub fn preview_region(preview: SnapPreview) -> Option<SnapRegion> {
    match preview {
        SnapPreview::Maximize => None,
        SnapPreview::Left => Some(SnapRegion::Left),
        SnapPreview::Right => Some(SnapRegion::Right),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    const VIEWPORT: DesktopViewport = DesktopViewport::new(1280, 800);

    #[test]
    fn threshold_is_exclusive() {
        assert!(!drag_exceeds_threshold(3, -3));
        assert!(drag_exceeds_threshold(4, 0));
        assert!(drag_exceeds_threshold(0, -4));
    }

    #[test]
    fn drag_clamp_keeps_title_bar_reachable() {
        assert_eq!(clamp_drag_position(-900, -40, 600, VIEWPORT), (-500, 0));
        assert_eq!(clamp_drag_position(5000, 300, 600, VIEWPORT), (1180, 300));
        assert_eq!(clamp_drag_position(200, 100, 600, VIEWPORT), (200, 100));
    }

    #[test]
    fn snap_preview_prefers_top_edge() {
        let at = |x, y| detect_snap_preview(PointerPosition::new(x, y), VIEWPORT);
        assert_eq!(at(0, 0), Some(SnapPreview::Maximize));
        assert_eq!(at(640, 8), Some(SnapPreview::Maximize));
        assert_eq!(at(8, 400), Some(SnapPreview::Left));
        assert_eq!(at(1272, 400), Some(SnapPreview::Right));
        assert_eq!(at(640, 9), None);
        assert_eq!(at(9, 400), None);
        assert_eq!(at(1271, 400), None);
    }

    #[test]
    fn north_west_resize_anchors_south_east_corner() {
        let rect = resize_rect(
            WindowRect::new(0, 0, 400, 300),
            ResizeEdge::NorthWest,
            50,
            30,
            200,
            150,
        );
        assert_eq!(rect, WindowRect::new(50, 30, 350, 270));
    }

    #[test]
    fn west_resize_stops_at_minimum_width() {
        let rect = resize_rect(
            WindowRect::new(100, 100, 400, 300),
            ResizeEdge::West,
            350,
            0,
            200,
            150,
        );
        assert_eq!(rect, WindowRect::new(300, 100, 200, 300));
    }

    #[test]
    fn east_and_south_edges_ignore_other_axis() {
        let start = WindowRect::new(10, 20, 400, 300);
        assert_eq!(
            resize_rect(start, ResizeEdge::East, 40, 99, 200, 150),
            WindowRect::new(10, 20, 440, 300)
        );
        assert_eq!(
            resize_rect(start, ResizeEdge::South, 99, -500, 200, 150),
            WindowRect::new(10, 20, 400, 150)
        );
    }

    #[test]
    fn half_screen_regions_split_work_area() {
        let viewport = DesktopViewport::new(1281, 800);
        assert_eq!(
            snap_region_rect(SnapRegion::Left, viewport),
            Some(WindowRect::new(0, 0, 640, 760))
        );
        assert_eq!(
            snap_region_rect(SnapRegion::Right, viewport),
            Some(WindowRect::new(640, 0, 641, 760))
        );
        assert_eq!(
            snap_region_rect(SnapRegion::BottomRight, viewport),
            Some(WindowRect::new(640, 380, 641, 380))
        );
        assert_eq!(snap_region_rect(SnapRegion::None, viewport), None);
    }

    fn edge() -> impl Strategy<Value = ResizeEdge> {
        prop::sample::select(ResizeEdge::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn resize_never_drops_below_minimum(
            edge in edge(),
            dx in -2000i32..2000,
            dy in -2000i32..2000,
            w in 200i32..1200,
            h in 150i32..900,
        ) {
            let start = WindowRect::new(100, 100, w, h);
            let rect = resize_rect(start, edge, dx, dy, 200, 150);
            prop_assert!(rect.w >= 200);
            prop_assert!(rect.h >= 150);
            if edge.moves_west() {
                prop_assert_eq!(rect.x + rect.w, start.x + start.w);
            } else {
                prop_assert_eq!(rect.x, start.x);
            }
            if edge.moves_north() {
                prop_assert_eq!(rect.y + rect.h, start.y + start.h);
            } else {
                prop_assert_eq!(rect.y, start.y);
            }
        }

        #[test]
        fn drag_clamp_bounds_hold(x in -5000i32..5000, y in -5000i32..5000, w in 320i32..1600) {
            let (cx, cy) = clamp_drag_position(x, y, w, VIEWPORT);
            prop_assert!(cy >= 0);
            prop_assert!(cx <= VIEWPORT.width - MIN_VISIBLE_WIDTH);
            prop_assert!(cx >= (-w + MIN_VISIBLE_WIDTH).min(VIEWPORT.width - MIN_VISIBLE_WIDTH));
        }
    }
}
