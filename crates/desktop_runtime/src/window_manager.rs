//! Window registry verbs used by the desktop reducer.
//!
//! Every verb takes the current unix-ms timestamp, stamps `updated_at` on the windows it touches,
//! and is a no-op returning `false` when the window id is unknown.

use crate::model::{
    DesktopState, OpenWindowRequest, SnapRegion, WindowId, WindowInstance, WindowMode, WindowRect,
};

/// Diagonal offset between consecutively opened windows.
pub const CASCADE_STEP: i32 = 30;
/// Number of cascade positions before the offset wraps back to zero.
pub const CASCADE_CYCLE: u32 = 5;

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn next_z(state: &mut DesktopState) -> u64 {
    state.z_counter += 1;
    state.z_counter
}

fn next_cascade_offset(state: &mut DesktopState) -> i32 {
    let offset = state.cascade_index as i32 * CASCADE_STEP;
    state.cascade_index = (state.cascade_index + 1) % CASCADE_CYCLE;
    offset
}

/// Visible (non-minimized) window with the highest z.
pub fn topmost_visible_window(state: &DesktopState) -> Option<WindowId> {
    state
        .windows
        .iter()
        .filter(|w| !w.is_minimized())
        .max_by_key(|w| w.z)
        .map(|w| w.id)
}

// Moves focus to `target` without touching z-order.
fn hand_focus_to(state: &mut DesktopState, target: Option<WindowId>, now_ms: u64) {
    for window in &mut state.windows {
        let focused = Some(window.id) == target;
        if focused && !window.focused {
            window.updated_at = now_ms;
        }
        window.focused = focused;
    }
    state.focused_window_id = target;
}

/// Opens a new focused window on top of the stack, offset by the cascade.
pub fn open_window(state: &mut DesktopState, req: OpenWindowRequest, now_ms: u64) -> WindowId {
    let id = next_window_id(state);
    let offset = next_cascade_offset(state);
    let z = next_z(state);
    for window in &mut state.windows {
        window.focused = false;
    }

    let rect = req
        .rect
        .offset(offset, offset)
        .clamped_min(req.min_w, req.min_h);
    state.windows.push(WindowInstance {
        id,
        app_id: req.app_id,
        title: req.title,
        icon: req.icon,
        mode: WindowMode::Normal,
        snap: SnapRegion::None,
        rect,
        restore_rect: None,
        z,
        focused: true,
        resizable: req.resizable,
        draggable: true,
        min_w: req.min_w,
        min_h: req.min_h,
        created_at: now_ms,
        updated_at: now_ms,
        payload: req.payload,
    });
    state.focused_window_id = Some(id);
    id
}

/// Removes a window; focus falls to the topmost remaining visible window if it held focus.
pub fn close_window(state: &mut DesktopState, window_id: WindowId, now_ms: u64) -> bool {
    let before = state.windows.len();
    state.windows.retain(|w| w.id != window_id);
    if state.windows.len() == before {
        return false;
    }
    if state.focused_window_id == Some(window_id) {
        let next = topmost_visible_window(state);
        hand_focus_to(state, next, now_ms);
    }
    true
}

/// Raises and focuses a window, un-minimizing it.
pub fn focus_window(state: &mut DesktopState, window_id: WindowId, now_ms: u64) -> bool {
    if state.window(window_id).is_none() {
        return false;
    }
    let z = next_z(state);
    for window in &mut state.windows {
        if window.id == window_id {
            window.z = z;
            window.focused = true;
            if window.mode == WindowMode::Minimized {
                window.mode = WindowMode::Normal;
                // Unsnapped windows only carry a restore rect from a maximize that no longer applies.
                if window.snap == SnapRegion::None {
                    window.restore_rect = None;
                }
            }
            window.updated_at = now_ms;
        } else {
            window.focused = false;
        }
    }
    state.focused_window_id = Some(window_id);
    true
}

pub fn minimize_window(state: &mut DesktopState, window_id: WindowId, now_ms: u64) -> bool {
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    window.mode = WindowMode::Minimized;
    window.focused = false;
    window.updated_at = now_ms;

    if state.focused_window_id == Some(window_id) {
        let next = topmost_visible_window(state);
        hand_focus_to(state, next, now_ms);
    }
    true
}

/// Marks a window maximized, keeping its rect and saving a restore rect if none is saved yet.
pub fn maximize_window(state: &mut DesktopState, window_id: WindowId, now_ms: u64) -> bool {
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    window.mode = WindowMode::Maximized;
    window.restore_rect.get_or_insert(window.rect);
    window.updated_at = now_ms;
    true
}

/// Returns a maximized or snapped window to its saved geometry; minimized windows are focused.
pub fn restore_window(state: &mut DesktopState, window_id: WindowId, now_ms: u64) -> bool {
    let Some(mode) = state.window(window_id).map(|w| w.mode) else {
        return false;
    };
    if mode == WindowMode::Minimized {
        return focus_window(state, window_id, now_ms);
    }
    if let Some(window) = state.window_mut(window_id) {
        if mode == WindowMode::Maximized || window.snap != SnapRegion::None {
            unsnap(window, now_ms);
        }
    }
    true
}

fn unsnap(window: &mut WindowInstance, now_ms: u64) {
    window.mode = WindowMode::Normal;
    window.snap = SnapRegion::None;
    if let Some(restore_rect) = window.restore_rect.take() {
        window.rect = restore_rect;
    }
    window.updated_at = now_ms;
}

pub fn move_window(state: &mut DesktopState, window_id: WindowId, x: i32, y: i32, now_ms: u64) -> bool {
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    window.rect.x = x;
    window.rect.y = y;
    window.updated_at = now_ms;
    true
}

/// Replaces a window's rect; width and height never drop below the window minimums.
pub fn resize_window(
    state: &mut DesktopState,
    window_id: WindowId,
    rect: WindowRect,
    now_ms: u64,
) -> bool {
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    window.rect = rect.clamped_min(window.min_w, window.min_h);
    window.updated_at = now_ms;
    true
}

pub fn snap_window(
    state: &mut DesktopState,
    window_id: WindowId,
    region: SnapRegion,
    now_ms: u64,
) -> bool {
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    window.snap = region;
    window.restore_rect.get_or_insert(window.rect);
    window.updated_at = now_ms;
    true
}

pub fn update_window_title(
    state: &mut DesktopState,
    window_id: WindowId,
    title: impl Into<String>,
    now_ms: u64,
) -> bool {
    let Some(window) = state.window_mut(window_id) else {
        return false;
    };
    window.title = title.into();
    window.updated_at = now_ms;
    true
}
