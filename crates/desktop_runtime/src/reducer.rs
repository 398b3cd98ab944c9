//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use crate::interaction::{
    clamp_drag_position, detect_snap_preview, drag_exceeds_threshold, pointer_delta,
    preview_region, resize_rect, snap_region_rect,
};
use crate::model::{
    DesktopState, DesktopViewport, DragSession, InteractionState, OpenWindowRequest,
    PointerPosition, ResizeEdge, ResizeSession, SnapPreview, SnapRegion, WindowId, WindowMode,
    WindowRect,
};
use crate::switcher::{cycle_target, CycleDirection};
use crate::window_manager::{
    close_window, focus_window, maximize_window, minimize_window, move_window, open_window,
    resize_window, restore_window, snap_window, update_window_title,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window using the supplied request.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Close whichever window currently holds focus.
    CloseFocusedWindow,
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window into the work area.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
    },
    /// Restore a minimized, maximized, or snapped window.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Move a window's top-left corner.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Replace a window's rect.
    ResizeWindow {
        /// Window to resize.
        window_id: WindowId,
        /// New rect; width and height are floored at the window minimums.
        rect: WindowRect,
    },
    /// Snap a window to a screen region and fill it.
    SnapWindow {
        /// Window to snap.
        window_id: WindowId,
        /// Target region.
        region: SnapRegion,
        /// Viewport the region is laid out in.
        viewport: DesktopViewport,
    },
    /// Replace a window's title.
    UpdateWindowTitle {
        /// Window to retitle.
        window_id: WindowId,
        /// New title text.
        title: String,
    },
    /// Toggle taskbar behavior for a window (focus, minimize, or restore).
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Minimize every visible window.
    MinimizeAll,
    /// Move focus to the next or previous window in stacking order.
    CycleWindow {
        /// Cycle direction.
        direction: CycleDirection,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current desktop viewport.
        viewport: DesktopViewport,
    },
    /// End the active window drag, executing any armed snap preview.
    EndMove {
        /// Current desktop viewport.
        viewport: DesktopViewport,
    },
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Abort any active gesture without snapping.
    CancelGesture,
}

/// UI sound cues emitted by window transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiSound {
    Open,
    Close,
    Minimize,
    Startup,
    Error,
}

impl UiSound {
    /// Asset cue name played for this sound.
    pub const fn cue(self) -> &'static str {
        match self {
            Self::Open | Self::Close => "click",
            Self::Minimize => "minimize",
            Self::Startup => "startup",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the runtime to execute.
pub enum RuntimeEffect {
    /// Play a UI sound cue.
    PlaySound(UiSound),
    /// The drag snap preview appeared, changed, or cleared.
    SnapPreviewChanged(Option<SnapPreview>),
    /// Move focus into the newly focused window's primary input.
    FocusWindowInput(WindowId),
    /// Open an external URL (for targets that leave the desktop).
    OpenExternalUrl(String),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for window management. Actions
/// naming an unknown window leave both states untouched and produce no effects.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
    now_ms: u64,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            let window_id = open_window(state, req, now_ms);
            effects.push(RuntimeEffect::PlaySound(UiSound::Open));
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            close(state, interaction, window_id, now_ms, &mut effects);
        }
        DesktopAction::CloseFocusedWindow => {
            if let Some(window_id) = state.focused_window_id {
                close(state, interaction, window_id, now_ms, &mut effects);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            if focus_window(state, window_id, now_ms) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            if minimize_window(state, window_id, now_ms) {
                effects.push(RuntimeEffect::PlaySound(UiSound::Minimize));
            }
        }
        DesktopAction::MaximizeWindow { window_id } => {
            maximize_window(state, window_id, now_ms);
        }
        DesktopAction::RestoreWindow { window_id } => {
            let was_minimized = state.window(window_id).is_some_and(|w| w.is_minimized());
            if restore_window(state, window_id, now_ms) && was_minimized {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::MoveWindow { window_id, x, y } => {
            move_window(state, window_id, x, y, now_ms);
        }
        DesktopAction::ResizeWindow { window_id, rect } => {
            resize_window(state, window_id, rect, now_ms);
        }
        DesktopAction::SnapWindow {
            window_id,
            region,
            viewport,
        } => {
            apply_snap(state, window_id, region, viewport, now_ms);
        }
        DesktopAction::UpdateWindowTitle { window_id, title } => {
            update_window_title(state, window_id, title, now_ms);
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            let Some(minimized) = state.window(window_id).map(|w| w.is_minimized()) else {
                return effects;
            };
            let focused = state.focused_window_id == Some(window_id);
            let next = if minimized {
                DesktopAction::RestoreWindow { window_id }
            } else if focused {
                DesktopAction::MinimizeWindow { window_id }
            } else {
                DesktopAction::FocusWindow { window_id }
            };
            effects.extend(reduce_desktop(state, interaction, next, now_ms));
        }
        DesktopAction::MinimizeAll => {
            let visible: Vec<WindowId> = state
                .windows
                .iter()
                .filter(|w| !w.is_minimized())
                .map(|w| w.id)
                .collect();
            for window_id in visible {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::MinimizeWindow { window_id },
                    now_ms,
                ));
            }
        }
        DesktopAction::CycleWindow { direction } => {
            if let Some(window_id) = cycle_target(state, direction) {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::FocusWindow { window_id },
                    now_ms,
                ));
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let Some(window) = state.window(window_id) else {
                return effects;
            };
            if !window.draggable {
                return effects;
            }
            let needs_restore = window.is_maximized() || window.snap != SnapRegion::None;
            focus_window(state, window_id, now_ms);
            if needs_restore {
                restore_window(state, window_id, now_ms);
            }
            let Some(rect_start) = state.window(window_id).map(|w| w.rect) else {
                return effects;
            };
            clear_gesture(interaction, &mut effects);
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                rect_start,
                moved: false,
                snap_preview: None,
            });
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            let Some(session) = interaction.dragging.as_mut() else {
                return effects;
            };
            let (dx, dy) = pointer_delta(session.pointer_start, pointer);
            if !session.moved && !drag_exceeds_threshold(dx, dy) {
                return effects;
            }
            session.moved = true;
            let start = session.rect_start;
            let (x, y) = clamp_drag_position(start.x + dx, start.y + dy, start.w, viewport);
            if !move_window(state, session.window_id, x, y, now_ms) {
                clear_gesture(interaction, &mut effects);
                return effects;
            }
            let preview = detect_snap_preview(pointer, viewport);
            if preview != session.snap_preview {
                session.snap_preview = preview;
                effects.push(RuntimeEffect::SnapPreviewChanged(preview));
            }
        }
        DesktopAction::EndMove { viewport } => {
            let Some(session) = interaction.dragging.take() else {
                return effects;
            };
            if let Some(preview) = session.snap_preview {
                match preview_region(preview) {
                    Some(region) => {
                        apply_snap(state, session.window_id, region, viewport, now_ms);
                    }
                    None => {
                        maximize_window(state, session.window_id, now_ms);
                    }
                }
                effects.push(RuntimeEffect::SnapPreviewChanged(None));
            }
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let Some(window) = state.window(window_id) else {
                return effects;
            };
            if !window.resizable || window.mode != WindowMode::Normal {
                return effects;
            }
            let rect_start = window.rect;
            focus_window(state, window_id, now_ms);
            clear_gesture(interaction, &mut effects);
            interaction.resizing = Some(ResizeSession {
                window_id,
                edge,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            let Some(session) = interaction.resizing.as_ref() else {
                return effects;
            };
            let Some((min_w, min_h)) = state
                .window(session.window_id)
                .map(|w| (w.min_w, w.min_h))
            else {
                interaction.resizing = None;
                return effects;
            };
            let (dx, dy) = pointer_delta(session.pointer_start, pointer);
            let rect = resize_rect(session.rect_start, session.edge, dx, dy, min_w, min_h);
            resize_window(state, session.window_id, rect, now_ms);
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::CancelGesture => {
            clear_gesture(interaction, &mut effects);
        }
    }

    effects
}

fn close(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
    now_ms: u64,
    effects: &mut Vec<RuntimeEffect>,
) {
    if !close_window(state, window_id, now_ms) {
        return;
    }
    if interaction.active_window() == Some(window_id) {
        clear_gesture(interaction, effects);
    }
    effects.push(RuntimeEffect::PlaySound(UiSound::Close));
}

fn clear_gesture(interaction: &mut InteractionState, effects: &mut Vec<RuntimeEffect>) {
    if interaction.snap_preview().is_some() {
        effects.push(RuntimeEffect::SnapPreviewChanged(None));
    }
    *interaction = InteractionState::default();
}

// Marks the region first so the restore rect captured is the pre-snap geometry.
fn apply_snap(
    state: &mut DesktopState,
    window_id: WindowId,
    region: SnapRegion,
    viewport: DesktopViewport,
    now_ms: u64,
) {
    if !snap_window(state, window_id, region, now_ms) {
        return;
    }
    if let Some(rect) = snap_region_rect(region, viewport) {
        resize_window(state, window_id, rect, now_ms);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: DesktopViewport = DesktopViewport::new(1280, 800);

    fn dispatch(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action, 1_000)
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState) -> WindowId {
        let _ = dispatch(
            state,
            interaction,
            DesktopAction::OpenWindow(
                OpenWindowRequest::new("app.notepad", "Notepad")
                    .with_rect(WindowRect::new(100, 100, 600, 400)),
            ),
        );
        state.windows.last().expect("window").id
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition::new(x, y)
    }

    #[test]
    fn open_close_and_minimize_emit_sound_cues() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new("app.notepad", "Notepad")),
        );
        let win = state.windows[0].id;
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::PlaySound(UiSound::Open),
                RuntimeEffect::FocusWindowInput(win)
            ]
        );

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: win },
        );
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(UiSound::Minimize)]);

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: win },
        );
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(UiSound::Close)]);
        assert_eq!(UiSound::Close.cue(), "click");
    }

    #[test]
    fn unknown_window_actions_are_silent_noops() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction);
        let before = state.clone();
        let ghost = WindowId(77);

        for action in [
            DesktopAction::CloseWindow { window_id: ghost },
            DesktopAction::FocusWindow { window_id: ghost },
            DesktopAction::MinimizeWindow { window_id: ghost },
            DesktopAction::ToggleTaskbarWindow { window_id: ghost },
            DesktopAction::BeginMove {
                window_id: ghost,
                pointer: pointer(0, 0),
            },
            DesktopAction::BeginResize {
                window_id: ghost,
                edge: ResizeEdge::East,
                pointer: pointer(0, 0),
            },
        ] {
            assert_eq!(dispatch(&mut state, &mut interaction, action), vec![]);
        }
        assert_eq!(state, before);
        assert!(interaction.is_idle());
    }

    #[test]
    fn taskbar_toggle_minimizes_if_focused_and_restores_if_minimized() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let first = open(&mut state, &mut interaction);
        let second = open(&mut state, &mut interaction);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow { window_id: second },
        );
        assert!(state.window(second).unwrap().is_minimized());
        assert_eq!(state.focused_window_id(), Some(first));

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow { window_id: second },
        );
        assert!(!state.window(second).unwrap().is_minimized());
        assert_eq!(state.focused_window_id(), Some(second));
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(second)]);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow { window_id: first },
        );
        assert_eq!(state.focused_window_id(), Some(first));
    }

    #[test]
    fn minimize_all_hides_every_visible_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        open(&mut state, &mut interaction);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: a },
        );

        let effects = dispatch(&mut state, &mut interaction, DesktopAction::MinimizeAll);
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(UiSound::Minimize)]);
        assert!(state.windows.iter().all(|w| w.is_minimized()));
        assert_eq!(state.focused_window_id(), None);
    }

    #[test]
    fn cycle_window_focuses_next_in_stack() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        open(&mut state, &mut interaction);

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CycleWindow {
                direction: CycleDirection::Next,
            },
        );
        assert_eq!(state.focused_window_id(), Some(a));
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(a)]);
    }

    #[test]
    fn close_focused_window_closes_top_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);

        dispatch(&mut state, &mut interaction, DesktopAction::CloseFocusedWindow);
        assert!(state.window(b).is_none());
        assert_eq!(state.focused_window_id(), Some(a));
    }

    #[test]
    fn drag_waits_for_threshold_then_clamps() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction);
        let original = state.window(win).unwrap().rect;

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: pointer(300, 300),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: pointer(303, 297),
                viewport: VIEWPORT,
            },
        );
        assert_eq!(state.window(win).unwrap().rect, original);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: pointer(325, 340),
                viewport: VIEWPORT,
            },
        );
        let moved = state.window(win).unwrap().rect;
        assert_eq!((moved.x, moved.y), (original.x + 25, original.y + 40));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: pointer(300, -500),
                viewport: VIEWPORT,
            },
        );
        assert_eq!(state.window(win).unwrap().rect.y, 0);

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::EndMove { viewport: VIEWPORT },
        );
        // The pointer ended on the top edge, so the window maximizes.
        assert_eq!(effects, vec![RuntimeEffect::SnapPreviewChanged(None)]);
        assert!(state.window(win).unwrap().is_maximized());
        assert!(interaction.is_idle());
    }

    #[test]
    fn drag_to_left_edge_snaps_to_left_half() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction);
        let original = state.window(win).unwrap().rect;

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: pointer(300, 120),
            },
        );
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: pointer(4, 300),
                viewport: VIEWPORT,
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::SnapPreviewChanged(Some(SnapPreview::Left))]
        );
        assert_eq!(interaction.snap_preview(), Some(SnapPreview::Left));

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: pointer(5, 310),
                viewport: VIEWPORT,
            },
        );
        assert_eq!(effects, vec![]);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::EndMove { viewport: VIEWPORT },
        );
        let record = state.window(win).unwrap();
        assert_eq!(record.snap, SnapRegion::Left);
        assert_eq!(record.rect, WindowRect::new(0, 0, 640, 760));
        assert_eq!(record.restore_rect.map(|r| (r.w, r.h)), Some((original.w, original.h)));
    }

    #[test]
    fn begin_move_restores_maximized_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction);
        let original = state.window(win).unwrap().rect;
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow { window_id: win },
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: pointer(500, 10),
            },
        );
        let record = state.window(win).unwrap();
        assert_eq!(record.mode, WindowMode::Normal);
        assert_eq!(record.rect, original);
        assert_eq!(interaction.dragging.as_ref().unwrap().rect_start, original);
    }

    #[test]
    fn cancel_gesture_skips_snap_and_clears_preview() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: pointer(300, 120),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: pointer(1279, 300),
                viewport: VIEWPORT,
            },
        );

        let effects = dispatch(&mut state, &mut interaction, DesktopAction::CancelGesture);
        assert_eq!(effects, vec![RuntimeEffect::SnapPreviewChanged(None)]);
        assert!(interaction.is_idle());
        assert_eq!(state.window(win).unwrap().snap, SnapRegion::None);
    }

    #[test]
    fn closing_gesture_window_ends_the_gesture() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win,
                edge: ResizeEdge::SouthEast,
                pointer: pointer(700, 500),
            },
        );
        assert_eq!(interaction.active_window(), Some(win));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: win },
        );
        assert!(interaction.is_idle());
    }

    #[test]
    fn resize_follows_accumulated_pointer_delta() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction);
        let start = state.window(win).unwrap().rect;

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win,
                edge: ResizeEdge::SouthEast,
                pointer: pointer(700, 500),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: pointer(760, 480),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: pointer(720, 540),
            },
        );
        assert_eq!(
            state.window(win).unwrap().rect,
            WindowRect::new(start.x, start.y, start.w + 20, start.h + 40)
        );
        dispatch(&mut state, &mut interaction, DesktopAction::EndResize);
        assert!(interaction.is_idle());
    }

    #[test]
    fn fixed_size_windows_ignore_resize_gestures() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(
                OpenWindowRequest::new("app.minesweeper", "Minesweeper").fixed_size(),
            ),
        );
        let win = state.windows[0].id;

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win,
                edge: ResizeEdge::East,
                pointer: pointer(0, 0),
            },
        );
        assert!(interaction.is_idle());
    }

    #[test]
    fn snap_window_action_fills_region() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SnapWindow {
                window_id: win,
                region: SnapRegion::Right,
                viewport: VIEWPORT,
            },
        );
        assert_eq!(state.window(win).unwrap().rect, WindowRect::new(640, 0, 640, 760));

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { window_id: win },
        );
        assert_eq!(effects, vec![]);
        assert_eq!(state.window(win).unwrap().rect, WindowRect::new(100, 100, 600, 400));
    }
}
