use std::fmt;

pub use platform_host::PointerPosition;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_WINDOW_WIDTH: i32 = 640;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 480;
pub const DEFAULT_MIN_WINDOW_WIDTH: i32 = 320;
pub const DEFAULT_MIN_WINDOW_HEIGHT: i32 = 240;
/// Height of the taskbar strip at the bottom of the screen.
pub const TASKBAR_HEIGHT: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "win_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowMode {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SnapRegion {
    #[default]
    None,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 100,
            y: 50,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Screen dimensions the desktop is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopViewport {
    pub width: i32,
    pub height: i32,
    pub taskbar_height: i32,
}

impl DesktopViewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            taskbar_height: TASKBAR_HEIGHT,
        }
    }

    /// Area above the taskbar that maximized and snapped windows fill.
    pub fn work_area(self) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.width,
            h: (self.height - self.taskbar_height).max(0),
        }
    }
}

impl Default for DesktopViewport {
    fn default() -> Self {
        Self::new(1280, 800)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowInstance {
    pub id: WindowId,
    pub app_id: String,
    pub title: String,
    pub icon: Option<String>,
    pub mode: WindowMode,
    pub snap: SnapRegion,
    pub rect: WindowRect,
    pub restore_rect: Option<WindowRect>,
    pub z: u64,
    pub focused: bool,
    pub resizable: bool,
    pub draggable: bool,
    pub min_w: i32,
    pub min_h: i32,
    pub created_at: u64,
    pub updated_at: u64,
    pub payload: Value,
}

impl WindowInstance {
    pub fn is_minimized(&self) -> bool {
        self.mode == WindowMode::Minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.mode == WindowMode::Maximized
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub app_id: String,
    pub title: String,
    pub icon: Option<String>,
    pub rect: WindowRect,
    pub min_w: i32,
    pub min_h: i32,
    pub resizable: bool,
    pub payload: Value,
}

impl OpenWindowRequest {
    pub fn new(app_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            title: title.into(),
            icon: None,
            rect: WindowRect::default(),
            min_w: DEFAULT_MIN_WINDOW_WIDTH,
            min_h: DEFAULT_MIN_WINDOW_HEIGHT,
            resizable: true,
            payload: Value::Null,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_rect(mut self, rect: WindowRect) -> Self {
        self.rect = rect;
        self
    }

    pub fn with_min_size(mut self, min_w: i32, min_h: i32) -> Self {
        self.min_w = min_w;
        self.min_h = min_h;
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    pub fn fixed_size(mut self) -> Self {
        self.resizable = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub next_window_id: u64,
    /// Open windows in open order.
    pub windows: Vec<WindowInstance>,
    pub focused_window_id: Option<WindowId>,
    pub z_counter: u64,
    pub cascade_index: u32,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            focused_window_id: None,
            z_counter: 0,
            cascade_index: 0,
        }
    }
}

impl DesktopState {
    pub fn window(&self, window_id: WindowId) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub(crate) fn window_mut(&mut self, window_id: WindowId) -> Option<&mut WindowInstance> {
        self.windows.iter_mut().find(|w| w.id == window_id)
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.focused_window_id
    }

    /// Windows ordered bottom to top.
    pub fn windows_by_z(&self) -> Vec<&WindowInstance> {
        let mut ordered: Vec<&WindowInstance> = self.windows.iter().collect();
        ordered.sort_by_key(|w| w.z);
        ordered
    }

    /// First open window of `app_id`, if any.
    pub fn window_for_app(&self, app_id: &str) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    #[serde(rename = "n")]
    North,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "w")]
    West,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "nw")]
    NorthWest,
    #[serde(rename = "se")]
    SouthEast,
    #[serde(rename = "sw")]
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Handle token used in markup (`"n"`, `"se"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    pub fn from_handle(handle: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|edge| edge.as_str() == handle)
    }

    pub const fn moves_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub const fn moves_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub const fn moves_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub const fn moves_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }
}

/// Snap target shown while a dragged window is near a screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SnapPreview {
    Maximize,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    /// Set once the pointer has travelled past the drag threshold.
    pub moved: bool,
    pub snap_preview: Option<SnapPreview>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        self.dragging.is_none() && self.resizing.is_none()
    }

    /// Window targeted by the active gesture.
    pub fn active_window(&self) -> Option<WindowId> {
        self.dragging
            .as_ref()
            .map(|session| session.window_id)
            .or_else(|| self.resizing.as_ref().map(|session| session.window_id))
    }

    pub fn snap_preview(&self) -> Option<SnapPreview> {
        self.dragging
            .as_ref()
            .and_then(|session| session.snap_preview)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_id_displays_with_prefix() {
        assert_eq!(WindowId(7).to_string(), "win_7");
    }

    #[test]
    fn work_area_excludes_taskbar() {
        assert_eq!(
            DesktopViewport::new(1280, 800).work_area(),
            WindowRect::new(0, 0, 1280, 760)
        );
    }

    #[test]
    fn resize_edges_round_trip_through_handles() {
        for edge in ResizeEdge::ALL {
            assert_eq!(ResizeEdge::from_handle(edge.as_str()), Some(edge));
        }
        assert_eq!(ResizeEdge::from_handle("x"), None);
        assert_eq!(
            serde_json::to_string(&ResizeEdge::SouthWest).expect("serialize"),
            "\"sw\""
        );
    }

    #[test]
    fn snap_region_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&SnapRegion::BottomLeft).expect("serialize"),
            "\"bottomLeft\""
        );
        assert_eq!(
            serde_json::to_string(&WindowMode::Maximized).expect("serialize"),
            "\"maximized\""
        );
    }
}
