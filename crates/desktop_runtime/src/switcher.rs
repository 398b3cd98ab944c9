//! Keyboard-driven window switching: the Alt+Tab overlay and Ctrl+Tab style focus cycling.

use serde::{Deserialize, Serialize};

use crate::model::{DesktopState, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CycleDirection {
    Next,
    Previous,
}

impl CycleDirection {
    /// Picks the direction from the shift modifier.
    pub fn from_shift(shift: bool) -> Self {
        if shift {
            Self::Previous
        } else {
            Self::Next
        }
    }

    fn step(self) -> isize {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

/// Non-minimized windows, most recently focused first.
pub fn switcher_candidates(state: &DesktopState) -> Vec<WindowId> {
    let mut visible: Vec<_> = state.windows.iter().filter(|w| !w.is_minimized()).collect();
    visible.sort_by(|a, b| b.z.cmp(&a.z));
    visible.into_iter().map(|w| w.id).collect()
}

/// Window that focus cycling moves to, walking every window in ascending z and wrapping.
///
/// With nothing focused, `Next` lands on the bottom window and `Previous` on the top one.
pub fn cycle_target(state: &DesktopState, direction: CycleDirection) -> Option<WindowId> {
    let ordered = state.windows_by_z();
    let last = ordered.len().checked_sub(1)?;
    let current = state
        .focused_window_id
        .and_then(|id| ordered.iter().position(|w| w.id == id));
    let index = match (direction, current) {
        (CycleDirection::Next, Some(i)) if i < last => i + 1,
        (CycleDirection::Next, _) => 0,
        (CycleDirection::Previous, Some(i)) if i > 0 => i - 1,
        (CycleDirection::Previous, _) => last,
    };
    ordered.get(index).map(|w| w.id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SwitcherSession {
    window_ids: Vec<WindowId>,
    selected: usize,
}

/// Alt+Tab overlay state. Inactive until [`AltTabSwitcher::begin`] finds a window to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AltTabSwitcher {
    session: Option<SwitcherSession>,
}

impl AltTabSwitcher {
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn window_ids(&self) -> &[WindowId] {
        self.session
            .as_ref()
            .map(|s| s.window_ids.as_slice())
            .unwrap_or_default()
    }

    pub fn selected(&self) -> Option<WindowId> {
        self.session
            .as_ref()
            .and_then(|s| s.window_ids.get(s.selected).copied())
    }

    /// Shows the overlay over `window_ids`, selecting the first entry. Empty lists are ignored.
    pub fn show(&mut self, window_ids: Vec<WindowId>) {
        if window_ids.is_empty() {
            return;
        }
        self.session = Some(SwitcherSession {
            window_ids,
            selected: 0,
        });
    }

    pub fn cycle(&mut self, direction: CycleDirection) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let len = session.window_ids.len() as isize;
        let next = (session.selected as isize + direction.step()).rem_euclid(len);
        session.selected = next as usize;
    }

    /// Handles a Tab press while Alt is held.
    ///
    /// The first press opens the overlay and, when there is more than one window, moves past the
    /// already focused entry. Later presses cycle.
    pub fn begin(&mut self, state: &DesktopState, direction: CycleDirection) {
        if self.is_active() {
            self.cycle(direction);
            return;
        }
        let window_ids = switcher_candidates(state);
        let cycle_now = window_ids.len() > 1;
        self.show(window_ids);
        if cycle_now {
            self.cycle(direction);
        }
    }

    /// Hides the overlay and returns the window to focus.
    pub fn commit(&mut self) -> Option<WindowId> {
        let selected = self.selected();
        self.session = None;
        selected
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }
}
