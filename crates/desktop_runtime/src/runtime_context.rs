//! Composed desktop runtime context.
//!
//! [`DesktopRuntime`] owns every piece of desktop session state: host services, the shared
//! read-only VFS, the app catalog, window and interaction state, the Alt+Tab switcher, settings,
//! the UI effect queue, and the active gesture listener guard. UI layers hold it behind a
//! [`SharedDesktopRuntime`] and call into it from event handlers.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use leptos::logging;
use platform_host::{GestureListenerGuard, HostServices, PointerGestureHandlers, VfsTree};

use crate::apps::{resolve_open_target, AppCatalog, OpenResolution, OpenTarget};
use crate::effect_executor;
use crate::error::RuntimeError;
use crate::model::{
    DesktopState, DesktopViewport, InteractionState, OpenWindowRequest, PointerPosition,
    ResizeEdge, WindowId, WindowInstance,
};
use crate::reducer::{reduce_desktop, DesktopAction, RuntimeEffect, UiSound};
use crate::seed::seed_vfs;
use crate::settings::{load_settings, persist_settings, SettingsSnapshot, ThemeMode};
use crate::switcher::{AltTabSwitcher, CycleDirection};

/// Runtime handle shared with pointer listener callbacks.
pub type SharedDesktopRuntime = Rc<RefCell<DesktopRuntime>>;

pub struct DesktopRuntime {
    host: HostServices,
    vfs: Rc<VfsTree>,
    catalog: AppCatalog,
    state: DesktopState,
    interaction: InteractionState,
    switcher: AltTabSwitcher,
    settings: SettingsSnapshot,
    viewport: DesktopViewport,
    effects: Vec<RuntimeEffect>,
    gesture: Option<GestureListenerGuard>,
}

impl std::fmt::Debug for DesktopRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopRuntime")
            .field("host", &self.host)
            .field("windows", &self.state.windows.len())
            .field("interaction", &self.interaction)
            .field("viewport", &self.viewport)
            .field("gesture_active", &self.gesture.is_some())
            .finish_non_exhaustive()
    }
}

impl DesktopRuntime {
    /// Assembles a runtime from explicit parts, loading persisted settings from the host.
    pub fn new(
        host: HostServices,
        vfs: Rc<VfsTree>,
        catalog: AppCatalog,
        viewport: DesktopViewport,
    ) -> Self {
        let settings = load_settings(host.settings.as_ref());
        Self {
            host,
            vfs,
            catalog,
            state: DesktopState::default(),
            interaction: InteractionState::default(),
            switcher: AltTabSwitcher::default(),
            settings,
            viewport,
            effects: Vec::new(),
            gesture: None,
        }
    }

    /// Boots the desktop with the built-in file system and app catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the built-in VFS or catalog cannot be loaded.
    pub fn boot(host: HostServices, viewport: DesktopViewport) -> Result<Self, RuntimeError> {
        let vfs = seed_vfs()?;
        for warning in vfs.warnings() {
            logging::warn!("vfs seed: {warning}");
        }
        let catalog = AppCatalog::builtin()?;
        logging::log!(
            "desktop runtime booted on {} host: {} vfs nodes, {} apps",
            host.host_strategy.as_str(),
            vfs.len(),
            catalog.apps.len()
        );

        let mut runtime = Self::new(host, Rc::new(vfs), catalog, viewport);
        runtime.run_effects(vec![RuntimeEffect::PlaySound(UiSound::Startup)]);
        Ok(runtime)
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Windows ordered bottom to top, for rendering.
    pub fn windows_by_z(&self) -> Vec<&WindowInstance> {
        self.state.windows_by_z()
    }

    pub fn vfs(&self) -> &Rc<VfsTree> {
        &self.vfs
    }

    pub fn catalog(&self) -> &AppCatalog {
        &self.catalog
    }

    pub fn host(&self) -> &HostServices {
        &self.host
    }

    pub fn viewport(&self) -> DesktopViewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: DesktopViewport) {
        self.viewport = viewport;
    }

    pub fn switcher(&self) -> &AltTabSwitcher {
        &self.switcher
    }

    pub fn settings(&self) -> &SettingsSnapshot {
        &self.settings
    }

    /// Whether document pointer listeners are currently attached for a gesture.
    pub fn has_gesture_listeners(&self) -> bool {
        self.gesture.is_some()
    }

    /// Applies `action` to the desktop state and executes the resulting effects.
    pub fn dispatch(&mut self, action: DesktopAction) {
        let now_ms = self.host.clock.now_ms();
        let effects = reduce_desktop(&mut self.state, &mut self.interaction, action, now_ms);
        if self.interaction.is_idle() {
            self.gesture = None;
        }
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<RuntimeEffect>) {
        if effects.is_empty() {
            return;
        }
        let ui_effects = effect_executor::execute(&self.host, &self.settings, effects);
        self.effects.extend(ui_effects);
    }

    /// Takes the queued UI effects, oldest first.
    pub fn drain_effects(&mut self) -> Vec<RuntimeEffect> {
        std::mem::take(&mut self.effects)
    }

    pub fn open_window(&mut self, req: OpenWindowRequest) -> WindowId {
        let window_id = WindowId(self.state.next_window_id);
        self.dispatch(DesktopAction::OpenWindow(req));
        window_id
    }

    /// Opens `target`, focusing the existing window of a singleton app instead of opening another.
    ///
    /// Returns the window that ended up focused, or `None` when the target left the desktop or
    /// nothing could open it.
    pub fn launch(&mut self, target: OpenTarget) -> Option<WindowId> {
        match resolve_open_target(&self.catalog, &self.vfs, &target, self.viewport) {
            Some(OpenResolution::Window(req)) => {
                let singleton = self
                    .catalog
                    .app(&req.app_id)
                    .is_some_and(|app| app.singleton);
                let existing = self.state.window_for_app(&req.app_id).map(|w| w.id);
                match existing {
                    Some(window_id) if singleton => {
                        self.dispatch(DesktopAction::FocusWindow { window_id });
                        Some(window_id)
                    }
                    _ => Some(self.open_window(req)),
                }
            }
            Some(OpenResolution::External(url)) => {
                self.run_effects(vec![RuntimeEffect::OpenExternalUrl(url)]);
                None
            }
            None => {
                logging::warn!("nothing can open {target:?}");
                self.run_effects(vec![RuntimeEffect::PlaySound(UiSound::Error)]);
                None
            }
        }
    }

    /// Starts a title-bar drag and attaches `handlers` as the gesture's pointer listeners.
    pub fn begin_move(
        &mut self,
        window_id: WindowId,
        pointer: PointerPosition,
        handlers: PointerGestureHandlers,
    ) {
        self.dispatch(DesktopAction::BeginMove { window_id, pointer });
        self.attach_gesture(handlers);
    }

    /// Starts an edge resize and attaches `handlers` as the gesture's pointer listeners.
    pub fn begin_resize(
        &mut self,
        window_id: WindowId,
        edge: ResizeEdge,
        pointer: PointerPosition,
        handlers: PointerGestureHandlers,
    ) {
        self.dispatch(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        });
        self.attach_gesture(handlers);
    }

    fn attach_gesture(&mut self, handlers: PointerGestureHandlers) {
        if self.interaction.is_idle() {
            return;
        }
        self.gesture = None;
        match GestureListenerGuard::acquire(self.host.pointer.clone(), handlers) {
            Ok(guard) => self.gesture = Some(guard),
            Err(err) => {
                logging::warn!("gesture listeners unavailable, cancelling gesture: {err}");
                self.dispatch(DesktopAction::CancelGesture);
            }
        }
    }

    /// Feeds a pointer move into the active gesture.
    pub fn pointer_moved(&mut self, pointer: PointerPosition) {
        if self.interaction.dragging.is_some() {
            self.dispatch(DesktopAction::UpdateMove {
                pointer,
                viewport: self.viewport,
            });
        } else if self.interaction.resizing.is_some() {
            self.dispatch(DesktopAction::UpdateResize { pointer });
        }
    }

    /// Ends the active gesture on pointer release.
    pub fn pointer_released(&mut self, _pointer: PointerPosition) {
        if self.interaction.dragging.is_some() {
            self.dispatch(DesktopAction::EndMove {
                viewport: self.viewport,
            });
        } else if self.interaction.resizing.is_some() {
            self.dispatch(DesktopAction::EndResize);
        }
    }

    pub fn cancel_gesture(&mut self) {
        self.dispatch(DesktopAction::CancelGesture);
    }

    /// Handles Tab while Alt is held: opens the switcher or advances it.
    pub fn alt_tab(&mut self, shift: bool) {
        self.switcher
            .begin(&self.state, CycleDirection::from_shift(shift));
    }

    /// Handles Alt release: hides the switcher and focuses the selection.
    pub fn commit_alt_tab(&mut self) -> Option<WindowId> {
        let window_id = self.switcher.commit()?;
        self.dispatch(DesktopAction::FocusWindow { window_id });
        Some(window_id)
    }

    pub fn cancel_alt_tab(&mut self) {
        self.switcher.cancel();
    }

    /// Applies `change` to the settings snapshot and persists it.
    ///
    /// The in-memory snapshot keeps the change even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Settings`] when the settings store rejects the write.
    pub fn update_settings(
        &mut self,
        change: impl FnOnce(&mut SettingsSnapshot),
    ) -> Result<(), RuntimeError> {
        change(&mut self.settings);
        persist_settings(self.host.settings.as_ref(), &self.settings).map_err(|err| {
            logging::warn!("settings save failed: {err}");
            err
        })
    }

    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<(), RuntimeError> {
        self.update_settings(|settings| settings.theme = theme)
    }

    pub fn set_accent_color(&mut self, color: impl Into<String>) -> Result<(), RuntimeError> {
        let color = color.into();
        self.update_settings(|settings| settings.accent_color = color)
    }

    pub fn set_wallpaper(&mut self, wallpaper: impl Into<String>) -> Result<(), RuntimeError> {
        let wallpaper = wallpaper.into();
        self.update_settings(|settings| settings.wallpaper = wallpaper)
    }

    pub fn set_sound_muted(&mut self, muted: bool) -> Result<(), RuntimeError> {
        self.update_settings(|settings| settings.sound_muted = muted)
    }
}

fn with_runtime(runtime: &Weak<RefCell<DesktopRuntime>>, f: impl FnOnce(&mut DesktopRuntime)) {
    let Some(runtime) = runtime.upgrade() else {
        return;
    };
    match runtime.try_borrow_mut() {
        Ok(mut runtime) => f(&mut runtime),
        Err(_) => logging::warn!("desktop runtime busy; dropping pointer event"),
    };
}

/// Pointer handlers that route document events back into `runtime`.
///
/// The handlers hold a weak reference, since the runtime owns the guard that owns them.
pub fn shared_gesture_handlers(runtime: &SharedDesktopRuntime) -> PointerGestureHandlers {
    let on_move = Rc::downgrade(runtime);
    let on_up = Rc::downgrade(runtime);
    PointerGestureHandlers {
        on_move: Rc::new(move |pointer| with_runtime(&on_move, |rt| rt.pointer_moved(pointer))),
        on_up: Rc::new(move |pointer| with_runtime(&on_up, |rt| rt.pointer_released(pointer))),
    }
}

/// Title-bar pointer-down on a shared runtime.
pub fn begin_shared_move(
    runtime: &SharedDesktopRuntime,
    window_id: WindowId,
    pointer: PointerPosition,
) {
    let handlers = shared_gesture_handlers(runtime);
    runtime
        .borrow_mut()
        .begin_move(window_id, pointer, handlers);
}

/// Resize-handle pointer-down on a shared runtime.
pub fn begin_shared_resize(
    runtime: &SharedDesktopRuntime,
    window_id: WindowId,
    edge: ResizeEdge,
    pointer: PointerPosition,
) {
    let handlers = shared_gesture_handlers(runtime);
    runtime
        .borrow_mut()
        .begin_resize(window_id, edge, pointer, handlers);
}
