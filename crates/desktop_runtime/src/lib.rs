//! Desktop runtime core: window registry, gesture interaction, app catalog, window switching,
//! settings snapshot, and the composed runtime context.

pub mod apps;
pub mod effect_executor;
pub mod error;
pub mod interaction;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod seed;
pub mod settings;
pub mod switcher;
pub mod window_manager;

pub use apps::{resolve_open_target, AppCatalog, AppDefinition, OpenResolution, OpenTarget};
pub use error::RuntimeError;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect, UiSound};
pub use runtime_context::{
    begin_shared_move, begin_shared_resize, shared_gesture_handlers, DesktopRuntime,
    SharedDesktopRuntime,
};
pub use settings::{SettingsSnapshot, ThemeMode};
pub use switcher::{AltTabSwitcher, CycleDirection};
