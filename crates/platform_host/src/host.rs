//! Host-service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    Clock, ExternalUrlService, NoopExternalUrlService, NoopPointerListenerService,
    NoopSettingsStore, NoopSoundService, PointerListenerService, SettingsStore, SoundService,
    SystemClock,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Headless composition with no-op adapters (native builds and tests).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Persisted settings store.
    pub settings: Rc<dyn SettingsStore>,
    /// Document-level pointer listeners for drag/resize gestures.
    pub pointer: Rc<dyn PointerListenerService>,
    /// UI sound cues.
    pub sounds: Rc<dyn SoundService>,
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Timestamp source for window bookkeeping.
    pub clock: Rc<dyn Clock>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op adapters backed by the system clock.
    pub fn headless() -> Self {
        Self {
            settings: Rc::new(NoopSettingsStore),
            pointer: Rc::new(NoopPointerListenerService),
            sounds: Rc::new(NoopSoundService),
            external_urls: Rc::new(NoopExternalUrlService),
            clock: Rc::new(SystemClock),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
