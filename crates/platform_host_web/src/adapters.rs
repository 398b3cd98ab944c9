use std::rc::Rc;

use platform_host::{
    HostServices, HostStrategy, NoopExternalUrlService, NoopPointerListenerService,
    NoopSettingsStore, NoopSoundService, SystemClock,
};

use crate::{DocumentPointerListeners, WebExternalUrlService, WebSettingsStore, WebSoundService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the host service bundle for the compile-time selected host strategy.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            settings: Rc::new(WebSettingsStore),
            pointer: Rc::new(DocumentPointerListeners::default()),
            sounds: Rc::new(WebSoundService::default()),
            external_urls: Rc::new(WebExternalUrlService),
            clock: Rc::new(SystemClock),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Headless => HostServices {
            settings: Rc::new(NoopSettingsStore),
            pointer: Rc::new(NoopPointerListenerService),
            sounds: Rc::new(NoopSoundService),
            external_urls: Rc::new(NoopExternalUrlService),
            clock: Rc::new(SystemClock),
            host_strategy: HostStrategy::Headless,
        },
    }
}
