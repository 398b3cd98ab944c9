//! Executes reducer-emitted runtime effects against the host services.

use leptos::logging;
use platform_host::HostServices;

use crate::reducer::RuntimeEffect;
use crate::settings::SettingsSnapshot;

/// Runs host-facing effects in order and returns the ones the UI layer still has to apply
/// (focus moves and snap previews).
pub fn execute(
    host: &HostServices,
    settings: &SettingsSnapshot,
    effects: impl IntoIterator<Item = RuntimeEffect>,
) -> Vec<RuntimeEffect> {
    effects
        .into_iter()
        .filter_map(|effect| execute_one(host, settings, effect))
        .collect()
}

fn execute_one(
    host: &HostServices,
    settings: &SettingsSnapshot,
    effect: RuntimeEffect,
) -> Option<RuntimeEffect> {
    match effect {
        RuntimeEffect::PlaySound(sound) => {
            if !settings.sound_muted {
                host.sounds.play(sound.cue());
            }
            None
        }
        RuntimeEffect::OpenExternalUrl(url) => {
            if let Err(err) = host.external_urls.open_url(&url) {
                logging::warn!("failed to open external url {url}: {err}");
            }
            None
        }
        ui_effect => Some(ui_effect),
    }
}
