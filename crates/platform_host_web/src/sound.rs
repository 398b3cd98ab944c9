//! UI sound playback through `HTMLAudioElement`.

use platform_host::SoundService;

/// Directory the cue files are served from; each cue maps to `<dir>/<cue>.mp3`.
pub const SOUND_ASSET_DIR: &str = "/sounds";

/// Playback volume applied to every cue.
pub const SOUND_VOLUME: f64 = 0.3;

const KNOWN_CUES: [&str; 4] = ["click", "minimize", "error", "startup"];

#[derive(Debug, Clone)]
/// Browser sound service. Playback failures (autoplay policy, missing asset) are swallowed.
pub struct WebSoundService {
    asset_dir: String,
}

impl Default for WebSoundService {
    fn default() -> Self {
        Self {
            asset_dir: SOUND_ASSET_DIR.to_string(),
        }
    }
}

impl WebSoundService {
    /// Source URL for `cue`, or `None` for cues without an asset.
    pub fn source_for(&self, cue: &str) -> Option<String> {
        KNOWN_CUES
            .contains(&cue)
            .then(|| format!("{}/{cue}.mp3", self.asset_dir))
    }
}

impl SoundService for WebSoundService {
    fn play(&self, cue: &str) {
        let Some(src) = self.source_for(cue) else {
            return;
        };

        #[cfg(target_arch = "wasm32")]
        {
            if let Ok(audio) = web_sys::HtmlAudioElement::new_with_src(&src) {
                audio.set_volume(SOUND_VOLUME);
                let _ = audio.play();
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = src;
        }
    }
}
