//! External URL adapter for browser contexts.

use platform_host::ExternalUrlService;

#[derive(Debug, Clone, Copy, Default)]
/// Opens URLs in a new browser tab via `window.open`.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url(&self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            window
                .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
                .map_err(|e| format!("window.open failed: {e:?}"))?;
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Err("external URLs require a browser host".to_string())
        }
    }
}
