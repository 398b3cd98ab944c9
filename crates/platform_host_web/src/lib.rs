//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for settings persistence,
//! document-level pointer listeners, UI sounds, and external URL opening. Native builds compile
//! every adapter to an inert fallback so the workspace stays testable off the browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the host service bundle factory.
pub mod adapters;
pub mod external_url;
pub mod pointer;
pub mod sound;
pub mod storage;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use external_url::WebExternalUrlService;
pub use pointer::DocumentPointerListeners;
pub use sound::{WebSoundService, SOUND_ASSET_DIR, SOUND_VOLUME};
pub use storage::local_settings::WebSettingsStore;
