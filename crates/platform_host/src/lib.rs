//! Typed host-domain contracts and shared models used across the desktop runtime and browser
//! adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the virtual path
//! helpers, the read-only virtual file system, and host service traits (settings, pointer
//! listeners, sounds, external URLs, clock) while concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod content;
pub mod external_url;
pub mod fs;
pub mod host;
pub mod pointer;
pub mod sound;
pub mod storage;
pub mod time;

pub use content::{content_key_from_asset, ContentStore, MemoryContentStore, NoopContentStore};
pub use external_url::{ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService};
pub use fs::path::{
    basename, dirname, display_path, is_absolute_path, join_virtual_path, normalize_virtual_path,
    resolve_virtual_path, HOME_DIR,
};
pub use fs::tree::{
    FindOptions, VfsBuildWarning, VfsError, VfsTree, VfsTreeNode, DEFAULT_FIND_LIMIT,
};
pub use fs::types::{
    ShortcutTarget, VfsDesktopPosition, VfsDocument, VfsMeta, VfsNode, VfsNodeKind,
    VfsNodePayload, DESKTOP_DIR_PATH,
};
pub use host::{HostServices, HostStrategy};
pub use pointer::{
    GestureListenerGuard, ListenerToken, MemoryPointerListenerService, NoopPointerListenerService,
    PointerCallback, PointerGestureHandlers, PointerListenerService, PointerPosition,
};
pub use sound::{MemorySoundService, NoopSoundService, SoundService};
pub use storage::settings::{
    load_setting_with, save_setting_with, MemorySettingsStore, NoopSettingsStore, SettingsStore,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now, Clock, ManualClock, SystemClock};
