use platform_host::VfsError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures that stop the desktop runtime from booting or persisting settings.
pub enum RuntimeError {
    /// The VFS document could not be turned into a tree.
    #[error(transparent)]
    Vfs(#[from] VfsError),
    /// The embedded app catalog did not parse.
    #[error("invalid app catalog: {0}")]
    Catalog(#[from] serde_json::Error),
    /// The settings store rejected a read or write.
    #[error("settings store error: {0}")]
    Settings(String),
}
