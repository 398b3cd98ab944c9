//! External URL host-service contracts.

use std::cell::RefCell;

/// Host service for opening external URLs outside the desktop shell.
pub trait ExternalUrlService {
    /// Opens a URL using the host's external navigation mechanism.
    fn open_url(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Default)]
/// External URL service that records opened URLs.
pub struct MemoryExternalUrlService {
    opened: RefCell<Vec<String>>,
}

impl MemoryExternalUrlService {
    /// URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for MemoryExternalUrlService {
    fn open_url(&self, url: &str) -> Result<(), String> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
