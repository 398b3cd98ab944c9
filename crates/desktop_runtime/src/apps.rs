//! App catalog and open-target resolution.
//!
//! The catalog is authored in `catalog/apps.toml` and embedded as JSON at build time. Desktop
//! icons, the start menu, and the terminal all turn "open this" into a window request through
//! [`resolve_open_target`].

use platform_host::{ShortcutTarget, VfsNodePayload, VfsTree, VfsTreeNode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

use crate::error::RuntimeError;
use crate::model::{DesktopViewport, OpenWindowRequest, WindowRect};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

pub const BROWSER_APP_ID: &str = "app.browser";
pub const EXPLORER_APP_ID: &str = "app.explorer";
pub const SETTINGS_APP_ID: &str = "app.settings";

/// Shortcut chains longer than this are treated as broken.
pub const MAX_SHORTCUT_DEPTH: usize = 8;

const MIN_CENTERED_X: i32 = 100;
const MIN_CENTERED_Y: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppWindowDefaults {
    pub w: i32,
    pub h: i32,
    pub min_w: i32,
    pub min_h: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSupports {
    #[serde(default)]
    pub open_types: Vec<String>,
    #[serde(default)]
    pub mime: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDefinition {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// At most one window; launching again focuses it.
    #[serde(default)]
    pub singleton: bool,
    pub default_window: AppWindowDefaults,
    #[serde(default)]
    pub supports: AppSupports,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAssociation {
    pub mime: String,
    pub default_app: String,
    #[serde(default)]
    pub open_with: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedApps {
    #[serde(default)]
    pub pinned: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCatalog {
    pub schema_version: u32,
    pub apps: Vec<AppDefinition>,
    #[serde(default)]
    pub file_associations: Vec<FileAssociation>,
    #[serde(default)]
    pub start_menu: PinnedApps,
    #[serde(default)]
    pub taskbar: PinnedApps,
}

impl AppCatalog {
    /// Parses the catalog embedded at build time.
    pub fn builtin() -> Result<Self, RuntimeError> {
        Self::from_json(APP_CATALOG_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, RuntimeError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn app(&self, app_id: &str) -> Option<&AppDefinition> {
        self.apps.iter().find(|app| app.id == app_id)
    }

    pub fn association_for(&self, mime: &str) -> Option<&FileAssociation> {
        self.file_associations.iter().find(|a| a.mime == mime)
    }

    /// Default app registered for `mime`.
    pub fn default_app_for(&self, mime: &str) -> Option<&AppDefinition> {
        self.association_for(mime)
            .and_then(|association| self.app(&association.default_app))
    }

    /// Apps offered in an "Open with" menu for `mime`, default first.
    pub fn apps_for_mime(&self, mime: &str) -> Vec<&AppDefinition> {
        let Some(association) = self.association_for(mime) else {
            return Vec::new();
        };
        let mut ids = vec![association.default_app.as_str()];
        for app_id in &association.open_with {
            if !ids.contains(&app_id.as_str()) {
                ids.push(app_id);
            }
        }
        ids.into_iter().filter_map(|id| self.app(id)).collect()
    }

    pub fn start_menu_apps(&self) -> Vec<&AppDefinition> {
        self.pinned(&self.start_menu)
    }

    pub fn taskbar_apps(&self) -> Vec<&AppDefinition> {
        self.pinned(&self.taskbar)
    }

    fn pinned<'a>(&'a self, pins: &'a PinnedApps) -> Vec<&'a AppDefinition> {
        pins.pinned.iter().filter_map(|id| self.app(id)).collect()
    }
}

/// Something the user asked to open.
#[derive(Debug, Clone, PartialEq)]
pub enum OpenTarget {
    /// Launch an app, optionally handing it a payload.
    App { app_id: String, payload: Value },
    /// Open a URL in the built-in browser.
    Url { url: String },
    /// Open a VFS node by id.
    Node { node_id: String },
    /// Open a VFS node by absolute path.
    Path { path: String },
}

impl OpenTarget {
    pub fn app(app_id: impl Into<String>) -> Self {
        Self::App {
            app_id: app_id.into(),
            payload: Value::Null,
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    pub fn node(node_id: impl Into<String>) -> Self {
        Self::Node {
            node_id: node_id.into(),
        }
    }

    pub fn path(path: impl Into<String>) -> Self {
        Self::Path { path: path.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OpenResolution {
    /// Open (or, for singletons, focus) a window.
    Window(OpenWindowRequest),
    /// Hand the URL to the host, leaving the desktop.
    External(String),
}

/// Window geometry for `app`, centred in the work area.
pub fn centered_rect(defaults: AppWindowDefaults, viewport: DesktopViewport) -> WindowRect {
    let area = viewport.work_area();
    WindowRect::new(
        ((area.w - defaults.w) / 2).max(MIN_CENTERED_X),
        ((area.h - defaults.h) / 2).max(MIN_CENTERED_Y),
        defaults.w,
        defaults.h,
    )
}

/// Builds a request opening `app` centred in the work area.
pub fn app_open_request(
    app: &AppDefinition,
    title: impl Into<String>,
    payload: Value,
    viewport: DesktopViewport,
) -> OpenWindowRequest {
    let defaults = app.default_window;
    OpenWindowRequest::new(app.id.clone(), title)
        .with_icon(app.icon.clone())
        .with_rect(centered_rect(defaults, viewport))
        .with_min_size(defaults.min_w, defaults.min_h)
        .with_payload(payload)
}

/// Lowercased host of an absolute URL, without credentials or port.
pub fn url_host(url: &str) -> Option<String> {
    Url::parse(url).ok()?.host_str().map(str::to_string)
}

pub fn is_mailto(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| parsed.scheme() == "mailto")
}

fn browser_window(
    catalog: &AppCatalog,
    title: String,
    url: &str,
    viewport: DesktopViewport,
) -> OpenResolution {
    match catalog.app(BROWSER_APP_ID) {
        Some(browser) => OpenResolution::Window(app_open_request(
            browser,
            title,
            json!({ "url": url }),
            viewport,
        )),
        None => OpenResolution::External(url.to_string()),
    }
}

/// Decides what opening `target` means: which app, with which title and payload, or whether
/// the URL leaves the desktop. `None` when nothing can open it.
pub fn resolve_open_target(
    catalog: &AppCatalog,
    vfs: &VfsTree,
    target: &OpenTarget,
    viewport: DesktopViewport,
) -> Option<OpenResolution> {
    match target {
        OpenTarget::App { app_id, payload } => {
            let app = catalog.app(app_id)?;
            Some(OpenResolution::Window(app_open_request(
                app,
                app.name.clone(),
                payload.clone(),
                viewport,
            )))
        }
        OpenTarget::Url { url } => {
            let title = match url_host(url) {
                Some(host) => format!("Browser — {host}"),
                None => "Browser".to_string(),
            };
            Some(browser_window(catalog, title, url, viewport))
        }
        OpenTarget::Node { node_id } => {
            resolve_node(catalog, vfs, vfs.get_node(node_id)?, viewport, 0)
        }
        OpenTarget::Path { path } => resolve_node(catalog, vfs, vfs.resolve(path)?, viewport, 0),
    }
}

fn resolve_node(
    catalog: &AppCatalog,
    vfs: &VfsTree,
    node: &VfsTreeNode,
    viewport: DesktopViewport,
    depth: usize,
) -> Option<OpenResolution> {
    match node.payload() {
        VfsNodePayload::Shortcut { target } => match target {
            ShortcutTarget::App { app_id } => {
                resolve_open_target(catalog, vfs, &OpenTarget::app(app_id.as_str()), viewport)
            }
            ShortcutTarget::Node { node_id } => {
                if depth >= MAX_SHORTCUT_DEPTH {
                    return None;
                }
                resolve_node(catalog, vfs, vfs.get_node(node_id)?, viewport, depth + 1)
            }
        },
        VfsNodePayload::Link { url, .. } => {
            if is_mailto(url) {
                return Some(OpenResolution::External(url.clone()));
            }
            Some(browser_window(
                catalog,
                format!("Browser — {}", node.name()),
                url,
                viewport,
            ))
        }
        VfsNodePayload::Dir { .. } => {
            let explorer = catalog.app(EXPLORER_APP_ID)?;
            Some(OpenResolution::Window(app_open_request(
                explorer,
                format!("{} — {}", explorer.name, node.name()),
                json!({ "nodeId": node.id() }),
                viewport,
            )))
        }
        VfsNodePayload::File { mime, .. } => {
            let app = catalog.default_app_for(mime)?;
            Some(OpenResolution::Window(app_open_request(
                app,
                format!("{} — {}", app.name, node.name()),
                json!({ "nodeId": node.id() }),
                viewport,
            )))
        }
    }
}
