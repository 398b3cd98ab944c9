//! Virtual file system data types shared across the host contracts and the desktop runtime.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Path of the directory whose children are rendered as desktop icons.
pub const DESKTOP_DIR_PATH: &str = "/Desktop";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Discriminant of a [`VfsNodePayload`], used for filtering.
pub enum VfsNodeKind {
    /// Directory with ordered children.
    Dir,
    /// File with a MIME type and optional content reference.
    File,
    /// External URL.
    Link,
    /// Shortcut to an app or another node.
    Shortcut,
}

impl VfsNodeKind {
    /// Returns the stable lowercase tag used in the JSON document.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dir => "dir",
            Self::File => "file",
            Self::Link => "link",
            Self::Shortcut => "shortcut",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Desktop placement of an icon, in pixels.
pub struct VfsDesktopPosition {
    /// Left offset.
    pub x: i32,
    /// Top offset.
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
/// Free-form metadata bag attached to a node.
pub struct VfsMeta {
    /// Search/category tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Whether the node is highlighted in launchers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    /// Stable slug used by deep links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Any other keys carried by the source document.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
/// Target of a shortcut node.
pub enum ShortcutTarget {
    /// Launches an application.
    App {
        /// Application id from the app catalog.
        #[serde(rename = "appId")]
        app_id: String,
    },
    /// Opens another VFS node.
    Node {
        /// Target node id.
        #[serde(rename = "nodeId")]
        node_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// Variant-specific node payload, tagged by `type`.
pub enum VfsNodePayload {
    /// Directory payload.
    Dir {
        /// Ordered child ids.
        #[serde(default)]
        children: Vec<String>,
    },
    /// File payload.
    File {
        /// MIME type.
        mime: String,
        /// Key into the external content store.
        #[serde(default, rename = "contentRef", skip_serializing_if = "Option::is_none")]
        content_ref: Option<String>,
        /// Preferred app ids, most preferred first.
        #[serde(default, rename = "openWith", skip_serializing_if = "Vec::is_empty")]
        open_with: Vec<String>,
    },
    /// External link payload.
    Link {
        /// Absolute URL.
        url: String,
        /// Preferred app ids, most preferred first.
        #[serde(default, rename = "openWith", skip_serializing_if = "Vec::is_empty")]
        open_with: Vec<String>,
    },
    /// Shortcut payload.
    Shortcut {
        /// Shortcut destination.
        target: ShortcutTarget,
    },
}

impl VfsNodePayload {
    /// Returns the payload discriminant.
    pub const fn kind(&self) -> VfsNodeKind {
        match self {
            Self::Dir { .. } => VfsNodeKind::Dir,
            Self::File { .. } => VfsNodeKind::File,
            Self::Link { .. } => VfsNodeKind::Link,
            Self::Shortcut { .. } => VfsNodeKind::Shortcut,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Raw node as authored in the VFS document.
pub struct VfsNode {
    /// Unique node id.
    pub id: String,
    /// Display name; also the path segment.
    pub name: String,
    /// Authoring hint for the node's expected path. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_hint: Option<String>,
    /// Icon key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Desktop icon placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<VfsDesktopPosition>,
    /// Metadata bag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<VfsMeta>,
    /// Variant-specific fields.
    #[serde(flatten)]
    pub payload: VfsNodePayload,
}

impl VfsNode {
    /// Returns the node kind.
    pub const fn kind(&self) -> VfsNodeKind {
        self.payload.kind()
    }

    /// Returns the authored child ids for directories, empty otherwise.
    pub fn child_ids(&self) -> &[String] {
        match &self.payload {
            VfsNodePayload::Dir { children } => children,
            _ => &[],
        }
    }

    /// Returns the content reference for files.
    pub fn content_ref(&self) -> Option<&str> {
        match &self.payload {
            VfsNodePayload::File { content_ref, .. } => content_ref.as_deref(),
            _ => None,
        }
    }

    /// Returns the MIME type for files.
    pub fn mime(&self) -> Option<&str> {
        match &self.payload {
            VfsNodePayload::File { mime, .. } => Some(mime),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Startup input: a flat node list plus the designated root id.
pub struct VfsDocument {
    /// Document format version.
    #[serde(default)]
    pub version: String,
    /// Id of the root directory.
    pub root_id: String,
    /// Flat node list.
    pub nodes: Vec<VfsNode>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn node_variants_deserialize_from_tagged_json() {
        let doc: VfsDocument = serde_json::from_value(json!({
            "version": "1",
            "rootId": "root",
            "nodes": [
                { "id": "root", "type": "dir", "name": "", "children": ["about"] },
                {
                    "id": "about",
                    "type": "file",
                    "name": "About.txt",
                    "mime": "text/plain",
                    "contentRef": "content/about.txt",
                    "desktop": { "x": 20, "y": 40 },
                    "meta": { "tags": ["bio"], "slug": "about", "accent": "blue" }
                },
                { "id": "gh", "type": "link", "name": "GitHub", "url": "https://github.com" },
                {
                    "id": "sc",
                    "type": "shortcut",
                    "name": "Terminal",
                    "target": { "kind": "app", "appId": "app.terminal" }
                }
            ]
        }))
        .expect("deserialize document");

        assert_eq!(doc.root_id, "root");
        assert_eq!(doc.nodes[0].child_ids(), ["about".to_string()]);
        assert_eq!(doc.nodes[1].content_ref(), Some("content/about.txt"));
        assert_eq!(doc.nodes[1].mime(), Some("text/plain"));
        let meta = doc.nodes[1].meta.as_ref().expect("meta");
        assert_eq!(meta.slug.as_deref(), Some("about"));
        assert_eq!(meta.extra.get("accent"), Some(&json!("blue")));
        assert_eq!(doc.nodes[2].kind(), VfsNodeKind::Link);
        assert_eq!(
            doc.nodes[3].payload,
            VfsNodePayload::Shortcut {
                target: ShortcutTarget::App {
                    app_id: "app.terminal".to_string()
                }
            }
        );
    }

    #[test]
    fn node_kind_serializes_as_lowercase_tag() {
        assert_eq!(
            serde_json::to_string(&VfsNodeKind::Shortcut).expect("serialize"),
            "\"shortcut\""
        );
        assert_eq!(VfsNodeKind::Dir.as_str(), "dir");
    }
}
