//! Immutable in-memory VFS tree with id and path indexes.
//!
//! Nodes live in an arena; the parent link of each node is an arena index used only for upward
//! path computation. Ownership flows strictly from parent to children.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use super::path::is_absolute_path;
use super::types::{
    VfsDesktopPosition, VfsDocument, VfsMeta, VfsNode, VfsNodeKind, VfsNodePayload,
    DESKTOP_DIR_PATH,
};
use crate::content::ContentStore;

/// Result cap applied by [`VfsTree::find`] when none is given.
pub const DEFAULT_FIND_LIMIT: usize = 50;

const ROOT_SLOT: usize = 0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Fatal VFS construction errors.
pub enum VfsError {
    /// The document's `rootId` does not name any node.
    #[error("vfs root node `{root_id}` not found")]
    RootNotFound {
        /// Root id declared by the document.
        root_id: String,
    },
    /// The document could not be parsed.
    #[error("invalid vfs document: {0}")]
    InvalidDocument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Non-fatal problem found while building the tree. The offending child is skipped.
pub enum VfsBuildWarning {
    /// A directory lists a child id that no node carries.
    MissingChild {
        /// Directory listing the child.
        parent_id: String,
        /// Dangling child id.
        child_id: String,
    },
    /// A directory lists a child that was already placed in the tree.
    RepeatedChild {
        /// Directory listing the child.
        parent_id: String,
        /// Child id that was already materialized.
        child_id: String,
    },
}

impl fmt::Display for VfsBuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingChild {
                parent_id,
                child_id,
            } => write!(
                f,
                "child node `{child_id}` referenced by `{parent_id}` but not found"
            ),
            Self::RepeatedChild {
                parent_id,
                child_id,
            } => write!(
                f,
                "child node `{child_id}` referenced by `{parent_id}` is already in the tree"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Runtime tree node: the raw node plus its tree links.
pub struct VfsTreeNode {
    slot: usize,
    parent: Option<usize>,
    children: Vec<usize>,
    node: VfsNode,
}

impl VfsTreeNode {
    /// Raw node data.
    pub fn node(&self) -> &VfsNode {
        &self.node
    }

    /// Unique node id.
    pub fn id(&self) -> &str {
        &self.node.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.node.name
    }

    /// Node kind.
    pub fn kind(&self) -> VfsNodeKind {
        self.node.kind()
    }

    /// Variant-specific fields.
    pub fn payload(&self) -> &VfsNodePayload {
        &self.node.payload
    }

    /// Icon key.
    pub fn icon(&self) -> Option<&str> {
        self.node.icon.as_deref()
    }

    /// Desktop placement.
    pub fn desktop(&self) -> Option<VfsDesktopPosition> {
        self.node.desktop
    }

    /// Metadata bag.
    pub fn meta(&self) -> Option<&VfsMeta> {
        self.node.meta.as_ref()
    }

    /// Returns `true` for directories.
    pub fn is_dir(&self) -> bool {
        self.kind() == VfsNodeKind::Dir
    }

    /// Returns `true` for the tree root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of materialized children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Filters for [`VfsTree::find`].
pub struct FindOptions<'a> {
    /// Start the search at this path instead of the root.
    pub path: Option<&'a str>,
    /// Only return nodes of this kind.
    pub kind: Option<VfsNodeKind>,
    /// Maximum number of results; defaults to [`DEFAULT_FIND_LIMIT`].
    pub max: Option<usize>,
}

/// Read-only virtual file system built once from a [`VfsDocument`].
pub struct VfsTree {
    nodes: Vec<VfsTreeNode>,
    by_id: HashMap<String, usize>,
    by_path: HashMap<String, usize>,
    content: Box<dyn ContentStore>,
    warnings: Vec<VfsBuildWarning>,
}

impl fmt::Debug for VfsTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VfsTree")
            .field("nodes", &self.nodes.len())
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}

impl VfsTree {
    /// Parses a JSON document and builds the tree.
    ///
    /// # Errors
    ///
    /// Returns [`VfsError::InvalidDocument`] for malformed JSON and [`VfsError::RootNotFound`]
    /// when the root id is missing.
    pub fn from_json(raw: &str, content: impl ContentStore + 'static) -> Result<Self, VfsError> {
        let document: VfsDocument =
            serde_json::from_str(raw).map_err(|err| VfsError::InvalidDocument(err.to_string()))?;
        Self::build(document, content)
    }

    /// Builds the tree depth-first from the document root, then indexes every node by path.
    ///
    /// Dangling or repeated child ids are skipped and reported through [`Self::warnings`].
    ///
    /// # Errors
    ///
    /// Returns [`VfsError::RootNotFound`] when `document.root_id` names no node.
    pub fn build(
        document: VfsDocument,
        content: impl ContentStore + 'static,
    ) -> Result<Self, VfsError> {
        let node_count = document.nodes.len();
        let mut raw_by_id: HashMap<String, VfsNode> = document
            .nodes
            .into_iter()
            .map(|node| (node.id.clone(), node))
            .collect();
        let root = raw_by_id
            .remove(&document.root_id)
            .ok_or_else(|| VfsError::RootNotFound {
                root_id: document.root_id.clone(),
            })?;

        let mut tree = Self {
            nodes: Vec::with_capacity(node_count),
            by_id: HashMap::with_capacity(node_count),
            by_path: HashMap::with_capacity(node_count),
            content: Box::new(content),
            warnings: Vec::new(),
        };
        tree.push_node(root, None);

        // (directory slot, authored child ids, next child to visit)
        let mut pending = vec![(ROOT_SLOT, tree.nodes[ROOT_SLOT].node.child_ids().to_vec(), 0)];
        while let Some((parent, child_ids, cursor)) = pending.last_mut() {
            let Some(child_id) = child_ids.get(*cursor).cloned() else {
                pending.pop();
                continue;
            };
            *cursor += 1;
            let parent = *parent;

            if tree.by_id.contains_key(&child_id) {
                let parent_id = tree.nodes[parent].node.id.clone();
                tree.warnings.push(VfsBuildWarning::RepeatedChild {
                    parent_id,
                    child_id,
                });
                continue;
            }
            let Some(raw) = raw_by_id.remove(&child_id) else {
                let parent_id = tree.nodes[parent].node.id.clone();
                tree.warnings.push(VfsBuildWarning::MissingChild {
                    parent_id,
                    child_id,
                });
                continue;
            };

            let slot = tree.push_node(raw, Some(parent));
            tree.nodes[parent].children.push(slot);
            let grandchildren = tree.nodes[slot].node.child_ids().to_vec();
            if !grandchildren.is_empty() {
                pending.push((slot, grandchildren, 0));
            }
        }

        tree.index_paths();
        Ok(tree)
    }

    fn push_node(&mut self, node: VfsNode, parent: Option<usize>) -> usize {
        let slot = self.nodes.len();
        self.by_id.insert(node.id.clone(), slot);
        self.nodes.push(VfsTreeNode {
            slot,
            parent,
            children: Vec::new(),
            node,
        });
        slot
    }

    // Slots are assigned in pre-order, so every parent path exists before its children.
    fn index_paths(&mut self) {
        let mut paths: Vec<String> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let path = match node.parent {
                None => "/".to_string(),
                Some(parent) if paths[parent] == "/" => format!("/{}", node.node.name),
                Some(parent) => format!("{}/{}", paths[parent], node.node.name),
            };
            paths.push(path);
        }
        for (slot, path) in paths.into_iter().enumerate() {
            self.by_path.insert(path, slot);
        }
    }

    /// Root directory.
    pub fn root(&self) -> &VfsTreeNode {
        &self.nodes[ROOT_SLOT]
    }

    /// Number of nodes reachable from the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a built tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Problems skipped during construction.
    pub fn warnings(&self) -> &[VfsBuildWarning] {
        &self.warnings
    }

    /// Looks up a node by id.
    pub fn get_node(&self, id: &str) -> Option<&VfsTreeNode> {
        self.by_id.get(id).map(|&slot| &self.nodes[slot])
    }

    /// Resolves an absolute path to a node.
    ///
    /// Exact paths hit the path index; anything else is walked from the root matching child
    /// names case-insensitively. Relative paths never resolve.
    pub fn resolve(&self, path: &str) -> Option<&VfsTreeNode> {
        if !is_absolute_path(path) {
            return None;
        }
        if let Some(&slot) = self.by_path.get(path) {
            return Some(&self.nodes[slot]);
        }

        let mut current = ROOT_SLOT;
        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            current = self.child_named(current, segment)?;
        }
        Some(&self.nodes[current])
    }

    fn child_named(&self, slot: usize, segment: &str) -> Option<usize> {
        let children = &self.nodes[slot].children;
        if let Some(&exact) = children
            .iter()
            .find(|&&child| self.nodes[child].node.name == segment)
        {
            return Some(exact);
        }
        let folded = segment.to_lowercase();
        children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].node.name.to_lowercase() == folded)
    }

    /// Lists the children of the directory at `path`; empty for anything but a directory.
    pub fn list(&self, path: &str) -> Vec<&VfsTreeNode> {
        match self.resolve(path) {
            Some(node) if node.is_dir() => self.children(node).collect(),
            _ => Vec::new(),
        }
    }

    /// Iterates the children of `node` in authored order.
    pub fn children<'a>(
        &'a self,
        node: &'a VfsTreeNode,
    ) -> impl Iterator<Item = &'a VfsTreeNode> + 'a {
        node.children
            .iter()
            .filter_map(move |&slot| self.nodes.get(slot))
    }

    /// Parent of `node`, `None` for the root.
    pub fn parent(&self, node: &VfsTreeNode) -> Option<&VfsTreeNode> {
        node.parent.and_then(|slot| self.nodes.get(slot))
    }

    /// Reads the text body of the file at `path`.
    pub fn read_content(&self, path: &str) -> Option<&str> {
        self.resolve(path).and_then(|node| self.content_of(node))
    }

    /// Reads the text body of the file with id `id`.
    pub fn read_content_by_id(&self, id: &str) -> Option<&str> {
        self.get_node(id).and_then(|node| self.content_of(node))
    }

    fn content_of(&self, node: &VfsTreeNode) -> Option<&str> {
        node.node
            .content_ref()
            .and_then(|content_ref| self.content.text(content_ref))
    }

    /// Computes the absolute path of `node` by walking its parent links.
    pub fn get_path(&self, node: &VfsTreeNode) -> String {
        let mut names = Vec::new();
        let mut current = node;
        while let Some(parent) = current.parent.and_then(|slot| self.nodes.get(slot)) {
            names.push(current.node.name.as_str());
            current = parent;
        }
        if names.is_empty() {
            return "/".to_string();
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    /// Searches node names for `query` (case-insensitive substring), pre-order from the start
    /// node, stopping once the result cap is reached.
    pub fn find(&self, query: &str, options: FindOptions<'_>) -> Vec<&VfsTreeNode> {
        let needle = query.to_lowercase();
        let max = options.max.unwrap_or(DEFAULT_FIND_LIMIT);
        let mut results = Vec::new();
        if max == 0 {
            return results;
        }

        let start = match options.path {
            Some(path) => match self.resolve(path) {
                Some(node) => node.slot,
                None => return results,
            },
            None => ROOT_SLOT,
        };

        let mut stack = vec![start];
        while let Some(slot) = stack.pop() {
            let node = &self.nodes[slot];
            let kind_matches = options.kind.map_or(true, |kind| node.kind() == kind);
            if kind_matches && node.node.name.to_lowercase().contains(&needle) {
                results.push(node);
                if results.len() >= max {
                    break;
                }
            }
            stack.extend(node.children.iter().rev().copied());
        }
        results
    }

    /// Desktop entries: children of `/Desktop` that carry icon coordinates.
    pub fn desktop_items(&self) -> Vec<&VfsTreeNode> {
        self.list(DESKTOP_DIR_PATH)
            .into_iter()
            .filter(|node| node.desktop().is_some())
            .collect()
    }
}
