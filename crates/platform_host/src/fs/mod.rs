//! Virtual file system domain: path helpers, node data model, and the immutable tree.

pub mod path;
pub mod tree;
pub mod types;
