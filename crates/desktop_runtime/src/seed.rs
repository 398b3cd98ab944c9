//! Built-in file system shipped with the desktop.

use platform_host::{MemoryContentStore, VfsTree};

use crate::error::RuntimeError;

const SEED_VFS_JSON: &str = include_str!("../data/vfs.json");

/// Prefix the bundled content files are keyed under.
pub const SEED_ASSET_PREFIX: &str = "data/";

const SEED_CONTENT: [(&str, &str); 5] = [
    (
        "data/content/about.txt",
        include_str!("../data/content/about.txt"),
    ),
    (
        "data/content/resume.txt",
        include_str!("../data/content/resume.txt"),
    ),
    (
        "data/content/skills.md",
        include_str!("../data/content/skills.md"),
    ),
    (
        "data/content/experience.json",
        include_str!("../data/content/experience.json"),
    ),
    (
        "data/content/projects.md",
        include_str!("../data/content/projects.md"),
    ),
];

pub fn seed_content_store() -> MemoryContentStore {
    MemoryContentStore::from_asset_entries(SEED_ASSET_PREFIX, SEED_CONTENT)
}

/// Builds the built-in tree. Dangling or repeated child ids are kept as tree warnings.
pub fn seed_vfs() -> Result<VfsTree, RuntimeError> {
    Ok(VfsTree::from_json(SEED_VFS_JSON, seed_content_store())?)
}

#[cfg(test)]
mod tests {
    use platform_host::{FindOptions, VfsNodeKind, HOME_DIR};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn seed_builds_cleanly() {
        let vfs = seed_vfs().expect("seed builds");
        assert!(vfs.warnings().is_empty(), "{:?}", vfs.warnings());
        assert!(vfs.resolve(HOME_DIR).expect("home exists").is_dir());
    }

    #[test]
    fn about_file_reads_bundled_text() {
        let vfs = seed_vfs().expect("seed builds");
        let about = vfs.resolve("/Desktop/About.txt").expect("about");
        assert_eq!(about.kind(), VfsNodeKind::File);
        assert!(vfs
            .read_content("/Desktop/About.txt")
            .expect("content")
            .starts_with("Hi, I'm Guest."));
    }

    #[test]
    fn every_content_ref_is_bundled() {
        let vfs = seed_vfs().expect("seed builds");
        let files = vfs.find(
            "",
            FindOptions {
                kind: Some(VfsNodeKind::File),
                max: Some(usize::MAX),
                ..FindOptions::default()
            },
        );
        assert!(!files.is_empty());
        for file in files {
            assert!(
                vfs.read_content_by_id(file.id()).is_some(),
                "{} has no content",
                vfs.get_path(file)
            );
        }
    }

    #[test]
    fn desktop_items_include_recycle_bin() {
        let vfs = seed_vfs().expect("seed builds");
        let ids: Vec<&str> = vfs.desktop_items().iter().map(|n| n.id()).collect();
        assert!(ids.contains(&"about"));
        assert!(ids.contains(&"sc_recycle"));
        assert_eq!(
            vfs.find("resume", FindOptions::default())
                .iter()
                .map(|n| n.id())
                .collect::<Vec<_>>(),
            vec!["sc_resume", "resume"]
        );
    }
}
