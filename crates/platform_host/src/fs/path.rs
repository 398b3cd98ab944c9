//! POSIX-like virtual-path helpers shared by the VFS and its consumers.

/// Home directory of the desktop's single visitor account.
pub const HOME_DIR: &str = "/Users/Guest";

/// Normalizes a virtual filesystem path.
///
/// Empty and `.` segments are dropped, `..` pops the last retained segment (a no-op at the
/// root), and the result always carries a single leading `/`. Empty input yields `/`.
pub fn normalize_virtual_path(path: &str) -> String {
    let mut retained: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                retained.pop();
            }
            name => retained.push(name),
        }
    }

    let mut out = String::with_capacity(path.len() + 1);
    for segment in retained {
        out.push('/');
        out.push_str(segment);
    }

    if out.is_empty() {
        "/".to_string()
    } else {
        out
    }
}

/// Joins path segments with `/` and normalizes the result.
pub fn join_virtual_path<S: AsRef<str>>(segments: &[S]) -> String {
    let joined = segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("/");
    normalize_virtual_path(&joined)
}

/// Returns `true` for paths rooted at `/`.
pub fn is_absolute_path(path: &str) -> bool {
    path.starts_with('/')
}

/// Resolves `target` relative to the working directory `cwd`.
///
/// `""` and `"~"` resolve to [`HOME_DIR`], `"~/…"` is home-relative, absolute targets are only
/// normalized, and anything else is appended to `cwd`.
pub fn resolve_virtual_path(cwd: &str, target: &str) -> String {
    if target.is_empty() || target == "~" {
        return HOME_DIR.to_string();
    }
    if let Some(rest) = target.strip_prefix("~/") {
        return normalize_virtual_path(&format!("{HOME_DIR}/{rest}"));
    }
    if is_absolute_path(target) {
        return normalize_virtual_path(target);
    }
    normalize_virtual_path(&format!("{cwd}/{target}"))
}

/// Returns the parent directory of `path`; the root's parent is the root.
pub fn dirname(path: &str) -> String {
    let normalized = normalize_virtual_path(path);
    match normalized.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => normalized[..idx].to_string(),
    }
}

/// Returns the final segment of `path`; the root's basename is `/`.
pub fn basename(path: &str) -> String {
    let normalized = normalize_virtual_path(path);
    if normalized == "/" {
        return normalized;
    }
    match normalized.rfind('/') {
        Some(idx) => normalized[idx + 1..].to_string(),
        None => normalized,
    }
}

/// Formats a path for display, abbreviating the home directory to `~`.
pub fn display_path(path: &str) -> String {
    let normalized = normalize_virtual_path(path);
    if normalized == HOME_DIR {
        return "~".to_string();
    }
    match normalized.strip_prefix(HOME_DIR) {
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => normalized,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn normalize_virtual_path_matches_expected_cases() {
        let cases = [
            ("", "/"),
            ("/", "/"),
            ("foo/bar", "/foo/bar"),
            ("/foo//bar/", "/foo/bar"),
            ("./foo/../bar", "/bar"),
            ("/a/b/../c", "/a/c"),
            ("/../../a", "/a"),
            ("/../../", "/"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_virtual_path(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn resolve_virtual_path_handles_home_absolute_and_relative_targets() {
        assert_eq!(resolve_virtual_path("/Desktop", ""), HOME_DIR);
        assert_eq!(resolve_virtual_path("/Desktop", "~"), HOME_DIR);
        assert_eq!(
            resolve_virtual_path("/Desktop", "~/Documents/../Music"),
            "/Users/Guest/Music"
        );
        assert_eq!(resolve_virtual_path("/Desktop", "/Projects/./x"), "/Projects/x");
        assert_eq!(resolve_virtual_path("/Desktop", "About.txt"), "/Desktop/About.txt");
        assert_eq!(resolve_virtual_path("/Desktop", "../.."), "/");
    }

    #[test]
    fn dirname_and_basename_use_root_for_root() {
        assert_eq!(dirname("/"), "/");
        assert_eq!(basename("/"), "/");
        assert_eq!(dirname("/Desktop"), "/");
        assert_eq!(dirname("/Desktop/About.txt/"), "/Desktop");
        assert_eq!(basename("/Desktop/About.txt"), "About.txt");
        assert_eq!(basename("Desktop"), "Desktop");
    }

    #[test]
    fn display_path_abbreviates_home_prefix_only() {
        assert_eq!(display_path(HOME_DIR), "~");
        assert_eq!(display_path("/Users/Guest/Documents"), "~/Documents");
        assert_eq!(display_path("/Users/GuestBook"), "/Users/GuestBook");
        assert_eq!(display_path("/Desktop//"), "/Desktop");
    }

    #[test]
    fn join_virtual_path_normalizes_segments() {
        assert_eq!(join_virtual_path(&["/Desktop", "..", "Projects/"]), "/Projects");
        assert_eq!(join_virtual_path::<&str>(&[]), "/");
    }

    proptest! {
        #[test]
        fn normalized_paths_are_absolute_and_idempotent(raw in "[a-z./]{0,24}") {
            let once = normalize_virtual_path(&raw);
            prop_assert!(once.starts_with('/'));
            prop_assert!(!once.contains("//"));
            prop_assert_eq!(normalize_virtual_path(&once), once);
        }
    }
}
