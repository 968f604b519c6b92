//! File-system walks and permissive text decoding.
//!
//! All gates treat scanned files as opaque text: bytes are decoded lossily
//! so an invalid sequence can never abort a run. Walks are recursive and
//! sorted for deterministic report order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GateResult;

/// Collect every file under `root`, recursively, in sorted order.
///
/// A missing root yields an empty list rather than an error - the gates
/// decide for themselves whether an absent directory is a violation.
pub fn walk_files(root: &Path) -> GateResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    if root.is_dir() {
        walk_recursive(root, &mut files)?;
        files.sort();
    }
    Ok(files)
}

fn walk_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> GateResult<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            walk_recursive(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

/// Collect files under `root` whose lowercased extension is in `exts`.
pub fn walk_files_with_ext(root: &Path, exts: &[&str]) -> GateResult<Vec<PathBuf>> {
    let files = walk_files(root)?;
    Ok(files
        .into_iter()
        .filter(|p| has_extension(p, exts))
        .collect())
}

/// True if `path` has an extension in `exts` (case-insensitive).
pub fn has_extension(path: &Path, exts: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_ascii_lowercase();
            exts.iter().any(|x| *x == lower)
        })
        .unwrap_or(false)
}

/// Read a file as text, replacing invalid UTF-8 rather than failing.
pub fn read_text_lossy(path: &Path) -> GateResult<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Render `path` relative to `root` for report messages.
pub fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_walk_files_sorted_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b/nested")).unwrap();
        fs::write(dir.path().join("b/nested/z.txt"), "z").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let files = walk_files(dir.path()).unwrap();
        let rels: Vec<String> = files
            .iter()
            .map(|p| relative_display(dir.path(), p))
            .collect();
        assert_eq!(rels, vec!["a.txt".to_string(), "b/nested/z.txt".to_string()]);
    }

    #[test]
    fn test_walk_files_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        let files = walk_files(&dir.path().join("does-not-exist")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_walk_files_with_ext_case_insensitive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("page.HTML"), "x").unwrap();
        fs::write(dir.path().join("style.css"), "x").unwrap();
        fs::write(dir.path().join("noext"), "x").unwrap();

        let files = walk_files_with_ext(dir.path(), &["html"]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("page.HTML"));
    }

    #[test]
    fn test_read_text_lossy_tolerates_invalid_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mixed.txt");
        fs::write(&path, [b'H', b'I', 0xff, 0xfe, b'5', b'6']).unwrap();

        let text = read_text_lossy(&path).unwrap();
        assert!(text.contains("HI"));
        assert!(text.contains("56"));
    }
}
