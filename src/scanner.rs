use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Error;

/// Recursively enumerate every `*.json` file under `dir`, depth-first with
/// siblings sorted by file name so repeated runs visit files in the same order.
///
/// Traversal failures (unreadable directories, broken symlinks) are yielded
/// as `Err` items so the caller can report them and keep going.
pub fn json_files(dir: &Path) -> impl Iterator<Item = Result<PathBuf, Error>> {
    return WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| {
            return match entry {
                Err(e) => Some(Err(Error::Walk(e))),
                Ok(e) if is_json_file(e.path()) => Some(Ok(e.into_path())),
                Ok(_) => None,
            };
        });
}

/// A regular file (or symlink to one) with a `.json` extension.
fn is_json_file(path: &Path) -> bool {
    return path.extension().is_some_and(|ext| return ext == "json") && path.is_file();
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn finds_nested_json_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("joydoc/fields")).unwrap();
        std::fs::write(root.join("b.json"), "{}").unwrap();
        std::fs::write(root.join("a.json"), "{}").unwrap();
        std::fs::write(root.join("joydoc/fields/c.json"), "{}").unwrap();
        std::fs::write(root.join("joydoc/notes.md"), "# notes").unwrap();
        std::fs::write(root.join("README"), "").unwrap();

        let found: Vec<PathBuf> = json_files(root)
            .map(|r| r.unwrap().strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            found,
            vec![
                PathBuf::from("a.json"),
                PathBuf::from("b.json"),
                PathBuf::from("joydoc/fields/c.json"),
            ]
        );
    }

    #[test]
    fn directory_named_like_json_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("odd.json")).unwrap();
        std::fs::write(dir.path().join("odd.json/inner.json"), "{}").unwrap();

        let found: Vec<PathBuf> = json_files(dir.path()).map(Result::unwrap).collect();
        assert_eq!(found, vec![dir.path().join("odd.json/inner.json")]);
    }

    #[test]
    fn missing_directory_yields_error() {
        let mut items = json_files(Path::new("/nonexistent/docc-xref/data"));
        assert!(matches!(items.next(), Some(Err(Error::Walk(_)))));
    }
}
