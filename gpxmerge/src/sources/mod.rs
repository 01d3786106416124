//! Addon source discovery.

use std::fs;
use std::path::{Path, PathBuf};

/// Extension of GPX files, compared case-insensitively.
pub const GPX_EXTENSION: &str = "gpx";

/// Errors listing the input folder.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Input folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),

    #[error("Failed to list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List the GPX files directly inside `input_folder`.
///
/// Subdirectories are not searched. Paths in `exclude` (typically the master
/// and the output file) are skipped, comparing canonical paths when both
/// sides resolve. The result is sorted by file name.
pub fn discover_sources(input_folder: &Path, exclude: &[&Path]) -> Result<Vec<PathBuf>, SourceError> {
    if !input_folder.is_dir() {
        return Err(SourceError::FolderNotFound(input_folder.to_path_buf()));
    }

    let io_err = |source| SourceError::Io {
        path: input_folder.to_path_buf(),
        source,
    };

    let excluded: Vec<PathBuf> = exclude.iter().map(|p| normalize(p)).collect();
    let mut sources = Vec::new();

    for entry in fs::read_dir(input_folder).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() || !is_gpx(&path) {
            continue;
        }
        if excluded.contains(&normalize(&path)) {
            continue;
        }
        sources.push(path);
    }

    sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(sources)
}

/// Returns true if the path has a `.gpx` extension in any case.
pub fn is_gpx(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(GPX_EXTENSION))
}

fn normalize(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "<gpx version=\"1.1\"></gpx>").unwrap();
        path
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_lists_gpx_files_sorted() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "peaks.gpx");
        touch(temp.path(), "huts.gpx");
        touch(temp.path(), "lakes.GPX");
        touch(temp.path(), "notes.txt");

        let sources = discover_sources(temp.path(), &[]).unwrap();
        assert_eq!(names(&sources), vec!["huts.gpx", "lakes.GPX", "peaks.gpx"]);
    }

    #[test]
    fn test_excludes_master_and_output() {
        let temp = TempDir::new().unwrap();
        let master = touch(temp.path(), "master.gpx");
        let output = touch(temp.path(), "merged.gpx");
        touch(temp.path(), "huts.gpx");

        let sources = discover_sources(temp.path(), &[&master, &output]).unwrap();
        assert_eq!(names(&sources), vec!["huts.gpx"]);
    }

    #[test]
    fn test_exclude_matches_relative_spelling() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "master.gpx");
        touch(temp.path(), "huts.gpx");

        let roundabout = temp.path().join(".").join("master.gpx");
        let sources = discover_sources(temp.path(), &[&roundabout]).unwrap();
        assert_eq!(names(&sources), vec!["huts.gpx"]);
    }

    #[test]
    fn test_exclude_of_missing_output_is_ignored() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "huts.gpx");

        let output = temp.path().join("not-yet-written.gpx");
        let sources = discover_sources(temp.path(), &[&output]).unwrap();
        assert_eq!(sources.len(), 1);
    }

    #[test]
    fn test_does_not_recurse() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("archive");
        fs::create_dir(&nested).unwrap();
        touch(&nested, "old.gpx");
        touch(temp.path(), "huts.gpx");

        let sources = discover_sources(temp.path(), &[]).unwrap();
        assert_eq!(names(&sources), vec!["huts.gpx"]);
    }

    #[test]
    fn test_missing_folder_is_error() {
        let temp = TempDir::new().unwrap();
        let err = discover_sources(&temp.path().join("absent"), &[]).unwrap_err();
        assert!(matches!(err, SourceError::FolderNotFound(_)));
    }

    #[test]
    fn test_is_gpx() {
        assert!(is_gpx(Path::new("a.gpx")));
        assert!(is_gpx(Path::new("a.Gpx")));
        assert!(!is_gpx(Path::new("a.gpx.bak")));
        assert!(!is_gpx(Path::new("gpx")));
    }
}
