//! Target classification
//!
//! Classification never fails: anything that is neither an absolute URL
//! nor an existing non-empty regular file is treated as a directory, and
//! a bad directory surfaces later as a listing error from the handler.

use reqwest::Url;
use std::fs;
use std::path::PathBuf;

/// Classification outcome for a single target string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKind {
    /// An absolute URL to fetch over HTTP
    Remote(Url),
    /// An existing, non-empty regular file
    File(PathBuf),
    /// Anything else; enumerated as a directory by the handler
    Directory(PathBuf),
}

/// Classify a target string.
///
/// Performs at most one filesystem stat call and has no other side
/// effects.
pub fn classify(target: &str) -> TargetKind {
    if let Ok(url) = Url::parse(target) {
        if url.has_authority() {
            return TargetKind::Remote(url);
        }
    }

    match fs::metadata(target) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => TargetKind::File(PathBuf::from(target)),
        _ => TargetKind::Directory(PathBuf::from(target)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_absolute_url_is_remote() {
        let kind = classify("https://cdn.example.com/app.js");
        assert!(matches!(kind, TargetKind::Remote(_)));
    }

    #[test]
    fn test_relative_path_is_not_remote() {
        // No scheme or authority, so this can only be a local target.
        let kind = classify("assets/app.js");
        assert!(!matches!(kind, TargetKind::Remote(_)));
    }

    #[test]
    fn test_existing_file_is_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.js");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"console.log('hi');").unwrap();

        let kind = classify(path.to_str().unwrap());
        assert_eq!(kind, TargetKind::File(path));
    }

    #[test]
    fn test_empty_file_falls_through_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.js");
        std::fs::File::create(&path).unwrap();

        let kind = classify(path.to_str().unwrap());
        assert_eq!(kind, TargetKind::Directory(path));
    }

    #[test]
    fn test_directory_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        let kind = classify(dir.path().to_str().unwrap());
        assert_eq!(kind, TargetKind::Directory(dir.path().to_path_buf()));
    }

    #[test]
    fn test_missing_path_is_directory() {
        let kind = classify("no/such/path/anywhere.js");
        assert!(matches!(kind, TargetKind::Directory(_)));
    }
}
