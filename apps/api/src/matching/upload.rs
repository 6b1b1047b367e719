//! Scratch storage for uploaded résumés.
//!
//! Files land in a single shared directory under their client filename.
//! Two uploads with the same name overwrite each other, last write wins.

use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::info;

/// One file part from the upload form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }
}

/// Creates the scratch directory if it does not exist yet.
pub fn ensure_upload_dir(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
        info!("Created upload directory {}", dir.display());
    }
    Ok(())
}

/// Path a given client filename is stored at. Only the last path component
/// is kept, so `../../etc/passwd` lands at `<dir>/passwd`.
pub fn scratch_path(dir: &Path, filename: &str) -> Option<PathBuf> {
    let base = filename.rsplit(['/', '\\']).next()?;
    if base.is_empty() || base == "." || base == ".." {
        return None;
    }
    Some(dir.join(base))
}

/// Writes the upload to `path`, replacing whatever was there.
pub fn persist(path: &Path, file: &UploadedFile) -> io::Result<()> {
    std::fs::write(path, &file.bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_upload_dir_creates_nested() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("a/b/uploads");
        ensure_upload_dir(&dir).unwrap();
        assert!(dir.is_dir());
        // Idempotent.
        ensure_upload_dir(&dir).unwrap();
    }

    #[test]
    fn test_scratch_path_strips_directories() {
        let dir = Path::new("/tmp/uploads");
        assert_eq!(
            scratch_path(dir, "../../etc/passwd"),
            Some(PathBuf::from("/tmp/uploads/passwd"))
        );
        assert_eq!(
            scratch_path(dir, "C:\\Users\\me\\cv.pdf"),
            Some(PathBuf::from("/tmp/uploads/cv.pdf"))
        );
        assert_eq!(scratch_path(dir, "cv.txt"), Some(PathBuf::from("/tmp/uploads/cv.txt")));
    }

    #[test]
    fn test_scratch_path_rejects_empty_names() {
        let dir = Path::new("/tmp/uploads");
        assert_eq!(scratch_path(dir, ""), None);
        assert_eq!(scratch_path(dir, "docs/"), None);
        assert_eq!(scratch_path(dir, ".."), None);
        assert_eq!(scratch_path(dir, "a/.."), None);
        assert_eq!(scratch_path(dir, "."), None);
    }

    #[test]
    fn test_persist_overwrites_same_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_path(dir.path(), "cv.txt").unwrap();
        persist(&path, &UploadedFile::new("cv.txt", "first")).unwrap();
        persist(&path, &UploadedFile::new("cv.txt", "second")).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }
}
