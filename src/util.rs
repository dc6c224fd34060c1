/// Filesystem helpers shared by the scaffold steps.
pub mod fs {
    use std::fs;
    use std::io;

    use camino::Utf8Path;

    /// Ensure a directory exists, creating it recursively if needed.
    /// Returns `true` when something was created.
    pub fn ensure_dir(path: &Utf8Path) -> io::Result<bool> {
        if path.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(path)?;
        Ok(true)
    }
}

use std::io;

use camino::Utf8Path;

use crate::error::ScaffoldError;

/// Map an io failure onto the scaffold taxonomy.
pub fn classify_io(op: &'static str, path: &Utf8Path, source: io::Error) -> ScaffoldError {
    if source.kind() == io::ErrorKind::PermissionDenied {
        ScaffoldError::PermissionDenied {
            op,
            path: path.to_owned(),
            source,
        }
    } else {
        ScaffoldError::Io {
            op,
            path: path.to_owned(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn ensure_dir_reports_creation_once() {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let nested = root.join("a").join("b");

        assert!(fs::ensure_dir(&nested).unwrap());
        assert!(!fs::ensure_dir(&nested).unwrap());
        assert!(nested.is_dir());
    }

    #[test]
    fn permission_errors_keep_their_kind() {
        let path = Utf8Path::new("/proj/venv");
        let denied = classify_io(
            "removing",
            path,
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(denied, ScaffoldError::PermissionDenied { op: "removing", .. }));

        let other = classify_io("removing", path, io::Error::from(io::ErrorKind::Other));
        assert!(matches!(other, ScaffoldError::Io { .. }));
    }
}
