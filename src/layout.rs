use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::ScaffoldError;
use crate::util::classify_io;

/// Project migrated when no `--root` is given.
pub const DEFAULT_ROOT: &str = "/Users/venky/AI-QnA-App2";

pub const LEGACY_VENV: &str = "venv";
pub const LEGACY_SCRIPTS: &str = "scripts";
pub const TOOLS: &str = "tools";

/// Directories every migrated project carries, relative to the root.
pub const SCAFFOLD_DIRS: [&str; 6] = [
    "app/db",
    "app/llm",
    "app/ui",
    "app/session",
    "app/admin",
    "tests",
];

/// A file seeded with default content only when the project lacks it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TemplateFile {
    pub target: &'static str,
    pub template: &'static str,
}

pub const TEMPLATE_FILES: [TemplateFile; 2] = [
    TemplateFile {
        target: ".env.example",
        template: "env.example",
    },
    TemplateFile {
        target: "README.md",
        template: "README.md",
    },
];

/// Absolute base directory every operation joins onto.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectRoot {
    path: Utf8PathBuf,
}

impl ProjectRoot {
    /// Check the root exists, is a directory and can be listed.
    pub fn open(path: &Utf8Path) -> Result<Self, ScaffoldError> {
        let not_found = || ScaffoldError::RootNotFound {
            root: path.to_owned(),
        };

        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                return Err(classify_io("inspecting", path, err));
            }
            Err(_) => return Err(not_found()),
        };
        if !metadata.is_dir() {
            return Err(not_found());
        }
        fs::read_dir(path).map_err(|err| classify_io("listing", path, err))?;

        Ok(Self {
            path: path.to_owned(),
        })
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn join(&self, relative: &str) -> Utf8PathBuf {
        self.path.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn open_accepts_existing_directory() {
        let dir = TempDir::new().unwrap();
        let root = ProjectRoot::open(&utf8(&dir)).unwrap();
        assert_eq!(root.join("app/db"), utf8(&dir).join("app/db"));
    }

    #[test]
    fn open_rejects_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = utf8(&dir).join("nope");
        let err = ProjectRoot::open(&missing).unwrap_err();
        assert!(matches!(err, ScaffoldError::RootNotFound { root } if root == missing));
    }

    #[test]
    fn open_rejects_regular_file() {
        let dir = TempDir::new().unwrap();
        let file = utf8(&dir).join("file.txt");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            ProjectRoot::open(&file),
            Err(ScaffoldError::RootNotFound { .. })
        ));
    }

    #[test]
    fn scaffold_dirs_are_relative() {
        assert!(SCAFFOLD_DIRS.iter().all(|dir| !dir.starts_with('/')));
        assert!(TEMPLATE_FILES.iter().all(|file| !file.target.contains('/')));
    }
}
