use camino::Utf8Path;

use crate::error::ScaffoldError;
use crate::layout::{ProjectRoot, SCAFFOLD_DIRS, TEMPLATE_FILES};
use crate::report::{Outcome, Step, StepLog};
use crate::templates;
use crate::util::{classify_io, fs};

pub fn create_directories(root: &ProjectRoot, log: &mut StepLog) -> Result<(), ScaffoldError> {
    for relative in SCAFFOLD_DIRS {
        let path = root.join(relative);
        check_ancestors(root, relative)?;

        let created = fs::ensure_dir(&path).map_err(|err| classify_io("creating", &path, err))?;
        let outcome = if created {
            tracing::info!("  created {}/", relative);
            Outcome::Applied
        } else {
            Outcome::Unchanged
        };
        log.record(Step::CreateDirectories, relative, outcome);
    }
    Ok(())
}

/// Every prefix of `relative` that exists must be a directory.
fn check_ancestors(root: &ProjectRoot, relative: &str) -> Result<(), ScaffoldError> {
    for ancestor in Utf8Path::new(relative).ancestors() {
        if ancestor.as_str().is_empty() {
            continue;
        }
        let path = root.join(ancestor.as_str());
        if path.exists() && !path.is_dir() {
            return Err(ScaffoldError::Conflict {
                path,
                reason: "expected a directory".to_owned(),
            });
        }
    }
    Ok(())
}

/// Seed each template file unless the project already has one.
pub fn write_templates(root: &ProjectRoot, log: &mut StepLog) -> Result<(), ScaffoldError> {
    for file in TEMPLATE_FILES {
        let path = root.join(file.target);
        if path.exists() {
            if !path.is_file() {
                return Err(ScaffoldError::Conflict {
                    path,
                    reason: "expected a regular file".to_owned(),
                });
            }
            tracing::debug!("keeping existing {}", path);
            log.record(Step::WriteTemplates, file.target, Outcome::Unchanged);
            continue;
        }

        let body = templates::get_bytes(file.template)?;
        let created =
            templates::write_new(&path, &body).map_err(|err| classify_io("writing", &path, err))?;
        let outcome = if created {
            tracing::info!("  created {}", file.target);
            Outcome::Applied
        } else {
            Outcome::Unchanged
        };
        log.record(Step::WriteTemplates, file.target, outcome);
    }
    Ok(())
}
