pub mod legacy;
pub mod skeleton;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{MigrationError, ScaffoldError};
use crate::layout::ProjectRoot;
use crate::report::{Outcome, Step, StepLog};

/// Runs the migration steps in order against one project root, stopping at the first failure.
#[derive(Debug)]
pub struct ProjectScaffolder {
    root: Utf8PathBuf,
}

impl ProjectScaffolder {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn run(&self) -> Result<StepLog, MigrationError> {
        let mut log = StepLog::new(&self.root);

        tracing::info!("{}", describe(Step::EnterRoot));
        let root = match ProjectRoot::open(&self.root) {
            Ok(root) => root,
            Err(source) => {
                return Err(MigrationError {
                    completed: log,
                    failed: Step::EnterRoot,
                    source,
                });
            }
        };
        tracing::debug!("working in {}", root.path());
        log.record(Step::EnterRoot, ".", Outcome::Unchanged);

        for step in &Step::ALL[1..] {
            tracing::info!("{}", describe(*step));
            if let Err(source) = apply(&root, *step, &mut log) {
                return Err(MigrationError {
                    completed: log,
                    failed: *step,
                    source,
                });
            }
        }

        Ok(log)
    }
}

fn apply(root: &ProjectRoot, step: Step, log: &mut StepLog) -> Result<(), ScaffoldError> {
    match step {
        // `run` opens the root before looping; there is nothing left to do here.
        Step::EnterRoot => Ok(()),
        Step::RemoveVenv => legacy::remove_venv(root, log),
        Step::RelocateScripts => legacy::relocate_scripts(root, log),
        Step::CreateDirectories => skeleton::create_directories(root, log),
        Step::WriteTemplates => skeleton::write_templates(root, log),
    }
}

fn describe(step: Step) -> &'static str {
    match step {
        Step::EnterRoot => "==> checking project root",
        Step::RemoveVenv => "==> removing legacy venv",
        Step::RelocateScripts => "==> moving scripts to tools",
        Step::CreateDirectories => "==> creating scaffold directories",
        Step::WriteTemplates => "==> writing template files",
    }
}
