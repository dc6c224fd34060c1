use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::report::{Step, StepLog};

/// Failure of a single filesystem operation against the project root.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("project root {root} does not exist or is not a directory")]
    RootNotFound { root: Utf8PathBuf },

    #[error("permission denied while {op} {path}")]
    PermissionDenied {
        op: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} is in the way: {reason}")]
    Conflict { path: Utf8PathBuf, reason: String },

    #[error("embedded template `{name}` missing")]
    MissingTemplate { name: String },

    #[error("failed {op} {path}")]
    Io {
        op: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A run that stopped part way. `completed` holds every action recorded before the failure.
#[derive(Debug, Error)]
#[error("step `{failed}` failed after {} completed action(s)", .completed.len())]
pub struct MigrationError {
    pub completed: StepLog,
    pub failed: Step,
    #[source]
    pub source: ScaffoldError,
}
