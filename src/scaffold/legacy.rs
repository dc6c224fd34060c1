use std::fs;

use crate::error::ScaffoldError;
use crate::layout::{LEGACY_SCRIPTS, LEGACY_VENV, ProjectRoot, TOOLS};
use crate::report::{Outcome, Step, StepLog};
use crate::util::classify_io;

pub fn remove_venv(root: &ProjectRoot, log: &mut StepLog) -> Result<(), ScaffoldError> {
    let venv = root.join(LEGACY_VENV);
    if !venv.is_dir() {
        tracing::debug!("no {} to remove", venv);
        log.record(Step::RemoveVenv, LEGACY_VENV, Outcome::Unchanged);
        return Ok(());
    }

    // A symlinked venv loses the link only; its target stays.
    fs::remove_dir_all(&venv).map_err(|err| classify_io("removing", &venv, err))?;
    tracing::info!("  removed {}", venv);
    log.record(Step::RemoveVenv, LEGACY_VENV, Outcome::Applied);
    Ok(())
}

/// Rename `scripts` to `tools`. An existing `tools` of any kind is a conflict; nothing is merged.
pub fn relocate_scripts(root: &ProjectRoot, log: &mut StepLog) -> Result<(), ScaffoldError> {
    let scripts = root.join(LEGACY_SCRIPTS);
    let tools = root.join(TOOLS);
    let target = format!("{LEGACY_SCRIPTS} -> {TOOLS}");

    if !scripts.is_dir() {
        tracing::debug!("no {} to relocate", scripts);
        log.record(Step::RelocateScripts, &target, Outcome::Unchanged);
        return Ok(());
    }

    if fs::symlink_metadata(&tools).is_ok() {
        return Err(ScaffoldError::Conflict {
            path: tools,
            reason: format!(
                "`{LEGACY_SCRIPTS}` cannot be renamed onto an existing `{TOOLS}`; merge or remove one of them and rerun"
            ),
        });
    }

    fs::rename(&scripts, &tools).map_err(|err| classify_io("renaming", &scripts, err))?;
    tracing::info!("  moved {} to {}", scripts, tools);
    log.record(Step::RelocateScripts, &target, Outcome::Applied);
    Ok(())
}
