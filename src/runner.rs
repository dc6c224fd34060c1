use std::env;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

use crate::cli::Cli;
use crate::error::MigrationError;
use crate::layout::DEFAULT_ROOT;
use crate::report::{Step, StepLog};
use crate::scaffold::ProjectScaffolder;

pub fn run(cli: Cli) -> Result<()> {
    let root = resolve_root(cli.root.as_deref())?;
    tracing::debug!(%root, "resolved project root");

    let scaffolder = ProjectScaffolder::new(root);
    match scaffolder.run() {
        Ok(log) => {
            if cli.json {
                println!("{}", log.to_json().context("serializing step log")?);
            } else {
                print_summary(&log);
            }
            Ok(())
        }
        Err(err) => {
            eprint!("{}", failure_report(&err));
            Err(err).with_context(|| format!("migrating {}", scaffolder.root()))
        }
    }
}

/// Anchor a relative override to the current directory once; the process never changes directory.
fn resolve_root(explicit: Option<&Utf8Path>) -> Result<Utf8PathBuf> {
    let Some(path) = explicit else {
        return Ok(Utf8PathBuf::from(DEFAULT_ROOT));
    };
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let cwd = env::current_dir().context("determining current directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd).map_err(|path| {
        anyhow::anyhow!("current directory {} is not valid UTF-8", path.display())
    })?;
    Ok(cwd.join(path))
}

fn print_summary(log: &StepLog) {
    print!("{}", log.render_text());
    let steps: Vec<&str> = log.steps().iter().map(Step::as_str).collect();
    println!("Ran: {}", steps.join(", "));
    println!(
        "Layout migration complete for {} ({} change(s))",
        log.root(),
        log.applied()
    );
}

fn failure_report(err: &MigrationError) -> String {
    let mut out = String::new();
    if !err.completed.is_empty() {
        out.push_str("Completed before the failure:\n");
        out.push_str(&err.completed.render_text());
    }
    out.push_str(&format!("Failed at step: {}\n", err.failed));

    let pending: Vec<&str> = Step::ALL
        .iter()
        .skip_while(|step| **step != err.failed)
        .skip(1)
        .map(Step::as_str)
        .collect();
    if !pending.is_empty() {
        out.push_str(&format!("Not started: {}\n", pending.join(", ")));
    }
    out
}
