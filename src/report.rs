use std::fmt;
use std::fmt::Write as _;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

/// Ordered phases of a migration run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    EnterRoot,
    RemoveVenv,
    RelocateScripts,
    CreateDirectories,
    WriteTemplates,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::EnterRoot,
        Step::RemoveVenv,
        Step::RelocateScripts,
        Step::CreateDirectories,
        Step::WriteTemplates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::EnterRoot => "enter-root",
            Step::RemoveVenv => "remove-venv",
            Step::RelocateScripts => "relocate-scripts",
            Step::CreateDirectories => "create-directories",
            Step::WriteTemplates => "write-templates",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    Unchanged,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Applied => "applied",
            Outcome::Unchanged => "unchanged",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct StepRecord {
    pub step: Step,
    /// Root-relative path the action touched, `.` for the root itself.
    pub target: String,
    pub outcome: Outcome,
    pub at: String,
}

/// Append-only log of what a run did, in execution order.
#[derive(Clone, Debug, Serialize)]
pub struct StepLog {
    root: Utf8PathBuf,
    records: Vec<StepRecord>,
}

impl StepLog {
    pub fn new(root: &Utf8Path) -> Self {
        Self {
            root: root.to_owned(),
            records: Vec::new(),
        }
    }

    pub fn record(&mut self, step: Step, target: &str, outcome: Outcome) {
        tracing::debug!(step = %step, path = target, outcome = outcome.as_str(), "recorded");
        self.records.push(StepRecord {
            step,
            target: target.to_owned(),
            outcome,
            at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn applied(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.outcome == Outcome::Applied)
            .count()
    }

    /// Steps with at least one record, in the order they ran.
    pub fn steps(&self) -> Vec<Step> {
        let mut steps: Vec<Step> = Vec::new();
        for record in &self.records {
            if steps.last() != Some(&record.step) {
                steps.push(record.step);
            }
        }
        steps
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for record in self.records() {
            let _ = writeln!(
                out,
                "  [{:9}] {:18} {}",
                record.outcome.as_str(),
                record.step.as_str(),
                record.target
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_collapse_consecutive_records() {
        let mut log = StepLog::new(Utf8Path::new("/proj"));
        log.record(Step::EnterRoot, ".", Outcome::Unchanged);
        log.record(Step::CreateDirectories, "app/db", Outcome::Applied);
        log.record(Step::CreateDirectories, "tests", Outcome::Unchanged);

        assert_eq!(log.steps(), vec![Step::EnterRoot, Step::CreateDirectories]);
        assert_eq!(log.applied(), 1);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn json_uses_snake_case_names() {
        let mut log = StepLog::new(Utf8Path::new("/proj"));
        log.record(Step::RelocateScripts, "tools", Outcome::Applied);

        let json: serde_json::Value = serde_json::from_str(&log.to_json().unwrap()).unwrap();
        assert_eq!(json["root"], "/proj");
        assert_eq!(json["records"][0]["step"], "relocate_scripts");
        assert_eq!(json["records"][0]["outcome"], "applied");
    }

    #[test]
    fn text_lists_each_record() {
        let mut log = StepLog::new(Utf8Path::new("/proj"));
        log.record(Step::RemoveVenv, "venv", Outcome::Applied);
        let text = log.render_text();
        assert!(text.contains("remove-venv"));
        assert!(text.contains("venv"));
        assert!(text.contains("applied"));
    }
}
