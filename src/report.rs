use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mode {
    FreshInstall,
    Update,
}

/// One recorded file operation. Best-effort failures become `Skipped`
/// entries; only the top-level handler appends `Failed`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value")]
pub enum TraceEntry {
    #[serde(rename = "removed")]
    Removed(String),
    #[serde(rename = "copied")]
    Copied(String),
    #[serde(rename = "kept")]
    Kept(String),
    #[serde(rename = "written")]
    Written(String),
    #[serde(rename = "skipped")]
    Skipped { name: String, reason: String },
    #[serde(rename = "failed")]
    Failed(String),
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEntry::Removed(name) => write!(f, "Removing \"{name}\" ..."),
            TraceEntry::Copied(name) => write!(f, "Copying \"{name}\" ..."),
            TraceEntry::Kept(name) => write!(f, "Keeping \"{name}\"."),
            TraceEntry::Written(name) => write!(f, "Creating \"{name}\" ..."),
            TraceEntry::Skipped { name, reason } => write!(f, "Skipping \"{name}\": {reason}"),
            TraceEntry::Failed(message) => write!(f, "ERROR: {message}"),
        }
    }
}

/// Ordered trace of one installer run. The shell renders it after the run;
/// there is no other feedback channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstallReport {
    pub mode: Mode,
    pub entries: Vec<TraceEntry>,
}

impl InstallReport {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: TraceEntry) {
        self.entries.push(entry);
    }

    pub fn succeeded(&self) -> bool {
        !self
            .entries
            .iter()
            .any(|entry| matches!(entry, TraceEntry::Failed(_)))
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip_report() {
        let mut report = InstallReport::new(Mode::Update);
        report.push(TraceEntry::Removed("old.pyw".to_string()));
        report.push(TraceEntry::Copied("locale".to_string()));
        report.push(TraceEntry::Skipped {
            name: "plugins".to_string(),
            reason: "is a directory".to_string(),
        });

        let s = serde_json::to_string(&report).unwrap();
        let out: InstallReport = serde_json::from_str(&s).unwrap();
        assert_eq!(report, out);
    }

    #[test]
    fn lines_render_in_occurrence_order() {
        let mut report = InstallReport::new(Mode::FreshInstall);
        report.push(TraceEntry::Copied("app.py".to_string()));
        report.push(TraceEntry::Kept("config.ini".to_string()));

        assert_eq!(
            report.lines(),
            vec![
                "Copying \"app.py\" ...".to_string(),
                "Keeping \"config.ini\".".to_string(),
            ]
        );
    }

    #[test]
    fn failed_entry_marks_run_unsuccessful() {
        let mut report = InstallReport::new(Mode::FreshInstall);
        assert!(report.succeeded());

        report.push(TraceEntry::Failed("copy app.py failed".to_string()));
        assert!(!report.succeeded());
    }
}
