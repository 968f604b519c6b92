//! Gate report accumulator.
//!
//! Each gate appends OK/FAIL entries to a `GateReport` as its checks run;
//! the binary renders the report and derives the process exit code from
//! `is_success()`.

use crate::policy::REPORT_CAP;

/// Status of a single check entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Fail,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "OK"),
            CheckStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// One recorded check outcome
#[derive(Debug, Clone, PartialEq)]
pub struct CheckEntry {
    pub status: CheckStatus,
    pub message: String,
}

/// Accumulated results of a single gate run
#[derive(Debug, Clone)]
pub struct GateReport {
    /// Display name, e.g. "BRAND GATE".
    pub gate: &'static str,
    pub entries: Vec<CheckEntry>,
}

impl GateReport {
    pub fn new(gate: &'static str) -> Self {
        Self {
            gate,
            entries: Vec::new(),
        }
    }

    pub fn add_ok(&mut self, message: impl Into<String>) {
        self.entries.push(CheckEntry {
            status: CheckStatus::Ok,
            message: message.into(),
        });
    }

    pub fn add_fail(&mut self, message: impl Into<String>) {
        self.entries.push(CheckEntry {
            status: CheckStatus::Fail,
            message: message.into(),
        });
    }

    /// Append one FAIL entry per offender, capped at [`REPORT_CAP`] with a
    /// trailing remainder summary.
    pub fn add_fail_capped(&mut self, offenders: &[String], noun: &str) {
        for msg in offenders.iter().take(REPORT_CAP) {
            self.add_fail(msg.clone());
        }
        if offenders.len() > REPORT_CAP {
            self.add_fail(format!(
                "...and {} more {}",
                offenders.len() - REPORT_CAP,
                noun
            ));
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckEntry> {
        self.entries
            .iter()
            .filter(|e| e.status == CheckStatus::Fail)
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn ok_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == CheckStatus::Ok)
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}
