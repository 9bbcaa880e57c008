use thiserror::Error as ThisError;

use crate::violation::ViolationReport;

/// The single failure a validation run raises when any rule is broken. Its
/// message is every violation, one per line.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{report}")]
pub struct ValidationFailed {
    pub report: ViolationReport,
}

impl ValidationFailed {
    pub fn violation_count(&self) -> usize {
        self.report.len()
    }
}
