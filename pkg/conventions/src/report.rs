use std::cell::RefCell;

use tracing::{error, info, warn};

/// Leveled output sink provided by the host.
pub trait Reporter {
    fn error(&self, message: &str);
    fn warning(&self, message: &str);
    fn success(&self, message: &str);
}

/// Writes through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn error(&self, message: &str) {
        error!("{}", message);
    }

    fn warning(&self, message: &str) {
        warn!("{}", message);
    }

    fn success(&self, message: &str) {
        info!("{}", message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Error,
    Warning,
    Success,
}

/// Keeps every line in memory, for hosts that render output themselves.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: RefCell<Vec<(ReportLevel, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(ReportLevel, String)> {
        self.lines.borrow().clone()
    }

    pub fn messages(&self, level: ReportLevel) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn record(&self, level: ReportLevel, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}

impl Reporter for MemoryReporter {
    fn error(&self, message: &str) {
        self.record(ReportLevel::Error, message);
    }

    fn warning(&self, message: &str) {
        self.record(ReportLevel::Warning, message);
    }

    fn success(&self, message: &str) {
        self.record(ReportLevel::Success, message);
    }
}
