use pkg_types::rule::RuleName;
use tracing::debug;

use crate::error::ValidationFailed;
use crate::report::Reporter;
use crate::rules::{Context, Rule, Subject};
use crate::source::DeploymentSource;
use crate::violation::ViolationReport;

/// Reported when a run finds nothing.
pub const SUCCESS_MESSAGE: &str = "Convention check complete! No errors were found.";

/// Runs every enabled rule over a deployment and reports the outcome.
pub struct Validator<'a> {
    reporter: &'a dyn Reporter,
}

impl<'a> Validator<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Collect every violation without reporting anything.
    ///
    /// Subjects are visited in a fixed order: service, stage, each function,
    /// each resource, then the build target. For every subject the enabled
    /// rules that apply to it run in registry order.
    pub fn collect(&self, source: &dyn DeploymentSource) -> ViolationReport {
        let ignore = source.conventions().ignore;
        let suppressed = ignore.ignored_rules();
        if !suppressed.is_empty() {
            let names: Vec<String> = suppressed.iter().map(ToString::to_string).collect();
            debug!("Suppressed rules: {}", names.join(", "));
        }
        let ctx = Context {
            service: source.service_name(),
            stage: source.stage_name(),
        };

        let functions = source.functions();
        let resources = source.resources();
        let build_target = source.build_target();

        let mut subjects = vec![Subject::Service(ctx.service), Subject::Stage(ctx.stage)];
        subjects.extend(functions.iter().map(Subject::Function));
        subjects.extend(resources.iter().map(Subject::Resource));
        subjects.extend(build_target.iter().map(Subject::BuildTarget));

        let mut report = ViolationReport::new();
        for subject in &subjects {
            for rule in RuleName::ALL {
                if ignore.is_ignored(rule) || !rule.applies_to(subject) {
                    continue;
                }
                report.extend_messages(rule, rule.check(subject, &ctx));
            }
        }

        report
    }

    /// One complete validation pass. Every violation is reported, followed by
    /// a summary line, and returned together as a single failure.
    pub fn run(&self, source: &dyn DeploymentSource) -> Result<(), ValidationFailed> {
        let report = self.collect(source);

        if report.is_empty() {
            self.reporter.success(SUCCESS_MESSAGE);
            return Ok(());
        }

        for violation in report.violations() {
            self.reporter.error(&violation.message);
        }
        self.reporter.error(&format!(
            "Convention check failed with {} error(s)",
            report.len()
        ));

        Err(ValidationFailed { report })
    }
}
