use crate::aibom::domain::Aibom;
use crate::aibom::services::{PolicyEngine, RuleRegistry};
use crate::application::dto::{EvaluationRequest, EvaluationResponse};
use crate::application::read_models::{EvaluationReport, ReportMetadata};
use crate::ports::inbound::PolicyEvaluationPort;
use crate::ports::outbound::{BomReader, PolicyReader, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// EvaluatePoliciesUseCase - loads an AIBOM and policies, then evaluates them
///
/// Infrastructure is injected through generic parameters:
/// * `BR` - BomReader implementation
/// * `PR` - PolicyReader implementation
/// * `REP` - ProgressReporter implementation
///
/// The rule registry is injected too, so callers decide which rule types
/// their policies may use.
pub struct EvaluatePoliciesUseCase<BR, PR, REP> {
    bom_reader: BR,
    policy_reader: PR,
    progress_reporter: REP,
    registry: RuleRegistry,
}

impl<BR, PR, REP> EvaluatePoliciesUseCase<BR, PR, REP>
where
    BR: BomReader,
    PR: PolicyReader,
    REP: ProgressReporter,
{
    pub fn new(
        bom_reader: BR,
        policy_reader: PR,
        progress_reporter: REP,
        registry: RuleRegistry,
    ) -> Self {
        Self {
            bom_reader,
            policy_reader,
            progress_reporter,
            registry,
        }
    }

    /// Runs the whole workflow: read BOM, resolve policies, evaluate
    ///
    /// Policy loading fails fast: the first unreadable or invalid policy
    /// aborts the run before anything is evaluated.
    pub fn execute(&self, request: EvaluationRequest) -> Result<EvaluationResponse> {
        tracing::info!(
            bom = %request.bom_path.display(),
            policies = request.policy_paths.len(),
            "starting policy evaluation"
        );

        if request.policy_paths.is_empty() {
            anyhow::bail!(
                "No policy files specified. Pass --policy <PATH> or list them under 'policies' in the config file."
            );
        }

        let bom = self.load_bom(&request.bom_path)?;
        let engine = self.load_policies(&request.policy_paths)?;

        self.progress_reporter.report(&format!(
            "🔍 Evaluating {} polic{}...",
            engine.policy_count(),
            if engine.policy_count() == 1 { "y" } else { "ies" }
        ));
        let results = engine.evaluate_all(&bom);

        let report = EvaluationReport::new(
            ReportMetadata::for_this_tool(),
            bom.bom_format.clone(),
            results,
        );
        self.report_outcome(&report);

        Ok(EvaluationResponse::new(report))
    }

    fn load_bom(&self, path: &Path) -> Result<Aibom> {
        self.progress_reporter
            .report(&format!("📖 Loading AIBOM from: {}", path.display()));

        let bom = self.bom_reader.read_bom(path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} model(s), {} tool(s), {} service(s)",
            bom.model_count(),
            bom.tool_count(),
            bom.services.len()
        ));
        Ok(bom)
    }

    fn load_policies(&self, paths: &[PathBuf]) -> Result<PolicyEngine> {
        let mut engine = PolicyEngine::new();
        let total = paths.len();

        for (index, path) in paths.iter().enumerate() {
            self.progress_reporter.report_progress(
                index + 1,
                total,
                Some(&format!("Loading {}", path.display())),
            );

            let document = self.policy_reader.read_policy(path)?;
            let policy = self
                .registry
                .resolve(document)
                .with_context(|| format!("Failed to resolve policy file {}", path.display()))?;

            tracing::debug!(
                path = %path.display(),
                policy = %policy.name,
                "policy loaded"
            );
            engine.add_policy(policy);
        }

        Ok(engine)
    }

    fn report_outcome(&self, report: &EvaluationReport) {
        let totals = report.totals();
        if report.passed() {
            self.progress_reporter.report_completion(&format!(
                "✅ All {} polic{} passed ({} non-blocking violation(s))",
                report.results.len(),
                if report.results.len() == 1 { "y" } else { "ies" },
                totals.total()
            ));
        } else {
            self.progress_reporter.report_error(&format!(
                "❌ {} of {} polic{} failed: {} critical, {} high",
                report.failed_policy_count(),
                report.results.len(),
                if report.results.len() == 1 { "y" } else { "ies" },
                totals.critical,
                totals.high
            ));
        }
    }
}

impl<BR, PR, REP> PolicyEvaluationPort for EvaluatePoliciesUseCase<BR, PR, REP>
where
    BR: BomReader,
    PR: PolicyReader,
    REP: ProgressReporter,
{
    fn evaluate(&self, request: EvaluationRequest) -> Result<EvaluationResponse> {
        self.execute(request)
    }
}
