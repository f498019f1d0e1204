use crate::aibom::domain::EvaluationResult;
use crate::application::read_models::EvaluationReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a> {
    serial_number: &'a str,
    timestamp: &'a str,
    tool: Tool<'a>,
    bom_format: &'a str,
    passed: bool,
    summary: Summary,
    results: Vec<PolicyResult<'a>>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Summary {
    critical: usize,
    high: usize,
    medium: usize,
    low: usize,
}

#[derive(Debug, Serialize)]
struct PolicyResult<'a> {
    #[serde(flatten)]
    result: &'a EvaluationResult,
    passed: bool,
}

/// JsonFormatter adapter rendering a pretty-printed JSON report
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &EvaluationReport) -> Result<String> {
        let totals = report.totals();
        let envelope = Envelope {
            serial_number: report.metadata.serial_number(),
            timestamp: report.metadata.timestamp(),
            tool: Tool {
                name: report.metadata.tool_name(),
                version: report.metadata.tool_version(),
            },
            bom_format: &report.bom_format,
            passed: report.passed(),
            summary: Summary {
                critical: totals.critical,
                high: totals.high,
                medium: totals.medium,
                low: totals.low,
            },
            results: report
                .results
                .iter()
                .map(|result| PolicyResult {
                    result,
                    passed: result.passed(),
                })
                .collect(),
        };

        let mut json = serde_json::to_string_pretty(&envelope)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support::sample_report;
    use serde_json::Value;

    fn render() -> Value {
        let output = JsonFormatter::new().format(&sample_report()).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_envelope_fields() {
        let json = render();
        assert_eq!(
            json["serialNumber"],
            "urn:uuid:00000000-0000-4000-8000-000000000000"
        );
        assert_eq!(json["timestamp"], "2026-01-01T00:00:00+00:00");
        assert_eq!(json["tool"]["name"], "aibom-policy");
        assert_eq!(json["tool"]["version"], "0.1.0");
        assert_eq!(json["bomFormat"], "CycloneDX-AI");
        assert_eq!(json["passed"], false);
        assert_eq!(json["summary"]["critical"], 1);
        assert_eq!(json["summary"]["medium"], 1);
    }

    #[test]
    fn test_results_carry_counts_and_pass_flag() {
        let json = render();
        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);

        assert_eq!(results[0]["policyName"], "governance");
        assert_eq!(results[0]["passed"], false);
        assert_eq!(results[0]["criticalCount"], 1);
        assert_eq!(results[0]["highCount"], 0);
        assert_eq!(results[0]["mediumCount"], 1);
        assert_eq!(results[0]["lowCount"], 0);

        assert_eq!(results[1]["policyName"], "limits");
        assert_eq!(results[1]["passed"], true);
        assert!(results[1]["violations"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_violation_shape() {
        let json = render();
        let violation = &json["results"][0]["violations"][0];
        assert_eq!(violation["ruleId"], "AIBOM-004");
        assert_eq!(violation["ruleName"], "deny-tool");
        assert_eq!(violation["severity"], "critical");
        assert_eq!(violation["component"], "exec_sql");
        assert_eq!(
            violation["message"],
            "tool 'exec_sql' is denied: SQL exec is dangerous"
        );
    }
}
