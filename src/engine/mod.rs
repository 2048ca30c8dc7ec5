//! Generation pipeline: generators, enrichment, ranking.
//!
//! `generate` always returns something usable. When the analysis tree cannot
//! be decoded, the fixed fallback set is enriched and returned instead of an
//! error, which means callers cannot tell "no data" from "bad data" through
//! this entry point. `try_generate` and `build_report` keep that distinction.

pub mod enrich;
pub mod fallback;
pub mod rank;
pub mod report;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, warn};

use crate::analysis::AnalysisInput;
use crate::engine::enrich::enrich_all;
use crate::engine::fallback::fallback_recommendations;
use crate::engine::rank::rank;
use crate::engine::report::{RecommendationReport, ReportSource, ReportSummary};
use crate::error::Result;
use crate::generators::generate_drafts;
use crate::recommendations::thresholds::Thresholds;
use crate::recommendations::Recommendation;

pub fn generate(analysis: &Value, thresholds: &Thresholds, now: DateTime<Utc>) -> Vec<Recommendation> {
    match try_generate(analysis, thresholds, now) {
        Ok(recommendations) => recommendations,
        Err(error) => {
            warn!("analysis input rejected, returning fallback recommendations: {error}");
            fallback_recommendations(now)
        }
    }
}

pub fn generate_now(analysis: &Value, thresholds: &Thresholds) -> Vec<Recommendation> {
    generate(analysis, thresholds, Utc::now())
}

pub fn try_generate(
    analysis: &Value,
    thresholds: &Thresholds,
    now: DateTime<Utc>,
) -> Result<Vec<Recommendation>> {
    let input = AnalysisInput::from_value(analysis)?;
    Ok(generate_from_input(&input, thresholds, now))
}

pub fn generate_from_input(
    input: &AnalysisInput,
    thresholds: &Thresholds,
    now: DateTime<Utc>,
) -> Vec<Recommendation> {
    let drafts = generate_drafts(input, thresholds, now);
    debug!("enriching and ranking {} drafts", drafts.len());
    rank(enrich_all(&drafts, now))
}

/// Ranked recommendations plus summary; `top` truncates after ranking.
pub fn build_report(
    analysis: &Value,
    thresholds: &Thresholds,
    now: DateTime<Utc>,
    top: Option<usize>,
) -> RecommendationReport {
    let (source, mut recommendations) = match try_generate(analysis, thresholds, now) {
        Ok(recommendations) => (ReportSource::Generated, recommendations),
        Err(error) => {
            warn!("analysis input rejected, returning fallback recommendations: {error}");
            (ReportSource::Fallback, fallback_recommendations(now))
        }
    };
    if let Some(top) = top {
        recommendations.truncate(top);
    }
    RecommendationReport {
        generated_at: now,
        source,
        summary: ReportSummary::from_recommendations(&recommendations),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::recommendations::Priority;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn empty_object_yields_bootstrap_advice() {
        let recs = generate(&json!({}), &Thresholds::default(), now());
        let titles: Vec<_> = recs.iter().map(|r| r.title()).collect();
        assert_eq!(recs.len(), 5);
        assert!(titles.contains(&"Implement Security Analysis"));
        assert!(titles.contains(&"Implement Code Quality Monitoring"));
        assert!(titles.contains(&"Implement DORA Metrics Tracking"));
        assert!(titles.contains(&"Comprehensive Technical Health Improvement"));
        assert!(titles.contains(&"Implement Performance Monitoring"));
    }

    #[test]
    fn empty_quality_section_reads_as_zero_coverage_and_docs() {
        let recs = generate(&json!({ "codeQuality": {} }), &Thresholds::default(), now());
        let coverage = recs
            .iter()
            .find(|r| r.title() == "Improve Test Coverage")
            .expect("missing coverage draft");
        assert_eq!(coverage.priority(), Priority::High);
        assert!(recs.iter().any(|r| r.title() == "Enhance Code Documentation"));
        assert!(!recs
            .iter()
            .any(|r| r.title() == "Implement Code Quality Monitoring"));

        let with_empty_testing = generate(
            &json!({ "codeQuality": { "testing": {}, "documentation": {} } }),
            &Thresholds::default(),
            now(),
        );
        let titles = |recs: &[Recommendation]| -> Vec<String> {
            recs.iter().map(|r| r.title().to_string()).collect()
        };
        assert_eq!(titles(&recs), titles(&with_empty_testing));
    }

    #[test]
    fn generate_now_reads_the_wall_clock() {
        let before = Utc::now();
        let recs = generate_now(&json!({}), &Thresholds::default());
        assert!(!recs.is_empty());
        assert!(rank::is_ranked(&recs));
        assert_eq!(
            recs.len(),
            generate(&json!({}), &Thresholds::default(), before).len()
        );

        let fallback = generate_now(&Value::Null, &Thresholds::default());
        assert_eq!(fallback.len(), 5);
        assert!(rank::is_ranked(&fallback));
    }

    #[test]
    fn wrong_shape_falls_back() {
        let recs = generate(&json!({ "security": "none" }), &Thresholds::default(), now());
        assert_eq!(recs, fallback_recommendations(now()));
        assert!(try_generate(&json!({ "security": "none" }), &Thresholds::default(), now()).is_err());
    }

    #[test]
    fn report_marks_source_and_truncates() {
        let report = build_report(&Value::Null, &Thresholds::default(), now(), Some(2));
        assert_eq!(report.source, ReportSource::Fallback);
        assert_eq!(report.recommendations.len(), 2);
        assert_eq!(report.summary.total, 2);

        let report = build_report(&json!({}), &Thresholds::default(), now(), None);
        assert_eq!(report.source, ReportSource::Generated);
        assert_eq!(report.summary.total, 5);
    }
}
