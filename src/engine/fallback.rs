use chrono::{DateTime, Utc};

use crate::engine::enrich::enrich_all;
use crate::engine::rank::rank;
use crate::recommendations::{Category, Level, Priority, Recommendation, RecommendationDraft};

/// Baseline advice returned when the analysis report cannot be read.
pub fn fallback_drafts() -> Vec<RecommendationDraft> {
    vec![
        RecommendationDraft::new("Comprehensive Testing", Category::Quality, Priority::High)
            .with_description(
                "Establish a test suite covering unit, integration and end-to-end paths so \
                 changes can be made with confidence.",
            )
            .with_effort(Level::Medium)
            .with_impact(Level::High)
            .with_timeline("3-4 weeks")
            .with_resources("Development team, testing framework")
            .with_details(&[
                "Add unit tests for core business logic",
                "Add integration tests for external boundaries",
                "Track coverage in CI",
            ]),
        RecommendationDraft::new("Continuous Integration", Category::DevOps, Priority::High)
            .with_description(
                "Build, lint and test every change automatically before it is merged.",
            )
            .with_effort(Level::Medium)
            .with_impact(Level::High)
            .with_timeline("1-2 weeks")
            .with_resources("DevOps engineer, CI service")
            .with_details(&[
                "Run the build and test suite on every pull request",
                "Block merges on failing checks",
                "Cache dependencies to keep pipelines fast",
            ]),
        RecommendationDraft::new("Documentation", Category::Documentation, Priority::Medium)
            .with_description(
                "Document setup, architecture and public interfaces so the project is \
                 approachable for new contributors.",
            )
            .with_effort(Level::Low)
            .with_impact(Level::Medium)
            .with_timeline("1-2 weeks")
            .with_resources("Developers, technical writer")
            .with_details(&[
                "Write a README with setup and usage",
                "Document the main modules and their responsibilities",
            ]),
        RecommendationDraft::new("Security Scanning", Category::Security, Priority::High)
            .with_description(
                "Scan dependencies and source code for known vulnerabilities on every build.",
            )
            .with_effort(Level::Low)
            .with_impact(Level::High)
            .with_timeline("1 week")
            .with_resources("DevOps engineer, security scanning tools")
            .with_details(&[
                "Enable dependency vulnerability alerts",
                "Add static analysis to the CI pipeline",
            ]),
        RecommendationDraft::new("Performance Monitoring", Category::Performance, Priority::Medium)
            .with_description(
                "Measure latency, throughput and resource usage to catch regressions early.",
            )
            .with_effort(Level::Medium)
            .with_impact(Level::Medium)
            .with_timeline("2-4 weeks")
            .with_resources("DevOps engineer, APM tooling")
            .with_details(&[
                "Instrument critical request paths",
                "Set alerts on performance budgets",
            ]),
    ]
}

pub fn fallback_recommendations(now: DateTime<Utc>) -> Vec<Recommendation> {
    rank(enrich_all(&fallback_drafts(), now))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn fallback_set_is_fixed_and_enriched() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let recs = fallback_recommendations(now);
        let titles: BTreeSet<_> = recs.iter().map(|r| r.title()).collect();
        assert_eq!(
            titles,
            BTreeSet::from([
                "Comprehensive Testing",
                "Continuous Integration",
                "Documentation",
                "Performance Monitoring",
                "Security Scanning",
            ])
        );
        for rec in &recs {
            assert!(!rec.id.is_empty());
            assert!(rec.priority_score > 0.0);
            assert!(rec.roi > 0.0);
            assert!((1..=5).contains(&rec.urgency));
        }
        assert_eq!(recs[0].title(), "Security Scanning");
    }
}
