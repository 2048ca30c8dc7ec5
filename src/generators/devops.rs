use crate::analysis::DoraMetrics;
use crate::recommendations::thresholds::FailureRateThresholds;
use crate::recommendations::{Category, Level, Priority, RecommendationDraft};

pub fn devops_recommendations(
    dora: Option<&DoraMetrics>,
    thresholds: &FailureRateThresholds,
) -> Vec<RecommendationDraft> {
    let Some(dora) = dora else {
        return vec![RecommendationDraft::new(
            "Implement DORA Metrics Tracking",
            Category::DevOps,
            Priority::Medium,
        )
        .with_description(
            "Delivery performance is not being measured. Track deployment frequency, lead \
             time, change failure rate and recovery time to guide process improvements.",
        )
        .with_effort(Level::Medium)
        .with_impact(Level::Medium)
        .with_timeline("2-3 weeks")
        .with_resources("DevOps engineer, CI/CD pipeline access")
        .with_details(&[
            "Record deployments and their outcomes",
            "Link commits to releases to measure lead time",
            "Publish a delivery metrics dashboard",
        ])];
    };

    let mut drafts = Vec::new();

    if let Some(metric) = dora.deployment_frequency.as_ref().filter(|m| m.is_below_high()) {
        drafts.push(
            RecommendationDraft::new(
                "Increase Deployment Frequency",
                Category::DevOps,
                Priority::High,
            )
            .with_description(format!(
                "Deployment frequency is classified as {}. Smaller, more frequent releases \
                 reduce risk and speed up feedback.",
                metric.classification.as_deref().unwrap_or_default().trim()
            ))
            .with_effort(Level::Medium)
            .with_impact(Level::High)
            .with_timeline("4-8 weeks")
            .with_resources("DevOps engineer, development team")
            .with_details(&[
                "Automate the release pipeline end to end",
                "Ship behind feature flags",
                "Break large changes into smaller increments",
            ]),
        );
    }

    if let Some(metric) = dora.lead_time_for_changes.as_ref().filter(|m| m.is_below_high()) {
        drafts.push(
            RecommendationDraft::new(
                "Reduce Lead Time for Changes",
                Category::DevOps,
                Priority::High,
            )
            .with_description(format!(
                "Lead time for changes is classified as {}. Shorter lead times mean fixes \
                 and features reach users sooner.",
                metric.classification.as_deref().unwrap_or_default().trim()
            ))
            .with_effort(Level::Medium)
            .with_impact(Level::High)
            .with_timeline("4-6 weeks")
            .with_resources("Development team, CI/CD tooling")
            .with_details(&[
                "Speed up CI with caching and parallel jobs",
                "Set review turnaround expectations",
                "Reduce manual approval steps",
            ]),
        );
    }

    if let Some(rate) = dora.change_failure_rate.as_ref().and_then(|m| m.rate) {
        if rate > thresholds.max_change_failure_rate {
            drafts.push(
                RecommendationDraft::new(
                    "Reduce Change Failure Rate",
                    Category::DevOps,
                    Priority::High,
                )
                .with_description(format!(
                    "{rate}% of changes cause failures in production. Stronger pre-release \
                     verification will cut incidents and rework."
                ))
                .with_effort(Level::Medium)
                .with_impact(Level::High)
                .with_timeline("3-6 weeks")
                .with_resources("QA engineer, development team")
                .with_details(&[
                    "Add integration tests for failure-prone areas",
                    "Introduce canary or staged rollouts",
                    "Run post-incident reviews on every failed change",
                ]),
            );
        }
    }

    drafts
}
