use crate::analysis::AnalysisInput;
use crate::recommendations::thresholds::Thresholds;
use crate::recommendations::{Category, Level, Priority, RecommendationDraft};

pub fn architecture_recommendations(
    input: &AnalysisInput,
    thresholds: &Thresholds,
) -> Vec<RecommendationDraft> {
    let overall = input.overall_score();
    let outdated = input.outdated_dependency_count();
    let mut drafts = Vec::new();

    if overall < thresholds.health_score.comprehensive_improvement {
        drafts.push(
            RecommendationDraft::new(
                "Comprehensive Technical Health Improvement",
                Category::Architecture,
                Priority::High,
            )
            .with_description(format!(
                "The overall technical health score is {overall}/100. A coordinated plan \
                 across quality, security and delivery is needed rather than isolated fixes."
            ))
            .with_effort(Level::High)
            .with_impact(Level::High)
            .with_timeline("2-3 months")
            .with_resources("Full development team, technical lead")
            .with_details(&[
                "Run an architecture review of the weakest areas",
                "Create a technical debt backlog with owners",
                "Reserve capacity for health work in every sprint",
                "Re-run the analysis monthly to track progress",
            ]),
        );
    }

    if outdated > thresholds.dependencies.max_outdated {
        drafts.push(
            RecommendationDraft::new(
                "Update Outdated Dependencies",
                Category::Maintenance,
                Priority::Medium,
            )
            .with_description(format!(
                "{outdated} dependencies are outdated. Stale dependencies miss security \
                 patches and make future upgrades harder."
            ))
            .with_effort(Level::Medium)
            .with_impact(Level::Medium)
            .with_timeline("2-3 weeks")
            .with_resources("Development team, automated update tooling")
            .with_details(&[
                "Upgrade dependencies with known vulnerabilities first",
                "Enable automated dependency update pull requests",
                "Pin and document intentionally held-back versions",
            ]),
        );
    }

    if overall < thresholds.health_score.performance_monitoring {
        drafts.push(
            RecommendationDraft::new(
                "Implement Performance Monitoring",
                Category::Performance,
                Priority::Medium,
            )
            .with_description(
                "There is no evidence of performance monitoring. Measuring latency, \
                 throughput and resource usage makes regressions visible before users \
                 notice them.",
            )
            .with_effort(Level::Medium)
            .with_impact(Level::Medium)
            .with_timeline("2-4 weeks")
            .with_resources("DevOps engineer, APM tooling")
            .with_details(&[
                "Instrument key request paths",
                "Define performance budgets and alerts",
                "Add benchmarks to CI for hot code paths",
            ]),
        );
    }

    drafts
}
