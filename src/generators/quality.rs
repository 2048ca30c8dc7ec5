use crate::analysis::CodeQuality;
use crate::recommendations::thresholds::Thresholds;
use crate::recommendations::{Category, Level, Priority, RecommendationDraft};

/// Complexity, coverage and documentation are judged independently. Missing
/// coverage and documentation figures read as 0 whether the leaf or its whole
/// sub-section is absent.
pub fn quality_recommendations(
    quality: Option<&CodeQuality>,
    thresholds: &Thresholds,
) -> Vec<RecommendationDraft> {
    let Some(quality) = quality else {
        return vec![RecommendationDraft::new(
            "Implement Code Quality Monitoring",
            Category::Quality,
            Priority::Medium,
        )
        .with_description(
            "No code quality metrics are available. Track complexity, coverage and \
             documentation so regressions are caught early.",
        )
        .with_effort(Level::Low)
        .with_impact(Level::Medium)
        .with_timeline("1 week")
        .with_resources("Developer time, static analysis tooling")
        .with_details(&[
            "Add a linter and complexity report to CI",
            "Publish test coverage on every build",
            "Review the metrics in sprint retrospectives",
        ])];
    };

    let mut drafts = Vec::new();

    if let Some(complexity) = &quality.complexity {
        let limits = &thresholds.complexity;
        let average = complexity.average_or_zero();
        let hot_files = complexity.high_complexity_file_count();
        if average > limits.average_trigger || hot_files > limits.max_high_complexity_files {
            let priority = if average > limits.average_escalation {
                Priority::High
            } else {
                Priority::Medium
            };
            drafts.push(
                RecommendationDraft::new("Reduce Code Complexity", Category::Quality, priority)
                    .with_description(format!(
                        "Average cyclomatic complexity is {average:.1} and {hot_files} files \
                         are flagged as highly complex. Complex code is harder to test, review \
                         and change safely."
                    ))
                    .with_effort(Level::High)
                    .with_impact(Level::High)
                    .with_timeline("4-6 weeks")
                    .with_resources("Senior developers, refactoring time in each sprint")
                    .with_details(&[
                        "Start with the most frequently changed complex files",
                        "Extract functions and remove deep nesting",
                        "Add tests before refactoring each hotspot",
                        "Set a complexity budget enforced in CI",
                    ]),
            );
        }
    }

    let limits = &thresholds.coverage;
    let coverage = quality
        .testing
        .as_ref()
        .and_then(|t| t.coverage)
        .unwrap_or(0.0);
    if coverage < limits.minimum {
        let priority = if coverage < limits.critical {
            Priority::High
        } else {
            Priority::Medium
        };
        drafts.push(
            RecommendationDraft::new("Improve Test Coverage", Category::Quality, priority)
                .with_description(format!(
                    "Current test coverage is {coverage}%. Raising it to at least {}% \
                     reduces the risk of regressions reaching production.",
                    limits.minimum
                ))
                .with_effort(Level::Medium)
                .with_impact(Level::High)
                .with_timeline("3-4 weeks")
                .with_resources("Development team, testing framework")
                .with_details(&[
                    "Cover critical business logic first",
                    "Require tests for new code in review",
                    "Fail CI when coverage drops",
                ]),
        );
    }

    let score = quality
        .documentation
        .as_ref()
        .and_then(|d| d.score)
        .unwrap_or(0.0);
    if score < thresholds.documentation.minimum_score {
        drafts.push(
            RecommendationDraft::new(
                "Enhance Code Documentation",
                Category::Documentation,
                Priority::Medium,
            )
            .with_description(format!(
                "Documentation score is {score}/100. Better documentation shortens \
                 onboarding and reduces knowledge silos."
            ))
            .with_effort(Level::Low)
            .with_impact(Level::Medium)
            .with_timeline("2 weeks")
            .with_resources("Developers, technical writer")
            .with_details(&[
                "Document public APIs and module responsibilities",
                "Add a contributing guide",
                "Keep architecture notes next to the code",
            ]),
        );
    }

    drafts
}
