use chrono::{DateTime, Duration, Utc};

use crate::analysis::activity::inactive_for;
use crate::analysis::RepositoryInfo;
use crate::recommendations::thresholds::Thresholds;
use crate::recommendations::{Category, Level, Priority, RecommendationDraft};

/// Unlike the other generators, a missing repository section yields nothing.
/// The staleness rule is skipped when no usable timestamp is recorded.
pub fn repository_recommendations(
    repository: Option<&RepositoryInfo>,
    thresholds: &Thresholds,
    now: DateTime<Utc>,
) -> Vec<RecommendationDraft> {
    let Some(repository) = repository else {
        return Vec::new();
    };

    let mut drafts = Vec::new();

    if !repository.has_license() {
        drafts.push(
            RecommendationDraft::new("Add Open Source License", Category::Legal, Priority::Medium)
                .with_description(
                    "The repository has no license. Without one, others cannot legally use, \
                     modify or contribute to the code.",
                )
                .with_effort(Level::Low)
                .with_impact(Level::Medium)
                .with_timeline("1 day")
                .with_resources("Project maintainer, legal review if required")
                .with_details(&[
                    "Choose a license that matches the project's goals",
                    "Add a LICENSE file at the repository root",
                    "Reference the license in the README",
                ]),
        );
    }

    let min_chars = thresholds.documentation.min_description_chars;
    if repository.description_chars() < min_chars {
        drafts.push(
            RecommendationDraft::new(
                "Improve Repository Documentation",
                Category::Documentation,
                Priority::Medium,
            )
            .with_description(format!(
                "The repository description is missing or shorter than {min_chars} \
                 characters. A clear summary helps people find and understand the project."
            ))
            .with_effort(Level::Low)
            .with_impact(Level::Medium)
            .with_timeline("1-2 days")
            .with_resources("Project maintainer")
            .with_details(&[
                "Write a one-paragraph description of what the project does",
                "Add repository topics",
                "Expand the README with setup and usage sections",
            ]),
        );
    }

    if let Some(elapsed) = inactive_for(repository, now) {
        if elapsed > Duration::days(thresholds.staleness.max_inactive_days) {
            let days = elapsed.num_days();
            drafts.push(
                RecommendationDraft::new(
                    "Increase Development Activity",
                    Category::Maintenance,
                    Priority::Medium,
                )
                .with_description(format!(
                    "The last recorded activity was {days} days ago. Inactive repositories \
                     accumulate outdated dependencies and unpatched vulnerabilities."
                ))
                .with_effort(Level::Medium)
                .with_impact(Level::Medium)
                .with_timeline("Ongoing")
                .with_resources("Maintainers, contributors")
                .with_details(&[
                    "Review and triage open issues",
                    "Schedule regular dependency updates",
                    "Decide whether the project should be archived",
                ]),
            );
        }
    }

    drafts
}
