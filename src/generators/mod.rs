//! Rule-based producers of recommendation drafts, one per report section.

pub mod architecture;
pub mod devops;
pub mod quality;
pub mod repository;
pub mod security;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::analysis::AnalysisInput;
use crate::generators::architecture::architecture_recommendations;
use crate::generators::devops::devops_recommendations;
use crate::generators::quality::quality_recommendations;
use crate::generators::repository::repository_recommendations;
use crate::generators::security::security_recommendations;
use crate::recommendations::thresholds::Thresholds;
use crate::recommendations::RecommendationDraft;

/// Runs every generator in emission order (security, quality, devops,
/// repository, architecture) and concatenates their drafts.
pub fn generate_drafts(
    input: &AnalysisInput,
    thresholds: &Thresholds,
    now: DateTime<Utc>,
) -> Vec<RecommendationDraft> {
    let batches = [
        (
            "security",
            security_recommendations(input.security.as_ref(), &thresholds.vulnerabilities),
        ),
        (
            "quality",
            quality_recommendations(input.code_quality.as_ref(), thresholds),
        ),
        (
            "devops",
            devops_recommendations(input.dora.as_ref(), &thresholds.failure_rate),
        ),
        (
            "repository",
            repository_recommendations(input.repository.as_ref(), thresholds, now),
        ),
        ("architecture", architecture_recommendations(input, thresholds)),
    ];

    let mut drafts = Vec::new();
    for (name, batch) in batches {
        debug!("{name} generator produced {} drafts", batch.len());
        drafts.extend(batch);
    }
    drafts
}
