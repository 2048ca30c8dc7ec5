use crate::analysis::SecurityAnalysis;
use crate::recommendations::thresholds::VulnerabilityThresholds;
use crate::recommendations::{Category, Level, Priority, RecommendationDraft};

pub fn security_recommendations(
    security: Option<&SecurityAnalysis>,
    thresholds: &VulnerabilityThresholds,
) -> Vec<RecommendationDraft> {
    let Some(security) = security else {
        return vec![RecommendationDraft::new(
            "Implement Security Analysis",
            Category::Security,
            Priority::High,
        )
        .with_description(
            "No security analysis data is available for this repository. Add automated \
             vulnerability scanning so security risks are visible before they ship.",
        )
        .with_effort(Level::Medium)
        .with_impact(Level::High)
        .with_timeline("1-2 weeks")
        .with_resources("DevOps engineer, dependency and SAST scanning tools")
        .with_details(&[
            "Enable dependency vulnerability scanning in CI",
            "Add static application security testing to pull requests",
            "Define an owner and SLA for triaging findings",
        ])];
    };

    let mut drafts = Vec::new();
    let critical = security.count_with_severity("critical");
    let high = security.count_with_severity("high");
    let total = security.vulnerabilities().len();

    if critical > 0 {
        drafts.push(
            RecommendationDraft::new(
                "Address Critical Security Vulnerabilities",
                Category::Security,
                Priority::Critical,
            )
            .with_description(format!(
                "Found {critical} critical security vulnerabilities that require immediate \
                 attention. These expose the project to exploitation and should be fixed \
                 before any other work."
            ))
            .with_effort(Level::High)
            .with_impact(Level::High)
            .with_timeline("Immediate (1-3 days)")
            .with_resources("Senior developers, security team")
            .with_details(&[
                "Triage each critical finding and confirm exploitability",
                "Patch or upgrade the affected components",
                "Add regression tests covering the fixed attack paths",
                "Schedule a follow-up scan to confirm remediation",
            ]),
        );
    }

    if high > 0 {
        drafts.push(
            RecommendationDraft::new(
                "Resolve High-Priority Security Issues",
                Category::Security,
                Priority::High,
            )
            .with_description(format!(
                "Found {high} high-priority security issues. Resolve them in the next \
                 development cycle to reduce the attack surface."
            ))
            .with_effort(Level::Medium)
            .with_impact(Level::High)
            .with_timeline("1-2 weeks")
            .with_resources("Development team, security review")
            .with_details(&[
                "Group findings by affected component",
                "Upgrade vulnerable dependencies to patched versions",
                "Review code paths flagged by static analysis",
            ]),
        );
    }

    if total > thresholds.security_first_total {
        drafts.push(
            RecommendationDraft::new(
                "Establish Security-First Development Practices",
                Category::Security,
                Priority::High,
            )
            .with_description(format!(
                "{total} vulnerabilities were detected in total. Fixing them one by one will \
                 not stop new ones from appearing; security needs to become part of the \
                 regular development workflow."
            ))
            .with_effort(Level::Medium)
            .with_impact(Level::High)
            .with_timeline("1-2 months")
            .with_resources("Engineering leadership, security champions")
            .with_details(&[
                "Run security scanning as a required CI check",
                "Train developers on secure coding guidelines",
                "Add security review to the pull request checklist",
                "Track vulnerability counts as a team metric",
            ]),
        );
    }

    drafts
}

#[cfg(test)]
mod tests {
    use crate::analysis::Vulnerability;

    use super::*;

    fn section(severities: &[&str]) -> SecurityAnalysis {
        SecurityAnalysis {
            vulnerabilities: Some(
                severities
                    .iter()
                    .map(|s| Vulnerability {
                        severity: Some(s.to_string()),
                        ..Vulnerability::default()
                    })
                    .collect(),
            ),
        }
    }

    fn titles(drafts: &[RecommendationDraft]) -> Vec<&str> {
        drafts.iter().map(|d| d.title.as_str()).collect()
    }

    #[test]
    fn absent_section_asks_for_analysis() {
        let drafts = security_recommendations(None, &VulnerabilityThresholds::default());
        assert_eq!(titles(&drafts), vec!["Implement Security Analysis"]);
        assert_eq!(drafts[0].priority, Priority::High);
    }

    #[test]
    fn empty_section_is_quiet() {
        let drafts =
            security_recommendations(Some(&section(&[])), &VulnerabilityThresholds::default());
        assert!(drafts.is_empty());

        let missing_list = SecurityAnalysis::default();
        assert!(
            security_recommendations(Some(&missing_list), &VulnerabilityThresholds::default())
                .is_empty()
        );
    }

    #[test]
    fn drafts_are_additive_and_carry_counts() {
        let mut severities = vec!["Critical"; 3];
        severities.extend(vec!["High"; 12]);
        let drafts = security_recommendations(
            Some(&section(&severities)),
            &VulnerabilityThresholds::default(),
        );
        assert_eq!(
            titles(&drafts),
            vec![
                "Address Critical Security Vulnerabilities",
                "Resolve High-Priority Security Issues",
                "Establish Security-First Development Practices",
            ]
        );
        assert!(drafts[0].description.contains("3 critical"));
        assert!(drafts[1].description.contains("12 high-priority"));
        assert!(drafts[2].description.contains("15 vulnerabilities"));
    }

    #[test]
    fn total_of_exactly_ten_does_not_escalate() {
        let drafts = security_recommendations(
            Some(&section(&["Low"; 10])),
            &VulnerabilityThresholds::default(),
        );
        assert!(drafts.is_empty());

        let drafts = security_recommendations(
            Some(&section(&["Medium"; 11])),
            &VulnerabilityThresholds::default(),
        );
        assert_eq!(
            titles(&drafts),
            vec!["Establish Security-First Development Practices"]
        );
    }
}
