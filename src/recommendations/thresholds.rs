//! Rule thresholds, grouped by the signal they gate.
//!
//! Comparisons are strict everywhere: a value sitting exactly on a threshold
//! does not trigger its rule.

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Thresholds {
    #[serde(default)]
    pub complexity: ComplexityThresholds,
    #[serde(default)]
    pub coverage: CoverageThresholds,
    #[serde(default)]
    pub documentation: DocumentationThresholds,
    #[serde(default)]
    pub staleness: StalenessThresholds,
    #[serde(default)]
    pub vulnerabilities: VulnerabilityThresholds,
    #[serde(default)]
    pub dependencies: DependencyThresholds,
    #[serde(default)]
    pub failure_rate: FailureRateThresholds,
    #[serde(default)]
    pub health_score: HealthScoreThresholds,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplexityThresholds {
    #[serde(default = "default_average_trigger")]
    pub average_trigger: f64,
    #[serde(default = "default_average_escalation")]
    pub average_escalation: f64,
    #[serde(default = "default_max_high_complexity_files")]
    pub max_high_complexity_files: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverageThresholds {
    #[serde(default = "default_coverage_minimum")]
    pub minimum: f64,
    #[serde(default = "default_coverage_critical")]
    pub critical: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentationThresholds {
    #[serde(default = "default_documentation_minimum")]
    pub minimum_score: f64,
    #[serde(default = "default_min_description_chars")]
    pub min_description_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StalenessThresholds {
    #[serde(default = "default_max_inactive_days")]
    pub max_inactive_days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VulnerabilityThresholds {
    #[serde(default = "default_security_first_total")]
    pub security_first_total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DependencyThresholds {
    #[serde(default = "default_max_outdated")]
    pub max_outdated: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailureRateThresholds {
    #[serde(default = "default_max_change_failure_rate")]
    pub max_change_failure_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthScoreThresholds {
    #[serde(default = "default_comprehensive_improvement")]
    pub comprehensive_improvement: f64,
    #[serde(default = "default_performance_monitoring")]
    pub performance_monitoring: f64,
}

impl Thresholds {
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("complexity.average_trigger", self.complexity.average_trigger),
            ("complexity.average_escalation", self.complexity.average_escalation),
            ("coverage.minimum", self.coverage.minimum),
            ("coverage.critical", self.coverage.critical),
            ("documentation.minimum_score", self.documentation.minimum_score),
            (
                "failure_rate.max_change_failure_rate",
                self.failure_rate.max_change_failure_rate,
            ),
            (
                "health_score.comprehensive_improvement",
                self.health_score.comprehensive_improvement,
            ),
            (
                "health_score.performance_monitoring",
                self.health_score.performance_monitoring,
            ),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(AdvisorError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.staleness.max_inactive_days < 0 {
            return Err(AdvisorError::InvalidConfig(format!(
                "staleness.max_inactive_days must be non-negative, got {}",
                self.staleness.max_inactive_days
            )));
        }
        if self.coverage.critical > self.coverage.minimum {
            return Err(AdvisorError::InvalidConfig(format!(
                "coverage.critical ({}) must not exceed coverage.minimum ({})",
                self.coverage.critical, self.coverage.minimum
            )));
        }
        if self.complexity.average_escalation < self.complexity.average_trigger {
            return Err(AdvisorError::InvalidConfig(format!(
                "complexity.average_escalation ({}) must not be below complexity.average_trigger ({})",
                self.complexity.average_escalation, self.complexity.average_trigger
            )));
        }
        Ok(())
    }
}

impl Default for ComplexityThresholds {
    fn default() -> Self {
        Self {
            average_trigger: default_average_trigger(),
            average_escalation: default_average_escalation(),
            max_high_complexity_files: default_max_high_complexity_files(),
        }
    }
}

impl Default for CoverageThresholds {
    fn default() -> Self {
        Self {
            minimum: default_coverage_minimum(),
            critical: default_coverage_critical(),
        }
    }
}

impl Default for DocumentationThresholds {
    fn default() -> Self {
        Self {
            minimum_score: default_documentation_minimum(),
            min_description_chars: default_min_description_chars(),
        }
    }
}

impl Default for StalenessThresholds {
    fn default() -> Self {
        Self {
            max_inactive_days: default_max_inactive_days(),
        }
    }
}

impl Default for VulnerabilityThresholds {
    fn default() -> Self {
        Self {
            security_first_total: default_security_first_total(),
        }
    }
}

impl Default for DependencyThresholds {
    fn default() -> Self {
        Self {
            max_outdated: default_max_outdated(),
        }
    }
}

impl Default for FailureRateThresholds {
    fn default() -> Self {
        Self {
            max_change_failure_rate: default_max_change_failure_rate(),
        }
    }
}

impl Default for HealthScoreThresholds {
    fn default() -> Self {
        Self {
            comprehensive_improvement: default_comprehensive_improvement(),
            performance_monitoring: default_performance_monitoring(),
        }
    }
}

fn default_average_trigger() -> f64 {
    15.0
}

fn default_average_escalation() -> f64 {
    20.0
}

fn default_max_high_complexity_files() -> usize {
    10
}

fn default_coverage_minimum() -> f64 {
    70.0
}

fn default_coverage_critical() -> f64 {
    50.0
}

fn default_documentation_minimum() -> f64 {
    60.0
}

fn default_min_description_chars() -> usize {
    50
}

fn default_max_inactive_days() -> i64 {
    90
}

fn default_security_first_total() -> usize {
    10
}

fn default_max_outdated() -> usize {
    10
}

fn default_max_change_failure_rate() -> f64 {
    15.0
}

fn default_comprehensive_improvement() -> f64 {
    70.0
}

fn default_performance_monitoring() -> f64 {
    80.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        Thresholds::default().validate().expect("defaults rejected");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let parsed: Thresholds = toml::from_str(
            r#"
[coverage]
minimum = 80.0
"#,
        )
        .expect("parse failed");
        assert_eq!(parsed.coverage.minimum, 80.0);
        assert_eq!(parsed.coverage.critical, 50.0);
        assert_eq!(parsed.staleness.max_inactive_days, 90);
    }

    #[test]
    fn rejects_inverted_escalation() {
        let mut thresholds = Thresholds::default();
        thresholds.coverage.critical = 75.0;
        assert!(thresholds.validate().is_err());

        let mut thresholds = Thresholds::default();
        thresholds.complexity.average_escalation = 10.0;
        assert!(thresholds.validate().is_err());

        let mut thresholds = Thresholds::default();
        thresholds.failure_rate.max_change_failure_rate = -1.0;
        assert!(thresholds.validate().is_err());
    }
}
