//! Analysis report model consumed by the recommendation engine.
//!
//! Every section and every leaf is optional. An absent section is a signal of
//! its own (most generators answer it with a "set this up" recommendation), so
//! `null` and a missing key both decode to `None` rather than to an empty
//! section.

pub mod activity;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AdvisorError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    #[serde(default)]
    pub security: Option<SecurityAnalysis>,
    #[serde(default, alias = "code_quality")]
    pub code_quality: Option<CodeQuality>,
    #[serde(default)]
    pub dora: Option<DoraMetrics>,
    #[serde(default)]
    pub repository: Option<RepositoryInfo>,
    #[serde(default, alias = "tech_health_score")]
    pub tech_health_score: Option<TechHealthScore>,
}

impl AnalysisInput {
    /// Decodes an analysis tree section by section so a failure names the
    /// section that carried the wrong shape.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(AdvisorError::NotAnObject(json_kind(value)));
        };
        Ok(Self {
            security: section(map, &["security"])?,
            code_quality: section(map, &["codeQuality", "code_quality"])?,
            dora: section(map, &["dora"])?,
            repository: section(map, &["repository"])?,
            tech_health_score: section(map, &["techHealthScore", "tech_health_score"])?,
        })
    }

    /// Composite score, `0` when the report carries none.
    pub fn overall_score(&self) -> f64 {
        self.tech_health_score
            .as_ref()
            .and_then(|s| s.overall)
            .unwrap_or(0.0)
    }

    pub fn outdated_dependency_count(&self) -> usize {
        self.code_quality
            .as_ref()
            .and_then(|q| q.dependencies.as_ref())
            .and_then(|d| d.outdated.as_ref())
            .map(Vec::len)
            .unwrap_or(0)
    }
}

/// Accepts either `{ "vulnerabilities": [...] }` or a bare list of records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "SecurityShape")]
pub struct SecurityAnalysis {
    pub vulnerabilities: Option<Vec<Vulnerability>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SecurityShape {
    List(Vec<Vulnerability>),
    Section {
        #[serde(default)]
        vulnerabilities: Option<Vec<Vulnerability>>,
    },
}

impl From<SecurityShape> for SecurityAnalysis {
    fn from(shape: SecurityShape) -> Self {
        match shape {
            SecurityShape::List(list) => Self {
                vulnerabilities: Some(list),
            },
            SecurityShape::Section { vulnerabilities } => Self { vulnerabilities },
        }
    }
}

impl SecurityAnalysis {
    pub fn vulnerabilities(&self) -> &[Vulnerability] {
        self.vulnerabilities.as_deref().unwrap_or(&[])
    }

    pub fn count_with_severity(&self, severity: &str) -> usize {
        self.vulnerabilities()
            .iter()
            .filter(|v| v.has_severity(severity))
            .count()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Vulnerability {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

impl Vulnerability {
    pub fn has_severity(&self, severity: &str) -> bool {
        self.severity
            .as_deref()
            .is_some_and(|s| s.trim().eq_ignore_ascii_case(severity))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CodeQuality {
    #[serde(default)]
    pub complexity: Option<ComplexityMetrics>,
    #[serde(default)]
    pub testing: Option<TestingMetrics>,
    #[serde(default)]
    pub documentation: Option<DocumentationMetrics>,
    #[serde(default)]
    pub dependencies: Option<DependencyMetrics>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityMetrics {
    #[serde(default, alias = "averageComplexity", alias = "average_complexity")]
    pub average: Option<f64>,
    #[serde(default, alias = "high_complexity_files")]
    pub high_complexity_files: Option<Vec<Value>>,
}

impl ComplexityMetrics {
    pub fn average_or_zero(&self) -> f64 {
        self.average.unwrap_or(0.0)
    }

    pub fn high_complexity_file_count(&self) -> usize {
        self.high_complexity_files.as_ref().map(Vec::len).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TestingMetrics {
    #[serde(default)]
    pub coverage: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentationMetrics {
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DependencyMetrics {
    #[serde(default)]
    pub outdated: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoraMetrics {
    #[serde(default, alias = "deployment_frequency")]
    pub deployment_frequency: Option<ClassifiedMetric>,
    #[serde(default, alias = "lead_time_for_changes")]
    pub lead_time_for_changes: Option<ClassifiedMetric>,
    #[serde(default, alias = "change_failure_rate")]
    pub change_failure_rate: Option<FailureRateMetric>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedMetric {
    #[serde(default)]
    pub classification: Option<String>,
}

impl ClassifiedMetric {
    /// True for the `Low` and `Medium` DORA bands.
    pub fn is_below_high(&self) -> bool {
        self.classification.as_deref().is_some_and(|c| {
            let c = c.trim();
            c.eq_ignore_ascii_case("low") || c.eq_ignore_ascii_case("medium")
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FailureRateMetric {
    #[serde(default)]
    pub rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RepositoryInfo {
    /// Any non-null, non-empty value counts as a recorded license; hosting
    /// APIs report either an SPDX string or a license object.
    #[serde(default)]
    pub license: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub pushed_at: Option<Timestamp>,
}

/// Activity stamp as hosting APIs report it: an ISO-8601 string or a Unix
/// epoch number in seconds or milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Timestamp {
    Text(String),
    Epoch(f64),
}

impl From<String> for Timestamp {
    fn from(raw: String) -> Self {
        Self::Text(raw)
    }
}

impl From<&str> for Timestamp {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

impl RepositoryInfo {
    pub fn has_license(&self) -> bool {
        match &self.license {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(Value::Bool(b)) => *b,
            Some(_) => true,
        }
    }

    pub fn description_chars(&self) -> usize {
        self.description
            .as_deref()
            .map(|d| d.chars().count())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TechHealthScore {
    #[serde(default)]
    pub overall: Option<f64>,
}

fn section<T: DeserializeOwned>(
    map: &Map<String, Value>,
    keys: &[&'static str],
) -> Result<Option<T>> {
    let Some((key, raw)) = keys
        .iter()
        .find_map(|key| map.get(*key).map(|raw| (*key, raw)))
    else {
        return Ok(None);
    };
    if raw.is_null() {
        return Ok(None);
    }
    T::deserialize(raw)
        .map(Some)
        .map_err(|source| AdvisorError::MalformedSection {
            section: key,
            source,
        })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
