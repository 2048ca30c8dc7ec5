pub mod scoring;
pub mod thresholds;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Security,
    Quality,
    DevOps,
    Legal,
    Documentation,
    Maintenance,
    Architecture,
    Performance,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Security,
        Category::Quality,
        Category::DevOps,
        Category::Legal,
        Category::Documentation,
        Category::Maintenance,
        Category::Architecture,
        Category::Performance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "Security",
            Self::Quality => "Quality",
            Self::DevOps => "DevOps",
            Self::Legal => "Legal",
            Self::Documentation => "Documentation",
            Self::Maintenance => "Maintenance",
            Self::Architecture => "Architecture",
            Self::Performance => "Performance",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn is_pressing(&self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared bucket for effort and impact estimates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown {kind}: {value}")]
pub struct VocabularyParseError {
    pub kind: &'static str,
    pub value: String,
}

fn parse_vocabulary<T: Copy>(
    kind: &'static str,
    raw: &str,
    candidates: &[(T, &'static str)],
) -> Result<T, VocabularyParseError> {
    let normalized = raw.trim();
    candidates
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(normalized))
        .map(|(value, _)| *value)
        .ok_or_else(|| VocabularyParseError {
            kind,
            value: raw.to_string(),
        })
}

impl FromStr for Category {
    type Err = VocabularyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let candidates = Category::ALL.map(|c| (c, c.as_str()));
        parse_vocabulary("category", s, &candidates)
    }
}

impl FromStr for Priority {
    type Err = VocabularyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let candidates = Priority::ALL.map(|p| (p, p.as_str()));
        parse_vocabulary("priority", s, &candidates)
    }
}

impl FromStr for Level {
    type Err = VocabularyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let candidates = [Level::Low, Level::Medium, Level::High].map(|l| (l, l.as_str()));
        parse_vocabulary("level", s, &candidates)
    }
}

/// A recommendation before scoring fields are attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub effort: Level,
    pub impact: Level,
    pub timeline: String,
    pub resources: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl RecommendationDraft {
    pub fn new(title: &str, category: Category, priority: Priority) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            category,
            priority,
            effort: Level::Medium,
            impact: Level::Medium,
            timeline: String::new(),
            resources: String::new(),
            details: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_effort(mut self, effort: Level) -> Self {
        self.effort = effort;
        self
    }

    pub fn with_impact(mut self, impact: Level) -> Self {
        self.impact = impact;
        self
    }

    pub fn with_timeline(mut self, timeline: &str) -> Self {
        self.timeline = timeline.to_string();
        self
    }

    pub fn with_resources(mut self, resources: &str) -> Self {
        self.resources = resources.to_string();
        self
    }

    pub fn with_details(mut self, details: &[&str]) -> Self {
        self.details = details.iter().map(|d| d.to_string()).collect();
        self
    }
}

/// Enriched, final output unit. Built once per engine invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    #[serde(flatten)]
    pub draft: RecommendationDraft,
    pub priority_score: f64,
    pub roi: f64,
    pub urgency: u8,
}

impl Recommendation {
    pub fn title(&self) -> &str {
        &self.draft.title
    }

    pub fn category(&self) -> Category {
        self.draft.category
    }

    pub fn priority(&self) -> Priority {
        self.draft.priority
    }

    pub fn effort_score(&self) -> f64 {
        scoring::level_score(self.draft.effort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_parses_case_insensitively() {
        assert_eq!("devops".parse::<Category>().ok(), Some(Category::DevOps));
        assert_eq!(" CRITICAL ".parse::<Priority>().ok(), Some(Priority::Critical));
        assert_eq!("medium".parse::<Level>().ok(), Some(Level::Medium));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn recommendation_serializes_flat_camel_case() {
        let rec = Recommendation {
            id: "sec-addressc-abc".to_string(),
            draft: RecommendationDraft::new("Address Critical", Category::Security, Priority::Critical)
                .with_effort(Level::High)
                .with_impact(Level::High),
            priority_score: 10.0,
            roi: 1.0,
            urgency: 4,
        };
        let value = serde_json::to_value(&rec).expect("serialize failed");
        assert_eq!(value["priorityScore"], 10.0);
        assert_eq!(value["category"], "Security");
        assert_eq!(value["title"], "Address Critical");
        assert!(value.get("details").is_none());

        let back: Recommendation = serde_json::from_value(value).expect("deserialize failed");
        assert_eq!(back, rec);
    }
}
