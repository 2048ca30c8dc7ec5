use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recommendations::{Category, Priority, Recommendation};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub generated_at: DateTime<Utc>,
    pub source: ReportSource,
    pub recommendations: Vec<Recommendation>,
    pub summary: ReportSummary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total: usize,
    pub pressing: usize,
    pub by_priority: BTreeMap<Priority, usize>,
    pub by_category: BTreeMap<Category, usize>,
    pub mean_roi: f64,
}

impl ReportSummary {
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        let mut summary = Self {
            total: recommendations.len(),
            ..Self::default()
        };
        for rec in recommendations {
            *summary.by_priority.entry(rec.priority()).or_default() += 1;
            *summary.by_category.entry(rec.category()).or_default() += 1;
            if rec.priority().is_pressing() {
                summary.pressing += 1;
            }
        }
        if !recommendations.is_empty() {
            summary.mean_roi =
                recommendations.iter().map(|r| r.roi).sum::<f64>() / recommendations.len() as f64;
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::engine::fallback::fallback_recommendations;

    use super::*;

    #[test]
    fn summarizes_fallback_set() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let summary = ReportSummary::from_recommendations(&fallback_recommendations(now));
        assert_eq!(summary.total, 5);
        assert_eq!(summary.pressing, 3);
        assert_eq!(summary.by_priority.get(&Priority::High), Some(&3));
        assert_eq!(summary.by_category.get(&Category::Security), Some(&1));
        // ROIs: 5/3, 5/3, 3, 5, 1
        assert!((summary.mean_roi - (5.0 / 3.0 * 2.0 + 3.0 + 5.0 + 1.0) / 5.0).abs() < 1e-9);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let recommendations = fallback_recommendations(now);
        let report = RecommendationReport {
            generated_at: now,
            source: ReportSource::Fallback,
            summary: ReportSummary::from_recommendations(&recommendations),
            recommendations,
        };
        let value = serde_json::to_value(&report).expect("serialize failed");
        assert_eq!(value["generatedAt"], "2024-01-01T00:00:00Z");
        assert_eq!(value["source"], "fallback");
        assert!(value["recommendations"][0]["priorityScore"].is_number());
        let summary = &value["summary"];
        assert_eq!(summary["total"], 5);
        assert!(summary["meanRoi"].is_number());
        assert!(summary["byPriority"].is_object());
        assert!(summary["byCategory"].is_object());
        assert!(summary.get("mean_roi").is_none());
        assert!(value.get("generated_at").is_none());
    }

    #[test]
    fn empty_summary_has_zero_mean() {
        let summary = ReportSummary::from_recommendations(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.mean_roi, 0.0);
    }
}
