//! Property-based tests for ranking and totality

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use repo_advisor::engine::enrich::enrich;
use repo_advisor::engine::rank::{compare, is_ranked, rank};
use repo_advisor::{generate, Category, Level, Priority, RecommendationDraft, Thresholds};
use serde_json::json;

fn level() -> impl Strategy<Value = Level> {
    prop_oneof![Just(Level::Low), Just(Level::Medium), Just(Level::High)]
}

fn priority() -> impl Strategy<Value = Priority> {
    prop::sample::select(Priority::ALL.to_vec())
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn draft() -> impl Strategy<Value = RecommendationDraft> {
    ("[A-Za-z ]{1,24}", category(), priority(), level(), level()).prop_map(
        |(title, category, priority, effort, impact)| {
            RecommendationDraft::new(&title, category, priority)
                .with_effort(effort)
                .with_impact(impact)
        },
    )
}

proptest! {
    #[test]
    fn ranked_output_respects_comparator(drafts in prop::collection::vec(draft(), 0..40)) {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ranked = rank(drafts.iter().map(|d| enrich(d, now)).collect());
        prop_assert_eq!(ranked.len(), drafts.len());
        prop_assert!(is_ranked(&ranked));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].priority_score >= pair[1].priority_score);
            if pair[0].priority_score == pair[1].priority_score {
                prop_assert!(pair[0].roi >= pair[1].roi);
                if pair[0].roi == pair[1].roi {
                    prop_assert!(pair[0].effort_score() <= pair[1].effort_score());
                }
            }
        }
    }

    #[test]
    fn ranking_is_stable_for_full_ties(count in 1usize..20) {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let recs: Vec<_> = (0..count)
            .map(|i| enrich(
                &RecommendationDraft::new(&format!("item {i}"), Category::Quality, Priority::Medium),
                now,
            ))
            .collect();
        let ranked = rank(recs.clone());
        prop_assert_eq!(ranked, recs);
    }

    #[test]
    fn urgency_stays_in_range(d in draft()) {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let rec = enrich(&d, now);
        prop_assert!((1..=5).contains(&rec.urgency));
        prop_assert!(compare(&rec, &rec).is_eq());
    }

    #[test]
    fn generate_is_total(
        coverage in prop::option::of(0.0f64..100.0),
        overall in prop::option::of(0.0f64..100.0),
        criticals in 0usize..15,
        rate in prop::option::of(0.0f64..100.0),
        with_repo in any::<bool>(),
    ) {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut analysis = json!({
            "security": { "vulnerabilities": vec![json!({ "severity": "Critical" }); criticals] },
            "codeQuality": { "testing": { "coverage": coverage } },
            "dora": { "changeFailureRate": { "rate": rate } },
            "techHealthScore": { "overall": overall }
        });
        if with_repo {
            analysis["repository"] = json!({ "description": "short", "pushed_at": "2023-01-01T00:00:00Z" });
        }
        let recs = generate(&analysis, &Thresholds::default(), now);
        prop_assert!(is_ranked(&recs));
        for rec in &recs {
            prop_assert!(!rec.title().is_empty());
            prop_assert!(!rec.id.is_empty());
        }
        if overall.map_or(true, |o| o < 80.0) {
            prop_assert!(!recs.is_empty());
        }
    }
}
