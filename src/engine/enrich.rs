use chrono::{DateTime, Utc};

use crate::recommendations::scoring::{priority_score, roi, urgency};
use crate::recommendations::{Category, Recommendation, RecommendationDraft};

pub fn enrich(draft: &RecommendationDraft, now: DateTime<Utc>) -> Recommendation {
    Recommendation {
        id: recommendation_id(draft.category, &draft.title, now),
        priority_score: priority_score(draft.priority, draft.impact, draft.effort),
        roi: roi(draft.impact, draft.effort),
        urgency: urgency(draft.priority, draft.category),
        draft: draft.clone(),
    }
}

pub fn enrich_all(drafts: &[RecommendationDraft], now: DateTime<Utc>) -> Vec<Recommendation> {
    drafts.iter().map(|draft| enrich(draft, now)).collect()
}

/// `<cat>-<title>-<millis base36>`: three letters of the category, up to eight
/// alphanumerics of the title. Two drafts with the same prefixes enriched in
/// the same millisecond share an id, so ids are display handles, not keys.
pub fn recommendation_id(category: Category, title: &str, now: DateTime<Utc>) -> String {
    let category_code = category
        .as_str()
        .chars()
        .take(3)
        .collect::<String>()
        .to_ascii_lowercase();
    let title_code = title
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(8)
        .collect::<String>()
        .to_ascii_lowercase();
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    format!("{category_code}-{title_code}-{}", to_base36(millis))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).to_string()
}
