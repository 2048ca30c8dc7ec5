use std::cmp::Ordering;

use crate::recommendations::Recommendation;

/// Higher priority score first, then higher ROI, then lower effort.
pub fn compare(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.priority_score
        .total_cmp(&a.priority_score)
        .then_with(|| b.roi.total_cmp(&a.roi))
        .then_with(|| a.effort_score().total_cmp(&b.effort_score()))
}

/// Stable: items tying on all three keys keep their emission order.
pub fn rank(mut recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    recommendations.sort_by(compare);
    recommendations
}

pub fn is_ranked(recommendations: &[Recommendation]) -> bool {
    recommendations
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}
