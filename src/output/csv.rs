use anyhow::Result;

use crate::recommendations::Recommendation;

pub fn recommendations_to_csv(items: &[Recommendation]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "rank",
        "id",
        "title",
        "category",
        "priority",
        "effort",
        "impact",
        "priority_score",
        "roi",
        "urgency",
        "timeline",
        "resources",
    ])?;
    for (rank, item) in items.iter().enumerate() {
        writer.write_record([
            (rank + 1).to_string(),
            item.id.clone(),
            item.title().to_string(),
            item.category().to_string(),
            item.priority().to_string(),
            item.draft.effort.to_string(),
            item.draft.impact.to_string(),
            format!("{:.4}", item.priority_score),
            format!("{:.4}", item.roi),
            item.urgency.to_string(),
            item.draft.timeline.clone(),
            item.draft.resources.clone(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}
