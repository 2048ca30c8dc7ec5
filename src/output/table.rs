use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::engine::report::{RecommendationReport, ReportSource};
use crate::recommendations::{Priority, Recommendation};

pub fn render_recommendations_table(items: &[Recommendation]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "#",
        "Priority",
        "Title",
        "Category",
        "Effort",
        "Impact",
        "Score",
        "ROI",
        "Urgency",
        "Timeline",
    ]);
    for (rank, item) in items.iter().enumerate() {
        table.add_row(Row::from(vec![
            Cell::new(rank + 1),
            priority_cell(item.priority()),
            Cell::new(item.title()),
            Cell::new(item.category()),
            Cell::new(item.draft.effort),
            Cell::new(item.draft.impact),
            Cell::new(format!("{:.2}", item.priority_score)),
            Cell::new(format!("{:.2}", item.roi)),
            Cell::new(item.urgency),
            Cell::new(&item.draft.timeline),
        ]));
    }
    table.to_string()
}

pub fn render_summary_table(report: &RecommendationReport) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Value"]);

    let source = match report.source {
        ReportSource::Generated => Cell::new("analysis"),
        ReportSource::Fallback => Cell::new("fallback (input unreadable)").fg(Color::Yellow),
    };
    table.add_row(Row::from(vec![Cell::new("Source"), source]));
    table.add_row(vec![
        "Generated At".to_string(),
        report.generated_at.to_rfc3339(),
    ]);
    table.add_row(vec![
        "Recommendations".to_string(),
        report.summary.total.to_string(),
    ]);
    table.add_row(vec![
        "Critical / High".to_string(),
        report.summary.pressing.to_string(),
    ]);
    let by_category = report
        .summary
        .by_category
        .iter()
        .map(|(category, count)| format!("{category}: {count}"))
        .collect::<Vec<_>>()
        .join(", ");
    table.add_row(vec!["By Category".to_string(), by_category]);
    table.add_row(vec![
        "Mean ROI".to_string(),
        format!("{:.2}", report.summary.mean_roi),
    ]);
    table.to_string()
}

fn priority_cell(priority: Priority) -> Cell {
    let cell = Cell::new(priority);
    match priority {
        Priority::Critical => cell.fg(Color::Red),
        Priority::High => cell.fg(Color::Yellow),
        Priority::Medium => cell.fg(Color::Cyan),
        Priority::Low => cell,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    use crate::engine::build_report;
    use crate::recommendations::thresholds::Thresholds;

    use super::*;

    #[test]
    fn renders_every_title() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let report = build_report(&Value::Null, &Thresholds::default(), now, None);
        let rendered = render_recommendations_table(&report.recommendations);
        for rec in &report.recommendations {
            assert!(rendered.contains(rec.title()));
        }
        assert!(render_summary_table(&report).contains("fallback"));
    }
}
