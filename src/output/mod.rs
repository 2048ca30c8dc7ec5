pub mod csv;
pub mod table;

use anyhow::Result;
use serde::Serialize;

use crate::engine::report::RecommendationReport;
use crate::output::csv::recommendations_to_csv;
use crate::output::table::{render_recommendations_table, render_summary_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_report(report: &RecommendationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format!(
            "{}\n{}",
            render_recommendations_table(&report.recommendations),
            render_summary_table(report)
        )),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => recommendations_to_csv(&report.recommendations),
    }
}
