//! Turns a repository analysis report into a ranked list of improvement
//! recommendations.
//!
//! The pipeline is pure apart from the clock, which every entry point takes
//! as an argument:
//!
//! ```text
//! analysis -> generators (security, quality, devops, repository, architecture)
//!          -> enrich (id, priority score, roi, urgency) -> rank
//! ```

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod generators;
pub mod output;
pub mod recommendations;
pub mod server;

pub use analysis::AnalysisInput;
pub use engine::report::{RecommendationReport, ReportSource, ReportSummary};
pub use engine::{build_report, generate, generate_from_input, generate_now, try_generate};
pub use error::AdvisorError;
pub use recommendations::thresholds::Thresholds;
pub use recommendations::{Category, Level, Priority, Recommendation, RecommendationDraft};
