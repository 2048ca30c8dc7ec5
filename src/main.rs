use std::fs;
use std::io::Read;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use repo_advisor::config::{Config, ConfigOverrides};
use repo_advisor::engine::build_report;
use repo_advisor::engine::fallback::fallback_recommendations;
use repo_advisor::engine::report::{RecommendationReport, ReportSource, ReportSummary};
use repo_advisor::output::{render_json, render_report, OutputFormat};
use repo_advisor::server::run_server;
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputArg {
    Table,
    Json,
    Csv,
}

impl From<OutputArg> for OutputFormat {
    fn from(value: OutputArg) -> Self {
        match value {
            OutputArg::Table => OutputFormat::Table,
            OutputArg::Json => OutputFormat::Json,
            OutputArg::Csv => OutputFormat::Csv,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "repo-advisor",
    about = "Ranked improvement recommendations from repository analysis reports"
)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputArg::Table)]
    output: OutputArg,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate recommendations for an analysis report (`-` reads stdin)
    Recommend {
        #[arg(short, long, default_value = "-")]
        input: String,
        #[arg(long)]
        top: Option<usize>,
        /// Evaluate as of this RFC 3339 instant instead of the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
    /// Print the baseline recommendations used when a report is unreadable
    Fallback,
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(&config_path))?;

    match cli.command {
        Commands::Recommend { input, top, now } => {
            if top == Some(0) {
                return Err(anyhow!("--top must be at least 1"));
            }
            config.apply_overrides(ConfigOverrides {
                top,
                ..ConfigOverrides::default()
            });
            let analysis = read_analysis(&input)?;
            let now = now.unwrap_or_else(Utc::now);
            let report = build_report(&analysis, &config.thresholds, now, config.output.top);
            if report.source == ReportSource::Fallback {
                warn!("analysis report could not be read; showing baseline recommendations");
            }
            println!("{}", render_report(&report, cli.output.into())?);
        }
        Commands::Fallback => {
            let now = Utc::now();
            let recommendations = fallback_recommendations(now);
            let report = RecommendationReport {
                generated_at: now,
                source: ReportSource::Fallback,
                summary: ReportSummary::from_recommendations(&recommendations),
                recommendations,
            };
            println!("{}", render_report(&report, cli.output.into())?);
        }
        Commands::Serve { host, port } => {
            config.apply_overrides(ConfigOverrides {
                host,
                port,
                ..ConfigOverrides::default()
            });
            let bind = format!("{}:{}", config.server.host, config.server.port);
            let addr: SocketAddr = bind
                .parse()
                .map_err(|e| anyhow!("invalid bind address {bind}: {e}"))?;
            return run_server(config, addr).await;
        }
        Commands::Config { init, show } => {
            handle_config_command(init, show, &config, &config_path)?;
        }
    }
    Ok(())
}

/// Unparseable JSON is an I/O-level error; well-formed JSON of the wrong
/// shape is left to the engine, which answers it with the fallback set.
fn read_analysis(input: &str) -> Result<Value> {
    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed reading analysis report from stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("failed reading analysis report: {input}"))?
    };
    serde_json::from_str(&raw).with_context(|| format!("analysis report is not valid JSON: {input}"))
}

fn handle_config_command(init: bool, show: bool, config: &Config, path: &Path) -> Result<()> {
    if init {
        if path.exists() {
            warn!("config already exists at {}", path.display());
        } else {
            Config::write_template(path)?;
            info!("wrote config template to {}", path.display());
        }
    }
    if show || !init {
        println!("{}", render_json(config)?);
    }
    Ok(())
}
