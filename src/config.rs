use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::recommendations::thresholds::Thresholds;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub top: Option<usize>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/repo-advisor/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        parsed
            .thresholds
            .validate()
            .with_context(|| format!("invalid thresholds in config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(top) = overrides.top {
            self.output.top = Some(top);
        }
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn default_template() -> String {
        let template = r#"# Rule thresholds. Values exactly on a threshold never trigger a rule.

[thresholds.complexity]
average_trigger = 15.0
average_escalation = 20.0
max_high_complexity_files = 10

[thresholds.coverage]
minimum = 70.0
critical = 50.0

[thresholds.documentation]
minimum_score = 60.0
min_description_chars = 50

[thresholds.staleness]
max_inactive_days = 90

[thresholds.vulnerabilities]
security_first_total = 10

[thresholds.dependencies]
max_outdated = 10

[thresholds.failure_rate]
max_change_failure_rate = 15.0

[thresholds.health_score]
comprehensive_improvement = 70.0
performance_monitoring = 80.0

[server]
host = "127.0.0.1"
port = 3001

[output]
# top = 10
"#;
        template.to_string()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}
