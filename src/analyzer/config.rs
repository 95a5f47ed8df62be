use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Trace input/output section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TraceSection {
  /// Instruction trace to analyze.
  #[serde(default)]
  pub input: String,
  /// Optional JSON-lines signal trace written during the run.
  #[serde(default)]
  pub output: String,
}

/// Analyzer behavior section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalyzerSection {
  /// Suppress per-instruction output in continuous mode.
  #[serde(default)]
  pub quiet: bool,
  /// Interactive stepping through the trace.
  #[serde(default)]
  pub step_mode: bool,
  /// Print a signal log line for every decoded instruction.
  #[serde(default)]
  pub activity_log: bool,
}

/// Unified application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
  #[serde(default)]
  pub trace: TraceSection,
  #[serde(default)]
  pub analyzer: AnalyzerSection,
}

/// Load configuration from a toml file
pub fn load_config_file(path: &Path) -> io::Result<AppConfig> {
  let content = fs::read_to_string(path).map_err(|e| {
    io::Error::new(
      io::ErrorKind::NotFound,
      format!("cannot read config file {:?}: {}", path, e),
    )
  })?;

  toml::from_str::<AppConfig>(&content)
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("invalid config: {}", e)))
}

/// Apply CLI overrides on top of the loaded configuration
pub fn apply_cli_overrides(
  config: &mut AppConfig,
  quiet: bool,
  step: bool,
  activity_log: bool,
  trace_input: Option<&str>,
  trace_output: Option<&str>,
) {
  if quiet {
    config.analyzer.quiet = true;
  }
  if step {
    config.analyzer.step_mode = true;
  }
  if activity_log {
    config.analyzer.activity_log = true;
  }
  if let Some(input) = trace_input {
    config.trace.input = input.to_string();
  }
  if let Some(output) = trace_output {
    config.trace.output = output.to_string();
  }
}

/// Validate the final configuration
pub fn validate_config(config: &AppConfig) -> io::Result<()> {
  if config.trace.input.trim().is_empty() {
    return Err(io::Error::new(
      io::ErrorKind::InvalidData,
      "trace input cannot be empty, pass a trace file or set [trace] input".to_string(),
    ));
  }
  Ok(())
}
