use clap::Parser;
use ctrlscope::analyzer::config::{apply_cli_overrides, load_config_file, validate_config, AppConfig};
use ctrlscope::analyzer::log::init_log;
use ctrlscope::analyzer::Session;
use std::io;
use std::path::Path;

/// Ctrlscope - a MIPS control unit analyzer
#[derive(Parser, Debug)]
#[command(name = "ctrlscope")]
#[command(version = "0.1.0")]
#[command(about = "Decodes control signals over an instruction trace", long_about = None)]
struct Args {
  /// Instruction trace to analyze
  #[arg(value_name = "TRACE")]
  trace: Option<String>,

  /// Configuration file (toml)
  #[arg(short, long, value_name = "FILE")]
  config: Option<String>,

  /// Enable step mode (interactive stepping)
  #[arg(short, long)]
  step: bool,

  /// Quiet mode (suppress per-instruction output)
  #[arg(short, long)]
  quiet: bool,

  /// Log the signal vector of every decoded instruction
  #[arg(short, long)]
  log: bool,

  /// Signal trace output path (JSON lines)
  #[arg(long, value_name = "FILE")]
  output: Option<String>,
}

fn main() -> io::Result<()> {
  init_log();

  let args = Args::parse();

  let mut config = match args.config.as_deref() {
    Some(path) => load_config_file(Path::new(path))?,
    None => AppConfig::default(),
  };

  apply_cli_overrides(
    &mut config,
    args.quiet,
    args.step,
    args.log,
    args.trace.as_deref(),
    args.output.as_deref(),
  );
  validate_config(&config)?;

  let mut session = Session::new(config)?;
  session.run()
}
