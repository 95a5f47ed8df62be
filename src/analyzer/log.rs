/// Process logging setup

use log::LevelFilter;

/// Initialize env_logger: info by default, RUST_LOG overrides, no
/// timestamps (the analyzer has no notion of wall-clock time).
pub fn init_log() {
  let _ = env_logger::Builder::from_default_env()
    .filter_level(LevelFilter::Info)
    .format_timestamp(None)
    .try_init();
}
