/// Host boundary: feeds fetch notifications into the signal tracker

use super::trace::{classify, TraceRecord};
use crate::control::{Observation, SignalTracker, SignalVector};

/// Owns the tracker and the display-facing view of the instruction under
/// consideration. The host must mutate tracker state only through
/// `process` and `reset`.
#[derive(Debug, Default)]
pub struct ControlAnalyzer {
  tracker: SignalTracker,
  current_line: Option<String>,
}

impl ControlAnalyzer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Decode and count one fetch notification. Returns None when the
  /// notification repeated the previous address and was suppressed.
  pub fn process(&mut self, record: &TraceRecord) -> Option<SignalVector> {
    let format = classify(&record.mnemonic);
    match self.tracker.observe(record.address, format, &record.mnemonic) {
      Observation::Decoded(vector) => {
        self.current_line = Some(format!("{}: {}", record.line, record.source));
        Some(vector)
      },
      Observation::Suppressed => None,
    }
  }

  /// Clear counts and the current-instruction view.
  pub fn reset(&mut self) {
    self.tracker.reset();
    self.current_line = None;
  }

  pub fn tracker(&self) -> &SignalTracker {
    &self.tracker
  }

  /// "line: source" of the most recently decoded instruction.
  pub fn current_instruction(&self) -> Option<&str> {
    self.current_line.as_deref()
  }
}
