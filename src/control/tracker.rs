/// Per-signal assertion counting over a fetch trace

use super::decoder::{decode, InstructionFormat};
use super::signal::{ControlSignal, SignalVector};

/// Outcome of one fetch notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
  /// The instruction was decoded and counted.
  Decoded(SignalVector),
  /// Repeated notification for the address of the previous observation;
  /// nothing was decoded or counted.
  Suppressed,
}

/// Tracks the current signal vector and cumulative assertion counts.
///
/// The host delivers one `observe` per instruction-fetch notification.
/// Consecutive notifications for the same address are counted once: the
/// guard exists because a multi-step fetch/read cycle can touch the same
/// instruction word several times before the program counter advances.
///
/// Not internally synchronized. A host that delivers notifications from
/// more than one thread must serialize `observe`/`reset` behind a lock.
#[derive(Debug, Default)]
pub struct SignalTracker {
  last_addr: Option<u32>,
  current: SignalVector,
  counts: [u64; ControlSignal::COUNT],
}

impl SignalTracker {
  pub fn new() -> Self {
    Self::default()
  }

  /// Decode one fetched instruction and fold it into the counts.
  ///
  /// Returns `Suppressed` without touching any state when `address` equals
  /// the previously observed address. Only lines at High are counted;
  /// Low and DontCare leave their counters unchanged.
  pub fn observe(
    &mut self,
    address: u32,
    format: InstructionFormat,
    mnemonic: &str,
  ) -> Observation {
    if self.last_addr == Some(address) {
      return Observation::Suppressed;
    }
    self.last_addr = Some(address);

    let vector = decode(format, mnemonic);
    self.current = vector;
    for (signal, level) in vector.iter() {
      if level.is_high() {
        self.counts[signal.index()] += 1;
      }
    }

    Observation::Decoded(vector)
  }

  /// Clear all counts, the current vector, and the last-address guard.
  pub fn reset(&mut self) {
    *self = Self::default();
  }

  /// Signal vector of the most recently decoded instruction (all Low
  /// before the first observation and after a reset).
  pub fn current(&self) -> &SignalVector {
    &self.current
  }

  pub fn count(&self, signal: ControlSignal) -> u64 {
    self.counts[signal.index()]
  }

  /// Cumulative assertion counts in `ControlSignal::ALL` order.
  pub fn counts(&self) -> &[u64; ControlSignal::COUNT] {
    &self.counts
  }

  /// Sum of all nine counters. Callers normalizing display proportions
  /// must treat a zero total as "render empty", not divide by it.
  pub fn total_assertions(&self) -> u64 {
    self.counts.iter().sum()
  }
}
