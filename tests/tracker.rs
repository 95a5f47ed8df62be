use ctrlscope::control::ControlSignal::{self, *};
use ctrlscope::control::InstructionFormat::{self, *};
use ctrlscope::control::{Observation, SignalLevel, SignalTracker};

#[test]
fn duplicate_address_is_suppressed() {
  let mut tracker = SignalTracker::new();

  assert!(matches!(tracker.observe(100, RFormat, "add"), Observation::Decoded(_)));
  assert_eq!(tracker.observe(100, RFormat, "add"), Observation::Suppressed);
  assert_eq!(tracker.count(RegWrite), 1);

  assert!(matches!(tracker.observe(104, IFormat, "addi"), Observation::Decoded(_)));
  assert_eq!(tracker.count(RegWrite), 2);
  assert_eq!(tracker.count(MemRead), 0);
}

#[test]
fn suppression_leaves_every_counter_untouched() {
  let mut tracker = SignalTracker::new();
  tracker.observe(0x0040_0000, IFormat, "lw");
  let before = *tracker.counts();

  assert_eq!(tracker.observe(0x0040_0000, IFormat, "lw"), Observation::Suppressed);
  assert_eq!(tracker.counts(), &before);
}

#[test]
fn revisiting_an_address_later_recounts() {
  // The guard only collapses back-to-back notifications; a loop that
  // comes back to the same address counts again.
  let mut tracker = SignalTracker::new();
  tracker.observe(100, RFormat, "add");
  tracker.observe(104, IBranchFormat, "bne");
  tracker.observe(100, RFormat, "add");

  assert_eq!(tracker.count(RegWrite), 2);
  assert_eq!(tracker.count(Branch), 1);
}

#[test]
fn counts_grow_monotonically() {
  let mut tracker = SignalTracker::new();
  let program: [(u32, InstructionFormat, &str); 4] = [
    (0, RFormat, "add"),
    (4, IFormat, "lw"),
    (8, IFormat, "sw"),
    (12, JFormat, "j"),
  ];

  // counts() is in ControlSignal::ALL order
  let mut previous = *tracker.counts();
  for (addr, format, mnemonic) in program {
    tracker.observe(addr, format, mnemonic);
    let current = *tracker.counts();
    for (i, signal) in ControlSignal::ALL.iter().enumerate() {
      assert!(current[i] >= previous[i], "count for {} decreased", signal.name());
    }
    previous = current;
  }
}

#[test]
fn total_is_the_sum_of_all_counters() {
  let mut tracker = SignalTracker::new();
  assert_eq!(tracker.total_assertions(), 0);

  tracker.observe(0, RFormat, "add");
  tracker.observe(4, IFormat, "lw");
  tracker.observe(8, IBranchFormat, "beq");
  tracker.observe(12, RFormat, "jr");

  let sum: u64 = tracker.counts().iter().sum();
  assert_eq!(tracker.total_assertions(), sum);
  assert_eq!(sum, 3 + 4 + 1 + 1); // add, lw, beq, jr assertions
}

#[test]
fn dont_care_is_never_counted() {
  let mut tracker = SignalTracker::new();
  tracker.observe(0, IFormat, "sw");

  // sw leaves RegDst and MemToReg at don't-care.
  assert_eq!(tracker.current()[RegDst], SignalLevel::DontCare);
  assert_eq!(tracker.count(RegDst), 0);
  assert_eq!(tracker.count(MemToReg), 0);
  assert_eq!(tracker.count(MemWrite), 1);
}

#[test]
fn reset_restores_the_initial_state() {
  let mut tracker = SignalTracker::new();
  tracker.observe(100, RFormat, "add");
  tracker.observe(104, IFormat, "addi");
  assert!(tracker.total_assertions() > 0);

  tracker.reset();

  assert_eq!(tracker.counts(), &[0; ControlSignal::COUNT]);
  assert_eq!(tracker.total_assertions(), 0);
  for (_, level) in tracker.current().iter() {
    assert_eq!(level, SignalLevel::Low);
  }

  // The address sentinel is restored too: the next notification counts
  // even if it repeats the last address seen before the reset.
  assert!(matches!(tracker.observe(104, IFormat, "addi"), Observation::Decoded(_)));
  assert_eq!(tracker.count(RegWrite), 1);

  // reset is idempotent
  tracker.reset();
  tracker.reset();
  assert_eq!(tracker.total_assertions(), 0);
}
