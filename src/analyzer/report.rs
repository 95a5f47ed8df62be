/// Text report: current signal levels and per-signal statistics

use crate::control::{ControlSignal, SignalTracker};

const BAR_WIDTH: usize = 20;

/// Proportion bar for one counter. A zero total renders an empty bar
/// instead of dividing.
pub fn format_bar(count: u64, total: u64) -> String {
  let filled = if total == 0 {
    0
  } else {
    (count as usize * BAR_WIDTH) / total as usize
  };
  let mut bar = String::with_capacity(BAR_WIDTH + 2);
  bar.push('[');
  for i in 0..BAR_WIDTH {
    bar.push(if i < filled { '=' } else { ' ' });
  }
  bar.push(']');
  bar
}

/// One "Name: LEVEL" line per control line, display order.
pub fn format_signal_panel(tracker: &SignalTracker) -> String {
  let mut out = String::new();
  for (signal, level) in tracker.current().iter() {
    out.push_str(&format!("  {:<9} {}\n", format!("{}:", signal.name()), level));
  }
  out
}

/// Count, bar, and percentage per control line.
pub fn format_statistics(tracker: &SignalTracker) -> String {
  let total = tracker.total_assertions();
  let mut out = String::new();
  for &signal in ControlSignal::ALL.iter() {
    let count = tracker.count(signal);
    let percent = if total == 0 {
      0.0
    } else {
      count as f64 * 100.0 / total as f64
    };
    out.push_str(&format!(
      "  {:<9} {:>6}  {}  {:>5.1}%\n",
      format!("{}:", signal.name()),
      count,
      format_bar(count, total),
      percent
    ));
  }
  out
}

pub fn print_report(tracker: &SignalTracker, current_instruction: Option<&str>) {
  println!("\n--- Control Signals ---");
  if let Some(line) = current_instruction {
    println!("  instruction: {}", line);
  }
  print!("{}", format_signal_panel(tracker));
  println!("--- Signal Statistics ---");
  print!("{}", format_statistics(tracker));
  println!("  total assertions: {}", tracker.total_assertions());
  println!("--- End Report ---\n");
}
