use super::analyzer::ControlAnalyzer;
use super::config::AppConfig;
use super::report;
use super::shell::{Command, Shell};
use super::trace::{load_trace, TraceRecord};
use crate::control::SignalVector;
use log::info;
use serde_json::{json, Map, Value};
use std::fs::File;
use std::io::{BufWriter, Result, Write};
use std::path::Path;

/// One analysis run over a loaded instruction trace.
pub struct Session {
  config: AppConfig,
  analyzer: ControlAnalyzer,
  records: Vec<TraceRecord>,
  cursor: usize,
  signal_writer: Option<BufWriter<File>>,
}

impl Session {
  pub fn new(config: AppConfig) -> Result<Self> {
    let records = load_trace(Path::new(&config.trace.input))?;
    info!(
      "Loaded {} instruction(s) from {}",
      records.len(),
      config.trace.input
    );

    let signal_writer = if config.trace.output.is_empty() {
      None
    } else {
      let file = File::create(&config.trace.output)?;
      info!("Writing signal trace to {}", config.trace.output);
      Some(BufWriter::new(file))
    };

    Ok(Self {
      config,
      analyzer: ControlAnalyzer::new(),
      records,
      cursor: 0,
      signal_writer,
    })
  }

  pub fn run(&mut self) -> Result<()> {
    if self.config.analyzer.step_mode {
      self.run_step_mode()
    } else {
      self.run_continuous()
    }
  }

  fn run_continuous(&mut self) -> Result<()> {
    while self.step()? {}
    self.finish()
  }

  fn run_step_mode(&mut self) -> Result<()> {
    let mut shell = Shell::new()?;
    println!("Step mode - Enter to step, 'si N' to step N, 'c' to continue, 's' for statistics, 'r' to reset, 'q' to quit\n");

    'outer: loop {
      match shell.read_command()? {
        Command::Step(n) => {
          for _ in 0..n {
            if !self.step()? {
              println!("End of trace");
              break;
            }
          }
          if !self.config.analyzer.quiet {
            if let Some(line) = self.analyzer.current_instruction() {
              println!("  instruction: {}", line);
            }
            print!("{}", report::format_signal_panel(self.analyzer.tracker()));
          }
        },
        Command::Continue => {
          while self.step()? {}
          break 'outer;
        },
        Command::Stats => {
          report::print_report(self.analyzer.tracker(), self.analyzer.current_instruction());
        },
        Command::Reset => {
          self.analyzer.reset();
          println!("Counters cleared");
        },
        Command::Quit => break 'outer,
      }
    }

    self.finish()
  }

  /// Process the next fetch notification. Returns false at end of trace.
  pub fn step(&mut self) -> Result<bool> {
    let record = match self.records.get(self.cursor) {
      Some(record) => record.clone(),
      None => return Ok(false),
    };
    self.cursor += 1;

    if let Some(vector) = self.analyzer.process(&record) {
      if self.config.analyzer.activity_log && !self.config.analyzer.quiet {
        let bits = vector
          .iter()
          .map(|(signal, level)| format!("{}={}", signal.name(), level.bit()))
          .collect::<Vec<_>>()
          .join(" ");
        println!("[{:#010x}] {:<8} :: {}", record.address, record.mnemonic, bits);
      }
      self.write_signal_entry(&record, &vector)?;
    }

    Ok(true)
  }

  fn write_signal_entry(&mut self, record: &TraceRecord, vector: &SignalVector) -> Result<()> {
    if let Some(writer) = &mut self.signal_writer {
      let mut signals = Map::new();
      for (signal, level) in vector.iter() {
        signals.insert(
          signal.name().to_string(),
          Value::String(level.bit().to_string()),
        );
      }
      let entry = json!({
        "line": record.line,
        "address": format!("{:#010x}", record.address),
        "mnemonic": record.mnemonic,
        "signals": signals,
      });
      writeln!(writer, "{}", entry)?;
      writer.flush()?;
    }
    Ok(())
  }

  fn finish(&mut self) -> Result<()> {
    if let Some(writer) = &mut self.signal_writer {
      writer.flush()?;
    }
    report::print_report(self.analyzer.tracker(), self.analyzer.current_instruction());
    Ok(())
  }

  pub fn analyzer(&self) -> &ControlAnalyzer {
    &self.analyzer
  }
}
