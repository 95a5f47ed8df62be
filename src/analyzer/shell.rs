use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Result};

pub enum Command {
  Step(u32), // Step N instructions
  Continue,
  Stats,
  Reset,
  Quit,
}

/// Interactive step-mode prompt.
pub struct Shell {
  editor: DefaultEditor,
}

impl Shell {
  pub fn new() -> Result<Self> {
    let editor =
      DefaultEditor::new().map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(Self { editor })
  }

  pub fn read_command(&mut self) -> Result<Command> {
    loop {
      match self.editor.readline("(ctrlscope) ") {
        Ok(line) => {
          let trimmed = line.trim();

          if !trimmed.is_empty() {
            let _ = self.editor.add_history_entry(trimmed);
          }

          // Empty input: step once
          if trimmed.is_empty() {
            return Ok(Command::Step(1));
          }

          // si command: step N times
          if let Some(num_str) = trimmed.strip_prefix("si") {
            let num_str = num_str.trim();

            if num_str.is_empty() {
              eprintln!("Error: 'si' requires a number, e.g., 'si 100'");
              continue;
            }

            return match num_str.parse::<u32>() {
              Ok(n) if n > 0 => Ok(Command::Step(n)),
              Ok(_) => {
                eprintln!("Error: step count must be greater than 0");
                continue;
              },
              Err(e) => {
                eprintln!("Error: invalid number '{}': {}", num_str, e);
                continue;
              },
            };
          }

          match trimmed {
            "c" => return Ok(Command::Continue),
            "s" => return Ok(Command::Stats),
            "r" => return Ok(Command::Reset),
            "q" => return Ok(Command::Quit),
            _ => {
              eprintln!(
                "Unknown command: '{}'. Enter to step, 'si N' to step N, 'c' to continue, 's' for statistics, 'r' to reset counters, 'q' to quit",
                trimmed
              );
            },
          }
        },
        Err(ReadlineError::Interrupted) => {
          // Ctrl-C: quit
          return Ok(Command::Quit);
        },
        Err(ReadlineError::Eof) => {
          // Ctrl-D: quit
          return Ok(Command::Quit);
        },
        Err(err) => {
          return Err(io::Error::new(io::ErrorKind::Other, err));
        },
      }
    }
  }
}
