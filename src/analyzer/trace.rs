/// Instruction trace frontend
///
/// The analyzer consumes fetch notifications recorded by the host
/// simulator as a text trace, one fetched instruction per line:
///
/// ```text
/// # address  source
/// 0x00400000 addi $sp,$sp,-16
/// 0x00400004 sw   $ra,12($sp)
/// ```
///
/// Addresses are hex with an `0x` prefix or decimal. Blank lines and `#`
/// comments are skipped. The trace producer is responsible for emitting
/// only read accesses issued by the simulated program.

use crate::control::InstructionFormat;
use std::fs;
use std::io;
use std::path::Path;

/// One fetch notification: where it happened and what was fetched.
#[derive(Debug, Clone)]
pub struct TraceRecord {
  /// 1-based line number in the trace file, for display.
  pub line: usize,
  pub address: u32,
  /// First token of the source text, lowercased.
  pub mnemonic: String,
  /// Assembly source as written in the trace.
  pub source: String,
}

/// Host-side structural classification of a mnemonic, the counterpart of
/// the instruction table the simulator decodes against. Unknown mnemonics
/// classify as Other; the decoder treats them as a defined fallback.
pub fn classify(mnemonic: &str) -> InstructionFormat {
  match mnemonic {
    "add" | "addu" | "sub" | "subu" | "and" | "or" | "xor" | "nor" | "slt" | "sltu" | "sll"
    | "srl" | "sra" | "sllv" | "srlv" | "srav" | "mult" | "multu" | "div" | "divu" | "mfhi"
    | "mflo" | "mthi" | "mtlo" | "movn" | "movz" | "jr" | "jalr" | "syscall" | "break"
    | "nop" => InstructionFormat::RFormat,
    "beq" | "bne" | "blez" | "bgtz" | "bltz" | "bgez" | "bltzal" | "bgezal" => {
      InstructionFormat::IBranchFormat
    },
    "addi" | "addiu" | "andi" | "ori" | "xori" | "slti" | "sltiu" | "lui" | "lw" | "lh" | "lb"
    | "lhu" | "lbu" | "sw" | "sh" | "sb" | "lwl" | "lwr" | "swl" | "swr" => {
      InstructionFormat::IFormat
    },
    "j" | "jal" => InstructionFormat::JFormat,
    _ => InstructionFormat::Other,
  }
}

fn parse_address(token: &str, line: usize) -> io::Result<u32> {
  let parsed = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
    Some(hex) => u32::from_str_radix(hex, 16),
    None => token.parse::<u32>(),
  };
  parsed.map_err(|e| {
    io::Error::new(
      io::ErrorKind::InvalidData,
      format!("trace line {}: bad address '{}': {}", line, token, e),
    )
  })
}

/// Parse one trace line. Returns None for blank lines and comments.
pub fn parse_line(text: &str, line: usize) -> io::Result<Option<TraceRecord>> {
  let trimmed = text.trim();
  if trimmed.is_empty() || trimmed.starts_with('#') {
    return Ok(None);
  }

  let (addr_token, rest) = match trimmed.split_once(char::is_whitespace) {
    Some(pair) => pair,
    None => {
      return Err(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("trace line {}: expected 'ADDRESS SOURCE', got '{}'", line, trimmed),
      ));
    },
  };

  let address = parse_address(addr_token, line)?;
  let source = rest.trim().to_string();
  let mnemonic = match source.split_whitespace().next() {
    Some(token) => token.to_lowercase(),
    None => {
      return Err(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("trace line {}: missing instruction after address", line),
      ));
    },
  };

  Ok(Some(TraceRecord {
    line,
    address,
    mnemonic,
    source,
  }))
}

/// Load a whole trace file. Malformed lines fail the load up front so a
/// bad trace is reported before any analysis starts.
pub fn load_trace(path: &Path) -> io::Result<Vec<TraceRecord>> {
  let content = fs::read_to_string(path).map_err(|e| {
    io::Error::new(
      io::ErrorKind::NotFound,
      format!("cannot read trace file {:?}: {}", path, e),
    )
  })?;

  let mut records = Vec::new();
  for (idx, text) in content.lines().enumerate() {
    if let Some(record) = parse_line(text, idx + 1)? {
      records.push(record);
    }
  }
  Ok(records)
}
