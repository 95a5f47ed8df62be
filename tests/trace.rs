use ctrlscope::analyzer::trace::{classify, parse_line};
use ctrlscope::control::InstructionFormat;

#[test]
fn parses_hex_and_decimal_addresses() {
  let record = parse_line("0x00400004 addi $sp,$sp,-16", 1)
    .expect("valid line")
    .expect("record");
  assert_eq!(record.address, 0x0040_0004);
  assert_eq!(record.mnemonic, "addi");
  assert_eq!(record.source, "addi $sp,$sp,-16");
  assert_eq!(record.line, 1);

  let record = parse_line("4194308 sw $ra,12($sp)", 2)
    .expect("valid line")
    .expect("record");
  assert_eq!(record.address, 4_194_308);
  assert_eq!(record.mnemonic, "sw");
}

#[test]
fn mnemonic_is_lowercased() {
  let record = parse_line("0x10 ADDI $t0,$t0,1", 1)
    .expect("valid line")
    .expect("record");
  assert_eq!(record.mnemonic, "addi");
}

#[test]
fn skips_blanks_and_comments() {
  assert!(parse_line("", 1).expect("ok").is_none());
  assert!(parse_line("   ", 2).expect("ok").is_none());
  assert!(parse_line("# address  source", 3).expect("ok").is_none());
}

#[test]
fn rejects_malformed_lines() {
  // Address without an instruction
  assert!(parse_line("0x00400000", 1).is_err());
  // Unparseable address
  let err = parse_line("notanaddr addi $t0,$t0,1", 7).expect_err("bad address");
  assert!(err.to_string().contains("line 7"), "error names the line: {}", err);
}

#[test]
fn classifies_the_basic_instruction_set() {
  use InstructionFormat::*;

  for mnemonic in ["add", "sub", "slt", "jr", "jalr", "syscall", "nop", "mfhi"] {
    assert_eq!(classify(mnemonic), RFormat, "{}", mnemonic);
  }
  for mnemonic in ["beq", "bne", "blez", "bgez"] {
    assert_eq!(classify(mnemonic), IBranchFormat, "{}", mnemonic);
  }
  for mnemonic in ["addi", "ori", "lui", "lw", "lbu", "sw", "sb"] {
    assert_eq!(classify(mnemonic), IFormat, "{}", mnemonic);
  }
  assert_eq!(classify("j"), JFormat);
  assert_eq!(classify("jal"), JFormat);
  assert_eq!(classify("li"), Other); // pseudo-instruction, not in the basic table
  assert_eq!(classify("mystery"), Other);
}
