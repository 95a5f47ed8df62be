/// Control signal decoder: instruction format + mnemonic -> signal vector

use super::signal::SignalLevel::{DontCare, High, Low};
use super::signal::{ControlSignal, SignalVector};

/// Structural classification of an instruction's encoding, supplied by the
/// host layer together with the lowercase mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionFormat {
  RFormat,
  IFormat,
  IBranchFormat,
  JFormat,
  Other,
}

const LOADS: [&str; 5] = ["lw", "lh", "lb", "lhu", "lbu"];
const STORES: [&str; 3] = ["sw", "sh", "sb"];

// Mnemonics that are R-format on the wire but do not follow the
// register-register writeback pattern.
const R_SPECIAL: [&str; 4] = ["nop", "syscall", "jr", "jalr"];

// Signal patterns in ControlSignal::ALL order:
// [Branch, Jump, ALUSrc, ALUOp, MemRead, MemWrite, RegWrite, RegDst, MemToReg]
const R_TYPE: SignalVector = SignalVector::new([Low, Low, Low, High, Low, Low, High, High, Low]);
const BRANCH: SignalVector =
  SignalVector::new([High, Low, Low, Low, Low, Low, Low, DontCare, DontCare]);
const JUMP: SignalVector = SignalVector::new([Low, High, Low, Low, Low, Low, Low, Low, Low]);
const LOAD: SignalVector = SignalVector::new([Low, Low, High, Low, High, Low, High, Low, High]);
const STORE: SignalVector =
  SignalVector::new([Low, Low, High, Low, Low, High, Low, DontCare, DontCare]);
const JUMP_REGISTER: SignalVector =
  SignalVector::new([Low, High, DontCare, Low, Low, Low, Low, DontCare, Low]);
const JUMP_LINK_REGISTER: SignalVector =
  SignalVector::new([Low, High, DontCare, Low, Low, Low, High, DontCare, Low]);
const IMMEDIATE: SignalVector =
  SignalVector::new([Low, Low, High, Low, Low, Low, High, Low, Low]);
const ALL_LOW: SignalVector = SignalVector::new([Low; ControlSignal::COUNT]);

/// Derive the control signal vector for one instruction.
///
/// Total over every input pair; unrecognized instructions drive every line
/// low rather than failing. The rules overlap on purpose, so they are
/// checked strictly in order: mnemonic special cases must win over the
/// generic format patterns.
pub fn decode(format: InstructionFormat, mnemonic: &str) -> SignalVector {
  if format == InstructionFormat::RFormat && !R_SPECIAL.contains(&mnemonic) {
    R_TYPE
  } else if format == InstructionFormat::IBranchFormat {
    BRANCH
  } else if format == InstructionFormat::JFormat {
    JUMP
  } else if LOADS.contains(&mnemonic) {
    LOAD
  } else if STORES.contains(&mnemonic) {
    STORE
  } else if mnemonic == "syscall" || mnemonic == "nop" {
    ALL_LOW
  } else if mnemonic == "jr" {
    JUMP_REGISTER
  } else if mnemonic == "jalr" {
    JUMP_LINK_REGISTER
  } else if format == InstructionFormat::IFormat {
    IMMEDIATE
  } else {
    ALL_LOW
  }
}
