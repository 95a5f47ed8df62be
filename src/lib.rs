pub mod analyzer;
pub mod control;

pub use analyzer::log;
pub use analyzer::{AppConfig, ControlAnalyzer, Session};
pub use control::{decode, ControlSignal, InstructionFormat, SignalLevel, SignalTracker, SignalVector};
