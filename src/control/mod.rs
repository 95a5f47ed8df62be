pub mod decoder;
pub mod signal;
pub mod tracker;

pub use decoder::{decode, InstructionFormat};
pub use signal::{ControlSignal, SignalLevel, SignalVector};
pub use tracker::{Observation, SignalTracker};
