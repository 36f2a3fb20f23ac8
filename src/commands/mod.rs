//! Command implementations

pub mod play;
pub mod simulate;

pub use play::{PlayerInput, play_with_io, run_play};
pub use simulate::{RoundResult, SimulationConfig, SimulationResult, play_round, run_simulation};
