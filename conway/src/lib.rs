// lib.rs - Conway's Game of Life on a fixed, clamped-edge grid
//
// `SimulationLoop` renders a generation through a `Renderer`, computes its
// successor with `advance`, waits, and repeats.

pub mod config;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod simulation;

pub use config::SimulationConfig;
pub use error::{ConfigError, LifeError, Result};
pub use grid::Grid;
pub use neighbors::count_live_neighbors;
pub use patterns::{Pattern, PATTERNS};
pub use render::{Renderer, TerminalRenderer};
pub use rules::{advance, GridBuffers};
pub use simulation::{
    stop_channel, LoopState, RunOutcome, RunReport, SimulationLoop, StopHandle, StopSignal,
};
