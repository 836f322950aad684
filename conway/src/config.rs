// config.rs - Simulation configuration
//
// Defaults mirror the classic console demo: a 20x40 board, 100
// generations, a tenth of a second between them, 30% of cells alive.

use std::time::Duration;

use crate::error::ConfigError;
use crate::grid::{check_density, check_dimensions};

/// Number of rows in the grid.
pub const DEFAULT_ROWS: usize = 20;

/// Number of columns in the grid.
pub const DEFAULT_COLS: usize = 40;

/// Generations rendered before the loop finishes.
pub const DEFAULT_GENERATIONS: u64 = 100;

/// Pause between generations, in seconds.
pub const DEFAULT_DELAY_SECS: f64 = 0.1;

/// Probability that a cell starts alive.
pub const DEFAULT_DENSITY: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub generations: u64,
    pub delay_secs: f64,
    pub density: f64,
    /// Seed for the random initial grid; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Start from a named pattern instead of a random grid.
    pub pattern: Option<String>,
    pub stop_on_cycle: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            generations: DEFAULT_GENERATIONS,
            delay_secs: DEFAULT_DELAY_SECS,
            density: DEFAULT_DENSITY,
            seed: None,
            pattern: None,
            stop_on_cycle: false,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimensions(self.rows, self.cols)?;
        check_density(self.density)?;
        self.delay()?;
        Ok(())
    }

    /// The inter-generation pause. Negative, non-finite and
    /// unrepresentably long delays are rejected.
    pub fn delay(&self) -> Result<Duration, ConfigError> {
        Duration::try_from_secs_f64(self.delay_secs)
            .map_err(|_| ConfigError::InvalidDelay(self.delay_secs))
    }

    /// Builds a config from command-line flags (program name already
    /// stripped), starting from the defaults.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            if flag == "--stop-on-cycle" {
                config.stop_on_cycle = true;
                continue;
            }

            let value = args.next().ok_or_else(|| ConfigError::MissingValue(flag.clone()))?;
            match flag.as_str() {
                "--rows" => config.rows = parse_value(&flag, &value)?,
                "--cols" => config.cols = parse_value(&flag, &value)?,
                "--generations" => config.generations = parse_value(&flag, &value)?,
                "--delay" => config.delay_secs = parse_value(&flag, &value)?,
                "--density" => config.density = parse_value(&flag, &value)?,
                "--seed" => config.seed = Some(parse_value(&flag, &value)?),
                "--pattern" => config.pattern = Some(value),
                _ => return Err(ConfigError::UnknownFlag(flag.clone())),
            }
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::UnparsableValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}
