// simulation.rs - The generation loop: render, advance, wait, repeat
//
// Generations are atomic. The stop signal is only honoured between them,
// either before a generation is rendered or while the loop is waiting out
// the delay, so a renderer never sees a half-computed grid.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use log::{debug, info, warn};
use rand::Rng;
use tokio::sync::watch;

use crate::config::SimulationConfig;
use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::patterns;
use crate::render::Renderer;
use crate::rules::GridBuffers;

const CYCLE_HISTORY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every requested generation was rendered.
    Completed,
    /// The stop signal fired between generations.
    Cancelled,
    /// The grid rendered as `generation` (1-based) matched one of the recent
    /// generations before it.
    CycleDetected { generation: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub rendered: u64,
    pub outcome: RunOutcome,
    /// The grid the loop would render next: the successor of the last
    /// rendered generation when `Completed` or `Cancelled` mid-run, the last
    /// rendered grid itself on `CycleDetected`, and the initial grid when
    /// nothing was rendered.
    pub final_grid: Grid,
}

/// Fires the matching [`StopSignal`].
#[derive(Debug)]
pub struct StopHandle {
    tx: watch::Sender<bool>,
}

impl StopHandle {
    pub fn stop(&self) {
        // Nobody listening means the loop is already gone.
        let _ = self.tx.send(true);
    }
}

#[derive(Debug, Clone)]
pub struct StopSignal {
    rx: watch::Receiver<bool>,
}

pub fn stop_channel() -> (StopHandle, StopSignal) {
    let (tx, rx) = watch::channel(false);
    (StopHandle { tx }, StopSignal { rx })
}

impl StopSignal {
    /// A signal that never fires.
    pub fn never() -> Self {
        stop_channel().1
    }

    pub fn is_stopped(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once stop has been requested. Pends forever if the handle
    /// was dropped without stopping.
    pub async fn stopped(&mut self) {
        loop {
            let stopped = *self.rx.borrow_and_update();
            if stopped {
                return;
            }
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

/// Remembers fingerprints of the last few generations, like the viewer's
/// "is it stuck?" check.
#[derive(Debug, Default)]
struct CycleDetector {
    history: [u64; CYCLE_HISTORY],
    count: usize,
}

impl CycleDetector {
    fn fingerprint(grid: &Grid) -> u64 {
        let mut hasher = DefaultHasher::new();
        grid.hash(&mut hasher);
        hasher.finish()
    }

    /// Records `grid`, reporting whether it was already in the history.
    fn check(&mut self, grid: &Grid) -> bool {
        let hash = Self::fingerprint(grid);
        let filled = self.count.min(CYCLE_HISTORY);
        if self.history[..filled].contains(&hash) {
            return true;
        }
        self.history[self.count % CYCLE_HISTORY] = hash;
        self.count += 1;
        false
    }
}

#[derive(Debug)]
pub struct SimulationLoop {
    state: LoopState,
    stop_on_cycle: bool,
}

impl Default for SimulationLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            stop_on_cycle: false,
        }
    }

    /// Finish early once a rendered generation repeats a recent one.
    /// `run` takes this from the config instead.
    pub fn stop_on_cycle(mut self, enabled: bool) -> Self {
        self.stop_on_cycle = enabled;
        self
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Validates `config`, builds the initial grid (from `config.pattern`
    /// if set, otherwise randomly from `rng`) and runs it.
    pub async fn run<R, G>(
        &mut self,
        config: &SimulationConfig,
        rng: &mut G,
        renderer: &mut R,
        stop: &mut StopSignal,
    ) -> Result<RunReport>
    where
        R: Renderer,
        G: Rng + ?Sized,
    {
        self.ensure_idle()?;
        config.validate()?;
        let delay = config.delay()?;

        let initial = match &config.pattern {
            Some(name) => patterns::find(name)?.centered(config.rows, config.cols)?,
            None => Grid::random(config.rows, config.cols, config.density, rng)?,
        };
        info!(
            "seeded {}x{} grid with {} live cells",
            config.rows,
            config.cols,
            initial.population()
        );

        self.stop_on_cycle = config.stop_on_cycle;
        self.run_from(initial, config.generations, delay, renderer, stop).await
    }

    /// Drives an already built grid for `generations` generations.
    pub async fn run_from<R: Renderer>(
        &mut self,
        initial: Grid,
        generations: u64,
        delay: Duration,
        renderer: &mut R,
        stop: &mut StopSignal,
    ) -> Result<RunReport> {
        self.ensure_idle()?;
        self.state = LoopState::Running;
        info!("running {generations} generations, {delay:?} apart");

        let mut buffers = GridBuffers::new(initial);
        let mut cycles = CycleDetector::default();
        let mut rendered = 0;
        let mut outcome = RunOutcome::Completed;

        while rendered < generations {
            if stop.is_stopped() {
                outcome = RunOutcome::Cancelled;
                break;
            }

            renderer.render(buffers.current());
            rendered += 1;

            if self.stop_on_cycle && cycles.check(buffers.current()) {
                info!("generation {rendered} repeats an earlier one, stopping");
                outcome = RunOutcome::CycleDetected {
                    generation: rendered,
                };
                break;
            }

            let population = buffers.step().population();
            debug!("generation {rendered}: {population} live cells");

            if rendered < generations && wait(delay, stop).await {
                outcome = RunOutcome::Cancelled;
                break;
            }
        }

        if outcome == RunOutcome::Cancelled {
            warn!("simulation cancelled after {rendered} generations");
        }
        info!("simulation finished after {rendered} generations");

        self.state = LoopState::Finished;
        Ok(RunReport {
            rendered,
            outcome,
            final_grid: buffers.into_current(),
        })
    }

    fn ensure_idle(&self) -> Result<()> {
        match self.state {
            LoopState::Idle => Ok(()),
            _ => Err(LifeError::AlreadyStarted),
        }
    }
}

/// Waits out the inter-generation delay. Returns `true` if stopped meanwhile;
/// a stop that lands as the delay ends is caught before the next render.
async fn wait(delay: Duration, stop: &mut StopSignal) -> bool {
    if delay.is_zero() {
        tokio::task::yield_now().await;
        return false;
    }

    tokio::select! {
        _ = tokio::time::sleep(delay) => false,
        _ = stop.stopped() => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn detector_spots_repeats_within_its_window() {
        let a = Grid::from_live_cells(3, 3, &[(0, 0)]).unwrap();
        let b = Grid::from_live_cells(3, 3, &[(1, 1)]).unwrap();
        let mut detector = CycleDetector::default();

        assert!(!detector.check(&a));
        assert!(!detector.check(&b));
        assert!(detector.check(&a));
    }

    #[test]
    fn detector_forgets_old_generations() {
        let mut detector = CycleDetector::default();
        let first = Grid::from_live_cells(4, 4, &[(0, 0)]).unwrap();
        assert!(!detector.check(&first));

        for index in 1..=CYCLE_HISTORY {
            let grid = Grid::from_live_cells(4, 4, &[(index / 4, index % 4)]).unwrap();
            assert!(!detector.check(&grid));
        }
        assert!(!detector.check(&first));
    }

    #[tokio::test]
    async fn stop_signal_resolves_after_stop() {
        let (handle, mut signal) = stop_channel();
        assert!(!signal.is_stopped());
        handle.stop();
        signal.stopped().await;
        assert!(signal.is_stopped());
    }

    #[tokio::test]
    async fn second_run_is_rejected() {
        let mut sim = SimulationLoop::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut renderer = |_: &Grid| {};
        let config = SimulationConfig {
            generations: 1,
            delay_secs: 0.0,
            ..Default::default()
        };

        sim.run(&config, &mut rng, &mut renderer, &mut StopSignal::never()).await.unwrap();
        assert_eq!(sim.state(), LoopState::Finished);
        assert_eq!(
            sim.run(&config, &mut rng, &mut renderer, &mut StopSignal::never()).await,
            Err(LifeError::AlreadyStarted)
        );
    }

    #[tokio::test]
    async fn oversized_delay_is_rejected_before_rendering() {
        let mut sim = SimulationLoop::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut frames = 0;
        let mut renderer = |_: &Grid| frames += 1;
        let config = SimulationConfig {
            generations: 2,
            delay_secs: 1e20,
            ..Default::default()
        };

        let result = sim
            .run(&config, &mut rng, &mut renderer, &mut StopSignal::never())
            .await;

        assert_eq!(result, Err(LifeError::InvalidConfig(ConfigError::InvalidDelay(1e20))));
        assert_eq!(sim.state(), LoopState::Idle);
        assert_eq!(frames, 0);
    }
}
