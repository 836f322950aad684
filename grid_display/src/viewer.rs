// viewer.rs - Viewer state: owns the runtime, starts and stops simulation runs

use eframe::egui;
use egui::Color32;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::runtime::Runtime;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use conway::{
    stop_channel, Grid, Renderer, RunReport, SimulationConfig, SimulationLoop, StopHandle, PATTERNS,
};

/// One rendered generation, as seen by the UI.
#[derive(Clone)]
pub struct Frame {
    pub generation: u64,
    pub grid: Grid,
}

/// Publishes every generation to the UI thread and wakes it up.
pub struct SnapshotRenderer {
    tx: watch::Sender<Option<Frame>>,
    ctx: egui::Context,
    generation: u64,
}

impl Renderer for SnapshotRenderer {
    fn render(&mut self, grid: &Grid) {
        self.generation += 1;
        let frame = Frame {
            generation: self.generation,
            grid: grid.clone(),
        };
        // The viewer may have moved on to a newer run.
        let _ = self.tx.send(Some(frame));
        self.ctx.request_repaint();
    }
}

struct ActiveRun {
    stop: StopHandle,
    task: JoinHandle<conway::Result<RunReport>>,
}

pub struct LifeViewer {
    runtime: Runtime,
    ctx: egui::Context,
    frames: watch::Receiver<Option<Frame>>,
    active: Option<ActiveRun>,

    pub config: SimulationConfig,
    pub speed: f32,                     // generations per second
    pub selected_pattern: usize,        // 0 = random, i + 1 = PATTERNS[i]
    pub live_color: Color32,
    pub dead_color: Color32,
    pub status: String,
}

impl LifeViewer {
    pub fn new(ctx: egui::Context, runtime: Runtime) -> Self {
        let (_, frames) = watch::channel(None);
        let config = SimulationConfig {
            rows: 50,
            cols: 50,
            generations: 1000,
            stop_on_cycle: true,
            ..Default::default()
        };

        Self {
            runtime,
            ctx,
            frames,
            active: None,
            speed: (1.0 / config.delay_secs) as f32,
            config,
            selected_pattern: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            status: String::from("Idle"),
        }
    }

    pub fn pattern_name(&self) -> &'static str {
        match self.selected_pattern {
            0 => "Random",
            i => PATTERNS[i - 1].name,
        }
    }

    pub fn latest_frame(&self) -> Option<Frame> {
        self.frames.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.active.as_ref().is_some_and(|run| !run.task.is_finished())
    }

    pub fn start(&mut self) {
        self.stop();

        let mut config = self.config.clone();
        config.delay_secs = 1.0 / f64::from(self.speed.max(0.01));
        config.pattern = match self.selected_pattern {
            0 => None,
            i => Some(PATTERNS[i - 1].name.to_string()),
        };

        let (tx, frames) = watch::channel(None);
        self.frames = frames;
        let mut renderer = SnapshotRenderer {
            tx,
            ctx: self.ctx.clone(),
            generation: 0,
        };
        let (stop, mut signal) = stop_channel();

        info!("starting {} run on a {}x{} grid", self.pattern_name(), config.rows, config.cols);
        let task = self.runtime.spawn(async move {
            let mut rng = StdRng::from_os_rng();
            SimulationLoop::new().run(&config, &mut rng, &mut renderer, &mut signal).await
        });

        self.active = Some(ActiveRun { stop, task });
        self.status = String::from("Running");
    }

    pub fn stop(&mut self) {
        if let Some(run) = &self.active {
            run.stop.stop();
        }
        self.collect_finished(true);
    }

    /// Picks up the result of a finished run. With `wait`, blocks until the
    /// current run (already told to stop) has wound down.
    pub fn collect_finished(&mut self, wait: bool) {
        let finished = self.active.as_ref().is_some_and(|run| run.task.is_finished());
        if !finished && !wait {
            return;
        }
        let Some(run) = self.active.take() else {
            return;
        };

        self.status = match self.runtime.block_on(run.task) {
            Ok(Ok(report)) => format!("{:?} after {} generations", report.outcome, report.rendered),
            Ok(Err(err)) => {
                error!("simulation rejected: {err}");
                format!("Error: {err}")
            }
            Err(err) => {
                error!("simulation task failed: {err}");
                format!("Task failed: {err}")
            }
        };
    }
}

impl Drop for LifeViewer {
    fn drop(&mut self) {
        if let Some(run) = &self.active {
            run.stop.stop();
        }
    }
}
