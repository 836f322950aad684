// main.rs - Console Game of Life
//
//   conway [--rows N] [--cols N] [--generations N] [--delay SECS]
//          [--density P] [--seed N] [--pattern NAME] [--stop-on-cycle]

use std::process::ExitCode;

use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use conway::{stop_channel, LifeError, SimulationConfig, SimulationLoop, TerminalRenderer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("conway: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), LifeError> {
    let config = SimulationConfig::from_args(std::env::args().skip(1))?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Ctrl-C stops the loop between generations.
    let (handle, mut stop) = stop_channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.stop();
        }
    });

    let mut renderer = TerminalRenderer::stdout();
    let report = SimulationLoop::new()
        .run(&config, &mut rng, &mut renderer, &mut stop)
        .await?;

    info!(
        "{:?} after {} generations, {} cells alive",
        report.outcome,
        report.rendered,
        report.final_grid.population()
    );
    Ok(())
}
