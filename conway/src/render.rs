// render.rs - Render sinks
//
// The loop hands every finished generation to a `Renderer` and never
// depends on what the sink does with it.

use std::io::Write;

use log::warn;

use crate::grid::Grid;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub trait Renderer {
    /// Called once per generation with the complete grid.
    fn render(&mut self, grid: &Grid);
}

impl<F> Renderer for F
where
    F: FnMut(&Grid),
{
    fn render(&mut self, grid: &Grid) {
        self(grid)
    }
}

/// Prints each generation as text, `#` for a live cell.
pub struct TerminalRenderer<W: Write> {
    out: W,
    clear: bool,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout(), true)
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// With `clear` set, each frame starts by clearing the screen.
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, grid: &Grid) -> std::io::Result<()> {
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        write!(self.out, "{grid}")?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, grid: &Grid) {
        // A broken sink must not stop the simulation.
        if let Err(err) = self.write_frame(grid) {
            warn!("failed to draw generation: {err}");
        }
    }
}
