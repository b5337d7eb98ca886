use std::{
    fmt,
    io::{self, Write},
    thread,
    time::Duration,
};

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    terminal::{Clear, ClearType, SetTitle},
};
use log::{debug, info};

use crate::{config::Config, grid::Grid, proc::next_generation};

/// The current generation and how many steps led to it.
pub struct Simulation {
    grid: Grid,
    generation: u64,
}

impl Simulation {
    #[inline]
    pub fn new(grid: Grid) -> Self {
        Simulation {
            grid,
            generation: 0,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the current grid with its successor.
    pub fn step(&mut self) {
        self.grid = next_generation(&self.grid);
        self.generation += 1;
    }
}

/// Two characters per cell, one line per row.
pub fn render(grid: &Grid, config: &Config) -> String {
    let (w, h) = grid.dimensions();
    let mut s = String::with_capacity((w * 2 + 1) * h);
    for row in grid.rows() {
        for cell in row {
            if cell.is_alive() {
                s.push_str(config.alive_glyph);
            } else {
                s.push_str(config.dead_glyph);
            }
        }
        s.push('\n');
    }
    s
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &Config::default()))
    }
}

/// Renders the simulation forever. Only returns on a console error.
pub fn run(mut sim: Simulation, config: &Config) -> io::Result<()> {
    let mut out = io::stdout();
    runup(&mut out)?;

    let (w, h) = sim.grid().dimensions();
    info!(
        "running {w}x{h} grid, population {}, delay {:?}",
        sim.grid().population(),
        config.delay
    );

    loop {
        draw(&mut sim, config, &mut out)?;
        sleep(config.delay);
    }
}

fn runup(out: &mut impl Write) -> io::Result<()> {
    execute!(out, SetTitle("Game of Life"))
}

/// Clears the screen, prints the current grid, then advances one generation.
pub fn draw(sim: &mut Simulation, config: &Config, out: &mut impl Write) -> io::Result<()> {
    clear(out)?;
    out.write_all(render(sim.grid(), config).as_bytes())?;
    out.flush()?;

    debug!(
        "generation {} population {}",
        sim.generation(),
        sim.grid().population()
    );
    sim.step();
    Ok(())
}

fn clear(out: &mut impl Write) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

fn sleep(t: Duration) {
    thread::sleep(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::BLINKER;

    #[test_log::test]
    fn renders_two_chars_per_cell() {
        let g = Grid::new(&[[1u8, 0], [0, 1]]).unwrap();
        assert_eq!(render(&g, &Config::default()), "+   \n  + \n");
        assert_eq!(g.to_string(), "+   \n  + \n");
    }

    #[test_log::test]
    fn renders_custom_glyphs() {
        let config = Config {
            alive_glyph: "##",
            dead_glyph: "..",
            ..Config::default()
        };
        let g = Grid::new(&[[0u8, 1, 0]]).unwrap();
        assert_eq!(render(&g, &config), "..##..\n");
    }

    #[test_log::test]
    fn default_config() {
        let c = Config::default();
        assert_eq!(c.delay, Duration::from_secs(1));
        assert_eq!(c.alive_glyph.len(), 2);
        assert_eq!(c.dead_glyph, "  ");
    }

    #[test_log::test]
    fn step_advances_generation() {
        let mut sim = Simulation::new(Grid::new(&BLINKER).unwrap());
        let start = sim.grid().clone();
        sim.step();
        assert_eq!(sim.generation(), 1);
        assert_ne!(sim.grid(), &start);
        sim.step();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.grid(), &start);
    }

    #[test_log::test]
    fn draw_prints_then_steps() {
        let mut sim = Simulation::new(Grid::new(&BLINKER).unwrap());
        let first = render(sim.grid(), &Config::default());
        let mut out = Vec::new();

        draw(&mut sim, &Config::default(), &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.ends_with(&first));
        assert_eq!(sim.generation(), 1);
    }
}
