use anyhow::Context;
use life_console::{
    draw::{self, Simulation},
    patterns, Config, Grid,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let grid = Grid::new(&patterns::PENTADECATHLON).context("invalid built-in seed")?;
    let config = Config::default();

    draw::run(Simulation::new(grid), &config).context("console output failed")?;
    Ok(())
}
