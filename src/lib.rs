pub mod config;
pub mod draw;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod proc;

pub use config::Config;
pub use error::{GridError, Result};
pub use grid::{Cell, Grid, Neighbors};
pub use proc::next_generation;
