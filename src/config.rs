use std::time::Duration;

/// Settings for the display loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pause between two generations.
    pub delay: Duration,
    pub alive_glyph: &'static str,
    pub dead_glyph: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            delay: Duration::from_secs(1),
            alive_glyph: "+ ",
            dead_glyph: "  ",
        }
    }
}
