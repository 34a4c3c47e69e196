//! High-level runtime engine settings
//!
//! How long a headless run lasts and how often it reports progress

#[derive(Debug, Clone)]
pub struct Engine {
    pub steps: usize, // number of steps of a headless run
    pub report_every: usize, // log the player state every n steps, 0 = never
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            steps: 1000,
            report_every: 100,
        }
    }
}
