//! Pong War - a day-vs-night territory battle
//!
//! Two balls bounce across a grid of cells, every cell owned by one of two
//! factions. Each tick a ball may trade factions with the cell it crosses,
//! and the running cell count per faction is the score.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, balls, conquest rule, scoring)
//! - `host`: Frame pump that drives the simulation at a fixed cadence
//! - `settings`: Presentation host preferences

pub mod host;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Fixed simulation parameters
pub mod consts {
    /// Cell edge length in arena pixels; the grid is carved from the arena
    /// in these units
    pub const CELL_EDGE: f32 = 25.0;
    /// Ball radius - half a cell edge
    pub const BALL_RADIUS: f32 = CELL_EDGE / 2.0;
    /// Per-axis ball speed in pixels per tick
    pub const BALL_SPEED: f32 = 5.0;
    /// Sleep between frame pump iterations (~58.8 Hz, no drift compensation)
    pub const FRAME_INTERVAL_MS: u64 = 17;
}
