//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable ball order (ball 1 before ball 2, every tick)
//! - No rendering or platform dependencies

pub mod engine;
pub mod grid;
pub mod state;
pub mod tick;

pub use engine::{BallView, Engine, EngineError, Frame};
pub use grid::{Faction, Grid, Score};
pub use state::{Ball, SimState};
pub use tick::tick;
