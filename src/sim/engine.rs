//! Simulation engine lifecycle.
//!
//! The engine owns the grid and both balls for the lifetime of a match and
//! gates ticking behind an explicit start/stop cycle. The presentation host
//! only ever gets read access, through [`Frame`] snapshots.

use glam::Vec2;
use thiserror::Error;

use super::grid::{Faction, Score};
use super::state::SimState;
use super::tick;
use crate::consts::CELL_EDGE;

/// Lifecycle contract violations. Calling into the engine outside the
/// `Running` state is a caller bug and fails fast.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("simulation is not running")]
    NotRunning,
    #[error("simulation already started")]
    AlreadyRunning,
}

/// Drawable view of one ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
    pub faction: Faction,
}

/// Read-only snapshot of one fully simulated frame.
///
/// Everything the presentation host needs to draw: grid geometry and cell
/// owners, ball circles, and the score pair for the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub cols: usize,
    pub rows: usize,
    pub cell_edge: f32,
    /// Column-major cell owners, `cells[col * rows + row]`
    pub cells: Vec<Faction>,
    pub balls: [BallView; 2],
    pub score: Score,
}

impl Frame {
    /// Owner of a cell, or `None` off the board.
    pub fn owner_at(&self, col: usize, row: usize) -> Option<Faction> {
        (col < self.cols && row < self.rows).then(|| self.cells[col * self.rows + row])
    }
}

/// Two-state simulation engine: uninitialized, or running one match.
#[derive(Debug, Default)]
pub struct Engine {
    state: Option<SimState>,
}

impl Engine {
    pub fn new() -> Self {
        Self { state: None }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    /// Start a match over a `width x height` pixel arena. Errors if a match
    /// is already running; re-initialization is not supported.
    pub fn start(&mut self, width: f32, height: f32) -> Result<(), EngineError> {
        if self.state.is_some() {
            return Err(EngineError::AlreadyRunning);
        }
        let state = SimState::new(width, height);
        log::info!(
            "match started: {}x{} arena, {}x{} grid",
            width,
            height,
            state.grid.cols(),
            state.grid.rows()
        );
        self.state = Some(state);
        Ok(())
    }

    /// Advance the match by one tick. Valid only while running.
    pub fn tick(&mut self) -> Result<(), EngineError> {
        let state = self.state.as_mut().ok_or(EngineError::NotRunning)?;
        tick::tick(state);
        Ok(())
    }

    /// Tear the match down, releasing grid and ball state. Idempotent; the
    /// next `start` begins from scratch.
    pub fn stop(&mut self) {
        if self.state.take().is_some() {
            log::info!("match stopped");
        }
    }

    /// Full simulation state, for hosts that want direct read access.
    pub fn state(&self) -> Option<&SimState> {
        self.state.as_ref()
    }

    /// Current score pair, while running.
    pub fn score(&self) -> Option<Score> {
        self.state.as_ref().map(|s| s.score)
    }

    /// Capture a consistent drawable snapshot of the current frame.
    pub fn frame(&self) -> Option<Frame> {
        let state = self.state.as_ref()?;
        Some(Frame {
            cols: state.grid.cols(),
            rows: state.grid.rows(),
            cell_edge: CELL_EDGE,
            cells: state.grid.cells().to_vec(),
            balls: state.balls.map(|b| BallView {
                pos: b.pos,
                radius: b.radius,
                faction: b.faction,
            }),
            score: state.score,
        })
    }
}
