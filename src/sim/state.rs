//! Simulation state: the arena, its territory grid, and the two balls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::{Faction, Grid, Score};
use crate::consts::*;

/// A bouncing ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub faction: Faction,
}

impl Ball {
    pub fn new(pos: Vec2, faction: Faction) -> Self {
        Self {
            pos,
            vel: Vec2::splat(BALL_SPEED),
            radius: BALL_RADIUS,
            faction,
        }
    }

    /// Advance one tick: Euler step, then mirror velocity off any wall the
    /// new position has crossed. Each axis flips at most once per tick, and
    /// the ball may overlap a wall for the tick on which it crossed
    /// (reflection is one tick late).
    pub fn advance(&mut self, arena: Vec2) {
        self.pos += self.vel;
        if self.pos.x - self.radius < 0.0 || self.pos.x + self.radius > arena.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y - self.radius < 0.0 || self.pos.y + self.radius > arena.y {
            self.vel.y = -self.vel.y;
        }
    }
}

/// Complete state of one running match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Arena extent in pixels
    pub arena: Vec2,
    pub grid: Grid,
    /// Fixed pair, advanced in index order every tick
    pub balls: [Ball; 2],
    /// Cell count per faction, re-derived every tick
    pub score: Score,
    pub time_ticks: u64,
}

impl SimState {
    /// Lay out a fresh match: all territory to Day, the Day ball a quarter
    /// of the way across the arena and the Night ball three quarters, both
    /// vertically centered.
    pub fn new(arena_width: f32, arena_height: f32) -> Self {
        let arena = Vec2::new(arena_width, arena_height);
        let grid = Grid::new(arena_width, arena_height, CELL_EDGE);
        let balls = [
            Ball::new(Vec2::new(arena.x / 4.0, arena.y / 2.0), Faction::Day),
            Ball::new(Vec2::new(arena.x * 3.0 / 4.0, arena.y / 2.0), Faction::Night),
        ];
        let score = grid.tally();
        Self {
            arena,
            grid,
            balls,
            score,
            time_ticks: 0,
        }
    }
}
