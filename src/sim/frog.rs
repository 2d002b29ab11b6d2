//! The player token
//!
//! Moves in discrete tile steps: each directional input queues exactly one
//! displacement, consumed on the next unpaused tick and then cleared. The
//! queue holds at most one step; the latest input wins.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{BOARD_W, START_Y, TILE};

/// Token facing, updated on every queued step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
    Up,
    Down,
}

impl Facing {
    /// One tile-step displacement in this direction
    pub fn step(self) -> Vec2 {
        match self {
            Facing::Left => Vec2::new(-TILE, 0.0),
            Facing::Right => Vec2::new(TILE, 0.0),
            Facing::Up => Vec2::new(0.0, -TILE),
            Facing::Down => Vec2::new(0.0, TILE),
        }
    }
}

/// The player-controlled token
#[derive(Debug, Clone)]
pub struct Frog {
    /// Top-left corner. y stays tile-aligned (plus the start inset); x can
    /// drift fractionally while riding a float.
    pub pos: Vec2,
    /// Square footprint side
    pub size: f32,
    pub alive: bool,
    pub facing: Facing,
    /// Pending one-shot step
    step: Option<Facing>,
}

impl Default for Frog {
    fn default() -> Self {
        Self::new()
    }
}

impl Frog {
    pub fn new() -> Self {
        Self {
            pos: start_pos(),
            size: TILE - 8.0,
            alive: true,
            facing: Facing::Up,
            step: None,
        }
    }

    /// Queue a single tile step for the next tick
    pub fn nudge(&mut self, dir: Facing) {
        self.facing = dir;
        self.step = Some(dir);
    }

    /// Consume the pending step, if any, and re-clamp
    pub fn update(&mut self) {
        if let Some(dir) = self.step.take() {
            self.pos += dir.step();
            self.clamp_to_board();
        }
    }

    /// Shift horizontally (float carry) and re-clamp
    pub fn carry(&mut self, dx: f32) {
        self.pos.x += dx;
        self.clamp_to_board();
    }

    /// Keep the token inside the playfield
    pub fn clamp_to_board(&mut self) {
        self.pos.x = self.pos.x.clamp(0.0, BOARD_W - self.size);
        self.pos.y = self.pos.y.clamp(TILE, START_Y);
    }

    /// Back to the start tile, alive, pending step cleared
    pub fn reset(&mut self) {
        self.pos = start_pos();
        self.alive = true;
        self.step = None;
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::splat(self.size),
        }
    }
}

/// Start tile: centered on the bottom row
fn start_pos() -> Vec2 {
    Vec2::new(BOARD_W / 2.0 - TILE / 2.0, START_Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_nudge_applies_exactly_once() {
        let mut frog = Frog::new();
        let start = frog.pos;
        frog.nudge(Facing::Up);
        frog.update();
        assert_eq!(frog.pos, start + Vec2::new(0.0, -TILE));
        // impulse is spent; further ticks do not move the token
        frog.update();
        assert_eq!(frog.pos, start + Vec2::new(0.0, -TILE));
    }

    #[test]
    fn test_latest_nudge_wins() {
        let mut frog = Frog::new();
        let start = frog.pos;
        frog.nudge(Facing::Left);
        frog.nudge(Facing::Right);
        frog.update();
        assert_eq!(frog.pos, start + Vec2::new(TILE, 0.0));
        assert_eq!(frog.facing, Facing::Right);
    }

    #[test]
    fn test_clamped_at_board_edges() {
        let mut frog = Frog::new();
        frog.pos.x = 0.0;
        frog.nudge(Facing::Left);
        frog.update();
        assert_eq!(frog.pos.x, 0.0);

        frog.nudge(Facing::Down);
        frog.update();
        assert_eq!(frog.pos.y, START_Y);
    }

    #[test]
    fn test_carry_shifts_then_clamps() {
        let mut frog = Frog::new();
        frog.pos.x = 100.0;
        frog.carry(1.25);
        assert_eq!(frog.pos.x, 101.25);
        frog.pos.x = BOARD_W - frog.size - 1.0;
        frog.carry(5.0);
        assert_eq!(frog.pos.x, BOARD_W - frog.size);
    }

    #[test]
    fn test_reset_returns_to_start_and_clears_step() {
        let mut frog = Frog::new();
        frog.nudge(Facing::Up);
        frog.update();
        frog.nudge(Facing::Up);
        frog.alive = false;
        frog.reset();
        assert!(frog.alive);
        assert_eq!(frog.pos, start_pos());
        frog.update();
        assert_eq!(frog.pos, start_pos());
    }

    proptest! {
        #[test]
        fn test_clamp_is_idempotent(x in -500.0f32..1200.0, y in -500.0f32..1200.0) {
            let mut frog = Frog::new();
            frog.pos = Vec2::new(x, y);
            frog.clamp_to_board();
            let once = frog.pos;
            frog.clamp_to_board();
            prop_assert_eq!(once, frog.pos);
        }
    }
}
