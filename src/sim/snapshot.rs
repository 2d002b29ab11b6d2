//! Read-only render snapshot
//!
//! Captured between ticks; the host renders from this, never from live
//! state. Everything is plain serializable data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorKind};
use super::frog::Facing;
use super::state::GameState;
use crate::consts::{BOARD_H, BOARD_W, COLS, ROWS, TILE};

/// Board geometry, fixed per process
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoardView {
    pub cols: u32,
    pub rows: u32,
    pub tile: f32,
    pub width: f32,
    pub height: f32,
}

/// One actor, as the renderer sees it
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActorView {
    pub kind: ActorKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl From<&Actor> for ActorView {
    fn from(actor: &Actor) -> Self {
        Self {
            kind: actor.kind,
            pos: actor.pos,
            size: actor.size,
            speed: actor.speed,
        }
    }
}

/// The token, as the renderer sees it
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenView {
    pub pos: Vec2,
    pub size: f32,
    pub alive: bool,
    pub facing: Facing,
}

/// Immutable view of one completed tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: BoardView,
    /// Draw order: floats under trucks under cars under birds under snakes
    pub actors: Vec<ActorView>,
    pub token: TokenView,
    pub level: u32,
    pub lives: u32,
    pub score: u32,
    pub tick: u64,
    pub paused: bool,
    pub show_help: bool,
}

/// Kind ordering for the actor list
const DRAW_ORDER: [ActorKind; 5] = [
    ActorKind::Float,
    ActorKind::Truck,
    ActorKind::Car,
    ActorKind::Bird,
    ActorKind::Snake,
];

impl Snapshot {
    /// Capture the state after a tick completes
    pub fn capture(state: &GameState) -> Self {
        let mut actors = Vec::with_capacity(state.actors.total());
        for kind in DRAW_ORDER {
            actors.extend(state.actors.of_kind(kind).map(ActorView::from));
        }
        Self {
            board: BoardView {
                cols: COLS,
                rows: ROWS,
                tile: TILE,
                width: BOARD_W,
                height: BOARD_H,
            },
            actors,
            token: TokenView {
                pos: state.frog.pos,
                size: state.frog.size,
                alive: state.frog.alive,
                facing: state.frog.facing,
            },
            level: state.level,
            lives: state.lives,
            score: state.score,
            tick: state.ticks,
            paused: state.paused,
            show_help: state.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_groups_actors_by_kind() {
        let state = GameState::new(42);
        let snapshot = Snapshot::capture(&state);
        assert_eq!(snapshot.actors.len(), state.actors.total());
        // kinds appear in draw order, each as one contiguous run
        let positions: Vec<usize> = DRAW_ORDER
            .iter()
            .filter_map(|&k| snapshot.actors.iter().position(|a| a.kind == k))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_capture_reflects_session_counters() {
        let mut state = GameState::new(42);
        state.score = 230;
        state.lives = 2;
        state.level = 3;
        let snapshot = Snapshot::capture(&state);
        assert_eq!(snapshot.score, 230);
        assert_eq!(snapshot.lives, 2);
        assert_eq!(snapshot.level, 3);
        assert_eq!(snapshot.board.width, BOARD_W);
        assert_eq!(snapshot.token.pos, state.frog.pos);
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let state = GameState::new(42);
        let snapshot = Snapshot::capture(&state);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.actors.len(), snapshot.actors.len());
        assert_eq!(back.score, snapshot.score);
        assert_eq!(back.token.pos, snapshot.token.pos);
    }
}
