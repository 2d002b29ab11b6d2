//! Session state and the level/score/lives machine
//!
//! One `GameState` value owns everything a tick mutates: actor containers,
//! lanes, the token, counters, and the seeded RNG. `Dying`, `LevelSetup`,
//! and `LevelComplete` are momentary phases resolved within the tick that
//! enters them; a finished tick always leaves the state `Playing`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actors;
use super::frog::Frog;
use super::lane::{self, Lane};
use super::spawn;
use crate::consts::{START_Y, TILE};
use crate::tuning::Tuning;

/// Phase of the session machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Token just died; resolves into a level rebuild the same tick
    Dying,
    /// Lanes and traffic being rebuilt
    LevelSetup,
    /// Goal reached; resolves into the next level's setup the same tick
    LevelComplete,
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Token climbed `rows` new rows, worth `gained` points
    RowAdvanced { rows: u32, gained: u32 },
    /// Token died; lives remaining after the loss
    Died { lives_left: u32 },
    /// Lives hit zero; the run reset to level 1
    GameOver,
    /// Goal band reached; `level` is the new level number
    LevelComplete { level: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, for logging and reproduction
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub level: u32,
    pub lives: u32,
    pub score: u32,
    pub ticks: u64,
    pub paused: bool,
    pub show_help: bool,
    /// Highest row attained this life, as a y coordinate (smaller = higher)
    pub best_row_y: f32,
    pub phase: GamePhase,
    /// Hazard-free roaming: no lanes, spawns, scoring, or collisions
    pub free_roam: bool,
    pub frog: Frog,
    pub road_lanes: Vec<Lane>,
    pub river_lanes: Vec<Lane>,
    pub critter_lanes: Vec<Lane>,
    pub actors: Actors,
    pub tuning: Tuning,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Fresh session with custom balance
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: 1,
            lives: tuning.starting_lives,
            score: 0,
            ticks: 0,
            paused: false,
            show_help: true,
            best_row_y: START_Y,
            phase: GamePhase::LevelSetup,
            free_roam: false,
            frog: Frog::new(),
            road_lanes: Vec::new(),
            river_lanes: Vec::new(),
            critter_lanes: Vec::new(),
            actors: Actors::default(),
            tuning,
            events: Vec::new(),
        };
        state.setup_level();
        state
    }

    /// Rebuild lanes and reseed traffic for the current level, then reset
    /// the token to the start tile
    pub fn setup_level(&mut self) {
        self.phase = GamePhase::LevelSetup;
        self.actors.clear();
        self.road_lanes.clear();
        self.river_lanes.clear();
        self.critter_lanes.clear();

        if !self.free_roam {
            self.road_lanes = lane::road_lanes(self.level, &self.tuning);
            self.river_lanes = lane::river_lanes(self.level, &self.tuning);
            self.critter_lanes = lane::critter_lanes(self.level, &self.tuning);
            spawn::seed_roads(
                &self.road_lanes,
                &mut self.actors.vehicles,
                &mut self.rng,
                &self.tuning,
            );
            spawn::seed_river(
                &self.river_lanes,
                &mut self.actors.floats,
                &mut self.rng,
                &self.tuning,
            );
            spawn::seed_critters(
                &self.critter_lanes,
                &mut self.actors.critters,
                &mut self.rng,
                &self.tuning,
            );
        }

        // Token placed last so nothing overrides it
        self.best_row_y = START_Y;
        self.frog.reset();
        log::info!(
            "level {} set up: {} actors seeded",
            self.level,
            self.actors.total()
        );
        self.phase = GamePhase::Playing;
    }

    /// Death: penalty, life loss, possible run reset, full level rebuild
    pub fn apply_death(&mut self) {
        if !self.frog.alive {
            return;
        }
        self.phase = GamePhase::Dying;
        self.frog.alive = false;
        self.lives = self.lives.saturating_sub(1);
        self.score = self.score.saturating_sub(self.tuning.death_penalty);
        self.events.push(GameEvent::Died {
            lives_left: self.lives,
        });
        log::info!("token died: {} lives left, score {}", self.lives, self.score);
        if self.lives == 0 {
            self.level = 1;
            self.lives = self.tuning.starting_lives;
            self.score = 0;
            self.events.push(GameEvent::GameOver);
            log::info!("game over, run reset");
        }
        self.setup_level();
    }

    /// Goal reached: bonus, next level, rebuild under the new level's tuning
    pub fn complete_level(&mut self) {
        self.phase = GamePhase::LevelComplete;
        self.score += self.tuning.goal_bonus;
        self.level += 1;
        self.events.push(GameEvent::LevelComplete { level: self.level });
        log::info!("goal reached, advancing to level {}", self.level);
        self.setup_level();
    }

    /// Score upward progress against the per-life high-water row. Only new
    /// rows pay out; revisiting a row never re-awards.
    pub fn award_row_progress(&mut self) {
        if self.frog.pos.y >= self.best_row_y {
            return;
        }
        let rows = ((self.best_row_y - self.frog.pos.y) / TILE) as u32;
        if rows > 0 {
            let gained = rows * self.tuning.row_score;
            self.score += gained;
            self.best_row_y = self.frog.pos.y;
            self.events.push(GameEvent::RowAdvanced { rows, gained });
        }
    }

    /// Drain the events recorded since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::START_Y;

    #[test]
    fn test_new_session_is_seeded_and_playing() {
        let state = GameState::new(42);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.road_lanes.len(), 6);
        assert_eq!(state.river_lanes.len(), 3);
        assert_eq!(state.critter_lanes.len(), 3);
        // the seeding pass put traffic on the board
        assert!(state.actors.total() > 0);
        assert_eq!(state.frog.pos.y, START_Y);
    }

    #[test]
    fn test_death_applies_penalty_and_rebuilds() {
        let mut state = GameState::new(42);
        state.score = 100;
        state.frog.pos.y = START_Y - TILE;
        state.apply_death();
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 75);
        assert_eq!(state.level, 1);
        assert_eq!(state.frog.pos.y, START_Y);
        assert!(state.frog.alive);
        assert_eq!(state.best_row_y, START_Y);
        let events = state.take_events();
        assert!(events.contains(&GameEvent::Died { lives_left: 2 }));
        assert!(!events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_death_penalty_saturates_at_zero() {
        let mut state = GameState::new(42);
        state.score = 10;
        state.apply_death();
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_last_life_resets_the_run() {
        let mut state = GameState::new(42);
        state.lives = 1;
        state.level = 4;
        state.score = 500;
        state.apply_death();
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.frog.pos.y, START_Y);
        assert!(state.take_events().contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_level_complete_awards_bonus_and_advances() {
        let mut state = GameState::new(42);
        state.complete_level();
        assert_eq!(state.level, 2);
        assert_eq!(state.score, 100);
        assert!(state.actors.total() > 0);
        assert_eq!(state.frog.pos.y, START_Y);
        assert!(
            state
                .take_events()
                .contains(&GameEvent::LevelComplete { level: 2 })
        );
        // next level's lanes are denser
        let slower = lane::road_lanes(1, &state.tuning);
        for (fast, slow) in state.road_lanes.iter().zip(&slower) {
            assert!(fast.spawn_every <= slow.spawn_every);
            assert!(fast.speed.abs() > slow.speed.abs());
        }
    }

    #[test]
    fn test_row_progress_is_monotonic_and_single_shot() {
        let mut state = GameState::new(42);
        state.frog.pos.y -= 2.0 * TILE;
        state.award_row_progress();
        assert_eq!(state.score, 20);
        assert_eq!(state.best_row_y, START_Y - 2.0 * TILE);

        // same row again: nothing
        state.award_row_progress();
        assert_eq!(state.score, 20);

        // hop back down and return: still nothing new
        state.frog.pos.y += TILE;
        state.award_row_progress();
        state.frog.pos.y -= TILE;
        state.award_row_progress();
        assert_eq!(state.score, 20);

        // one genuinely new row pays once
        state.frog.pos.y -= TILE;
        state.award_row_progress();
        assert_eq!(state.score, 30);
    }

    #[test]
    fn test_free_roam_setup_has_no_lanes_or_actors() {
        let mut state = GameState::new(42);
        state.free_roam = true;
        state.setup_level();
        assert_eq!(state.actors.total(), 0);
        assert!(state.road_lanes.is_empty());
        assert!(state.river_lanes.is_empty());
        assert!(state.critter_lanes.is_empty());
        assert!(state.frog.alive);
    }

    #[test]
    fn test_same_seed_seeds_identical_traffic() {
        let a = GameState::new(1234);
        let b = GameState::new(1234);
        assert_eq!(a.actors.total(), b.actors.total());
        for (x, y) in a.actors.vehicles.iter().zip(&b.actors.vehicles) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.speed, y.speed);
            assert_eq!(x.kind, y.kind);
        }
    }
}
