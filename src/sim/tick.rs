//! Fixed timestep simulation tick
//!
//! One tick is one atomic simulation step with a fixed internal order:
//! spawn, integrate, resolve spacing, cull, token move, scoring, hazards,
//! level transition. The host drives it at the cadence in
//! [`crate::consts::TICK_MS`] and reads a snapshot between ticks.

use super::actor::ActorClass;
use super::frog::Facing;
use super::hazard::{self, HazardOutcome};
use super::spacing;
use super::spawn;
use super::state::GameState;
use crate::consts::TILE;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Queue one tile step in this direction
    pub step: Option<Facing>,
    /// Pause toggle
    pub pause: bool,
    /// Help-overlay toggle
    pub toggle_help: bool,
    /// Demo mode: the sim steers the token itself
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.toggle_help {
        state.show_help = !state.show_help;
    }
    if input.pause {
        state.paused = !state.paused;
    }
    // Steps queue even while paused; they land on the next live tick
    if let Some(dir) = input.step {
        state.frog.nudge(dir);
    }
    if state.paused {
        return;
    }

    if input.idle_mode {
        if let Some(dir) = idle_step(state) {
            state.frog.nudge(dir);
        }
    }

    state.ticks += 1;

    // Spawn into due lanes
    spawn::spawn_roads(
        state.ticks,
        &state.road_lanes,
        &mut state.actors.vehicles,
        &mut state.rng,
        &state.tuning,
    );
    spawn::spawn_river(
        state.ticks,
        &state.river_lanes,
        &mut state.actors.floats,
        &mut state.rng,
        &state.tuning,
    );
    spawn::spawn_critters(
        state.ticks,
        &state.critter_lanes,
        &mut state.actors.critters,
        &mut state.rng,
        &state.tuning,
    );

    // Integrate motion, then restore the gap invariant and trim strays
    state.actors.advance_all();
    spacing::resolve(
        &mut state.actors.vehicles,
        &state.road_lanes,
        ActorClass::Vehicle.min_gap(),
    );
    spacing::resolve(
        &mut state.actors.floats,
        &state.river_lanes,
        ActorClass::Float.min_gap(),
    );
    spacing::resolve(
        &mut state.actors.critters,
        &state.critter_lanes,
        ActorClass::Critter.min_gap(),
    );
    state.actors.cull_offboard();

    // Token moves after traffic settles
    state.frog.update();

    if state.free_roam {
        return;
    }

    state.award_row_progress();

    match hazard::evaluate(&state.frog.bounds(), &state.actors) {
        HazardOutcome::Killed => {
            state.apply_death();
            return;
        }
        HazardOutcome::Carried { dx } => state.frog.carry(dx),
        HazardOutcome::Clear => {}
    }

    if state.frog.pos.y <= TILE {
        state.complete_level();
    }
}

/// Demo autopilot: try to hop toward the goal whenever the destination tile
/// looks survivable, sidestepping when the way up is blocked
fn idle_step(state: &GameState) -> Option<Facing> {
    if state.ticks % 12 != 0 {
        return None;
    }
    for dir in [Facing::Up, Facing::Left, Facing::Right] {
        let mut ghost = state.frog.clone();
        ghost.nudge(dir);
        ghost.update();
        if ghost.pos == state.frog.pos {
            continue; // clamped in place, no progress
        }
        if survivable(state, &ghost) {
            return Some(dir);
        }
    }
    None
}

/// Would the token live there this tick? The probe is widened half a tile so
/// actors about to close the gap count as unsafe.
fn survivable(state: &GameState, ghost: &super::frog::Frog) -> bool {
    let probe = ghost.bounds().expanded_x(TILE / 2.0);
    !matches!(
        hazard::evaluate(&probe, &state.actors),
        HazardOutcome::Killed
    )
}
