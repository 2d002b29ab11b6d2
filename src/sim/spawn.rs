//! Procedural actor generation
//!
//! Each lane runs an independent spawn timer (tick counter modulo interval).
//! Steady-state spawns enter just past the board edge the lane flows from;
//! level setup instead runs a bounded seeding pass at random on-board
//! positions so lanes never start empty. Candidates that would violate the
//! class minimum gap are silently dropped, with no retry that tick.

use rand::Rng;
use rand_pcg::Pcg32;

use super::actor::{Actor, ActorKind};
use super::lane::Lane;
use super::rect::Rect;
use super::spacing;
use crate::consts::{BOARD_W, TILE};
use crate::tuning::Tuning;

// Footprints. Car and truck widths are rolled per spawn; the rest are
// uniform.
const CAR_H: f32 = TILE - 10.0;
const CAR_INSET: f32 = 5.0;
const TRUCK_H: f32 = TILE - 8.0;
const TRUCK_INSET: f32 = 4.0;
const FLOAT_W: f32 = TILE * 3.0;
const FLOAT_H: f32 = TILE - 12.0;
const FLOAT_INSET: f32 = 6.0;
const BIRD_W: f32 = TILE - 8.0;
const BIRD_H: f32 = TILE - 14.0;
const BIRD_INSET: f32 = 7.0;
const SNAKE_W: f32 = TILE * 1.6;
const SNAKE_H: f32 = TILE - 12.0;
const SNAKE_INSET: f32 = 6.0;

/// Entry distance past the board edge
const ENTRY_MARGIN: f32 = 10.0;

/// Steady-state road spawning: one weighted {truck, car, nothing} draw per
/// due lane
pub fn spawn_roads(
    ticks: u64,
    lanes: &[Lane],
    vehicles: &mut Vec<Actor>,
    rng: &mut Pcg32,
    tuning: &Tuning,
) {
    for lane in lanes {
        if !due(ticks, lane) {
            continue;
        }
        let roll: f32 = rng.random();
        let truck = roll < tuning.truck_roll;
        if !truck && roll >= tuning.car_roll {
            continue;
        }
        let (kind, mut rect, speed) = road_vehicle(rng, lane, tuning, truck);
        rect.pos.x = entry_x(lane, rect.size.x);
        try_insert(vehicles, kind, rect, speed, lane.y);
    }
}

/// Steady-state river spawning: a Bernoulli gate, then a fixed-width float at
/// exactly the lane speed
pub fn spawn_river(
    ticks: u64,
    lanes: &[Lane],
    floats: &mut Vec<Actor>,
    rng: &mut Pcg32,
    tuning: &Tuning,
) {
    for lane in lanes {
        if !due(ticks, lane) || rng.random::<f32>() >= tuning.float_gate {
            continue;
        }
        let rect = Rect::new(
            entry_x(lane, FLOAT_W),
            lane.y + FLOAT_INSET,
            FLOAT_W,
            FLOAT_H,
        );
        try_insert(floats, ActorKind::Float, rect, lane.speed, lane.y);
    }
}

/// Steady-state critter spawning: a Bernoulli gate, then a coin flip between
/// bird and snake
pub fn spawn_critters(
    ticks: u64,
    lanes: &[Lane],
    critters: &mut Vec<Actor>,
    rng: &mut Pcg32,
    tuning: &Tuning,
) {
    for lane in lanes {
        if !due(ticks, lane) || rng.random::<f32>() >= tuning.critter_gate {
            continue;
        }
        let (kind, mut rect, speed) = critter(rng, lane, tuning);
        rect.pos.x = entry_x(lane, rect.size.x);
        try_insert(critters, kind, rect, speed, lane.y);
    }
}

/// Seeding pass for road lanes: place up to the target count at random
/// on-board positions, bounded attempts, spacing-checked
pub fn seed_roads(lanes: &[Lane], vehicles: &mut Vec<Actor>, rng: &mut Pcg32, tuning: &Tuning) {
    for lane in lanes {
        let mut placed = 0;
        let mut attempts = 0;
        while placed < tuning.seed_target && attempts < tuning.road_seed_attempts {
            attempts += 1;
            let truck = rng.random::<f32>() < tuning.truck_seed_chance;
            let (kind, mut rect, speed) = road_vehicle(rng, lane, tuning, truck);
            rect.pos.x = rng.random_range(0.0..BOARD_W - rect.size.x);
            if try_insert(vehicles, kind, rect, speed, lane.y) {
                placed += 1;
            }
        }
    }
}

/// Seeding pass for river lanes
pub fn seed_river(lanes: &[Lane], floats: &mut Vec<Actor>, rng: &mut Pcg32, tuning: &Tuning) {
    for lane in lanes {
        let mut placed = 0;
        let mut attempts = 0;
        while placed < tuning.seed_target && attempts < tuning.strip_seed_attempts {
            attempts += 1;
            let x = rng.random_range(0.0..BOARD_W - FLOAT_W);
            let rect = Rect::new(x, lane.y + FLOAT_INSET, FLOAT_W, FLOAT_H);
            if try_insert(floats, ActorKind::Float, rect, lane.speed, lane.y) {
                placed += 1;
            }
        }
    }
}

/// Seeding pass for critter lanes
pub fn seed_critters(lanes: &[Lane], critters: &mut Vec<Actor>, rng: &mut Pcg32, tuning: &Tuning) {
    for lane in lanes {
        let mut placed = 0;
        let mut attempts = 0;
        while placed < tuning.seed_target && attempts < tuning.strip_seed_attempts {
            attempts += 1;
            let (kind, mut rect, speed) = critter(rng, lane, tuning);
            rect.pos.x = rng.random_range(0.0..BOARD_W - rect.size.x);
            if try_insert(critters, kind, rect, speed, lane.y) {
                placed += 1;
            }
        }
    }
}

/// Push the candidate if it clears its class gap; reject silently otherwise
fn try_insert(container: &mut Vec<Actor>, kind: ActorKind, rect: Rect, speed: f32, lane_y: f32) -> bool {
    if spacing::has_room(&rect, lane_y, container, kind.class().min_gap()) {
        container.push(Actor::new(kind, rect, speed));
        true
    } else {
        false
    }
}

#[inline]
fn due(ticks: u64, lane: &Lane) -> bool {
    ticks % lane.spawn_every as u64 == 0
}

/// Roll a road vehicle for `lane`; the caller decides its x
fn road_vehicle(
    rng: &mut Pcg32,
    lane: &Lane,
    tuning: &Tuning,
    truck: bool,
) -> (ActorKind, Rect, f32) {
    if truck {
        let w = TILE * (3 + rng.random_range(0..2)) as f32;
        let speed = vary(rng, lane.speed * tuning.truck_speed, tuning.speed_jitter);
        (
            ActorKind::Truck,
            Rect::new(0.0, lane.y + TRUCK_INSET, w, TRUCK_H),
            speed,
        )
    } else {
        let w = TILE * (2 + rng.random_range(0..2)) as f32;
        let speed = vary(rng, lane.speed, tuning.speed_jitter);
        (
            ActorKind::Car,
            Rect::new(0.0, lane.y + CAR_INSET, w, CAR_H),
            speed,
        )
    }
}

/// Coin flip between a fast bird and a slow snake; the caller decides x
fn critter(rng: &mut Pcg32, lane: &Lane, tuning: &Tuning) -> (ActorKind, Rect, f32) {
    if rng.random_bool(0.5) {
        (
            ActorKind::Bird,
            Rect::new(0.0, lane.y + BIRD_INSET, BIRD_W, BIRD_H),
            lane.speed * tuning.bird_speed,
        )
    } else {
        (
            ActorKind::Snake,
            Rect::new(0.0, lane.y + SNAKE_INSET, SNAKE_W, SNAKE_H),
            lane.speed * tuning.snake_speed,
        )
    }
}

/// Multiplicative jitter: `base` scaled by a uniform +/- `factor` band, sign
/// preserved
fn vary(rng: &mut Pcg32, base: f32, factor: f32) -> f32 {
    base * (1.0 + (rng.random::<f32>() * 2.0 - 1.0) * factor)
}

/// Entry x just past the board edge the lane flows from
fn entry_x(lane: &Lane, width: f32) -> f32 {
    if lane.speed > 0.0 {
        -width - ENTRY_MARGIN
    } else {
        BOARD_W + ENTRY_MARGIN
    }
}
