//! Data-driven game balance
//!
//! Every probability, density scale, and score value the simulation consumes
//! lives here, so hosts can ship alternate balance without a rebuild.

use serde::{Deserialize, Serialize};

/// Balance knobs consumed by the spawner and the session state machine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Road spawn-interval scale (bigger = fewer vehicles)
    pub traffic_scale: f32,
    /// River spawn-interval scale (bigger = fewer floats)
    pub float_scale: f32,
    /// Critter spawn-interval scale (bigger = fewer birds/snakes)
    pub critter_scale: f32,

    /// Truck probability during the initial lane seeding pass
    pub truck_seed_chance: f32,
    /// Steady-state road roll below this spawns a truck
    pub truck_roll: f32,
    /// Steady-state road roll below this (but above `truck_roll`) spawns a
    /// car; anything higher spawns nothing
    pub car_roll: f32,
    /// Chance a due river lane produces a float
    pub float_gate: f32,
    /// Chance a due critter lane produces an actor
    pub critter_gate: f32,

    /// Multiplicative speed jitter for road vehicles (fraction, applied as a
    /// uniform +/- band so convoys drift apart)
    pub speed_jitter: f32,
    /// Truck speed as a fraction of lane speed
    pub truck_speed: f32,
    /// Bird speed as a fraction of lane speed
    pub bird_speed: f32,
    /// Snake speed as a fraction of lane speed
    pub snake_speed: f32,

    /// Actors the seeding pass aims to place per lane
    pub seed_target: u32,
    /// Placement attempt cap when seeding a road lane
    pub road_seed_attempts: u32,
    /// Placement attempt cap when seeding a river or critter lane
    pub strip_seed_attempts: u32,

    /// Score per newly reached row
    pub row_score: u32,
    /// Bonus for reaching the goal band
    pub goal_bonus: u32,
    /// Score penalty on death (saturating at zero)
    pub death_penalty: u32,
    /// Lives at the start of a run
    pub starting_lives: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            traffic_scale: 1.7,
            float_scale: 1.4,
            critter_scale: 1.6,

            truck_seed_chance: 0.33,
            truck_roll: 0.25,
            car_roll: 0.65,
            float_gate: 0.75,
            critter_gate: 0.65,

            speed_jitter: 0.25,
            truck_speed: 0.85,
            bird_speed: 1.1,
            snake_speed: 0.9,

            seed_target: 2,
            road_seed_attempts: 40,
            strip_seed_attempts: 20,

            row_score: 10,
            goal_bonus: 100,
            death_penalty: 25,
            starting_lives: 3,
        }
    }
}
