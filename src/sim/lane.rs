//! Lanes: horizontal traffic strips rebuilt on every level setup
//!
//! Each lane carries a direction, a speed, and an independent spawn timer.
//! Directions alternate down each sequence; speed and density both ramp with
//! the level index, floored so late levels stay playable.

use crate::consts::{CRITTER_ROWS, RIVER_ROWS, ROAD_ROWS};
use crate::row_y;
use crate::tuning::Tuning;

/// A horizontal strip hosting one direction/speed/spawn-rate of traffic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lane {
    /// Top y of the lane row
    pub y: f32,
    /// Signed speed in pixels per tick; the sign is the travel direction
    pub speed: f32,
    /// Ticks between spawn attempts
    pub spawn_every: u32,
}

/// Road lanes for a level
pub fn road_lanes(level: u32, tuning: &Tuning) -> Vec<Lane> {
    ROAD_ROWS
        .iter()
        .enumerate()
        .map(|(i, &row)| Lane {
            y: row_y(row),
            speed: directed(1.5 + 0.25 * i as f32 + ramp(level, 0.25), i),
            spawn_every: interval(35 - 2 * level as i32 - 2 * i as i32, 15, tuning.traffic_scale),
        })
        .collect()
}

/// River lanes for a level
pub fn river_lanes(level: u32, tuning: &Tuning) -> Vec<Lane> {
    RIVER_ROWS
        .iter()
        .enumerate()
        .map(|(i, &row)| Lane {
            y: row_y(row),
            speed: directed(1.25 + 0.2 * i as f32 + ramp(level, 0.15), i),
            spawn_every: interval(48 - 2 * level as i32 - 2 * i as i32, 18, tuning.float_scale),
        })
        .collect()
}

/// Critter lanes for a level
pub fn critter_lanes(level: u32, tuning: &Tuning) -> Vec<Lane> {
    CRITTER_ROWS
        .iter()
        .enumerate()
        .map(|(i, &row)| Lane {
            y: row_y(row),
            speed: directed(1.4 + 0.2 * i as f32 + ramp(level, 0.15), i),
            spawn_every: interval(40 - 2 * level as i32 - i as i32, 16, tuning.critter_scale),
        })
        .collect()
}

/// Per-level speed increase
#[inline]
fn ramp(level: u32, per_level: f32) -> f32 {
    (level - 1) as f32 * per_level
}

/// Alternate directions down the sequence, first lane rightward
#[inline]
fn directed(base: f32, i: usize) -> f32 {
    if i % 2 == 0 { base } else { -base }
}

/// Floor the raw interval, then apply the density scale
fn interval(raw: i32, floor: i32, scale: f32) -> u32 {
    (raw.max(floor) as f32 * scale).round().max(1.0) as u32
}
