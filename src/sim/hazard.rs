//! Token-versus-hazard resolution
//!
//! Vehicles and critters kill on contact. The river band requires a float
//! underfoot, which carries the token downstream; open water kills.

use super::actor::Actors;
use super::rect::Rect;
use crate::consts::{RIVER_BOTTOM, RIVER_TOP};

/// Outcome of the per-tick hazard evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HazardOutcome {
    /// Nothing touched the token
    Clear,
    /// Token rides a float; x shifts by the float's speed this tick
    Carried { dx: f32 },
    /// Token hit a vehicle or critter, or stands in open water
    Killed,
}

/// True when a y coordinate lies in the river band
#[inline]
pub fn in_river_band(y: f32) -> bool {
    (RIVER_TOP..RIVER_BOTTOM).contains(&y)
}

/// Evaluate the token against every hazard class; the first lethal match
/// wins and there is no partial damage
pub fn evaluate(token: &Rect, actors: &Actors) -> HazardOutcome {
    for vehicle in &actors.vehicles {
        if vehicle.bounds().intersects(token) {
            return HazardOutcome::Killed;
        }
    }
    for critter in &actors.critters {
        if critter.bounds().intersects(token) {
            return HazardOutcome::Killed;
        }
    }
    if in_river_band(token.pos.y) {
        for float in &actors.floats {
            if float.bounds().intersects(token) {
                return HazardOutcome::Carried { dx: float.speed };
            }
        }
        return HazardOutcome::Killed;
    }
    HazardOutcome::Clear
}
