//! Moving actors: vehicles, river floats, and ground critters
//!
//! One tagged type covers every non-player entity; per-class containers keep
//! spacing and hazard handling free of runtime type inspection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{BOARD_W, CULL_MARGIN, TILE};

/// Non-player actor kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Car,
    Truck,
    Float,
    Bird,
    Snake,
}

impl ActorKind {
    /// The spacing/hazard class this kind belongs to
    pub fn class(self) -> ActorClass {
        match self {
            ActorKind::Car | ActorKind::Truck => ActorClass::Vehicle,
            ActorKind::Float => ActorClass::Float,
            ActorKind::Bird | ActorKind::Snake => ActorClass::Critter,
        }
    }
}

/// Spacing classes. Classes never interact with each other's gaps: a truck
/// constrains other road traffic, never a float two bands away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorClass {
    Vehicle,
    Float,
    Critter,
}

impl ActorClass {
    /// Minimum horizontal clearance between co-lane actors of this class
    pub fn min_gap(self) -> f32 {
        match self {
            ActorClass::Vehicle => TILE,
            ActorClass::Float | ActorClass::Critter => TILE / 2.0,
        }
    }
}

/// A moving rectangle with a kind tag
///
/// `pos.y` is fixed at spawn; only x advances.
#[derive(Debug, Clone)]
pub struct Actor {
    pub kind: ActorKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Signed horizontal speed in pixels per tick; the sign is the travel
    /// direction
    pub speed: f32,
}

impl Actor {
    pub fn new(kind: ActorKind, bounds: Rect, speed: f32) -> Self {
        Self {
            kind,
            pos: bounds.pos,
            size: bounds.size,
            speed,
        }
    }

    /// One tick of horizontal motion (Euler step)
    #[inline]
    pub fn advance(&mut self) {
        self.pos.x += self.speed;
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Lane membership: within half a tile of the lane's top
    #[inline]
    pub fn in_lane(&self, lane_y: f32) -> bool {
        (self.pos.y - lane_y).abs() < TILE / 2.0
    }

    /// True once the actor has left the board by the cull margin
    pub fn offboard(&self) -> bool {
        self.pos.x < -self.size.x - CULL_MARGIN || self.pos.x > BOARD_W + CULL_MARGIN
    }
}

/// Per-class actor containers owned by the session
#[derive(Debug, Clone, Default)]
pub struct Actors {
    pub vehicles: Vec<Actor>,
    pub floats: Vec<Actor>,
    pub critters: Vec<Actor>,
}

impl Actors {
    /// Drop everything (level setup)
    pub fn clear(&mut self) {
        self.vehicles.clear();
        self.floats.clear();
        self.critters.clear();
    }

    /// Advance every actor by its speed
    pub fn advance_all(&mut self) {
        for actor in self
            .vehicles
            .iter_mut()
            .chain(self.floats.iter_mut())
            .chain(self.critters.iter_mut())
        {
            actor.advance();
        }
    }

    /// Remove actors beyond the cull margin
    pub fn cull_offboard(&mut self) {
        self.vehicles.retain(|a| !a.offboard());
        self.floats.retain(|a| !a.offboard());
        self.critters.retain(|a| !a.offboard());
    }

    pub fn total(&self) -> usize {
        self.vehicles.len() + self.floats.len() + self.critters.len()
    }

    /// All actors of one kind, in container order
    pub fn of_kind(&self, kind: ActorKind) -> impl Iterator<Item = &Actor> {
        let source = match kind.class() {
            ActorClass::Vehicle => &self.vehicles,
            ActorClass::Float => &self.floats,
            ActorClass::Critter => &self.critters,
        };
        source.iter().filter(move |a| a.kind == kind)
    }
}
