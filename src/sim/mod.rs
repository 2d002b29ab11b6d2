//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (containers are push/retain ordered)
//! - No rendering or platform dependencies

pub mod actor;
pub mod frog;
pub mod hazard;
pub mod lane;
pub mod rect;
pub mod snapshot;
pub mod spacing;
pub mod spawn;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorClass, ActorKind, Actors};
pub use frog::{Facing, Frog};
pub use hazard::HazardOutcome;
pub use lane::Lane;
pub use rect::Rect;
pub use snapshot::Snapshot;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
