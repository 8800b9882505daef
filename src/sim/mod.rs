//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (bodies in handle order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod shape;
pub mod space;
pub mod state;
pub mod tick;

pub use body::RigidBody;
pub use collision::shapes_overlap;
pub use shape::{CollisionKind, Shape};
pub use space::{BodyId, Contact, PairPolicy, Space};
pub use state::{GameEvent, GameState, Player, Star};
pub use tick::{InputState, frame, substep};
