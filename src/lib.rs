//! Stardrift - a toroidal arcade driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rigid bodies, collisions, game state)
//! - `render`: Layered frame description handed to a rendering collaborator
//!
//! Windowing, image decoding, audio playback and key polling are not part
//! of this crate. A frontend feeds `sim::frame` an input snapshot once per
//! rendered frame, maps the returned events to sounds, and draws whatever
//! `render::build_frame` describes.

pub mod render;
pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical screen size in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Physics substeps per rendered frame
    pub const SUBSTEPS: u32 = 6;
    /// Wall-clock length of one rendered frame (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Fixed timestep of one physics substep
    pub const SIM_DT: f32 = FRAME_DT / SUBSTEPS as f32;

    /// Fraction of velocity remaining after one second of coasting
    pub const DAMPING: f32 = 0.2;

    /// Vehicle tuning
    pub const TURN_TORQUE: f32 = 400.0;
    pub const THRUST_FORCE: f32 = 3000.0;
    pub const REVERSE_FORCE: f32 = 1000.0;
    pub const VEHICLE_MASS: f32 = 10.0;
    pub const VEHICLE_MOMENT: f32 = 150.0;

    /// Star tuning. Mass is near-zero (never zero, the integrator divides
    /// by it) so contact cannot shove the vehicle.
    pub const STAR_MASS: f32 = 0.0001;
    pub const STAR_MOMENT: f32 = 0.0001;
    pub const STAR_RADIUS: f32 = 12.5;
    /// At most this many stars alive at once
    pub const MAX_STARS: usize = 25;
    /// Percent chance per rendered frame that a star spawns
    pub const STAR_SPAWN_PERCENT: u32 = 4;

    /// Points per vehicle/star contact
    pub const SCORE_PER_STAR: u64 = 10;
}

/// Unit direction vector for a heading in radians: `(cos θ, sin θ)`
#[inline]
pub fn direction_from_angle(radians: f32) -> Vec2 {
    Vec2::new(radians.cos(), radians.sin())
}

/// Wrap a position onto the `[0, width) × [0, height)` torus.
///
/// Euclidean remainder, so positions that went negative wrap to the far
/// edge instead of mirroring around zero.
#[inline]
pub fn wrap_position(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap_axis(pos.x, width), wrap_axis(pos.y, height))
}

#[inline]
fn wrap_axis(v: f32, extent: f32) -> f32 {
    let r = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` itself for tiny negative inputs
    if r >= extent { r - extent } else { r }
}
