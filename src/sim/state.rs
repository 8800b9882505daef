//! Game state and entity layer
//!
//! Everything that must survive a snapshot lives here: the space, the
//! vehicle, the stars, the score and the RNG stream. State is passed by
//! `&mut` through the frame entry points; there are no process-wide
//! singletons.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::RigidBody;
use super::shape::{CollisionKind, Shape};
use super::space::{BodyId, PairPolicy, Space};
use crate::consts::*;
use crate::{direction_from_angle, wrap_position};

/// Heading at spawn: screen-up (y grows downward)
pub const SPAWN_ANGLE: f32 = 3.0 * std::f32::consts::PI / 2.0;

/// Side effects for the frontend (sound triggers, telemetry)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The vehicle touched a star this substep; score was applied
    StarCollected { star: BodyId },
    /// A new star entered the world this frame
    StarSpawned { star: BodyId },
}

/// The player-controlled vehicle, wrapping one Ship-tagged body
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub body: BodyId,
}

impl Player {
    /// Body-local hull: a blunt wedge pointing along local +x
    const HULL: [Vec2; 4] = [
        Vec2::new(-25.0, -25.0),
        Vec2::new(-25.0, 25.0),
        Vec2::new(25.0, 1.0),
        Vec2::new(25.0, -1.0),
    ];

    /// Add the vehicle's body and hull to the space. The body starts at
    /// the origin; callers follow up with [`warp`](Self::warp).
    pub fn spawn(space: &mut Space) -> Self {
        let mut body = RigidBody::new(VEHICLE_MASS, VEHICLE_MOMENT);
        body.angle = SPAWN_ANGLE;
        let body = space.add(body, Shape::polygon(Self::HULL.to_vec()), CollisionKind::Ship);
        Self { body }
    }

    fn body_mut<'a>(&self, space: &'a mut Space) -> &'a mut RigidBody {
        // The ship is never queued for removal, so the handle stays valid
        // for the life of the space.
        space.body_mut(self.body).expect("ship body outlives the player")
    }

    /// Teleport without touching velocity
    pub fn warp(&self, space: &mut Space, position: Vec2) {
        self.body_mut(space).position = position;
    }

    pub fn turn_left(&self, space: &mut Space) {
        self.body_mut(space)
            .apply_torque(-TURN_TORQUE / SUBSTEPS as f32);
    }

    pub fn turn_right(&self, space: &mut Space) {
        self.body_mut(space)
            .apply_torque(TURN_TORQUE / SUBSTEPS as f32);
    }

    /// Thrust along the current heading
    pub fn accelerate(&self, space: &mut Space) {
        let body = self.body_mut(space);
        let thrust = direction_from_angle(body.angle) * (THRUST_FORCE / SUBSTEPS as f32);
        body.apply_force(thrust);
    }

    /// Full-magnitude thrust: not divided by the substep count, so holding
    /// it is roughly SUBSTEPS times stronger than [`accelerate`](Self::accelerate).
    pub fn boost(&self, space: &mut Space) {
        let body = self.body_mut(space);
        let thrust = direction_from_angle(body.angle) * THRUST_FORCE;
        body.apply_force(thrust);
    }

    /// Thrust against the current heading
    pub fn reverse(&self, space: &mut Space) {
        let body = self.body_mut(space);
        let thrust = -direction_from_angle(body.angle) * (REVERSE_FORCE / SUBSTEPS as f32);
        body.apply_force(thrust);
    }

    /// Clear the per-substep force/torque accumulators. Stars never take
    /// forces, so the vehicle's body is the only one that needs clearing.
    pub fn reset_forces(&self, space: &mut Space) {
        self.body_mut(space).reset_forces();
    }

    /// Wrap the vehicle back onto the screen torus
    pub fn validate_position(&self, space: &mut Space) {
        let body = self.body_mut(space);
        body.position = wrap_position(body.position, SCREEN_WIDTH, SCREEN_HEIGHT);
    }
}

/// A star pickup, wrapping one Star-tagged circle body
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub body: BodyId,
}

impl Star {
    /// Add a star body at the given position
    pub fn spawn(space: &mut Space, position: Vec2) -> Self {
        let mut body = RigidBody::new(STAR_MASS, STAR_MOMENT);
        body.position = position;
        body.angle = SPAWN_ANGLE;
        let body = space.add(body, Shape::circle(STAR_RADIUS), CollisionKind::Star);
        Self { body }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG stream; advances only on star spawn rolls
    rng: Pcg32,
    pub space: Space,
    pub player: Player,
    /// Live stars in spawn order
    pub stars: Vec<Star>,
    pub score: u64,
    /// Physics substeps elapsed since the run started
    pub time_ticks: u64,
    /// Bodies queued for removal; drained at the top of the next substep
    /// so collections never mutate mid-iteration
    pub pending_removals: Vec<BodyId>,
}

impl GameState {
    /// Create a fresh run: vehicle warped to screen center, no stars,
    /// score zero.
    pub fn new(seed: u64) -> Self {
        let mut space = Space::new(DAMPING);
        space.set_pair_policy(CollisionKind::Ship, CollisionKind::Star, PairPolicy::Report);
        // Stars drifting through each other is not an interaction
        space.set_pair_policy(CollisionKind::Star, CollisionKind::Star, PairPolicy::Ignore);

        let player = Player::spawn(&mut space);
        player.warp(&mut space, Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0));

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            space,
            player,
            stars: Vec::new(),
            score: 0,
            time_ticks: 0,
            pending_removals: Vec::new(),
        }
    }

    /// Roll the per-frame spawn chance; on success (and under the live
    /// cap) add a star at a uniform-random on-screen position.
    pub fn try_spawn_star(&mut self) -> Option<BodyId> {
        if self.stars.len() >= MAX_STARS {
            return None;
        }
        if self.rng.random_range(0..100u32) >= STAR_SPAWN_PERCENT {
            return None;
        }

        let position = Vec2::new(
            self.rng.random_range(0.0..SCREEN_WIDTH),
            self.rng.random_range(0.0..SCREEN_HEIGHT),
        );
        let star = Star::spawn(&mut self.space, position);
        log::debug!("star {} spawned at ({:.1}, {:.1})", star.body.0, position.x, position.y);
        self.stars.push(star);
        Some(star.body)
    }

    /// Remove every queued body and its owning star from the world
    pub fn drain_removals(&mut self) {
        for id in std::mem::take(&mut self.pending_removals) {
            self.space.remove(id);
            self.stars.retain(|s| s.body != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_run_starts_centered_facing_up() {
        let state = GameState::new(7);
        let body = state.space.body(state.player.body).expect("ship body");

        assert_eq!(body.position, Vec2::new(400.0, 300.0));
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!((body.angle - SPAWN_ANGLE).abs() < 1e-6);
        assert_eq!(state.score, 0);
        assert!(state.stars.is_empty());
    }

    #[test]
    fn test_validate_position_wraps_both_axes() {
        let mut state = GameState::new(7);
        state.player.warp(&mut state.space, Vec2::new(810.0, -5.0));
        state.player.validate_position(&mut state.space);

        let pos = state.space.body(state.player.body).expect("ship body").position;
        assert_eq!(pos, Vec2::new(10.0, 595.0));
    }

    #[test]
    fn test_spawned_star_is_on_screen() {
        let mut state = GameState::new(1234);
        // Roll until a spawn lands; 4% per roll makes 1000 tries plenty
        let id = (0..1000)
            .find_map(|_| state.try_spawn_star())
            .expect("a spawn roll should land");
        let pos = state.space.body(id).expect("star body").position;
        assert!((0.0..SCREEN_WIDTH).contains(&pos.x));
        assert!((0.0..SCREEN_HEIGHT).contains(&pos.y));
    }

    #[test]
    fn test_spawn_respects_live_cap() {
        let mut state = GameState::new(99);
        for _ in 0..10_000 {
            state.try_spawn_star();
            assert!(state.stars.len() <= MAX_STARS);
        }
        assert_eq!(state.stars.len(), MAX_STARS);
    }

    #[test]
    fn test_drain_removals_deletes_star_and_body() {
        let mut state = GameState::new(5);
        let star = Star::spawn(&mut state.space, Vec2::new(100.0, 100.0));
        state.stars.push(star);

        state.pending_removals.push(star.body);
        state.drain_removals();

        assert!(state.stars.is_empty());
        assert!(state.space.body(star.body).is_none());
        assert!(state.pending_removals.is_empty());
        // Draining an empty queue is a no-op
        state.drain_removals();
    }

    proptest! {
        #[test]
        fn validate_position_is_idempotent(
            x in -10_000.0f32..10_000.0,
            y in -10_000.0f32..10_000.0,
        ) {
            let mut state = GameState::new(0);
            state.player.warp(&mut state.space, Vec2::new(x, y));
            state.player.validate_position(&mut state.space);
            let once = state.space.body(state.player.body).expect("ship body").position;

            state.player.validate_position(&mut state.space);
            let twice = state.space.body(state.player.body).expect("ship body").position;

            prop_assert_eq!(once, twice);
            prop_assert!((0.0..SCREEN_WIDTH).contains(&once.x));
            prop_assert!((0.0..SCREEN_HEIGHT).contains(&once.y));
        }
    }
}
