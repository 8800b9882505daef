//! Rigid body state and symplectic-Euler integration

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single rigid body: linear and angular state plus the force/torque
/// accumulated during the current substep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigidBody {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading in radians
    pub angle: f32,
    pub angular_velocity: f32,
    pub mass: f32,
    pub moment_of_inertia: f32,
    /// Force accumulated since the last [`reset_forces`](Self::reset_forces)
    pub force: Vec2,
    /// Torque accumulated since the last [`reset_forces`](Self::reset_forces)
    pub torque: f32,
}

impl RigidBody {
    /// Create a body at rest at the origin.
    ///
    /// # Panics
    ///
    /// Panics unless mass and moment of inertia are finite and strictly
    /// positive: the integrator divides by both.
    pub fn new(mass: f32, moment_of_inertia: f32) -> Self {
        assert!(
            mass.is_finite() && mass > 0.0,
            "body mass must be positive, got {mass}"
        );
        assert!(
            moment_of_inertia.is_finite() && moment_of_inertia > 0.0,
            "moment of inertia must be positive, got {moment_of_inertia}"
        );
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            mass,
            moment_of_inertia,
            force: Vec2::ZERO,
            torque: 0.0,
        }
    }

    /// Accumulate a force through the center of mass.
    ///
    /// Off-center application is not modeled: forces never induce torque.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Accumulate a torque.
    pub fn apply_torque(&mut self, torque: f32) {
        self.torque += torque;
    }

    /// Zero both accumulators.
    ///
    /// Must run exactly once at the top of every substep, before any force
    /// is applied for that substep; accumulated forces never carry over.
    pub fn reset_forces(&mut self) {
        self.force = Vec2::ZERO;
        self.torque = 0.0;
    }

    /// Advance by `dt` with symplectic Euler: velocity first, then position.
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.force / self.mass * dt;
        self.position += self.velocity * dt;
        self.angular_velocity += self.torque / self.moment_of_inertia * dt;
        self.angle += self.angular_velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_applies_accumulated_force() {
        let mut body = RigidBody::new(2.0, 1.0);
        body.apply_force(Vec2::new(4.0, 0.0));
        body.integrate(0.5);

        // v += F/m * dt = 4/2 * 0.5 = 1; p += v * dt = 0.5
        assert!((body.velocity.x - 1.0).abs() < 1e-6);
        assert!((body.position.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_integrate_applies_accumulated_torque() {
        let mut body = RigidBody::new(1.0, 4.0);
        body.apply_torque(8.0);
        body.integrate(0.5);

        // ω += τ/I * dt = 8/4 * 0.5 = 1; θ += ω * dt = 0.5
        assert!((body.angular_velocity - 1.0).abs() < 1e-6);
        assert!((body.angle - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_forces_accumulate_until_reset() {
        let mut body = RigidBody::new(1.0, 1.0);
        body.apply_force(Vec2::new(1.0, 0.0));
        body.apply_force(Vec2::new(2.0, 1.0));
        body.apply_torque(3.0);
        body.apply_torque(-1.0);

        assert_eq!(body.force, Vec2::new(3.0, 1.0));
        assert_eq!(body.torque, 2.0);
    }

    #[test]
    fn test_reset_isolates_substeps() {
        let mut body = RigidBody::new(1.0, 1.0);
        body.apply_force(Vec2::new(100.0, 0.0));
        body.apply_torque(50.0);
        body.integrate(0.1);

        let velocity = body.velocity;
        let angular_velocity = body.angular_velocity;
        let position = body.position;

        // A later substep with no applied forces must coast: velocity
        // unchanged, position advanced by that velocity only.
        body.reset_forces();
        body.integrate(0.1);

        assert_eq!(body.velocity, velocity);
        assert_eq!(body.angular_velocity, angular_velocity);
        let expected = position + velocity * 0.1;
        assert!((body.position - expected).length() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "mass must be positive")]
    fn test_zero_mass_rejected() {
        let _ = RigidBody::new(0.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "moment of inertia must be positive")]
    fn test_zero_moment_rejected() {
        let _ = RigidBody::new(1.0, 0.0);
    }
}
