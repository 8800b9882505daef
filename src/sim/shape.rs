//! Collision geometry attached to bodies

use glam::{Mat2, Vec2};
use serde::{Deserialize, Serialize};

use super::body::RigidBody;

/// Tag used to look up the pair policy when two shapes overlap
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CollisionKind {
    Ship,
    Star,
}

/// Collision geometry in body-local coordinates.
///
/// The offset shifts the geometry relative to the body's center of mass
/// and rotates with the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    /// Convex polygon; vertices are an ordered ring
    Polygon { vertices: Vec<Vec2>, offset: Vec2 },
    Circle { radius: f32, offset: Vec2 },
}

impl Shape {
    /// Convex polygon centered on the body
    pub fn polygon(vertices: Vec<Vec2>) -> Self {
        Self::Polygon {
            vertices,
            offset: Vec2::ZERO,
        }
    }

    /// Circle centered on the body
    pub fn circle(radius: f32) -> Self {
        Self::Circle {
            radius,
            offset: Vec2::ZERO,
        }
    }
}

/// Map a body-local point to world space (rotate by the body's heading,
/// then translate to its position).
#[inline]
pub fn to_world(body: &RigidBody, local: Vec2) -> Vec2 {
    body.position + Mat2::from_angle(body.angle) * local
}
