//! Narrow-phase collision: convex polygon vs circle
//!
//! The circle overlaps the polygon when its center lies inside, or when
//! the closest point on any edge is within the radius. Touching counts as
//! a hit (distance equal to the radius reports an overlap).

use glam::Vec2;

use super::body::RigidBody;
use super::shape::{Shape, to_world};

/// Overlap verdict for two shapes in world space.
///
/// Only the polygon/circle pairing is modeled; same-variant pairings
/// report no overlap. The verdict is symmetric in its arguments: both
/// orders funnel into the same kernel.
pub fn shapes_overlap(a: &Shape, body_a: &RigidBody, b: &Shape, body_b: &RigidBody) -> bool {
    match (a, b) {
        (
            Shape::Polygon { vertices, offset },
            Shape::Circle {
                radius,
                offset: circle_offset,
            },
        ) => polygon_circle_overlap(
            vertices,
            *offset,
            body_a,
            to_world(body_b, *circle_offset),
            *radius,
        ),
        (
            Shape::Circle {
                radius,
                offset: circle_offset,
            },
            Shape::Polygon { vertices, offset },
        ) => polygon_circle_overlap(
            vertices,
            *offset,
            body_b,
            to_world(body_a, *circle_offset),
            *radius,
        ),
        _ => false,
    }
}

/// Closest-point test between a body-attached convex polygon and a circle
/// given by world-space center and radius.
fn polygon_circle_overlap(
    vertices: &[Vec2],
    offset: Vec2,
    body: &RigidBody,
    center: Vec2,
    radius: f32,
) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let world: Vec<Vec2> = vertices.iter().map(|&v| to_world(body, offset + v)).collect();

    if point_in_convex_polygon(&world, center) {
        return true;
    }

    min_distance_sq_to_ring(&world, center) <= radius * radius
}

/// Convex containment via edge cross products; winding-agnostic (all
/// cross products share a sign, either orientation).
fn point_in_convex_polygon(ring: &[Vec2], point: Vec2) -> bool {
    let mut sign = 0.0f32;
    for (i, &a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        let cross = (b - a).perp_dot(point - a);
        if cross != 0.0 {
            if sign != 0.0 && cross.signum() != sign {
                return false;
            }
            sign = cross.signum();
        }
    }
    true
}

/// Squared distance from `point` to the nearest point on the closed ring
fn min_distance_sq_to_ring(ring: &[Vec2], point: Vec2) -> f32 {
    let mut best = f32::INFINITY;
    for (i, &a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        best = best.min(segment_distance_sq(a, b, point));
    }
    best
}

fn segment_distance_sq(a: Vec2, b: Vec2, point: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return (point - a).length_squared();
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (point - (a + ab * t)).length_squared()
}
