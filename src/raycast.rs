//! Ray queries against simple world geometry
//!
//! Wall avoidance probes the world through the `RayCaster` trait; a physics
//! host can forward the calls to its own query pipeline. Two engine-free
//! implementations cover the common cases: the live obstacle spheres of an
//! `AgentSet` and the inward faces of a rectangular arena.

use glam::Vec3;

use crate::agent::AgentSet;
use crate::view::{GroundPlane, ViewBounds};

/// Result of a raycast
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// The point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection
    pub normal: Vec3,
    /// Distance from ray origin
    pub distance: f32,
}

/// Trait for ray queries
pub trait RayCaster {
    /// Cast a ray and return the first hit within `max_distance`.
    ///
    /// `direction` does not have to be normalized; a zero direction yields
    /// no hit.
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;
}

/// Raycasts against the bounding spheres of every live agent in a set
#[derive(Debug, Clone, Copy)]
pub struct SphereSetCaster<'a> {
    set: &'a AgentSet,
}

impl<'a> SphereSetCaster<'a> {
    /// Borrow an agent set as ray geometry
    #[must_use]
    pub fn new(set: &'a AgentSet) -> Self {
        Self { set }
    }
}

impl RayCaster for SphereSetCaster<'_> {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }

        let mut best: Option<RayHit> = None;

        for body in self.set.iter() {
            let to_center = origin - body.position;
            let b = to_center.dot(dir);
            let c = to_center.length_squared() - body.radius * body.radius;

            let discriminant = b * b - c;
            if discriminant < 0.0 {
                continue;
            }

            // Entry point only; rays starting inside a sphere miss it
            let t = -b - discriminant.sqrt();
            if t <= 0.0 || t > max_distance {
                continue;
            }

            if best.is_none_or(|hit| t < hit.distance) {
                let point = origin + dir * t;
                best = Some(RayHit {
                    point,
                    normal: (point - body.position).normalize_or_zero(),
                    distance: t,
                });
            }
        }

        best
    }
}

/// Inward-facing walls of a rectangular arena.
///
/// Models the four boundary planes of a play area; rays cast from inside hit
/// a wall with a normal pointing back into the arena.
#[derive(Debug, Clone, Copy)]
pub struct RectWalls {
    min: Vec3,
    max: Vec3,
    plane: GroundPlane,
}

impl RectWalls {
    /// Walls of an explicit rectangle
    #[must_use]
    pub fn new(bottom_left: Vec3, top_right: Vec3, plane: GroundPlane) -> Self {
        Self {
            min: bottom_left,
            max: top_right,
            plane,
        }
    }

    /// Walls of a camera-derived view rectangle
    #[must_use]
    pub fn from_view(bounds: &ViewBounds, plane: GroundPlane) -> Self {
        Self::new(bounds.bottom_left, bounds.top_right, plane)
    }

    fn wall_axes(&self) -> [usize; 2] {
        match self.plane {
            GroundPlane::Xz => [0, 2],
            GroundPlane::Xy => [0, 1],
        }
    }
}

impl RayCaster for RectWalls {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }

        let mut best: Option<RayHit> = None;

        for axis in self.wall_axes() {
            for (wall, inward) in [(self.min[axis], 1.0), (self.max[axis], -1.0)] {
                // Only walls the ray approaches from the inside
                if dir[axis] * inward >= 0.0 {
                    continue;
                }

                let t = (wall - origin[axis]) / dir[axis];
                if t <= 0.0 || t > max_distance {
                    continue;
                }

                if best.is_none_or(|hit| t < hit.distance) {
                    let mut normal = Vec3::ZERO;
                    normal[axis] = inward;
                    best = Some(RayHit {
                        point: origin + dir * t,
                        normal,
                        distance: t,
                    });
                }
            }
        }

        best
    }
}
