//! Wrap-around play area boundary
//!
//! Teleports agents that leave a rectangular region back in on the opposite
//! side, shifted by the full region width or height. Works on the x/z plane
//! for top-down 3D scenes and the x/y plane for 2D ones.

use glam::Vec3;

use crate::agent::AgentBody;
use crate::view::{GroundPlane, ViewBounds};

/// Wrap-around boundary over a rectangular region
#[derive(Debug, Clone, Copy)]
pub struct WrapBoundary {
    bottom_left: Vec3,
    top_right: Vec3,
    width_height: Vec3,
    plane: GroundPlane,
}

impl WrapBoundary {
    /// Boundary over an explicit rectangle
    #[must_use]
    pub fn new(bottom_left: Vec3, top_right: Vec3, plane: GroundPlane) -> Self {
        Self {
            bottom_left,
            top_right,
            width_height: top_right - bottom_left,
            plane,
        }
    }

    /// Boundary matching what a camera sees at the agents' depth
    #[must_use]
    pub fn from_view(bounds: &ViewBounds, plane: GroundPlane) -> Self {
        Self::new(bounds.bottom_left, bounds.top_right, plane)
    }

    fn wrap_axes(&self) -> [usize; 2] {
        match self.plane {
            GroundPlane::Xz => [0, 2],
            GroundPlane::Xy => [0, 1],
        }
    }

    /// Wrapped position for a point outside the region, `None` when the
    /// point is already inside.
    ///
    /// Each axis wraps independently, so a corner exit shifts both.
    #[must_use]
    pub fn wrapped(&self, position: Vec3) -> Option<Vec3> {
        let mut wrapped = position;
        let mut changed = false;

        for axis in self.wrap_axes() {
            if position[axis] < self.bottom_left[axis] {
                wrapped[axis] += self.width_height[axis];
                changed = true;
            } else if position[axis] > self.top_right[axis] {
                wrapped[axis] -= self.width_height[axis];
                changed = true;
            }
        }

        changed.then_some(wrapped)
    }

    /// Teleport a body back in bounds when needed; reports whether it moved
    pub fn apply(&self, body: &mut AgentBody) -> bool {
        match self.wrapped(body.position) {
            Some(position) => {
                body.position = position;
                true
            }
            None => false,
        }
    }
}
