//! Camera math and view-derived bounds
//!
//! A read-only perspective camera and the world-space rectangle its frustum
//! covers at a given depth. The rectangle feeds the spawner's placement area
//! and the wrap-around boundary.

use glam::{Mat4, Vec2, Vec3};

/// Which world plane grounded agents move in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundPlane {
    /// 3D top-down: x/z, wrap and spawn ignore y
    Xz,
    /// 2D side or top view: x/y, wrap and spawn ignore z
    Xy,
}

/// Perspective camera used for bounds derivation
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Direction the camera is looking at
    pub direction: Vec3,
    /// Up vector
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
}

impl Camera {
    /// Create a new camera with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::NEG_Z,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 1000.0,
            aspect: 16.0 / 9.0,
        }
    }

    /// Create a camera at a specific position looking at a target
    #[must_use]
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        let mut camera = Self::new();
        camera.position = position;
        camera.direction = (target - position).normalize_or_zero();
        camera.up = up;
        camera
    }

    /// Get the view matrix
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.direction, self.up)
    }

    /// Get the projection matrix
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get combined view-projection matrix
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update aspect ratio
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// World-space point for a viewport coordinate at a view depth.
    ///
    /// Viewport runs (0,0) bottom-left to (1,1) top-right; depth is measured
    /// along the camera's forward axis.
    #[must_use]
    pub fn viewport_to_world(&self, viewport: Vec2, depth: f32) -> Vec3 {
        let forward = self.direction.normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);

        let half_height = (self.fov * 0.5).tan() * depth;
        let half_width = half_height * self.aspect;

        self.position
            + forward * depth
            + right * (viewport.x * 2.0 - 1.0) * half_width
            + up * (viewport.y * 2.0 - 1.0) * half_height
    }

    /// Distance of a point along the camera's forward axis
    #[must_use]
    pub fn depth_of(&self, point: Vec3) -> f32 {
        (point - self.position).dot(self.direction.normalize_or_zero())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// World-space rectangle covered by the view at some depth
#[derive(Debug, Clone, Copy)]
pub struct ViewBounds {
    /// Component-wise minimum corner
    pub bottom_left: Vec3,
    /// Component-wise maximum corner
    pub top_right: Vec3,
    /// `top_right - bottom_left`
    pub width_height: Vec3,
}

impl ViewBounds {
    /// Bounds of the view frustum slice at a given forward depth
    #[must_use]
    pub fn at_depth(camera: &Camera, depth: f32) -> Self {
        let a = camera.viewport_to_world(Vec2::new(0.0, 0.0), depth);
        let b = camera.viewport_to_world(Vec2::new(1.0, 1.0), depth);

        // Corner order depends on camera orientation; normalize to min/max
        let bottom_left = a.min(b);
        let top_right = a.max(b);

        Self {
            bottom_left,
            top_right,
            width_height: top_right - bottom_left,
        }
    }

    /// Bounds at the depth of a world point (the plane agents move in)
    #[must_use]
    pub fn at_point(camera: &Camera, point: Vec3) -> Self {
        Self::at_depth(camera, camera.depth_of(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_down_camera(height: f32) -> Camera {
        let mut camera = Camera::look_at(Vec3::new(0.0, height, 0.0), Vec3::ZERO, Vec3::Z);
        camera.fov = std::f32::consts::FRAC_PI_2;
        camera.aspect = 1.0;
        camera
    }

    #[test]
    fn test_viewport_center_lands_on_forward_axis() {
        let camera = top_down_camera(10.0);
        let center = camera.viewport_to_world(Vec2::new(0.5, 0.5), 10.0);

        assert!((center - Vec3::ZERO).length() < 0.001);
    }

    #[test]
    fn test_bounds_symmetric_for_top_down_camera() {
        let camera = top_down_camera(10.0);
        let bounds = ViewBounds::at_depth(&camera, 10.0);

        // 90 degree fov at depth 10 spans 20 units each way
        assert!((bounds.width_height.x - 20.0).abs() < 0.01);
        assert!((bounds.width_height.z - 20.0).abs() < 0.01);
        assert!((bounds.bottom_left.x + 10.0).abs() < 0.01);
        assert!((bounds.top_right.z - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_depth_of_ground_point() {
        let camera = top_down_camera(10.0);
        let depth = camera.depth_of(Vec3::new(3.0, 0.0, -2.0));

        assert!((depth - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_bounds_at_point_matches_at_depth() {
        let camera = top_down_camera(8.0);
        let a = ViewBounds::at_point(&camera, Vec3::ZERO);
        let b = ViewBounds::at_depth(&camera, 8.0);

        assert!((a.bottom_left - b.bottom_left).length() < 0.001);
    }
}
