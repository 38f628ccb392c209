use glam::{Mat4, Quat, Vec3};

use super::body::{MoveDirection, OrientableBody, RollDirection};
use crate::options::CameraOptions;

/// Narrowest field of view reachable by zooming, in degrees.
pub const MIN_FOVY: f32 = 1.0;
/// Widest field of view reachable by zooming, in degrees.
pub const MAX_FOVY: f32 = 45.0;

/// Free-flying perspective camera with six degrees of freedom.
///
/// The view is derived from the body's position, `front` and `up`; the
/// projection from the vertical field of view and the near/far planes.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    body: OrientableBody,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Translation speed in world units per second.
    pub movement_speed: f32,
    /// Roll speed in radians per second.
    pub roll_speed: f32,
    /// Pointer rotation in radians per pixel.
    pub mouse_sensitivity: f32,
}

impl Camera {
    /// Create a camera at `position` looking along `front` with default
    /// tuning.
    #[must_use]
    pub fn new(position: Vec3, front: Vec3) -> Self {
        let defaults = CameraOptions::default();
        Self::with_body(OrientableBody::new(position, front), &defaults)
    }

    /// Create a camera from options (initial pose and tuning).
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let body = OrientableBody::new(
            Vec3::from_array(options.position),
            Vec3::from_array(options.front),
        );
        Self::with_body(body, options)
    }

    fn with_body(body: OrientableBody, options: &CameraOptions) -> Self {
        Self {
            body,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
            movement_speed: options.movement_speed,
            roll_speed: options.roll_speed,
            mouse_sensitivity: options.mouse_sensitivity,
        }
    }

    /// The camera's position and orientation.
    #[must_use]
    pub fn body(&self) -> &OrientableBody {
        &self.body
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.body.position()
    }

    /// Unit orientation quaternion.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.body.orientation()
    }

    pub(crate) fn set_pose(&mut self, position: Vec3, orientation: Quat) {
        self.body.set_pose(position, orientation);
    }

    /// Move along a body-relative axis for `delta_time` seconds.
    pub fn move_in(&mut self, direction: MoveDirection, delta_time: f32) {
        self.body
            .move_along(direction, self.movement_speed * delta_time);
    }

    /// Roll about the viewing direction for `delta_time` seconds.
    pub fn roll(&mut self, direction: RollDirection, delta_time: f32) {
        self.body.roll(direction, self.roll_speed * delta_time);
    }

    /// Mouse-look from a cursor delta in pixels (y up).
    pub fn rotate_from_pointer_delta(&mut self, dx: f32, dy: f32) {
        self.body
            .rotate_from_pointer_delta(dx, dy, self.mouse_sensitivity);
    }

    /// Narrow (positive `delta`) or widen the field of view.
    pub fn zoom(&mut self, delta: f32) {
        self.fovy = (self.fovy - delta).clamp(MIN_FOVY, MAX_FOVY);
    }

    /// World-to-view transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let position = self.body.position();
        Mat4::look_at_rh(position, position + self.body.front(), self.body.up())
    }

    /// Perspective projection (OpenGL clip-space depth range).
    #[must_use]
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            aspect_ratio,
            self.znear,
            self.zfar,
        )
    }

    /// Combined matrix taking world space straight to clip space.
    #[must_use]
    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        self.projection_matrix(aspect_ratio) * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn defaults_match_options() {
        let camera = Camera::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(camera.fovy, 45.0);
        assert_eq!(camera.znear, 0.1);
        assert_eq!(camera.zfar, 100.0);
        assert_eq!(camera.movement_speed, 10.0);
        assert_eq!(camera.roll_speed, 1.0);
        assert_eq!(camera.mouse_sensitivity, 0.005);
    }

    #[test]
    fn view_projection_is_pure() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, -40.0), Vec3::Z);
        camera.rotate_from_pointer_delta(12.0, -3.0);
        let a = camera.view_projection(16.0 / 9.0);
        let b = camera.view_projection(16.0 / 9.0);
        assert_eq!(a.to_cols_array(), b.to_cols_array());
    }

    #[test]
    fn point_ahead_projects_to_screen_center() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -40.0), Vec3::Z);
        let clip =
            camera.view_projection(1.0) * Vec4::new(0.0, 0.0, -30.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn point_behind_is_clipped() {
        let camera = Camera::new(Vec3::ZERO, Vec3::NEG_Z);
        let clip = camera.view_projection(1.0) * Vec4::new(0.0, 0.0, 5.0, 1.0);
        assert!(clip.w < 0.0);
    }

    #[test]
    fn movement_scales_with_speed_and_time() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::NEG_Z);
        camera.move_in(MoveDirection::Forward, 0.5);
        assert!((camera.position() - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-5);
    }

    #[test]
    fn zoom_clamps_field_of_view() {
        let mut camera = Camera::default();
        camera.zoom(100.0);
        assert_eq!(camera.fovy, MIN_FOVY);
        camera.zoom(-100.0);
        assert_eq!(camera.fovy, MAX_FOVY);
    }
}
