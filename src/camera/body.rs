use glam::{Mat3, Quat, Vec3};

/// Forward axis of the reference frame.
pub const REFERENCE_FRONT: Vec3 = Vec3::NEG_Z;
/// Up axis of the reference frame.
pub const REFERENCE_UP: Vec3 = Vec3::Y;
/// Right axis of the reference frame.
pub const REFERENCE_RIGHT: Vec3 = Vec3::X;

/// Pointer deltas smaller than this on both axes are ignored.
pub const POINTER_EPSILON: f32 = 1e-6;

/// Translation direction relative to the body's own axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along `up`.
    Up,
    /// Against `up`.
    Down,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
}

/// Roll direction about the body's `front` axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollDirection {
    /// Negative angle about `front`.
    Left,
    /// Positive angle about `front`.
    Right,
}

/// A positioned, oriented entity with cached local axes.
///
/// The orientation maps the reference frame (front = -Z, up = +Y,
/// right = +X) onto the body's frame. Every rotation is composed in world
/// space (`incremental * orientation`), and the cached axes are refreshed
/// before any mutating method returns, so they are never stale.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientableBody {
    position: Vec3,
    orientation: Quat,
    front: Vec3,
    up: Vec3,
    right: Vec3,
}

impl Default for OrientableBody {
    fn default() -> Self {
        Self::from_pose(Vec3::ZERO, Quat::IDENTITY)
    }
}

impl OrientableBody {
    /// Create a body at `position` looking along `front`.
    ///
    /// The initial up vector lies in the plane spanned by `front` and +Y.
    /// A `front` parallel to +Y uses the shortest arc from the reference
    /// forward instead; a zero `front` falls back to the reference forward.
    #[must_use]
    pub fn new(position: Vec3, front: Vec3) -> Self {
        let front = front.try_normalize().unwrap_or(REFERENCE_FRONT);
        let orientation = match front.cross(REFERENCE_UP).try_normalize() {
            Some(right) => {
                let up = right.cross(front).normalize();
                Quat::from_mat3(&Mat3::from_cols(right, up, -front))
            }
            None => Quat::from_rotation_arc(REFERENCE_FRONT, front),
        };
        Self::from_pose(position, orientation)
    }

    /// Create a body from an explicit position and orientation.
    #[must_use]
    pub fn from_pose(position: Vec3, orientation: Quat) -> Self {
        let mut body = Self {
            position,
            orientation: Quat::IDENTITY,
            front: REFERENCE_FRONT,
            up: REFERENCE_UP,
            right: REFERENCE_RIGHT,
        };
        body.set_pose(position, orientation);
        body
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit orientation quaternion.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Current forward axis.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Current up axis.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Current right axis.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Signed unit axis for a movement direction.
    #[must_use]
    pub fn axis(&self, direction: MoveDirection) -> Vec3 {
        match direction {
            MoveDirection::Up => self.up,
            MoveDirection::Down => -self.up,
            MoveDirection::Left => -self.right,
            MoveDirection::Right => self.right,
            MoveDirection::Forward => self.front,
            MoveDirection::Backward => -self.front,
        }
    }

    /// Overwrite position and orientation. The orientation is normalized;
    /// a degenerate quaternion keeps the current orientation.
    pub fn set_pose(&mut self, position: Vec3, orientation: Quat) {
        self.position = position;
        if let Some(q) = normalized(orientation) {
            self.orientation = q;
        }
        self.update_axes();
    }

    /// Translate by `distance` along the body-relative `direction`.
    pub fn move_along(&mut self, direction: MoveDirection, distance: f32) {
        self.position += self.axis(direction) * distance;
        self.update_axes();
    }

    /// Rotate by `angle` radians about the current `front` axis.
    pub fn roll(&mut self, direction: RollDirection, angle: f32) {
        let signed = match direction {
            RollDirection::Left => -angle,
            RollDirection::Right => angle,
        };
        self.apply_rotation(Quat::from_axis_angle(self.front, signed));
    }

    /// Mouse-look: rotate so the view follows a screen-space drag.
    ///
    /// The drag direction `(dx, dy)` is turned into an axis perpendicular to
    /// the reference forward, carried into the body frame by the current
    /// orientation, and rotated about by `sensitivity * |(dx, dy)|`.
    pub fn rotate_from_pointer_delta(
        &mut self,
        dx: f32,
        dy: f32,
        sensitivity: f32,
    ) {
        if let Some(rotation) =
            pointer_rotation(self.orientation, dx, dy, sensitivity)
        {
            self.apply_rotation(rotation);
        }
    }

    /// Compose a world-space rotation on the left of the orientation.
    pub fn apply_rotation(&mut self, incremental: Quat) {
        if let Some(q) = normalized(incremental * self.orientation) {
            self.orientation = q;
        }
        self.update_axes();
    }

    fn update_axes(&mut self) {
        self.front = self.orientation * REFERENCE_FRONT;
        self.up = self.orientation * REFERENCE_UP;
        self.right = self.orientation * REFERENCE_RIGHT;
    }
}

/// World-space incremental rotation produced by a pointer drag, or `None`
/// when the drag is below [`POINTER_EPSILON`] on both axes.
#[must_use]
pub fn pointer_rotation(
    orientation: Quat,
    dx: f32,
    dy: f32,
    sensitivity: f32,
) -> Option<Quat> {
    if dx.abs() < POINTER_EPSILON && dy.abs() < POINTER_EPSILON {
        return None;
    }
    let drag = Vec3::new(dx, dy, 0.0).try_normalize()?;
    let local_axis = REFERENCE_FRONT.cross(drag).try_normalize()?;
    let angle = sensitivity * dx.hypot(dy);
    Some(Quat::from_axis_angle(orientation * local_axis, angle))
}

fn normalized(q: Quat) -> Option<Quat> {
    let len = q.length();
    (len.is_finite() && len > f32::EPSILON).then(|| q / len)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    const EPS: f32 = 1e-5;

    fn same_rotation(a: Quat, b: Quat) -> bool {
        a.dot(b).abs() > 1.0 - EPS
    }

    fn yawed() -> OrientableBody {
        OrientableBody::from_pose(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_rotation_y(FRAC_PI_2),
        )
    }

    fn assert_orthonormal(body: &OrientableBody) {
        assert!((body.front().length() - 1.0).abs() < EPS);
        assert!((body.up().length() - 1.0).abs() < EPS);
        assert!((body.right().length() - 1.0).abs() < EPS);
        assert!(body.front().dot(body.up()).abs() < EPS);
        assert!(body.front().dot(body.right()).abs() < EPS);
        assert!(body.up().dot(body.right()).abs() < EPS);
        assert!(body.orientation().is_normalized());
    }

    #[test]
    fn default_body_uses_reference_frame() {
        let body = OrientableBody::default();
        assert_eq!(body.front(), REFERENCE_FRONT);
        assert_eq!(body.up(), REFERENCE_UP);
        assert_eq!(body.right(), REFERENCE_RIGHT);
    }

    #[test]
    fn new_keeps_up_in_front_y_plane() {
        let body =
            OrientableBody::new(Vec3::new(0.0, 0.0, -40.0), Vec3::Z * 3.0);
        assert!((body.front() - Vec3::Z).length() < EPS);
        assert!((body.up() - Vec3::Y).length() < EPS);
        assert!((body.right() - Vec3::NEG_X).length() < EPS);
        assert_eq!(body.position(), Vec3::new(0.0, 0.0, -40.0));
        assert_orthonormal(&body);
    }

    #[test]
    fn new_handles_vertical_and_zero_front() {
        let looking_up = OrientableBody::new(Vec3::ZERO, Vec3::Y);
        assert!((looking_up.front() - Vec3::Y).length() < EPS);
        assert_orthonormal(&looking_up);

        let zero = OrientableBody::new(Vec3::ZERO, Vec3::ZERO);
        assert!((zero.front() - REFERENCE_FRONT).length() < EPS);
    }

    #[test]
    fn move_with_zero_distance_is_idempotent() {
        let mut body = yawed();
        let before = body.position();
        for direction in [
            MoveDirection::Up,
            MoveDirection::Down,
            MoveDirection::Left,
            MoveDirection::Right,
            MoveDirection::Forward,
            MoveDirection::Backward,
        ] {
            body.move_along(direction, 0.0);
        }
        assert_eq!(body.position(), before);
    }

    #[test]
    fn move_follows_body_axes_not_world_axes() {
        let mut body = yawed();
        let start = body.position();
        body.move_along(MoveDirection::Forward, 2.0);
        // Yawed 90° about +Y: forward points along -X.
        assert!((body.position() - (start + Vec3::NEG_X * 2.0)).length() < EPS);
        body.move_along(MoveDirection::Right, 1.0);
        assert!(
            (body.position() - (start + Vec3::new(-2.0, 0.0, -1.0))).length()
                < EPS
        );
    }

    #[test]
    fn roll_composes_on_the_left() {
        let mut body = yawed();
        let old = body.orientation();
        let front = body.front();
        body.roll(RollDirection::Right, 0.3);

        let expected = Quat::from_axis_angle(front, 0.3) * old;
        let swapped = old * Quat::from_axis_angle(front, 0.3);
        assert!(same_rotation(body.orientation(), expected));
        assert!(!same_rotation(body.orientation(), swapped));
        // Rolling keeps the viewing direction.
        assert!((body.front() - front).length() < EPS);
    }

    #[test]
    fn roll_left_is_negative_angle() {
        let mut body = OrientableBody::default();
        body.roll(RollDirection::Left, FRAC_PI_2);
        // -90° about -Z turns the right axis onto +Y.
        assert!((body.right() - Vec3::Y).length() < EPS);
        assert_orthonormal(&body);
    }

    #[test]
    fn pointer_below_epsilon_is_noop() {
        let mut body = yawed();
        let before = body.clone();
        body.rotate_from_pointer_delta(1e-7, -1e-7, 0.005);
        assert_eq!(body, before);
        assert!(pointer_rotation(before.orientation(), 0.0, 0.0, 1.0).is_none());
    }

    #[test]
    fn pointer_rotation_composes_on_the_left() {
        let mut body = yawed();
        let old = body.orientation();
        body.rotate_from_pointer_delta(3.0, 4.0, 0.01);

        // Drag (0.6, 0.8) gives local axis (-Z) x drag = (0.8, -0.6, 0).
        let axis = old * Vec3::new(0.8, -0.6, 0.0);
        let incremental = Quat::from_axis_angle(axis, 0.05);
        assert!(same_rotation(body.orientation(), incremental * old));
        assert!(!same_rotation(body.orientation(), old * incremental));
        assert_orthonormal(&body);
    }

    #[test]
    fn dragging_right_turns_view_right() {
        let mut body = OrientableBody::default();
        body.rotate_from_pointer_delta(10.0, 0.0, 0.01);
        assert!(body.front().x > 0.0);
        assert!(body.front().y.abs() < EPS);
    }

    #[test]
    fn axes_stay_orthonormal_after_many_rotations() {
        let mut body = yawed();
        for i in 0..500 {
            body.roll(RollDirection::Right, 0.013);
            body.rotate_from_pointer_delta(
                (i % 7) as f32 - 3.0,
                (i % 5) as f32 - 2.0,
                0.005,
            );
        }
        assert_orthonormal(&body);
    }

    #[test]
    fn set_pose_ignores_degenerate_orientation() {
        let mut body = yawed();
        let old = body.orientation();
        body.set_pose(Vec3::ONE, Quat::from_xyzw(0.0, 0.0, 0.0, 0.0));
        assert_eq!(body.orientation(), old);
        assert_eq!(body.position(), Vec3::ONE);
    }
}
