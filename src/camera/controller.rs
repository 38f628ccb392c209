use glam::{Mat4, Quat, Vec3, Vec4};

use super::body::{MoveDirection, OrientableBody, RollDirection};
use super::core::Camera;
use crate::animation::interpolation::{
    lerp_position, nlerp_orientation, triangle_wave,
};
use crate::options::{CameraOptions, PatrolOptions};

/// Hard floor on the patrol period, in seconds, below any configured
/// `min_period`.
pub const MIN_PATROL_PERIOD: f64 = 1e-3;

/// A camera pose: world position plus unit orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// Orientation relative to the reference frame.
    pub orientation: Quat,
}

impl Pose {
    /// Pose with a normalized orientation, or `None` when `orientation`
    /// has zero or non-finite length.
    #[must_use]
    pub fn new(position: Vec3, orientation: Quat) -> Option<Self> {
        let orientation =
            Vec4::from(orientation).try_normalize().map(Quat::from_vec4)?;
        Some(Self {
            position,
            orientation,
        })
    }
}

/// Observable patrol state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatrolState {
    /// No destination has been set yet.
    Idle,
    /// A destination is stored; the camera is under manual control.
    DestinationSet,
    /// The camera shuttles between the patrol start and the destination.
    Patrolling,
}

/// Snapshot taken when patrolling starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolRun {
    /// Pose the camera had when patrolling started.
    pub start: Pose,
    /// Time patrolling started, in seconds.
    pub start_time: f64,
    /// Duration of one there-and-back cycle, in seconds. Always positive.
    pub period: f64,
}

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Free,
    Patrolling(PatrolRun),
}

/// Camera that is either flown manually or patrols autonomously between
/// a recorded start pose and a destination pose.
///
/// Manual movement, roll and pointer rotation are ignored while
/// patrolling. Calls that are invalid for the current state are dropped
/// silently rather than queued.
#[derive(Debug, Clone, PartialEq)]
pub struct PatrolController {
    camera: Camera,
    destination: Option<Pose>,
    mode: Mode,
    /// Patrol travel speed in world units per second.
    pub patrol_speed: f32,
    /// Lower bound on the patrol period, in seconds.
    pub min_period: f64,
}

impl PatrolController {
    /// Wrap a camera with default patrol tuning and no destination.
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        let defaults = PatrolOptions::default();
        Self {
            camera,
            destination: None,
            mode: Mode::Free,
            patrol_speed: defaults.speed,
            min_period: defaults.min_period,
        }
    }

    /// Wrap a camera with the given patrol tuning. The configured initial
    /// destination, if any, is applied.
    #[must_use]
    pub fn with_options(camera: Camera, options: &PatrolOptions) -> Self {
        let mut controller = Self {
            patrol_speed: options.speed,
            min_period: options.min_period,
            ..Self::new(camera)
        };
        if options.preset_destination {
            let destination = &options.destination;
            controller.set_destination(
                Vec3::from_array(destination.position),
                Quat::from_array(destination.orientation),
            );
        }
        controller
    }

    /// Build the camera and patrol tuning from options.
    #[must_use]
    pub fn from_options(camera: &CameraOptions, patrol: &PatrolOptions) -> Self {
        Self::with_options(Camera::from_options(camera), patrol)
    }

    /// Current patrol state.
    #[must_use]
    pub fn state(&self) -> PatrolState {
        match (&self.mode, self.destination) {
            (Mode::Patrolling(_), _) => PatrolState::Patrolling,
            (Mode::Free, Some(_)) => PatrolState::DestinationSet,
            (Mode::Free, None) => PatrolState::Idle,
        }
    }

    /// Whether the camera is under autonomous control.
    #[must_use]
    pub fn is_patrolling(&self) -> bool {
        matches!(self.mode, Mode::Patrolling(_))
    }

    /// The wrapped camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for retuning. Pose changes must go through
    /// the gated methods below.
    pub(crate) fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The camera's position and orientation.
    #[must_use]
    pub fn body(&self) -> &OrientableBody {
        self.camera.body()
    }

    /// Stored destination pose.
    #[must_use]
    pub fn destination(&self) -> Option<Pose> {
        self.destination
    }

    /// The active patrol snapshot.
    #[must_use]
    pub fn patrol_run(&self) -> Option<&PatrolRun> {
        match &self.mode {
            Mode::Patrolling(run) => Some(run),
            Mode::Free => None,
        }
    }

    /// Active patrol period in seconds.
    #[must_use]
    pub fn patrol_period(&self) -> Option<f64> {
        self.patrol_run().map(|run| run.period)
    }

    /// Store a destination pose. Ignored while patrolling or when the
    /// orientation cannot be normalized.
    pub fn set_destination(&mut self, position: Vec3, orientation: Quat) {
        if self.is_patrolling() {
            log::debug!("[patrol] destination ignored while patrolling");
            return;
        }
        let Some(pose) = Pose::new(position, orientation) else {
            log::debug!("[patrol] destination ignored: degenerate orientation");
            return;
        };
        self.destination = Some(pose);
        log::info!("[patrol] destination set");
    }

    /// Store the camera's own current pose as the destination.
    pub fn set_destination_here(&mut self) {
        let body = self.camera.body();
        self.set_destination(body.position(), body.orientation());
    }

    /// Start or stop patrolling.
    ///
    /// Starting snapshots the current pose and derives the period from the
    /// round-trip distance at `patrol_speed`, floored at `min_period` and
    /// never below [`MIN_PATROL_PERIOD`].
    /// Stopping freezes the camera where it is. Without a destination the
    /// call is ignored.
    pub fn toggle_patrol(&mut self, now: f64) {
        match (&self.mode, self.destination) {
            (Mode::Free, None) => {
                log::debug!("[patrol] toggle ignored: no destination");
            }
            (Mode::Free, Some(destination)) => {
                let body = self.camera.body();
                let start = Pose {
                    position: body.position(),
                    orientation: body.orientation(),
                };
                let period =
                    self.period_between(start.position, destination.position);
                self.mode = Mode::Patrolling(PatrolRun {
                    start,
                    start_time: now,
                    period,
                });
                log::info!("[patrol] start patrolling (period {period:.2}s)");
            }
            (Mode::Patrolling(_), _) => {
                self.mode = Mode::Free;
                log::info!("[patrol] stop patrolling");
            }
        }
    }

    fn period_between(&self, start: Vec3, end: Vec3) -> f64 {
        let round_trip = f64::from(start.distance(end)) * 2.0;
        let period = round_trip / f64::from(self.patrol_speed);
        // NaN from a zero speed falls through `max` to the floor.
        period.max(self.min_period).max(MIN_PATROL_PERIOD)
    }

    /// Advance the patrol to `now`. No-op unless patrolling.
    pub fn update_pose(&mut self, now: f64) {
        let (Mode::Patrolling(run), Some(destination)) =
            (&self.mode, self.destination)
        else {
            return;
        };
        let place = triangle_wave(now - run.start_time, run.period) as f32;
        let position =
            lerp_position(run.start.position, destination.position, place);
        let orientation = nlerp_orientation(
            run.start.orientation,
            destination.orientation,
            place,
        );
        self.camera.set_pose(position, orientation);
    }

    /// Manual movement; ignored while patrolling.
    pub fn move_in(&mut self, direction: MoveDirection, delta_time: f32) {
        if !self.is_patrolling() {
            self.camera.move_in(direction, delta_time);
        }
    }

    /// Manual roll; ignored while patrolling.
    pub fn roll(&mut self, direction: RollDirection, delta_time: f32) {
        if !self.is_patrolling() {
            self.camera.roll(direction, delta_time);
        }
    }

    /// Manual mouse-look; ignored while patrolling.
    pub fn rotate_from_pointer_delta(&mut self, dx: f32, dy: f32) {
        if !self.is_patrolling() {
            self.camera.rotate_from_pointer_delta(dx, dy);
        }
    }

    /// Field-of-view zoom. Allowed in every state.
    pub fn zoom(&mut self, delta: f32) {
        self.camera.zoom(delta);
    }

    /// Combined view-projection of the current pose.
    #[must_use]
    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        self.camera.view_projection(aspect_ratio)
    }
}

impl Default for PatrolController {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default(), &PatrolOptions::default())
    }
}
