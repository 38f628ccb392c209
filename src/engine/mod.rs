//! The per-frame driver tying camera, light and hand together.
//!
//! A frame runs in a fixed order: [`apply_input`](HandEngine::apply_input)
//! mutates state from the frame's input, [`update`](HandEngine::update)
//! derives the patrol pose and joint transforms for the frame time, and
//! [`render`](HandEngine::render) hands the results to a
//! [`RenderSink`](crate::render::RenderSink). [`tick`](HandEngine::tick)
//! runs the first two back to back.

mod accessors;
mod frame;
mod input;
mod options;

use crate::animation::{Gesture, GestureSet, HandAnimator};
use crate::camera::PatrolController;
use crate::error::PhalanxError;
use crate::light::LightSource;
use crate::options::Options;
use crate::skeleton::SkeletonPose;

/// Owns all animated state of the hand viewer.
#[derive(Debug, Clone)]
pub struct HandEngine {
    /// Options the engine was built or last retuned with.
    options: Options,
    /// Camera with patrol state machine.
    camera: PatrolController,
    /// Movable point light.
    light: LightSource,
    /// Gesture instances hand shapes are built from.
    gestures: GestureSet,
    /// Per-finger gesture bindings.
    hand: HandAnimator,
    /// Joint transforms written by the hand animator.
    pose: SkeletonPose,
    /// Set once a quit action has been applied.
    quit_requested: bool,
    /// Frames advanced through [`tick`](Self::tick).
    frame_count: u64,
}

impl HandEngine {
    /// Build the engine from options without validating them.
    ///
    /// Every finger starts bound to the idle gesture and the skeleton
    /// starts at identity.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let camera =
            PatrolController::from_options(&options.camera, &options.patrol);
        let light = LightSource::from_options(&options.light);
        let gestures = GestureSet::from_options(&options.gesture);
        log::info!(
            "[engine] camera at {:?}, patrol {:?}",
            camera.body().position(),
            camera.state()
        );
        Self {
            options,
            camera,
            light,
            gestures,
            hand: HandAnimator::new(Some(Gesture::Idle)),
            pose: SkeletonPose::default(),
            quit_requested: false,
            frame_count: 0,
        }
    }

    /// Validate options, then build the engine.
    ///
    /// # Errors
    ///
    /// Returns [`PhalanxError::InvalidOption`] if `options` fail
    /// validation.
    pub fn try_new(options: Options) -> Result<Self, PhalanxError> {
        options.validate()?;
        Ok(Self::new(options))
    }
}

impl Default for HandEngine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
