// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orientation, patrol and gesture core for an animated hand viewer.
//!
//! Phalanx drives a quaternion six-degrees-of-freedom camera that can be
//! flown by hand or set to patrol between two poses, a movable point light,
//! and time-driven finger gestures for a five-finger hand skeleton. It
//! produces matrices and joint transforms only; windowing, mesh skinning
//! and draw calls belong to the host application.
//!
//! # Key entry points
//!
//! - [`engine::HandEngine`] - owns all animated state and runs frames
//! - [`camera::PatrolController`] - camera with the patrol state machine
//! - [`animation::HandAnimator`] - per-finger gesture bindings
//! - [`input::InputProcessor`] - folds window events into
//!   [`input::FrameInput`]
//! - [`options::Options`] - runtime configuration (camera, patrol,
//!   gestures, light, keybindings)
//! - [`render::RenderSink`] - where each frame's output goes
//!
//! # Frame order
//!
//! Within a frame, input is applied first, then the patrol pose and joint
//! transforms are derived for the frame time, then the results are read
//! for rendering. [`engine::HandEngine::tick`] followed by
//! [`engine::HandEngine::render`] keeps that order.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod light;
pub mod options;
pub mod render;
pub mod skeleton;
pub mod util;

pub use engine::HandEngine;
pub use error::PhalanxError;
pub use options::Options;
