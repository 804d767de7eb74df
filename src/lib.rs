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

//! CPU hover/click picking engine for 3D scenes.
//!
//! Raypick turns a per-frame stream of ray-cast hit results into discrete
//! enter/leave/click events on a fixed set of pickable objects, plus a
//! per-object highlight decision applied every frame.
//!
//! # Key entry points
//!
//! - [`session::PickSession`] - owns the registry, hover state, and pointer;
//!   drives one picking pass per frame
//! - [`picking::PickRegistry`] - the set of objects eligible for picking
//! - [`raycast::Raycaster`] - the oracle seam an embedding engine implements
//! - [`picking::PickHandler`] - enter/leave/click event sink
//! - [`options::Options`] - runtime configuration (camera, viewport, scene,
//!   driver)
//!
//! # Architecture
//!
//! The embedding driver calls [`session::PickSession::frame`] once per
//! animation tick. The session builds a picking ray from the tracked pointer
//! via [`camera::Camera::pick_ray`], queries the [`raycast::Raycaster`]
//! oracle against the registry, restores ascending-distance order, applies
//! the highlight pass, and advances the hover state machine — emitting
//! enter/leave events through the handler. Clicks arrive asynchronously via
//! [`session::PickSession::activate`] and resolve against the hover state of
//! the most recent completed frame, never a fresh oracle query.
//!
//! Everything is single-threaded and cooperative: the session is `&mut self`
//! throughout, so frame ticks and click events must be serialized onto one
//! logical thread by the caller.

pub mod camera;
pub mod error;
pub mod input;
pub mod motion;
pub mod options;
pub mod picking;
pub mod raycast;
pub mod session;
