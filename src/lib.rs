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

//! Small-molecule viewer core.
//!
//! Molview reads an MDL molfile (V2000 connection table), builds an
//! in-memory [`model::Molecule`], and turns it into a transform-free group
//! of ball-and-stick primitives that any 3D host can attach, frame, and
//! animate.
//!
//! # Key entry points
//!
//! - [`io::molfile::parse`] - molfile text to [`model::Molecule`]
//! - [`renderer::geometry::build_molecule_group`] - molecule to
//!   [`renderer::geometry::MoleculeGroup`]
//! - [`scene::SceneHost`] - headless host: camera, lighting, load status,
//!   auto-rotation
//! - [`loader::LoadPipeline`] - fetch on a background thread, then
//!   parse-and-build on the host thread
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Data flow
//!
//! raw text → [`io::columns`] → [`io::molfile`] → [`model::Molecule`] →
//! [`renderer::geometry`] → [`renderer::geometry::MoleculeGroup`] →
//! [`scene::SceneHost`].

pub mod camera;
pub mod error;
pub mod io;
pub mod loader;
pub mod model;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;

pub use error::MolviewError;
