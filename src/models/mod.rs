//! Data models for the icon generator.
//!
//! These are plain values produced once per run and passed between the services:
//! - [`IconConfig`]: Size list and retina toggle loaded from `tools/config.json`
//! - [`ProjectContext`]: Project root and name resolved from the working directory
//! - [`ProjectMatch`]: Tagged result of the two project-resolution strategies
//! - [`GeneratedFile`]: One rasterized PNG, consumed by the guide writer
//!
//! None of them are mutated after construction.

pub mod config;
pub mod icon;
pub mod project;

pub use config::{DEFAULT_ICON_SIZES, IconConfig, MAX_ICON_SIZE};
pub use icon::GeneratedFile;
pub use project::{LOGOS_DIR, ProjectContext, ProjectMatch};
