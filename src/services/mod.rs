//! Services module - the steps of an icon generation run.
//!
//! Each service is plain synchronous code with explicit inputs, so it can be driven
//! by the command line runner or exercised directly from tests.
//!
//! # Components
//!
//! - [`project`]: Locates the project root and name from the working directory
//! - [`source`]: Picks the source SVG by the `NN_name.svg` convention, with a
//!   [`ChoiceProvider`] to settle ties
//! - [`rasterize`]: Renders the SVG to `icon_NxN.png` and `icon_NxN@2x.png` with resvg
//! - [`guide`]: Writes `HOWTO.md` describing the generated files
//!
//! # Usage Example
//!
//! ```ignore
//! use macos_icons::services::{IconRasterizer, SourceSelector, FixedChoice, write_guide};
//!
//! let svg = SourceSelector::new().select(&project_dir, None, &mut FixedChoice(0))?;
//! let files = IconRasterizer::new().generate_icons(&svg, &macos_dir, &config)?;
//! write_guide(&macos_dir, &files, "SafarAI", "18_atomic_orbit.svg")?;
//! ```

pub mod guide;
pub mod project;
pub mod rasterize;
pub mod source;

pub use guide::{GUIDE_FILE_NAME, group_by_base_size, render_guide, write_guide};
pub use project::{find_project, resolve_project_context};
pub use rasterize::{IconRasterizer, RasterizeError, plan_icons};
pub use source::{
    Answer, ChoiceProvider, FixedChoice, LineChoiceProvider, NumberedSource, SourceSelector,
    TerminalChoiceProvider, parse_answer,
};
