// macos-icons - Generate macOS app icon sets from numbered SVG logos
//
// This is the library crate containing project resolution, source selection,
// rasterization and guide generation. The binary crate (main.rs) provides the CLI.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod runner;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use error::GenerateError;
pub use models::{GeneratedFile, IconConfig, ProjectContext, ProjectMatch};
pub use runner::{RunOptions, RunSummary, run};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
