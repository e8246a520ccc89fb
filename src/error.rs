use crate::services::rasterize::RasterizeError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Handled failures of an icon generation run.
///
/// Every variant except [`GenerateError::Cancelled`] terminates the binary with exit code 1.
/// Errors that are not a `GenerateError` are reported as unexpected.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(
        "Error: Not in a project with logos/ directory.\n\
         Please run this tool from within your project or specify --project."
    )]
    ProjectNotFound { start: Utf8PathBuf },

    #[error(
        "Error: Could not auto-detect project name.\n\
         Please specify project name with --project option."
    )]
    ProjectNameMissing,

    #[error("Error: Project directory not found: {0}\nPlease check the project name and try again.")]
    ProjectDirNotFound(Utf8PathBuf),

    #[error("Error: Specified SVG file not found: {0}\nPlease check the filename and try again.")]
    SourceNotFound(Utf8PathBuf),

    #[error(
        "Error: No numbered SVG files found in {0}\n\
         Expected files matching pattern: NN_*.svg (e.g., 01_logo.svg)"
    )]
    NoNumberedSources(Utf8PathBuf),

    #[error("Error: Choice {index} is out of range for {count} candidates")]
    InvalidChoice { index: usize, count: usize },

    #[error("Error: Icon size {0} is outside 1..={max}", max = crate::models::MAX_ICON_SIZE)]
    InvalidIconSize(u32),

    #[error("Error generating {filename}: {source}")]
    Rasterize {
        filename: String,
        #[source]
        source: RasterizeError,
    },

    #[error("Operation cancelled by user.")]
    Cancelled,
}

impl GenerateError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            GenerateError::Cancelled => 0,
            _ => 1,
        }
    }
}
