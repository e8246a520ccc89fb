//! Orchestration of a full icon generation run.
//!
//! Sequences the services and prints human-readable progress to stdout:
//!
//! 1. Resolve the project root and name
//! 2. Verify `logos/<name>/` exists
//! 3. Select the source SVG
//! 4. Create `generated/macOS/` and copy the source into `generated/`
//! 5. Load `tools/config.json`
//! 6. Rasterize every configured size
//! 7. Write `HOWTO.md`
//!
//! Any failure aborts the run; files written before it are left in place.

use crate::config::ConfigManager;
use crate::error::GenerateError;
use crate::models::GeneratedFile;
use crate::services::{
    ChoiceProvider, GUIDE_FILE_NAME, IconRasterizer, SourceSelector, resolve_project_context,
    write_guide,
};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Inputs of a run, mirroring the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the run starts from (normally the canonical working directory).
    pub start_dir: Utf8PathBuf,
    /// `--project` override.
    pub project: Option<String>,
    /// `--svg` override, relative to the project's logo directory.
    pub svg: Option<String>,
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub project_name: String,
    pub source: Utf8PathBuf,
    pub output_dir: Utf8PathBuf,
    pub guide_path: Utf8PathBuf,
    pub generated: Vec<GeneratedFile>,
}

/// Runs the whole pipeline.
///
/// # Errors
///
/// [`GenerateError`] for the handled failure classes (including cancellation);
/// anything else is an unexpected I/O or environment failure.
pub fn run(options: &RunOptions, chooser: &mut dyn ChoiceProvider) -> Result<RunSummary> {
    println!("🔍 Resolving project...");
    let context = resolve_project_context(&options.start_dir, options.project.as_deref())?;
    println!("✓ Project: {}", context.name);
    println!("✓ Project root: {}", context.root);

    let project_dir = context.project_dir();
    if !project_dir.is_dir() {
        return Err(GenerateError::ProjectDirNotFound(project_dir).into());
    }

    println!("\n🔍 Finding SVG file...");
    let svg_path = SourceSelector::new().select(&project_dir, options.svg.as_deref(), chooser)?;
    let svg_filename = svg_path
        .file_name()
        .with_context(|| format!("Source path has no file name: {}", svg_path))?
        .to_string();
    println!("✓ Using: {}", svg_filename);

    println!("\n📁 Setting up output directories...");
    let generated_dir = context.generated_dir();
    let macos_dir = context.macos_dir();
    fs::create_dir_all(&macos_dir)
        .with_context(|| format!("Failed to create output directory: {}", macos_dir))?;

    let dest_svg = generated_dir.join(&svg_filename);
    if is_same_file(&svg_path, &dest_svg) {
        tracing::debug!("Source {} already lives in generated/, not copying", svg_path);
    } else {
        fs::copy(&svg_path, &dest_svg)
            .with_context(|| format!("Failed to copy {} to {}", svg_path, dest_svg))?;
    }
    println!("✓ Copied {} to generated/", svg_filename);
    println!("✓ Output directory: {}", macos_dir);

    let config = ConfigManager::new(context.tools_dir()).load_icon_config()?;

    println!("\n🎨 Generating PNG icons...");
    let generated = IconRasterizer::new().generate_icons(&svg_path, &macos_dir, &config)?;
    println!("✓ Generated {} icon files", generated.len());

    println!("\n📝 Creating guide...");
    let guide_path = write_guide(&macos_dir, &generated, &context.name, &svg_filename)?;
    println!("\n✓ Created {}", GUIDE_FILE_NAME);

    println!("\n✅ Success! Icons generated in:");
    println!("   {}", macos_dir);
    println!("\nSee {} for instructions on adding icons to Xcode.", guide_path);

    tracing::info!(
        "Run complete: project={}, source={}, files={}",
        context.name,
        svg_filename,
        generated.len()
    );

    Ok(RunSummary {
        project_name: context.name,
        source: svg_path,
        output_dir: macos_dir,
        guide_path,
        generated,
    })
}

/// Whether `a` and `b` name the same existing file. Copying a file onto itself truncates it.
fn is_same_file(a: &Utf8Path, b: &Utf8Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize_utf8(), b.canonicalize_utf8()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
