use crate::models::GeneratedFile;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;

/// File name of the generated guide.
pub const GUIDE_FILE_NAME: &str = "HOWTO.md";

const INTEGRATION_STEPS: &str = r#"## Adding Icons to Xcode

### AppIcon (Main App Icon)

1. Open your Xcode project
2. In the Project Navigator, select `Assets.xcassets`
3. Select `AppIcon` in the asset catalog
4. Drag and drop the PNG files into the appropriate slots:
   - 16x16: Use `icon_16x16.png` and `icon_16x16@2x.png`
   - 32x32: Use `icon_32x32.png` and `icon_32x32@2x.png`
   - 128x128: Use `icon_128x128.png` and `icon_128x128@2x.png`
   - 256x256: Use `icon_256x256.png` and `icon_256x256@2x.png`
   - 512x512: Use `icon_512x512.png` and `icon_512x512@2x.png`

### LargeIcon (Safari Web Extension)

For Safari Web Extensions, you also need to fill the **LargeIcon** asset (shown in Safari's Preferences/Extensions panel):

1. In `Assets.xcassets`, select `LargeIcon`
2. Drag and drop:
   - **1x slot**: Use `icon_512x512.png` (or `icon_256x256.png`)
   - **2x slot**: Use `icon_512x512@2x.png` (1024px)
   - **3x slot**: Optional (less common on macOS)

### Troubleshooting

- **Icon not updating**: Clean build folder (Cmd+Shift+K) and rebuild
- **Wrong size displayed**: Verify you're using the correct @2x variants for retina displays
- **Blurry icons**: Make sure you're using both standard and @2x variants

## Notes

- These icons are optimized for macOS applications
- The @2x variants provide sharp display on Retina screens
- Always test your icons at different sizes to ensure they remain clear and recognizable
"#;

/// Groups files by base size, ascending. Files keep their relative order within a group.
pub fn group_by_base_size(files: &[GeneratedFile]) -> BTreeMap<u32, Vec<&GeneratedFile>> {
    let mut groups: BTreeMap<u32, Vec<&GeneratedFile>> = BTreeMap::new();
    for file in files {
        groups.entry(file.base_size()).or_default().push(file);
    }
    groups
}

/// Renders the Markdown guide.
///
/// Output depends only on the arguments, so repeated runs produce identical documents.
pub fn render_guide(files: &[GeneratedFile], project_name: &str, svg_filename: &str) -> String {
    let mut guide = format!(
        "# How to Add Icons to Xcode Project\n\n\
         ## Generated Icons for {project_name}\n\n\
         Source SVG: `{svg_filename}`\n\n\
         ## Generated Files\n\n"
    );

    for (base_size, group) in group_by_base_size(files) {
        // Writing to a String cannot fail
        let _ = writeln!(guide, "### {base_size}x{base_size}");
        for file in group {
            let size = file.pixel_size;
            let retina = if file.is_retina { " (Retina @2x)" } else { "" };
            let _ = writeln!(guide, "- `{}` - {size}x{size}px{retina}", file.filename);
        }
        guide.push('\n');
    }

    guide.push_str(INTEGRATION_STEPS);
    guide
}

/// Writes `HOWTO.md` into `output_dir`, replacing any previous guide.
///
/// # Returns
/// Path of the written guide
pub fn write_guide(
    output_dir: &Utf8Path,
    files: &[GeneratedFile],
    project_name: &str,
    svg_filename: &str,
) -> Result<Utf8PathBuf> {
    let guide_path = output_dir.join(GUIDE_FILE_NAME);
    let contents = render_guide(files, project_name, svg_filename);

    fs::write(&guide_path, contents)
        .with_context(|| format!("Failed to write guide: {}", guide_path))?;

    tracing::info!("Wrote guide to {}", guide_path);
    Ok(guide_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_files() -> Vec<GeneratedFile> {
        vec![
            GeneratedFile::standard(32),
            GeneratedFile::retina(32),
            GeneratedFile::standard(16),
            GeneratedFile::retina(16),
        ]
    }

    #[test]
    fn test_groups_are_ascending() {
        let files = sample_files();
        let groups = group_by_base_size(&files);

        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![16, 32]);
        assert_eq!(groups[&16].len(), 2);
        assert!(!groups[&16][0].is_retina);
        assert!(groups[&16][1].is_retina);
    }

    #[test]
    fn test_retina_of_small_size_shares_group_with_larger_standard() {
        // icon_16x16@2x (32px) groups under 16, not next to icon_32x32
        let files = vec![GeneratedFile::retina(16), GeneratedFile::standard(32)];
        let groups = group_by_base_size(&files);

        assert_eq!(groups[&16][0].filename, "icon_16x16@2x.png");
        assert_eq!(groups[&32][0].filename, "icon_32x32.png");
    }

    #[test]
    fn test_render_guide_sections() {
        let guide = render_guide(&sample_files(), "SafarAI", "18_atomic_orbit.svg");

        assert!(guide.starts_with("# How to Add Icons to Xcode Project\n\n## Generated Icons for SafarAI\n"));
        assert!(guide.contains("Source SVG: `18_atomic_orbit.svg`"));
        assert!(guide.contains(
            "### 16x16\n- `icon_16x16.png` - 16x16px\n- `icon_16x16@2x.png` - 32x32px (Retina @2x)\n\n"
        ));

        let small = guide.find("### 16x16").unwrap();
        let large = guide.find("### 32x32").unwrap();
        let steps = guide.find("## Adding Icons to Xcode").unwrap();
        assert!(small < large && large < steps);
        assert!(guide.ends_with("remain clear and recognizable\n"));
    }

    #[test]
    fn test_render_guide_with_no_files() {
        let guide = render_guide(&[], "App", "01_logo.svg");
        assert!(guide.contains("## Generated Files\n\n## Adding Icons to Xcode"));
    }
}
