//! Integration tests for the icon services
//!
//! These tests verify:
//! - Source selection by the numbered naming convention
//! - Planned file counts and retina sizes for arbitrary configurations
//! - Guide grouping and determinism
//! - Rendering real PNGs at the configured sizes

use camino::Utf8PathBuf;
use macos_icons::services::{
    FixedChoice, IconRasterizer, SourceSelector, group_by_base_size, plan_icons, render_guide,
    write_guide,
};
use macos_icons::IconConfig;
use proptest::prelude::*;
use resvg::tiny_skia::Pixmap;
use std::fs;
use tempfile::TempDir;

const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
  <circle cx="32" cy="32" r="30" fill="#ff6600"/>
</svg>"##;

fn dir_with(files: &[&str]) -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    for name in files {
        fs::write(dir.join(name), LOGO_SVG).unwrap();
    }
    (temp_dir, dir)
}

#[test]
fn test_tied_candidates_are_exactly_the_highest_numbered() {
    let (_temp_dir, dir) = dir_with(&["01_a.svg", "05_b.svg", "05_c.svg"]);
    let selector = SourceSelector::new();

    let (number, candidates) = selector.latest_candidates(&dir).unwrap();
    let names: Vec<_> = candidates.iter().filter_map(|p| p.file_name()).collect();

    assert_eq!(number, 5);
    assert_eq!(names, vec!["05_b.svg", "05_c.svg"]);

    let chosen = selector.select(&dir, None, &mut FixedChoice(0)).unwrap();
    assert_eq!(chosen.file_name(), Some("05_b.svg"));
}

#[test]
fn test_numeric_comparison_not_lexical() {
    let (_temp_dir, dir) = dir_with(&["09_old.svg", "10_new.svg", "099_z.png"]);

    let chosen = SourceSelector::new()
        .select(&dir, None, &mut FixedChoice(0))
        .unwrap();
    assert_eq!(chosen.file_name(), Some("10_new.svg"));
}

#[test]
fn test_subdirectories_are_ignored() {
    let (_temp_dir, dir) = dir_with(&["02_logo.svg"]);
    fs::create_dir_all(dir.join("99_folder.svg")).unwrap();

    let chosen = SourceSelector::new()
        .select(&dir, None, &mut FixedChoice(0))
        .unwrap();
    assert_eq!(chosen.file_name(), Some("02_logo.svg"));
}

#[test]
fn test_generate_icons_writes_configured_sizes() {
    let (_temp_dir, dir) = dir_with(&["01_logo.svg"]);
    let output_dir = dir.join("generated").join("macOS");
    let config = IconConfig {
        icon_sizes: vec![32, 16],
        generate_retina: true,
    };

    let generated = IconRasterizer::new()
        .generate_icons(&dir.join("01_logo.svg"), &output_dir, &config)
        .unwrap();

    assert_eq!(generated, plan_icons(&config));
    for file in &generated {
        let pixmap = Pixmap::load_png(output_dir.join(&file.filename)).unwrap();
        assert_eq!(pixmap.width(), file.pixel_size, "{}", file.filename);
        assert_eq!(pixmap.height(), file.pixel_size, "{}", file.filename);
    }
}

#[test]
fn test_write_guide_is_idempotent() {
    let (_temp_dir, dir) = dir_with(&[]);
    let files = plan_icons(&IconConfig::default());

    let path = write_guide(&dir, &files, "SafarAI", "18_atomic_orbit.svg").unwrap();
    let first = fs::read(&path).unwrap();
    let path = write_guide(&dir, &files, "SafarAI", "18_atomic_orbit.svg").unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(path.file_name(), Some("HOWTO.md"));
    assert_eq!(first, second);
}

fn arb_config() -> impl Strategy<Value = IconConfig> {
    (prop::collection::vec(1u32..=2048, 0..12), any::<bool>()).prop_map(
        |(icon_sizes, generate_retina)| IconConfig {
            icon_sizes,
            generate_retina,
        },
    )
}

proptest! {
    #[test]
    fn prop_file_count_matches_config(config in arb_config()) {
        let planned = plan_icons(&config);
        let per_size = if config.generate_retina { 2 } else { 1 };
        prop_assert_eq!(planned.len(), config.icon_sizes.len() * per_size);
    }

    #[test]
    fn prop_retina_is_double_standard(config in arb_config()) {
        let planned = plan_icons(&config);
        for file in planned.iter().filter(|f| f.is_retina) {
            let standard = planned
                .iter()
                .find(|f| !f.is_retina && f.base_size() == file.base_size())
                .unwrap();
            prop_assert_eq!(file.pixel_size, standard.pixel_size * 2);
        }
    }

    #[test]
    fn prop_guide_groups_each_file_once_in_ascending_order(config in arb_config()) {
        let planned = plan_icons(&config);
        let groups = group_by_base_size(&planned);

        let grouped: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(grouped, planned.len());
        for (base, files) in &groups {
            prop_assert!(files.iter().all(|f| f.base_size() == *base));
        }

        let guide = render_guide(&planned, "App", "01_logo.svg");
        let headings: Vec<u32> = guide
            .lines()
            .filter_map(|line| line.strip_prefix("### "))
            .filter_map(|rest| rest.split('x').next())
            .filter_map(|n| n.parse().ok())
            .collect();
        let mut sorted = headings.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(headings, sorted);
    }

    #[test]
    fn prop_guide_is_pure(config in arb_config()) {
        let planned = plan_icons(&config);
        prop_assert_eq!(
            render_guide(&planned, "App", "01_logo.svg"),
            render_guide(&planned, "App", "01_logo.svg")
        );
    }
}
