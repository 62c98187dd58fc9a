//! Tests for name normalization, asset naming and time formatting.

use phee_core::{AssetKind, asset_path, asset_stem, format_elapsed, names_match, normalize_name};

#[test]
fn test_normalize_collapses_spacing_and_case() {
    assert_eq!(normalize_name("jon   smith"), "Jon Smith");
    assert_eq!(normalize_name("  JON SMITH  "), "Jon Smith");
    assert_eq!(normalize_name("mCdOnAlD"), "Mcdonald");
    assert_eq!(normalize_name(""), "");
    assert_eq!(normalize_name("   "), "");
}

#[test]
fn test_names_match_ignores_case_and_padding() {
    assert!(names_match(" Jon Smith ", "jon smith"));
    assert!(names_match("DJ Moore", "Dj Moore"));
    assert!(!names_match("Jon Smith", "Jon Smyth"));
}

#[test]
fn test_asset_stem_removes_only_first_space() {
    assert_eq!(asset_stem("Jon Smith"), "jonsmith");
    assert_eq!(asset_stem("Amon-Ra St. Brown"), "amon-rast. brown");
    assert_eq!(asset_stem("Cher"), "cher");
}

#[test]
fn test_asset_paths() {
    assert_eq!(
        asset_path("/images/", "Jon Smith", AssetKind::Actual),
        "/images/jonsmith-actual.png"
    );
    assert_eq!(
        asset_path("/images", "Jon Smith", AssetKind::Headshot),
        "/images/jonsmith-headshot.png"
    );
}

#[test]
fn test_format_elapsed() {
    assert_eq!(format_elapsed(0), "00:00:00");
    assert_eq!(format_elapsed(59), "00:00:59");
    assert_eq!(format_elapsed(61), "00:01:01");
    assert_eq!(format_elapsed(3_661), "01:01:01");
}

#[test]
fn test_format_elapsed_does_not_wrap_hours() {
    assert_eq!(format_elapsed(100 * 3600), "100:00:00");
    assert_eq!(format_elapsed(123 * 3600 + 4 * 60 + 5), "123:04:05");
}
