//! Image naming contract for player artwork.
//!
//! The stem is the lower-cased name with only the first space removed, so
//! `"Amon-Ra St. Brown"` maps to `amon-rast. brown`. Asset files must follow
//! this exactly.

/// Default root under which images are served.
pub const DEFAULT_IMAGES_DIR: &str = "/images/";

/// Which image of the target to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum AssetKind {
    /// Revealed photo, shown after a correct guess.
    #[strum(to_string = "actual")]
    Actual,
    /// Silhouette headshot, shown on request during a round.
    #[strum(to_string = "headshot")]
    Headshot,
}

/// File stem for a player name.
pub fn asset_stem(name: &str) -> String {
    name.to_lowercase().replacen(' ', "", 1)
}

/// Full image path, e.g. `/images/jonsmith-headshot.png`.
pub fn asset_path(images_dir: &str, name: &str, kind: AssetKind) -> String {
    let dir = images_dir.trim_end_matches('/');
    format!("{}/{}-{}.png", dir, asset_stem(name), kind)
}
