use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::{election::{Parties, Party}, render::Rgb};

pub const DEFAULT_LEFT_COLOR: Rgb = Rgb::new(0x45, 0xba, 0xe8);
pub const DEFAULT_RIGHT_COLOR: Rgb = Rgb::new(0xff, 0x59, 0x5f);
pub const DEFAULT_TITLE_SUFFIX: &str = " Congressional Delegation";
pub const DEFAULT_SUBTITLE: &str = "(elected 2016)";

/// Font files used to set infographic text.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FontPaths {
    pub regular: PathBuf,
    pub bold: PathBuf,
}

/// Report configuration, read from a YAML file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Results CSV.
    pub filename: PathBuf,
    /// District boundaries as a GeoJSON FeatureCollection.
    pub geojson: PathBuf,
    pub output_directory: PathBuf,

    /// CSV column and GeoJSON property holding the delegation id.
    pub delegation_identifier: String,
    /// CSV column holding the delegation display name.
    pub delegation_name: String,
    /// CSV column and GeoJSON property holding the district id.
    pub district_identifier: String,

    pub party_left_votes: String,
    pub party_right_votes: String,
    pub party_left_name: String,
    pub party_right_name: String,
    #[serde(default = "default_left_color")]
    pub party_left_color: Rgb,
    #[serde(default = "default_right_color")]
    pub party_right_color: Rgb,

    #[serde(default)]
    pub watermark: Option<PathBuf>,
    pub fonts: FontPaths,
    #[serde(default = "default_title_suffix")]
    pub title_suffix: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

fn default_left_color() -> Rgb { DEFAULT_LEFT_COLOR }
fn default_right_color() -> Rgb { DEFAULT_RIGHT_COLOR }
fn default_title_suffix() -> String { DEFAULT_TITLE_SUFFIX.to_string() }
fn default_subtitle() -> String { DEFAULT_SUBTITLE.to_string() }

impl Config {
    /// Load and validate a config file. Relative paths are resolved against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("[Config::load] failed to read {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_yaml(&text, base)
            .with_context(|| format!("[Config::load] invalid config {}", path.display()))
    }

    /// Parse and validate YAML, resolving relative paths against `base`.
    pub fn from_yaml(text: &str, base: &Path) -> Result<Self> {
        let mut config: Config = serde_yml::from_str(text)
            .context("[Config::from_yaml] failed to parse YAML")?;
        config.resolve_paths(base);
        config.validate()?;
        Ok(config)
    }

    /// The two parties named and colored by this config.
    pub fn parties(&self) -> Parties {
        Parties::new(
            Party::new(&self.party_left_name, self.party_left_color),
            Party::new(&self.party_right_name, self.party_right_color),
        )
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        resolve(&mut self.filename);
        resolve(&mut self.geojson);
        resolve(&mut self.output_directory);
        resolve(&mut self.fonts.regular);
        resolve(&mut self.fonts.bold);
        if let Some(watermark) = self.watermark.as_mut() {
            resolve(watermark);
        }
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("delegationIdentifier", &self.delegation_identifier),
            ("delegationName", &self.delegation_name),
            ("districtIdentifier", &self.district_identifier),
            ("partyLeftVotes", &self.party_left_votes),
            ("partyRightVotes", &self.party_right_votes),
            ("partyLeftName", &self.party_left_name),
            ("partyRightName", &self.party_right_name),
        ] {
            ensure!(!value.trim().is_empty(), "[Config::validate] '{key}' must not be empty");
        }
        ensure!(
            self.party_left_votes != self.party_right_votes,
            "[Config::validate] partyLeftVotes and partyRightVotes both name column '{}'",
            self.party_left_votes
        );
        Ok(())
    }
}
