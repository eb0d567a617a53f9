use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "ecgnoise.toml";

/// Top-level ecgnoise configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EcgConfig {
    /// Record and output locations.
    #[serde(default)]
    pub io: IoToml,

    /// Decomposition settings.
    #[serde(default)]
    pub wavelet: WaveletToml,

    /// Bands dropped before reconstruction.
    #[serde(default)]
    pub omission: OmissionToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_records")]
    pub records: PathBuf,
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_variable")]
    pub variable: String,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            records: default_records(),
            manifest: default_manifest(),
            format: default_format(),
            variable: default_variable(),
            scale: default_scale(),
            output: None,
        }
    }
}

fn default_records() -> PathBuf {
    PathBuf::from("training2017")
}
fn default_manifest() -> PathBuf {
    PathBuf::from("RECORDS")
}
fn default_format() -> String {
    "mat".to_string()
}
fn default_variable() -> String {
    "val".to_string()
}
fn default_scale() -> f64 {
    1000.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveletToml {
    #[serde(default = "default_wavelet_name")]
    pub name: String,
    #[serde(default = "default_levels")]
    pub levels: usize,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_transform")]
    pub transform: String,
}

impl Default for WaveletToml {
    fn default() -> Self {
        Self {
            name: default_wavelet_name(),
            levels: default_levels(),
            mode: default_mode(),
            transform: default_transform(),
        }
    }
}

fn default_wavelet_name() -> String {
    "sym4".to_string()
}
fn default_levels() -> usize {
    5
}
fn default_mode() -> String {
    "symmetric".to_string()
}
fn default_transform() -> String {
    "decimated".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OmissionToml {
    #[serde(default = "default_omit_levels")]
    pub levels: Vec<usize>,
    #[serde(default)]
    pub approximation: bool,
}

impl Default for OmissionToml {
    fn default() -> Self {
        Self {
            levels: default_omit_levels(),
            approximation: false,
        }
    }
}

fn default_omit_levels() -> Vec<usize> {
    vec![1]
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, `ecgnoise.toml` in the
/// working directory is used if present, otherwise every default applies.
pub fn load(path: Option<&Path>) -> Result<EcgConfig> {
    let path = match path {
        Some(p) => p,
        None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
        None => return Ok(EcgConfig::default()),
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
