use crate::error::{CliError, Result};
use helixwheel::core::models::palette::Rgb;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileGeometryConfig {
    pub step_degrees: Option<f64>,
    pub radius: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileRenderConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub marker_scale: Option<f64>,
    pub title: Option<String>,
    pub show_labels: Option<bool>,
    pub show_numbers: Option<bool>,
    pub show_legend: Option<bool>,
    pub show_backbone: Option<bool>,
    pub fade_backbone: Option<bool>,
    pub show_moment: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FilePaletteConfig {
    pub nonpolar: Option<Rgb>,
    pub polar: Option<Rgb>,
    pub acidic: Option<Rgb>,
    pub basic: Option<Rgb>,
    pub other: Option<Rgb>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub geometry: Option<FileGeometryConfig>,
    pub render: Option<FileRenderConfig>,
    pub palette: Option<FilePaletteConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: anyhow::Error::new(e).context("cannot read configuration file"),
        })?;
        Self::from_toml(&content).map_err(|source| CliError::FileParsing {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, anyhow::Error> {
        Ok(toml::from_str(content)?)
    }
}
