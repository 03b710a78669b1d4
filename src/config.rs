// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Generation settings.
//!
//! Everything has a default matching the rendered dataset (150x100 images
//! downscaled from 600x400 captures, ten views per scene), so a config
//! file is only needed to override individual values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Width of the rendered images the positions refer to.
    pub image_width: u32,
    pub image_height: u32,
    /// Resolution the scene document's boxes were recorded at.
    pub source_width: u32,
    pub source_height: u32,
    /// Boxes smaller than this (after scaling, in pixels) are ignored.
    pub min_box_size: f64,
    /// Views enumerated per scene by the directory scan.
    pub view_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            image_width: 150,
            image_height: 100,
            source_width: 600,
            source_height: 400,
            min_box_size: 5.0,
            view_count: 10,
        }
    }
}

impl GeneratorConfig {
    /// Load settings from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_yaml_file(p),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.image_width == 0 || self.image_height == 0 {
            anyhow::bail!("image dimensions must be non-zero");
        }
        if self.source_width == 0 || self.source_height == 0 {
            anyhow::bail!("source dimensions must be non-zero");
        }
        Ok(())
    }
}
