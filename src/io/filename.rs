// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image filename convention.
//!
//! Rendered views are named `<folder>/<hex-id>_<view>_im.jpg` and share one
//! scene document, `<folder>/<hex-id>_info.json`.

use crate::error::{DatasetError, Result};
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Where a view's data lives: the scene document and the view index in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneRef {
    pub info_path: PathBuf,
    pub view_index: usize,
}

fn image_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(.*)/([0-9a-f]+)_(\d+)_im\.jpg$").expect("image filename pattern is valid")
    })
}

fn info_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9a-f]+)_info\.json$").expect("info filename pattern is valid")
    })
}

/// Resolve an image identifier into its scene reference.
pub fn parse_image_filename(image_file: &str) -> Result<SceneRef> {
    let malformed = || DatasetError::MalformedReference(image_file.to_string());
    let caps = image_pattern().captures(image_file).ok_or_else(malformed)?;

    let folder = &caps[1];
    let base_id = &caps[2];
    let view_index = caps[3].parse::<usize>().map_err(|_| malformed())?;

    Ok(SceneRef {
        info_path: PathBuf::from(folder).join(format!("{}_info.json", base_id)),
        view_index,
    })
}

/// Image identifier for one view of a scene, relative to the data root.
pub fn image_file_name(folder: &str, base_id: &str, view_index: usize) -> String {
    format!("{}/{}_{:02}_im.jpg", folder, base_id, view_index)
}

/// Scene id of an info document file name (`00048_info.json` gives `00048`).
///
/// Ids must be lowercase hex, the same ids [`parse_image_filename`] accepts.
pub fn scene_id(info_file_name: &str) -> Option<&str> {
    info_pattern()
        .captures(info_file_name)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str())
}

/// Whether a file name looks like a scene document, hex id or not.
pub fn is_info_file(file_name: &str) -> bool {
    file_name.ends_with("_info.json")
}
