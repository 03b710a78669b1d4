// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Batch driver.
//!
//! Resolves image identifiers to scene data and accumulates the generated
//! pairs. Views whose scene document is missing are skipped with a warning;
//! any other failure stops the run.

use super::pairs::{assemble_all, ViewInput};
use crate::config::GeneratorConfig;
use crate::error::{DatasetError, Result};
use crate::io::filename::{image_file_name, is_info_file, parse_image_filename, scene_id};
use crate::io::scene_reader::{load_scene_info, JsonSceneReader, SceneReader};
use crate::models::dataset::{Dataset, ImageEntry};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Progress bar on stderr. Nothing is drawn when stderr is not a terminal.
fn progress_bar(len: usize, message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})") {
        pb.set_style(style.progress_chars("=> "));
    }
    pb.set_message(message);
    pb
}

/// Read the scene data for one image identifier.
///
/// Returns `Ok(None)` when the backing scene document does not exist.
pub fn resolve_view<R: SceneReader>(
    reader: &R,
    config: &GeneratorConfig,
    image_file: &str,
) -> Result<Option<ViewInput>> {
    let scene = parse_image_filename(image_file)?;

    match reader.read_view(&scene, config.image_width, config.image_height) {
        Ok((objects, track)) => Ok(Some(ViewInput {
            objects,
            track,
            image_file: image_file.to_string(),
        })),
        Err(e) if e.is_recoverable() => {
            log::warn!("Skipping {}: {}", image_file, e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Generate pairs for every image in `images`, in order.
pub fn run<R, S>(reader: &R, config: &GeneratorConfig, images: &[S]) -> Result<Dataset>
where
    R: SceneReader,
    S: AsRef<str>,
{
    let pb = progress_bar(images.len(), "Processing views");
    let mut views = Vec::with_capacity(images.len());

    for image_file in images {
        if let Some(view) = resolve_view(reader, config, image_file.as_ref())? {
            views.push(view);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let skipped = images.len() - views.len();
    if skipped > 0 {
        log::warn!("{} views skipped because their info file was missing", skipped);
    }
    Ok(assemble_all(&views))
}

/// Generate pairs for the entries of a batch input list.
pub fn run_image_list<R: SceneReader>(
    reader: &R,
    config: &GeneratorConfig,
    entries: &[ImageEntry],
) -> Result<Dataset> {
    let images: Vec<&str> = entries.iter().map(|e| e.image_file.as_str()).collect();
    run(reader, config, &images)
}

/// Every view of every scene document in `dir`, read straight from the
/// documents.
///
/// Image identifiers are `<dir-name>/<id>_<view>_im.jpg`, with `dir`
/// canonicalized first so `.` and `..` name the real directory. Scenes are
/// visited in id order; each contributes up to `config.view_count` views,
/// fewer if its document records fewer. Documents whose id is not
/// lowercase hex are skipped with a warning.
pub fn scan_views(dir: &Path, config: &GeneratorConfig) -> Result<Vec<ViewInput>> {
    let dir = dir.canonicalize()?;
    let folder = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            DatasetError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} has no directory name to prefix image files with", dir.display()),
            ))
        })?;

    let mut info_files: Vec<(String, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let path = entry?.path();
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) if is_info_file(n) => n,
            _ => continue,
        };
        match scene_id(name) {
            Some(id) => info_files.push((id.to_string(), path.clone())),
            None => log::warn!("Skipping {}: scene id is not lowercase hex", path.display()),
        }
    }
    info_files.sort();
    log::info!("Found {} info files in {}", info_files.len(), dir.display());

    let reader = JsonSceneReader::new(&dir, config);
    let pb = progress_bar(info_files.len(), "Processing info files");
    let mut views = Vec::new();

    for (id, path) in &info_files {
        let info = load_scene_info(path)?;
        for view_index in 0..info.view_count().min(config.view_count) {
            let objects = reader.view_objects(path, &info, view_index, config.image_width, config.image_height)?;
            views.push(ViewInput {
                objects,
                track: info.track.clone(),
                image_file: image_file_name(&folder, id, view_index),
            });
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(views)
}
