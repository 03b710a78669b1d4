// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene lookup.
//!
//! The generators only ever see [`ObjectRecord`]s and a track name. This
//! module turns a [`SceneRef`] into those, reading the JSON scene documents
//! that accompany the rendered images.

use super::filename::SceneRef;
use crate::config::GeneratorConfig;
use crate::error::{DatasetError, Result};
use crate::models::scene::{Detection, ObjectRecord, Point, SceneInfo, KART_CLASS_ID};
use crate::util::geometry::rescale;
use std::path::{Path, PathBuf};

/// Source of per-view objects and per-scene track names.
pub trait SceneReader {
    /// Karts visible in one view, positioned in a `width x height` image.
    fn read_objects(&self, scene: &SceneRef, width: u32, height: u32) -> Result<Vec<ObjectRecord>>;

    fn read_track(&self, scene: &SceneRef) -> Result<String>;

    /// Objects and track for one view. Readers backed by a single document
    /// should override this to load it once.
    fn read_view(&self, scene: &SceneRef, width: u32, height: u32) -> Result<(Vec<ObjectRecord>, String)> {
        let objects = self.read_objects(scene, width, height)?;
        Ok((objects, self.read_track(scene)?))
    }
}

/// Reads `<id>_info.json` documents relative to a data root directory.
#[derive(Debug, Clone)]
pub struct JsonSceneReader {
    root: PathBuf,
    source_size: (u32, u32),
    min_box_size: f64,
}

impl JsonSceneReader {
    pub fn new(root: impl Into<PathBuf>, config: &GeneratorConfig) -> Self {
        Self {
            root: root.into(),
            source_size: (config.source_width, config.source_height),
            min_box_size: config.min_box_size,
        }
    }

    fn load(&self, scene: &SceneRef) -> Result<(PathBuf, SceneInfo)> {
        let path = self.root.join(&scene.info_path);
        if !path.exists() {
            return Err(DatasetError::MissingBackingFile(path));
        }
        let info = load_scene_info(&path)?;
        Ok((path, info))
    }

    /// Karts of one view of an already parsed document.
    ///
    /// `path` only labels errors and log lines.
    pub fn view_objects(
        &self,
        path: &Path,
        info: &SceneInfo,
        view_index: usize,
        width: u32,
        height: u32,
    ) -> Result<Vec<ObjectRecord>> {
        let detections = info
            .view_detections(view_index)
            .ok_or_else(|| DatasetError::InvalidScene {
                path: path.to_path_buf(),
                reason: format!("view {} out of range ({} views)", view_index, info.view_count()),
            })?;

        let objects: Vec<ObjectRecord> = detections
            .filter_map(|det| self.kart_object(info, det, width, height))
            .collect();
        log::debug!("{} view {}: {} karts", path.display(), view_index, objects.len());
        Ok(objects)
    }

    /// Convert one detection into an object record, or drop it when it is
    /// not a kart, too small once scaled, or entirely outside the image.
    fn kart_object(&self, info: &SceneInfo, det: Detection, width: u32, height: u32) -> Option<ObjectRecord> {
        if det.class_id != KART_CLASS_ID {
            return None;
        }

        let target = (width, height);
        let (x1, y1) = rescale(det.x1, det.y1, self.source_size, target);
        let (x2, y2) = rescale(det.x2, det.y2, self.source_size, target);

        if (x2 - x1) < self.min_box_size || (y2 - y1) < self.min_box_size {
            return None;
        }
        if x2 < 0.0 || x1 > width as f64 || y2 < 0.0 || y1 > height as f64 {
            return None;
        }

        Some(ObjectRecord {
            name: info.kart_name(det.instance_id),
            center: Point::new((x1 + x2) / 2.0, (y1 + y2) / 2.0),
            is_primary: det.instance_id == 0,
        })
    }
}

impl SceneReader for JsonSceneReader {
    fn read_objects(&self, scene: &SceneRef, width: u32, height: u32) -> Result<Vec<ObjectRecord>> {
        let (path, info) = self.load(scene)?;
        self.view_objects(&path, &info, scene.view_index, width, height)
    }

    fn read_track(&self, scene: &SceneRef) -> Result<String> {
        let (_, info) = self.load(scene)?;
        Ok(info.track)
    }

    fn read_view(&self, scene: &SceneRef, width: u32, height: u32) -> Result<(Vec<ObjectRecord>, String)> {
        let (path, info) = self.load(scene)?;
        let objects = self.view_objects(&path, &info, scene.view_index, width, height)?;
        Ok((objects, info.track))
    }
}

/// Parse a scene document.
pub fn load_scene_info(path: &Path) -> Result<SceneInfo> {
    let invalid = |reason: String| DatasetError::InvalidScene {
        path: path.to_path_buf(),
        reason,
    };
    let json = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| invalid(e.to_string()))
}
