// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene data structures.
//!
//! This module defines the per-view object records the generators consume
//! and the raw scene document they are extracted from.

use serde::Deserialize;

/// Detection class id used for karts in the scene documents.
pub const KART_CLASS_ID: u32 = 1;

/// A 2D point in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One kart visible in a single camera view.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRecord {
    pub name: String,
    pub center: Point,
    /// Set on the player's own kart (the ego car). At most one per view.
    pub is_primary: bool,
}

impl ObjectRecord {
    pub fn new(name: impl Into<String>, x: f64, y: f64, is_primary: bool) -> Self {
        Self {
            name: name.into(),
            center: Point::new(x, y),
            is_primary,
        }
    }
}

/// A single bounding-box detection row: `[class_id, instance_id, x1, y1, x2, y2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub class_id: u32,
    pub instance_id: usize,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl From<[f64; 6]> for Detection {
    fn from(row: [f64; 6]) -> Self {
        Self {
            class_id: row[0] as u32,
            instance_id: row[1] as usize,
            x1: row[2],
            y1: row[3],
            x2: row[4],
            y2: row[5],
        }
    }
}

/// Scene document (`<id>_info.json`) shared by every view of one scene.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneInfo {
    pub track: String,
    /// Kart names indexed by instance id.
    #[serde(default)]
    pub karts: Vec<String>,
    /// Detection rows, one list per view.
    #[serde(default)]
    pub detections: Vec<Vec<[f64; 6]>>,
}

impl SceneInfo {
    /// Number of views that carry detection data.
    pub fn view_count(&self) -> usize {
        self.detections.len()
    }

    /// Detections recorded for one view, if the view exists.
    pub fn view_detections(&self, view_index: usize) -> Option<impl Iterator<Item = Detection> + '_> {
        self.detections
            .get(view_index)
            .map(|rows| rows.iter().copied().map(Detection::from))
    }

    /// Display name for a kart instance.
    pub fn kart_name(&self, instance_id: usize) -> String {
        self.karts
            .get(instance_id)
            .cloned()
            .unwrap_or_else(|| format!("kart_{}", instance_id))
    }
}
