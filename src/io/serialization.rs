// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Batch file serialization and deserialization.
//!
//! This module reads the JSON image lists that drive a batch run and writes
//! the generated records back out as a single JSON array.

use crate::models::dataset::ImageEntry;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Import a batch input list (a JSON array of `{"image_file": ...}` objects).
pub fn import_image_list(path: &Path) -> Result<Vec<ImageEntry>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read image list {}", path.display()))?;
    let entries = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse image list {}", path.display()))?;
    Ok(entries)
}

/// Export records as a pretty-printed JSON array.
pub fn export_json<T: Serialize>(records: &[T], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
