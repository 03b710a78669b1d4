// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for scene lookup and dataset generation.

use std::path::PathBuf;

/// Failures raised while resolving a view into generated pairs.
///
/// Only [`DatasetError::MissingBackingFile`] is recoverable: the batch
/// driver logs it and skips the view. Every other variant aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The image identifier does not follow `<folder>/<hex-id>_<view>_im.jpg`.
    #[error("invalid image filename format: {0}")]
    MalformedReference(String),

    /// The scene document the identifier resolves to does not exist.
    #[error("info file {} not found", .0.display())]
    MissingBackingFile(PathBuf),

    /// The scene document exists but cannot be used.
    #[error("invalid scene document {}: {reason}", .path.display())]
    InvalidScene { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl DatasetError {
    /// Whether the batch driver may skip the offending view and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DatasetError::MissingBackingFile(_))
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_file_is_recoverable() {
        assert!(DatasetError::MissingBackingFile(PathBuf::from("a_info.json")).is_recoverable());
        assert!(!DatasetError::MalformedReference("x.png".into()).is_recoverable());
        assert!(!DatasetError::InvalidScene {
            path: PathBuf::from("a_info.json"),
            reason: "bad".into(),
        }
        .is_recoverable());
    }

    #[test]
    fn test_missing_file_message_names_path() {
        let err = DatasetError::MissingBackingFile(PathBuf::from("valid/00048_info.json"));
        assert_eq!(err.to_string(), "info file valid/00048_info.json not found");
    }
}
