// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! KartQA - caption and question/answer generation for racing-game scenes.
//!
//! Turns per-view kart detections (names, positions, the player's own kart)
//! and the scene's track name into natural-language training data for a
//! vision-language model.

pub mod config;
pub mod error;
pub mod generate;
pub mod io;
pub mod models;
pub mod util;

pub use config::GeneratorConfig;
pub use error::DatasetError;
pub use generate::pairs::{assemble, assemble_all, ViewInput};
pub use generate::statements::generate;
pub use models::dataset::{CaptionPair, Dataset, DatasetKind, QaPair};
pub use models::scene::ObjectRecord;
