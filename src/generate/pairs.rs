// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Per-view question/answer and caption pair assembly.

use super::statements::{generate, split_primary};
use crate::models::dataset::{CaptionPair, Dataset, QaPair};
use crate::models::scene::ObjectRecord;

pub const EGO_QUESTION: &str = "What kart is the ego car?";
pub const COUNT_QUESTION: &str = "How many karts are there in the scenario?";
pub const TRACK_QUESTION: &str = "What track is this?";

/// Everything known about one view once its scene has been read.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewInput {
    pub objects: Vec<ObjectRecord>,
    pub track: String,
    pub image_file: String,
}

/// Question/answer pairs for one view: ego kart (when visible), kart count
/// and track name.
pub fn qa_pairs(objects: &[ObjectRecord], track: &str, image_file: &str) -> Vec<QaPair> {
    let mut pairs = Vec::with_capacity(3);

    let (primary, _) = split_primary(objects);
    if let Some(ego) = primary {
        pairs.push(QaPair::new(EGO_QUESTION, ego.name.as_str(), image_file));
    }
    pairs.push(QaPair::new(COUNT_QUESTION, objects.len().to_string(), image_file));
    pairs.push(QaPair::new(TRACK_QUESTION, track, image_file));

    pairs
}

/// One caption pair per generated sentence. Blank sentences are skipped.
pub fn caption_pairs(objects: &[ObjectRecord], track: &str, image_file: &str) -> Vec<CaptionPair> {
    generate(objects, track)
        .into_iter()
        .filter_map(|sentence| {
            let caption = sentence.trim();
            (!caption.is_empty()).then(|| CaptionPair {
                image_file: image_file.to_string(),
                caption: caption.to_string(),
            })
        })
        .collect()
}

/// Both pair kinds for a single view.
pub fn assemble(objects: &[ObjectRecord], track: &str, image_file: &str) -> (Vec<QaPair>, Vec<CaptionPair>) {
    (
        qa_pairs(objects, track, image_file),
        caption_pairs(objects, track, image_file),
    )
}

/// Assemble every view in order into one dataset.
pub fn assemble_all(views: &[ViewInput]) -> Dataset {
    let mut dataset = Dataset::default();
    for view in views {
        let (qa, captions) = assemble(&view.objects, &view.track, &view.image_file);
        dataset.extend(qa, captions);
    }
    dataset
}
