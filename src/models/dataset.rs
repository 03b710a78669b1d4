// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Dataset record types written to and read from the batch JSON files.

use serde::{Deserialize, Serialize};

/// A question/answer pair tied to one rendered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
    pub image_file: String,
}

impl QaPair {
    pub fn new(question: &str, answer: impl Into<String>, image_file: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.into(),
            image_file: image_file.to_string(),
        }
    }
}

/// A single caption sentence tied to one rendered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionPair {
    pub image_file: String,
    pub caption: String,
}

/// One entry of a batch input list. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageEntry {
    pub image_file: String,
}

/// Which kind of dataset a batch run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Qa,
    Captions,
}

/// Accumulated output of a batch run, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub qa_pairs: Vec<QaPair>,
    pub captions: Vec<CaptionPair>,
}

impl Dataset {
    pub fn extend(&mut self, qa_pairs: Vec<QaPair>, captions: Vec<CaptionPair>) {
        self.qa_pairs.extend(qa_pairs);
        self.captions.extend(captions);
    }

    /// Number of records of the given kind.
    pub fn len(&self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::Qa => self.qa_pairs.len(),
            DatasetKind::Captions => self.captions.len(),
        }
    }
}
