// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for scene documents and dataset files.

pub mod filename;
pub mod scene_reader;
pub mod serialization;
