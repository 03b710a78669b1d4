// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data models for scenes and generated dataset records.

pub mod dataset;
pub mod scene;
