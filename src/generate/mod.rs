// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption and question/answer generation.

pub mod batch;
pub mod pairs;
pub mod statements;
