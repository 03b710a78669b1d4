// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Pixel-space distances, coordinate scaling between render resolutions,
//! and the left/right and front/behind classification used to describe
//! where one kart sits relative to another.

use crate::models::scene::Point;

/// Horizontal relation of a point to a reference point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    Left,
    Right,
}

impl Horizontal {
    /// `Right` only when strictly to the right; equal x counts as `Left`.
    pub fn classify(reference: Point, other: Point) -> Self {
        if other.x > reference.x {
            Horizontal::Right
        } else {
            Horizontal::Left
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Horizontal::Left => "left",
            Horizontal::Right => "right",
        }
    }
}

/// Vertical relation of a point to a reference point, in image convention
/// (smaller y is further up the screen, i.e. ahead).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Front,
    Behind,
}

impl Vertical {
    /// `Front` only when strictly above; equal y counts as `Behind`.
    pub fn classify(reference: Point, other: Point) -> Self {
        if other.y < reference.y {
            Vertical::Front
        } else {
            Vertical::Behind
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Vertical::Front => "front",
            Vertical::Behind => "behind",
        }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Index of the item closest to `origin`.
///
/// The first minimum wins: a later item replaces the current best only when
/// it is strictly closer, so ties and NaN distances keep the earlier item.
pub fn nearest_index<T>(origin: Point, items: &[T], position: impl Fn(&T) -> Point) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, item) in items.iter().enumerate() {
        let d = distance(origin, position(item));
        let closer = match best {
            Some((_, best_d)) => d < best_d,
            None => true,
        };
        if closer {
            best = Some((idx, d));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Scale a coordinate pair from one resolution to another.
pub fn rescale(x: f64, y: f64, from: (u32, u32), to: (u32, u32)) -> (f64, f64) {
    (
        x * to.0 as f64 / from.0 as f64,
        y * to.1 as f64 / from.1 as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn test_classify_front_right() {
        let ego = p(10.0, 10.0);
        let other = p(20.0, 5.0);
        assert_eq!(Horizontal::classify(ego, other), Horizontal::Right);
        assert_eq!(Vertical::classify(ego, other), Vertical::Front);
    }

    #[test]
    fn test_classify_coincident_is_behind_left() {
        let ego = p(10.0, 10.0);
        assert_eq!(Horizontal::classify(ego, ego), Horizontal::Left);
        assert_eq!(Vertical::classify(ego, ego), Vertical::Behind);
    }

    #[test]
    fn test_nearest_index_prefers_first_of_tie() {
        let origin = p(0.0, 0.0);
        let points = [p(5.0, 0.0), p(0.0, 3.0), p(3.0, 0.0)];
        assert_eq!(nearest_index(origin, &points, |q| *q), Some(1));
    }

    #[test]
    fn test_nearest_index_ignores_nan_candidates() {
        let origin = p(0.0, 0.0);
        let points = [p(4.0, 0.0), p(f64::NAN, 0.0), p(1.0, 0.0)];
        assert_eq!(nearest_index(origin, &points, |q| *q), Some(2));

        let first_nan = [p(f64::NAN, 0.0), p(1.0, 0.0)];
        // NaN seeds the search, and nothing compares smaller than NaN.
        assert_eq!(nearest_index(origin, &first_nan, |q| *q), Some(0));
    }

    #[test]
    fn test_nearest_index_empty() {
        let points: [Point; 0] = [];
        assert_eq!(nearest_index(p(0.0, 0.0), &points, |q| *q), None);
    }

    #[test]
    fn test_rescale_to_render_resolution() {
        let (x, y) = rescale(600.0, 400.0, (600, 400), (150, 100));
        assert!((x - 150.0).abs() < 0.0001);
        assert!((y - 100.0).abs() < 0.0001);

        let (x, y) = rescale(300.0, 100.0, (600, 400), (150, 100));
        assert!((x - 75.0).abs() < 0.0001);
        assert!((y - 25.0).abs() < 0.0001);
    }
}
