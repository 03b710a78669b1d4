// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption sentence generation.
//!
//! Each view is described by up to four independent sentences, always in
//! this order: ego identity, track name, kart count, and the position of
//! the kart nearest to the ego car.

use crate::models::scene::ObjectRecord;
use crate::util::geometry::{nearest_index, Horizontal, Vertical};

/// Split a view's objects into the ego kart and the non-ego karts.
///
/// The first primary record is the ego kart. Primary records never appear
/// in `others`, even when a malformed view carries more than one.
pub fn split_primary(objects: &[ObjectRecord]) -> (Option<&ObjectRecord>, Vec<&ObjectRecord>) {
    let primary = objects.iter().find(|o| o.is_primary);
    let others = objects.iter().filter(|o| !o.is_primary).collect();
    (primary, others)
}

pub fn track_sentence(track: &str) -> String {
    format!("The track is {}.", track)
}

pub fn count_sentence(count: usize) -> String {
    if count == 1 {
        "There is 1 kart in the scene.".to_string()
    } else {
        format!("There are {} karts in the scene.", count)
    }
}

/// Where the kart nearest to the ego car sits, if there is one.
pub fn relative_position_sentence(primary: &ObjectRecord, others: &[&ObjectRecord]) -> Option<String> {
    let idx = nearest_index(primary.center, others, |o| o.center)?;
    let other = others[idx];

    let horizontal = Horizontal::classify(primary.center, other.center);
    let vertical = Vertical::classify(primary.center, other.center);

    Some(format!(
        "{} is to the {} and {} of the ego car.",
        other.name,
        vertical.as_str(),
        horizontal.as_str()
    ))
}

/// Generate the caption sentences for one view.
pub fn generate(objects: &[ObjectRecord], track: &str) -> Vec<String> {
    if objects.is_empty() {
        return vec![track_sentence(track), count_sentence(0)];
    }

    let (primary, others) = split_primary(objects);
    let mut sentences = Vec::with_capacity(4);

    if let Some(ego) = primary {
        sentences.push(format!("{} is the ego car.", ego.name));
    }
    sentences.push(track_sentence(track));
    sentences.push(count_sentence(objects.len()));

    if let Some(ego) = primary {
        sentences.extend(relative_position_sentence(ego, &others));
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kart(name: &str, x: f64, y: f64) -> ObjectRecord {
        ObjectRecord::new(name, x, y, false)
    }

    fn ego(name: &str, x: f64, y: f64) -> ObjectRecord {
        ObjectRecord::new(name, x, y, true)
    }

    #[test]
    fn test_empty_scene() {
        assert_eq!(
            generate(&[], "Zen Garden"),
            vec!["The track is Zen Garden.", "There are 0 karts in the scene."]
        );
    }

    #[test]
    fn test_single_kart_without_ego() {
        let sentences = generate(&[kart("tux", 5.0, 5.0)], "abyss");
        assert_eq!(
            sentences,
            vec!["The track is abyss.", "There is 1 kart in the scene."]
        );
    }

    #[test]
    fn test_single_ego_has_no_position_sentence() {
        let sentences = generate(&[ego("tux", 5.0, 5.0)], "abyss");
        assert_eq!(
            sentences,
            vec![
                "tux is the ego car.",
                "The track is abyss.",
                "There is 1 kart in the scene.",
            ]
        );
    }

    #[test]
    fn test_no_primary_never_describes_ego() {
        let objects = [kart("tux", 1.0, 1.0), kart("gnu", 2.0, 2.0), kart("nolok", 3.0, 3.0)];
        let sentences = generate(&objects, "lighthouse");
        assert_eq!(
            sentences,
            vec!["The track is lighthouse.", "There are 3 karts in the scene."]
        );
        assert!(sentences.iter().all(|s| !s.contains("ego car")));
    }

    #[test]
    fn test_front_and_right() {
        let objects = [ego("tux", 10.0, 10.0), kart("gnu", 20.0, 5.0)];
        let sentences = generate(&objects, "abyss");
        assert_eq!(
            sentences,
            vec![
                "tux is the ego car.",
                "The track is abyss.",
                "There are 2 karts in the scene.",
                "gnu is to the front and right of the ego car.",
            ]
        );
    }

    #[test]
    fn test_coincident_point_is_behind_and_left() {
        let objects = [ego("tux", 10.0, 10.0), kart("gnu", 10.0, 10.0)];
        let sentences = generate(&objects, "abyss");
        assert_eq!(
            sentences.last().unwrap(),
            "gnu is to the behind and left of the ego car."
        );
    }

    #[test]
    fn test_nearest_tie_takes_first_in_input_order() {
        let objects = [
            kart("far", 15.0, 10.0),
            ego("tux", 10.0, 10.0),
            kart("first", 10.0, 13.0),
            kart("second", 7.0, 10.0),
        ];
        let sentences = generate(&objects, "abyss");
        assert_eq!(
            sentences.last().unwrap(),
            "first is to the behind and left of the ego car."
        );
    }

    #[test]
    fn test_ego_position_in_input_does_not_matter() {
        let objects = [kart("gnu", 0.0, 20.0), ego("tux", 10.0, 10.0)];
        let sentences = generate(&objects, "abyss");
        assert_eq!(sentences[0], "tux is the ego car.");
        assert_eq!(
            sentences[3],
            "gnu is to the behind and left of the ego car."
        );
    }

    #[test]
    fn test_nan_geometry_does_not_panic() {
        let objects = [ego("tux", f64::NAN, 10.0), kart("gnu", 1.0, 1.0)];
        let sentences = generate(&objects, "abyss");
        assert_eq!(sentences.len(), 4);
        assert_eq!(
            sentences[3],
            "gnu is to the front and left of the ego car."
        );
    }

    #[test]
    fn test_extra_primary_is_never_the_nearest_kart() {
        let objects = [
            ego("tux", 10.0, 10.0),
            ego("clone", 11.0, 10.0),
            kart("gnu", 10.0, 30.0),
        ];
        let sentences = generate(&objects, "abyss");
        assert_eq!(sentences[0], "tux is the ego car.");
        assert_eq!(sentences[2], "There are 3 karts in the scene.");
        assert_eq!(
            sentences[3],
            "gnu is to the behind and left of the ego car."
        );
    }

    #[test]
    fn test_split_primary_keeps_order() {
        let objects = [kart("a", 0.0, 0.0), ego("b", 0.0, 0.0), kart("c", 0.0, 0.0)];
        let (primary, others) = split_primary(&objects);
        assert_eq!(primary.unwrap().name, "b");
        let names: Vec<&str> = others.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
