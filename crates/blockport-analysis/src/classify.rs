use blockport_geom::{Aabb, Shape};
use serde::Deserialize;

use crate::types::Category;

/// Edge length of a full block's collision box in the source data's coordinate convention.
pub const FULL_BOX_EXTENT: f64 = 0.5;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Box edge length that counts as a full block. Boxes with any edge below it are partial.
    pub full_extent: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            full_extent: FULL_BOX_EXTENT,
        }
    }
}

/// Assigns the conversion category of a block from its resolved shapes.
pub fn classify(shapes: &[&Shape]) -> Category {
    classify_with(&ClassifierConfig::default(), shapes)
}

/// Like [`classify`], with an explicit full-box extent.
///
/// Rules are tried in order and the first match decides:
/// 1. every shape empty (or no shapes) → `NonStandard`
/// 2. every shape is a single box with all edges equal to the extent → `Full`
/// 3. a lone shape holding a lone box with some edge below the extent → `Partial`
/// 4. more than one distinct shape, or any multi-box shape → `Special`
/// 5. anything else → `NonStandard`
pub fn classify_with(cfg: &ClassifierConfig, shapes: &[&Shape]) -> Category {
    if shapes.iter().all(|s| s.is_empty()) {
        return Category::NonStandard;
    }
    if shapes
        .iter()
        .all(|s| s.single_box().is_some_and(|b| is_full_box(b, cfg.full_extent)))
    {
        return Category::Full;
    }
    if let [only] = shapes {
        if only
            .single_box()
            .is_some_and(|b| is_partial_box(b, cfg.full_extent))
        {
            return Category::Partial;
        }
    }
    if distinct_shape_count(shapes) > 1 || max_boxes_per_shape(shapes) > 1 {
        return Category::Special;
    }
    Category::NonStandard
}

#[inline]
fn is_full_box(b: &Aabb, extent: f64) -> bool {
    let e = b.extent();
    e.x == extent && e.y == extent && e.z == extent
}

#[inline]
fn is_partial_box(b: &Aabb, extent: f64) -> bool {
    let e = b.extent();
    e.x < extent || e.y < extent || e.z < extent
}

/// Number of structurally different shapes (same boxes in the same order count once).
pub fn distinct_shape_count(shapes: &[&Shape]) -> usize {
    let mut seen: Vec<&Shape> = Vec::with_capacity(shapes.len());
    for s in shapes {
        if !seen.contains(s) {
            seen.push(*s);
        }
    }
    seen.len()
}

pub fn max_boxes_per_shape(shapes: &[&Shape]) -> usize {
    shapes.iter().map(|s| s.len()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockport_geom::ShapeBox;

    fn one(c: [f64; 6]) -> Shape {
        Shape::from_aabbs([Aabb::from_coords(c)])
    }

    const HALF_CUBE: [f64; 6] = [0.0, 0.0, 0.0, 0.5, 0.5, 0.5];

    #[test]
    fn repeated_full_shapes_stay_full() {
        let a = one(HALF_CUBE);
        let b = one(HALF_CUBE);
        assert_eq!(classify(&[&a, &b, &a]), Category::Full);
    }

    #[test]
    fn full_then_differing_shape_is_special() {
        let a = one(HALF_CUBE);
        let b = one([0.0, 0.0, 0.0, 0.5, 0.25, 0.5]);
        assert_eq!(classify(&[&a, &b]), Category::Special);
    }

    #[test]
    fn unit_cube_is_not_full_by_default() {
        let s = one([0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        assert_eq!(classify(&[&s]), Category::NonStandard);
        let unit = ClassifierConfig { full_extent: 1.0 };
        assert_eq!(classify_with(&unit, &[&s]), Category::Full);
    }

    #[test]
    fn repeated_partial_shapes_fall_through() {
        // Partial only accepts a lone shape; identical copies are neither distinct nor multi-box
        let s = one([0.0, 0.0, 0.0, 0.5, 0.125, 0.5]);
        assert_eq!(classify(&[&s]), Category::Partial);
        assert_eq!(classify(&[&s, &s]), Category::NonStandard);
    }

    #[test]
    fn malformed_lone_box_is_nonstandard() {
        let s = Shape::new(vec![ShapeBox::Malformed(vec![0.0, 0.0, 0.5])]);
        assert_eq!(classify(&[&s]), Category::NonStandard);
    }

    #[test]
    fn malformed_second_box_makes_special() {
        let s = Shape::new(vec![
            ShapeBox::Valid(Aabb::from_coords(HALF_CUBE)),
            ShapeBox::Malformed(vec![]),
        ]);
        assert_eq!(classify(&[&s]), Category::Special);
    }

    #[test]
    fn empty_shape_next_to_box_is_special() {
        let a = one(HALF_CUBE);
        assert_eq!(classify(&[&a, &Shape::EMPTY]), Category::Special);
    }

    #[test]
    fn distinct_counting() {
        let a = one(HALF_CUBE);
        let b = one([0.0, 0.0, 0.0, 0.5, 0.25, 0.5]);
        assert_eq!(distinct_shape_count(&[]), 0);
        assert_eq!(distinct_shape_count(&[&a, &a]), 1);
        assert_eq!(distinct_shape_count(&[&a, &b, &a, &b]), 2);
    }
}
