use blockport_geom::Shape;

use crate::types::HeightBucket;

// Lower bounds, highest first; anything below the last is `Minimal`.
const THRESHOLDS: [(f64, HeightBucket); 4] = [
    (1.0, HeightBucket::Full),
    (0.875, HeightBucket::AlmostFull),
    (0.5, HeightBucket::Half),
    (0.125, HeightBucket::Slab),
];

/// Tallest box height over all shapes; 0 when there is no collision at all.
pub fn height(shapes: &[&Shape]) -> f64 {
    shapes
        .iter()
        .flat_map(|s| s.valid_boxes())
        .map(|b| b.height())
        .fold(0.0, f64::max)
}

pub fn bucket(height: f64) -> HeightBucket {
    THRESHOLDS
        .iter()
        .find(|(min, _)| height >= *min)
        .map(|(_, b)| *b)
        .unwrap_or(HeightBucket::Minimal)
}
