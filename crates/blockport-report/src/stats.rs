use std::collections::BTreeMap;

use blockport_analysis::{BlockRecord, Category, Difficulty, HeightBucket, MaterialGuess};
use hashbrown::HashSet;
use serde::Serialize;

/// Counts over one analysis run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_blocks: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub by_height: BTreeMap<HeightBucket, usize>,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
    pub by_material: BTreeMap<MaterialGuess, usize>,
    /// Blocks for which no advice could be produced.
    pub without_recommendation: usize,
    /// Distinct shape indices referenced by any block.
    pub unique_shape_indices: usize,
    pub material_types: usize,
    pub mapped_blocks: usize,
    pub target_keys: usize,
}

impl Summary {
    pub fn from_records(records: &[BlockRecord]) -> Self {
        let mut s = Summary {
            total_blocks: records.len(),
            ..Default::default()
        };
        for c in Category::ALL {
            s.by_category.insert(c, 0);
        }
        let mut shape_ids: HashSet<u32> = HashSet::new();
        let mut targets: HashSet<&str> = HashSet::new();
        for r in records {
            *s.by_category.entry(r.category).or_default() += 1;
            *s.by_height.entry(r.height_bucket).or_default() += 1;
            *s.by_material.entry(r.semantics.material).or_default() += 1;
            match &r.recommendation {
                Some(rec) => *s.by_difficulty.entry(rec.difficulty).or_default() += 1,
                None => s.without_recommendation += 1,
            }
            shape_ids.extend(r.shape_ids.iter().flatten().copied());
            if let Some(t) = r.target.as_deref() {
                s.mapped_blocks += 1;
                targets.insert(t);
            }
        }
        s.unique_shape_indices = shape_ids.len();
        s.material_types = s.by_material.len();
        s.target_keys = targets.len();
        s
    }

    pub fn count(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    pub fn share(&self, category: Category) -> f64 {
        if self.total_blocks == 0 {
            0.0
        } else {
            self.count(category) as f64 * 100.0 / self.total_blocks as f64
        }
    }
}
