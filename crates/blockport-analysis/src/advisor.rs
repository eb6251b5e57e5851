//! Conversion advice per classified block.
//!
//! Advice comes from an ordered rule table. Each rule is bound to one category, and the
//! first rule of that category whose predicate holds decides difficulty, strategy and
//! notes. Identifier checks sit ahead of the structural ones, so a multi-state stair
//! is advised as a stair rather than as a generic state-based block.
use std::fmt;

use blockport_geom::{Aabb, Shape};
use serde::{Deserialize, Serialize};

use crate::classify::{distinct_shape_count, max_boxes_per_shape, ClassifierConfig};
use crate::types::Category;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Complex,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Complex,
    ];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Complex => "Complex",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub difficulty: Difficulty,
    pub strategy: String,
    pub notes: String,
}

/// The box used to describe a block: first box of the first non-empty shape.
pub fn main_dimensions<'a>(shapes: &[&'a Shape]) -> Option<&'a Aabb> {
    shapes
        .iter()
        .copied()
        .find(|s| !s.is_empty())
        .and_then(Shape::first_box)
}

/// Everything a rule may look at, measured once per block.
struct Facts<'a> {
    id: &'a str,
    full_extent: f64,
    main: Option<&'a Aabb>,
    shape_count: usize,
    distinct: usize,
    max_boxes: usize,
    all_empty: bool,
}

impl<'a> Facts<'a> {
    fn gather(cfg: &ClassifierConfig, id: &'a str, shapes: &[&'a Shape]) -> Self {
        Self {
            id,
            full_extent: cfg.full_extent,
            main: main_dimensions(shapes),
            shape_count: shapes.len(),
            distinct: distinct_shape_count(shapes),
            max_boxes: max_boxes_per_shape(shapes),
            all_empty: shapes.iter().all(|s| s.is_empty()),
        }
    }
}

struct AdviceRule {
    category: Category,
    when: fn(&Facts) -> bool,
    difficulty: Difficulty,
    strategy: &'static str,
    // None when the measurement the notes need is missing
    notes: fn(&Facts) -> Option<String>,
}

fn always(_: &Facts) -> bool {
    true
}

fn dims(b: &Aabb) -> String {
    format!("{} x {} x {}", b.width(), b.height(), b.depth())
}

const RULES: &[AdviceRule] = &[
    AdviceRule {
        category: Category::Full,
        when: always,
        difficulty: Difficulty::Easy,
        strategy: "Direct 1:1 conversion",
        notes: |f| {
            let b = f.main?;
            Some(format!(
                "Standard full block ({}); maps directly onto a target cube",
                dims(b)
            ))
        },
    },
    AdviceRule {
        category: Category::Partial,
        // Thin means below half a block edge
        when: |f| f.main.is_some_and(|b| b.height() < f.full_extent / 2.0),
        difficulty: Difficulty::Medium,
        strategy: "Convert as flat surface",
        notes: |f| {
            let b = f.main?;
            Some(format!(
                "Very thin block (height: {}); use a flat or carpet-like surface spanning {} x {}",
                b.height(),
                b.width(),
                b.depth()
            ))
        },
    },
    AdviceRule {
        category: Category::Partial,
        when: |f| f.main.is_some_and(|b| b.width() == b.depth() && b.width() < f.full_extent),
        difficulty: Difficulty::Medium,
        strategy: "Convert as centered post",
        notes: |f| {
            let b = f.main?;
            Some(format!(
                "Square footprint of {} x {} (height: {}); use a centered post model",
                b.width(),
                b.depth(),
                b.height()
            ))
        },
    },
    AdviceRule {
        category: Category::Partial,
        when: always,
        difficulty: Difficulty::Medium,
        strategy: "Scale to nearest block unit",
        notes: |f| {
            let b = f.main?;
            Some(format!(
                "Partial block ({}); round each dimension to the nearest block unit",
                dims(b)
            ))
        },
    },
    AdviceRule {
        category: Category::Special,
        when: |f| f.id.contains("stairs"),
        difficulty: Difficulty::Hard,
        strategy: "Simplified stair block",
        notes: |f| {
            Some(format!(
                "Stair geometry with {} distinct shape(s) of up to {} box(es); approximate with one stair block",
                f.distinct, f.max_boxes
            ))
        },
    },
    AdviceRule {
        category: Category::Special,
        when: |f| f.id.contains("door"),
        difficulty: Difficulty::Hard,
        strategy: "Two-state block",
        notes: |f| {
            Some(format!(
                "Door with {} collision state(s), {} distinct; model the open and closed states",
                f.shape_count, f.distinct
            ))
        },
    },
    AdviceRule {
        category: Category::Special,
        when: |f| f.distinct > 1 && f.max_boxes <= 1,
        difficulty: Difficulty::Hard,
        strategy: "State-based conversion",
        notes: |f| {
            Some(format!(
                "{} distinct single-box shapes across {} state(s); map each state to its own block",
                f.distinct, f.shape_count
            ))
        },
    },
    AdviceRule {
        category: Category::Special,
        when: always,
        difficulty: Difficulty::Complex,
        strategy: "Custom implementation",
        notes: |f| {
            Some(format!(
                "Compound geometry with up to {} boxes per shape across {} distinct shape(s); needs a custom model",
                f.max_boxes, f.distinct
            ))
        },
    },
    AdviceRule {
        category: Category::NonStandard,
        when: |f| f.all_empty,
        difficulty: Difficulty::Easy,
        strategy: "Decorative element",
        notes: |f| {
            Some(format!(
                "No collision geometry in {} shape(s); convert as a pass-through decorative element",
                f.shape_count
            ))
        },
    },
    AdviceRule {
        category: Category::NonStandard,
        when: always,
        difficulty: Difficulty::Hard,
        strategy: "Placeholder implementation",
        notes: |f| {
            let main = match f.main {
                Some(b) => format!("main box {}", dims(b)),
                None => "no readable main box".to_string(),
            };
            Some(format!(
                "Unrecognised geometry ({} shape(s), {}); use a placeholder until modelled",
                f.shape_count, main
            ))
        },
    },
];

/// Conversion advice for a block in `category`.
///
/// Returns `None` only when the advice needs the block's main box and there is none.
pub fn recommend(id: &str, shapes: &[&Shape], category: Category) -> Option<Recommendation> {
    recommend_with(&ClassifierConfig::default(), id, shapes, category)
}

/// Like [`recommend`], with size thresholds measured against `cfg.full_extent`.
pub fn recommend_with(
    cfg: &ClassifierConfig,
    id: &str,
    shapes: &[&Shape],
    category: Category,
) -> Option<Recommendation> {
    let facts = Facts::gather(cfg, id, shapes);
    let rule = RULES
        .iter()
        .filter(|r| r.category == category)
        .find(|r| (r.when)(&facts))?;
    let notes = (rule.notes)(&facts)?;
    Some(Recommendation {
        difficulty: rule.difficulty,
        strategy: rule.strategy.to_string(),
        notes,
    })
}
