use std::fmt;

use serde::{Deserialize, Serialize};

/// Conversion category of a block, assigned once by the classifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Full,
    Partial,
    Special,
    NonStandard,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Full,
        Category::Partial,
        Category::Special,
        Category::NonStandard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Full => "Full",
            Category::Partial => "Partial",
            Category::Special => "Special",
            Category::NonStandard => "NonStandard",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse height class. Variant order is rank order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightBucket {
    Minimal,
    Slab,
    Half,
    AlmostFull,
    Full,
}

impl HeightBucket {
    pub const ALL: [HeightBucket; 5] = [
        HeightBucket::Full,
        HeightBucket::AlmostFull,
        HeightBucket::Half,
        HeightBucket::Slab,
        HeightBucket::Minimal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HeightBucket::Full => "full",
            HeightBucket::AlmostFull => "almost_full",
            HeightBucket::Half => "half",
            HeightBucket::Slab => "slab",
            HeightBucket::Minimal => "minimal",
        }
    }
}

impl fmt::Display for HeightBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
