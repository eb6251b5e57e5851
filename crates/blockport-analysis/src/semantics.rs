//! Identifier-derived descriptive tags. Output here never feeds back into classification.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockKind {
    Stairs,
    Slab,
    Door,
    Connector,
    Generic,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Behavior {
    Navigation,
    Interactive,
    Barrier,
    Mechanical,
    Structural,
}

impl BlockKind {
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Stairs => "stairs",
            BlockKind::Slab => "slab",
            BlockKind::Door => "door",
            BlockKind::Connector => "connector",
            BlockKind::Generic => "generic",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Behavior {
    pub fn label(self) -> &'static str {
        match self {
            Behavior::Navigation => "navigation",
            Behavior::Interactive => "interactive",
            Behavior::Barrier => "barrier",
            Behavior::Mechanical => "mechanical",
            Behavior::Structural => "structural",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialGuess {
    Wood,
    Stone,
    Glass,
    Earth,
    Metal,
    Other,
}

impl MaterialGuess {
    pub fn label(self) -> &'static str {
        match self {
            MaterialGuess::Wood => "wood",
            MaterialGuess::Stone => "stone",
            MaterialGuess::Glass => "glass",
            MaterialGuess::Earth => "earth",
            MaterialGuess::Metal => "metal",
            MaterialGuess::Other => "other",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAnalysis {
    pub kind: BlockKind,
    pub behavior: Behavior,
    pub material: MaterialGuess,
}

// (fragments, kind, default behavior); first rule with a matching fragment wins
const KIND_RULES: &[(&[&str], BlockKind, Behavior)] = &[
    (&["stairs"], BlockKind::Stairs, Behavior::Navigation),
    (&["slab"], BlockKind::Slab, Behavior::Navigation),
    (&["door"], BlockKind::Door, Behavior::Interactive),
    (&["fence", "wall", "pane", "bars"], BlockKind::Connector, Behavior::Barrier),
];

const MECHANICAL: &[&str] = &[
    "redstone",
    "repeater",
    "comparator",
    "piston",
    "observer",
    "lever",
    "button",
    "pressure_plate",
    "hopper",
    "dispenser",
    "dropper",
    "daylight_detector",
    "tripwire",
    "target",
];

const MATERIAL_RULES: &[(&[&str], MaterialGuess)] = &[
    (
        &[
            "oak", "spruce", "birch", "jungle", "acacia", "mangrove", "cherry", "bamboo",
            "crimson", "warped", "planks", "log", "wood",
        ],
        MaterialGuess::Wood,
    ),
    (
        &[
            "stone", "cobble", "brick", "granite", "diorite", "andesite", "deepslate", "tuff",
            "blackstone", "quartz", "prismarine", "basalt", "calcite",
        ],
        MaterialGuess::Stone,
    ),
    (&["glass"], MaterialGuess::Glass),
    (
        &[
            "dirt", "grass", "sand", "gravel", "mud", "clay", "podzol", "mycelium", "farmland",
        ],
        MaterialGuess::Earth,
    ),
    (
        &["iron", "gold", "copper", "netherite", "chain", "anvil"],
        MaterialGuess::Metal,
    ),
];

#[inline]
fn contains_any(id: &str, fragments: &[&str]) -> bool {
    fragments.iter().any(|f| id.contains(f))
}

/// Derives kind, behavior and material from the identifier alone.
///
/// Redstone-related identifiers are tagged `Mechanical` whatever their kind.
pub fn analyze_type(id: &str) -> TypeAnalysis {
    let (kind, mut behavior) = KIND_RULES
        .iter()
        .find(|(frags, _, _)| contains_any(id, frags))
        .map(|&(_, k, b)| (k, b))
        .unwrap_or((BlockKind::Generic, Behavior::Structural));
    if contains_any(id, MECHANICAL) {
        behavior = Behavior::Mechanical;
    }
    TypeAnalysis {
        kind,
        behavior,
        material: guess_material(id),
    }
}

pub fn guess_material(id: &str) -> MaterialGuess {
    MATERIAL_RULES
        .iter()
        .find(|(frags, _)| contains_any(id, frags))
        .map(|&(_, m)| m)
        .unwrap_or(MaterialGuess::Other)
}
