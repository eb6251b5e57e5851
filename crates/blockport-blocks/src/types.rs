use serde::{Deserialize, Serialize};

/// Index into the shared [`ShapeTable`](crate::ShapeTable).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u32);

impl ShapeId {
    // Stands in for indices that could not be read; never present in a table
    pub const INVALID: ShapeId = ShapeId(u32::MAX);

    /// The raw index, or `None` for [`ShapeId::INVALID`].
    #[inline]
    pub fn index(self) -> Option<u32> {
        (self != Self::INVALID).then_some(self.0)
    }
}

/// A block definition: identifier plus the shapes of each of its states.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    pub shapes: Vec<ShapeId>,
}

impl Block {
    pub fn new(name: impl Into<String>, shapes: Vec<ShapeId>) -> Self {
        Self {
            name: name.into(),
            shapes,
        }
    }
}

/// Descriptive metadata from the block list. Never used for classification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bounding_box: Option<String>,
}
