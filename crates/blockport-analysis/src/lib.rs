//! Collision-shape classification and conversion advice.
//!
//! Everything here is a pure function of a block's resolved shapes (and, for the
//! advisor and type analysis, its identifier). Classification never looks at the
//! identifier.
#![forbid(unsafe_code)]

pub mod advisor;
pub mod classify;
pub mod height;
pub mod record;
pub mod semantics;
pub mod types;

pub use advisor::{main_dimensions, recommend, recommend_with, Difficulty, Recommendation};
pub use classify::{classify, classify_with, ClassifierConfig, FULL_BOX_EXTENT};
pub use height::{bucket, height};
pub use record::{analyze_all, analyze_block, AnalysisContext, BlockRecord};
pub use semantics::{analyze_type, Behavior, BlockKind, MaterialGuess, TypeAnalysis};
pub use types::{Category, HeightBucket};
