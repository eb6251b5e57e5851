//! Block, shape table, and target material crate.
#![forbid(unsafe_code)]

pub mod error;
pub mod material;
pub mod registry;
pub mod shapes;
pub mod types;

pub use error::LoadError;
pub use material::TargetCatalog;
pub use registry::BlockSet;
pub use shapes::ShapeTable;
pub use types::{Block, BlockInfo, ShapeId};

// Geometry types appear in every public signature here
pub use blockport_geom::{Aabb, Shape, ShapeBox, Vec3};
