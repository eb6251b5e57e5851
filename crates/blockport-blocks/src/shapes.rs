use blockport_geom::Shape;

use crate::types::{Block, ShapeId};

static EMPTY_SHAPE: Shape = Shape::EMPTY;

/// Append-only store of collision shapes shared by all blocks.
#[derive(Default, Clone, Debug)]
pub struct ShapeTable {
    shapes: Vec<Shape>,
}

impl ShapeTable {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn push(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.shapes.len() as u32);
        self.shapes.push(shape);
        id
    }

    #[inline]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0 as usize)
    }

    /// Looks up a shape, treating unknown ids as "no collision".
    #[inline]
    pub fn resolve(&self, id: ShapeId) -> &Shape {
        self.get(id).unwrap_or(&EMPTY_SHAPE)
    }

    /// The block's shapes in index order.
    pub fn resolve_block(&self, block: &Block) -> Vec<&Shape> {
        block.shapes.iter().map(|&id| self.resolve(id)).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
