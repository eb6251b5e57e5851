use std::collections::HashMap;
use std::fs;
use std::path::Path;

use blockport_geom::{Shape, ShapeBox};
use serde_json::{Map, Value};

use crate::error::LoadError;
use crate::shapes::ShapeTable;
use crate::types::{Block, BlockInfo, ShapeId};

// Shape keys above this are rejected rather than padding the table with empties.
const MAX_SHAPE_INDEX: u32 = 1 << 20;

/// Every block of a data set together with the shape table its indices point into.
#[derive(Default, Clone, Debug)]
pub struct BlockSet {
    pub blocks: Vec<Block>,
    pub shapes: ShapeTable,
    pub info: HashMap<String, BlockInfo>,
    by_name: HashMap<String, usize>,
}

impl BlockSet {
    pub fn new(shapes: ShapeTable) -> Self {
        Self {
            blocks: Vec::new(),
            shapes,
            info: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Adds a block. A later block with the same name replaces the earlier one in place.
    pub fn insert(&mut self, block: Block) {
        match self.by_name.get(&block.name) {
            Some(&i) => self.blocks[i] = block,
            None => {
                self.by_name.insert(block.name.clone(), self.blocks.len());
                self.blocks.push(block);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Block> {
        self.by_name.get(name).map(|&i| &self.blocks[i])
    }

    pub fn info(&self, name: &str) -> Option<&BlockInfo> {
        self.info.get(name)
    }

    /// Shapes of a block resolved through the shared table.
    pub fn resolve(&self, block: &Block) -> Vec<&Shape> {
        self.shapes.resolve_block(block)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn load_from_paths(
        shapes_path: impl AsRef<Path>,
        blocks_path: Option<&Path>,
    ) -> Result<Self, LoadError> {
        let shapes_json = read_file(shapes_path.as_ref())?;
        let blocks_json = blocks_path.map(read_file).transpose()?;
        Self::from_json_strs(&shapes_json, blocks_json.as_deref())
    }

    /// Builds a set from a collision-shape document and an optional block list.
    ///
    /// Block order follows the block list when given; blocks only present in the
    /// collision document follow in file order.
    pub fn from_json_strs(shapes_json: &str, blocks_json: Option<&str>) -> Result<Self, LoadError> {
        let doc: Value = serde_json::from_str(shapes_json).map_err(|source| LoadError::Json {
            what: "collision shapes",
            source,
        })?;
        let root = doc.as_object().ok_or_else(|| LoadError::Layout {
            what: "collision shapes",
            detail: "top level is not an object".into(),
        })?;
        let shapes_obj = object_field(root, "shapes")?;
        let blocks_obj = object_field(root, "blocks")?;

        let mut set = BlockSet::new(build_shape_table(shapes_obj));

        if let Some(list) = blocks_json {
            let infos: Vec<BlockInfo> =
                serde_json::from_str(list).map_err(|source| LoadError::Json {
                    what: "block list",
                    source,
                })?;
            for info in infos {
                let shapes = blocks_obj
                    .get(&info.name)
                    .map(parse_shape_refs)
                    .unwrap_or_default();
                set.insert(Block::new(info.name.clone(), shapes));
                set.info.insert(info.name.clone(), info);
            }
        }

        for (name, refs) in blocks_obj {
            if set.get(name).is_none() {
                set.insert(Block::new(name.clone(), parse_shape_refs(refs)));
            }
        }

        log::debug!(
            "loaded {} blocks over {} shapes",
            set.blocks.len(),
            set.shapes.len()
        );
        Ok(set)
    }
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn object_field<'a>(root: &'a Map<String, Value>, key: &str) -> Result<&'a Map<String, Value>, LoadError> {
    root.get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| LoadError::Layout {
            what: "collision shapes",
            detail: format!("missing object field `{key}`"),
        })
}

fn build_shape_table(shapes: &Map<String, Value>) -> ShapeTable {
    let mut indexed: Vec<(u32, Shape)> = Vec::with_capacity(shapes.len());
    for (key, value) in shapes {
        match key.parse::<u32>() {
            Ok(idx) if idx <= MAX_SHAPE_INDEX => indexed.push((idx, parse_shape(idx, value))),
            _ => log::warn!("skipping shape with unusable index {key:?}"),
        }
    }
    indexed.sort_by_key(|(idx, _)| *idx);

    // Dense table: gaps between listed indices become empty shapes
    let mut table = ShapeTable::new();
    for (idx, shape) in indexed {
        while (table.len() as u32) < idx {
            table.push(Shape::EMPTY);
        }
        if (table.len() as u32) == idx {
            table.push(shape);
        }
    }
    table
}

fn parse_shape(idx: u32, value: &Value) -> Shape {
    let Some(entries) = value.as_array() else {
        log::warn!("shape {idx} is not a list; treating as empty");
        return Shape::EMPTY;
    };
    let boxes = entries
        .iter()
        .map(|entry| match entry.as_array() {
            Some(coords) if coords.iter().all(Value::is_number) => {
                let nums: Vec<f64> = coords.iter().filter_map(Value::as_f64).collect();
                ShapeBox::from_slice(&nums)
            }
            Some(coords) => ShapeBox::Malformed(coords.iter().filter_map(Value::as_f64).collect()),
            None => ShapeBox::Malformed(entry.as_f64().into_iter().collect()),
        })
        .collect();
    Shape::new(boxes)
}

/// A block's entry is either one index or a list of indices, one per state.
fn parse_shape_refs(value: &Value) -> Vec<ShapeId> {
    match value {
        Value::Array(items) => items.iter().map(parse_shape_id).collect(),
        other => vec![parse_shape_id(other)],
    }
}

fn parse_shape_id(value: &Value) -> ShapeId {
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .map(ShapeId)
        .unwrap_or(ShapeId::INVALID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_in_shape_keys_become_empty_shapes() {
        let shapes: Map<String, Value> =
            serde_json::from_str(r#"{"0": [], "3": [[0, 0, 0, 1, 1, 1]]}"#).unwrap();
        let table = build_shape_table(&shapes);
        assert_eq!(table.len(), 4);
        assert!(table.resolve(ShapeId(1)).is_empty());
        assert_eq!(table.resolve(ShapeId(3)).len(), 1);
    }

    #[test]
    fn non_numeric_shape_refs_are_invalid() {
        let refs = parse_shape_refs(&serde_json::json!([1, -2, "x", 2.5]));
        assert_eq!(
            refs,
            vec![ShapeId(1), ShapeId::INVALID, ShapeId::INVALID, ShapeId::INVALID]
        );
    }

    #[test]
    fn boxes_with_non_numbers_are_malformed() {
        let shape = parse_shape(0, &serde_json::json!([[0, 0, 0, 1, "a", 1], 7]));
        assert_eq!(shape.len(), 2);
        assert!(shape.valid_boxes().next().is_none());
    }
}
