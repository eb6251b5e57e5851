use blockport_blocks::{Block, BlockSet, TargetCatalog};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::advisor::{recommend_with, Recommendation};
use crate::classify::{classify_with, ClassifierConfig};
use crate::height::{bucket, height};
use crate::semantics::{analyze_type, TypeAnalysis};
use crate::types::{Category, HeightBucket};

/// Per-block analysis output, ready to drop into a report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// One entry per state; `None` where the source index was unreadable.
    pub shape_ids: Vec<Option<u32>>,
    pub category: Category,
    pub height: f64,
    pub height_bucket: HeightBucket,
    pub recommendation: Option<Recommendation>,
    #[serde(flatten)]
    pub semantics: TypeAnalysis,
    pub target: Option<String>,
}

/// Read-only inputs shared by every block of a run.
#[derive(Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub set: &'a BlockSet,
    pub catalog: &'a TargetCatalog,
    pub classifier: ClassifierConfig,
}

pub fn analyze_block(ctx: &AnalysisContext<'_>, block: &Block) -> BlockRecord {
    let shapes = ctx.set.resolve(block);
    let category = classify_with(&ctx.classifier, &shapes);
    let h = height(&shapes);
    let info = ctx.set.info(&block.name);
    let bounding_box = info.and_then(|i| i.bounding_box.as_deref());
    BlockRecord {
        name: block.name.clone(),
        display_name: info.and_then(|i| i.display_name.clone()),
        shape_ids: block.shapes.iter().map(|id| id.index()).collect(),
        category,
        height: h,
        height_bucket: bucket(h),
        recommendation: recommend_with(&ctx.classifier, &block.name, &shapes, category),
        semantics: analyze_type(&block.name),
        target: ctx
            .catalog
            .map(&block.name, bounding_box)
            .map(str::to_string),
    }
}

/// Analyses every block in parallel. Output order matches `ctx.set.blocks`.
pub fn analyze_all(ctx: &AnalysisContext<'_>) -> Vec<BlockRecord> {
    let records: Vec<BlockRecord> = ctx
        .set
        .blocks
        .par_iter()
        .map(|b| analyze_block(ctx, b))
        .collect();
    log::info!("analysed {} blocks", records.len());
    records
}
