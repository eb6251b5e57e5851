use blockport_analysis::BlockRecord;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::stats::Summary;

#[derive(Serialize)]
pub struct AnalysisReport<'a> {
    pub summary: &'a Summary,
    pub blocks: &'a [BlockRecord],
}

pub fn report_json(summary: &Summary, records: &[BlockRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&AnalysisReport {
        summary,
        blocks: records,
    })
}

/// Name → target key (or `null`) for every block, in the shape of a seed mapping file.
pub fn mappings_json(records: &[BlockRecord]) -> serde_json::Result<String> {
    let map: Map<String, Value> = records
        .iter()
        .map(|r| {
            let v = r
                .target
                .as_ref()
                .map_or(Value::Null, |t| Value::String(t.clone()));
            (r.name.clone(), v)
        })
        .collect();
    serde_json::to_string_pretty(&map)
}
