use std::fmt::Write;

use blockport_analysis::{BlockRecord, Category};

use crate::stats::Summary;

/// Short per-category overview for the terminal.
pub fn console_summary(summary: &Summary, records: &[BlockRecord], examples: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Block Analysis Results:");
    let _ = writeln!(out, "----------------------");
    for cat in Category::ALL {
        let names: Vec<&str> = records
            .iter()
            .filter(|r| r.category == cat)
            .take(examples)
            .map(|r| r.name.as_str())
            .collect();
        let _ = writeln!(out);
        let _ = writeln!(out, "{cat}:");
        let _ = writeln!(
            out,
            "Total: {} blocks ({:.1}%)",
            summary.count(cat),
            summary.share(cat)
        );
        let _ = writeln!(out, "Examples: {}", names.join(", "));
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} unique shape indices, {} material types, {} blocks mapped to {} target keys",
        summary.unique_shape_indices,
        summary.material_types,
        summary.mapped_blocks,
        summary.target_keys
    );
    out
}
