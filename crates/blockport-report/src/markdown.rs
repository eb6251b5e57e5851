use std::fmt::Write;

use blockport_analysis::{BlockRecord, Category, Difficulty, HeightBucket};

use crate::stats::Summary;

fn category_blurb(cat: Category) -> &'static str {
    match cat {
        Category::Full => "Single full-size collision box in every state.",
        Category::Partial => "One state with one box smaller than a full block.",
        Category::Special => "Several distinct states or compound multi-box geometry.",
        Category::NonStandard => "No collision, or geometry that fits no other category.",
    }
}

// Pipes would split table cells
fn cell(s: &str) -> String {
    s.replace('|', "\\|")
}

/// Renders the full Markdown report. `max_rows` caps the block table of each category.
pub fn render_markdown(summary: &Summary, records: &[BlockRecord], max_rows: Option<usize>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Block Conversion Report\n");
    let _ = writeln!(out, "Total blocks analysed: **{}**\n", summary.total_blocks);

    let _ = writeln!(out, "## Categories\n");
    let _ = writeln!(out, "| Category | Blocks | Share |");
    let _ = writeln!(out, "|---|---:|---:|");
    for cat in Category::ALL {
        let _ = writeln!(
            out,
            "| {} | {} | {:.1}% |",
            cat,
            summary.count(cat),
            summary.share(cat)
        );
    }

    let _ = writeln!(out, "\n## Height distribution\n");
    let _ = writeln!(out, "| Bucket | Blocks |");
    let _ = writeln!(out, "|---|---:|");
    for b in HeightBucket::ALL {
        let n = summary.by_height.get(&b).copied().unwrap_or(0);
        let _ = writeln!(out, "| {} | {} |", b, n);
    }

    let _ = writeln!(out, "\n## Conversion difficulty\n");
    let _ = writeln!(out, "| Difficulty | Blocks |");
    let _ = writeln!(out, "|---|---:|");
    for d in Difficulty::ALL {
        let n = summary.by_difficulty.get(&d).copied().unwrap_or(0);
        let _ = writeln!(out, "| {} | {} |", d, n);
    }
    if summary.without_recommendation > 0 {
        let _ = writeln!(
            out,
            "\n{} block(s) had no readable main box and received no recommendation.",
            summary.without_recommendation
        );
    }

    let _ = writeln!(out, "\n## Materials\n");
    let _ = writeln!(out, "{} material types guessed.\n", summary.material_types);
    for (m, n) in &summary.by_material {
        let _ = writeln!(out, "- {}: {}", m.label(), n);
    }
    let _ = writeln!(
        out,
        "\n{} unique shape indices referenced; {} block(s) mapped onto {} target key(s).",
        summary.unique_shape_indices, summary.mapped_blocks, summary.target_keys
    );

    for cat in Category::ALL {
        let rows: Vec<&BlockRecord> = records.iter().filter(|r| r.category == cat).collect();
        let _ = writeln!(out, "\n## {} blocks ({})\n", cat, rows.len());
        let _ = writeln!(out, "{}\n", category_blurb(cat));
        if rows.is_empty() {
            continue;
        }
        let _ = writeln!(out, "| Block | Height | Bucket | Type | Difficulty | Strategy | Notes |");
        let _ = writeln!(out, "|---|---:|---|---|---|---|---|");
        let limit = max_rows.unwrap_or(rows.len());
        for r in rows.iter().take(limit) {
            let (difficulty, strategy, notes) = match &r.recommendation {
                Some(rec) => (rec.difficulty.to_string(), cell(&rec.strategy), cell(&rec.notes)),
                None => ("-".to_string(), "-".to_string(), "-".to_string()),
            };
            let _ = writeln!(
                out,
                "| {} | {} | {} | {}/{} | {} | {} | {} |",
                cell(&r.name),
                r.height,
                r.height_bucket,
                r.semantics.behavior,
                r.semantics.kind,
                difficulty,
                strategy,
                notes
            );
        }
        if rows.len() > limit {
            let _ = writeln!(out, "\n_{} more not shown._", rows.len() - limit);
        }
    }
    out
}
