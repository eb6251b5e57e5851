use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use blockport_analysis::{analyze_all, AnalysisContext, BlockRecord};
use blockport_blocks::{BlockSet, TargetCatalog};
use blockport_report::{console_summary, mappings_json, render_markdown, report_json, Summary};

use crate::config::BlockportConfig;

pub const REPORT_MD: &str = "report.md";
pub const REPORT_JSON: &str = "analysis.json";
pub const MAPPINGS_JSON: &str = "mappings.json";

/// Outcome of one run, for the caller to print or inspect.
pub struct RunOutput {
    pub summary: Summary,
    pub records: Vec<BlockRecord>,
    pub written: Vec<PathBuf>,
}

pub fn run(cfg: &BlockportConfig) -> Result<RunOutput, Box<dyn Error>> {
    log::info!("loading collision shapes from {}", cfg.input.shapes.display());
    let set = BlockSet::load_from_paths(&cfg.input.shapes, cfg.input.blocks.as_deref())?;
    log::info!(
        "{} blocks, {} shapes in table",
        set.len(),
        set.shapes.len()
    );

    let catalog = match &cfg.input.mapping_rules {
        Some(p) => {
            log::info!("target mapping rules from {}", p.display());
            TargetCatalog::from_path(p)?
        }
        None => TargetCatalog::builtin(),
    };

    let ctx = AnalysisContext {
        set: &set,
        catalog: &catalog,
        classifier: cfg.classifier,
    };
    let records = analyze_all(&ctx);
    let summary = Summary::from_records(&records);

    let written = write_reports(cfg, &summary, &records)?;
    Ok(RunOutput {
        summary,
        records,
        written,
    })
}

fn write_reports(
    cfg: &BlockportConfig,
    summary: &Summary,
    records: &[BlockRecord],
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let out = &cfg.output;
    let mut written = Vec::new();
    if !(out.markdown || out.json || out.mappings) {
        return Ok(written);
    }
    fs::create_dir_all(&out.dir)?;
    if out.markdown {
        let md = render_markdown(summary, records, cfg.report.max_rows);
        written.push(write_file(&out.dir, REPORT_MD, &md)?);
    }
    if out.json {
        written.push(write_file(&out.dir, REPORT_JSON, &report_json(summary, records)?)?);
    }
    if out.mappings {
        written.push(write_file(&out.dir, MAPPINGS_JSON, &mappings_json(records)?)?);
    }
    Ok(written)
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    log::info!("wrote {}", path.display());
    Ok(path)
}

pub fn print_summary(cfg: &BlockportConfig, output: &RunOutput) {
    if output.written.is_empty() {
        log::info!("no report files written");
    }
    print!(
        "{}",
        console_summary(
            &output.summary,
            &output.records,
            cfg.report.examples_per_category
        )
    );
}
