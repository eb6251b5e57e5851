mod config;
mod run;

use std::path::PathBuf;

use clap::Parser;

use config::{BlockportConfig, resolve_config_path};

/// Classify block collision shapes and write conversion reports.
#[derive(Parser, Debug)]
#[command(name = "blockport", version)]
struct Args {
    /// Config file (defaults to $BLOCKPORT_CONFIG, then ./blockport.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Collision shape file (blockCollisionShapes.json layout)
    #[arg(long)]
    shapes: Option<PathBuf>,

    /// Block list (blocks.json layout) for ordering and metadata
    #[arg(long)]
    blocks: Option<PathBuf>,

    /// TOML file replacing the built-in target mapping rules
    #[arg(long)]
    mapping_rules: Option<PathBuf>,

    /// Output directory for reports
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Box edge length treated as a full block
    #[arg(long)]
    full_extent: Option<f64>,

    /// Example block names listed per category in the console summary
    #[arg(long)]
    examples: Option<usize>,

    /// Skip writing report files; print the console summary only
    #[arg(long)]
    no_write: bool,
}

impl Args {
    fn apply(self, cfg: &mut BlockportConfig) {
        if let Some(p) = self.shapes {
            cfg.input.shapes = p;
        }
        if let Some(p) = self.blocks {
            cfg.input.blocks = Some(p);
        }
        if let Some(p) = self.mapping_rules {
            cfg.input.mapping_rules = Some(p);
        }
        if let Some(p) = self.out {
            cfg.output.dir = p;
        }
        if let Some(e) = self.full_extent {
            cfg.classifier.full_extent = e;
        }
        if let Some(n) = self.examples {
            cfg.report.examples_per_category = n;
        }
        if self.no_write {
            cfg.output.markdown = false;
            cfg.output.json = false;
            cfg.output.mappings = false;
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut cfg = match resolve_config_path(args.config.clone()) {
        Some(path) => match BlockportConfig::load_from_path(&path) {
            Ok(c) => {
                log::info!("config loaded from {}", path.display());
                c
            }
            Err(e) => {
                log::error!("config {} unusable: {}", path.display(), e);
                std::process::exit(2);
            }
        },
        None => BlockportConfig::default(),
    };
    args.apply(&mut cfg);

    match run::run(&cfg) {
        Ok(output) => run::print_summary(&cfg, &output),
        Err(e) => {
            log::error!("analysis failed: {}", e);
            std::process::exit(1);
        }
    }
}
