use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use blockport_analysis::ClassifierConfig;

pub const DEFAULT_CONFIG_FILE: &str = "blockport.toml";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlockportConfig {
    #[serde(default)]
    pub input: Input,
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub report: Report,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Input {
    #[serde(default = "default_shapes")]
    pub shapes: PathBuf,
    #[serde(default)]
    pub blocks: Option<PathBuf>,
    // Replaces the built-in target mapping rules when set
    #[serde(default)]
    pub mapping_rules: Option<PathBuf>,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            shapes: default_shapes(),
            blocks: None,
            mapping_rules: None,
        }
    }
}

fn default_shapes() -> PathBuf {
    PathBuf::from("data/blockCollisionShapes.json")
}

#[derive(Clone, Debug, Deserialize)]
pub struct Output {
    #[serde(default = "default_out_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_true")]
    pub markdown: bool,
    #[serde(default = "default_true")]
    pub json: bool,
    #[serde(default = "default_true")]
    pub mappings: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            dir: default_out_dir(),
            markdown: true,
            json: true,
            mappings: true,
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
pub struct Report {
    #[serde(default = "default_examples")]
    pub examples_per_category: usize,
    #[serde(default)]
    pub max_rows: Option<usize>,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            examples_per_category: default_examples(),
            max_rows: None,
        }
    }
}

fn default_examples() -> usize {
    3
}

impl BlockportConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

/// Picks the config file: CLI flag, then `BLOCKPORT_CONFIG`, then `blockport.toml` if present.
pub fn resolve_config_path(cli: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli {
        return Some(p);
    }
    if let Ok(p) = std::env::var("BLOCKPORT_CONFIG") {
        return Some(PathBuf::from(p));
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.exists().then_some(local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = BlockportConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.input.shapes, default_shapes());
        assert!(cfg.input.blocks.is_none());
        assert_eq!(cfg.output.dir, PathBuf::from("reports"));
        assert!(cfg.output.markdown && cfg.output.json && cfg.output.mappings);
        assert_eq!(cfg.classifier.full_extent, 0.5);
        assert_eq!(cfg.report.examples_per_category, 3);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = BlockportConfig::from_toml_str(
            r#"
            [input]
            blocks = "mc/blocks.json"

            [output]
            markdown = false

            [classifier]
            full_extent = 1.0

            [report]
            max_rows = 50
        "#,
        )
        .unwrap();
        assert_eq!(cfg.input.shapes, default_shapes());
        assert_eq!(cfg.input.blocks, Some(PathBuf::from("mc/blocks.json")));
        assert!(!cfg.output.markdown);
        assert!(cfg.output.json);
        assert_eq!(cfg.classifier.full_extent, 1.0);
        assert_eq!(cfg.report.max_rows, Some(50));
        assert_eq!(cfg.report.examples_per_category, 3);
    }

    #[test]
    fn explicit_path_wins() {
        let p = PathBuf::from("custom.toml");
        assert_eq!(resolve_config_path(Some(p.clone())), Some(p));
    }
}
