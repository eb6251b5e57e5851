use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// How a rule tests a block name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameMatcher {
    /// Name contains any of the fragments.
    Any(Vec<String>),
    /// Name contains every fragment.
    All(Vec<String>),
    /// Name equals one of the entries.
    Exact(Vec<String>),
}

impl NameMatcher {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameMatcher::Any(parts) => parts.iter().any(|p| name.contains(p.as_str())),
            NameMatcher::All(parts) => {
                !parts.is_empty() && parts.iter().all(|p| name.contains(p.as_str()))
            }
            NameMatcher::Exact(names) => names.iter().any(|n| n == name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingRule {
    pub matcher: NameMatcher,
    pub target: String,
}

/// Maps source block names onto target-engine material keys.
///
/// Only blocks whose bounding box is a full `"block"` are eligible, and names
/// containing any `skip` fragment never map. Rules are tried in order; the first
/// match decides.
#[derive(Clone, Debug)]
pub struct TargetCatalog {
    pub rules: Vec<MappingRule>,
    pub skip: Vec<String>,
}

impl Default for TargetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn any(parts: &[&str], target: &str) -> MappingRule {
    rule(NameMatcher::Any(strings(parts)), target)
}

fn all(parts: &[&str], target: &str) -> MappingRule {
    rule(NameMatcher::All(strings(parts)), target)
}

fn exact(names: &[&str], target: &str) -> MappingRule {
    rule(NameMatcher::Exact(strings(names)), target)
}

fn rule(matcher: NameMatcher, target: &str) -> MappingRule {
    MappingRule {
        matcher,
        target: target.to_string(),
    }
}

fn strings(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

impl TargetCatalog {
    pub fn builtin() -> Self {
        let rules = vec![
            any(
                &["stone", "granite", "diorite", "andesite", "deepslate", "tuff", "calcite"],
                "stone",
            ),
            any(&["dirt", "podzol", "mud"], "dirt"),
            any(&["_planks"], "oak-planks"),
            any(&["_log"], "log"),
            any(&["_leaves"], "oak-leaves"),
            any(&["glass"], "glass"),
            all(&["sand", "red"], "sand-light"),
            any(&["sand"], "sand"),
            exact(&["netherrack", "basalt", "polished_basalt"], "shadowrock"),
            exact(&["soul_sand", "soul_soil"], "ghost-dirt"),
            exact(&["end_stone", "end_stone_bricks"], "void-sand"),
            any(&["sculk", "moss_block"], "creep"),
            any(&["ice"], "ice"),
            exact(&["snow_block"], "snow"),
            any(&["amethyst"], "nuit"),
        ];
        Self {
            rules,
            skip: strings(&["hard_", "technical"]),
        }
    }

    /// Target key for `name`. An unknown bounding box counts as eligible.
    pub fn map(&self, name: &str, bounding_box: Option<&str>) -> Option<&str> {
        if bounding_box.is_some_and(|b| b != "block") {
            return None;
        }
        if self.skip.iter().any(|s| name.contains(s.as_str())) {
            return None;
        }
        self.rules
            .iter()
            .find(|r| r.matcher.matches(name))
            .map(|r| r.target.as_str())
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MappingConfig = toml::from_str(toml_str)?;
        let mut rules = Vec::with_capacity(cfg.rules.len());
        for (i, entry) in cfg.rules.into_iter().enumerate() {
            let matcher = match (entry.contains, entry.all, entry.exact) {
                (Some(v), None, None) => NameMatcher::Any(v),
                (None, Some(v), None) => NameMatcher::All(v),
                (None, None, Some(v)) => NameMatcher::Exact(v),
                _ => {
                    return Err(format!(
                        "rule {} ({}) needs exactly one of contains/all/exact",
                        i, entry.target
                    )
                    .into());
                }
            };
            rules.push(MappingRule {
                matcher,
                target: entry.target,
            });
        }
        let skip = cfg.skip.unwrap_or_else(|| Self::builtin().skip);
        Ok(Self { rules, skip })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct MappingConfig {
    #[serde(default)]
    pub skip: Option<Vec<String>>,
    #[serde(default)]
    pub rules: Vec<MappingEntry>,
}

// [[rules]]
// target = "stone"
// contains = ["stone", "granite"]   # or: all = [...], exact = [...]
#[derive(Deserialize)]
pub struct MappingEntry {
    pub target: String,
    #[serde(default)]
    pub contains: Option<Vec<String>>,
    #[serde(default)]
    pub all: Option<Vec<String>>,
    #[serde(default)]
    pub exact: Option<Vec<String>>,
}
