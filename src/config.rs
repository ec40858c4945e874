//! Engine parameters read from YAML.
//!
//! Every section and key is optional; anything missing keeps the value the
//! dashboards use by default. Unknown sections or keys, and sections that
//! are not mappings, are rejected.
//!
//! ```yaml
//! dataset:
//!   size: 100
//!   x_min: 0.0
//!   x_max: 10.0
//!   slope: 2.0
//!   intercept: 1.0
//!   noise_std: 1.0
//!   seed: 42
//! linear_fit:
//!   learning_rate: 0.1
//!   iterations: 50
//!   impact_rates: [0.01, 0.1, 0.5]
//! surface:
//!   start_x: 2.0
//!   start_y: 2.0
//!   learning_rate: 0.1
//!   steps: 50
//! integration:
//!   function: "x²"
//!   lower: 0.0
//!   upper: 2.0
//!   partitions: 10
//!   method: left
//! explorer:
//!   function: "x²"
//!   point: 0.0
//! ```

use crate::dataset::DatasetConfig;
use crate::error::{EngineError, Result};
use crate::linear_fit::IMPACT_RATES;
use crate::riemann::DEFAULT_INTERVAL;
use crate::surface::DEFAULT_SURFACE_STEPS;
use crate::utils::S;
use std::fs;
use std::path::Path;
use yaml_rust::{Yaml, YamlLoader};

#[derive(Debug, Clone, PartialEq)]
pub struct LinearFitConfig {
    pub learning_rate: S,
    pub iterations: usize,
    pub impact_rates: Vec<S>,
}

impl Default for LinearFitConfig {
    fn default() -> Self {
        LinearFitConfig {
            learning_rate: 0.1,
            iterations: 50,
            impact_rates: IMPACT_RATES.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    pub start_x: S,
    pub start_y: S,
    pub learning_rate: S,
    pub steps: usize,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            start_x: 2.,
            start_y: 2.,
            learning_rate: 0.1,
            steps: DEFAULT_SURFACE_STEPS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationConfig {
    pub function: String,
    pub lower: S,
    pub upper: S,
    pub partitions: usize,
    pub method: String,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        IntegrationConfig {
            function: "x²".to_string(),
            lower: DEFAULT_INTERVAL.0,
            upper: DEFAULT_INTERVAL.1,
            partitions: 10,
            method: "left".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub function: String,
    pub point: S,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        ExplorerConfig {
            function: "x²".to_string(),
            point: 0.,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineConfig {
    pub dataset: DatasetConfig,
    pub linear_fit: LinearFitConfig,
    pub surface: SurfaceConfig,
    pub integration: IntegrationConfig,
    pub explorer: ExplorerConfig,
}

impl EngineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
        let text = fs::read_to_string(path)?;
        EngineConfig::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<EngineConfig> {
        let docs = YamlLoader::load_from_str(text)
            .map_err(|e| EngineError::Config(format!("invalid YAML: {}", e)))?;
        let mut config = EngineConfig::default();
        let doc = match docs.first() {
            Some(doc) if !matches!(doc, Yaml::Null) => doc,
            _ => return Ok(config),
        };
        check_keys(doc, "top level", SECTIONS)?;

        let d = section(doc, "dataset", DATASET_KEYS)?;
        read_usize(&d["size"], "dataset.size", &mut config.dataset.size)?;
        read_float(&d["x_min"], "dataset.x_min", &mut config.dataset.x_min)?;
        read_float(&d["x_max"], "dataset.x_max", &mut config.dataset.x_max)?;
        read_float(&d["slope"], "dataset.slope", &mut config.dataset.slope)?;
        read_float(&d["intercept"], "dataset.intercept", &mut config.dataset.intercept)?;
        read_float(&d["noise_std"], "dataset.noise_std", &mut config.dataset.noise_std)?;
        if let Some(seed) = non_negative(&d["seed"], "dataset.seed")? {
            config.dataset.seed = seed;
        }

        let l = section(doc, "linear_fit", LINEAR_FIT_KEYS)?;
        read_float(
            &l["learning_rate"],
            "linear_fit.learning_rate",
            &mut config.linear_fit.learning_rate,
        )?;
        read_usize(&l["iterations"], "linear_fit.iterations", &mut config.linear_fit.iterations)?;
        match &l["impact_rates"] {
            Yaml::BadValue => {}
            Yaml::Array(items) => {
                config.linear_fit.impact_rates = items
                    .iter()
                    .map(|item| {
                        float(item).ok_or_else(|| {
                            EngineError::Config(format!(
                                "linear_fit.impact_rates: expected numbers, got {:?}",
                                item
                            ))
                        })
                    })
                    .collect::<Result<Vec<S>>>()?;
            }
            other => {
                return Err(EngineError::Config(format!(
                    "linear_fit.impact_rates: expected a list, got {:?}",
                    other
                )))
            }
        }

        let s = section(doc, "surface", SURFACE_KEYS)?;
        read_float(&s["start_x"], "surface.start_x", &mut config.surface.start_x)?;
        read_float(&s["start_y"], "surface.start_y", &mut config.surface.start_y)?;
        read_float(
            &s["learning_rate"],
            "surface.learning_rate",
            &mut config.surface.learning_rate,
        )?;
        read_usize(&s["steps"], "surface.steps", &mut config.surface.steps)?;

        let i = section(doc, "integration", INTEGRATION_KEYS)?;
        read_string(&i["function"], "integration.function", &mut config.integration.function)?;
        read_float(&i["lower"], "integration.lower", &mut config.integration.lower)?;
        read_float(&i["upper"], "integration.upper", &mut config.integration.upper)?;
        read_usize(&i["partitions"], "integration.partitions", &mut config.integration.partitions)?;
        read_string(&i["method"], "integration.method", &mut config.integration.method)?;

        let e = section(doc, "explorer", EXPLORER_KEYS)?;
        read_string(&e["function"], "explorer.function", &mut config.explorer.function)?;
        read_float(&e["point"], "explorer.point", &mut config.explorer.point)?;

        Ok(config)
    }
}

const SECTIONS: &[&str] = &["dataset", "linear_fit", "surface", "integration", "explorer"];
const DATASET_KEYS: &[&str] = &[
    "size",
    "x_min",
    "x_max",
    "slope",
    "intercept",
    "noise_std",
    "seed",
];
const LINEAR_FIT_KEYS: &[&str] = &["learning_rate", "iterations", "impact_rates"];
const SURFACE_KEYS: &[&str] = &["start_x", "start_y", "learning_rate", "steps"];
const INTEGRATION_KEYS: &[&str] = &["function", "lower", "upper", "partitions", "method"];
const EXPLORER_KEYS: &[&str] = &["function", "point"];

/// `node` must be a mapping whose keys all appear in `known`.
fn check_keys(node: &Yaml, name: &str, known: &[&str]) -> Result<()> {
    let hash = node.as_hash().ok_or_else(|| {
        EngineError::Config(format!("{}: expected a mapping, got {:?}", name, node))
    })?;
    for key in hash.keys() {
        match key.as_str() {
            Some(k) if known.contains(&k) => {}
            _ => {
                return Err(EngineError::Config(format!(
                    "{}: unknown key {:?} (expected one of {})",
                    name,
                    key,
                    known.join(", ")
                )))
            }
        }
    }
    Ok(())
}

/// The section `name` of `doc`. Absent or empty sections come back as
/// `BadValue`/`Null`, whose lookups all miss.
fn section<'a>(doc: &'a Yaml, name: &str, known: &[&str]) -> Result<&'a Yaml> {
    let node = &doc[name];
    match node {
        Yaml::BadValue | Yaml::Null => Ok(node),
        _ => {
            check_keys(node, name, known)?;
            Ok(node)
        }
    }
}

/// YAML writes `1` and `1.0` differently; both are fine for a float field.
fn float(node: &Yaml) -> Option<S> {
    match node {
        Yaml::Real(_) => node.as_f64(),
        Yaml::Integer(i) => Some(*i as S),
        _ => None,
    }
}

fn read_float(node: &Yaml, key: &str, target: &mut S) -> Result<()> {
    if node.is_badvalue() {
        return Ok(());
    }
    *target = float(node).ok_or_else(|| {
        EngineError::Config(format!("{}: expected a number, got {:?}", key, node))
    })?;
    Ok(())
}

fn non_negative(node: &Yaml, key: &str) -> Result<Option<u64>> {
    match node {
        Yaml::BadValue => Ok(None),
        Yaml::Integer(i) if *i >= 0 => Ok(Some(*i as u64)),
        other => Err(EngineError::Config(format!(
            "{}: expected a non-negative integer, got {:?}",
            key, other
        ))),
    }
}

fn read_usize(node: &Yaml, key: &str, target: &mut usize) -> Result<()> {
    if let Some(v) = non_negative(node, key)? {
        *target = v as usize;
    }
    Ok(())
}

fn read_string(node: &Yaml, key: &str, target: &mut String) -> Result<()> {
    match node {
        Yaml::BadValue => Ok(()),
        Yaml::String(s) => {
            *target = s.clone();
            Ok(())
        }
        other => Err(EngineError::Config(format!(
            "{}: expected a string, got {:?}",
            key, other
        ))),
    }
}
