//! Scenario manifests for relative-motion sweeps.

use std::fs::File;
use std::path::{Path, PathBuf};

use relmo_core::constants::MU_EARTH;
use relmo_core::{RelativeState, Vector3};
use relmo_frames::Frame;
use serde::Deserialize;
use thiserror::Error;

/// One propagation scenario: chief orbit, initial relative state and sampling.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    pub frame: Frame,
    #[serde(default = "default_mu")]
    pub mu_m3_s2: f64,
    pub eccentricity: f64,
    pub orbit: OrbitSizeConfig,
    #[serde(default)]
    pub theta0_rad: f64,
    pub duration_s: f64,
    pub step_s: f64,
    #[serde(default = "default_compare_hcw")]
    pub compare_hcw: bool,
    pub initial: InitialStateConfig,
}

/// How the chief orbit's size is given.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "type")]
pub enum OrbitSizeConfig {
    #[serde(rename = "angular_momentum")]
    AngularMomentum { angular_momentum_m2_s: f64 },
    #[serde(rename = "mean_motion")]
    MeanMotion { mean_motion_rev_per_day: f64 },
}

/// Initial relative state, expressed in the scenario's frame.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct InitialStateConfig {
    pub position_m: Vector3,
    pub velocity_m_s: Vector3,
}

impl From<InitialStateConfig> for RelativeState {
    fn from(value: InitialStateConfig) -> Self {
        RelativeState::new(value.position_m, value.velocity_m_s)
    }
}

fn default_mu() -> f64 {
    MU_EARTH
}

fn default_compare_hcw() -> bool {
    true
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load scenarios from a TOML file, a YAML list, or a directory of TOML files.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if has_extension(path, "toml") {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| has_extension(path, "toml"))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().map(|e| e == ext).unwrap_or(false)
}

/// Find a scenario by name, ignoring ASCII case.
pub fn find_scenario<'a>(scenarios: &'a [ScenarioConfig], name: &str) -> Option<&'a ScenarioConfig> {
    scenarios
        .iter()
        .find(|scenario| scenario.name.eq_ignore_ascii_case(name))
}
