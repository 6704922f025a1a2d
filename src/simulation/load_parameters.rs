// src/simulation/load_parameters.rs

use serde_yaml::from_reader;
use std::error::Error;
use std::fs::File;

use crate::config::{EnvironmentParameters, ProjectileParameters, Scenario};

/// 射出体パラメータの読み込み
pub fn load_projectile_parameters(path: &str) -> Result<ProjectileParameters, Box<dyn Error>> {
    let file = File::open(path)?;
    let params: ProjectileParameters = from_reader(file)?;
    Ok(params)
}

/// 環境パラメータの読み込み
pub fn load_environment_parameters(path: &str) -> Result<EnvironmentParameters, Box<dyn Error>> {
    let file = File::open(path)?;
    let params: EnvironmentParameters = from_reader(file)?;
    Ok(params)
}

/// シナリオの読み込み
pub fn load_scenario(path: &str) -> Result<Scenario, Box<dyn Error>> {
    let file = File::open(path)?;
    let scenario: Scenario = from_reader(file)?;
    Ok(scenario)
}
