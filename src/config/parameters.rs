// src/config/parameters.rs

use serde::Deserialize;

/// 射出体パラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProjectileParameters {
    pub mass: f64,   // 質量 (kg)
    pub radius: f64, // 半径 (m)
    #[serde(default = "default_drag_coefficient")]
    pub drag_coefficient: f64, // 抗力係数（球体は 0.47）
}

/// 環境パラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EnvironmentParameters {
    #[serde(default = "default_air_density")]
    pub air_density: f64, // 海面上の大気密度 (kg/m³)
    #[serde(default)]
    pub wind_speed: f64, // 風速 (m/s)
    #[serde(default)]
    pub wind_angle: f64, // 風向 (度、吹いてくる方向、0 = 向かい風)
    #[serde(default = "default_temperature")]
    pub temperature: f64, // 気温 (℃)
    #[serde(default)]
    pub altitude: f64, // 射出地点の標高 (m)
}

/// 球体の抗力係数
fn default_drag_coefficient() -> f64 {
    0.47
}

/// 海面上の標準大気密度 (kg/m³)
fn default_air_density() -> f64 {
    1.225
}

/// 基準気温 (℃)
fn default_temperature() -> f64 {
    20.0
}
