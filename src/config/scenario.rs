// src/config/scenario.rs

use serde::Deserialize;

/// シナリオ（発射条件とターゲット配置）
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Scenario {
    pub launch: LaunchParameters,
    pub target: Option<TargetConfig>, // ターゲットなしの場合は採点を行わない
}

/// 発射パラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LaunchParameters {
    pub v0: f64,        // 初速 (m/s)
    pub angle_deg: f64, // 発射角 (度)
    #[serde(default = "default_gravity")]
    pub g: f64, // 重力加速度 (m/s²)
    #[serde(default = "default_time_step")]
    pub dt: f64, // 積分時間ステップ (s)
    #[serde(default)]
    pub y0: f64, // 初期高度 (m)
}

/// ターゲット設定
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TargetConfig {
    pub target_x: f64,      // ターゲット中心の位置 (m)
    pub target_radius: f64, // 基本得点半径 (m)
    #[serde(default)]
    pub bonus_zones: Vec<f64>, // ボーナスゾーン半径 (m)、小さいほど高倍率
}

/// 標準重力加速度 (m/s²)
fn default_gravity() -> f64 {
    9.81
}

/// 標準の積分時間ステップ (s)
fn default_time_step() -> f64 {
    0.01
}
