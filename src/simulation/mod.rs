// src/simulation/mod.rs

pub mod csv;
pub mod framework;
pub mod load_parameters;

use serde::Serialize;

use crate::models::scoring::ScoringResult;

/// 1 積分ステップ分の弾道サンプル
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub t: f64,     // 時刻 (s)
    pub x: f64,     // 水平位置 (m)
    pub y: f64,     // 高度 (m)
    pub vx: f64,    // 水平速度 (m/s)
    pub vy: f64,    // 鉛直速度 (m/s)
    pub speed: f64, // 速さ (m/s)
}

/// 弾道の統計量（着地時に一度だけ算出）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryStats {
    pub time_of_flight: f64, // 飛翔時間 (s)
    pub max_height: f64,     // 最高高度 (m)
    pub range: f64,          // 射程（着弾点の x 座標、m）
    pub max_speed: f64,      // 最大速さ (m/s)
    pub impact_speed: f64,   // 着弾速さ (m/s)
    pub impact_angle: f64,   // 着弾角（水平からの角度、度）
}

/// シミュレーション 1 回分の応答ペイロード
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutput {
    pub samples: Vec<TrajectorySample>,
    pub stats: TrajectoryStats,
    pub scoring: Option<ScoringResult>, // ターゲット未指定の場合は None
}
