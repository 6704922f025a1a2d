// src/math/error.rs

use thiserror::Error;

/// シミュレーションのエラー種別
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("パラメータが不正です: {0}")]
    Validation(String),
    #[error("{max_steps}ステップ以内に着地条件に到達しませんでした。")]
    Diverged { max_steps: usize },
}

impl SimulationError {
    /// トランスポート層向けの安定したエラー種別識別子
    ///
    /// # 戻り値
    /// - `"ValidationError"` または `"SimulationDivergedError"`
    pub fn kind(&self) -> &'static str {
        match self {
            SimulationError::Validation(_) => "ValidationError",
            SimulationError::Diverged { .. } => "SimulationDivergedError",
        }
    }
}
