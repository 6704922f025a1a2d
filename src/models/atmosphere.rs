// src/models/atmosphere.rs

/// 大気のスケールハイト（m）
pub const ATMOSPHERIC_SCALE_HEIGHT: f64 = 7400.0;

/// 密度補正の基準気温（℃）
pub const REFERENCE_TEMPERATURE_C: f64 = 20.0;

/// 摂氏からケルビンへのオフセット
pub const KELVIN_OFFSET: f64 = 273.15;

/// 標高と気温による大気密度の補正（簡略化）
///
/// 気圧高度式 `exp(-altitude / 7400)` と、基準気温 20℃ に対する
/// 理想気体の温度補正 `(293.15 / T_K)` を組み合わせる。
///
/// # 引数
/// - `base_density`: 海面上の大気密度（kg/m³）
/// - `altitude`: 標高（m）
/// - `temperature`: 気温（℃）
///
/// # 戻り値
/// - 補正後の大気密度（kg/m³）
pub fn adjust_air_density(base_density: f64, altitude: f64, temperature: f64) -> f64 {
    let barometric = (-altitude / ATMOSPHERIC_SCALE_HEIGHT).exp();
    let thermal = (REFERENCE_TEMPERATURE_C + KELVIN_OFFSET) / (temperature + KELVIN_OFFSET);
    base_density * barometric * thermal
}
