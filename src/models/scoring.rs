// src/models/scoring.rs

use serde::Serialize;

use crate::config::TargetConfig;
use crate::math::SimulationError;

/// 採点結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    pub hit: bool,             // 命中したか
    pub score_multiplier: u32, // 得点倍率（外れた場合は 0）
    pub miss_distance: f64,    // ターゲット中心からの水平距離 (m)
    pub message: String,       // 結果メッセージ（表示用、意味的には非依存）
}

/// 着弾位置を採点する純粋関数
///
/// ボーナスゾーンを小さい半径から順に調べ、最初に `d <= 半径` を満たした
/// ゾーンが倍率を決める（n 個中 i 番目のゾーンは倍率 n - i）。どのゾーンにも
/// 入らず基本半径内に収まった場合は倍率 1、基本半径の外は外れで倍率 0。
/// 境界値はゾーンの内側として扱う。miss_distance はターゲット中心からの
/// 距離で統一する（縁からの距離ではない）。
///
/// # 引数
/// - `impact_x`: 着弾位置の x 座標（m）
/// - `target`: ターゲット設定
///
/// # 戻り値
/// - 採点結果
///
/// # エラー
/// - ターゲット設定が不正な場合は `SimulationError::Validation`
pub fn evaluate_hit(impact_x: f64, target: &TargetConfig) -> Result<ScoringResult, SimulationError> {
    validate_target(target)?;

    let distance = (impact_x - target.target_x).abs();
    let hit = distance <= target.target_radius;

    let mut zones = target.bonus_zones.clone();
    zones.sort_by(f64::total_cmp);

    let mut score_multiplier = 0;
    if hit {
        score_multiplier = 1;
        for (i, zone_radius) in zones.iter().enumerate() {
            if distance <= *zone_radius {
                score_multiplier = (zones.len() - i) as u32;
                break;
            }
        }
    }

    Ok(ScoringResult {
        hit,
        score_multiplier,
        miss_distance: distance,
        message: hit_message(hit, distance, target.target_radius),
    })
}

/// ターゲット設定の検証
///
/// # 引数
/// - `target`: ターゲット設定
///
/// # 戻り値
/// - 正常な場合は `Ok(())`
fn validate_target(target: &TargetConfig) -> Result<(), SimulationError> {
    if target.target_radius <= 0.0 {
        return Err(SimulationError::Validation(
            "target_radius は正でなければなりません。".to_string(),
        ));
    }
    for zone_radius in &target.bonus_zones {
        if *zone_radius <= 0.0 {
            return Err(SimulationError::Validation(
                "bonus_zones の半径は正でなければなりません。".to_string(),
            ));
        }
        if *zone_radius > target.target_radius {
            return Err(SimulationError::Validation(
                "bonus_zones の半径は target_radius 以下でなければなりません。".to_string(),
            ));
        }
    }
    Ok(())
}

/// 命中精度に応じた結果メッセージの生成
///
/// # 引数
/// - `hit`: 命中したか
/// - `miss_distance`: ターゲット中心からの距離（m）
/// - `target_radius`: 基本得点半径（m）
///
/// # 戻り値
/// - 結果メッセージ
pub fn hit_message(hit: bool, miss_distance: f64, target_radius: f64) -> String {
    if !hit {
        return format!("{:.2} メートル外れました！", miss_distance);
    }

    let accuracy = (1.0 - miss_distance / target_radius) * 100.0;
    if accuracy >= 95.0 {
        "パーフェクト！🎯".to_string()
    } else if accuracy >= 80.0 {
        "素晴らしい！⭐".to_string()
    } else if accuracy >= 60.0 {
        "ナイスショット！👍".to_string()
    } else {
        "命中！✓".to_string()
    }
}
