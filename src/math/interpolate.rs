// src/math/interpolate.rs

/// 地面交差点の補間係数を計算する純粋関数
///
/// 最後の生ステップで高度が 0 を跨いだとき、直前の状態から交差点までの
/// 割合を線形補間で求める。`y_prev == y_curr` の場合はゼロ除算を避けて
/// 現在のステップをそのまま採用する（係数 1.0）。
///
/// # 引数
/// - `y_prev`: 直前のステップの高度（m）
/// - `y_curr`: 現在のステップの高度（m、0 以下）
///
/// # 戻り値
/// - 補間係数（0.0〜1.0）
pub fn ground_crossing_fraction(y_prev: f64, y_curr: f64) -> f64 {
    let dy = y_prev - y_curr;
    if dy.abs() < f64::EPSILON {
        1.0
    } else {
        y_prev / dy
    }
}

/// 線形補間
///
/// # 引数
/// - `a`: 始点の値
/// - `b`: 終点の値
/// - `frac`: 補間係数（0.0 で `a`、1.0 で `b`）
///
/// # 戻り値
/// - 補間後の値
pub fn lerp(a: f64, b: f64, frac: f64) -> f64 {
    a + (b - a) * frac
}
