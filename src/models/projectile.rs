// src/models/projectile.rs

use std::f64::consts::PI;

/// 射出体の断面積を計算する純粋関数
///
/// # 引数
/// - `radius`: 射出体の半径（m）
///
/// # 戻り値
/// - 断面積（m²）
pub fn cross_section_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// 風ベクトルを計算する純粋関数
///
/// 風向は気象学の慣例に従い「吹いてくる方向」を +x 軸から測った角度で表す。
/// 0 度は向かい風（-x 方向に吹く）、90 度は下降気流となる。
///
/// # 引数
/// - `wind_speed`: 風速（m/s）
/// - `wind_angle_deg`: 風向（度）
///
/// # 戻り値
/// - 大気の速度ベクトル [wx, wy]（m/s）
pub fn wind_vector(wind_speed: f64, wind_angle_deg: f64) -> [f64; 2] {
    let wind_rad = wind_angle_deg.to_radians();
    [-wind_speed * wind_rad.cos(), -wind_speed * wind_rad.sin()]
}

/// 空気抵抗力を計算する純粋関数
///
/// 抗力は大気に対する相対速度の二乗に比例し、相対速度の逆向きに働く。
///
/// # 引数
/// - `velocity`: 射出体の速度ベクトル [vx, vy]（m/s）
/// - `wind`: 大気の速度ベクトル [wx, wy]（m/s）
/// - `air_density`: 大気密度（kg/m³）
/// - `drag_coefficient`: 抗力係数
/// - `area`: 断面積（m²）
///
/// # 戻り値
/// - 空気抵抗力ベクトル [Fx, Fy]（N）
pub fn calculate_drag_force(
    velocity: &[f64; 2],
    wind: &[f64; 2],
    air_density: f64,
    drag_coefficient: f64,
    area: f64,
) -> [f64; 2] {
    let rel_velocity = [velocity[0] - wind[0], velocity[1] - wind[1]];
    let rel_speed = (rel_velocity[0].powi(2) + rel_velocity[1].powi(2)).sqrt();
    if rel_speed == 0.0 {
        return [0.0, 0.0];
    }
    let drag_magnitude = 0.5 * air_density * rel_speed.powi(2) * drag_coefficient * area;
    [
        -drag_magnitude * (rel_velocity[0] / rel_speed),
        -drag_magnitude * (rel_velocity[1] / rel_speed),
    ]
}

/// 合計力を計算する純粋関数
///
/// # 引数
/// - `drag`: 空気抵抗力ベクトル [Fx, Fy]（N）
/// - `gravity_force`: 重力力ベクトル [Fx, Fy]（N）
///
/// # 戻り値
/// - 合計力ベクトル [Fx, Fy]（N）
pub fn calculate_net_force(drag: &[f64; 2], gravity_force: &[f64; 2]) -> [f64; 2] {
    [drag[0] + gravity_force[0], drag[1] + gravity_force[1]]
}

/// 加速度を計算する純粋関数
///
/// # 引数
/// - `net_force`: 合計力ベクトル [Fx, Fy]（N）
/// - `mass`: 射出体の質量（kg）
///
/// # 戻り値
/// - 加速度ベクトル [ax, ay]（m/s²）
pub fn calculate_acceleration(net_force: &[f64; 2], mass: f64) -> [f64; 2] {
    [net_force[0] / mass, net_force[1] / mass]
}

/// 速度を更新する純粋関数
///
/// # 引数
/// - `current_velocity`: 現在の速度ベクトル [vx, vy]（m/s）
/// - `acceleration`: 加速度ベクトル [ax, ay]（m/s²）
/// - `dt`: 時間ステップ（s）
///
/// # 戻り値
/// - 更新後の速度ベクトル [vx, vy]（m/s）
pub fn update_velocity(
    current_velocity: &[f64; 2],
    acceleration: &[f64; 2],
    dt: f64,
) -> [f64; 2] {
    [
        current_velocity[0] + acceleration[0] * dt,
        current_velocity[1] + acceleration[1] * dt,
    ]
}

/// 位置を更新する純粋関数
///
/// # 引数
/// - `current_position`: 現在の位置ベクトル [x, y]（m）
/// - `velocity`: 速度ベクトル [vx, vy]（m/s）
/// - `dt`: 時間ステップ（s）
///
/// # 戻り値
/// - 更新後の位置ベクトル [x, y]（m）
pub fn update_position(current_position: &[f64; 2], velocity: &[f64; 2], dt: f64) -> [f64; 2] {
    [
        current_position[0] + velocity[0] * dt,
        current_position[1] + velocity[1] * dt,
    ]
}
