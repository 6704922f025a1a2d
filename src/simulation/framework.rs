// src/simulation/framework.rs

use crate::config::{EnvironmentParameters, LaunchParameters, ProjectileParameters};
use crate::math::{ground_crossing_fraction, lerp, SimulationError};
use crate::models::atmosphere::{adjust_air_density, KELVIN_OFFSET};
use crate::models::projectile::{
    calculate_acceleration, calculate_drag_force, calculate_net_force, cross_section_area,
    update_position, update_velocity, wind_vector,
};
use crate::simulation::{TrajectorySample, TrajectoryStats};

/// 着地せずに許容される最大ステップ数
pub const MAX_STEPS: usize = 10_000;

/// 弾道シミュレーションの実行
///
/// 半陰的オイラー法（速度を先に更新し、更新後の速度で位置を進める）で
/// 運動方程式を積分する。高度が初めて 0 以下となったステップで停止し、
/// 最後のサンプルは直前の状態と線形補間して高度ちょうど 0 の着弾点を記録
/// する。MAX_STEPS を超えても着地しない場合は発散として扱う。
///
/// # 引数
/// - `launch`: 発射パラメータ
/// - `projectile`: 射出体パラメータ
/// - `environment`: 環境パラメータ
///
/// # 戻り値
/// - 弾道サンプル列（先頭は発射時点、末尾は補間された着弾点）
/// - 弾道の統計量
///
/// # エラー
/// - パラメータが不正な場合は `SimulationError::Validation`
/// - ステップ上限内に着地しない場合は `SimulationError::Diverged`
pub fn simulate(
    launch: &LaunchParameters,
    projectile: &ProjectileParameters,
    environment: &EnvironmentParameters,
) -> Result<(Vec<TrajectorySample>, TrajectoryStats), SimulationError> {
    validate_parameters(launch, projectile, environment)?;

    let theta = launch.angle_deg.to_radians();
    let mut velocity = [launch.v0 * theta.cos(), launch.v0 * theta.sin()];
    let mut position = [0.0, launch.y0];
    let mut t = 0.0;

    // 実行中は変化しない環境量を事前に計算
    let area = cross_section_area(projectile.radius);
    let air_density = adjust_air_density(
        environment.air_density,
        environment.altitude,
        environment.temperature,
    );
    let wind = wind_vector(environment.wind_speed, environment.wind_angle);
    let gravity_force = [0.0, -projectile.mass * launch.g];

    let mut samples = vec![TrajectorySample {
        t,
        x: position[0],
        y: position[1],
        vx: velocity[0],
        vy: velocity[1],
        speed: launch.v0,
    }];

    for _ in 0..MAX_STEPS {
        // 力 → 加速度 → 速度 → 位置 の順で 1 ステップ進める
        let drag = calculate_drag_force(
            &velocity,
            &wind,
            air_density,
            projectile.drag_coefficient,
            area,
        );
        let net_force = calculate_net_force(&drag, &gravity_force);
        let acceleration = calculate_acceleration(&net_force, projectile.mass);

        let new_velocity = update_velocity(&velocity, &acceleration, launch.dt);
        let new_position = update_position(&position, &new_velocity, launch.dt);
        let new_t = t + launch.dt;

        if new_position[1] <= 0.0 {
            // 発射直後に地面へ向かう退行ケース（y0 = 0 で下向き発射）では
            // 補間すると時刻 0 のサンプルが重複するため、係数 1 で現在の
            // ステップを採用する
            let frac = if position[1] <= 0.0 {
                1.0
            } else {
                ground_crossing_fraction(position[1], new_position[1])
            };

            let terminal_vx = lerp(velocity[0], new_velocity[0], frac);
            let terminal_vy = lerp(velocity[1], new_velocity[1], frac);
            samples.push(TrajectorySample {
                t: lerp(t, new_t, frac),
                x: lerp(position[0], new_position[0], frac),
                y: 0.0,
                vx: terminal_vx,
                vy: terminal_vy,
                speed: (terminal_vx.powi(2) + terminal_vy.powi(2)).sqrt(),
            });

            let stats = derive_stats(&samples);
            return Ok((samples, stats));
        }

        velocity = new_velocity;
        position = new_position;
        t = new_t;
        samples.push(TrajectorySample {
            t,
            x: position[0],
            y: position[1],
            vx: velocity[0],
            vy: velocity[1],
            speed: (velocity[0].powi(2) + velocity[1].powi(2)).sqrt(),
        });
    }

    Err(SimulationError::Diverged {
        max_steps: MAX_STEPS,
    })
}

/// 積分開始前のパラメータ検証
///
/// # 引数
/// - `launch`: 発射パラメータ
/// - `projectile`: 射出体パラメータ
/// - `environment`: 環境パラメータ
///
/// # 戻り値
/// - 正常な場合は `Ok(())`
pub fn validate_parameters(
    launch: &LaunchParameters,
    projectile: &ProjectileParameters,
    environment: &EnvironmentParameters,
) -> Result<(), SimulationError> {
    if launch.v0 <= 0.0 {
        return Err(SimulationError::Validation(
            "v0 は正でなければなりません。".to_string(),
        ));
    }
    if launch.dt <= 0.0 {
        return Err(SimulationError::Validation(
            "dt は正でなければなりません。".to_string(),
        ));
    }
    if launch.g <= 0.0 {
        return Err(SimulationError::Validation(
            "g は正でなければなりません。".to_string(),
        ));
    }
    if launch.y0 < 0.0 {
        return Err(SimulationError::Validation(
            "y0 は負であってはなりません。".to_string(),
        ));
    }
    if projectile.mass <= 0.0 {
        return Err(SimulationError::Validation(
            "mass は正でなければなりません。".to_string(),
        ));
    }
    if projectile.radius < 0.0 {
        return Err(SimulationError::Validation(
            "radius は負であってはなりません。".to_string(),
        ));
    }
    if projectile.drag_coefficient < 0.0 {
        return Err(SimulationError::Validation(
            "drag_coefficient は負であってはなりません。".to_string(),
        ));
    }
    if environment.air_density < 0.0 {
        return Err(SimulationError::Validation(
            "air_density は負であってはなりません。".to_string(),
        ));
    }
    if environment.wind_speed < 0.0 {
        return Err(SimulationError::Validation(
            "wind_speed は負であってはなりません。".to_string(),
        ));
    }
    if environment.temperature <= -KELVIN_OFFSET {
        return Err(SimulationError::Validation(
            "temperature は絶対零度より高くなければなりません。".to_string(),
        ));
    }
    Ok(())
}

/// サンプル列から統計量を導出する
///
/// # 引数
/// - `samples`: 弾道サンプル列（末尾が着弾点）
///
/// # 戻り値
/// - 弾道の統計量
fn derive_stats(samples: &[TrajectorySample]) -> TrajectoryStats {
    let terminal = samples.last().expect("サンプル列は空にならない");
    let max_height = samples.iter().map(|s| s.y).fold(f64::NEG_INFINITY, f64::max);
    let max_speed = samples
        .iter()
        .map(|s| s.speed)
        .fold(f64::NEG_INFINITY, f64::max);

    TrajectoryStats {
        time_of_flight: terminal.t,
        max_height,
        range: terminal.x,
        max_speed,
        impact_speed: terminal.speed,
        impact_angle: terminal.vy.atan2(terminal.vx).to_degrees().abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_launch() -> LaunchParameters {
        LaunchParameters {
            v0: 25.0,
            angle_deg: 45.0,
            g: 9.81,
            dt: 0.01,
            y0: 0.0,
        }
    }

    fn default_projectile() -> ProjectileParameters {
        ProjectileParameters {
            mass: 0.1,
            radius: 0.02,
            drag_coefficient: 0.47,
        }
    }

    fn calm_environment() -> EnvironmentParameters {
        EnvironmentParameters {
            air_density: 1.225,
            wind_speed: 0.0,
            wind_angle: 0.0,
            temperature: 20.0,
            altitude: 0.0,
        }
    }

    /// 抗力なし（大気密度 0・無風）の環境
    fn vacuum_environment() -> EnvironmentParameters {
        EnvironmentParameters {
            air_density: 0.0,
            wind_speed: 0.0,
            wind_angle: 0.0,
            temperature: 20.0,
            altitude: 0.0,
        }
    }

    /// test_validation_rejections
    /// v0 = 0、dt = -1、g = 0、負の質量はいずれも積分前に
    /// Validation エラーとして拒否されることを確認します。
    #[test]
    fn test_validation_rejections() {
        let projectile = default_projectile();
        let environment = calm_environment();

        let zero_v0 = LaunchParameters {
            v0: 0.0,
            ..default_launch()
        };
        assert!(matches!(
            simulate(&zero_v0, &projectile, &environment),
            Err(SimulationError::Validation(_))
        ));

        let negative_dt = LaunchParameters {
            dt: -1.0,
            ..default_launch()
        };
        assert!(matches!(
            simulate(&negative_dt, &projectile, &environment),
            Err(SimulationError::Validation(_))
        ));

        let zero_g = LaunchParameters {
            g: 0.0,
            ..default_launch()
        };
        assert!(matches!(
            simulate(&zero_g, &projectile, &environment),
            Err(SimulationError::Validation(_))
        ));

        let negative_mass = ProjectileParameters {
            mass: -0.1,
            ..default_projectile()
        };
        assert!(matches!(
            simulate(&default_launch(), &negative_mass, &environment),
            Err(SimulationError::Validation(_))
        ));
    }

    /// test_simulate_no_drag_matches_closed_form
    /// 抗力なしでは理想放物運動に一致するはずです。v0 = 20、θ = 45°、
    /// g = 9.81 のとき射程は v0² sin(2θ) / g = 400 / 9.81 ≈ 40.775 m、
    /// 最高高度は v0² sin²θ / (2g) ≈ 10.194 m になります（dt を小さく
    /// するほど誤差は縮小）。
    #[test]
    fn test_simulate_no_drag_matches_closed_form() {
        let launch = LaunchParameters {
            v0: 20.0,
            angle_deg: 45.0,
            g: 9.81,
            dt: 0.001,
            y0: 0.0,
        };
        let (_, stats) = simulate(&launch, &default_projectile(), &vacuum_environment()).unwrap();

        let expected_range = 20.0f64.powi(2) * (2.0 * 45.0f64.to_radians()).sin() / 9.81;
        let expected_apex = 20.0f64.powi(2) * 45.0f64.to_radians().sin().powi(2) / (2.0 * 9.81);

        assert!((stats.range - expected_range).abs() < 0.05);
        assert!((stats.max_height - expected_apex).abs() < 0.05);
        // 対称な弾道では着弾速さと着弾角も発射時とほぼ一致する
        assert!((stats.impact_speed - 20.0).abs() < 0.05);
        assert!((stats.impact_angle - 45.0).abs() < 0.1);
    }

    /// test_simulate_terminal_sample_on_ground
    /// 末尾のサンプルは補間により高度ちょうど 0 で記録されることを
    /// 確認します。
    #[test]
    fn test_simulate_terminal_sample_on_ground() {
        let (samples, stats) =
            simulate(&default_launch(), &default_projectile(), &calm_environment()).unwrap();

        let terminal = samples.last().unwrap();
        assert_eq!(terminal.y, 0.0);
        assert_eq!(stats.range, terminal.x);
        assert_eq!(stats.time_of_flight, terminal.t);
        assert!(stats.range >= 0.0);
    }

    /// test_simulate_monotonic_time
    /// サンプルの時刻は厳密に単調増加することを確認します。
    #[test]
    fn test_simulate_monotonic_time() {
        let (samples, _) =
            simulate(&default_launch(), &default_projectile(), &calm_environment()).unwrap();

        for pair in samples.windows(2) {
            assert!(pair[1].t > pair[0].t);
        }
    }

    /// test_simulate_initial_sample
    /// 先頭のサンプルは (0, 0, y0, v0 cosθ, v0 sinθ, v0) であることを
    /// 確認します。
    #[test]
    fn test_simulate_initial_sample() {
        let launch = LaunchParameters {
            y0: 2.0,
            ..default_launch()
        };
        let (samples, _) = simulate(&launch, &default_projectile(), &calm_environment()).unwrap();

        let first = &samples[0];
        let theta = 45.0f64.to_radians();
        assert_eq!(first.t, 0.0);
        assert_eq!(first.x, 0.0);
        assert_eq!(first.y, 2.0);
        assert!((first.vx - 25.0 * theta.cos()).abs() < 1e-12);
        assert!((first.vy - 25.0 * theta.sin()).abs() < 1e-12);
        assert_eq!(first.speed, 25.0);
    }

    /// test_simulate_deterministic
    /// 同一パラメータの 2 回の実行はビット単位で一致することを確認します。
    #[test]
    fn test_simulate_deterministic() {
        let launch = default_launch();
        let projectile = default_projectile();
        let environment = EnvironmentParameters {
            wind_speed: 4.0,
            wind_angle: 30.0,
            ..calm_environment()
        };

        let first = simulate(&launch, &projectile, &environment).unwrap();
        let second = simulate(&launch, &projectile, &environment).unwrap();

        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }

    /// test_simulate_headwind_shortens_range
    /// 向かい風（風向 0 度）は追い風（風向 180 度）より射程が短くなる
    /// ことを確認します。
    #[test]
    fn test_simulate_headwind_shortens_range() {
        let launch = default_launch();
        let projectile = default_projectile();

        let headwind = EnvironmentParameters {
            wind_speed: 8.0,
            wind_angle: 0.0,
            ..calm_environment()
        };
        let tailwind = EnvironmentParameters {
            wind_speed: 8.0,
            wind_angle: 180.0,
            ..calm_environment()
        };

        let (_, into_wind) = simulate(&launch, &projectile, &headwind).unwrap();
        let (_, with_wind) = simulate(&launch, &projectile, &tailwind).unwrap();

        assert!(into_wind.range < with_wind.range);
    }

    /// test_simulate_drag_shortens_range
    /// 抗力ありの射程は真空中の射程より短くなることを確認します。
    #[test]
    fn test_simulate_drag_shortens_range() {
        let launch = default_launch();
        let projectile = ProjectileParameters {
            mass: 0.01,
            radius: 0.05,
            drag_coefficient: 0.47,
        };

        let (_, with_drag) = simulate(&launch, &projectile, &calm_environment()).unwrap();
        let (_, vacuum) = simulate(&launch, &projectile, &vacuum_environment()).unwrap();

        assert!(with_drag.range < vacuum.range);
    }

    /// test_simulate_steep_angle_terminates
    /// 0〜90 度の範囲外の発射角（真下への発射など）もエラーにはならず、
    /// 一般の運動方程式で着地まで計算されることを確認します。
    #[test]
    fn test_simulate_steep_angle_terminates() {
        let launch = LaunchParameters {
            v0: 10.0,
            angle_deg: -90.0,
            g: 9.81,
            dt: 0.01,
            y0: 5.0,
        };
        let (samples, stats) =
            simulate(&launch, &default_projectile(), &calm_environment()).unwrap();

        assert_eq!(samples.last().unwrap().y, 0.0);
        assert!((stats.range - 0.0).abs() < 1e-9);
        assert!(stats.impact_speed > 10.0);
    }

    /// test_simulate_ground_level_downward_launch
    /// y0 = 0 から下向きに発射した退行ケースでも、サンプル列は空にならず
    /// 時刻が単調増加のまま即座に着地することを確認します。
    #[test]
    fn test_simulate_ground_level_downward_launch() {
        let launch = LaunchParameters {
            v0: 10.0,
            angle_deg: -45.0,
            g: 9.81,
            dt: 0.01,
            y0: 0.0,
        };
        let (samples, _) = simulate(&launch, &default_projectile(), &calm_environment()).unwrap();

        assert_eq!(samples.len(), 2);
        assert!(samples[1].t > samples[0].t);
        assert_eq!(samples[1].y, 0.0);
    }

    /// test_simulate_divergence_in_strong_updraft
    /// 軽い射出体が強い上昇気流（風向 270 度 = 下から吹き上げる風）に
    /// 乗ると抗力が重力を上回って降下せず、ステップ上限で
    /// Diverged エラーになることを確認します。
    #[test]
    fn test_simulate_divergence_in_strong_updraft() {
        let launch = LaunchParameters {
            v0: 10.0,
            angle_deg: 90.0,
            g: 9.81,
            dt: 0.01,
            y0: 0.0,
        };
        let projectile = ProjectileParameters {
            mass: 0.1,
            radius: 0.05,
            drag_coefficient: 0.47,
        };
        let updraft = EnvironmentParameters {
            air_density: 1.225,
            wind_speed: 50.0,
            wind_angle: 270.0,
            temperature: 20.0,
            altitude: 0.0,
        };

        let result = simulate(&launch, &projectile, &updraft);
        assert_eq!(
            result,
            Err(SimulationError::Diverged {
                max_steps: MAX_STEPS
            })
        );
    }
}
