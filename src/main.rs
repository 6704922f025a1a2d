// src/main.rs

use std::error::Error;
use std::io::Write;

use models::scoring::evaluate_hit;
use simulation::csv::*;
use simulation::framework::simulate;
use simulation::load_parameters::*;
use simulation::SimulationOutput;

mod config;
mod math;
mod models;
mod simulation;

fn main() -> Result<(), Box<dyn Error>> {
    // 設定とシナリオの読み込み
    let projectile_params = load_projectile_parameters("config/projectile_parameters.yaml")?;
    let environment_params = load_environment_parameters("config/environment_parameters.yaml")?;
    let scenario = load_scenario("config/scenario.yaml")?;

    // 弾道シミュレーションの実行
    let (samples, stats) = simulate(&scenario.launch, &projectile_params, &environment_params)?;

    // ターゲットが指定されていれば着弾点を採点
    let scoring = match &scenario.target {
        Some(target) => Some(evaluate_hit(stats.range, target)?),
        None => None,
    };

    let output = SimulationOutput {
        samples,
        stats,
        scoring,
    };

    // 弾道のCSV出力
    let mut writer: Box<dyn Write> = setup_csv_output("output/trajectory.csv")?;
    for sample in &output.samples {
        writer.write_all(create_csv_row(sample).as_bytes())?;
    }

    // 統計量と採点結果のサマリ出力
    println!("{}", serde_yaml::to_string(&output.stats)?);
    if let Some(scoring) = &output.scoring {
        println!("{}", serde_yaml::to_string(scoring)?);
    }

    Ok(())
}
