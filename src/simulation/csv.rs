// src/simulation/csv.rs

use std::error::Error;
use std::fs::{create_dir_all, File};
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use crate::simulation::TrajectorySample;

/// CSV出力の設定とヘッダーの書き込み
pub fn setup_csv_output(path: &str) -> Result<Box<dyn Write>, Box<dyn Error>> {
    if let Some(parent) = Path::new(path).parent() {
        create_dir_all(parent)?;
    }
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_csv_header(&mut writer)?;
    Ok(Box::new(writer))
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(b"time(s),x(m),y(m),vx(m/s),vy(m/s),speed(m/s)\n")?;
    Ok(())
}

/// CSV行の作成
pub fn create_csv_row(sample: &TrajectorySample) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        sample.t, sample.x, sample.y, sample.vx, sample.vy, sample.speed
    )
}
