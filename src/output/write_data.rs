use crate::dynamics::trajectory::PhasePoint;
use crate::scan::ScanRecord;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Clone)]
pub struct Scan_Summary {
    pub model: String,
    pub left: f64,
    pub right: f64,
    pub n_points: usize,
}

impl Scan_Summary {
    pub fn new(model: &str, left: f64, right: f64, n_points: usize) -> Scan_Summary {
        Scan_Summary {
            model: model.to_string(),
            left: left,
            right: right,
            n_points: n_points,
        }
    }
}

/// Write one `x e0 e1 nac01` line per scan record to `<name>.txt` in
/// scientific notation, the format the plotting scripts expect.
pub fn write_scan(name: &str, records: &[ScanRecord]) {
    let mut string: String = records
        .iter()
        .map(|record| {
            format!(
                "{:.5e} {:.5e} {:.5e} {:.5e}",
                record.x, record.e0, record.e1, record.nac01
            )
        })
        .join("\n");
    string.push_str("\n");

    let path: String = format!("{}.txt", name);
    fs::write(Path::new(&path), string).expect("Unable to write scan data file");
}

pub fn write_summary(summary: &Scan_Summary) {
    let path: String = format!("{}_scan.yaml", summary.model);
    let string: String = serde_yaml::to_string(summary).unwrap();
    fs::write(Path::new(&path), string).expect("Unable to write scan summary file");
}

/// Write phase-space points (sampled initial conditions or a propagated
/// trajectory) as `x p` lines.
pub fn write_phase_points(name: &str, points: &[PhasePoint]) {
    let mut string: String = points
        .iter()
        .map(|point| format!("{:.5e} {:.5e}", point.x, point.p))
        .join("\n");
    string.push_str("\n");

    let path: String = format!("{}.dat", name);
    fs::write(Path::new(&path), string).expect("Unable to write phase point file");
}
