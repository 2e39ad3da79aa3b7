use clap::{App, Arg};
use env_logger::Builder;
use log::info;
use log::LevelFilter;
use rusty_nac::dynamics::trajectory::{PhasePoint, SurfaceTrajectory};
use rusty_nac::initialization::io::Configuration;
use rusty_nac::initialization::sampling::WavepacketSampler;
use rusty_nac::models::{ModelKind, PotentialModel};
use rusty_nac::output::{write_phase_points, write_scan, write_summary, Scan_Summary};
use rusty_nac::scan::{scan_model, ScanRecord};
use std::io::Write;
#[macro_use]
extern crate clap;

fn main() {
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .about("adiabatic potential-energy-surface and coupling scans for nonadiabatic dynamics")
        .arg(
            Arg::new("model")
                .about("Scan only the named model (SAC, DAC, ECR, DBG, DAG or DRN)")
                .required(false)
                .index(1),
        )
        .get_matches();

    let log_level: LevelFilter = match 0 {
        2 => LevelFilter::Trace,
        1 => LevelFilter::Debug,
        0 => LevelFilter::Info,
        -1 => LevelFilter::Warn,
        -2 => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    Builder::new()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter(None, log_level)
        .init();

    // load the configuration, writing the defaults back to the directory if
    // no file exists yet so that the user can see all the used options
    let config: Configuration = Configuration::new();

    let model_names: Vec<String> = match matches.value_of("model") {
        Some(name) => vec![name.to_string()],
        None => config.models.clone(),
    };

    for name in model_names.iter() {
        let kind: ModelKind = ModelKind::from_name(name).expect("unknown model name");
        let model = kind.build();

        let records: Vec<ScanRecord> =
            scan_model(model.as_ref(), config.n_points).expect("coordinate scan failed");
        write_scan(kind.name(), &records);
        write_summary(&Scan_Summary::new(
            kind.name(),
            model.left(),
            model.right(),
            config.n_points,
        ));
        info!("{}: wrote {} scan records", kind.name(), records.len());

        if config.n_samples > 0 {
            let sampler = WavepacketSampler::new(model.as_ref(), config.momentum);
            let points: Vec<PhasePoint> = sampler.sample(config.n_samples);
            write_phase_points(&format!("{}_initial_conditions", kind.name()), &points);
            info!("{}: sampled {} initial conditions", kind.name(), points.len());
        }

        if config.n_steps > 0 {
            let mut trajectory =
                SurfaceTrajectory::new(model.as_ref(), config.initial_state, config.mass);
            let start = PhasePoint {
                x: model.x0(),
                p: config.momentum,
            };
            let path: Vec<PhasePoint> =
                trajectory.propagate(start, config.stepsize, config.n_steps);
            write_phase_points(&format!("{}_trajectory", kind.name()), &path);
            info!("{}: propagated {} steps", kind.name(), config.n_steps);
        }
    }
}
