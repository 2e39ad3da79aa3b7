// config file
pub const CONFIG_FILE_NAME: &str = "nac.toml";
// number of coordinate samples per scan
pub const N_POINTS: usize = 100;
// models scanned when no model is given on the command line
pub const MODELS: [&str; 6] = ["SAC", "DAC", "ECR", "DBG", "DAG", "DRN"];
// mean momentum k of the initial wavepacket (a.u.)
pub const MOMENTUM: f64 = 20.0;
// number of sampled initial conditions, 0 disables sampling
pub const N_SAMPLES: usize = 0;
// number of classical propagation steps, 0 disables propagation
pub const N_STEPS: usize = 0;
// propagation time step (a.u.)
pub const STEPSIZE: f64 = 10.0;
// nuclear mass for classical propagation (a.u.)
pub const MASS: f64 = 2000.0;
// occupied adiabatic surface for classical propagation
pub const INITIAL_STATE: usize = 0;
// energy gap below which the coupling denominator is numerically degenerate
pub const DEGENERACY_THRESHOLD: f64 = 1.0e-12;
