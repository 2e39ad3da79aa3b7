use crate::defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_models() -> Vec<String> {
    MODELS.iter().map(|name| name.to_string()).collect()
}
fn default_n_points() -> usize {
    N_POINTS
}
fn default_momentum() -> f64 {
    MOMENTUM
}
fn default_n_samples() -> usize {
    N_SAMPLES
}
fn default_n_steps() -> usize {
    N_STEPS
}
fn default_stepsize() -> f64 {
    STEPSIZE
}
fn default_mass() -> f64 {
    MASS
}
fn default_initial_state() -> usize {
    INITIAL_STATE
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Configuration {
    #[serde(default = "default_models")]
    pub models: Vec<String>,
    #[serde(default = "default_n_points")]
    pub n_points: usize,
    #[serde(default = "default_momentum")]
    pub momentum: f64,
    #[serde(default = "default_n_samples")]
    pub n_samples: usize,
    #[serde(default = "default_n_steps")]
    pub n_steps: usize,
    #[serde(default = "default_stepsize")]
    pub stepsize: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    #[serde(default = "default_initial_state")]
    pub initial_state: usize,
}

impl Configuration {
    pub fn new() -> Self {
        // read the scan configuration file, if it does not exist in the
        // directory the program initializes the default settings and writes
        // a configuration file to the directory
        let config_file_path: &Path = Path::new(CONFIG_FILE_NAME);
        let mut config_string: String = if config_file_path.exists() {
            fs::read_to_string(config_file_path).expect("Unable to read config file")
        } else {
            String::from("")
        };
        // load the configration settings
        let config: Self = toml::from_str(&config_string).unwrap();
        // save the configuration file if it does not exist already
        if config_file_path.exists() == false {
            config_string = toml::to_string(&config).unwrap();
            fs::write(config_file_path, config_string).expect("Unable to write config file");
        }
        return config;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_falls_back_to_defaults() {
        let config: Configuration = toml::from_str("").unwrap();
        assert_eq!(config.n_points, N_POINTS);
        assert_eq!(config.models.len(), 6);
        assert_eq!(config.models[0], "SAC");
        assert_eq!(config.n_samples, N_SAMPLES);
    }

    #[test]
    fn partial_input_overrides_only_named_fields() {
        let config: Configuration =
            toml::from_str("n_points = 250\nmodels = [\"ECR\"]").unwrap();
        assert_eq!(config.n_points, 250);
        assert_eq!(config.models, vec![String::from("ECR")]);
        assert_eq!(config.momentum, MOMENTUM);
    }

    #[test]
    fn configuration_round_trips_through_toml() {
        let config: Configuration = toml::from_str("").unwrap();
        let serialized: String = toml::to_string(&config).unwrap();
        let reparsed: Configuration = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.n_points, config.n_points);
        assert_eq!(reparsed.mass, config.mass);
    }
}
