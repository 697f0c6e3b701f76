//! Server configuration from environment.

use ghz_core::ranking::{DEFAULT_JITTER, DEFAULT_TOP_N};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub drone_catalog_path: String,
    pub sensor_catalog_path: String,
    /// Fixed seed for the ranking jitter; random when unset
    pub jitter_seed: Option<u64>,
    /// Half-width of the ranking jitter, 0 disables it
    pub jitter: f64,
    pub top_n: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: parse_var("GHZ_PORT").unwrap_or(3000),
            drone_catalog_path: env::var("GHZ_DRONE_CATALOG")
                .unwrap_or_else(|_| "data/drones.csv".to_string()),
            sensor_catalog_path: env::var("GHZ_SENSOR_CATALOG")
                .unwrap_or_else(|_| "data/sensors.csv".to_string()),
            jitter_seed: parse_var("GHZ_JITTER_SEED"),
            jitter: parse_var("GHZ_JITTER").unwrap_or(DEFAULT_JITTER),
            top_n: parse_var("GHZ_TOP_N").unwrap_or(DEFAULT_TOP_N),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}
