//! CLI tool to plan a geohazard survey mission from CSV catalogs.

use anyhow::{Context, Result};
use clap::Parser;
use ghz_cli::render_report;
use ghz_core::ranking::{DroneRanker, DEFAULT_JITTER, DEFAULT_TOP_N};
use ghz_core::{DroneCatalog, MissionPlanner, MissionRequest, SensorCatalog};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Recommend sensor and drone combinations for a geohazard survey
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Drone catalog CSV
    #[arg(long, default_value = "data/drones.csv")]
    drones: String,

    /// Sensor catalog CSV
    #[arg(long, default_value = "data/sensors.csv")]
    sensors: String,

    /// Hazard type (Volcano, Earthquake, Fault, Landslide, Tsunami, Nuclear)
    #[arg(long)]
    hazard: String,

    /// Hazard stage (Pre-Event, During, Post-Event, Clean-Up)
    #[arg(long)]
    stage: String,

    /// Distance from base or nearest road in meters
    #[arg(long, default_value_t = 0.0)]
    distance: f64,

    /// Survey area length in meters
    #[arg(long)]
    area_length: Option<f64>,

    /// Survey area width in meters
    #[arg(long)]
    area_width: Option<f64>,

    /// Survey line spacing in meters
    #[arg(long)]
    spacing: Option<f64>,

    /// Plan for this sensor only
    #[arg(long)]
    sensor: Option<String>,

    /// Number of drones per sensor
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Seed for the ranking tie-break
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the ranking tie-break jitter
    #[arg(long)]
    no_jitter: bool,

    /// Print JSON instead of a text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let drones = DroneCatalog::from_path(&args.drones)
        .with_context(|| format!("loading drone catalog {}", args.drones))?;
    let sensors = SensorCatalog::from_path(&args.sensors)
        .with_context(|| format!("loading sensor catalog {}", args.sensors))?;
    tracing::debug!("Loaded {} drones and {} sensors", drones.len(), sensors.len());

    let jitter = if args.no_jitter { 0.0 } else { DEFAULT_JITTER };
    let planner = MissionPlanner::with_ranker(drones, sensors, DroneRanker::new(args.top, jitter));

    let request = MissionRequest {
        distance_to_road: Some(args.distance),
        area_length: args.area_length,
        area_width: args.area_width,
        spacing: args.spacing,
        geohazard_type: args.hazard,
        hazard_stage: args.stage,
        sensor: args.sensor,
        ..Default::default()
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let recommendation = planner.recommend(&request, &mut rng);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        print!("{}", render_report(&recommendation));
    }
    Ok(())
}
