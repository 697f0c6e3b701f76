//! Hazard/stage context and the static sensor recommendation table.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::sensors::SensorKind;

/// Upper bound on the number of sensors recommended for one context.
pub const MAX_SENSORS: usize = 3;

/// Sensors used when a hazard/stage pair is not in the table.
pub const DEFAULT_SENSORS: &[SensorKind] = &[SensorKind::Camera];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize)]
#[strum(ascii_case_insensitive)]
pub enum HazardType {
    Volcano,
    Earthquake,
    Fault,
    Landslide,
    Tsunami,
    Nuclear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize)]
#[strum(ascii_case_insensitive)]
pub enum HazardStage {
    #[strum(to_string = "Pre-Event", serialize = "pre_event", serialize = "pre event")]
    #[serde(rename = "Pre-Event")]
    PreEvent,
    During,
    #[strum(to_string = "Post-Event", serialize = "post_event", serialize = "post event")]
    #[serde(rename = "Post-Event")]
    PostEvent,
    #[strum(to_string = "Clean-Up", serialize = "clean_up", serialize = "clean up")]
    #[serde(rename = "Clean-Up")]
    CleanUp,
}

/// Parse a raw (hazard, stage) pair. `None` when either side is unknown.
pub fn parse_context(hazard: &str, stage: &str) -> Option<(HazardType, HazardStage)> {
    let hazard = hazard.trim().parse().ok()?;
    let stage = stage.trim().parse().ok()?;
    Some((hazard, stage))
}

/// Ordered sensor recommendation for a hazard/stage pair.
pub fn recommended_sensors(hazard: HazardType, stage: HazardStage) -> Option<&'static [SensorKind]> {
    use HazardStage::*;
    use HazardType::*;
    use SensorKind::{
        Bpr, Camera, GammaSpectrometer, Gpr, Lidar, Magnetometers, Seismic, ThermalCamera,
    };

    let sensors: &'static [SensorKind] = match (hazard, stage) {
        (Volcano, PreEvent) => &[Magnetometers, Seismic, Camera],
        (Volcano, During) => &[ThermalCamera, Camera, Lidar],
        (Volcano, PostEvent) | (Volcano, CleanUp) => &[Lidar, Camera, Seismic],
        (Earthquake, PreEvent) => &[Seismic, Magnetometers, Camera],
        (Earthquake, During) => &[Seismic, Camera, Lidar],
        (Earthquake, PostEvent) => &[Lidar, Camera, Seismic],
        (Fault, PreEvent) => &[Seismic, Magnetometers, Camera],
        (Fault, PostEvent) => &[Seismic, Camera, Lidar],
        (Landslide, PreEvent) => &[Lidar, Gpr, Camera],
        (Landslide, During) => &[Camera, ThermalCamera, Lidar],
        (Landslide, PostEvent) => &[Lidar, Seismic, Camera],
        (Landslide, CleanUp) => &[Camera, Lidar, Seismic],
        (Tsunami, During) => &[Bpr, Camera, Seismic],
        (Tsunami, PostEvent) => &[Bpr, Camera, Lidar],
        (Tsunami, CleanUp) => &[Camera, Lidar, ThermalCamera],
        (Nuclear, PreEvent) | (Nuclear, During) => &[ThermalCamera, Camera, Lidar],
        (Nuclear, PostEvent) | (Nuclear, CleanUp) => &[Camera, Lidar, GammaSpectrometer],
        _ => return None,
    };
    Some(sensors)
}

/// Sensors for a raw pair, falling back to [`DEFAULT_SENSORS`], capped at [`MAX_SENSORS`].
pub fn sensors_for(hazard: &str, stage: &str) -> &'static [SensorKind] {
    let sensors = parse_context(hazard, stage)
        .and_then(|(h, s)| recommended_sensors(h, s))
        .unwrap_or(DEFAULT_SENSORS);
    &sensors[..sensors.len().min(MAX_SENSORS)]
}

/// One row of the recommendation table.
#[derive(Debug, Clone, Serialize)]
pub struct HazardEntry {
    pub hazard: HazardType,
    pub stage: HazardStage,
    pub sensors: &'static [SensorKind],
}

/// Every populated row of the table, in hazard then stage order.
pub fn hazard_table() -> Vec<HazardEntry> {
    HazardType::iter()
        .flat_map(|hazard| {
            HazardStage::iter().filter_map(move |stage| {
                recommended_sensors(hazard, stage).map(|sensors| HazardEntry {
                    hazard,
                    stage,
                    sensors,
                })
            })
        })
        .collect()
}
