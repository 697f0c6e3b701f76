//! Core logic for geohazard survey planning.
//!
//! Estimates how far a survey flight has to go for a given sensor and ranks
//! a drone catalog by how well each airframe can carry that sensor there.

pub mod catalog;
pub mod error;
pub mod hazard;
pub mod mission;
pub mod planner;
pub mod ranking;
pub mod sensors;

pub use catalog::{DroneCatalog, DroneRecord, SensorCatalog, SensorRecord};
pub use error::CatalogError;
pub use hazard::{recommended_sensors, HazardStage, HazardType, DEFAULT_SENSORS, MAX_SENSORS};
pub use mission::{estimate_mission_distance, MissionEstimate, MissionType, SurveyArea};
pub use planner::{
    Combination, MissionPlanner, MissionRecommendation, MissionRequest, MissionSection,
    SensorMeta,
};
pub use ranking::{DroneCandidate, DroneRanker};
pub use sensors::{Sensor, SensorKind, SensorProfile};

/// Normalize a float that leaves the core: non-finite values become unknown.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
