//! Mission planning: sensor selection, distance estimation and drone ranking per sensor.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{DroneCatalog, SensorCatalog};
use crate::finite;
use crate::hazard::sensors_for;
use crate::mission::{estimate_mission_distance, MissionType, SurveyArea};
use crate::ranking::{DroneCandidate, DroneRanker};
use crate::sensors::Sensor;

/// Access distances beyond this need a forward base.
pub const LONG_RANGE_ACCESS_M: f64 = 50_000.0;

const STANDARD_LOGISTICS: &str = "Standard deployment possible.";
const LONG_RANGE_LOGISTICS: &str =
    "Long-range access: consider forward base or offshore/remote staging.";

/// A mission planning request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionRequest {
    /// Distance from base or nearest road to the site, meters
    #[serde(default, alias = "radius")]
    pub distance_to_road: Option<f64>,
    #[serde(default)]
    pub area_length: Option<f64>,
    #[serde(default)]
    pub area_width: Option<f64>,
    /// Survey line spacing, meters
    #[serde(default)]
    pub spacing: Option<f64>,
    #[serde(default)]
    pub geohazard_type: String,
    #[serde(default)]
    pub hazard_stage: String,
    /// Bypasses the hazard/stage table when set
    #[serde(default)]
    pub sensor: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl MissionRequest {
    pub fn new(hazard: impl Into<String>, stage: impl Into<String>, distance_to_road: f64) -> Self {
        Self {
            geohazard_type: hazard.into(),
            hazard_stage: stage.into(),
            distance_to_road: Some(distance_to_road),
            ..Default::default()
        }
    }

    pub fn with_sensor(mut self, sensor: impl Into<String>) -> Self {
        self.sensor = Some(sensor.into());
        self
    }

    pub fn with_area(mut self, length_m: f64, width_m: f64, spacing_m: f64) -> Self {
        self.area_length = Some(length_m);
        self.area_width = Some(width_m);
        self.spacing = Some(spacing_m);
        self
    }

    /// Access distance in meters; absent or invalid reads as zero.
    pub fn access_distance_m(&self) -> f64 {
        self.distance_to_road
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(0.0)
    }

    pub fn survey_area(&self) -> SurveyArea {
        SurveyArea {
            length_m: self.area_length,
            width_m: self.area_width,
            spacing_m: self.spacing,
        }
    }

    /// Sensors to plan for: the override, or the hazard/stage recommendation.
    pub fn sensors(&self) -> Vec<Sensor> {
        match self.sensor.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => vec![Sensor::canonical(raw)],
            _ => sensors_for(&self.geohazard_type, &self.hazard_stage)
                .iter()
                .copied()
                .map(Sensor::Known)
                .collect(),
        }
    }
}

/// Catalog details of a sensor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorMeta {
    pub model: Option<String>,
    pub sensor_weight: Option<f64>,
    pub source: Option<String>,
}

/// Planning result for one sensor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionSection {
    pub sensor: Sensor,
    pub mission_type: MissionType,
    pub mission_text: String,
    pub mission_distance_m: Option<f64>,
    /// Absent when the sensor is not in the catalog
    pub sensor_meta: Option<SensorMeta>,
    pub top3_drones: Vec<DroneCandidate>,
}

/// A drone paired with the sensor it would carry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combination {
    pub sensor: Sensor,
    pub mission_distance_m: Option<f64>,
    #[serde(flatten)]
    pub drone: DroneCandidate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionRecommendation {
    pub mission_overview: String,
    pub top3_sensors: Vec<Sensor>,
    pub mission_summary: Vec<MissionSection>,
    /// Every ranked drone across all sensors, in section order
    pub candidates: Vec<Combination>,
    pub best_combo: Option<Combination>,
    pub logistics: String,
}

/// Plans missions against read-only drone and sensor catalogs.
#[derive(Debug, Clone)]
pub struct MissionPlanner {
    drones: DroneCatalog,
    sensors: SensorCatalog,
    ranker: DroneRanker,
}

impl MissionPlanner {
    pub fn new(drones: DroneCatalog, sensors: SensorCatalog) -> Self {
        Self::with_ranker(drones, sensors, DroneRanker::default())
    }

    pub fn with_ranker(drones: DroneCatalog, sensors: SensorCatalog, ranker: DroneRanker) -> Self {
        Self {
            drones,
            sensors,
            ranker,
        }
    }

    pub fn drones(&self) -> &DroneCatalog {
        &self.drones
    }

    pub fn sensors(&self) -> &SensorCatalog {
        &self.sensors
    }

    pub fn ranker(&self) -> &DroneRanker {
        &self.ranker
    }

    /// Recommend sensor/drone combinations for `request`.
    ///
    /// Always produces a result; degraded inputs show up in the text fields.
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        request: &MissionRequest,
        rng: &mut R,
    ) -> MissionRecommendation {
        let access = request.access_distance_m();
        let area = request.survey_area();
        let sensors = request.sensors();

        let sections: Vec<MissionSection> = sensors
            .iter()
            .map(|sensor| self.plan_sensor(sensor, access, &area, &mut *rng))
            .collect();

        let candidates: Vec<Combination> = sections
            .iter()
            .flat_map(|section| {
                section.top3_drones.iter().map(|drone| Combination {
                    sensor: section.sensor.clone(),
                    mission_distance_m: section.mission_distance_m,
                    drone: drone.clone(),
                })
            })
            .collect();

        let best_combo = sections
            .first()
            .and_then(|section| {
                section.top3_drones.first().map(|drone| Combination {
                    sensor: section.sensor.clone(),
                    mission_distance_m: section.mission_distance_m,
                    drone: drone.clone(),
                })
            })
            .or_else(|| candidates.first().cloned());

        MissionRecommendation {
            mission_overview: overview(request, &sensors, access),
            top3_sensors: sensors,
            mission_summary: sections,
            candidates,
            best_combo,
            logistics: logistics(access).to_string(),
        }
    }

    fn plan_sensor<R: Rng + ?Sized>(
        &self,
        sensor: &Sensor,
        access: f64,
        area: &SurveyArea,
        rng: &mut R,
    ) -> MissionSection {
        let estimate = estimate_mission_distance(sensor, Some(access), area);
        let weight = self.sensors.weight_g(sensor);
        let drones = self
            .ranker
            .rank(&self.drones, weight, estimate.distance_m, access, rng);

        tracing::debug!(
            sensor = %sensor,
            mission_type = ?estimate.mission_type,
            distance_m = estimate.distance_m,
            candidates = drones.len(),
            "Planned sensor mission"
        );

        let sensor_meta = self.sensors.get(sensor).map(|record| SensorMeta {
            model: record.model.clone(),
            sensor_weight: record.sensor_weight.and_then(finite),
            source: record.source.clone(),
        });

        MissionSection {
            sensor: sensor.clone(),
            mission_type: estimate.mission_type,
            mission_text: estimate.rationale,
            mission_distance_m: finite(estimate.distance_m),
            sensor_meta,
            top3_drones: drones,
        }
    }
}

fn overview(request: &MissionRequest, sensors: &[Sensor], access: f64) -> String {
    let names: Vec<String> = sensors.iter().map(Sensor::to_string).collect();
    let mut text = format!(
        "Hazard: {} · Stage: {}. Candidate sensors: {}. Access distance (to base/road): {} m.",
        request.geohazard_type,
        request.hazard_stage,
        names.join(", "),
        access.trunc() as i64
    );
    let site = request
        .latitude
        .and_then(finite)
        .zip(request.longitude.and_then(finite));
    if let Some((lat, lon)) = site {
        text.push_str(&format!(" Site: {lat:.5}, {lon:.5}."));
    }
    text
}

/// Staging advice for the given access distance.
pub fn logistics(access_distance_m: f64) -> &'static str {
    if access_distance_m > LONG_RANGE_ACCESS_M {
        LONG_RANGE_LOGISTICS
    } else {
        STANDARD_LOGISTICS
    }
}
