//! Mission distance estimation.
//!
//! Turns a sensor, the access distance and an optional survey area into
//! the length of the flight the mission needs. Every missing or invalid
//! input falls through to the next rule; estimation never fails.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::sensors::{PathHeuristic, Sensor};

/// Path length used when nothing better is known.
pub const FALLBACK_DISTANCE_M: f64 = 1_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionType {
    /// Point-to-point flight to place a sensor on site
    Delivery,
    /// Area coverage with parallel survey lines
    Mapping,
}

/// Caller-supplied survey area. All three values must be positive to be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyArea {
    pub length_m: Option<f64>,
    pub width_m: Option<f64>,
    pub spacing_m: Option<f64>,
}

impl SurveyArea {
    pub fn new(length_m: f64, width_m: f64, spacing_m: f64) -> Self {
        Self {
            length_m: Some(length_m),
            width_m: Some(width_m),
            spacing_m: Some(spacing_m),
        }
    }

    /// (length, width, spacing) when every value is finite and positive.
    pub fn complete(&self) -> Option<(f64, f64, f64)> {
        let positive = |v: Option<f64>| v.filter(|v| v.is_finite() && *v > 0.0);
        Some((
            positive(self.length_m)?,
            positive(self.width_m)?,
            positive(self.spacing_m)?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionEstimate {
    pub distance_m: f64,
    pub mission_type: MissionType,
    /// User-facing explanation of how the distance was derived
    pub rationale: String,
}

/// Length of a lawnmower pattern: one `length_m` line per `spacing_m` of width.
pub fn survey_line_distance(length_m: f64, width_m: f64, spacing_m: f64) -> f64 {
    (width_m / spacing_m).ceil() * length_m
}

/// Estimate the flight distance for `sensor`.
///
/// Rules, first match wins: direct delivery, explicit area, the sensor's
/// default footprint, the sensor's closed-form heuristic, access distance.
pub fn estimate_mission_distance(
    sensor: &Sensor,
    access_distance_m: Option<f64>,
    area: &SurveyArea,
) -> MissionEstimate {
    let access = access_distance_m
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0);
    let profile = sensor.profile();

    if sensor.is_direct_delivery() {
        return MissionEstimate {
            distance_m: access,
            mission_type: MissionType::Delivery,
            rationale: format!(
                "{sensor} mission is classified as Delivery. Max effective distance from GCS \
                 equals the platform communication range; travel distance fallback uses \
                 distance_to_road input ({} m).",
                whole_m(access)
            ),
        };
    }

    if let Some((length, width, spacing)) = area.complete() {
        let distance_m = survey_line_distance(length, width, spacing);
        return mapping(
            distance_m,
            format!(
                "{sensor} mission is classified as Mapping. Flight path derived from area and \
                 line spacing ({}×{} m @ {} m) totals ≈{} m.",
                whole_m(length),
                whole_m(width),
                whole_m(spacing),
                whole_m(distance_m)
            ),
        );
    }

    if let Some(profile) = profile {
        if let Some((length, width)) = profile.footprint_m {
            let spacing = profile.effective_spacing_m();
            let distance_m = survey_line_distance(length, width, spacing);
            return mapping(
                distance_m,
                format!(
                    "{sensor} mission is classified as Mapping. Default area {}×{} m with {} m \
                     spacing gives ≈{} m flight path.",
                    whole_m(length),
                    whole_m(width),
                    whole_m(spacing),
                    whole_m(distance_m)
                ),
            );
        }

        match profile.heuristic {
            Some(PathHeuristic::FixedPath { distance_m }) => {
                return mapping(
                    distance_m,
                    format!(
                        "{sensor} mission is classified as Mapping. Default line survey \
                         heuristic gives ≈{} m flight path.",
                        whole_m(distance_m)
                    ),
                );
            }
            Some(PathHeuristic::Perimeter { min_radius_m }) => {
                let radius = access.max(min_radius_m);
                let distance_m = PI * radius;
                return mapping(
                    distance_m,
                    format!(
                        "{sensor} mission is classified as Mapping. Perimeter heuristic π·R \
                         with R≈{} m gives ≈{} m.",
                        whole_m(radius),
                        whole_m(distance_m)
                    ),
                );
            }
            None => {}
        }
    }

    let distance_m = if access > 0.0 { access } else { FALLBACK_DISTANCE_M };
    mapping(
        distance_m,
        format!(
            "{sensor} mission is classified as Mapping. Fallback path uses access distance \
             ≈{} m.",
            whole_m(distance_m)
        ),
    )
}

fn mapping(distance_m: f64, rationale: String) -> MissionEstimate {
    MissionEstimate {
        distance_m,
        mission_type: MissionType::Mapping,
        rationale,
    }
}

/// Meters as shown to operators: truncated to a whole number.
fn whole_m(value: f64) -> i64 {
    value.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::SensorKind;

    fn sensor(kind: SensorKind) -> Sensor {
        Sensor::Known(kind)
    }

    #[test]
    fn test_gpr_is_delivery() {
        let est = estimate_mission_distance(&sensor(SensorKind::Gpr), Some(1_200.0), &SurveyArea::default());
        assert_eq!(est.distance_m, 1_200.0);
        assert_eq!(est.mission_type, MissionType::Delivery);
        assert!(est.rationale.contains("GPR mission is classified as Delivery"));
        assert!(est.rationale.contains("(1200 m)"));
    }

    #[test]
    fn test_delivery_ignores_area() {
        let area = SurveyArea::new(1_000.0, 500.0, 10.0);
        for kind in [SensorKind::Seismic, SensorKind::Gpr, SensorKind::Bpr] {
            let est = estimate_mission_distance(&sensor(kind), Some(750.0), &area);
            assert_eq!(est.mission_type, MissionType::Delivery);
            assert_eq!(est.distance_m, 750.0);

            let est = estimate_mission_distance(&sensor(kind), None, &area);
            assert_eq!(est.distance_m, 0.0);
        }
    }

    #[test]
    fn test_explicit_area_line_count() {
        let cases = [
            (1_000.0, 500.0, 10.0, 50_000.0),
            (250.0, 95.0, 10.0, 2_500.0),
            (120.0, 1.0, 7.5, 120.0),
            (333.0, 100.0, 30.0, 1_332.0),
        ];
        for (length, width, spacing, expected) in cases {
            let est = estimate_mission_distance(
                &sensor(SensorKind::Camera),
                Some(100.0),
                &SurveyArea::new(length, width, spacing),
            );
            assert_eq!(est.mission_type, MissionType::Mapping);
            assert_eq!(est.distance_m, expected);
            assert_eq!(est.distance_m, (width / spacing).ceil() * length);
        }
    }

    #[test]
    fn test_explicit_area_rationale() {
        let est = estimate_mission_distance(
            &sensor(SensorKind::Multispectral),
            None,
            &SurveyArea::new(800.0, 210.0, 20.0),
        );
        assert_eq!(
            est.rationale,
            "Multispectral mission is classified as Mapping. Flight path derived from area and \
             line spacing (800×210 m @ 20 m) totals ≈8800 m."
        );
    }

    #[test]
    fn test_lidar_perimeter_heuristic() {
        let est = estimate_mission_distance(&sensor(SensorKind::Lidar), Some(0.0), &SurveyArea::default());
        assert_eq!(est.mission_type, MissionType::Mapping);
        assert!((est.distance_m - PI * 1_000.0).abs() < 1e-9);
        assert!(est.rationale.contains("R≈1000 m"));
        assert!(est.rationale.contains("≈3141 m"));

        let est = estimate_mission_distance(&sensor(SensorKind::Lidar), Some(2_500.0), &SurveyArea::default());
        assert!((est.distance_m - PI * 2_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_magnetometer_line_survey() {
        let est = estimate_mission_distance(
            &sensor(SensorKind::Magnetometers),
            Some(3_000.0),
            &SurveyArea::default(),
        );
        assert_eq!(est.distance_m, 20_000.0);
        assert_eq!(est.mission_type, MissionType::Mapping);
        assert_eq!(
            est.rationale,
            "Magnetometers mission is classified as Mapping. Default line survey heuristic \
             gives ≈20000 m flight path."
        );

        // An explicit area still wins over the fixed path.
        let est = estimate_mission_distance(
            &sensor(SensorKind::Magnetometers),
            None,
            &SurveyArea::new(400.0, 100.0, 10.0),
        );
        assert_eq!(est.distance_m, 4_000.0);
    }

    #[test]
    fn test_camera_default_footprint() {
        let est = estimate_mission_distance(&sensor(SensorKind::Camera), Some(0.0), &SurveyArea::default());
        assert_eq!(est.distance_m, 4_500.0);
        assert_eq!(est.mission_type, MissionType::Mapping);
        assert_eq!(
            est.rationale,
            "Camera mission is classified as Mapping. Default area 300×300 m with 20 m spacing \
             gives ≈4500 m flight path."
        );
    }

    #[test]
    fn test_incomplete_area_uses_defaults() {
        let area = SurveyArea {
            length_m: Some(1_000.0),
            width_m: Some(400.0),
            spacing_m: Some(0.0),
        };
        let est = estimate_mission_distance(&sensor(SensorKind::Gravimeter), None, &area);
        // 500 x 500 at 10 m
        assert_eq!(est.distance_m, 25_000.0);

        let area = SurveyArea {
            length_m: Some(f64::NAN),
            ..SurveyArea::new(1.0, 1.0, 1.0)
        };
        assert!(area.complete().is_none());
    }

    #[test]
    fn test_unknown_sensor_fallback() {
        let sonar = Sensor::canonical("Sonar");
        let est = estimate_mission_distance(&sonar, Some(4_200.0), &SurveyArea::default());
        assert_eq!(est.distance_m, 4_200.0);
        assert_eq!(est.mission_type, MissionType::Mapping);

        let est = estimate_mission_distance(&sonar, None, &SurveyArea::default());
        assert_eq!(est.distance_m, FALLBACK_DISTANCE_M);
        assert!(est.rationale.starts_with("Sonar mission is classified as Mapping"));
    }
}
