//! Drone ranking.
//!
//! Drones that cannot lift the payload are dropped, the rest are scored
//! (lower is better) on communication range, distance coverage and payload
//! fit. A small random jitter breaks ties; the caller owns the random
//! source so rankings can be reproduced with a seeded generator.

use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::{DroneCatalog, DroneRecord};
use crate::finite;

pub const DEFAULT_TOP_N: usize = 3;
pub const DEFAULT_JITTER: f64 = 0.15;
/// Largest accepted jitter half-width; the sampled range must stay finite.
pub const MAX_JITTER: f64 = 1e6;

const BASE_SCORE: f64 = 100.0;
const COMM_SHORT_PENALTY: f64 = 30.0;
const COMM_OK_REWARD: f64 = 5.0;
const DISTANCE_UNKNOWN_PENALTY: f64 = 10.0;
const PAYLOAD_DIFF_WEIGHT: f64 = 0.01;
const PAYLOAD_PENALTY_CAP: f64 = 10.0;

/// Coverage bands: (minimum range / mission ratio, score delta, note).
const COVERAGE_BANDS: [(f64, f64, &str); 4] = [
    (1.0, -10.0, "Full coverage"),
    (0.75, 2.0, "Near full coverage"),
    (0.5, 5.0, "2–3 swaths needed"),
    (0.25, 15.0, "Multiple passes"),
];
const LIMITED_RANGE: (f64, &str) = (25.0, "Very limited range");

/// A ranked drone, ready to leave the core.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroneCandidate {
    pub mfc_model: String,
    pub manufacturer: Option<String>,
    pub configuration_harmonized: Option<String>,
    pub comm_range: Option<f64>,
    pub distance_range: Option<f64>,
    pub max_payload_weight: Option<f64>,
    pub flight_time: Option<f64>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub source: Option<String>,
    /// Passes needed to cover the mission distance, unknown without a distance range
    pub swaths_needed: Option<u32>,
    pub note: String,
    pub score: Option<f64>,
    /// Farthest the ground control station can be, i.e. the comm range
    pub max_gcs_distance_m: Option<f64>,
}

#[derive(Debug, Clone)]
struct Scored<'a> {
    drone: &'a DroneRecord,
    score: f64,
    note: String,
    swaths_needed: Option<u32>,
}

/// Scores and selects drones for one sensor/mission pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneRanker {
    /// Maximum number of candidates returned
    pub top_n: usize,
    /// Half-width of the uniform tie-break jitter; zero disables it
    pub jitter: f64,
}

impl Default for DroneRanker {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N, DEFAULT_JITTER)
    }
}

impl DroneRanker {
    pub fn new(top_n: usize, jitter: f64) -> Self {
        Self {
            top_n,
            jitter: clamp_jitter(jitter),
        }
    }

    /// Ranker without tie-break jitter: identical inputs give identical output.
    pub fn deterministic(top_n: usize) -> Self {
        Self::new(top_n, 0.0)
    }

    /// Rank `catalog` for a sensor of `required_payload_g` flown over `mission_distance_m`.
    ///
    /// Returns at most `top_n` candidates, best first, unique by model id.
    /// Empty when no drone can carry the payload.
    pub fn rank<R: Rng + ?Sized>(
        &self,
        catalog: &DroneCatalog,
        required_payload_g: f64,
        mission_distance_m: f64,
        access_distance_m: f64,
        rng: &mut R,
    ) -> Vec<DroneCandidate> {
        let required = or_zero(required_payload_g);
        let mission = or_zero(mission_distance_m);
        let access = or_zero(access_distance_m);

        let mut scored: Vec<Scored<'_>> = catalog
            .iter()
            .filter(|drone| payload_capacity(drone) >= required)
            .map(|drone| {
                let mut s = score_drone(drone, required, mission, access);
                s.score += self.sample_jitter(&mut *rng);
                s
            })
            .collect();

        scored.sort_by(|a, b| a.score.total_cmp(&b.score));

        let mut seen = HashSet::new();
        let candidates: Vec<DroneCandidate> = scored
            .into_iter()
            .filter(|s| seen.insert(s.drone.mfc_model.as_str()))
            .take(self.top_n)
            .map(Scored::into_candidate)
            .collect();

        tracing::debug!(
            required_payload_g = required,
            mission_distance_m = mission,
            candidates = candidates.len(),
            "Ranked drone catalog"
        );
        candidates
    }

    fn sample_jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // `jitter` is public, so clamp again at the point of use.
        let half_width = clamp_jitter(self.jitter);
        if half_width > 0.0 {
            rng.random_range(-half_width..=half_width)
        } else {
            0.0
        }
    }
}

fn clamp_jitter(jitter: f64) -> f64 {
    if jitter.is_finite() {
        jitter.abs().min(MAX_JITTER)
    } else {
        0.0
    }
}

fn score_drone<'a>(drone: &'a DroneRecord, required: f64, mission: f64, access: f64) -> Scored<'a> {
    let mut score = BASE_SCORE;
    let mut notes = Vec::with_capacity(2);

    // Unknown comm range counts as adequate.
    match drone.comm_range.filter(|v| v.is_finite()) {
        Some(comm) if comm < access => {
            score += COMM_SHORT_PENALTY;
            notes.push("Comm range insufficient");
        }
        _ => {
            score -= COMM_OK_REWARD;
            notes.push("Comm OK");
        }
    }

    let swaths_needed = match drone.distance_range.filter(|v| v.is_finite()) {
        None => {
            score += DISTANCE_UNKNOWN_PENALTY;
            notes.push("Distance unknown");
            None
        }
        Some(range) => {
            let (delta, note) = coverage(range, mission);
            score += delta;
            notes.push(note);
            Some(swaths_needed(range, mission))
        }
    };

    let payload_diff = (payload_capacity(drone) - required).abs();
    score += (payload_diff * PAYLOAD_DIFF_WEIGHT).min(PAYLOAD_PENALTY_CAP);

    Scored {
        drone,
        score,
        note: notes.join(" · "),
        swaths_needed,
    }
}

fn coverage(range: f64, mission: f64) -> (f64, &'static str) {
    COVERAGE_BANDS
        .iter()
        .find(|(ratio, _, _)| range >= ratio * mission)
        .map(|&(_, delta, note)| (delta, note))
        .unwrap_or(LIMITED_RANGE)
}

/// Passes of `range` meters needed to fly `mission` meters.
pub fn swaths_needed(range: f64, mission: f64) -> u32 {
    if mission <= 0.0 {
        return 1;
    }
    // Float to int casts saturate.
    ((mission / range.max(1.0)).ceil() as u32).max(1)
}

fn payload_capacity(drone: &DroneRecord) -> f64 {
    or_zero(drone.max_payload_weight)
}

fn or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl Scored<'_> {
    fn into_candidate(self) -> DroneCandidate {
        let d = self.drone;
        DroneCandidate {
            mfc_model: d.mfc_model.clone(),
            manufacturer: d.manufacturer.clone(),
            configuration_harmonized: d.configuration_harmonized.clone(),
            comm_range: d.comm_range.and_then(finite),
            distance_range: d.distance_range.and_then(finite),
            max_payload_weight: finite(d.max_payload_weight),
            flight_time: d.flight_time.and_then(finite),
            price: d.price.and_then(finite),
            image: d.image.clone(),
            source: d.source.clone(),
            swaths_needed: self.swaths_needed,
            note: self.note,
            score: finite(self.score),
            max_gcs_distance_m: d.comm_range.and_then(finite),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn drone(model: &str, payload: f64, comm: Option<f64>, range: Option<f64>) -> DroneRecord {
        DroneRecord::new(model, payload).with_ranges(comm, range)
    }

    fn models(candidates: &[DroneCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.mfc_model.as_str()).collect()
    }

    #[test]
    fn test_payload_filter_excludes_underpowered() {
        let catalog = DroneCatalog::new(vec![drone("Mini", 50.0, None, None)]);
        let mut rng = StdRng::seed_from_u64(7);
        let ranked = DroneRanker::default().rank(&catalog, 100.0, 1_000.0, 500.0, &mut rng);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_payload_equal_to_requirement_is_eligible() {
        let catalog = DroneCatalog::new(vec![drone("Exact", 100.0, None, None)]);
        let ranked = DroneRanker::deterministic(3).rank(&catalog, 100.0, 0.0, 0.0, &mut rand::rng());
        assert_eq!(models(&ranked), vec!["Exact"]);
    }

    #[test]
    fn test_scoring_components() {
        let catalog = DroneCatalog::new(vec![drone("M300", 2_700.0, Some(15_000.0), Some(8_000.0))]);
        let ranked = DroneRanker::deterministic(3).rank(&catalog, 850.0, 4_500.0, 1_200.0, &mut rand::rng());
        let top = &ranked[0];
        // 100 - 5 (comm) - 10 (full coverage) + 10 (payload cap)
        assert_eq!(top.score, Some(95.0));
        assert_eq!(top.note, "Comm OK · Full coverage");
        assert_eq!(top.swaths_needed, Some(1));
        assert_eq!(top.max_gcs_distance_m, Some(15_000.0));
    }

    #[test]
    fn test_coverage_bands() {
        let cases = [
            (1_000.0, "Full coverage", 1),
            (800.0, "Near full coverage", 2),
            (600.0, "2–3 swaths needed", 2),
            (300.0, "Multiple passes", 4),
            (100.0, "Very limited range", 10),
        ];
        for (range, note, swaths) in cases {
            let catalog = DroneCatalog::new(vec![drone("D", 500.0, None, Some(range))]);
            let ranked = DroneRanker::deterministic(1).rank(&catalog, 500.0, 1_000.0, 0.0, &mut rand::rng());
            assert_eq!(ranked[0].note, format!("Comm OK · {note}"));
            assert_eq!(ranked[0].swaths_needed, Some(swaths));
        }
    }

    #[test]
    fn test_unknown_distance_and_short_comm() {
        let catalog = DroneCatalog::new(vec![drone("Far", 500.0, Some(1_000.0), None)]);
        let ranked = DroneRanker::deterministic(1).rank(&catalog, 500.0, 1_000.0, 5_000.0, &mut rand::rng());
        assert_eq!(ranked[0].note, "Comm range insufficient · Distance unknown");
        assert_eq!(ranked[0].swaths_needed, None);
        assert_eq!(ranked[0].score, Some(140.0));
    }

    #[test]
    fn test_swaths_needed() {
        assert_eq!(swaths_needed(1_000.0, 0.0), 1);
        assert_eq!(swaths_needed(1_000.0, 2_500.0), 3);
        assert_eq!(swaths_needed(0.0, 10.0), 10);
        assert_eq!(swaths_needed(5_000.0, 10.0), 1);
    }

    #[test]
    fn test_ordering_and_dedup() {
        let catalog = DroneCatalog::new(vec![
            drone("Short", 1_000.0, Some(500.0), Some(100.0)),
            drone("Best", 1_000.0, Some(20_000.0), Some(20_000.0)),
            drone("Best", 1_000.0, Some(20_000.0), Some(20_000.0)),
            drone("Mid", 1_000.0, Some(20_000.0), Some(3_000.0)),
            drone("Unknown", 1_000.0, None, None),
        ]);
        let ranked = DroneRanker::deterministic(3).rank(&catalog, 1_000.0, 4_000.0, 2_000.0, &mut rand::rng());
        assert_eq!(models(&ranked), vec!["Best", "Mid", "Unknown"]);
    }

    #[test]
    fn test_top_n_bounds() {
        let catalog = DroneCatalog::new(
            (0..10)
                .map(|i| drone(&format!("D{i}"), 100.0 * i as f64, None, Some(1_000.0)))
                .collect(),
        );
        let mut rng = StdRng::seed_from_u64(1);
        let ranked = DroneRanker::default().rank(&catalog, 450.0, 1_000.0, 0.0, &mut rng);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|c| c.max_payload_weight.unwrap() >= 450.0));

        let ranked = DroneRanker::new(8, 0.15).rank(&catalog, 750.0, 1_000.0, 0.0, &mut rng);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let catalog = DroneCatalog::new(
            (0..6)
                .map(|i| drone(&format!("Twin{i}"), 1_000.0, Some(5_000.0), Some(5_000.0)))
                .collect(),
        );
        let ranker = DroneRanker::new(6, DEFAULT_JITTER);
        let first = ranker.rank(&catalog, 1_000.0, 2_000.0, 100.0, &mut StdRng::seed_from_u64(42));
        let second = ranker.rank(&catalog, 1_000.0, 2_000.0, 100.0, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
        for c in &first {
            let score = c.score.unwrap();
            assert!((score - 85.0).abs() <= DEFAULT_JITTER);
        }
    }

    #[test]
    fn test_huge_jitter_is_clamped() {
        let catalog = DroneCatalog::new(vec![
            drone("A", 1_000.0, Some(5_000.0), Some(5_000.0)),
            drone("B", 1_000.0, None, None),
        ]);
        let ranker = DroneRanker::new(3, 1e308);
        assert_eq!(ranker.jitter, MAX_JITTER);

        let ranked = ranker.rank(&catalog, 500.0, 2_000.0, 100.0, &mut StdRng::seed_from_u64(3));
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|c| c.score.is_some_and(f64::is_finite)));

        // Setting the field directly bypasses `new` and must not panic either.
        let raw = DroneRanker { top_n: 3, jitter: f64::MAX };
        let ranked = raw.rank(&catalog, 500.0, 2_000.0, 100.0, &mut StdRng::seed_from_u64(3));
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_non_finite_jitter_disables_it() {
        assert_eq!(DroneRanker::new(3, f64::NAN).jitter, 0.0);
        assert_eq!(DroneRanker::new(3, f64::INFINITY).jitter, 0.0);
        assert_eq!(DroneRanker::new(3, -0.2).jitter, 0.2);
    }
}
