//! Shared application state: the planner and the jitter source.

use ghz_core::{MissionPlanner, MissionRecommendation, MissionRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;

/// Read-only planner plus the one mutable piece, the ranking RNG.
pub struct AppState {
    planner: MissionPlanner,
    rng: Mutex<StdRng>,
}

impl AppState {
    pub fn new(planner: MissionPlanner, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            planner,
            rng: Mutex::new(rng),
        }
    }

    pub fn planner(&self) -> &MissionPlanner {
        &self.planner
    }

    /// Plan a mission. A poisoned lock still yields a usable RNG.
    pub fn recommend(&self, request: &MissionRequest) -> MissionRecommendation {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.planner.recommend(request, &mut *rng)
    }
}
