//! Plain-text rendering of a mission recommendation.

use ghz_core::{DroneCandidate, MissionRecommendation, MissionSection};
use std::fmt;

/// Terminal view of a recommendation.
pub struct Report<'a>(pub &'a MissionRecommendation);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rec = self.0;
        writeln!(f, "{}", rec.mission_overview)?;
        writeln!(f)?;

        for section in &rec.mission_summary {
            write_section(f, section)?;
        }

        match &rec.best_combo {
            Some(best) => writeln!(
                f,
                "Best combination: {} on {} ({})",
                best.sensor, best.drone.mfc_model, best.drone.note
            )?,
            None => writeln!(f, "Best combination: none (no drone can carry the sensors)")?,
        }
        writeln!(f, "Logistics: {}", rec.logistics)
    }
}

/// Render a recommendation for a terminal.
pub fn render_report(rec: &MissionRecommendation) -> String {
    Report(rec).to_string()
}

fn write_section(f: &mut fmt::Formatter<'_>, section: &MissionSection) -> fmt::Result {
    writeln!(
        f,
        "== {} ({:?}, {})",
        section.sensor,
        section.mission_type,
        meters(section.mission_distance_m)
    )?;
    writeln!(f, "   {}", section.mission_text)?;

    if section.top3_drones.is_empty() {
        writeln!(f, "   no eligible drones")?;
    }
    for (rank, drone) in section.top3_drones.iter().enumerate() {
        write_drone(f, rank + 1, drone)?;
    }
    writeln!(f)
}

fn write_drone(f: &mut fmt::Formatter<'_>, rank: usize, drone: &DroneCandidate) -> fmt::Result {
    let swaths = drone
        .swaths_needed
        .map(|n| n.to_string())
        .unwrap_or_else(|| "?".to_string());
    let score = drone
        .score
        .map(|s| format!("{s:.2}"))
        .unwrap_or_else(|| "unknown".to_string());
    writeln!(
        f,
        "   {rank}. {:<24} score {:>7}  swaths {:>3}  GCS {:>9}  {}",
        drone.mfc_model,
        score,
        swaths,
        meters(drone.max_gcs_distance_m),
        drone.note
    )
}

fn meters(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{} m", v.trunc() as i64),
        None => "unknown".to_string(),
    }
}
