//! Survey sensors and their per-kind flight profiles.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Line spacing used when a mapping sensor does not declare its own.
pub const DEFAULT_LINE_SPACING_M: f64 = 10.0;

/// Sensors with a known flight profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum SensorKind {
    #[strum(to_string = "LiDAR")]
    #[serde(rename = "LiDAR")]
    Lidar,
    #[strum(to_string = "Thermal Camera")]
    #[serde(rename = "Thermal Camera")]
    ThermalCamera,
    #[strum(to_string = "Gamma Spectrometer")]
    #[serde(rename = "Gamma Spectrometer")]
    GammaSpectrometer,
    Magnetometers,
    #[strum(to_string = "GPR")]
    #[serde(rename = "GPR")]
    Gpr,
    #[strum(to_string = "BPR")]
    #[serde(rename = "BPR")]
    Bpr,
    Camera,
    Seismic,
    Multispectral,
    Hyperspectral,
    #[strum(to_string = "EM")]
    #[serde(rename = "EM")]
    Em,
    Gravimeter,
}

/// Closed-form path estimate for a sensor with no default footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathHeuristic {
    /// Fixed line-survey length.
    FixedPath { distance_m: f64 },
    /// Circle around the site: π × max(access distance, `min_radius_m`).
    Perimeter { min_radius_m: f64 },
}

/// How a sensor is flown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorProfile {
    /// Point-to-point mission: the drone only carries the sensor to the site.
    pub direct_delivery: bool,
    /// Default survey footprint (length, width) in meters.
    pub footprint_m: Option<(f64, f64)>,
    /// Default spacing between survey lines in meters.
    pub line_spacing_m: Option<f64>,
    pub heuristic: Option<PathHeuristic>,
}

impl SensorProfile {
    const fn delivery() -> Self {
        Self {
            direct_delivery: true,
            footprint_m: None,
            line_spacing_m: None,
            heuristic: None,
        }
    }

    const fn mapping(length_m: f64, width_m: f64, spacing_m: f64) -> Self {
        Self {
            direct_delivery: false,
            footprint_m: Some((length_m, width_m)),
            line_spacing_m: Some(spacing_m),
            heuristic: None,
        }
    }

    /// Spacing to use with the default footprint.
    pub fn effective_spacing_m(&self) -> f64 {
        self.line_spacing_m.unwrap_or(DEFAULT_LINE_SPACING_M)
    }
}

impl SensorKind {
    /// Resolve a raw sensor identifier through the synonym table.
    pub fn from_alias(raw: &str) -> Option<Self> {
        let kind = match raw.trim().to_lowercase().as_str() {
            "lidar" => Self::Lidar,
            "thermal camera" => Self::ThermalCamera,
            "gamma spectrometer" => Self::GammaSpectrometer,
            "magnetometer" | "magnetometers" => Self::Magnetometers,
            "gpr" => Self::Gpr,
            "bpr" => Self::Bpr,
            "camera" => Self::Camera,
            "seismic" => Self::Seismic,
            "multispectral" => Self::Multispectral,
            "hyperspectral" => Self::Hyperspectral,
            "em" => Self::Em,
            "gravimeter" => Self::Gravimeter,
            _ => return None,
        };
        Some(kind)
    }

    pub fn profile(self) -> SensorProfile {
        match self {
            Self::Seismic | Self::Gpr | Self::Bpr => SensorProfile::delivery(),
            // Flown as a fixed line survey (500×200 m at 5 m spacing) rather than from a footprint.
            Self::Magnetometers => SensorProfile {
                direct_delivery: false,
                footprint_m: None,
                line_spacing_m: Some(5.0),
                heuristic: Some(PathHeuristic::FixedPath {
                    distance_m: 20_000.0,
                }),
            },
            // Scanned from altitude, so no fixed footprint: the path follows the site perimeter.
            Self::Lidar => SensorProfile {
                direct_delivery: false,
                footprint_m: None,
                line_spacing_m: Some(10.0),
                heuristic: Some(PathHeuristic::Perimeter {
                    min_radius_m: 1_000.0,
                }),
            },
            Self::Camera | Self::ThermalCamera => SensorProfile::mapping(300.0, 300.0, 20.0),
            Self::Hyperspectral | Self::Multispectral => {
                SensorProfile::mapping(1_000.0, 200.0, 20.0)
            }
            Self::Em => SensorProfile::mapping(400.0, 400.0, 10.0),
            Self::Gravimeter => SensorProfile::mapping(500.0, 500.0, 10.0),
            Self::GammaSpectrometer => SensorProfile::mapping(500.0, 500.0, 20.0),
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// A sensor after name canonicalization.
///
/// Names outside the synonym table are kept (trimmed) so that a catalog
/// entry or an override for an unlisted sensor still flows through the
/// generic fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sensor {
    Known(SensorKind),
    Other(String),
}

impl Sensor {
    pub fn canonical(raw: &str) -> Self {
        match SensorKind::from_alias(raw) {
            Some(kind) => Self::Known(kind),
            None => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn kind(&self) -> Option<SensorKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Other(_) => None,
        }
    }

    pub fn profile(&self) -> Option<SensorProfile> {
        self.kind().map(SensorKind::profile)
    }

    pub fn is_direct_delivery(&self) -> bool {
        self.profile().is_some_and(|p| p.direct_delivery)
    }
}

impl From<SensorKind> for Sensor {
    fn from(kind: SensorKind) -> Self {
        Self::Known(kind)
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(kind) => fmt::Display::fmt(kind, f),
            Self::Other(name) => f.write_str(name),
        }
    }
}

impl Serialize for Sensor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
