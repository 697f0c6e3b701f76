//! Drone and sensor catalogs.
//!
//! Both catalogs are loaded once at startup and read-only afterwards.
//! Numeric cells that are blank, unparseable or non-finite are kept as
//! unknown (`None`) instead of failing the load; only a drone's payload
//! capacity defaults to zero.

use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CatalogError;
use crate::sensors::Sensor;

const SENSOR_NAME_COLUMN: &str = "sensor_name";

/// A drone model from the catalog.
///
/// Built by [`DroneCatalog::from_reader`], which coerces each cell on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneRecord {
    pub mfc_model: String,
    pub manufacturer: Option<String>,
    pub configuration_harmonized: Option<String>,
    /// Communication range in meters
    pub comm_range: Option<f64>,
    /// Operational distance range in meters
    pub distance_range: Option<f64>,
    /// Maximum payload in grams
    pub max_payload_weight: f64,
    pub flight_time: Option<f64>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub source: Option<String>,
}

impl DroneRecord {
    /// Create a record with only the model id and payload capacity.
    pub fn new(mfc_model: impl Into<String>, max_payload_weight: f64) -> Self {
        Self {
            mfc_model: mfc_model.into(),
            manufacturer: None,
            configuration_harmonized: None,
            comm_range: None,
            distance_range: None,
            max_payload_weight,
            flight_time: None,
            price: None,
            image: None,
            source: None,
        }
    }

    /// Set communication and operational distance ranges.
    pub fn with_ranges(mut self, comm_range: Option<f64>, distance_range: Option<f64>) -> Self {
        self.comm_range = comm_range.filter(|v| v.is_finite());
        self.distance_range = distance_range.filter(|v| v.is_finite());
        self
    }
}

/// A sensor from the catalog, keyed by canonical name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorRecord {
    pub sensor_name: String,
    /// Weight in grams
    pub sensor_weight: Option<f64>,
    pub model: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DroneCatalog {
    drones: Vec<DroneRecord>,
}

impl DroneCatalog {
    pub fn new(drones: Vec<DroneRecord>) -> Self {
        Self { drones }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::from_reader(File::open(path)?)
    }

    /// Read a drone table from CSV. Missing columns read as absent values.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let columns = Columns::new(rdr.headers()?);

        let mut drones = Vec::new();
        for (line, row) in rdr.records().enumerate() {
            let row = row?;
            let Some(mfc_model) = columns.text(&row, "mfc_model") else {
                tracing::warn!("Skipping drone catalog row {} without a model id", line + 1);
                continue;
            };
            drones.push(DroneRecord {
                mfc_model,
                manufacturer: columns.text(&row, "manufacturer"),
                configuration_harmonized: columns.text(&row, "configuration_harmonized"),
                comm_range: columns.number(&row, "comm_range"),
                distance_range: columns.number(&row, "distance_range"),
                max_payload_weight: columns.number(&row, "max_payload_weight").unwrap_or(0.0),
                flight_time: columns.number(&row, "flight_time"),
                price: columns.number(&row, "price"),
                image: columns.text(&row, "image"),
                source: columns.text(&row, "source"),
            });
        }
        Ok(Self::new(drones))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DroneRecord> {
        self.drones.iter()
    }

    pub fn len(&self) -> usize {
        self.drones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drones.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SensorCatalog {
    sensors: HashMap<String, SensorRecord>,
}

impl SensorCatalog {
    /// Build the lookup. Names are canonicalized; the first row wins on duplicates.
    pub fn new(records: impl IntoIterator<Item = SensorRecord>) -> Self {
        let mut sensors = HashMap::new();
        for mut record in records {
            let name = Sensor::canonical(&record.sensor_name).to_string();
            record.sensor_name = name.clone();
            sensors.entry(name).or_insert(record);
        }
        Self { sensors }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::from_reader(File::open(path)?)
    }

    /// Read a sensor table from CSV. The `sensor_name` column is mandatory.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let columns = Columns::new(rdr.headers()?);
        if !columns.contains(SENSOR_NAME_COLUMN) {
            return Err(CatalogError::MissingColumn {
                catalog: "sensor",
                column: SENSOR_NAME_COLUMN,
            });
        }

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let Some(sensor_name) = columns.text(&row, SENSOR_NAME_COLUMN) else {
                continue;
            };
            records.push(SensorRecord {
                sensor_name,
                sensor_weight: columns.number(&row, "sensor_weight"),
                model: columns.text(&row, "model"),
                source: columns.text(&row, "source"),
            });
        }
        Ok(Self::new(records))
    }

    pub fn get(&self, sensor: &Sensor) -> Option<&SensorRecord> {
        self.sensors.get(&sensor.to_string())
    }

    /// Sensor weight in grams, zero when the sensor or its weight is unknown.
    pub fn weight_g(&self, sensor: &Sensor) -> f64 {
        self.get(sensor)
            .and_then(|record| record.sensor_weight)
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }
}

/// Header name to column index, with whitespace-trimmed names.
struct Columns(HashMap<String, usize>);

impl Columns {
    fn new(headers: &csv::StringRecord) -> Self {
        Self(
            headers
                .iter()
                .enumerate()
                .map(|(idx, name)| (name.trim().to_string(), idx))
                .collect(),
        )
    }

    fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    fn text(&self, row: &csv::StringRecord, name: &str) -> Option<String> {
        let idx = *self.0.get(name)?;
        row.get(idx)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    fn number(&self, row: &csv::StringRecord, name: &str) -> Option<f64> {
        self.text(row, name)?
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}
