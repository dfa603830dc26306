//! Projection data types.

use serde::{Deserialize, Serialize};

/// Water requirements of a single crop.
///
/// The demand curve holds the liters each plant needs per year during its
/// first five years. After year five the last value is used.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CropProfile {
    /// Planting density (plants per hectare).
    pub density: f64,

    /// Water demand per plant for years 1 to 5 (liters per plant per year).
    pub demand_curve: Vec<f64>,
}

/// Named crop of the plot.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Crop {
    pub name: String,

    #[serde(flatten)]
    pub profile: CropProfile,
}

/// Plot to project.
///
/// Crops are kept in display order and their names must be unique.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Planted area (hectares).
    pub total_hectares: f64,

    /// Number of simulated years.
    pub years_to_simulate: usize,

    /// Crops grown in the plot.
    pub crops: Vec<Crop>,
}

/// Water demand of the plot during a single year.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct YearlyRecord {
    /// Simulated year, starting at 1.
    pub year: usize,

    /// Demand of each crop (liters), in the same order as the plot crops.
    pub demand_by_crop: Vec<(String, f64)>,

    /// Sum of the demand of all crops (liters).
    pub total_demand: f64,
}

/// Outcome of a projection: yearly records plus peak demand and pond size.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub records: Vec<YearlyRecord>,

    /// Maximum yearly total demand (liters).
    pub peak_demand: f64,

    /// Volume needed to store the peak demand (cubic meters).
    pub pond_volume_m3: f64,
    /// Surface of the pond (square meters).
    pub pond_area_m2: f64,
    /// Surface of the pond (hectares).
    pub pond_area_ha: f64,
}
