use crate::types::{CropProfile, PlotConfig, ProjectionResult, YearlyRecord};
use std::collections::HashSet;
use thiserror::Error;

/// Number of years covered by a demand curve.
pub const RAMP_UP_YEARS: usize = 5;

/// Assumed depth of the storage pond (meters).
pub const POND_DEPTH_M: f64 = 5.0;

const LITERS_PER_M3: f64 = 1000.0;
const M2_PER_HA: f64 = 10_000.0;

#[derive(Debug, PartialEq, Error)]
pub enum ProjectionError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Project the yearly water demand of a plot and size its storage pond.
///
/// The config is fully validated before any record is produced.
///
/// # Errors
/// Returns [`ProjectionError::InvalidConfig`] if the area is not positive,
/// fewer than [`RAMP_UP_YEARS`] years are simulated, any density or demand
/// value is negative (or not finite), any demand curve does not have
/// [`RAMP_UP_YEARS`] entries, or two crops share a name.
pub fn project(cfg: &PlotConfig) -> Result<ProjectionResult, ProjectionError> {
    validate(cfg)?;

    let records: Vec<_> = (1..=cfg.years_to_simulate)
        .map(|year| {
            let demand_by_crop: Vec<_> = cfg
                .crops
                .iter()
                .map(|crop| {
                    let demand = crop_demand(&crop.profile, cfg.total_hectares, year);
                    (crop.name.clone(), demand)
                })
                .collect();
            let total_demand = demand_by_crop.iter().map(|&(_, demand)| demand).sum();
            YearlyRecord {
                year,
                demand_by_crop,
                total_demand,
            }
        })
        .collect();

    let peak_demand = records
        .iter()
        .map(|rec| rec.total_demand)
        .fold(0.0, f64::max);

    let pond_volume_m3 = peak_demand / LITERS_PER_M3;
    let pond_area_m2 = pond_volume_m3 / POND_DEPTH_M;
    let pond_area_ha = pond_area_m2 / M2_PER_HA;

    Ok(ProjectionResult {
        records,
        peak_demand,
        pond_volume_m3,
        pond_area_m2,
        pond_area_ha,
    })
}

fn crop_demand(profile: &CropProfile, total_hectares: f64, year: usize) -> f64 {
    // Demand stabilizes at the last rate of the curve.
    let i_year = year.min(RAMP_UP_YEARS) - 1;
    profile.density * total_hectares * profile.demand_curve[i_year]
}

fn validate(cfg: &PlotConfig) -> Result<(), ProjectionError> {
    let invalid = |msg: String| Err(ProjectionError::InvalidConfig(msg));

    let hectares = cfg.total_hectares;
    if !(hectares.is_finite() && hectares > 0.0) {
        return invalid(format!("total hectares must be positive, but is {hectares}"));
    }
    let years = cfg.years_to_simulate;
    if years < RAMP_UP_YEARS {
        return invalid(format!(
            "years to simulate must be at least {RAMP_UP_YEARS}, but is {years}"
        ));
    }

    let mut names = HashSet::new();
    for crop in &cfg.crops {
        let name = &crop.name;
        if !names.insert(name.as_str()) {
            return invalid(format!("crop {name:?} is defined more than once"));
        }
        let density = crop.profile.density;
        if !is_non_negative(density) {
            return invalid(format!(
                "density of {name:?} must be non-negative, but is {density}"
            ));
        }
        let curve = &crop.profile.demand_curve;
        let len = curve.len();
        if len != RAMP_UP_YEARS {
            return invalid(format!(
                "demand curve of {name:?} must have {RAMP_UP_YEARS} entries, but has {len}"
            ));
        }
        if let Some(i_year) = curve.iter().position(|&val| !is_non_negative(val)) {
            return invalid(format!(
                "demand of {name:?} in year {} must be non-negative, but is {}",
                i_year + 1,
                curve[i_year]
            ));
        }
    }

    Ok(())
}

fn is_non_negative(val: f64) -> bool {
    val.is_finite() && val >= 0.0
}
