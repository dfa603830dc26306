use crate::types::{Crop, CropProfile, PlotConfig};
use anyhow::{Context, Result, bail};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Load a [`PlotConfig`] from a file.
///
/// The file must be TOML-encoded and contain a serialized [`PlotConfig`].
///
/// # Errors
/// Returns an error if the file cannot be read or deserialized.
pub fn from_file<P: AsRef<Path>>(file: P) -> Result<PlotConfig> {
    let file = file.as_ref();
    let cfg_str = fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

    let cfg: PlotConfig = toml::from_str(&cfg_str).context("failed to deserialize config")?;

    Ok(cfg)
}

/// Default plot: twelve hectares of cacao under permanent shade.
///
/// Short-term crops and temporary shade are listed with zero density.
pub fn default_plot() -> PlotConfig {
    let crop = |name: &str, density, demand_curve: [f64; 5]| Crop {
        name: name.to_string(),
        profile: CropProfile {
            density,
            demand_curve: demand_curve.to_vec(),
        },
    };

    PlotConfig {
        total_hectares: 12.0,
        years_to_simulate: 10,
        crops: vec![
            crop("Cacao", 1280.0, [300.0, 400.0, 600.0, 800.0, 1200.0]),
            crop("Sombra Permanente", 1500.0, [150.0, 250.0, 300.0, 400.0, 400.0]),
            crop("Cultivos de Corto Plazo", 0.0, [0.0; 5]),
            crop("Sombra Temporal", 0.0, [0.0; 5]),
        ],
    }
}

/// Check the input bounds of a plot before it is projected.
///
/// At least one hectare must be planted and at least five years simulated.
/// Densities and demand values must be non-negative.
pub fn check_inputs(cfg: &PlotConfig) -> Result<()> {
    check_num(cfg.total_hectares, 1.0..).context("invalid total hectares")?;
    check_num(cfg.years_to_simulate, 5..).context("invalid number of years to simulate")?;

    for crop in &cfg.crops {
        check_num(crop.profile.density, 0.0..)
            .with_context(|| format!("invalid density of {:?}", crop.name))?;
        for (i_year, &demand) in crop.profile.demand_curve.iter().enumerate() {
            check_num(demand, 0.0..).with_context(|| {
                format!("invalid demand of {:?} in year {}", crop.name, i_year + 1)
            })?;
        }
    }

    Ok(())
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
