// ─────────────────────────────────────────────────────────────────────
// Wind Yield — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{
    DEFAULT_AIR_DENSITY, DEFAULT_EFFICIENCY, DEFAULT_ENERGY_PATTERN_FACTOR,
    DEFAULT_SPACING_FACTOR,
};
use crate::error::{WindError, WindResult};
use crate::lookup;

/// Model parameters shared by every site evaluation.
/// Any field missing from JSON falls back to its library default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindParams {
    /// Air density [kg/m³] (default: 0.990, 200 m hub height)
    #[serde(default = "default_air_density")]
    pub air_density: f64,
    /// Energy pattern factor (default: 1.91, Rayleigh)
    #[serde(default = "default_energy_pattern_factor")]
    pub energy_pattern_factor: f64,
    /// Derating factor on theoretical energy (default: 0.2)
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,
    /// Turbine spacing in rotor diameters (default: 5.98)
    #[serde(default = "default_spacing_factor")]
    pub spacing_factor: f64,
}

fn default_air_density() -> f64 {
    DEFAULT_AIR_DENSITY
}
fn default_energy_pattern_factor() -> f64 {
    DEFAULT_ENERGY_PATTERN_FACTOR
}
fn default_efficiency() -> f64 {
    DEFAULT_EFFICIENCY
}
fn default_spacing_factor() -> f64 {
    DEFAULT_SPACING_FACTOR
}

impl Default for WindParams {
    fn default() -> Self {
        WindParams {
            air_density: default_air_density(),
            energy_pattern_factor: default_energy_pattern_factor(),
            efficiency: default_efficiency(),
            spacing_factor: default_spacing_factor(),
        }
    }
}

impl WindParams {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> WindResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json(json: &str) -> WindResult<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Defaults with air density taken from the hub-height table.
    pub fn at_hub_height(hub_height_m: u32) -> WindResult<Self> {
        let air_density =
            lookup::air_density_at(hub_height_m).ok_or(WindError::UnknownHubHeight(hub_height_m))?;
        Ok(WindParams {
            air_density,
            ..Self::default()
        })
    }

    /// Reject non-finite values. Finite but unusual values are accepted
    /// and only logged; the formulas propagate them algebraically.
    pub fn validate(&self) -> WindResult<()> {
        let fields = [
            ("air_density", self.air_density),
            ("energy_pattern_factor", self.energy_pattern_factor),
            ("efficiency", self.efficiency),
            ("spacing_factor", self.spacing_factor),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(WindError::ConfigError(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.efficiency) {
            warn!(
                efficiency = self.efficiency,
                "efficiency outside [0, 1]; derated energy may exceed theoretical"
            );
        }
        Ok(())
    }
}

/// One candidate site.
///
/// Either `wind_speed` or `hub_height` must be present. With a hub height,
/// missing wind speed and air density are read from the lookup tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSpec {
    /// Rotor diameter [m].
    pub rotor_diameter: f64,
    /// Available land/sea area [km²].
    pub available_area_km2: f64,
    /// Measured mean wind speed [m/s].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    /// Measured air density [kg/m³]; overrides params and tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_density: Option<f64>,
    /// Hub height [m], one of 100/150/200/250.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub_height: Option<u32>,
}

impl SiteSpec {
    /// Site with a measured wind speed.
    pub fn measured(wind_speed: f64, rotor_diameter: f64, available_area_km2: f64) -> Self {
        SiteSpec {
            rotor_diameter,
            available_area_km2,
            wind_speed: Some(wind_speed),
            air_density: None,
            hub_height: None,
        }
    }

    /// Site characterised only by hub height.
    pub fn at_hub_height(hub_height: u32, rotor_diameter: f64, available_area_km2: f64) -> Self {
        SiteSpec {
            rotor_diameter,
            available_area_km2,
            wind_speed: None,
            air_density: None,
            hub_height: Some(hub_height),
        }
    }

    /// Resolve `(air_density, wind_speed)` for this site.
    ///
    /// Precedence: site value, then hub-height table, then `params`
    /// (air density only).
    pub fn resolve(&self, params: &WindParams) -> WindResult<(f64, f64)> {
        let (table_rho, table_v) = match self.hub_height {
            Some(h) => {
                let (rho, v) = lookup::site_reference(h)?;
                (Some(rho), Some(v))
            }
            None => (None, None),
        };
        let wind_speed = self.wind_speed.or(table_v).ok_or_else(|| {
            WindError::ConfigError("site needs a wind_speed or a hub_height".to_string())
        })?;
        let air_density = self
            .air_density
            .or(table_rho)
            .unwrap_or(params.air_density);
        Ok((air_density, wind_speed))
    }
}
