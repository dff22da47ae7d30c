// ─────────────────────────────────────────────────────────────────────
// Wind Yield — Site Assessment
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! End-to-end yield estimate for a site and a hub-height scan.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::density::annual_power_density;
use crate::energy::{annual_energy_output, derated_annual_energy_output};
use crate::layout::possible_turbine_installations;
use crate::rotor::{power_kw, swept_area};
use wind_types::config::{SiteSpec, WindParams};
use wind_types::error::WindResult;
use wind_types::lookup::HUB_HEIGHTS;

/// Every intermediate of the yield chain for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteAssessment {
    /// Hub height used for table lookups [m], if any.
    pub hub_height: Option<u32>,
    /// Mean wind speed [m/s].
    pub wind_speed: f64,
    /// Air density [kg/m³].
    pub air_density: f64,
    /// Annual average power density [W/m²].
    pub power_density: f64,
    /// Rotor swept area [m²].
    pub swept_area: f64,
    /// Rotor power [kW].
    pub power_kw: f64,
    /// Theoretical annual energy per turbine [MWh/year].
    pub annual_energy_mwh: f64,
    /// Derated annual energy per turbine [MWh/year].
    pub derated_energy_mwh: f64,
    /// Realizable turbine count.
    pub turbine_count: i64,
    /// Derated annual energy for the whole farm [MWh/year].
    pub farm_energy_mwh: f64,
}

/// Run the full chain for `site`.
///
/// Wind speed and air density are resolved via [`SiteSpec::resolve`].
pub fn assess_site(site: &SiteSpec, params: &WindParams) -> WindResult<SiteAssessment> {
    let (air_density, wind_speed) = site.resolve(params)?;

    let power_density =
        annual_power_density(wind_speed, air_density, params.energy_pattern_factor);
    let rotor_power = power_kw(power_density, site.rotor_diameter);
    let annual_energy_mwh = annual_energy_output(rotor_power);
    let derated_energy_mwh = derated_annual_energy_output(rotor_power, params.efficiency);
    let turbine_count = possible_turbine_installations(
        site.available_area_km2,
        site.rotor_diameter,
        params.spacing_factor,
    )?;
    let farm_energy_mwh = derated_energy_mwh * turbine_count as f64;

    debug!(
        hub_height = ?site.hub_height,
        wind_speed,
        air_density,
        power_density,
        power_kw = rotor_power,
        derated_energy_mwh,
        turbine_count,
        "site assessed"
    );

    Ok(SiteAssessment {
        hub_height: site.hub_height,
        wind_speed,
        air_density,
        power_density,
        swept_area: swept_area(site.rotor_diameter),
        power_kw: rotor_power,
        annual_energy_mwh,
        derated_energy_mwh,
        turbine_count,
        farm_energy_mwh,
    })
}

/// Assess the same rotor and area at every tabled hub height, ascending.
pub fn scan_hub_heights(
    rotor_diameter: f64,
    available_area_km2: f64,
    params: &WindParams,
) -> WindResult<Vec<SiteAssessment>> {
    HUB_HEIGHTS
        .iter()
        .map(|&h| {
            let site = SiteSpec::at_hub_height(h, rotor_diameter, available_area_km2);
            assess_site(&site, params)
        })
        .collect()
}
