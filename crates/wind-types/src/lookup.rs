// ─────────────────────────────────────────────────────────────────────
// Wind Yield — Hub-Height Lookup Tables
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Air density and mean wind speed by hub height.
//!
//! Both tables are taken from von Krauland et al. (2023). They are meant
//! for sites without measured values; callers with measurements should
//! pass those directly.

use crate::error::{WindError, WindResult};

/// Canonical hub heights [m], ascending.
pub const HUB_HEIGHTS: [u32; 4] = [100, 150, 200, 250];

/// Air density [kg/m³] by hub height [m].
pub const AIR_DENSITY_LOOKUP: [(u32, f64); 4] = [
    (100, 1.000),
    (150, 0.995),
    (200, 0.990),
    (250, 0.986),
];

/// Mean wind speed [m/s] by hub height [m].
pub const WIND_SPEED_LOOKUP: [(u32, f64); 4] = [
    (100, 9.54),
    (150, 9.92),
    (200, 10.10),
    (250, 10.25),
];

fn lookup(table: &[(u32, f64)], hub_height_m: u32) -> Option<f64> {
    table
        .iter()
        .find(|(h, _)| *h == hub_height_m)
        .map(|&(_, value)| value)
}

/// Air density at `hub_height_m`, if it is one of [`HUB_HEIGHTS`].
pub fn air_density_at(hub_height_m: u32) -> Option<f64> {
    lookup(&AIR_DENSITY_LOOKUP, hub_height_m)
}

/// Mean wind speed at `hub_height_m`, if it is one of [`HUB_HEIGHTS`].
pub fn wind_speed_at(hub_height_m: u32) -> Option<f64> {
    lookup(&WIND_SPEED_LOOKUP, hub_height_m)
}

/// `(air_density, wind_speed)` pair for a hub height.
pub fn site_reference(hub_height_m: u32) -> WindResult<(f64, f64)> {
    match (air_density_at(hub_height_m), wind_speed_at(hub_height_m)) {
        (Some(rho), Some(v)) => Ok((rho, v)),
        _ => Err(WindError::UnknownHubHeight(hub_height_m)),
    }
}
