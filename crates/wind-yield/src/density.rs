// ─────────────────────────────────────────────────────────────────────
// Wind Yield — Annual Power Density
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Annual average power density of the wind resource.

use crate::rounding::{round_half_even, round_to_decimals};

/// Wind speed is rounded to this many decimals before cubing.
const WIND_SPEED_DECIMALS: i32 = 2;

/// Annual average power density [W/m²], rounded to the nearest integer.
///
/// `P/A = 0.5 * rho * EPF * v^3`, with `v` first rounded to 2 decimals.
///
/// Typical air densities: 1.225 (sea level), 1.000 (100 m), 0.995 (150 m),
/// 0.990 (200 m), 0.986 (250 m). EPF 1.91 corresponds to a Rayleigh
/// distribution (Weibull k=2). Inputs are not validated.
pub fn annual_power_density(wind_speed: f64, air_density: f64, energy_pattern_factor: f64) -> f64 {
    let v = round_to_decimals(wind_speed, WIND_SPEED_DECIMALS);
    round_half_even(0.5 * air_density * energy_pattern_factor * v.powf(3.0))
}
