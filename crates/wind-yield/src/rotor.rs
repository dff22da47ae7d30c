// ─────────────────────────────────────────────────────────────────────
// Wind Yield — Rotor
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rotor swept area and rotor power.

use std::f64::consts::PI;

use crate::rounding::round_half_even;
use wind_types::constants::KILO;

/// Rotor swept area [m²], `pi * (d/2)^2`. Not rounded.
///
/// The diameter is squared, so a negative diameter yields the same area
/// as its absolute value.
pub fn swept_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

/// Rotor power [kW] from power density [W/m²] and rotor diameter [m],
/// rounded to the nearest integer.
pub fn power_kw(power_density: f64, rotor_diameter: f64) -> f64 {
    let area = swept_area(rotor_diameter);
    round_half_even(power_density * area / KILO)
}
