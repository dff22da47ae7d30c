// ─────────────────────────────────────────────────────────────────────
// Wind Yield — Turbine Layout
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Realizable turbine count for an available area.
//!
//! `N = A / (F * D)^2`, floored, with `F` the spacing factor in rotor
//! diameters. F = 5.98 follows the US offshore wind energy atlas,
//! von Krauland et al. (2023).

use tracing::warn;

use crate::rounding::floor_div;
use wind_types::constants::M2_PER_KM2;
use wind_types::error::{WindError, WindResult};

/// Ground area reserved per turbine [m²].
pub fn turbine_spacing_density(rotor_diameter: f64, spacing_factor: f64) -> f64 {
    (spacing_factor * rotor_diameter).powi(2)
}

/// Number of turbines that fit in `available_area_km2`, rounded down.
///
/// Fails with [`WindError::DivisionByZero`] when the spacing density is
/// zero (zero diameter or spacing factor), and with
/// [`WindError::InvalidCount`] when the quotient is not a finite `i64`.
/// Negative areas are not rejected and give a negative count.
pub fn possible_turbine_installations(
    available_area_km2: f64,
    rotor_diameter: f64,
    spacing_factor: f64,
) -> WindResult<i64> {
    let available_area_m2 = available_area_km2 * M2_PER_KM2;
    let spacing_density = turbine_spacing_density(rotor_diameter, spacing_factor);
    if spacing_density == 0.0 {
        warn!(
            rotor_diameter,
            spacing_factor, "turbine spacing density is zero"
        );
        return Err(WindError::DivisionByZero {
            rotor_diameter,
            spacing_factor,
        });
    }

    let n_turbines = floor_div(available_area_m2, spacing_density);
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if !n_turbines.is_finite() || n_turbines.abs() >= i64::MAX as f64 {
        return Err(WindError::InvalidCount(n_turbines));
    }
    Ok(n_turbines as i64)
}
