// ─────────────────────────────────────────────────────────────────────
// Wind Yield — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Air density at 200 m hub height [kg/m³]. Default for power density.
pub const DEFAULT_AIR_DENSITY: f64 = 0.990;

/// Air density at sea level [kg/m³].
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225;

/// Energy pattern factor for a Rayleigh (Weibull k=2) wind speed distribution.
pub const DEFAULT_ENERGY_PATTERN_FACTOR: f64 = 1.91;

/// Derating factor applied to theoretical annual energy.
pub const DEFAULT_EFFICIENCY: f64 = 0.2;

/// Turbine spacing factor in rotor diameters (offshore layouts).
///
/// von Krauland et al. (2023), US offshore wind energy atlas.
pub const DEFAULT_SPACING_FACTOR: f64 = 5.98;

/// Hours in a (non-leap) year.
pub const HOURS_PER_YEAR: f64 = 8_760.0;

/// W → kW and kWh → MWh.
pub const KILO: f64 = 1_000.0;

/// km² → m².
pub const M2_PER_KM2: f64 = 1_000_000.0;
