// ─────────────────────────────────────────────────────────────────────
// Wind Yield — Property-Based Tests (proptest) for wind-yield
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for wind-yield using proptest.
//!
//! Covers: power density monotonicity, swept-area symmetry, derating
//! bound, turbine count monotonicity and singularities, site pipeline.

use proptest::prelude::*;
use wind_types::config::{SiteSpec, WindParams};
use wind_types::constants::{DEFAULT_AIR_DENSITY, DEFAULT_ENERGY_PATTERN_FACTOR};
use wind_types::error::WindError;
use wind_yield::site::assess_site;
use wind_yield::{
    annual_energy_output, annual_power_density, derated_annual_energy_output,
    possible_turbine_installations, power_kw, swept_area,
};

// ── Power Density ────────────────────────────────────────────────────

proptest! {
    /// Non-decreasing in wind speed for non-negative speeds.
    #[test]
    fn power_density_monotone_in_wind_speed(
        v1 in 0.0f64..60.0,
        v2 in 0.0f64..60.0,
    ) {
        let (lo, hi) = if v1 <= v2 { (v1, v2) } else { (v2, v1) };
        let p_lo = annual_power_density(lo, DEFAULT_AIR_DENSITY, DEFAULT_ENERGY_PATTERN_FACTOR);
        let p_hi = annual_power_density(hi, DEFAULT_AIR_DENSITY, DEFAULT_ENERGY_PATTERN_FACTOR);
        prop_assert!(p_hi >= p_lo, "v={} -> {}, v={} -> {}", lo, p_lo, hi, p_hi);
    }

    /// Output is always integer-valued.
    #[test]
    fn power_density_integer_valued(
        v in 0.0f64..60.0,
        rho in 0.5f64..1.5,
        epf in 1.0f64..3.0,
    ) {
        let p = annual_power_density(v, rho, epf);
        prop_assert_eq!(p, p.round());
    }
}

// ── Rotor ────────────────────────────────────────────────────────────

proptest! {
    /// Swept area ignores the sign of the diameter.
    #[test]
    fn swept_area_sign_invariant(d in 0.0f64..500.0) {
        prop_assert_eq!(swept_area(-d), swept_area(d));
    }

    /// Rotor power never decreases with diameter.
    #[test]
    fn power_monotone_in_diameter(
        pd in 0.0f64..2_000.0,
        d in 1.0f64..250.0,
        delta in 0.0f64..50.0,
    ) {
        prop_assert!(power_kw(pd, d + delta) >= power_kw(pd, d));
    }
}

// ── Annual Energy ────────────────────────────────────────────────────

proptest! {
    /// Derated energy never exceeds theoretical energy for eff in [0, 1].
    #[test]
    fn derated_bounded_by_theoretical(
        kw in 0.0f64..20_000.0,
        eff in 0.0f64..=1.0,
    ) {
        let full = annual_energy_output(kw);
        let derated = derated_annual_energy_output(kw, eff);
        prop_assert!(derated <= full, "kw={} eff={}: {} > {}", kw, eff, derated, full);
    }

    /// Full efficiency reproduces the theoretical figure.
    #[test]
    fn unit_efficiency_matches_theoretical(kw in 0.0f64..20_000.0) {
        prop_assert_eq!(derated_annual_energy_output(kw, 1.0), annual_energy_output(kw));
    }
}

// ── Turbine Layout ───────────────────────────────────────────────────

proptest! {
    /// More area never means fewer turbines.
    #[test]
    fn turbine_count_monotone_in_area(
        area in 0.1f64..200.0,
        delta in 0.1f64..10.0,
    ) {
        let n1 = possible_turbine_installations(area, 80.0, 6.0).unwrap();
        let n2 = possible_turbine_installations(area + delta, 80.0, 6.0).unwrap();
        prop_assert!(n2 >= n1, "area {} -> {}, area {} -> {}", area, n1, area + delta, n2);
    }

    /// Count is non-negative and no larger than the real quotient.
    #[test]
    fn turbine_count_bounded(
        area in 0.0f64..500.0,
        d in 10.0f64..250.0,
        f in 1.0f64..12.0,
    ) {
        let n = possible_turbine_installations(area, d, f).unwrap();
        let exact = area * 1.0e6 / (f * d).powi(2);
        prop_assert!(n >= 0);
        prop_assert!((n as f64) <= exact + 1e-9);
        prop_assert!((n as f64) > exact - 1.0 - 1e-9);
    }

    /// Zero diameter or zero spacing is always a division by zero.
    #[test]
    fn zero_spacing_density_errors(
        area in 0.0f64..500.0,
        d in 1.0f64..250.0,
        f in 1.0f64..12.0,
    ) {
        let zero_d = matches!(
            possible_turbine_installations(area, 0.0, f),
            Err(WindError::DivisionByZero { .. })
        );
        let zero_f = matches!(
            possible_turbine_installations(area, d, 0.0),
            Err(WindError::DivisionByZero { .. })
        );
        prop_assert!(zero_d);
        prop_assert!(zero_f);
    }
}

// ── Site Pipeline ────────────────────────────────────────────────────

proptest! {
    /// The pipeline agrees with chaining the free functions by hand.
    #[test]
    fn pipeline_matches_manual_chain(
        v in 0.0f64..25.0,
        d in 20.0f64..250.0,
        area in 0.0f64..100.0,
        eff in 0.0f64..=1.0,
    ) {
        let params = WindParams { efficiency: eff, ..WindParams::default() };
        let a = assess_site(&SiteSpec::measured(v, d, area), &params).unwrap();

        let pd = annual_power_density(v, params.air_density, params.energy_pattern_factor);
        let kw = power_kw(pd, d);
        prop_assert_eq!(a.power_density, pd);
        prop_assert_eq!(a.power_kw, kw);
        prop_assert_eq!(a.annual_energy_mwh, annual_energy_output(kw));
        prop_assert_eq!(a.derated_energy_mwh, derated_annual_energy_output(kw, eff));
        prop_assert_eq!(
            a.turbine_count,
            possible_turbine_installations(area, d, params.spacing_factor).unwrap()
        );
        prop_assert!(a.derated_energy_mwh <= a.annual_energy_mwh);
    }
}
