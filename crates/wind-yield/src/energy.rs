// ─────────────────────────────────────────────────────────────────────
// Wind Yield — Annual Energy
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Annual energy output [MWh/year] from rotor power.

use crate::rounding::round_half_even;
use wind_types::constants::{HOURS_PER_YEAR, KILO};

/// Theoretical (non-derated) annual energy [MWh/year].
///
/// `E = P_kW * 8760 / 1000`, rounded to the nearest integer.
pub fn annual_energy_output(power_kw: f64) -> f64 {
    round_half_even(power_kw * HOURS_PER_YEAR / KILO)
}

/// Derated annual energy [MWh/year].
///
/// `E = P_kW * 8760 * efficiency / 1000`, rounded to the nearest integer.
/// Efficiency covers wake losses, downtime and conversion; it is not
/// clamped to [0, 1].
pub fn derated_annual_energy_output(power_kw: f64, efficiency: f64) -> f64 {
    round_half_even(power_kw * HOURS_PER_YEAR * efficiency / KILO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_energy_values() {
        // 2308 * 8.76 = 20218.08
        assert_eq!(annual_energy_output(2308.0), 20_218.0);
        assert_eq!(annual_energy_output(0.0), 0.0);
    }

    #[test]
    fn test_derated_values() {
        // 2308 * 8760 * 0.2 / 1000 = 4043.616
        assert_eq!(derated_annual_energy_output(2308.0, 0.2), 4044.0);
        assert_eq!(derated_annual_energy_output(2308.0, 0.0), 0.0);
        assert_eq!(
            derated_annual_energy_output(2308.0, 1.0),
            annual_energy_output(2308.0)
        );
    }

    #[test]
    fn test_derated_never_exceeds_theoretical() {
        let kw = 1500.0;
        let full = annual_energy_output(kw);
        for i in 0..=10 {
            let eff = i as f64 / 10.0;
            let derated = derated_annual_energy_output(kw, eff);
            assert!(derated <= full, "eff={eff}: {derated} > {full}");
        }
    }

    #[test]
    fn test_efficiency_above_one_not_clamped() {
        assert!(derated_annual_energy_output(1000.0, 1.5) > annual_energy_output(1000.0));
    }
}
