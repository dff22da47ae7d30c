// ─────────────────────────────────────────────────────────────────────
// Wind Yield — Rounding
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rounding and floor-division helpers.
//!
//! Every rounded output in the crate goes through these so results are
//! bit-reproducible for the same `f64` inputs.

/// Round to the nearest integer, ties to even. Result stays `f64`.
#[inline]
pub fn round_half_even(x: f64) -> f64 {
    x.round_ties_even()
}

/// Round to `decimals` places as `rint(x * 10^d) / 10^d`.
///
/// Scale-then-round, not a decimal-exact rounding: `2.675` rounds to
/// `2.67` because its nearest double lies below the midpoint.
pub fn round_to_decimals(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    round_half_even(x * scale) / scale
}

/// Floored quotient of two doubles.
///
/// Computed from the `fmod` remainder rather than `(a / b).floor()` so a
/// quotient that rounds up across an integer boundary is corrected.
/// `b` must be non-zero; callers check.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
