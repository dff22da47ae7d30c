// ─────────────────────────────────────────────────────────────────────
// Wind Yield — Wind Yield
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Wind energy yield estimates.
//!
//! Formula chain:
//! - `density`: annual power density from wind speed [W/m²]
//! - `rotor`: swept area and rotor power [kW]
//! - `energy`: annual energy output, theoretical and derated [MWh/year]
//! - `layout`: turbine count for an available area
//! - `site`: end-to-end site assessment and hub-height scan
//!
//! All functions are pure; rounding follows `rounding`.

pub mod density;
pub mod energy;
pub mod layout;
pub mod rotor;
pub mod rounding;
pub mod site;

pub use density::annual_power_density;
pub use energy::{annual_energy_output, derated_annual_energy_output};
pub use layout::possible_turbine_installations;
pub use rotor::{power_kw, swept_area};
