// ─────────────────────────────────────────────────────────────────────
// Wind Yield — Wind Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shared types for the wind yield workspace: constants, hub-height
//! lookup tables, parameter configuration and the error type.

pub mod config;
pub mod constants;
pub mod error;
pub mod lookup;
