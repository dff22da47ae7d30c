// ─────────────────────────────────────────────────────────────────────
// Wind Yield — Error Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WindError {
    #[error(
        "Division by zero: turbine spacing density is zero \
         (rotor_diameter={rotor_diameter}, spacing_factor={spacing_factor})"
    )]
    DivisionByZero {
        rotor_diameter: f64,
        spacing_factor: f64,
    },

    #[error("Turbine count {0} is not representable as an integer")]
    InvalidCount(f64),

    #[error("No lookup data for hub height {0} m")]
    UnknownHubHeight(u32),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type WindResult<T> = Result<T, WindError>;
