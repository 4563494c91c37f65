use alloc::string::String;

use thiserror::Error;

use crate::models::Family;

/// Errors raised while building or explicitly checking an equation of state.
///
/// The plain evaluators never fail; these come from construction, precision
/// rebinding, and the `try_*` evaluators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    #[error(
        "unknown coefficient set '{name}': expected one of Linear, Cabbeling, \
         CabbelingThermobaricity, Freezing, SecondOrder, SimplestRealistic"
    )]
    UnknownCoefficientSet { name: String },

    #[error("unknown precision '{name}': expected f32 or f64")]
    UnknownPrecision { name: String },

    #[error("unknown polynomial family '{name}': expected roquet or teos10")]
    UnknownFamily { name: String },

    /// A finite value does not fit in the requested precision.
    #[error("value {value} cannot be represented as {precision}")]
    PrecisionMismatch { value: f64, precision: &'static str },

    /// `sa` is not finite, or `Sᴬ + ΔS` is negative so the TEOS-10 reduced
    /// salinity has no real value.
    #[error("absolute salinity {absolute_salinity} g/kg is outside the polynomial's domain")]
    InvalidSalinity { absolute_salinity: f64 },

    /// `Sᴬ + ΔS` is zero, where the haline sensitivity divides by zero.
    #[error("haline sensitivity is singular at absolute salinity {absolute_salinity} g/kg")]
    SingularSalinity { absolute_salinity: f64 },

    #[error("a coefficient set only applies to the second-order family, not {family}")]
    CoefficientSetNotApplicable { family: Family },
}

#[cfg(feature = "cli")]
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON for --config-json: {source}")]
    ParseConfigJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid JSON in config document: {source}")]
    ParseConfigDocument {
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing evaluation point: provide --theta, --salinity and --z")]
    MissingPoint,

    #[error(transparent)]
    Eos(#[from] EosError),
}
