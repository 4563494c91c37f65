use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EosError;
use crate::polynomials::roquet::CoefficientSet;
use crate::precision::FloatPrecision;

/// Default reference density of the second-order fits [kg/m³].
pub const ROQUET_REFERENCE_DENSITY: f64 = 1024.6;
/// Default reference density of the TEOS-10 fit [kg/m³].
pub const TEOS10_REFERENCE_DENSITY: f64 = 1020.0;

/// Polynomial family of an equation of state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Second-order polynomials with a published Roquet coefficient set.
    #[default]
    Roquet,
    /// The 55-term TEOS-10 polynomial.
    Teos10,
}

impl Family {
    pub fn name(self) -> &'static str {
        match self {
            Family::Roquet => "roquet",
            Family::Teos10 => "teos10",
        }
    }

    pub fn default_reference_density(self) -> f64 {
        match self {
            Family::Roquet => ROQUET_REFERENCE_DENSITY,
            Family::Teos10 => TEOS10_REFERENCE_DENSITY,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = EosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "roquet" | "Roquet" => Ok(Family::Roquet),
            "teos10" | "TEOS10" | "Teos10" => Ok(Family::Teos10),
            other => Err(EosError::UnknownFamily { name: other.into() }),
        }
    }
}

/// Serializable description of an equation of state.
///
/// Missing fields take the published defaults: the `Linear` set for the
/// second-order family and each family's own reference density.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EosConfig {
    pub family: Family,
    pub precision: FloatPrecision,
    pub coefficient_set: Option<CoefficientSet>,
    pub reference_density: Option<f64>,
}

impl EosConfig {
    pub fn roquet(coefficient_set: CoefficientSet) -> Self {
        Self {
            family: Family::Roquet,
            coefficient_set: Some(coefficient_set),
            ..Default::default()
        }
    }

    pub fn teos10() -> Self {
        Self {
            family: Family::Teos10,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_precision(mut self, precision: FloatPrecision) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_reference_density(mut self, reference_density: f64) -> Self {
        self.reference_density = Some(reference_density);
        self
    }

    pub fn reference_density_or_default(&self) -> f64 {
        self.reference_density
            .unwrap_or_else(|| self.family.default_reference_density())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: EosConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EosConfig::default());
        assert_eq!(config.family, Family::Roquet);
        assert_eq!(config.precision, FloatPrecision::F64);
        assert_eq!(config.reference_density_or_default(), 1024.6);
    }

    #[test]
    fn full_document_parses() {
        let config: EosConfig = serde_json::from_str(
            r#"{"family":"roquet","precision":"f32","coefficient_set":"Freezing","reference_density":1025.0}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            EosConfig::roquet(CoefficientSet::Freezing)
                .with_precision(FloatPrecision::F32)
                .with_reference_density(1025.0)
        );
    }

    #[test]
    fn unknown_coefficient_set_in_document_is_an_error() {
        let err = serde_json::from_str::<EosConfig>(r#"{"coefficient_set":"Bogus"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown coefficient set 'Bogus'"));
    }

    #[test]
    fn teos10_defaults_to_its_own_reference_density() {
        assert_eq!(EosConfig::teos10().reference_density_or_default(), 1020.0);
    }
}
