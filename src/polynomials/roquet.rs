//! Published second-order coefficient sets.
//!
//! Roquet, F., Madec, G., Brodeau, L. and Nycander, J. (2015). Defining a
//! simplified yet "realistic" equation of state for seawater. *Journal of
//! Physical Oceanography* 45, 2564–2579.
//!
//! Each set adds physics on top of the previous one: `Linear` keeps the
//! thermal and haline terms, `Cabbeling` adds `Θ²`, `CabbelingThermobaricity`
//! adds `Θ Z`, `Freezing` adds `Sᴬ Θ` and `SecondOrder` keeps every term.
//! `SimplestRealistic` comes from the closed-form parameterization of the same
//! paper instead of the fitted table.

use core::fmt;
use core::str::FromStr;

use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::error::EosError;
use crate::precision::Precision;

use super::second_order::SecondOrderSeawaterPolynomial;

/// Names of the published second-order coefficient sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum CoefficientSet {
    #[default]
    Linear,
    Cabbeling,
    CabbelingThermobaricity,
    Freezing,
    SecondOrder,
    SimplestRealistic,
}

impl CoefficientSet {
    pub const ALL: [CoefficientSet; 6] = [
        CoefficientSet::Linear,
        CoefficientSet::Cabbeling,
        CoefficientSet::CabbelingThermobaricity,
        CoefficientSet::Freezing,
        CoefficientSet::SecondOrder,
        CoefficientSet::SimplestRealistic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CoefficientSet::Linear => "Linear",
            CoefficientSet::Cabbeling => "Cabbeling",
            CoefficientSet::CabbelingThermobaricity => "CabbelingThermobaricity",
            CoefficientSet::Freezing => "Freezing",
            CoefficientSet::SecondOrder => "SecondOrder",
            CoefficientSet::SimplestRealistic => "SimplestRealistic",
        }
    }

    /// Builds the polynomial for this set in precision `T`.
    pub fn polynomial<T: Precision>(self) -> SecondOrderSeawaterPolynomial<T> {
        match self {
            CoefficientSet::Linear => linear(),
            CoefficientSet::Cabbeling => cabbeling(),
            CoefficientSet::CabbelingThermobaricity => cabbeling_thermobaricity(),
            CoefficientSet::Freezing => freezing(),
            CoefficientSet::SecondOrder => second_order(),
            CoefficientSet::SimplestRealistic => simplest_realistic(),
        }
    }
}

impl fmt::Display for CoefficientSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoefficientSet {
    type Err = EosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoefficientSet::ALL
            .into_iter()
            .find(|set| set.name() == s)
            .ok_or_else(|| EosError::UnknownCoefficientSet { name: s.into() })
    }
}

impl TryFrom<String> for CoefficientSet {
    type Error = EosError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CoefficientSet> for &'static str {
    fn from(set: CoefficientSet) -> Self {
        set.name()
    }
}

// Argument order of `from_literals`: R₁₀₀, R₀₁₀, R₁₀₁, R₀₁₁, R₂₀₀, R₀₂₀, R₁₁₀.

pub fn linear<T: Precision>() -> SecondOrderSeawaterPolynomial<T> {
    SecondOrderSeawaterPolynomial::from_literals(7.718e-1, -1.775e-1, 0.0, 0.0, 0.0, 0.0, 0.0)
}

pub fn cabbeling<T: Precision>() -> SecondOrderSeawaterPolynomial<T> {
    SecondOrderSeawaterPolynomial::from_literals(7.718e-1, -0.844e-1, 0.0, 0.0, 0.0, -4.561e-3, 0.0)
}

pub fn cabbeling_thermobaricity<T: Precision>() -> SecondOrderSeawaterPolynomial<T> {
    SecondOrderSeawaterPolynomial::from_literals(
        7.718e-1, -0.651e-1, 0.0, -2.5681e-5, 0.0, -5.027e-3, 0.0,
    )
}

pub fn freezing<T: Precision>() -> SecondOrderSeawaterPolynomial<T> {
    SecondOrderSeawaterPolynomial::from_literals(
        8.078e-1, 0.182e-1, 0.0, -2.4677e-5, 0.0, -4.937e-3, -2.446e-3,
    )
}

pub fn second_order<T: Precision>() -> SecondOrderSeawaterPolynomial<T> {
    SecondOrderSeawaterPolynomial::from_literals(
        8.078e-1, 0.182e-1, -8.241e-6, -2.4677e-5, -1.115e-4, -4.937e-3, -2.446e-3,
    )
}

/// Parameters of the "simplest realistic" equation of state,
/// `ρ′ = b₀ Sᴬ − (Cb/2)(Θ − Θ₀)² + Tₕ Z Θ` with the constant terms dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplestRealisticParameters {
    /// Cabbeling coefficient Cb [kg/m³/K²].
    pub cabbeling: f64,
    /// Thermobaric coefficient Tₕ [kg/m⁴/K].
    pub thermobaricity: f64,
    /// Haline contraction b₀ [kg/m³/(g/kg)].
    pub haline: f64,
    /// Temperature of maximum density Θ₀ [°C].
    pub theta_0: f64,
}

impl Default for SimplestRealisticParameters {
    fn default() -> Self {
        Self {
            cabbeling: 0.011,
            thermobaricity: 2.5e-5,
            haline: 0.77,
            theta_0: -4.5,
        }
    }
}

impl SimplestRealisticParameters {
    /// Expands the closed form into second-order coefficients.
    pub fn polynomial<T: Precision>(&self) -> SecondOrderSeawaterPolynomial<T> {
        SecondOrderSeawaterPolynomial::from_literals(
            self.haline,
            self.cabbeling * self.theta_0,
            0.0,
            -self.thermobaricity,
            0.0,
            -self.cabbeling / 2.0,
            0.0,
        )
    }
}

pub fn simplest_realistic<T: Precision>() -> SecondOrderSeawaterPolynomial<T> {
    SimplestRealisticParameters::default().polynomial()
}
