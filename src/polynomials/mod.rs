//! Density-anomaly polynomials.
//!
//! Two families exist and both are fixed by the published fits, so the choice
//! between them is a closed enum, [`SeawaterPolynomial`], rather than an open
//! trait object. [`DensityPolynomial`] is the capability every family provides.

pub mod roquet;
pub mod second_order;
pub mod teos10;

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EosError;
use crate::models::Family;
use crate::precision::Precision;

use self::second_order::SecondOrderSeawaterPolynomial;
use self::teos10::Teos10SeawaterPolynomial;

/// Density and its sensitivities as functions of `(Θ, Sᴬ, Z)`.
///
/// `Θ` is conservative temperature [°C], `Sᴬ` absolute salinity [g/kg] and `Z`
/// geopotential height [m], zero at the surface and negative downward.
pub trait DensityPolynomial<T: Precision> {
    /// Density anomaly `ρ − ρᵣ` [kg/m³].
    fn density_anomaly(&self, theta: T, sa: T, z: T, reference_density: T) -> T;

    /// Density `ρᵣ + ρ′` [kg/m³].
    #[inline]
    fn density(&self, theta: T, sa: T, z: T, reference_density: T) -> T {
        reference_density + self.density_anomaly(theta, sa, z, reference_density)
    }

    /// Thermal sensitivity [kg/m³/K].
    fn thermal_sensitivity(&self, theta: T, sa: T, z: T) -> T;

    /// Haline sensitivity [kg/m³/(g/kg)].
    fn haline_sensitivity(&self, theta: T, sa: T, z: T) -> T;
}

/// One of the supported polynomial families.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub enum SeawaterPolynomial<T> {
    SecondOrder(SecondOrderSeawaterPolynomial<T>),
    Teos10(Teos10SeawaterPolynomial<T>),
}

impl<T: Precision> SeawaterPolynomial<T> {
    pub fn family(&self) -> Family {
        match self {
            SeawaterPolynomial::SecondOrder(_) => Family::Roquet,
            SeawaterPolynomial::Teos10(_) => Family::Teos10,
        }
    }

    /// Converts the stored coefficients to precision `U`.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::PrecisionMismatch`] if a coefficient does not fit in `U`.
    pub fn with_precision<U: Precision>(&self) -> Result<SeawaterPolynomial<U>, EosError> {
        Ok(match self {
            SeawaterPolynomial::SecondOrder(p) => SeawaterPolynomial::SecondOrder(p.with_precision()?),
            SeawaterPolynomial::Teos10(p) => SeawaterPolynomial::Teos10(p.with_precision()),
        })
    }

    /// Checks `sa` against the family's domain. Every family rejects a
    /// non-finite salinity; only TEOS-10 also bounds it from below.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::InvalidSalinity`] for NaN, infinities and values
    /// below the TEOS-10 fit domain.
    pub fn check_salinity(&self, sa: T) -> Result<(), EosError> {
        match self {
            SeawaterPolynomial::SecondOrder(_) => check_finite(sa),
            SeawaterPolynomial::Teos10(p) => p.check_salinity(sa),
        }
    }

    /// Like [`Self::check_salinity`] but also rejects the haline singularity.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::InvalidSalinity`] or [`EosError::SingularSalinity`].
    pub fn check_haline_salinity(&self, sa: T) -> Result<(), EosError> {
        match self {
            SeawaterPolynomial::SecondOrder(_) => check_finite(sa),
            SeawaterPolynomial::Teos10(p) => p.check_haline_salinity(sa),
        }
    }
}

fn check_finite<T: Precision>(sa: T) -> Result<(), EosError> {
    if sa.is_finite() {
        Ok(())
    } else {
        Err(EosError::InvalidSalinity {
            absolute_salinity: sa.as_(),
        })
    }
}

impl<T: Precision> DensityPolynomial<T> for SeawaterPolynomial<T> {
    #[inline]
    fn density_anomaly(&self, theta: T, sa: T, z: T, reference_density: T) -> T {
        match self {
            SeawaterPolynomial::SecondOrder(p) => p.density_anomaly(theta, sa, z, reference_density),
            SeawaterPolynomial::Teos10(p) => p.density_anomaly(theta, sa, z, reference_density),
        }
    }

    #[inline]
    fn density(&self, theta: T, sa: T, z: T, reference_density: T) -> T {
        match self {
            SeawaterPolynomial::SecondOrder(p) => p.density(theta, sa, z, reference_density),
            SeawaterPolynomial::Teos10(p) => p.density(theta, sa, z, reference_density),
        }
    }

    #[inline]
    fn thermal_sensitivity(&self, theta: T, sa: T, z: T) -> T {
        match self {
            SeawaterPolynomial::SecondOrder(p) => p.thermal_sensitivity(theta, sa, z),
            SeawaterPolynomial::Teos10(p) => p.thermal_sensitivity(theta, sa, z),
        }
    }

    #[inline]
    fn haline_sensitivity(&self, theta: T, sa: T, z: T) -> T {
        match self {
            SeawaterPolynomial::SecondOrder(p) => p.haline_sensitivity(theta, sa, z),
            SeawaterPolynomial::Teos10(p) => p.haline_sensitivity(theta, sa, z),
        }
    }
}

impl<T> From<SecondOrderSeawaterPolynomial<T>> for SeawaterPolynomial<T> {
    fn from(p: SecondOrderSeawaterPolynomial<T>) -> Self {
        SeawaterPolynomial::SecondOrder(p)
    }
}

impl<T> From<Teos10SeawaterPolynomial<T>> for SeawaterPolynomial<T> {
    fn from(p: Teos10SeawaterPolynomial<T>) -> Self {
        SeawaterPolynomial::Teos10(p)
    }
}

impl<T: Precision> fmt::Display for SeawaterPolynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeawaterPolynomial::SecondOrder(p) => write!(f, "{p}"),
            SeawaterPolynomial::Teos10(p) => write!(f, "{p}"),
        }
    }
}
