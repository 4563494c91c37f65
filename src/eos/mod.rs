//! Boussinesq equations of state.
//!
//! An [`EquationOfState`] pairs a [`SeawaterPolynomial`] with a reference
//! density `ρᵣ`. Density is `ρᵣ + ρ′`, and the normalized thermal expansion and
//! haline contraction divide the raw sensitivities by `ρᵣ`.
//!
//! ```
//! use seawater_polynomials::{CoefficientSet, EquationOfState};
//!
//! let eos = EquationOfState::<f64>::roquet(CoefficientSet::Linear);
//! let rho = eos.density(10.0, 35.0, 0.0);
//! assert!((rho - (1024.6 + 0.7718 * 35.0 - 0.1775 * 10.0)).abs() < 1e-9);
//! ```

pub mod factory;
pub mod summary;

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EosError;
use crate::models::{Family, ROQUET_REFERENCE_DENSITY, TEOS10_REFERENCE_DENSITY};
use crate::polynomials::roquet::CoefficientSet;
use crate::polynomials::teos10::Teos10SeawaterPolynomial;
use crate::polynomials::{DensityPolynomial, SeawaterPolynomial};
use crate::precision::{Precision, convert};

pub use factory::{AnyEquationOfState, make_equation_of_state};
pub use summary::EvaluationSummary;

/// A seawater polynomial and the reference density it is expanded around.
///
/// Both share the precision `T`. The value is immutable once built and can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct EquationOfState<T> {
    seawater_polynomial: SeawaterPolynomial<T>,
    reference_density: T,
}

impl<T: Precision> EquationOfState<T> {
    pub fn new(seawater_polynomial: impl Into<SeawaterPolynomial<T>>, reference_density: T) -> Self {
        Self {
            seawater_polynomial: seawater_polynomial.into(),
            reference_density,
        }
    }

    /// A published second-order fit with the default reference density, 1024.6 kg/m³.
    pub fn roquet(coefficient_set: CoefficientSet) -> Self {
        Self::new(
            coefficient_set.polynomial::<T>(),
            T::from_literal(ROQUET_REFERENCE_DENSITY),
        )
    }

    /// The TEOS-10 polynomial with the default reference density, 1020 kg/m³.
    pub fn teos10() -> Self {
        Self::new(
            Teos10SeawaterPolynomial::<T>::new(),
            T::from_literal(TEOS10_REFERENCE_DENSITY),
        )
    }

    #[inline]
    pub fn reference_density(&self) -> T {
        self.reference_density
    }

    #[inline]
    pub fn seawater_polynomial(&self) -> &SeawaterPolynomial<T> {
        &self.seawater_polynomial
    }

    pub fn family(&self) -> Family {
        self.seawater_polynomial.family()
    }

    /// Density `ρ` [kg/m³].
    #[inline]
    pub fn density(&self, theta: T, sa: T, z: T) -> T {
        self.seawater_polynomial
            .density(theta, sa, z, self.reference_density)
    }

    /// Density anomaly `ρ′ = ρ − ρᵣ` [kg/m³].
    #[inline]
    pub fn density_anomaly(&self, theta: T, sa: T, z: T) -> T {
        self.seawater_polynomial
            .density_anomaly(theta, sa, z, self.reference_density)
    }

    /// Thermal sensitivity [kg/m³/K].
    ///
    /// The sign follows the family's published fit: second-order polynomials
    /// return `∂ρ′/∂Θ` (negative for ordinary seawater, equal to `R₀₁₀` at the
    /// origin) while TEOS-10 returns `−∂ρ/∂Θ` (positive).
    #[inline]
    pub fn thermal_sensitivity(&self, theta: T, sa: T, z: T) -> T {
        self.seawater_polynomial.thermal_sensitivity(theta, sa, z)
    }

    /// Thermal expansion, the thermal sensitivity over `ρᵣ` [1/K].
    ///
    /// Inherits the sign convention of [`Self::thermal_sensitivity`], so it is
    /// negative for the second-order family and positive for TEOS-10 in
    /// ordinary seawater.
    #[inline]
    pub fn thermal_expansion(&self, theta: T, sa: T, z: T) -> T {
        self.thermal_sensitivity(theta, sa, z) / self.reference_density
    }

    /// Haline sensitivity [kg/m³/(g/kg)].
    #[inline]
    pub fn haline_sensitivity(&self, theta: T, sa: T, z: T) -> T {
        self.seawater_polynomial.haline_sensitivity(theta, sa, z)
    }

    /// Haline contraction, the haline sensitivity over `ρᵣ` [1/(g/kg)].
    #[inline]
    pub fn haline_contraction(&self, theta: T, sa: T, z: T) -> T {
        self.haline_sensitivity(theta, sa, z) / self.reference_density
    }

    /// # Errors
    ///
    /// Returns [`EosError::InvalidSalinity`] if `sa` is not finite or is
    /// outside the polynomial's domain.
    pub fn validate_salinity(&self, sa: T) -> Result<(), EosError> {
        self.seawater_polynomial.check_salinity(sa)
    }

    /// [`Self::density`], failing instead of returning NaN outside the domain.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::InvalidSalinity`] if `sa` is outside the polynomial's domain.
    pub fn try_density(&self, theta: T, sa: T, z: T) -> Result<T, EosError> {
        self.validate_salinity(sa)?;
        Ok(self.density(theta, sa, z))
    }

    /// # Errors
    ///
    /// Returns [`EosError::InvalidSalinity`] if `sa` is outside the polynomial's domain.
    pub fn try_density_anomaly(&self, theta: T, sa: T, z: T) -> Result<T, EosError> {
        self.validate_salinity(sa)?;
        Ok(self.density_anomaly(theta, sa, z))
    }

    /// # Errors
    ///
    /// Returns [`EosError::InvalidSalinity`] if `sa` is outside the polynomial's domain.
    pub fn try_thermal_sensitivity(&self, theta: T, sa: T, z: T) -> Result<T, EosError> {
        self.validate_salinity(sa)?;
        Ok(self.thermal_sensitivity(theta, sa, z))
    }

    /// # Errors
    ///
    /// Returns [`EosError::InvalidSalinity`] outside the domain and
    /// [`EosError::SingularSalinity`] at `Sᴬ = −ΔS` for TEOS-10.
    pub fn try_haline_sensitivity(&self, theta: T, sa: T, z: T) -> Result<T, EosError> {
        self.seawater_polynomial.check_haline_salinity(sa)?;
        Ok(self.haline_sensitivity(theta, sa, z))
    }

    /// The same equation of state with every stored value converted to `U`.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::PrecisionMismatch`] if a coefficient or the
    /// reference density does not fit in `U`.
    pub fn with_precision<U: Precision>(&self) -> Result<EquationOfState<U>, EosError> {
        let rebound = EquationOfState {
            seawater_polynomial: self.seawater_polynomial.with_precision::<U>()?,
            reference_density: convert(self.reference_density)?,
        };
        tracing::debug!(
            family = %self.family(),
            from = T::NAME,
            to = U::NAME,
            "rebound equation of state precision"
        );
        Ok(rebound)
    }
}

impl<T: Precision> fmt::Display for EquationOfState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BoussinesqEquationOfState<{}>:", T::NAME)?;
        writeln!(f, "├── seawater_polynomial: {}", self.seawater_polynomial)?;
        write!(f, "└── reference_density: {:?}", self.reference_density)
    }
}
