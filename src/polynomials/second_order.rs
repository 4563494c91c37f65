//! Second-order seawater polynomials.
//!
//! A second-order polynomial keeps every term of total degree at most two in
//! absolute salinity `Sᴬ`, conservative temperature `Θ` and geopotential
//! height `Z`, except the pure-depth terms, which a Boussinesq model absorbs
//! into the hydrostatic reference pressure:
//!
//! ```text
//! ρ′ = R₁₀₀ Sᴬ + R₀₁₀ Θ + R₀₂₀ Θ² − R₀₁₁ Θ Z + R₂₀₀ Sᴬ² − R₁₀₁ Sᴬ Z + R₁₁₀ Sᴬ Θ
//! ```
//!
//! The subscripts `βχφ` of `R_βχφ` give the order of the term in salinity,
//! temperature and depth. Published coefficient sets live in
//! [`crate::polynomials::roquet`].

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EosError;
use crate::precision::{Precision, convert};

use super::DensityPolynomial;

/// Coefficients of a second-order density-anomaly polynomial.
///
/// Every coefficient defaults to zero, so a polynomial is built from the terms
/// it actually uses:
///
/// ```
/// use seawater_polynomials::polynomials::second_order::SecondOrderSeawaterPolynomial;
///
/// let linear = SecondOrderSeawaterPolynomial::<f64>::default()
///     .with_r010(-0.1775)
///     .with_r100(0.7718);
/// assert_eq!(linear.r020, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SecondOrderSeawaterPolynomial<T> {
    /// `R₁₀₀`, haline term [kg/m³/(g/kg)].
    #[serde(default)]
    pub r100: T,
    /// `R₀₁₀`, thermal term [kg/m³/K].
    #[serde(default)]
    pub r010: T,
    /// `R₁₀₁`, salinity-depth term.
    #[serde(default)]
    pub r101: T,
    /// `R₀₁₁`, thermobaric term.
    #[serde(default)]
    pub r011: T,
    /// `R₂₀₀`, quadratic haline term.
    #[serde(default)]
    pub r200: T,
    /// `R₀₂₀`, cabbeling term.
    #[serde(default)]
    pub r020: T,
    /// `R₁₁₀`, salinity-temperature term.
    #[serde(default)]
    pub r110: T,
}

impl<T: Precision> SecondOrderSeawaterPolynomial<T> {
    /// Builds a polynomial from published `f64` literals, rounded to `T`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_literals(
        r100: f64,
        r010: f64,
        r101: f64,
        r011: f64,
        r200: f64,
        r020: f64,
        r110: f64,
    ) -> Self {
        Self {
            r100: T::from_literal(r100),
            r010: T::from_literal(r010),
            r101: T::from_literal(r101),
            r011: T::from_literal(r011),
            r200: T::from_literal(r200),
            r020: T::from_literal(r020),
            r110: T::from_literal(r110),
        }
    }

    #[must_use]
    pub fn with_r100(mut self, r100: T) -> Self {
        self.r100 = r100;
        self
    }

    #[must_use]
    pub fn with_r010(mut self, r010: T) -> Self {
        self.r010 = r010;
        self
    }

    #[must_use]
    pub fn with_r101(mut self, r101: T) -> Self {
        self.r101 = r101;
        self
    }

    #[must_use]
    pub fn with_r011(mut self, r011: T) -> Self {
        self.r011 = r011;
        self
    }

    #[must_use]
    pub fn with_r200(mut self, r200: T) -> Self {
        self.r200 = r200;
        self
    }

    #[must_use]
    pub fn with_r020(mut self, r020: T) -> Self {
        self.r020 = r020;
        self
    }

    #[must_use]
    pub fn with_r110(mut self, r110: T) -> Self {
        self.r110 = r110;
        self
    }

    /// Density anomaly `ρ′(Θ, Sᴬ, Z)` [kg/m³].
    #[inline]
    pub fn anomaly(&self, theta: T, sa: T, z: T) -> T {
        self.r100 * sa + self.r010 * theta + self.r020 * theta * theta
            - self.r011 * theta * z
            + self.r200 * sa * sa
            - self.r101 * sa * z
            + self.r110 * sa * theta
    }

    /// Converts every coefficient to precision `U`.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::PrecisionMismatch`] if a coefficient does not fit in `U`.
    pub fn with_precision<U: Precision>(&self) -> Result<SecondOrderSeawaterPolynomial<U>, EosError> {
        Ok(SecondOrderSeawaterPolynomial {
            r100: convert(self.r100)?,
            r010: convert(self.r010)?,
            r101: convert(self.r101)?,
            r011: convert(self.r011)?,
            r200: convert(self.r200)?,
            r020: convert(self.r020)?,
            r110: convert(self.r110)?,
        })
    }
}

impl<T: Precision> DensityPolynomial<T> for SecondOrderSeawaterPolynomial<T> {
    #[inline]
    fn density_anomaly(&self, theta: T, sa: T, z: T, _reference_density: T) -> T {
        self.anomaly(theta, sa, z)
    }

    #[inline]
    fn thermal_sensitivity(&self, theta: T, sa: T, z: T) -> T {
        let two = T::one() + T::one();
        self.r010 + two * self.r020 * theta - self.r011 * z + self.r110 * sa
    }

    #[inline]
    fn haline_sensitivity(&self, theta: T, sa: T, z: T) -> T {
        let two = T::one() + T::one();
        self.r100 + two * self.r200 * sa - self.r101 * z + self.r110 * theta
    }
}

/// Sign and magnitude of a coefficient, e.g. `- 0.004937`.
struct Signed<T>(T);

impl<T: Precision> fmt::Display for Signed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < T::zero() { '-' } else { '+' };
        // Debug gives the shortest round-trip form and switches to exponent
        // notation below 1e-4.
        write!(f, "{sign} {:?}", self.0.abs())
    }
}

impl<T: Precision> fmt::Display for SecondOrderSeawaterPolynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ρ' = {:?} Sᴬ {} Θ {} Θ² {} Θ Z {} Sᴬ² {} Sᴬ Z {} Sᴬ Θ",
            self.r100,
            Signed(self.r010),
            Signed(self.r020),
            Signed(self.r011),
            Signed(self.r200),
            Signed(self.r101),
            Signed(self.r110),
        )
    }
}
