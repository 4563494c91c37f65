//! The 55-term polynomial approximation of TEOS-10 density.
//!
//! Roquet, F., Madec, G., McDougall, T. J. and Barker, P. M. (2015). Accurate
//! polynomial expressions for the density and specific volume of seawater
//! using the TEOS-10 standard. *Ocean Modelling* 90, 29–43.
//!
//! Inputs are mapped onto reduced coordinates
//!
//! ```text
//! τ = Θ / Θᵤ,    s = √((Sᴬ + ΔS) / Sᴬᵤ),    ζ = −Z / Zᵤ
//! ```
//!
//! and density is the sum of a depth-only reference profile `r₀(ζ)` and a fit
//! `r′(τ, s, ζ)` that is cubic in `ζ`. Every polynomial is evaluated with
//! Horner's scheme, highest degree first: the published coefficients were fit
//! with that evaluation order and its rounding is part of the error budget.
//!
//! At `Θ = 10 °C`, `Sᴬ = 30 g/kg`, `Z = −1000 m`:
//!
//! ```
//! use seawater_polynomials::polynomials::teos10::Teos10SeawaterPolynomial;
//!
//! let teos10 = Teos10SeawaterPolynomial::<f64>::new();
//! assert!((teos10.reference_profile(-1000.0) - 4.59763035).abs() < 1e-8);
//! assert!((teos10.in_situ_density(10.0, 30.0, -1000.0) - 1027.45140).abs() < 1e-5);
//! ```

pub mod coefficients;

use core::fmt;
use core::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::error::EosError;
use crate::precision::Precision;

use self::coefficients::{AnomalyCoefficients, DerivativeCoefficients, ProfileCoefficients};
use super::DensityPolynomial;

/// Marker for the TEOS-10 polynomial in precision `T`.
///
/// The polynomial carries no data: its coefficients are the table selected by
/// [`Precision::teos10_coefficients`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Teos10SeawaterPolynomial<T> {
    #[serde(skip)]
    precision: PhantomData<T>,
}

impl<T> fmt::Debug for Teos10SeawaterPolynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Teos10SeawaterPolynomial<{}>", core::any::type_name::<T>())
    }
}

impl<T: Precision> fmt::Display for Teos10SeawaterPolynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Teos10SeawaterPolynomial<{}>", T::NAME)
    }
}

impl<T: Precision> Teos10SeawaterPolynomial<T> {
    pub fn new() -> Self {
        Self {
            precision: PhantomData,
        }
    }

    /// The same polynomial in precision `U`; selects `U`'s own table.
    pub fn with_precision<U: Precision>(&self) -> Teos10SeawaterPolynomial<U> {
        Teos10SeawaterPolynomial::new()
    }

    #[inline]
    pub fn reduced_temperature(&self, theta: T) -> T {
        theta / T::teos10_coefficients().scales.theta_u
    }

    /// Reduced salinity `s`; NaN when `Sᴬ + ΔS < 0`.
    #[inline]
    pub fn reduced_salinity(&self, sa: T) -> T {
        let scales = &T::teos10_coefficients().scales;
        ((sa + scales.delta_s) / scales.sa_u).sqrt()
    }

    #[inline]
    pub fn reduced_depth(&self, z: T) -> T {
        -z / T::teos10_coefficients().scales.z_u
    }

    /// Vertical reference profile `r₀` at geopotential height `z` [kg/m³].
    #[inline]
    pub fn reference_profile(&self, z: T) -> T {
        reference_profile(self.reduced_depth(z), &T::teos10_coefficients().profile)
    }

    /// Density fit `r′(τ, s, ζ)` [kg/m³], the in-situ density minus `r₀`.
    #[inline]
    pub fn anomaly_fit(&self, theta: T, sa: T, z: T) -> T {
        anomaly_fit(
            self.reduced_temperature(theta),
            self.reduced_salinity(sa),
            self.reduced_depth(z),
            &T::teos10_coefficients().anomaly,
        )
    }

    /// In-situ density `r₀(ζ) + r′(τ, s, ζ)` [kg/m³].
    #[inline]
    pub fn in_situ_density(&self, theta: T, sa: T, z: T) -> T {
        self.reference_profile(z) + self.anomaly_fit(theta, sa, z)
    }

    /// Checks that `sa` is finite and lies where the reduced salinity is real.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::InvalidSalinity`] if `sa` is not finite or `Sᴬ + ΔS < 0`.
    pub fn check_salinity(&self, sa: T) -> Result<(), EosError> {
        if !sa.is_finite() || sa + T::teos10_coefficients().scales.delta_s < T::zero() {
            return Err(EosError::InvalidSalinity {
                absolute_salinity: sa.as_(),
            });
        }
        Ok(())
    }

    /// Like [`Self::check_salinity`], and also rejects the point `Sᴬ = −ΔS`
    /// where the haline sensitivity divides by `s = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::InvalidSalinity`] or [`EosError::SingularSalinity`].
    pub fn check_haline_salinity(&self, sa: T) -> Result<(), EosError> {
        self.check_salinity(sa)?;
        if sa + T::teos10_coefficients().scales.delta_s == T::zero() {
            return Err(EosError::SingularSalinity {
                absolute_salinity: sa.as_(),
            });
        }
        Ok(())
    }
}

impl<T: Precision> DensityPolynomial<T> for Teos10SeawaterPolynomial<T> {
    #[inline]
    fn density_anomaly(&self, theta: T, sa: T, z: T, reference_density: T) -> T {
        self.in_situ_density(theta, sa, z) - reference_density
    }

    #[inline]
    fn density(&self, theta: T, sa: T, z: T, _reference_density: T) -> T {
        self.in_situ_density(theta, sa, z)
    }

    /// `−∂ρ/∂Θ` [kg/m³/K].
    #[inline]
    fn thermal_sensitivity(&self, theta: T, sa: T, z: T) -> T {
        derivative_fit(
            self.reduced_temperature(theta),
            self.reduced_salinity(sa),
            self.reduced_depth(z),
            &T::teos10_coefficients().thermal,
        )
    }

    /// `∂ρ/∂Sᴬ` [kg/m³/(g/kg)]; NaN at the singular point `Sᴬ = −ΔS`.
    #[inline]
    fn haline_sensitivity(&self, theta: T, sa: T, z: T) -> T {
        let s = self.reduced_salinity(sa);
        if s == T::zero() {
            return T::nan();
        }
        let b = derivative_fit(
            self.reduced_temperature(theta),
            s,
            self.reduced_depth(z),
            &T::teos10_coefficients().haline,
        );
        b / s
    }
}

/// `r₀(ζ) = ((((((r05 ζ + r04) ζ + r03) ζ + r02) ζ + r01) ζ + r00) ζ`.
#[inline]
fn reference_profile<T: Precision>(zeta: T, c: &ProfileCoefficients<T>) -> T {
    (((((c.r05 * zeta + c.r04) * zeta + c.r03) * zeta + c.r02) * zeta + c.r01) * zeta + c.r00)
        * zeta
}

/// `r′ = ((r′₃ ζ + r′₂) ζ + r′₁) ζ + r′₀`, each `r′ₖ` Horner in `τ` over
/// Horner-in-`s` coefficients.
#[inline]
fn anomaly_fit<T: Precision>(tau: T, s: T, zeta: T, c: &AnomalyCoefficients<T>) -> T {
    let r3 = {
        let a1 = c.c013;
        let a0 = c.c103 * s + c.c003;
        a1 * tau + a0
    };

    let r2 = {
        let a2 = c.c022;
        let a1 = c.c112 * s + c.c012;
        let a0 = (c.c202 * s + c.c102) * s + c.c002;
        (a2 * tau + a1) * tau + a0
    };

    let r1 = {
        let a4 = c.c041;
        let a3 = c.c131 * s + c.c031;
        let a2 = (c.c221 * s + c.c121) * s + c.c021;
        let a1 = ((c.c311 * s + c.c211) * s + c.c111) * s + c.c011;
        let a0 = (((c.c401 * s + c.c301) * s + c.c201) * s + c.c101) * s + c.c001;
        (((a4 * tau + a3) * tau + a2) * tau + a1) * tau + a0
    };

    let r0 = {
        let a6 = c.c060;
        let a5 = c.c150 * s + c.c050;
        let a4 = (c.c240 * s + c.c140) * s + c.c040;
        let a3 = ((c.c330 * s + c.c230) * s + c.c130) * s + c.c030;
        let a2 = (((c.c420 * s + c.c320) * s + c.c220) * s + c.c120) * s + c.c020;
        let a1 = ((((c.c510 * s + c.c410) * s + c.c310) * s + c.c210) * s + c.c110) * s + c.c010;
        let a0 = (((((c.c600 * s + c.c500) * s + c.c400) * s + c.c300) * s + c.c200) * s
            + c.c100)
            * s
            + c.c000;
        (((((a6 * tau + a5) * tau + a4) * tau + a3) * tau + a2) * tau + a1) * tau + a0
    };

    ((r3 * zeta + r2) * zeta + r1) * zeta + r0
}

/// Shared evaluator of the thermal table `a` and the haline table `b`.
#[inline]
fn derivative_fit<T: Precision>(tau: T, s: T, zeta: T, c: &DerivativeCoefficients<T>) -> T {
    let d3 = c.c003;

    let d2 = {
        let a1 = c.c012;
        let a0 = c.c102 * s + c.c002;
        a1 * tau + a0
    };

    let d1 = {
        let a3 = c.c031;
        let a2 = c.c121 * s + c.c021;
        let a1 = (c.c211 * s + c.c111) * s + c.c011;
        let a0 = ((c.c301 * s + c.c201) * s + c.c101) * s + c.c001;
        ((a3 * tau + a2) * tau + a1) * tau + a0
    };

    let d0 = {
        let a5 = c.c050;
        let a4 = c.c140 * s + c.c040;
        let a3 = (c.c230 * s + c.c130) * s + c.c030;
        let a2 = ((c.c320 * s + c.c220) * s + c.c120) * s + c.c020;
        let a1 = (((c.c410 * s + c.c310) * s + c.c210) * s + c.c110) * s + c.c010;
        let a0 = ((((c.c500 * s + c.c400) * s + c.c300) * s + c.c200) * s + c.c100) * s + c.c000;
        ((((a5 * tau + a4) * tau + a3) * tau + a2) * tau + a1) * tau + a0
    };

    ((d3 * zeta + d2) * zeta + d1) * zeta + d0
}
