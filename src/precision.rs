//! Floating-point precisions supported by the equations of state.
//!
//! Every precision owns its own TEOS-10 coefficient table. The 32-bit table is
//! tabulated independently rather than derived by casting the 64-bit one, so
//! the table is reached through [`Precision::teos10_coefficients`] instead of a
//! conversion.

use core::fmt::{Debug, Display};

use num_traits::{AsPrimitive, Float};
use serde::{Deserialize, Serialize};

use crate::error::EosError;
use crate::polynomials::teos10::coefficients::{TEOS10_F32, TEOS10_F64, Teos10Coefficients};

/// Runtime selector for the working precision, used by configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatPrecision {
    #[serde(rename = "f32", alias = "Float32")]
    F32,
    #[default]
    #[serde(rename = "f64", alias = "Float64")]
    F64,
}

impl FloatPrecision {
    pub fn name(self) -> &'static str {
        match self {
            FloatPrecision::F32 => f32::NAME,
            FloatPrecision::F64 => f64::NAME,
        }
    }
}

impl Display for FloatPrecision {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for FloatPrecision {
    type Err = EosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f32" | "Float32" => Ok(FloatPrecision::F32),
            "f64" | "Float64" => Ok(FloatPrecision::F64),
            other => Err(EosError::UnknownPrecision {
                name: other.into(),
            }),
        }
    }
}

/// A floating-point type an equation of state can be evaluated in.
pub trait Precision:
    Float + Debug + Display + Default + Send + Sync + 'static + AsPrimitive<f64>
{
    /// Short type name used in diagnostics (`"f32"`, `"f64"`).
    const NAME: &'static str;
    const KIND: FloatPrecision;

    /// The TEOS-10 coefficient table tabulated for this precision.
    fn teos10_coefficients() -> &'static Teos10Coefficients<Self>;

    /// Rounds an `f64` literal to this precision. Out-of-range values saturate
    /// to infinity; [`convert`] turns that into an error.
    fn from_literal(value: f64) -> Self;
}

impl Precision for f32 {
    const NAME: &'static str = "f32";
    const KIND: FloatPrecision = FloatPrecision::F32;

    #[inline]
    fn teos10_coefficients() -> &'static Teos10Coefficients<Self> {
        &TEOS10_F32
    }

    #[inline]
    fn from_literal(value: f64) -> Self {
        value as f32
    }
}

impl Precision for f64 {
    const NAME: &'static str = "f64";
    const KIND: FloatPrecision = FloatPrecision::F64;

    #[inline]
    fn teos10_coefficients() -> &'static Teos10Coefficients<Self> {
        &TEOS10_F64
    }

    #[inline]
    fn from_literal(value: f64) -> Self {
        value
    }
}

/// Converts `value` to precision `U`, failing when a finite value does not fit.
///
/// NaN and infinities carry over unchanged.
pub fn convert<S, U>(value: S) -> Result<U, EosError>
where
    S: Precision,
    U: Precision,
{
    let wide: f64 = value.as_();
    let narrowed = U::from_literal(wide);
    if wide.is_finite() && !narrowed.is_finite() {
        return Err(EosError::PrecisionMismatch {
            value: wide,
            precision: U::NAME,
        });
    }
    Ok(narrowed)
}
