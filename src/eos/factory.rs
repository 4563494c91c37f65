//! Building equations of state from names and configuration.

use core::fmt;

use serde::Serialize;

use crate::error::EosError;
use crate::models::{EosConfig, Family};
use crate::polynomials::roquet::CoefficientSet;
use crate::polynomials::teos10::Teos10SeawaterPolynomial;
use crate::precision::{FloatPrecision, Precision, convert};

use super::EquationOfState;

/// Builds an equation of state in precision `T`.
///
/// `coefficient_set` defaults to [`CoefficientSet::Linear`] for the Roquet
/// family and must be absent for TEOS-10. `reference_density` defaults to the
/// family's published value.
///
/// # Errors
///
/// - [`EosError::CoefficientSetNotApplicable`] when a set is given for TEOS-10.
/// - [`EosError::PrecisionMismatch`] when `reference_density` does not fit in `T`.
pub fn make_equation_of_state<T: Precision>(
    family: Family,
    coefficient_set: Option<CoefficientSet>,
    reference_density: Option<f64>,
) -> Result<EquationOfState<T>, EosError> {
    let reference_density: T =
        convert(reference_density.unwrap_or_else(|| family.default_reference_density()))?;

    let eos = match family {
        Family::Roquet => {
            let set = coefficient_set.unwrap_or_default();
            tracing::debug!(coefficient_set = %set, precision = T::NAME, "building second-order equation of state");
            EquationOfState::new(set.polynomial::<T>(), reference_density)
        }
        Family::Teos10 => {
            if coefficient_set.is_some() {
                return Err(EosError::CoefficientSetNotApplicable { family });
            }
            tracing::debug!(precision = T::NAME, "building TEOS-10 equation of state");
            EquationOfState::new(Teos10SeawaterPolynomial::<T>::new(), reference_density)
        }
    };
    Ok(eos)
}

/// An equation of state whose precision was chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AnyEquationOfState {
    F32(EquationOfState<f32>),
    F64(EquationOfState<f64>),
}

impl AnyEquationOfState {
    pub fn precision(&self) -> FloatPrecision {
        match self {
            AnyEquationOfState::F32(_) => FloatPrecision::F32,
            AnyEquationOfState::F64(_) => FloatPrecision::F64,
        }
    }

    pub fn family(&self) -> Family {
        match self {
            AnyEquationOfState::F32(eos) => eos.family(),
            AnyEquationOfState::F64(eos) => eos.family(),
        }
    }
}

impl fmt::Display for AnyEquationOfState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyEquationOfState::F32(eos) => write!(f, "{eos}"),
            AnyEquationOfState::F64(eos) => write!(f, "{eos}"),
        }
    }
}

impl From<EquationOfState<f32>> for AnyEquationOfState {
    fn from(eos: EquationOfState<f32>) -> Self {
        AnyEquationOfState::F32(eos)
    }
}

impl From<EquationOfState<f64>> for AnyEquationOfState {
    fn from(eos: EquationOfState<f64>) -> Self {
        AnyEquationOfState::F64(eos)
    }
}

impl EosConfig {
    /// Builds the configured equation of state in the configured precision.
    ///
    /// # Errors
    ///
    /// See [`make_equation_of_state`].
    pub fn build(&self) -> Result<AnyEquationOfState, EosError> {
        Ok(match self.precision {
            FloatPrecision::F32 => make_equation_of_state::<f32>(
                self.family,
                self.coefficient_set,
                self.reference_density,
            )?
            .into(),
            FloatPrecision::F64 => make_equation_of_state::<f64>(
                self.family,
                self.coefficient_set,
                self.reference_density,
            )?
            .into(),
        })
    }
}
