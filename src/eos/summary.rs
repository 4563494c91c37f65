use alloc::string::{String, ToString};

use serde::Serialize;

use crate::error::EosError;
use crate::models::Family;
use crate::precision::{FloatPrecision, Precision, convert};

use super::{AnyEquationOfState, EquationOfState};

/// Every quantity of an equation of state at one `(Θ, Sᴬ, Z)` point.
///
/// Values are evaluated in the equation of state's own precision and widened
/// to `f64` for reporting.
///
/// - `density`, `density_anomaly`, `reference_density`: kg/m³
/// - `thermal_sensitivity`: kg/m³/K, `thermal_expansion`: 1/K
/// - `haline_sensitivity`: kg/m³/(g/kg), `haline_contraction`: 1/(g/kg)
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EvaluationSummary {
    pub family: Family,
    pub precision: FloatPrecision,
    pub polynomial: String,
    pub theta: f64,
    pub salinity: f64,
    pub z: f64,
    pub reference_density: f64,
    pub density: f64,
    pub density_anomaly: f64,
    pub thermal_sensitivity: f64,
    pub thermal_expansion: f64,
    pub haline_sensitivity: f64,
    pub haline_contraction: f64,
}

impl<T: Precision> EquationOfState<T> {
    pub fn summarize(&self, theta: T, sa: T, z: T) -> EvaluationSummary {
        EvaluationSummary {
            family: self.family(),
            precision: T::KIND,
            polynomial: self.seawater_polynomial().to_string(),
            theta: theta.as_(),
            salinity: sa.as_(),
            z: z.as_(),
            reference_density: self.reference_density().as_(),
            density: self.density(theta, sa, z).as_(),
            density_anomaly: self.density_anomaly(theta, sa, z).as_(),
            thermal_sensitivity: self.thermal_sensitivity(theta, sa, z).as_(),
            thermal_expansion: self.thermal_expansion(theta, sa, z).as_(),
            haline_sensitivity: self.haline_sensitivity(theta, sa, z).as_(),
            haline_contraction: self.haline_contraction(theta, sa, z).as_(),
        }
    }
}

impl AnyEquationOfState {
    /// Evaluates a point given in `f64`, converting it to the working precision.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::PrecisionMismatch`] if a coordinate does not fit in
    /// the working precision.
    pub fn summarize(&self, theta: f64, sa: f64, z: f64) -> Result<EvaluationSummary, EosError> {
        Ok(match self {
            AnyEquationOfState::F32(eos) => eos.summarize(convert(theta)?, convert(sa)?, convert(z)?),
            AnyEquationOfState::F64(eos) => eos.summarize(theta, sa, z),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::polynomials::roquet::CoefficientSet;

    #[test]
    fn summary_reports_teos10_reference_point() {
        let summary = EquationOfState::<f64>::teos10().summarize(10.0, 30.0, -1000.0);
        assert_eq!(summary.family, Family::Teos10);
        assert_eq!(summary.precision, FloatPrecision::F64);
        assert_relative_eq!(summary.density, 1027.451401171523, epsilon = 1e-8);
        assert_relative_eq!(summary.density_anomaly, 7.451401171523, epsilon = 1e-8);
        assert_relative_eq!(summary.thermal_expansion, summary.thermal_sensitivity / 1020.0);
        assert_eq!(summary.polynomial, "Teos10SeawaterPolynomial<f64>");
    }

    #[test]
    fn f32_summary_is_evaluated_in_f32() {
        let any: AnyEquationOfState = EquationOfState::<f32>::roquet(CoefficientSet::Linear).into();
        let summary = any.summarize(10.0, 35.0, 0.0).unwrap();
        let expected = 1024.6_f32 + (0.7718_f32 * 35.0 - 0.1775_f32 * 10.0);
        assert_eq!(summary.density, f64::from(expected));
        assert_eq!(summary.precision, FloatPrecision::F32);
    }

    #[test]
    fn f32_summary_rejects_unrepresentable_point() {
        let any: AnyEquationOfState = EquationOfState::<f32>::teos10().into();
        assert!(matches!(
            any.summarize(1.0e300, 35.0, 0.0),
            Err(EosError::PrecisionMismatch { .. })
        ));
    }
}
