#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod adapters;
pub mod eos;
pub mod error;
pub mod models;
pub mod polynomials;
pub mod precision;

#[cfg(feature = "cli")]
pub use crate::error::AppError;
pub use crate::eos::{AnyEquationOfState, EquationOfState, EvaluationSummary, make_equation_of_state};
pub use crate::error::EosError;
pub use crate::models::{EosConfig, Family};
pub use crate::polynomials::roquet::CoefficientSet;
pub use crate::polynomials::second_order::SecondOrderSeawaterPolynomial;
pub use crate::polynomials::teos10::Teos10SeawaterPolynomial;
pub use crate::polynomials::{DensityPolynomial, SeawaterPolynomial};
pub use crate::precision::{FloatPrecision, Precision};
