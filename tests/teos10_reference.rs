use approx::assert_relative_eq;
use seawater_polynomials::{EosError, EquationOfState, Teos10SeawaterPolynomial};

const THETA: f64 = 10.0;
const SA: f64 = 30.0;
const Z: f64 = -1000.0;

#[test]
fn f64_reference_point() {
    let p = Teos10SeawaterPolynomial::<f64>::new();
    let eos = EquationOfState::<f64>::teos10();

    assert_relative_eq!(p.reference_profile(Z), 4.597630350804921, epsilon = 1e-9);
    assert_relative_eq!(p.anomaly_fit(THETA, SA, Z), 1022.8537708207182, epsilon = 1e-8);
    assert_relative_eq!(eos.density(THETA, SA, Z), 1027.451401171523, epsilon = 1e-8);
    assert_relative_eq!(
        eos.thermal_sensitivity(THETA, SA, Z),
        0.1796462813299649,
        epsilon = 1e-10
    );
    assert_relative_eq!(
        eos.haline_sensitivity(THETA, SA, Z),
        0.7655553680784828,
        epsilon = 1e-10
    );
}

#[test]
fn f32_reference_point() {
    let eos = EquationOfState::<f32>::teos10();

    assert_relative_eq!(eos.density(10.0, 30.0, -1000.0), 1027.4514_f32, epsilon = 5e-3);
    assert_relative_eq!(eos.thermal_sensitivity(10.0, 30.0, -1000.0), 0.179_646_28_f32, epsilon = 1e-5);
    assert_relative_eq!(eos.haline_sensitivity(10.0, 30.0, -1000.0), 0.765_555_4_f32, epsilon = 1e-4);
}

#[test]
fn precisions_agree_to_single_precision() {
    let wide = EquationOfState::<f64>::teos10();
    let narrow = EquationOfState::<f32>::teos10();

    for &(theta, sa, z) in &[(-1.5, 34.9, -4500.0), (28.0, 36.5, 0.0), (4.0, 5.0, -50.0)] {
        let rho64 = wide.density(theta, sa, z);
        let rho32 = narrow.density(theta as f32, sa as f32, z as f32);
        assert_relative_eq!(f64::from(rho32), rho64, max_relative = 2e-6);
    }
}

#[test]
fn reduced_coordinates_are_public() {
    let p = Teos10SeawaterPolynomial::<f64>::new();
    assert_relative_eq!(p.reduced_temperature(THETA), 0.25);
    assert_relative_eq!(p.reduced_depth(Z), 0.1);
    assert_relative_eq!(
        p.reduced_salinity(SA),
        ((SA + 32.0) / (40.0 * 35.16504 / 35.0)).sqrt()
    );
}

#[test]
fn haline_sensitivity_is_singular_at_zero_reduced_salinity() {
    let eos = EquationOfState::<f64>::teos10();
    assert!(eos.haline_sensitivity(10.0, -32.0, -100.0).is_nan());
    assert!(eos.density(10.0, -40.0, -100.0).is_nan());
    assert_eq!(
        eos.try_haline_sensitivity(10.0, -32.0, -100.0),
        Err(EosError::SingularSalinity {
            absolute_salinity: -32.0
        })
    );
    assert_eq!(
        eos.try_density(10.0, -40.0, -100.0),
        Err(EosError::InvalidSalinity {
            absolute_salinity: -40.0
        })
    );
}

#[test]
fn rebinding_selects_the_single_precision_table() {
    let wide = EquationOfState::<f64>::teos10();
    let narrow = wide.with_precision::<f32>();
    assert_eq!(narrow, Ok(EquationOfState::<f32>::teos10()));

    let narrow = narrow.unwrap();
    assert_eq!(narrow.reference_density(), 1020.0_f32);
    assert_eq!(
        narrow.density(10.0, 30.0, -1000.0),
        EquationOfState::<f32>::teos10().density(10.0, 30.0, -1000.0)
    );
    assert_eq!(narrow.with_precision::<f64>(), Ok(wide));
}
