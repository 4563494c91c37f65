use approx::assert_relative_eq;
use seawater_polynomials::{
    AnyEquationOfState, CoefficientSet, EosConfig, EosError, EquationOfState, Family, FloatPrecision,
    make_equation_of_state,
};

#[test]
fn every_set_vanishes_at_the_origin() {
    for set in CoefficientSet::ALL {
        let eos = EquationOfState::<f64>::roquet(set);
        assert_eq!(eos.density_anomaly(0.0, 0.0, 0.0), 0.0, "{set}");
        assert_eq!(eos.density(0.0, 0.0, 0.0), 1024.6, "{set}");

        let eos = EquationOfState::<f32>::roquet(set);
        assert_eq!(eos.density_anomaly(0.0, 0.0, 0.0), 0.0, "{set}");
    }
}

#[test]
fn second_order_sensitivities_at_the_origin() {
    let eos = EquationOfState::<f64>::roquet(CoefficientSet::SecondOrder);
    assert_eq!(eos.haline_sensitivity(0.0, 0.0, 0.0), 0.8078);
    assert_eq!(eos.thermal_sensitivity(0.0, 0.0, 0.0), 0.0182);
    assert_relative_eq!(eos.haline_contraction(0.0, 0.0, 0.0), 0.8078 / 1024.6);
}

#[test]
fn second_order_rendering() {
    let eos = EquationOfState::<f64>::roquet(CoefficientSet::SecondOrder);
    assert_eq!(
        eos.seawater_polynomial().to_string(),
        "ρ' = 0.8078 Sᴬ + 0.0182 Θ - 0.004937 Θ² - 2.4677e-5 Θ Z - 0.0001115 Sᴬ² - 8.241e-6 Sᴬ Z - 0.002446 Sᴬ Θ"
    );
}

#[test]
fn cabbeling_makes_mixed_water_denser() {
    let eos = EquationOfState::<f64>::roquet(CoefficientSet::Cabbeling);
    let cold = eos.density(2.0, 35.0, 0.0);
    let warm = eos.density(18.0, 35.0, 0.0);
    let mixed = eos.density(10.0, 35.0, 0.0);
    assert!(mixed > 0.5 * (cold + warm));
}

#[test]
fn thermobaricity_reduces_thermal_sensitivity_with_depth() {
    let eos = EquationOfState::<f64>::roquet(CoefficientSet::CabbelingThermobaricity);
    let surface = eos.thermal_sensitivity(10.0, 35.0, 0.0);
    let deep = eos.thermal_sensitivity(10.0, 35.0, -3000.0);
    assert_relative_eq!(surface - deep, 2.5681e-5 * 3000.0, max_relative = 1e-9);
}

#[test]
fn rebinding_round_trips_exactly_through_f64() {
    for set in CoefficientSet::ALL {
        let narrow = EquationOfState::<f32>::roquet(set);
        let back = narrow
            .with_precision::<f64>()
            .and_then(|wide| wide.with_precision::<f32>())
            .unwrap();
        assert_eq!(back, narrow);
        assert_eq!(narrow.with_precision::<f32>().unwrap(), narrow);
    }
}

#[test]
fn rebinding_to_f32_stays_close() {
    let wide = EquationOfState::<f64>::roquet(CoefficientSet::SecondOrder);
    let narrow = wide.with_precision::<f32>().unwrap();
    assert_eq!(narrow, EquationOfState::<f32>::roquet(CoefficientSet::SecondOrder));
    assert_relative_eq!(
        f64::from(narrow.density(12.0, 35.0, -800.0)),
        wide.density(12.0, 35.0, -800.0),
        max_relative = 1e-6
    );
}

#[test]
fn factory_and_config_agree() {
    let from_factory =
        make_equation_of_state::<f64>(Family::Roquet, Some(CoefficientSet::Freezing), Some(1025.0))
            .unwrap();
    let from_config = EosConfig::roquet(CoefficientSet::Freezing)
        .with_reference_density(1025.0)
        .with_precision(FloatPrecision::F64)
        .build()
        .unwrap();
    assert_eq!(from_config, AnyEquationOfState::F64(from_factory));
}

#[test]
fn unknown_coefficient_set_is_rejected() {
    assert_eq!(
        "Cubic".parse::<CoefficientSet>(),
        Err(EosError::UnknownCoefficientSet {
            name: "Cubic".into()
        })
    );
}

#[test]
fn equation_of_state_is_shareable_across_threads() {
    let eos = EquationOfState::<f64>::roquet(CoefficientSet::SecondOrder);
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || eos.density(f64::from(i), 35.0, -100.0)))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), eos.density(i as f64, 35.0, -100.0));
    }
}
