//! 밸브 Cv 및 조절밸브 사이징 테스트.
use approx::assert_relative_eq;
use pump_hydraulics_toolbox::units::{flow::m3h_to_gpm, pressure::bar_to_psi};
use pump_hydraulics_toolbox::valve::{
    calculate_cv_gas, calculate_cv_liquid, calculate_flow_from_cv,
    calculate_pressure_drop_from_cv, cv_from_kv, kv_from_cv, size_control_valve, CvGasInput,
    CvLiquidInput, GasFlowRegime, ValveSizingInput, STANDARD_VALVE_CVS,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn liquid_cv_basic() {
    let res = calculate_cv_liquid(&CvLiquidInput::new(100.0, 25.0)).unwrap();
    assert_close(res.cv, 20.0, 1e-12);

    let heavy = calculate_cv_liquid(&CvLiquidInput {
        specific_gravity: 1.44,
        ..CvLiquidInput::new(100.0, 25.0)
    })
    .unwrap();
    assert_close(heavy.cv, 24.0, 1e-12);
}

#[test]
fn liquid_cv_rejects_zero_pressure_drop() {
    let err = calculate_cv_liquid(&CvLiquidInput::new(100.0, 0.0)).unwrap_err();
    assert!(err.is_domain_range());
    assert!(calculate_cv_liquid(&CvLiquidInput {
        specific_gravity: 0.0,
        ..CvLiquidInput::new(100.0, 25.0)
    })
    .is_err());
}

#[test]
fn flow_and_pressure_drop_are_inverse_of_cv() {
    assert_close(calculate_flow_from_cv(20.0, 25.0, 1.0).unwrap(), 100.0, 1e-12);
    assert_close(calculate_pressure_drop_from_cv(20.0, 100.0, 1.0).unwrap(), 25.0, 1e-12);
    assert_eq!(calculate_flow_from_cv(20.0, 0.0, 1.0).unwrap(), 0.0);
    assert!(calculate_flow_from_cv(20.0, -1.0, 1.0).is_err());
    assert!(calculate_pressure_drop_from_cv(0.0, 100.0, 1.0).is_err());
}

#[test]
fn kv_cv_factor() {
    assert_close(kv_from_cv(20.0), 17.3, 1e-12);
    assert_relative_eq!(cv_from_kv(kv_from_cv(37.5)), 37.5, max_relative = 1e-12);
}

#[test]
fn gas_cv_subcritical() {
    let input = CvGasInput::new(10_000.0, 100.0, 80.0, 60.0);
    let res = calculate_cv_gas(&input).unwrap();
    assert_eq!(res.regime, GasFlowRegime::Subcritical);

    let x: f64 = 0.2;
    let y = 1.0 - x / (3.0 * 0.72);
    let expected = 10_000.0 / (1360.0 * 100.0 * y * (x / 520.0).sqrt());
    assert_relative_eq!(res.cv, expected, max_relative = 1e-12);
    assert_close(res.cv, 4.13, 0.01);
    assert_close(res.expansion_factor, y, 1e-12);
}

#[test]
fn gas_cv_critical_caps_pressure_ratio() {
    let res = calculate_cv_gas(&CvGasInput::new(10_000.0, 100.0, 10.0, 60.0)).unwrap();
    assert_eq!(res.regime, GasFlowRegime::Critical);
    assert_close(res.expansion_factor, 2.0 / 3.0, 1e-12);
    assert_close(res.pressure_drop_ratio, 0.72, 1e-12);

    // 임계 이후에는 하류 압력을 더 낮춰도 Cv가 같다.
    let lower = calculate_cv_gas(&CvGasInput::new(10_000.0, 100.0, 5.0, 60.0)).unwrap();
    assert_relative_eq!(res.cv, lower.cv, max_relative = 1e-12);
}

#[test]
fn gas_cv_requires_pressure_drop() {
    assert!(calculate_cv_gas(&CvGasInput::new(10_000.0, 100.0, 100.0, 60.0)).is_err());
    assert!(calculate_cv_gas(&CvGasInput::new(10_000.0, 100.0, 120.0, 60.0)).is_err());
    assert!(calculate_cv_gas(&CvGasInput::new(10_000.0, 100.0, 80.0, -470.0)).is_err());
}

#[test]
fn control_valve_picks_next_standard_size() {
    let res = size_control_valve(&ValveSizingInput::new(50.0, 6.0, 4.0)).unwrap();
    let expected_cv = m3h_to_gpm(50.0) * (1.0 / bar_to_psi(2.0)).sqrt() * 1.25;
    assert_relative_eq!(res.required_cv, expected_cv, max_relative = 1e-12);
    assert_close(res.required_cv, 51.1, 0.1);
    assert_eq!(res.recommended_valve.size, "DN50 (2\")");
    assert!(!res.exceeds_largest_size);
    assert_close(res.cavitation_index, 2.0 / (6.0 - 0.023), 1e-12);
    assert!(res.cavitation_warning.is_none());
}

#[test]
fn control_valve_cavitation_warning() {
    let res = size_control_valve(&ValveSizingInput::new(20.0, 3.0, 0.5)).unwrap();
    assert!(res.cavitation_index > 0.81);
    let warning = res.cavitation_warning.expect("cavitation warning");
    assert!(warning.contains("Cavitation likely"));
}

#[test]
fn control_valve_saturates_at_largest_size() {
    let res = size_control_valve(&ValveSizingInput::new(5000.0, 2.0, 1.5)).unwrap();
    assert!(res.exceeds_largest_size);
    assert_eq!(res.recommended_valve, STANDARD_VALVE_CVS[STANDARD_VALVE_CVS.len() - 1]);
}

#[test]
fn control_valve_rejects_reversed_pressures() {
    assert!(size_control_valve(&ValveSizingInput::new(50.0, 4.0, 6.0))
        .unwrap_err()
        .is_domain_range());
    assert!(size_control_valve(&ValveSizingInput::new(0.0, 6.0, 4.0)).is_err());
}

#[test]
fn standard_valve_table_is_ascending() {
    assert!(STANDARD_VALVE_CVS.windows(2).all(|w| w[0].cv < w[1].cv));
}
