use pump_hydraulics_toolbox::pump::sizing::{
    estimate_pump_requirements, pump_sizing_summary, NpshStatus, PumpRequirementsInput,
    PumpSizingInput, ViscosityAdvice,
};
use pump_hydraulics_toolbox::pump::PumpTypeByNs;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn quick_requirements_estimate() {
    let req = estimate_pump_requirements(&PumpRequirementsInput::new(100.0, 30.0)).unwrap();
    assert_close(req.hydraulic_power_kw, 8.175, 1e-9);
    assert_close(req.estimated_shaft_power_kw, 8.175 / 0.7, 1e-9);
    // 11.68 kW * 1.15 = 13.43 kW → 15 kW
    assert_eq!(req.recommended_motor_kw, 15.0);
    assert!(!req.motor_saturated);
    assert_eq!(req.npsh_required_m, 3.0);
    assert_close(req.min_recommended_flow_m3h, 60.0, 1e-12);
    assert_close(req.max_recommended_flow_m3h, 120.0, 1e-12);
}

#[test]
fn summary_uses_type_efficiency() {
    let summary = pump_sizing_summary(&PumpSizingInput::new(100.0, 30.0)).unwrap();
    // Ns ≈ 18.9 → 저Ns 반경류, 대표 효율 67.5 %
    assert_eq!(summary.pump_type.pump_type, PumpTypeByNs::RadialLowNs);
    assert_close(summary.estimated_efficiency_percent, 67.5, 1e-12);
    assert_close(summary.estimated_shaft_power_kw, 8.175 / 0.675, 1e-9);
    assert_eq!(summary.recommended_motor_kw, 15.0);
    assert_eq!(summary.npsh_status, None);
    assert_eq!(summary.viscosity_advice, None);
}

#[test]
fn summary_npsh_status_bands() {
    let status = |npsha: f64| {
        pump_sizing_summary(&PumpSizingInput {
            npsh_available_m: Some(npsha),
            ..PumpSizingInput::new(100.0, 30.0)
        })
        .unwrap()
        .npsh_status
        .unwrap()
    };
    // 추정 NPSHr = 2 + 100/100 = 3 m
    assert!(matches!(status(5.0), NpshStatus::Ok { .. }));
    assert!(matches!(status(3.5), NpshStatus::Marginal { .. }));
    let risk = status(2.0);
    assert!(matches!(risk, NpshStatus::CavitationRisk { .. }));
    assert_close(risk.margin_m(), -1.0, 1e-12);
}

#[test]
fn summary_viscosity_advice() {
    let advice = |cp: f64| {
        pump_sizing_summary(&PumpSizingInput {
            viscosity_cp: Some(cp),
            ..PumpSizingInput::new(50.0, 20.0)
        })
        .unwrap()
        .viscosity_advice
    };
    assert_eq!(advice(5.0), None);
    assert_eq!(advice(50.0), Some(ViscosityAdvice::Moderate));
    assert_eq!(advice(300.0), Some(ViscosityAdvice::Elevated));
    let pd = advice(800.0).unwrap();
    assert_eq!(pd, ViscosityAdvice::PositiveDisplacement);
    assert!(pd.message().contains("positive displacement"));
}

#[test]
fn summary_rejects_zero_flow() {
    assert!(pump_sizing_summary(&PumpSizingInput::new(0.0, 30.0)).is_err());
    let bad_eff = PumpRequirementsInput {
        estimated_efficiency_percent: 0.0,
        ..PumpRequirementsInput::new(100.0, 30.0)
    };
    assert!(estimate_pump_requirements(&bad_eff).is_err());
}

#[test]
fn large_duty_saturates_motor() {
    let req = estimate_pump_requirements(&PumpRequirementsInput::new(5000.0, 80.0)).unwrap();
    assert!(req.motor_saturated);
    assert_eq!(req.recommended_motor_kw, 1000.0);
}

#[test]
fn non_finite_optional_inputs_are_rejected() {
    let nan_npsha = PumpSizingInput {
        npsh_available_m: Some(f64::NAN),
        ..PumpSizingInput::new(100.0, 30.0)
    };
    assert!(pump_sizing_summary(&nan_npsha).unwrap_err().is_domain_range());

    let nan_viscosity = PumpSizingInput {
        viscosity_cp: Some(f64::NAN),
        ..PumpSizingInput::new(100.0, 30.0)
    };
    assert!(pump_sizing_summary(&nan_viscosity).unwrap_err().is_domain_range());

    let inf_npshr = PumpRequirementsInput {
        estimated_npsh_required_m: f64::INFINITY,
        ..PumpRequirementsInput::new(100.0, 30.0)
    };
    assert!(estimate_pump_requirements(&inf_npshr).unwrap_err().is_domain_range());
}
