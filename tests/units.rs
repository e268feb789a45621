//! 유량/압력/점도 단위 변환 회귀 테스트.
use approx::assert_relative_eq;
use pump_hydraulics_toolbox::{
    conversion,
    quantity::QuantityKind,
    units::{
        convert_flow, convert_pressure, convert_viscosity, flow, FlowUnit, PressureUnit,
        ViscosityUnit,
    },
    HydraulicsError,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn m3h_to_litres_per_second() {
    assert_close(flow::m3h_to_ls(36.0), 10.0, 1e-5);
    assert_close(flow::ls_to_m3h(10.0), 36.0, 1e-5);
}

#[test]
fn m3h_to_gpm_factor() {
    assert_close(flow::m3h_to_gpm(1.0), 4.40287, 1e-4);
    assert_relative_eq!(flow::gpm_to_m3h(flow::m3h_to_gpm(123.4)), 123.4, max_relative = 1e-5);
}

#[test]
fn same_unit_is_identity() {
    for unit in FlowUnit::ALL {
        assert_eq!(convert_flow(42.5, unit, unit).unwrap(), 42.5);
    }
    for unit in PressureUnit::ALL {
        assert_eq!(convert_pressure(-0.3, unit, unit).unwrap(), -0.3);
    }
}

#[test]
fn flow_round_trip_all_pairs() {
    for a in FlowUnit::ALL {
        for b in FlowUnit::ALL {
            let there = convert_flow(250.0, a, b).unwrap();
            let back = convert_flow(there, b, a).unwrap();
            assert_relative_eq!(back, 250.0, max_relative = 1e-5);
        }
    }
}

#[test]
fn pressure_conversions() {
    let bar = |to: PressureUnit| convert_pressure(1.0, PressureUnit::Bar, to).unwrap();
    assert_close(bar(PressureUnit::Psi), 14.5038, 1e-4);
    assert_close(bar(PressureUnit::KiloPascal), 100.0, 1e-9);
    assert_close(
        convert_pressure(1.0, PressureUnit::MegaPascal, PressureUnit::Bar).unwrap(),
        10.0,
        1e-9,
    );
    assert_close(
        convert_pressure(1.0, PressureUnit::Bar, PressureUnit::MeterWaterColumn).unwrap(),
        10.197,
        1e-9,
    );
    assert_close(
        convert_pressure(1.0, PressureUnit::Psi, PressureUnit::KiloPascal).unwrap(),
        6.89476,
        1e-3,
    );
}

#[test]
fn viscosity_uses_specific_gravity_only_across_families() {
    use ViscosityUnit::*;

    let cst = convert_viscosity(9.0, Centipoise, Centistokes, 0.9).unwrap();
    assert_close(cst, 10.0, 1e-9);

    let pas = convert_viscosity(1.0, Centipoise, PascalSecond, 0.0).unwrap();
    assert_close(pas, 0.001, 1e-12);

    let m2s = convert_viscosity(1.0, Centistokes, SquareMeterPerSecond, 0.0).unwrap();
    assert_close(m2s, 1e-6, 1e-15);

    let err = convert_viscosity(1.0, Centipoise, Centistokes, 0.0).unwrap_err();
    assert!(err.is_domain_range());
}

#[test]
fn string_dispatch_and_unknown_units() {
    let gpm = conversion::convert(QuantityKind::Flow, 100.0, "m3/h", "gpm", 1.0).unwrap();
    assert_close(gpm, 440.287, 1e-2);

    let mwc = conversion::convert(QuantityKind::Pressure, 2.0, "bar", "mWC", 1.0).unwrap();
    assert_close(mwc, 20.394, 1e-9);

    let err = conversion::convert(QuantityKind::Flow, 1.0, "furlong/fortnight", "m3/h", 1.0)
        .unwrap_err();
    assert!(matches!(err, HydraulicsError::Unsupported(_)));
    assert!(err.is_domain_range());
}

#[test]
fn non_finite_values_are_rejected() {
    let err = convert_flow(f64::NAN, FlowUnit::Gpm, FlowUnit::M3PerHour).unwrap_err();
    assert!(matches!(err, HydraulicsError::DomainRange { .. }));
    assert!(convert_pressure(f64::INFINITY, PressureUnit::Bar, PressureUnit::Psi).is_err());
}

#[test]
fn unit_symbols_parse_back() {
    for unit in FlowUnit::ALL {
        assert_eq!(unit.symbol().parse::<FlowUnit>().unwrap(), unit);
    }
    for unit in PressureUnit::ALL {
        assert_eq!(unit.to_string().parse::<PressureUnit>().unwrap(), unit);
    }
    for unit in ViscosityUnit::ALL {
        assert_eq!(unit.to_string().parse::<ViscosityUnit>().unwrap(), unit);
    }
    assert_eq!("Viscosity".parse::<QuantityKind>().unwrap(), QuantityKind::Viscosity);
}

#[test]
fn megapascal_symbol_is_case_sensitive() {
    assert_eq!("MPa".parse::<PressureUnit>().unwrap(), PressureUnit::MegaPascal);
    assert_eq!(" megapascal ".parse::<PressureUnit>().unwrap(), PressureUnit::MegaPascal);
    assert!(matches!(
        "mPa".parse::<PressureUnit>(),
        Err(HydraulicsError::Unsupported(_))
    ));
    assert!("mpa".parse::<PressureUnit>().is_err());
    assert_eq!("KPA".parse::<PressureUnit>().unwrap(), PressureUnit::KiloPascal);
}
