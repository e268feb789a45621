//! 펌프 곡선 보간, 시스템 곡선, 운전점, 운전 범위 점검.
use std::path::Path;

use pump_hydraulics_toolbox::pump::operating_range::{
    validate_operating_point, IssueCategory, OverallStatus, Severity,
};
use pump_hydraulics_toolbox::pump::{
    calculate_system_curve, find_operating_point, interpolate_pump_curve,
    operating_point_for_system, scale_pump_curve_to_speed, BestEfficiencyPoint, PumpCurve,
    PumpCurvePoint, SystemCurveConfig, SystemCurveOptions, SystemCurvePoint,
};
use pump_hydraulics_toolbox::{ui_cli, HydraulicsError};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn system_point(flow_m3h: f64, head_m: f64) -> SystemCurvePoint {
    SystemCurvePoint { flow_m3h, head_m }
}

fn sample_curve() -> PumpCurve {
    let rows = [
        (0.0, 52.0, 0.0, 7.0, 1.5),
        (20.0, 51.0, 42.0, 7.8, 1.6),
        (40.0, 49.0, 62.0, 9.0, 1.9),
        (60.0, 45.5, 74.0, 10.4, 2.4),
        (80.0, 40.5, 78.0, 11.7, 3.1),
        (100.0, 34.0, 74.0, 12.8, 4.0),
        (120.0, 26.0, 64.0, 13.6, 5.2),
    ];
    PumpCurve {
        pump_model: "ES 80-200".to_string(),
        impeller_diameter_mm: 209.0,
        speed_rpm: 1450.0,
        points: rows
            .iter()
            .map(|&(q, h, eff, kw, npshr)| PumpCurvePoint {
                power_kw: Some(kw),
                ..PumpCurvePoint::new(q, h)
                    .with_efficiency(eff)
                    .with_npsh_required(npshr)
            })
            .collect(),
        shutoff_head_m: 52.0,
        best_efficiency_point: BestEfficiencyPoint {
            flow_m3h: 80.0,
            head_m: 40.5,
            efficiency_percent: 78.0,
        },
        min_continuous_flow_m3h: 24.0,
        max_flow_m3h: 120.0,
    }
}

#[test]
fn curve_file_matches_fixture() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("curves/sample_curve.toml");
    let loaded = ui_cli::load_curve(&path).expect("sample curve");
    assert_eq!(loaded, sample_curve());
}

#[test]
fn interpolates_between_points() {
    let s = interpolate_pump_curve(&sample_curve(), 50.0).unwrap().unwrap();
    assert_close(s.head_m, 47.25, 1e-12);
    assert_close(s.efficiency_percent.unwrap(), 68.0, 1e-12);
    assert_close(s.power_kw.unwrap(), 9.7, 1e-12);
    assert_close(s.npsh_required_m.unwrap(), 2.15, 1e-12);
}

#[test]
fn exact_points_returned_unchanged() {
    let curve = sample_curve();
    for p in &curve.points {
        let s = interpolate_pump_curve(&curve, p.flow_m3h).unwrap().unwrap();
        assert_eq!(s.head_m, p.head_m);
        assert_eq!(s.efficiency_percent, p.efficiency_percent);
    }
}

#[test]
fn outside_flow_range_is_none() {
    let curve = sample_curve();
    assert_eq!(interpolate_pump_curve(&curve, -1.0).unwrap(), None);
    assert_eq!(interpolate_pump_curve(&curve, 120.5).unwrap(), None);
    assert!(interpolate_pump_curve(&curve, 120.0).unwrap().is_some());
}

#[test]
fn missing_optional_column_stays_none() {
    let mut curve = sample_curve();
    curve.points[3].efficiency_percent = None;
    let s = interpolate_pump_curve(&curve, 50.0).unwrap().unwrap();
    assert_eq!(s.efficiency_percent, None);
    assert!(s.npsh_required_m.is_some());
}

#[test]
fn malformed_curves_are_rejected() {
    let mut unsorted = sample_curve();
    unsorted.points.swap(2, 3);
    assert!(matches!(
        interpolate_pump_curve(&unsorted, 50.0),
        Err(HydraulicsError::InvalidCurve(_))
    ));

    let mut single = sample_curve();
    single.points.truncate(1);
    single.max_flow_m3h = 0.0;
    assert!(matches!(single.validate(), Err(HydraulicsError::InvalidCurve(_))));

    let mut wrong_max = sample_curve();
    wrong_max.max_flow_m3h = 150.0;
    assert!(wrong_max.validate().is_err());

    // 마지막 점보다 아주 조금 큰 최대 유량도 거부
    let mut slack_max = sample_curve();
    slack_max.max_flow_m3h = 120.0 * (1.0 + 1e-12);
    assert!(matches!(slack_max.validate(), Err(HydraulicsError::InvalidCurve(_))));
    assert!(interpolate_pump_curve(&slack_max, 120.0 * (1.0 + 5e-13)).is_err());

    let mut wrong_shutoff = sample_curve();
    wrong_shutoff.shutoff_head_m = 55.0;
    assert!(wrong_shutoff.validate().is_err());

    let mut nan_head = sample_curve();
    nan_head.points[4].head_m = f64::NAN;
    assert!(nan_head.validate().is_err());
}

#[test]
fn system_curve_shape() {
    let config = SystemCurveConfig {
        static_head_m: 20.0,
        friction_loss_at_design_flow_m: 20.0,
        design_flow_m3h: 80.0,
    };
    let points = calculate_system_curve(&config, &SystemCurveOptions::default()).unwrap();
    assert_eq!(points.len(), 11);
    assert_eq!(points[0].flow_m3h, 0.0);
    assert_close(points[0].head_m, 20.0, 1e-12);
    assert_close(points[10].flow_m3h, 120.0, 1e-9);
    assert_close(points[10].head_m, 20.0 + 20.0 * 1.5 * 1.5, 1e-9);
    assert!(points.windows(2).all(|w| w[1].head_m >= w[0].head_m));

    let five = calculate_system_curve(&config, &SystemCurveOptions::with_points(5)).unwrap();
    assert_eq!(five.len(), 6);
}

#[test]
fn system_curve_rejects_bad_options() {
    let config = SystemCurveConfig {
        static_head_m: 10.0,
        friction_loss_at_design_flow_m: 5.0,
        design_flow_m3h: 50.0,
    };
    assert!(calculate_system_curve(&config, &SystemCurveOptions::with_points(0)).is_err());
    let narrow = SystemCurveOptions {
        max_flow_factor: 0.9,
        ..SystemCurveOptions::default()
    };
    assert!(calculate_system_curve(&config, &narrow).is_err());
    let zero_design = SystemCurveConfig {
        design_flow_m3h: 0.0,
        ..config
    };
    assert!(calculate_system_curve(&zero_design, &SystemCurveOptions::default()).is_err());
}

#[test]
fn operating_point_where_curves_cross() {
    let config = SystemCurveConfig {
        static_head_m: 20.0,
        friction_loss_at_design_flow_m: 20.0,
        design_flow_m3h: 80.0,
    };
    let op = operating_point_for_system(&sample_curve(), &config, &SystemCurveOptions::default())
        .unwrap()
        .expect("curves cross");
    assert!(op.flow_m3h > 80.0 && op.flow_m3h < 84.0, "flow={}", op.flow_m3h);
    assert!(op.head_m > 39.0 && op.head_m < 40.5, "head={}", op.head_m);
    let eff = op.efficiency_percent.unwrap();
    assert!(eff > 77.0 && eff <= 78.0);
}

#[test]
fn operating_point_none_when_pump_too_weak() {
    let config = SystemCurveConfig {
        static_head_m: 60.0,
        friction_loss_at_design_flow_m: 10.0,
        design_flow_m3h: 80.0,
    };
    let op = operating_point_for_system(&sample_curve(), &config, &SystemCurveOptions::default())
        .unwrap();
    assert_eq!(op, None);
}

#[test]
fn operating_point_on_shared_breakpoint() {
    let pump = vec![PumpCurvePoint::new(0.0, 30.0), PumpCurvePoint::new(100.0, 10.0)];
    let system = vec![
        system_point(0.0, 10.0),
        system_point(50.0, 20.0),
        system_point(100.0, 30.0),
    ];
    let op = find_operating_point(&pump, &system).unwrap().unwrap();
    assert_close(op.flow_m3h, 50.0, 1e-12);
    assert_close(op.head_m, 20.0, 1e-12);
    assert_eq!(op.efficiency_percent, None);
}

#[test]
fn operating_point_rejects_short_system_curve() {
    let pump = sample_curve().points;
    let system = vec![system_point(0.0, 10.0)];
    assert!(matches!(
        find_operating_point(&pump, &system),
        Err(HydraulicsError::InvalidCurve(_))
    ));
}

#[test]
fn curve_scaled_to_lower_speed() {
    let curve = sample_curve();
    let slow = scale_pump_curve_to_speed(&curve, 1160.0).unwrap();
    let r = 1160.0 / 1450.0;
    assert_eq!(slow.speed_rpm, 1160.0);
    assert_close(slow.max_flow_m3h, 120.0 * r, 1e-9);
    assert_close(slow.shutoff_head_m, 52.0 * r * r, 1e-9);
    assert_close(slow.points[4].power_kw.unwrap(), 11.7 * r * r * r, 1e-9);
    assert_eq!(slow.points[4].efficiency_percent, Some(78.0));
    assert!(slow.validate().is_ok());
    assert!(scale_pump_curve_to_speed(&curve, 0.0).is_err());
}

#[test]
fn operating_at_bep_is_optimal() {
    let report = validate_operating_point(&sample_curve(), 80.0, 40.5, Some(6.0)).unwrap();
    assert!(report.is_valid);
    assert_eq!(report.status, OverallStatus::Optimal);
    assert_eq!(report.count(Severity::Info), 1);
    assert_eq!(report.issues[0].category, IssueCategory::BepRange);
    assert_close(report.metrics.flow_ratio_to_bep, 1.0, 1e-12);
    assert_close(report.metrics.npsh_margin_m.unwrap(), 2.9, 1e-12);
}

#[test]
fn operating_below_minimum_flow_is_unacceptable() {
    let report = validate_operating_point(&sample_curve(), 10.0, 51.5, None).unwrap();
    assert!(!report.is_valid);
    assert_eq!(report.status, OverallStatus::Unacceptable);
    assert!(report
        .issues
        .iter()
        .any(|i| i.category == IssueCategory::MinimumFlow && i.severity == Severity::Error));
}

#[test]
fn npsh_shortfall_is_error() {
    let report = validate_operating_point(&sample_curve(), 100.0, 34.0, Some(3.0)).unwrap();
    assert!(report
        .issues
        .iter()
        .any(|i| i.category == IssueCategory::Npsh && i.severity == Severity::Error));
    assert_eq!(report.status, OverallStatus::Unacceptable);
}

#[test]
fn head_mismatch_warns() {
    let report = validate_operating_point(&sample_curve(), 60.0, 35.0, None).unwrap();
    assert!(report
        .issues
        .iter()
        .any(|i| i.category == IssueCategory::HeadMatch && i.severity == Severity::Warning));
    assert!(report.is_valid);
}
