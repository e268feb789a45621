//! 배관 시스템 저항 곡선과 펌프 운전점(교점) 계산.
//!
//! 시스템 곡선은 `H(Q) = H_static + H_f,design * (Q / Q_design)²` 의 2차 마찰 법칙을 따른다.
//! 운전점은 구간 선형 함수 `d(Q) = H_pump(Q) - H_system(Q)`의 첫 번째 영점이다.

use serde::{Deserialize, Serialize};

use crate::error::{
    check_finite, check_non_negative, check_positive, HydraulicsError, HydraulicsResult,
};
use crate::pump::curve::{lerp_at, sample_points, validate_points, PumpCurve, PumpCurvePoint};

/// 시스템 곡선 생성 시 기본 점 개수(구간 수)
pub const DEFAULT_SYSTEM_CURVE_POINTS: usize = 10;
/// 시스템 곡선 최대 유량 = 설계 유량 * 이 값
pub const DEFAULT_MAX_FLOW_FACTOR: f64 = 1.5;

/// 시스템 저항 곡선 정의. 정수두는 음수(자연 유하)일 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemCurveConfig {
    pub static_head_m: f64,
    pub friction_loss_at_design_flow_m: f64,
    pub design_flow_m3h: f64,
}

impl SystemCurveConfig {
    fn validate(&self) -> HydraulicsResult<()> {
        check_finite("정수두", self.static_head_m)?;
        check_non_negative("설계 유량 마찰손실", self.friction_loss_at_design_flow_m)?;
        check_positive("설계 유량", self.design_flow_m3h)?;
        Ok(())
    }

    /// 유량 `flow_m3h`에서의 시스템 요구 양정(m)
    pub fn head_at(&self, flow_m3h: f64) -> f64 {
        let ratio = flow_m3h / self.design_flow_m3h;
        self.static_head_m + self.friction_loss_at_design_flow_m * ratio * ratio
    }
}

/// 시스템 곡선 샘플링 옵션.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemCurveOptions {
    /// 구간 수. 결과 점 개수는 `num_points + 1`
    pub num_points: usize,
    /// 최대 유량 배수(설계 유량 기준). 1 이상이어야 교점 탐색 범위가 설계점을 포함한다.
    pub max_flow_factor: f64,
}

impl Default for SystemCurveOptions {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_SYSTEM_CURVE_POINTS,
            max_flow_factor: DEFAULT_MAX_FLOW_FACTOR,
        }
    }
}

impl SystemCurveOptions {
    pub fn with_points(num_points: usize) -> Self {
        Self {
            num_points,
            ..Self::default()
        }
    }
}

/// 시스템 곡선의 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemCurvePoint {
    pub flow_m3h: f64,
    pub head_m: f64,
}

/// 운전점(펌프 곡선과 시스템 곡선의 교점).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingPoint {
    pub flow_m3h: f64,
    /// 교점에서의 펌프 양정(m)
    pub head_m: f64,
    /// 교점에서 보간한 펌프 효율(%). 곡선에 효율이 없으면 None
    pub efficiency_percent: Option<f64>,
}

/// 0부터 `max_flow_factor * 설계 유량`까지 균등 간격으로 시스템 곡선을 만든다.
pub fn calculate_system_curve(
    config: &SystemCurveConfig,
    options: &SystemCurveOptions,
) -> HydraulicsResult<Vec<SystemCurvePoint>> {
    config.validate()?;
    if options.num_points == 0 {
        return Err(HydraulicsError::domain(
            "시스템 곡선 구간 수는 1 이상이어야 합니다",
            0.0,
        ));
    }
    if !options.max_flow_factor.is_finite() || options.max_flow_factor < 1.0 {
        return Err(HydraulicsError::domain(
            "최대 유량 배수는 1 이상이어야 합니다",
            options.max_flow_factor,
        ));
    }

    let max_flow = config.design_flow_m3h * options.max_flow_factor;
    let n = options.num_points;
    let points = (0..=n)
        .map(|i| {
            let flow = max_flow * i as f64 / n as f64;
            SystemCurvePoint {
                flow_m3h: flow,
                head_m: config.head_at(flow),
            }
        })
        .collect();
    Ok(points)
}

/// 펌프 곡선과 시스템 곡선의 교점을 찾는다.
///
/// 두 곡선의 유량 분기점을 공통 유량 구간 안에서 합친 뒤, 각 분기점에서
/// `펌프 양정 - 시스템 양정`을 구해 처음 부호가 바뀌는 구간을 선형 보간한다.
/// 부호 변화가 없으면(펌프가 시스템 요구를 충족하지 못하는 경우 등) `Ok(None)`.
pub fn find_operating_point(
    pump_points: &[PumpCurvePoint],
    system_points: &[SystemCurvePoint],
) -> HydraulicsResult<Option<OperatingPoint>> {
    validate_points("펌프 곡선", pump_points.iter().map(|p| (p.flow_m3h, p.head_m)))?;
    validate_points("시스템 곡선", system_points.iter().map(|p| (p.flow_m3h, p.head_m)))?;

    let pump: Vec<(f64, f64)> = pump_points.iter().map(|p| (p.flow_m3h, p.head_m)).collect();
    let system: Vec<(f64, f64)> = system_points.iter().map(|p| (p.flow_m3h, p.head_m)).collect();

    let lo = pump[0].0.max(system[0].0);
    let hi = pump[pump.len() - 1].0.min(system[system.len() - 1].0);
    if lo > hi {
        return Ok(None);
    }

    let mut breakpoints: Vec<f64> = pump
        .iter()
        .chain(system.iter())
        .map(|&(q, _)| q)
        .filter(|&q| q >= lo && q <= hi)
        .chain([lo, hi])
        .collect();
    breakpoints.sort_by(f64::total_cmp);
    breakpoints.dedup();

    let mut prev: Option<(f64, f64)> = None;
    for &q in &breakpoints {
        let (Some(hp), Some(hs)) = (lerp_at(&pump, q), lerp_at(&system, q)) else {
            continue;
        };
        let d = hp - hs;
        if d == 0.0 {
            return Ok(operating_point_at(pump_points, q));
        }
        if let Some((q0, d0)) = prev {
            if d0.signum() != d.signum() {
                let t = d0 / (d0 - d);
                return Ok(operating_point_at(pump_points, q0 + t * (q - q0)));
            }
        }
        prev = Some((q, d));
    }
    Ok(None)
}

fn operating_point_at(pump_points: &[PumpCurvePoint], flow_m3h: f64) -> Option<OperatingPoint> {
    sample_points(pump_points, flow_m3h).map(|s| OperatingPoint {
        flow_m3h,
        head_m: s.head_m,
        efficiency_percent: s.efficiency_percent,
    })
}

/// 시스템 정의로부터 곡선을 만들고 펌프 곡선과의 운전점을 구한다.
pub fn operating_point_for_system(
    curve: &PumpCurve,
    config: &SystemCurveConfig,
    options: &SystemCurveOptions,
) -> HydraulicsResult<Option<OperatingPoint>> {
    curve.validate()?;
    let system = calculate_system_curve(config, options)?;
    find_operating_point(&curve.points, &system)
}
