//! 액체 조절밸브 사이징: 요구 Cv, 표준 구경 선정, 캐비테이션 지수.

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, check_positive, HydraulicsError, HydraulicsResult};
use crate::units::flow::m3h_to_gpm;
use crate::units::pressure::bar_to_psi;
use crate::valve::cv::{calculate_cv_liquid, CvLiquidInput};

/// 요구 Cv 에 곱하는 안전율
const CV_SAFETY_FACTOR: f64 = 1.25;
/// 캐비테이션 지수 계산에 쓰는 상온 물 증기압(bar abs)
const WATER_VAPOR_PRESSURE_BAR: f64 = 0.023;
/// 압력회복계수 FL 기본값
pub const DEFAULT_PRESSURE_RECOVERY_FACTOR: f64 = 0.9;

/// 표준 밸브 구경과 정격 Cv.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandardValve {
    pub size: &'static str,
    pub cv: f64,
}

impl StandardValve {
    const fn new(size: &'static str, cv: f64) -> Self {
        Self { size, cv }
    }
}

pub static STANDARD_VALVE_CVS: [StandardValve; 16] = [
    StandardValve::new("DN15 (1/2\")", 4.6),
    StandardValve::new("DN20 (3/4\")", 8.4),
    StandardValve::new("DN25 (1\")", 14.0),
    StandardValve::new("DN32 (1-1/4\")", 24.0),
    StandardValve::new("DN40 (1-1/2\")", 35.0),
    StandardValve::new("DN50 (2\")", 55.0),
    StandardValve::new("DN65 (2-1/2\")", 83.0),
    StandardValve::new("DN80 (3\")", 120.0),
    StandardValve::new("DN100 (4\")", 195.0),
    StandardValve::new("DN125 (5\")", 310.0),
    StandardValve::new("DN150 (6\")", 440.0),
    StandardValve::new("DN200 (8\")", 780.0),
    StandardValve::new("DN250 (10\")", 1200.0),
    StandardValve::new("DN300 (12\")", 1750.0),
    StandardValve::new("DN350 (14\")", 2350.0),
    StandardValve::new("DN400 (16\")", 3100.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValveSizingInput {
    pub flow_rate_m3h: f64,
    pub inlet_pressure_bar: f64,
    pub outlet_pressure_bar: f64,
    /// 기본 1.0
    pub specific_gravity: f64,
    /// FL. 기본 0.9
    pub pressure_recovery_factor: f64,
}

impl ValveSizingInput {
    pub fn new(flow_rate_m3h: f64, inlet_pressure_bar: f64, outlet_pressure_bar: f64) -> Self {
        Self {
            flow_rate_m3h,
            inlet_pressure_bar,
            outlet_pressure_bar,
            specific_gravity: 1.0,
            pressure_recovery_factor: DEFAULT_PRESSURE_RECOVERY_FACTOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValveSizingResult {
    /// 안전율 적용 후 요구 Cv
    pub required_cv: f64,
    pub flow_rate_gpm: f64,
    pub pressure_drop_psi: f64,
    pub recommended_valve: StandardValve,
    /// 요구 Cv가 표 최대 구경을 넘는 경우 true
    pub exceeds_largest_size: bool,
    /// σ = ΔP / (P1 - Pv)
    pub cavitation_index: f64,
    pub cavitation_warning: Option<String>,
}

/// 액체 조절밸브를 사이징한다.
pub fn size_control_valve(input: &ValveSizingInput) -> HydraulicsResult<ValveSizingResult> {
    let flow = check_positive("유량", input.flow_rate_m3h)?;
    let p1 = check_finite("입구 압력", input.inlet_pressure_bar)?;
    let p2 = check_finite("출구 압력", input.outlet_pressure_bar)?;
    if p2 >= p1 {
        return Err(HydraulicsError::domain(
            "출구 압력은 입구 압력보다 낮아야 합니다",
            p2,
        ));
    }
    if p1 <= WATER_VAPOR_PRESSURE_BAR {
        return Err(HydraulicsError::domain(
            "입구 압력은 증기압보다 높아야 합니다",
            p1,
        ));
    }
    let fl = check_positive("압력회복계수 FL", input.pressure_recovery_factor)?;

    let flow_gpm = m3h_to_gpm(flow);
    let dp_bar = p1 - p2;
    let dp_psi = bar_to_psi(dp_bar);
    let cv = calculate_cv_liquid(&CvLiquidInput {
        flow_rate_gpm: flow_gpm,
        pressure_drop_psi: dp_psi,
        specific_gravity: input.specific_gravity,
    })?;
    let required_cv = cv.cv * CV_SAFETY_FACTOR;

    let (recommended_valve, exceeds_largest_size) =
        match STANDARD_VALVE_CVS.iter().find(|v| v.cv >= required_cv) {
            Some(v) => (*v, false),
            None => (STANDARD_VALVE_CVS[STANDARD_VALVE_CVS.len() - 1], true),
        };

    let cavitation_index = dp_bar / (p1 - WATER_VAPOR_PRESSURE_BAR);
    let threshold = fl * fl;
    let cavitation_warning = (cavitation_index > threshold).then(|| {
        format!(
            "Warning: Cavitation likely (sigma={cavitation_index:.2} > {threshold:.2}). Consider trim selection or multiple valves."
        )
    });

    Ok(ValveSizingResult {
        required_cv,
        flow_rate_gpm: flow_gpm,
        pressure_drop_psi: dp_psi,
        recommended_valve,
        exceeds_largest_size,
        cavitation_index,
        cavitation_warning,
    })
}
