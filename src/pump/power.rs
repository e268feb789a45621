//! 수동력 → 축동력 → 모터 동력 계산과 표준 모터 선정.

use serde::Serialize;

use crate::error::{
    check_finite, check_non_negative, check_positive, HydraulicsError, HydraulicsResult,
};

const G: f64 = 9.81;

/// 모터 서비스 팩터 기본값(%)
pub const DEFAULT_SERVICE_FACTOR_PERCENT: f64 = 115.0;

/// IEC 표준 모터 출력(kW), 오름차순.
pub static STANDARD_MOTOR_SIZES_KW: [f64; 36] = [
    0.37, 0.55, 0.75, 1.1, 1.5, 2.2, 3.0, 4.0, 5.5, 7.5, 11.0, 15.0, 18.5, 22.0, 30.0, 37.0, 45.0,
    55.0, 75.0, 90.0, 110.0, 132.0, 160.0, 200.0, 250.0, 315.0, 355.0, 400.0, 450.0, 500.0, 560.0,
    630.0, 710.0, 800.0, 900.0, 1000.0,
];

/// 수동력(kW) = Q[m³/h] * H[m] * SG * g / 3600
pub fn calculate_hydraulic_power(
    flow_m3h: f64,
    head_m: f64,
    specific_gravity: f64,
) -> HydraulicsResult<f64> {
    let flow = check_finite("유량", flow_m3h)?;
    let head = check_finite("양정", head_m)?;
    let sg = check_positive("비중", specific_gravity)?;
    Ok(flow * head * sg * G / 3600.0)
}

/// 축동력(kW) = 수동력 / 효율. 효율은 (0, 100] % 범위여야 한다.
pub fn calculate_shaft_power(
    hydraulic_power_kw: f64,
    efficiency_percent: f64,
) -> HydraulicsResult<f64> {
    let hydraulic = check_finite("수동력", hydraulic_power_kw)?;
    if !efficiency_percent.is_finite() || efficiency_percent <= 0.0 || efficiency_percent > 100.0 {
        return Err(HydraulicsError::domain(
            "펌프 효율은 0 초과 100 이하(%)여야 합니다",
            efficiency_percent,
        ));
    }
    Ok(hydraulic / (efficiency_percent / 100.0))
}

/// 모터 요구 동력(kW) = 축동력 * 서비스 팩터
pub fn calculate_motor_power(
    shaft_power_kw: f64,
    service_factor_percent: f64,
) -> HydraulicsResult<f64> {
    let shaft = check_finite("축동력", shaft_power_kw)?;
    let sf = check_positive("서비스 팩터", service_factor_percent)?;
    Ok(shaft * sf / 100.0)
}

/// 표준 모터 선정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotorSelection {
    pub size_kw: f64,
    /// 요구 동력이 표의 최대값을 넘어 최대값으로 고정된 경우 true
    pub saturated: bool,
}

/// 요구 동력 이상인 가장 작은 표준 모터를 고른다.
/// 표 최대값(1000 kW)을 넘으면 최대값을 돌려주고 `saturated`를 표시한다.
pub fn select_motor(required_kw: f64) -> HydraulicsResult<MotorSelection> {
    let required = check_non_negative("요구 동력", required_kw)?;
    let selection = match STANDARD_MOTOR_SIZES_KW.iter().find(|&&size| size >= required) {
        Some(&size_kw) => MotorSelection {
            size_kw,
            saturated: false,
        },
        None => MotorSelection {
            size_kw: STANDARD_MOTOR_SIZES_KW[STANDARD_MOTOR_SIZES_KW.len() - 1],
            saturated: true,
        },
    };
    Ok(selection)
}

/// 다음 표준 모터 크기(kW). 표 최대값을 넘는 요구는 최대값으로 포화된다.
pub fn select_next_motor_size(required_kw: f64) -> HydraulicsResult<f64> {
    select_motor(required_kw).map(|s| s.size_kw)
}
