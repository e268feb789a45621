//! 흡입측 NPSH 계산.

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, check_positive, HydraulicsError, HydraulicsResult};

/// 표준 대기압(bar abs)
pub const STANDARD_ATMOSPHERE_BAR: f64 = 1.01325;
/// 1 bar 에 해당하는 수두(m, SG=1)
pub const HEAD_M_PER_BAR: f64 = 10.197;
/// NPSH 여유 기본값(m)
pub const DEFAULT_NPSH_SAFETY_MARGIN_M: f64 = 0.5;
/// 이 이상 여유가 있으면 "Excellent"로 본다(m).
const EXCELLENT_MARGIN_M: f64 = 3.0;

const VAPOR_PRESSURE_MIN_C: f64 = 0.0;
const VAPOR_PRESSURE_MAX_C: f64 = 100.0;

/// Antoine 식으로 물의 포화증기압(bar abs)을 구한다.
///
/// 유효 범위는 0~100°C(양 끝 포함)이며, 범위를 벗어나면 오류를 반환한다.
/// 20°C에서 약 0.0233 bar, 100°C에서 약 1.013 bar.
pub fn water_vapor_pressure_bar(temp_c: f64) -> HydraulicsResult<f64> {
    if !temp_c.is_finite() || !(VAPOR_PRESSURE_MIN_C..=VAPOR_PRESSURE_MAX_C).contains(&temp_c) {
        return Err(HydraulicsError::domain(
            "물 증기압 온도는 0~100°C 범위여야 합니다",
            temp_c,
        ));
    }
    let log10_p_mmhg = 8.07131 - 1730.63 / (233.426 + temp_c);
    let p_mmhg = 10_f64.powf(log10_p_mmhg);
    // 760 mmHg = 1.01325 bar(abs)
    Ok(p_mmhg / 750.062)
}

/// NPSHa 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpshAvailableInput {
    /// 액체 증기압(bar abs)
    pub liquid_vapor_pressure_bar: f64,
    /// 정수두(m) - 액면에서 펌프 중심까지(+ 가압, - 흡상)
    pub static_suction_head_m: f64,
    /// 흡입 배관 마찰손실(m 수두)
    pub friction_loss_m: f64,
    /// 흡입 액면 압력(bar abs). 기본 1.01325
    pub atmospheric_pressure_bar: f64,
    /// 비중. 기본 1.0
    pub specific_gravity: f64,
}

impl NpshAvailableInput {
    /// 대기압 1.01325 bar, 비중 1.0 기본값으로 입력을 만든다.
    pub fn new(
        liquid_vapor_pressure_bar: f64,
        static_suction_head_m: f64,
        friction_loss_m: f64,
    ) -> Self {
        Self {
            liquid_vapor_pressure_bar,
            static_suction_head_m,
            friction_loss_m,
            atmospheric_pressure_bar: STANDARD_ATMOSPHERE_BAR,
            specific_gravity: 1.0,
        }
    }
}

/// 사용 가능 NPSH(m)를 계산한다.
///
/// `NPSHa = (Patm - Pvap) * 10.197 / SG + 정수두 - 마찰손실`
pub fn calculate_npsh_available(input: &NpshAvailableInput) -> HydraulicsResult<f64> {
    let p_atm = check_finite("대기압", input.atmospheric_pressure_bar)?;
    let p_vap = check_finite("증기압", input.liquid_vapor_pressure_bar)?;
    let static_head = check_finite("정수두", input.static_suction_head_m)?;
    let friction = check_finite("마찰손실", input.friction_loss_m)?;
    let sg = check_positive("비중", input.specific_gravity)?;

    let pressure_head = (p_atm - p_vap) * HEAD_M_PER_BAR / sg;
    Ok(pressure_head + static_head - friction)
}

/// NPSH 여유 판정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NpshMarginCheck {
    pub is_adequate: bool,
    /// NPSHa - NPSHr (m)
    pub margin_m: f64,
    /// 요구 NPSH 대비 여유(%). NPSHr가 0 이하이면 None
    pub margin_percent: Option<f64>,
    pub recommendation: &'static str,
}

/// NPSHa와 NPSHr를 비교해 여유를 판정한다.
pub fn check_npsh_margin(
    npsh_available_m: f64,
    npsh_required_m: f64,
    safety_margin_m: f64,
) -> HydraulicsResult<NpshMarginCheck> {
    let available = check_finite("NPSHa", npsh_available_m)?;
    let required = check_finite("NPSHr", npsh_required_m)?;
    let safety = check_finite("NPSH 안전 여유", safety_margin_m)?;

    let margin = available - required;
    let is_adequate = margin >= safety;
    // 안전 여유 미달이면 여유 크기와 무관하게 부족 판정
    let recommendation = if !is_adequate {
        if margin >= 0.0 {
            "Insufficient NPSH margin - risk of cavitation; increase suction head or reduce losses"
        } else {
            "Insufficient NPSH - high risk of cavitation, pump will cavitate; redesign suction system"
        }
    } else if margin >= EXCELLENT_MARGIN_M {
        "Excellent NPSH margin - pump should operate without cavitation"
    } else {
        "Adequate NPSH margin - monitor for signs of cavitation"
    };
    let margin_percent = (required > 0.0).then(|| margin / required * 100.0);

    Ok(NpshMarginCheck {
        is_adequate,
        margin_m: margin,
        margin_percent,
        recommendation,
    })
}
