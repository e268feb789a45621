//! 견적 단계의 펌프 사양 추정.
//!
//! 유량/양정만 주어진 상태에서 동력, 모터, 형식, NPSH/점도 주의사항을 한 번에 정리한다.

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, check_non_negative, check_positive, HydraulicsResult};
use crate::pump::power::{
    calculate_hydraulic_power, calculate_motor_power, calculate_shaft_power, select_motor,
    DEFAULT_SERVICE_FACTOR_PERCENT,
};
use crate::pump::specific_speed::{
    calculate_specific_speed_metric, get_pump_type_by_specific_speed, PumpTypeClassification,
};

/// 연속 운전 권장 범위(설계 유량 대비)
const MIN_FLOW_RATIO: f64 = 0.6;
const MAX_FLOW_RATIO: f64 = 1.2;

/// 기본 회전수(4극, 50 Hz)
pub const DEFAULT_SPEED_RPM: f64 = 1450.0;

/// 간이 요구조건 추정 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpRequirementsInput {
    pub flow_m3h: f64,
    pub head_m: f64,
    /// 기본 1.0
    pub specific_gravity: f64,
    /// 기본 70 %
    pub estimated_efficiency_percent: f64,
    /// 기본 3 m
    pub estimated_npsh_required_m: f64,
}

impl PumpRequirementsInput {
    pub fn new(flow_m3h: f64, head_m: f64) -> Self {
        Self {
            flow_m3h,
            head_m,
            specific_gravity: 1.0,
            estimated_efficiency_percent: 70.0,
            estimated_npsh_required_m: 3.0,
        }
    }
}

/// 간이 요구조건 추정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PumpRequirements {
    pub hydraulic_power_kw: f64,
    pub estimated_shaft_power_kw: f64,
    pub recommended_motor_kw: f64,
    pub motor_saturated: bool,
    pub npsh_required_m: f64,
    pub min_recommended_flow_m3h: f64,
    pub max_recommended_flow_m3h: f64,
}

/// 가정 효율로 동력과 모터 크기를 추정한다.
pub fn estimate_pump_requirements(
    input: &PumpRequirementsInput,
) -> HydraulicsResult<PumpRequirements> {
    let hydraulic =
        calculate_hydraulic_power(input.flow_m3h, input.head_m, input.specific_gravity)?;
    let npsh_required = check_non_negative("추정 NPSHr", input.estimated_npsh_required_m)?;
    let shaft = calculate_shaft_power(hydraulic, input.estimated_efficiency_percent)?;
    let motor = select_motor(calculate_motor_power(shaft, DEFAULT_SERVICE_FACTOR_PERCENT)?)?;

    Ok(PumpRequirements {
        hydraulic_power_kw: hydraulic,
        estimated_shaft_power_kw: shaft,
        recommended_motor_kw: motor.size_kw,
        motor_saturated: motor.saturated,
        npsh_required_m: npsh_required,
        min_recommended_flow_m3h: input.flow_m3h * MIN_FLOW_RATIO,
        max_recommended_flow_m3h: input.flow_m3h * MAX_FLOW_RATIO,
    })
}

/// 사이징 요약 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpSizingInput {
    pub flow_m3h: f64,
    pub total_head_m: f64,
    pub specific_gravity: f64,
    pub viscosity_cp: Option<f64>,
    pub speed_rpm: f64,
    pub npsh_available_m: Option<f64>,
}

impl PumpSizingInput {
    pub fn new(flow_m3h: f64, total_head_m: f64) -> Self {
        Self {
            flow_m3h,
            total_head_m,
            specific_gravity: 1.0,
            viscosity_cp: None,
            speed_rpm: DEFAULT_SPEED_RPM,
            npsh_available_m: None,
        }
    }
}

/// 추정 NPSHr 대비 NPSHa 상태.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NpshStatus {
    /// 여유 1 m 이상
    Ok {
        npsh_available_m: f64,
        estimated_npsh_required_m: f64,
        margin_m: f64,
    },
    /// 여유 0~1 m
    Marginal {
        npsh_available_m: f64,
        estimated_npsh_required_m: f64,
        margin_m: f64,
    },
    /// NPSHa < NPSHr
    CavitationRisk {
        npsh_available_m: f64,
        estimated_npsh_required_m: f64,
        margin_m: f64,
    },
}

impl NpshStatus {
    pub fn margin_m(&self) -> f64 {
        match *self {
            NpshStatus::Ok { margin_m, .. }
            | NpshStatus::Marginal { margin_m, .. }
            | NpshStatus::CavitationRisk { margin_m, .. } => margin_m,
        }
    }
}

/// 점도에 따른 주의사항. 10 cP 이하이면 없음.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViscosityAdvice {
    /// 10~100 cP: 효율 소폭 저하
    Moderate,
    /// 100~500 cP: HI 점도 보정 계수 적용
    Elevated,
    /// 500 cP 초과: 용적식 펌프 검토
    PositiveDisplacement,
}

impl ViscosityAdvice {
    pub fn message(self) -> &'static str {
        match self {
            ViscosityAdvice::Moderate => "Moderate viscosity - minor efficiency reduction expected",
            ViscosityAdvice::Elevated => {
                "Elevated viscosity - apply HI viscosity correction factors"
            }
            ViscosityAdvice::PositiveDisplacement => {
                "High viscosity - consider positive displacement pump"
            }
        }
    }
}

/// 사이징 요약 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PumpSizingSummary {
    pub hydraulic_power_kw: f64,
    pub estimated_shaft_power_kw: f64,
    pub recommended_motor_kw: f64,
    pub motor_saturated: bool,
    pub specific_speed_metric: f64,
    pub pump_type: PumpTypeClassification,
    /// 형식별 대표 효율 범위의 중앙값(%)
    pub estimated_efficiency_percent: f64,
    pub npsh_status: Option<NpshStatus>,
    pub viscosity_advice: Option<ViscosityAdvice>,
    pub min_continuous_flow_m3h: f64,
    pub max_continuous_flow_m3h: f64,
}

fn npsh_status(npsh_available_m: f64, flow_m3h: f64) -> NpshStatus {
    // 경험식: NPSHr ≈ 2 + Q/100
    let estimated_npsh_required_m = 2.0 + flow_m3h / 100.0;
    let margin_m = npsh_available_m - estimated_npsh_required_m;
    if margin_m >= 1.0 {
        NpshStatus::Ok {
            npsh_available_m,
            estimated_npsh_required_m,
            margin_m,
        }
    } else if margin_m >= 0.0 {
        NpshStatus::Marginal {
            npsh_available_m,
            estimated_npsh_required_m,
            margin_m,
        }
    } else {
        NpshStatus::CavitationRisk {
            npsh_available_m,
            estimated_npsh_required_m,
            margin_m,
        }
    }
}

fn viscosity_advice(viscosity_cp: f64) -> Option<ViscosityAdvice> {
    if viscosity_cp > 500.0 {
        Some(ViscosityAdvice::PositiveDisplacement)
    } else if viscosity_cp > 100.0 {
        Some(ViscosityAdvice::Elevated)
    } else if viscosity_cp > 10.0 {
        Some(ViscosityAdvice::Moderate)
    } else {
        None
    }
}

/// 비속도로 형식을 고르고, 형식별 대표 효율로 동력과 모터를 산정한다.
pub fn pump_sizing_summary(input: &PumpSizingInput) -> HydraulicsResult<PumpSizingSummary> {
    let flow = check_positive("유량", input.flow_m3h)?;
    let hydraulic = calculate_hydraulic_power(flow, input.total_head_m, input.specific_gravity)?;
    let ns = calculate_specific_speed_metric(flow, input.total_head_m, input.speed_rpm)?;
    let pump_type = get_pump_type_by_specific_speed(ns)?;
    let efficiency = pump_type.mid_efficiency_percent();
    let npsh_available = input
        .npsh_available_m
        .map(|npsha| check_finite("NPSHa", npsha))
        .transpose()?;
    let viscosity = input
        .viscosity_cp
        .map(|cp| check_non_negative("점도", cp))
        .transpose()?;

    let shaft = calculate_shaft_power(hydraulic, efficiency)?;
    let motor = select_motor(calculate_motor_power(shaft, DEFAULT_SERVICE_FACTOR_PERCENT)?)?;

    Ok(PumpSizingSummary {
        hydraulic_power_kw: hydraulic,
        estimated_shaft_power_kw: shaft,
        recommended_motor_kw: motor.size_kw,
        motor_saturated: motor.saturated,
        specific_speed_metric: ns,
        pump_type,
        estimated_efficiency_percent: efficiency,
        npsh_status: npsh_available.map(|npsha| npsh_status(npsha, flow)),
        viscosity_advice: viscosity.and_then(viscosity_advice),
        min_continuous_flow_m3h: flow * MIN_FLOW_RATIO,
        max_continuous_flow_m3h: flow * MAX_FLOW_RATIO,
    })
}
