//! Cv/Kv 계산 및 밸브 유량 추정을 위한 모듈.
//!
//! 액체는 미국식 단위(GPM, psi), 기체는 scfh/psia/°F 기준이다.

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, check_positive, HydraulicsError, HydraulicsResult};

/// ISA-75.01 기체식 상수 (scfh, psia, °R)
const N7_SCFH: f64 = 1360.0;
/// 압력강하비 계수 xT 기본값 (글로브 밸브 대표값)
pub const DEFAULT_PRESSURE_DROP_RATIO_FACTOR: f64 = 0.72;
const RANKINE_OFFSET: f64 = 460.0;

/// Cv→Kv 변환 (Cv는 미국식, Kv는 SI 기반)
pub fn kv_from_cv(cv: f64) -> f64 {
    cv * 0.865
}

/// Kv→Cv 변환
pub fn cv_from_kv(kv: f64) -> f64 {
    kv / 0.865
}

/// 액체 Cv 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvLiquidInput {
    pub flow_rate_gpm: f64,
    pub pressure_drop_psi: f64,
    /// 기본 1.0
    pub specific_gravity: f64,
}

impl CvLiquidInput {
    pub fn new(flow_rate_gpm: f64, pressure_drop_psi: f64) -> Self {
        Self {
            flow_rate_gpm,
            pressure_drop_psi,
            specific_gravity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CvLiquidResult {
    pub cv: f64,
    pub flow_rate_gpm: f64,
    pub pressure_drop_psi: f64,
    pub specific_gravity: f64,
}

/// 요구 Cv = Q * sqrt(SG / ΔP)
pub fn calculate_cv_liquid(input: &CvLiquidInput) -> HydraulicsResult<CvLiquidResult> {
    let flow = check_finite("유량", input.flow_rate_gpm)?;
    let dp = check_positive("차압", input.pressure_drop_psi)?;
    let sg = check_positive("비중", input.specific_gravity)?;
    Ok(CvLiquidResult {
        cv: flow * (sg / dp).sqrt(),
        flow_rate_gpm: flow,
        pressure_drop_psi: dp,
        specific_gravity: sg,
    })
}

/// 주어진 Cv와 차압에서 통과 유량(GPM) = Cv * sqrt(ΔP / SG)
pub fn calculate_flow_from_cv(
    cv: f64,
    pressure_drop_psi: f64,
    specific_gravity: f64,
) -> HydraulicsResult<f64> {
    let cv = check_finite("Cv", cv)?;
    let dp = check_finite("차압", pressure_drop_psi)?;
    if dp < 0.0 {
        return Err(HydraulicsError::domain("차압은 0 이상이어야 합니다", dp));
    }
    let sg = check_positive("비중", specific_gravity)?;
    Ok(cv * (dp / sg).sqrt())
}

/// 주어진 Cv와 유량에서 차압(psi) = SG * (Q / Cv)²
pub fn calculate_pressure_drop_from_cv(
    cv: f64,
    flow_rate_gpm: f64,
    specific_gravity: f64,
) -> HydraulicsResult<f64> {
    let cv = check_positive("Cv", cv)?;
    let flow = check_finite("유량", flow_rate_gpm)?;
    let sg = check_positive("비중", specific_gravity)?;
    Ok(sg * (flow / cv).powi(2))
}

/// 기체 Cv 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvGasInput {
    pub flow_rate_scfh: f64,
    pub upstream_pressure_psia: f64,
    pub downstream_pressure_psia: f64,
    pub temperature_f: f64,
    /// 공기 기준 비중. 기본 1.0
    pub specific_gravity_gas: f64,
    /// 밸브 압력강하비 계수 xT. 기본 0.72
    pub pressure_drop_ratio_factor: f64,
}

impl CvGasInput {
    pub fn new(
        flow_rate_scfh: f64,
        upstream_pressure_psia: f64,
        downstream_pressure_psia: f64,
        temperature_f: f64,
    ) -> Self {
        Self {
            flow_rate_scfh,
            upstream_pressure_psia,
            downstream_pressure_psia,
            temperature_f,
            specific_gravity_gas: 1.0,
            pressure_drop_ratio_factor: DEFAULT_PRESSURE_DROP_RATIO_FACTOR,
        }
    }
}

/// 기체 유동 영역
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GasFlowRegime {
    Subcritical,
    /// 임계(음속, choked) 유동. 차압을 더 키워도 유량이 늘지 않는다.
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CvGasResult {
    pub cv: f64,
    pub regime: GasFlowRegime,
    /// 팽창계수 Y (임계 시 2/3)
    pub expansion_factor: f64,
    /// 계산에 사용된 압력강하비 x (임계 시 xT로 제한)
    pub pressure_drop_ratio: f64,
}

/// 기체 밸브 요구 Cv를 계산한다.
///
/// `Cv = Q / (N7 · P1 · Y · sqrt(x / (G · T)))`, `x = ΔP/P1`, `Y = 1 - x / (3·xT)`.
/// x가 xT 이상이면 임계 유동으로 보고 x를 xT로 제한한다.
pub fn calculate_cv_gas(input: &CvGasInput) -> HydraulicsResult<CvGasResult> {
    let q = check_positive("기체 유량", input.flow_rate_scfh)?;
    let p1 = check_positive("상류 압력", input.upstream_pressure_psia)?;
    let p2 = check_positive("하류 압력", input.downstream_pressure_psia)?;
    if p2 >= p1 {
        return Err(HydraulicsError::domain(
            "하류 압력은 상류 압력보다 낮아야 합니다",
            p2,
        ));
    }
    let temp_f = check_finite("기체 온도", input.temperature_f)?;
    let t_rankine = check_positive("절대 온도(°R)", temp_f + RANKINE_OFFSET)?;
    let sg = check_positive("기체 비중", input.specific_gravity_gas)?;
    let x_t = check_positive("압력강하비 계수 xT", input.pressure_drop_ratio_factor)?;

    let x = (p1 - p2) / p1;
    let (regime, x_eff) = if x >= x_t {
        (GasFlowRegime::Critical, x_t)
    } else {
        (GasFlowRegime::Subcritical, x)
    };
    let y = 1.0 - x_eff / (3.0 * x_t);
    let cv = q / (N7_SCFH * p1 * y * (x_eff / (sg * t_rankine)).sqrt());

    Ok(CvGasResult {
        cv,
        regime,
        expansion_factor: y,
        pressure_drop_ratio: x_eff,
    })
}
