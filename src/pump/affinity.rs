//! 상사법칙(affinity laws): 회전수/임펠러 직경 변경 시 성능 환산.
//!
//! Q ∝ r, H ∝ r², P ∝ r³ (r = 회전수비 또는 직경비)

use serde::Serialize;

use crate::error::{check_finite, check_positive, HydraulicsResult};
use crate::pump::curve::{BestEfficiencyPoint, PumpCurve, PumpCurvePoint};

/// 상사법칙 환산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AffinityLawsResult {
    pub speed_ratio: f64,
    pub diameter_ratio: f64,
    pub new_flow_m3h: f64,
    pub new_head_m: f64,
    pub new_power_kw: f64,
}

fn scale(
    flow_m3h: f64,
    head_m: f64,
    power_kw: f64,
    ratio: f64,
) -> HydraulicsResult<(f64, f64, f64)> {
    let flow = check_finite("유량", flow_m3h)?;
    let head = check_finite("양정", head_m)?;
    let power = check_finite("동력", power_kw)?;
    Ok((flow * ratio, head * ratio.powi(2), power * ratio.powi(3)))
}

/// 회전수 변경에 따른 성능 환산. 직경비는 1로 고정된다.
pub fn calculate_affinity_laws_speed(
    flow_m3h: f64,
    head_m: f64,
    power_kw: f64,
    speed1_rpm: f64,
    speed2_rpm: f64,
) -> HydraulicsResult<AffinityLawsResult> {
    let n1 = check_positive("기준 회전수", speed1_rpm)?;
    let n2 = check_positive("변경 회전수", speed2_rpm)?;
    let speed_ratio = n2 / n1;
    let (new_flow_m3h, new_head_m, new_power_kw) = scale(flow_m3h, head_m, power_kw, speed_ratio)?;
    Ok(AffinityLawsResult {
        speed_ratio,
        diameter_ratio: 1.0,
        new_flow_m3h,
        new_head_m,
        new_power_kw,
    })
}

/// 임펠러 직경 변경(트리밍)에 따른 성능 환산. 회전수비는 1로 고정된다.
pub fn calculate_affinity_laws_diameter(
    flow_m3h: f64,
    head_m: f64,
    power_kw: f64,
    diameter1_mm: f64,
    diameter2_mm: f64,
) -> HydraulicsResult<AffinityLawsResult> {
    let d1 = check_positive("기준 임펠러 직경", diameter1_mm)?;
    let d2 = check_positive("변경 임펠러 직경", diameter2_mm)?;
    let diameter_ratio = d2 / d1;
    let (new_flow_m3h, new_head_m, new_power_kw) =
        scale(flow_m3h, head_m, power_kw, diameter_ratio)?;
    Ok(AffinityLawsResult {
        speed_ratio: 1.0,
        diameter_ratio,
        new_flow_m3h,
        new_head_m,
        new_power_kw,
    })
}

/// 펌프 곡선 전체를 새 회전수로 환산한다(VFD 검토용). 효율은 그대로 유지한다.
pub fn scale_pump_curve_to_speed(
    curve: &PumpCurve,
    new_speed_rpm: f64,
) -> HydraulicsResult<PumpCurve> {
    curve.validate()?;
    let n1 = check_positive("기준 회전수", curve.speed_rpm)?;
    let n2 = check_positive("변경 회전수", new_speed_rpm)?;
    let r = n2 / n1;
    let r2 = r * r;

    let points = curve
        .points
        .iter()
        .map(|p| PumpCurvePoint {
            flow_m3h: p.flow_m3h * r,
            head_m: p.head_m * r2,
            efficiency_percent: p.efficiency_percent,
            power_kw: p.power_kw.map(|kw| kw * r2 * r),
            // NPSHr도 회전수 제곱에 비례한다고 근사
            npsh_required_m: p.npsh_required_m.map(|h| h * r2),
        })
        .collect();
    let bep = &curve.best_efficiency_point;

    Ok(PumpCurve {
        pump_model: curve.pump_model.clone(),
        impeller_diameter_mm: curve.impeller_diameter_mm,
        speed_rpm: n2,
        points,
        shutoff_head_m: curve.shutoff_head_m * r2,
        best_efficiency_point: BestEfficiencyPoint {
            flow_m3h: bep.flow_m3h * r,
            head_m: bep.head_m * r2,
            efficiency_percent: bep.efficiency_percent,
        },
        min_continuous_flow_m3h: curve.min_continuous_flow_m3h * r,
        max_flow_m3h: curve.max_flow_m3h * r,
    })
}
