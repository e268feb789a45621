//! 펌프 성능 곡선 데이터와 구간 선형 보간.

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, HydraulicsError, HydraulicsResult};

/// 성능 곡선의 한 점.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpCurvePoint {
    pub flow_m3h: f64,
    pub head_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_kw: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npsh_required_m: Option<f64>,
}

impl PumpCurvePoint {
    /// 유량/양정만 가진 점
    pub fn new(flow_m3h: f64, head_m: f64) -> Self {
        Self {
            flow_m3h,
            head_m,
            efficiency_percent: None,
            power_kw: None,
            npsh_required_m: None,
        }
    }

    pub fn with_efficiency(mut self, efficiency_percent: f64) -> Self {
        self.efficiency_percent = Some(efficiency_percent);
        self
    }

    pub fn with_npsh_required(mut self, npsh_required_m: f64) -> Self {
        self.npsh_required_m = Some(npsh_required_m);
        self
    }
}

/// 최고 효율점(BEP).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestEfficiencyPoint {
    pub flow_m3h: f64,
    pub head_m: f64,
    pub efficiency_percent: f64,
}

/// 제조사 펌프 성능 곡선. 점은 유량 오름차순(엄격 증가)으로 정렬되어 있어야 한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpCurve {
    pub pump_model: String,
    pub impeller_diameter_mm: f64,
    pub speed_rpm: f64,
    pub points: Vec<PumpCurvePoint>,
    pub shutoff_head_m: f64,
    pub best_efficiency_point: BestEfficiencyPoint,
    pub min_continuous_flow_m3h: f64,
    pub max_flow_m3h: f64,
}

/// 보간 결과. 원본 점의 선택 열은 양쪽 점에 모두 있을 때만 보간된다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSample {
    pub flow_m3h: f64,
    pub head_m: f64,
    pub efficiency_percent: Option<f64>,
    pub power_kw: Option<f64>,
    pub npsh_required_m: Option<f64>,
}

impl From<&PumpCurvePoint> for CurveSample {
    fn from(p: &PumpCurvePoint) -> Self {
        Self {
            flow_m3h: p.flow_m3h,
            head_m: p.head_m,
            efficiency_percent: p.efficiency_percent,
            power_kw: p.power_kw,
            npsh_required_m: p.npsh_required_m,
        }
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// 점 목록이 보간 가능한지 검사한다: 2점 이상, 유한값, 유량 엄격 증가.
pub(crate) fn validate_points<I>(label: &str, points: I) -> HydraulicsResult<()>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut count = 0usize;
    let mut prev_flow: Option<f64> = None;
    for (flow, head) in points {
        if !flow.is_finite() || !head.is_finite() {
            return Err(HydraulicsError::InvalidCurve(format!(
                "{label}: {count}번째 점에 유한하지 않은 값이 있습니다"
            )));
        }
        if let Some(prev) = prev_flow {
            if flow <= prev {
                return Err(HydraulicsError::InvalidCurve(format!(
                    "{label}: 유량이 오름차순이 아닙니다 ({prev} → {flow})"
                )));
            }
        }
        prev_flow = Some(flow);
        count += 1;
    }
    if count < 2 {
        return Err(HydraulicsError::InvalidCurve(format!(
            "{label}: 최소 2개의 점이 필요합니다 (현재 {count}개)"
        )));
    }
    Ok(())
}

/// 정렬된 (유량, 값) 목록에서 선형 보간한다. 범위 밖이면 None.
pub(crate) fn lerp_at(points: &[(f64, f64)], flow: f64) -> Option<f64> {
    let first = points.first()?;
    let last = points.last()?;
    if flow < first.0 || flow > last.0 {
        return None;
    }
    let upper = points.iter().position(|p| p.0 >= flow)?;
    if upper == 0 || points[upper].0 == flow {
        return Some(points[upper].1);
    }
    let (q0, v0) = points[upper - 1];
    let (q1, v1) = points[upper];
    let t = (flow - q0) / (q1 - q0);
    Some(v0 + t * (v1 - v0))
}

fn lerp_optional(lower: Option<f64>, upper: Option<f64>, t: f64) -> Option<f64> {
    match (lower, upper) {
        (Some(a), Some(b)) => Some(a + t * (b - a)),
        _ => None,
    }
}

impl PumpCurve {
    /// 곡선 데이터의 불변조건을 검사한다.
    pub fn validate(&self) -> HydraulicsResult<()> {
        validate_points(
            &self.pump_model,
            self.points.iter().map(|p| (p.flow_m3h, p.head_m)),
        )?;
        for p in &self.points {
            if p.flow_m3h < 0.0 {
                return Err(HydraulicsError::InvalidCurve(format!(
                    "{}: 음의 유량 {}",
                    self.pump_model, p.flow_m3h
                )));
            }
            let optional = [p.efficiency_percent, p.power_kw, p.npsh_required_m];
            if optional.iter().flatten().any(|v| !v.is_finite()) {
                return Err(HydraulicsError::InvalidCurve(format!(
                    "{}: 유량 {} 점의 선택 열에 유한하지 않은 값이 있습니다",
                    self.pump_model, p.flow_m3h
                )));
            }
        }
        let first = &self.points[0];
        let last = &self.points[self.points.len() - 1];
        // 보간 상한이므로 마지막 점 유량과 정확히 같아야 한다.
        if self.max_flow_m3h != last.flow_m3h {
            return Err(HydraulicsError::InvalidCurve(format!(
                "{}: 최대 유량 {}이(가) 마지막 점 유량 {}과(와) 다릅니다",
                self.pump_model, self.max_flow_m3h, last.flow_m3h
            )));
        }
        if first.flow_m3h == 0.0 && !approx_eq(self.shutoff_head_m, first.head_m) {
            return Err(HydraulicsError::InvalidCurve(format!(
                "{}: 체절 양정 {}이(가) 0 유량 점 양정 {}과(와) 다릅니다",
                self.pump_model, self.shutoff_head_m, first.head_m
            )));
        }
        Ok(())
    }
}

/// 주어진 유량에서 곡선 값을 보간한다.
///
/// - 유량 < 0 또는 최대 유량 초과: `Ok(None)`
/// - 저장된 점과 정확히 같은 유량: 그 점의 값을 그대로 반환
/// - 첫 점 유량 이하: 첫 점 반환(외삽하지 않음)
pub fn interpolate_pump_curve(
    curve: &PumpCurve,
    flow_m3h: f64,
) -> HydraulicsResult<Option<CurveSample>> {
    curve.validate()?;
    let flow = check_finite("유량", flow_m3h)?;
    if flow < 0.0 || flow > curve.max_flow_m3h {
        return Ok(None);
    }

    Ok(sample_points(&curve.points, flow))
}

/// 정렬·검증된 점 목록에서 유량 `flow`의 값을 구한다.
/// 첫 점 이하이면 첫 점, 마지막 점 초과이면 None.
pub(crate) fn sample_points(points: &[PumpCurvePoint], flow: f64) -> Option<CurveSample> {
    let first = points.first()?;
    if flow <= first.flow_m3h {
        return Some(CurveSample::from(first));
    }
    let upper = points.iter().position(|p| p.flow_m3h >= flow)?;
    let hi = &points[upper];
    if hi.flow_m3h == flow {
        return Some(CurveSample::from(hi));
    }
    let lo = &points[upper - 1];
    let t = (flow - lo.flow_m3h) / (hi.flow_m3h - lo.flow_m3h);

    Some(CurveSample {
        flow_m3h: flow,
        head_m: lo.head_m + t * (hi.head_m - lo.head_m),
        efficiency_percent: lerp_optional(lo.efficiency_percent, hi.efficiency_percent, t),
        power_kw: lerp_optional(lo.power_kw, hi.power_kw, t),
        npsh_required_m: lerp_optional(lo.npsh_required_m, hi.npsh_required_m, t),
    })
}
