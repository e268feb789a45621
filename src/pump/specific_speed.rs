//! 비속도(specific speed) 계산과 임펠러 형식 분류.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{check_non_negative, check_positive, HydraulicsResult};
use crate::units::flow::m3h_to_m3s;

/// 미터 단위 비속도: Ns = N * sqrt(Q[m³/s]) / H[m]^0.75
pub fn calculate_specific_speed_metric(
    flow_m3h: f64,
    head_m: f64,
    speed_rpm: f64,
) -> HydraulicsResult<f64> {
    let flow = check_non_negative("유량", flow_m3h)?;
    let head = check_positive("양정", head_m)?;
    let speed = check_positive("회전수", speed_rpm)?;
    Ok(speed * m3h_to_m3s(flow).sqrt() / head.powf(0.75))
}

/// 미국식 비속도: Ns = N * sqrt(Q[GPM]) / H[ft]^0.75
pub fn calculate_specific_speed_us(
    flow_gpm: f64,
    head_ft: f64,
    speed_rpm: f64,
) -> HydraulicsResult<f64> {
    let flow = check_non_negative("유량", flow_gpm)?;
    let head = check_positive("양정", head_ft)?;
    let speed = check_positive("회전수", speed_rpm)?;
    Ok(speed * flow.sqrt() / head.powf(0.75))
}

/// 비속도에 따른 펌프 임펠러 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PumpTypeByNs {
    RadialLowNs,
    RadialMediumNs,
    MixedFlow,
    AxialFlow,
}

impl PumpTypeByNs {
    pub fn as_str(self) -> &'static str {
        match self {
            PumpTypeByNs::RadialLowNs => "radial_low_ns",
            PumpTypeByNs::RadialMediumNs => "radial_medium_ns",
            PumpTypeByNs::MixedFlow => "mixed_flow",
            PumpTypeByNs::AxialFlow => "axial_flow",
        }
    }
}

impl fmt::Display for PumpTypeByNs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 분류 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PumpTypeClassification {
    pub pump_type: PumpTypeByNs,
    pub description: &'static str,
    pub typical_efficiency: &'static str,
    /// 대표 효율 범위(%) (하한, 상한)
    pub efficiency_range_percent: (f64, f64),
}

impl PumpTypeClassification {
    /// 대표 효율 범위의 중앙값(%)
    pub fn mid_efficiency_percent(&self) -> f64 {
        let (lo, hi) = self.efficiency_range_percent;
        (lo + hi) / 2.0
    }
}

struct NsBand {
    /// 이 값 미만이면 해당 형식(미터 Ns)
    upper: f64,
    class: PumpTypeClassification,
}

static NS_BANDS: [NsBand; 4] = [
    NsBand {
        upper: 25.0,
        class: PumpTypeClassification {
            pump_type: PumpTypeByNs::RadialLowNs,
            description: "Radial flow - Low specific speed",
            typical_efficiency: "60-75%",
            efficiency_range_percent: (60.0, 75.0),
        },
    },
    NsBand {
        upper: 70.0,
        class: PumpTypeClassification {
            pump_type: PumpTypeByNs::RadialMediumNs,
            description: "Radial flow - Medium specific speed (most common)",
            typical_efficiency: "75-85%",
            efficiency_range_percent: (75.0, 85.0),
        },
    },
    NsBand {
        upper: 160.0,
        class: PumpTypeClassification {
            pump_type: PumpTypeByNs::MixedFlow,
            description: "Mixed flow pump",
            typical_efficiency: "80-88%",
            efficiency_range_percent: (80.0, 88.0),
        },
    },
    NsBand {
        upper: f64::INFINITY,
        class: PumpTypeClassification {
            pump_type: PumpTypeByNs::AxialFlow,
            description: "Axial flow pump",
            typical_efficiency: "85-92%",
            efficiency_range_percent: (85.0, 92.0),
        },
    },
];

/// 미터 단위 비속도로 펌프 형식을 분류한다.
/// 경계: 25 미만 저Ns 반경류, 70 미만 중Ns 반경류, 160 미만 사류, 그 이상 축류.
pub fn get_pump_type_by_specific_speed(ns_metric: f64) -> HydraulicsResult<PumpTypeClassification> {
    let ns = check_non_negative("비속도", ns_metric)?;
    let band = NS_BANDS
        .iter()
        .find(|band| ns < band.upper)
        .unwrap_or(&NS_BANDS[NS_BANDS.len() - 1]);
    Ok(band.class)
}
