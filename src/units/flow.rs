use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, HydraulicsError, HydraulicsResult};

/// 유량 단위. 내부 기준은 m³/h이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowUnit {
    #[serde(rename = "m3/h")]
    M3PerHour,
    #[serde(rename = "l/s")]
    LitrePerSecond,
    #[serde(rename = "GPM")]
    Gpm,
    #[serde(rename = "m3/s")]
    M3PerSecond,
}

impl FlowUnit {
    pub const ALL: [FlowUnit; 4] = [
        FlowUnit::M3PerHour,
        FlowUnit::LitrePerSecond,
        FlowUnit::Gpm,
        FlowUnit::M3PerSecond,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            FlowUnit::M3PerHour => "m3/h",
            FlowUnit::LitrePerSecond => "l/s",
            FlowUnit::Gpm => "GPM",
            FlowUnit::M3PerSecond => "m3/s",
        }
    }
}

impl fmt::Display for FlowUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for FlowUnit {
    type Err = HydraulicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m3/h" | "m³/h" | "m3h" | "cmh" => Ok(FlowUnit::M3PerHour),
            "l/s" | "lps" => Ok(FlowUnit::LitrePerSecond),
            "gpm" | "usgpm" => Ok(FlowUnit::Gpm),
            "m3/s" | "m³/s" => Ok(FlowUnit::M3PerSecond),
            _ => Err(HydraulicsError::Unsupported(format!(
                "알 수 없는 유량 단위: {s}"
            ))),
        }
    }
}

/// m³/h → l/s
pub fn m3h_to_ls(m3h: f64) -> f64 {
    m3h / 3.6
}

/// l/s → m³/h
pub fn ls_to_m3h(ls: f64) -> f64 {
    ls * 3.6
}

/// m³/h → US GPM
pub fn m3h_to_gpm(m3h: f64) -> f64 {
    m3h * 4.40287
}

/// US GPM → m³/h
pub fn gpm_to_m3h(gpm: f64) -> f64 {
    gpm / 4.40287
}

pub fn ls_to_gpm(ls: f64) -> f64 {
    ls * 15.8503
}

pub fn gpm_to_ls(gpm: f64) -> f64 {
    gpm / 15.8503
}

pub fn m3h_to_m3s(m3h: f64) -> f64 {
    m3h / 3600.0
}

pub fn m3s_to_m3h(m3s: f64) -> f64 {
    m3s * 3600.0
}

fn to_m3h(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::M3PerHour => value,
        FlowUnit::LitrePerSecond => ls_to_m3h(value),
        FlowUnit::Gpm => gpm_to_m3h(value),
        FlowUnit::M3PerSecond => m3s_to_m3h(value),
    }
}

fn from_m3h(value_m3h: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::M3PerHour => value_m3h,
        FlowUnit::LitrePerSecond => m3h_to_ls(value_m3h),
        FlowUnit::Gpm => m3h_to_gpm(value_m3h),
        FlowUnit::M3PerSecond => m3h_to_m3s(value_m3h),
    }
}

/// 유량을 변환한다. 같은 단위면 값을 그대로 돌려주고, 아니면 m³/h를 거쳐 환산한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> HydraulicsResult<f64> {
    check_finite("유량", value)?;
    if from == to {
        return Ok(value);
    }
    Ok(from_m3h(to_m3h(value, from), to))
}
