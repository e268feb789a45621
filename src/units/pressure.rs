use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, HydraulicsError, HydraulicsResult};

/// 압력 단위. 내부 기준은 bar이다.
/// 게이지/절대 구분은 하지 않으며 호출자가 같은 기준으로 입력한다고 가정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "psi")]
    Psi,
    #[serde(rename = "kPa")]
    KiloPascal,
    #[serde(rename = "MPa")]
    MegaPascal,
    /// 수주(m water column)
    #[serde(rename = "mWC")]
    MeterWaterColumn,
}

impl PressureUnit {
    pub const ALL: [PressureUnit; 5] = [
        PressureUnit::Bar,
        PressureUnit::Psi,
        PressureUnit::KiloPascal,
        PressureUnit::MegaPascal,
        PressureUnit::MeterWaterColumn,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::Psi => "psi",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::MeterWaterColumn => "mWC",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for PressureUnit {
    type Err = HydraulicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "bar" => Ok(PressureUnit::Bar),
            "psi" => Ok(PressureUnit::Psi),
            "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
            // mPa(밀리파스칼)와 혼동되지 않도록 기호는 대소문자를 그대로 맞춘다.
            "mpa" if trimmed == "MPa" => Ok(PressureUnit::MegaPascal),
            "megapascal" => Ok(PressureUnit::MegaPascal),
            "mwc" | "mh2o" | "m wc" => Ok(PressureUnit::MeterWaterColumn),
            _ => Err(HydraulicsError::Unsupported(format!(
                "알 수 없는 압력 단위: {s}"
            ))),
        }
    }
}

pub fn bar_to_psi(bar: f64) -> f64 {
    bar * 14.5038
}

pub fn psi_to_bar(psi: f64) -> f64 {
    psi / 14.5038
}

pub fn bar_to_kpa(bar: f64) -> f64 {
    bar * 100.0
}

pub fn kpa_to_bar(kpa: f64) -> f64 {
    kpa / 100.0
}

pub fn bar_to_mpa(bar: f64) -> f64 {
    bar / 10.0
}

pub fn mpa_to_bar(mpa: f64) -> f64 {
    mpa * 10.0
}

/// bar → 수주 m. 물(SG=1) 기준 10.197 m/bar.
pub fn bar_to_mwc(bar: f64) -> f64 {
    bar * 10.197
}

pub fn mwc_to_bar(mwc: f64) -> f64 {
    mwc / 10.197
}

pub fn psi_to_kpa(psi: f64) -> f64 {
    psi * 6.89476
}

pub fn kpa_to_psi(kpa: f64) -> f64 {
    kpa / 6.89476
}

fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::Psi => psi_to_bar(value),
        PressureUnit::KiloPascal => kpa_to_bar(value),
        PressureUnit::MegaPascal => mpa_to_bar(value),
        PressureUnit::MeterWaterColumn => mwc_to_bar(value),
    }
}

fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_bar,
        PressureUnit::Psi => bar_to_psi(value_bar),
        PressureUnit::KiloPascal => bar_to_kpa(value_bar),
        PressureUnit::MegaPascal => bar_to_mpa(value_bar),
        PressureUnit::MeterWaterColumn => bar_to_mwc(value_bar),
    }
}

/// 압력을 원하는 단위로 변환한다. bar를 거쳐 환산한다.
pub fn convert_pressure(
    value: f64,
    from: PressureUnit,
    to: PressureUnit,
) -> HydraulicsResult<f64> {
    check_finite("압력", value)?;
    if from == to {
        return Ok(value);
    }
    Ok(from_bar(to_bar(value, from), to))
}
