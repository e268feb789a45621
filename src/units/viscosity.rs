use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, check_positive, HydraulicsError, HydraulicsResult};

/// 점도 단위. 내부 기준은 cP이다.
/// 동점도(cSt, m²/s)와 점도(cP, Pa·s) 사이를 넘나들 때는 비중이 필요하다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViscosityUnit {
    #[serde(rename = "cP")]
    Centipoise,
    #[serde(rename = "cSt")]
    Centistokes,
    #[serde(rename = "Pa·s")]
    PascalSecond,
    #[serde(rename = "m²/s")]
    SquareMeterPerSecond,
}

impl ViscosityUnit {
    pub const ALL: [ViscosityUnit; 4] = [
        ViscosityUnit::Centipoise,
        ViscosityUnit::Centistokes,
        ViscosityUnit::PascalSecond,
        ViscosityUnit::SquareMeterPerSecond,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ViscosityUnit::Centipoise => "cP",
            ViscosityUnit::Centistokes => "cSt",
            ViscosityUnit::PascalSecond => "Pa·s",
            ViscosityUnit::SquareMeterPerSecond => "m²/s",
        }
    }

    /// 동점도 단위 여부
    pub fn is_kinematic(self) -> bool {
        matches!(
            self,
            ViscosityUnit::Centistokes | ViscosityUnit::SquareMeterPerSecond
        )
    }
}

impl fmt::Display for ViscosityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ViscosityUnit {
    type Err = HydraulicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cp" | "cps" | "centipoise" => Ok(ViscosityUnit::Centipoise),
            "cst" | "centistokes" => Ok(ViscosityUnit::Centistokes),
            "pa·s" | "pa.s" | "pas" | "pa s" => Ok(ViscosityUnit::PascalSecond),
            "m²/s" | "m2/s" => Ok(ViscosityUnit::SquareMeterPerSecond),
            _ => Err(HydraulicsError::Unsupported(format!(
                "알 수 없는 점도 단위: {s}"
            ))),
        }
    }
}

/// cP → cSt (비중 필요)
pub fn cp_to_cst(cp: f64, sg: f64) -> f64 {
    cp / sg
}

/// cSt → cP (비중 필요)
pub fn cst_to_cp(cst: f64, sg: f64) -> f64 {
    cst * sg
}

pub fn cp_to_pas(cp: f64) -> f64 {
    cp / 1000.0
}

pub fn pas_to_cp(pas: f64) -> f64 {
    pas * 1000.0
}

pub fn cst_to_m2s(cst: f64) -> f64 {
    cst / 1_000_000.0
}

pub fn m2s_to_cst(m2s: f64) -> f64 {
    m2s * 1_000_000.0
}

fn to_cp(value: f64, unit: ViscosityUnit, sg: f64) -> f64 {
    match unit {
        ViscosityUnit::Centipoise => value,
        ViscosityUnit::Centistokes => cst_to_cp(value, sg),
        ViscosityUnit::PascalSecond => pas_to_cp(value),
        ViscosityUnit::SquareMeterPerSecond => cst_to_cp(m2s_to_cst(value), sg),
    }
}

fn from_cp(value_cp: f64, unit: ViscosityUnit, sg: f64) -> f64 {
    match unit {
        ViscosityUnit::Centipoise => value_cp,
        ViscosityUnit::Centistokes => cp_to_cst(value_cp, sg),
        ViscosityUnit::PascalSecond => cp_to_pas(value_cp),
        ViscosityUnit::SquareMeterPerSecond => cst_to_m2s(cp_to_cst(value_cp, sg)),
    }
}

/// 점도를 변환한다. cP를 거쳐 환산한다.
///
/// `specific_gravity`는 동점도와 점도 사이를 넘나드는 경우에만 쓰이며, 그때는
/// 0보다 큰 유한값이어야 한다. 별도 값이 없으면 물 기준 1.0을 넘긴다.
pub fn convert_viscosity(
    value: f64,
    from: ViscosityUnit,
    to: ViscosityUnit,
    specific_gravity: f64,
) -> HydraulicsResult<f64> {
    check_finite("점도", value)?;
    if from == to {
        return Ok(value);
    }
    // 같은 계열끼리는 비중이 상쇄되므로 1로 둔다.
    let sg = if from.is_kinematic() != to.is_kinematic() {
        check_positive("비중", specific_gravity)?
    } else {
        1.0
    };
    Ok(from_cp(to_cp(value, from, sg), to, sg))
}
