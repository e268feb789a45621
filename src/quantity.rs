use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HydraulicsError;

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    Flow,
    Pressure,
    Viscosity,
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuantityKind::Flow => "flow",
            QuantityKind::Pressure => "pressure",
            QuantityKind::Viscosity => "viscosity",
        };
        f.write_str(name)
    }
}

impl FromStr for QuantityKind {
    type Err = HydraulicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flow" | "q" => Ok(QuantityKind::Flow),
            "pressure" | "p" => Ok(QuantityKind::Pressure),
            "viscosity" | "visc" => Ok(QuantityKind::Viscosity),
            _ => Err(HydraulicsError::Unsupported(format!(
                "지원하지 않는 물리량: {s}"
            ))),
        }
    }
}
