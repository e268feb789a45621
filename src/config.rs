use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::pump::{
    DEFAULT_MAX_FLOW_FACTOR, DEFAULT_NPSH_SAFETY_MARGIN_M, DEFAULT_SERVICE_FACTOR_PERCENT,
    DEFAULT_SYSTEM_CURVE_POINTS, STANDARD_ATMOSPHERE_BAR,
};
use crate::pump::sizing::DEFAULT_SPEED_RPM;
use crate::units::*;

/// 기본 설정 파일 이름
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// m³/h, bar, cP. 내부 계산 기본값.
    Metric,
    /// GPM, psi, cP
    Imperial,
}

/// 각 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub flow: FlowUnit,
    pub pressure: PressureUnit,
    pub viscosity: ViscosityUnit,
}

impl DefaultUnits {
    /// 단위 시스템 프리셋에 맞는 기본 단위
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self {
                flow: FlowUnit::M3PerHour,
                pressure: PressureUnit::Bar,
                viscosity: ViscosityUnit::Centipoise,
            },
            UnitSystem::Imperial => Self {
                flow: FlowUnit::Gpm,
                pressure: PressureUnit::Psi,
                viscosity: ViscosityUnit::Centipoise,
            },
        }
    }
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Metric)
    }
}

/// 계산 명령에서 인자를 생략했을 때 쓰는 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineDefaults {
    pub specific_gravity: f64,
    pub service_factor_percent: f64,
    pub npsh_safety_margin_m: f64,
    pub atmospheric_pressure_bar: f64,
    pub speed_rpm: f64,
    pub system_curve_points: usize,
    pub system_curve_max_flow_factor: f64,
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self {
            specific_gravity: 1.0,
            service_factor_percent: DEFAULT_SERVICE_FACTOR_PERCENT,
            npsh_safety_margin_m: DEFAULT_NPSH_SAFETY_MARGIN_M,
            atmospheric_pressure_bar: STANDARD_ATMOSPHERE_BAR,
            speed_rpm: DEFAULT_SPEED_RPM,
            system_curve_points: DEFAULT_SYSTEM_CURVE_POINTS,
            system_curve_max_flow_factor: DEFAULT_MAX_FLOW_FACTOR,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    #[serde(default)]
    pub engine: EngineDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            default_units: DefaultUnits::default(),
            engine: EngineDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        tracing::info!(path = %path.display(), "기본 설정 파일 생성");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 `path`에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)?;
        tracing::debug!(path = %path.display(), "설정 저장");
        Ok(())
    }

    /// 단위 시스템을 바꾸고 기본 단위를 프리셋으로 맞춘다.
    pub fn set_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::for_system(system);
    }

    /// 설정된 시스템 곡선 샘플링 옵션
    pub fn system_curve_options(&self) -> crate::pump::SystemCurveOptions {
        crate::pump::SystemCurveOptions {
            num_points: self.engine.system_curve_points,
            max_flow_factor: self.engine.system_curve_max_flow_factor,
        }
    }
}
