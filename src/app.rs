use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::error::HydraulicsError;
use crate::ui_cli::{self, Commands};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 계산 엔진 오류
    #[error("{0}")]
    Hydraulics(#[from] HydraulicsError),
    /// 펌프 곡선 파일 파싱 오류
    #[error("곡선 파일 오류 ({path}): {source}")]
    CurveFile {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 선택된 명령을 실행한다. 설정을 바꾸는 명령이면 `config_path`에 저장한다.
pub fn run(command: Commands, config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    tracing::debug!(?command, "명령 실행");
    match command {
        Commands::Convert(args) => ui_cli::handle_convert(&args, config),
        Commands::VaporPressure { temperature_c } => ui_cli::handle_vapor_pressure(temperature_c),
        Commands::Npsh(args) => ui_cli::handle_npsh(&args, config),
        Commands::Power(args) => ui_cli::handle_power(&args, config),
        Commands::Motor { required_kw } => ui_cli::handle_motor(required_kw),
        Commands::Affinity(cmd) => ui_cli::handle_affinity(&cmd),
        Commands::SpecificSpeed(args) => ui_cli::handle_specific_speed(&args, config),
        Commands::Cv(cmd) => ui_cli::handle_cv(&cmd, config),
        Commands::ValveSize(args) => ui_cli::handle_valve_size(&args, config),
        Commands::SystemCurve(args) => ui_cli::handle_system_curve(&args, config),
        Commands::OperatingPoint { curve, system } => {
            ui_cli::handle_operating_point(&curve, &system, config)
        }
        Commands::Interpolate { curve, flow_m3h } => ui_cli::handle_interpolate(&curve, flow_m3h),
        Commands::Validate(args) => ui_cli::handle_validate(&args),
        Commands::Sizing(args) => ui_cli::handle_sizing(&args, config),
        Commands::Units { system } => {
            let changed = ui_cli::handle_units(system, config);
            if changed {
                config.save(config_path)?;
            }
            Ok(())
        }
    }
}
