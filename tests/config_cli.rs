//! 설정 파일 로드/저장 및 CLI 인자 파싱.
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use pump_hydraulics_toolbox::app::{self, AppError};
use pump_hydraulics_toolbox::config::{self, Config, UnitSystem};
use pump_hydraulics_toolbox::quantity::QuantityKind;
use pump_hydraulics_toolbox::ui_cli::{Cli, Commands, CvCommand, UnitSystemArg};
use pump_hydraulics_toolbox::units::{FlowUnit, PressureUnit};

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pump_hydraulics_{}_{name}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    dir.join("config.toml")
}

#[test]
fn missing_config_is_created_with_defaults() {
    let path = temp_path("create");
    let _ = fs::remove_file(&path);
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(cfg.engine.service_factor_percent, 115.0);
    assert_eq!(cfg.engine.system_curve_max_flow_factor, 1.5);
}

#[test]
fn saved_config_reloads() {
    let path = temp_path("save");
    let mut cfg = Config::default();
    cfg.set_unit_system(UnitSystem::Imperial);
    cfg.engine.speed_rpm = 2900.0;
    cfg.save(&path).expect("save");

    let reloaded = config::load_or_default(&path).expect("reload");
    assert_eq!(reloaded, cfg);
    assert_eq!(reloaded.default_units.flow, FlowUnit::Gpm);
    assert_eq!(reloaded.default_units.pressure, PressureUnit::Psi);
}

#[test]
fn engine_section_is_optional() {
    let text = r#"
unit_system = "Metric"

[default_units]
flow = "l/s"
pressure = "kPa"
viscosity = "cSt"
"#;
    let cfg: Config = toml::from_str(text).expect("parse");
    assert_eq!(cfg.default_units.flow, FlowUnit::LitrePerSecond);
    assert_eq!(cfg.engine, config::EngineDefaults::default());
}

#[test]
fn broken_config_is_parse_error() {
    let path = temp_path("broken");
    fs::write(&path, "unit_system = [").expect("write");
    let err = config::load_or_default(&path).unwrap_err();
    assert!(matches!(err, config::ConfigError::Parse(_)));
}

#[test]
fn cli_parses_convert_with_default_target() {
    let cli =
        Cli::try_parse_from(["pump_hydraulics_toolbox", "convert", "flow", "100", "gpm"]).unwrap();
    assert_eq!(cli.config, PathBuf::from(config::DEFAULT_CONFIG_FILE));
    match cli.command {
        Commands::Convert(args) => {
            assert_eq!(args.kind, QuantityKind::Flow);
            assert_eq!(args.value, 100.0);
            assert_eq!(args.to, None);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn cli_parses_nested_cv_and_negative_head() {
    let cli = Cli::try_parse_from([
        "pump_hydraulics_toolbox",
        "--config",
        "alt.toml",
        "cv",
        "gas",
        "10000",
        "100",
        "80",
        "60",
        "--xt",
        "0.65",
    ])
    .unwrap();
    assert_eq!(cli.config, PathBuf::from("alt.toml"));
    assert!(matches!(cli.command, Commands::Cv(CvCommand::Gas { xt, .. }) if xt == 0.65));

    let cli = Cli::try_parse_from(["pump_hydraulics_toolbox", "system-curve", "-5", "10", "80"])
        .unwrap();
    match cli.command {
        Commands::SystemCurve(args) => assert_eq!(args.static_head_m, -5.0),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn cli_rejects_unknown_quantity() {
    let parsed = Cli::try_parse_from(["pump_hydraulics_toolbox", "convert", "torque", "1", "Nm"]);
    assert!(parsed.is_err());
}

#[test]
fn units_command_persists_choice() {
    let path = temp_path("units");
    let mut cfg = Config::default();
    app::run(
        Commands::Units {
            system: Some(UnitSystemArg::Imperial),
        },
        &mut cfg,
        &path,
    )
    .expect("units");
    let saved = config::load_or_default(&path).expect("reload");
    assert_eq!(saved.unit_system, UnitSystem::Imperial);
}

#[test]
fn engine_errors_surface_through_app() {
    let path = temp_path("engine_err");
    let mut cfg = Config::default();
    let err = app::run(Commands::Motor { required_kw: -3.0 }, &mut cfg, &path).unwrap_err();
    assert!(matches!(err, AppError::Hydraulics(ref e) if e.is_domain_range()));
}

#[test]
fn missing_curve_file_is_io_error() {
    let cli = Cli::try_parse_from([
        "pump_hydraulics_toolbox",
        "interpolate",
        "--curve",
        "/nonexistent/curve.toml",
        "50",
    ])
    .unwrap();
    let mut cfg = Config::default();
    let err = app::run(cli.command, &mut cfg, &temp_path("curve_io")).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}
