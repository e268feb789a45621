use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::AppError;
use crate::config::{Config, UnitSystem, DEFAULT_CONFIG_FILE};
use crate::conversion;
use crate::error::HydraulicsError;
use crate::pump::operating_range::{validate_operating_point, Severity};
use crate::pump::sizing::{
    estimate_pump_requirements, pump_sizing_summary, NpshStatus, PumpRequirementsInput,
    PumpSizingInput,
};
use crate::pump::{self, PumpCurve, SystemCurveConfig, SystemCurveOptions};
use crate::quantity::QuantityKind;
use crate::units::flow::m3h_to_gpm;
use crate::valve::{self, CvGasInput, CvLiquidInput, GasFlowRegime, ValveSizingInput};

const METER_PER_FOOT: f64 = 0.3048;

/// 펌프/밸브 수리 계산 CLI.
#[derive(Parser, Debug)]
#[command(name = "pump_hydraulics_toolbox")]
#[command(about = "Pump Hydraulics Toolbox - 펌프/밸브 수리 계산", long_about = None)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 유량/압력/점도 단위 변환
    Convert(ConvertArgs),
    /// 물의 증기압(Antoine 식, 0~100 °C)
    VaporPressure {
        /// 수온 [°C]
        temperature_c: f64,
    },
    /// 유효흡입양정(NPSHa) 및 여유 판정
    Npsh(NpshArgs),
    /// 수동력/축동력/모터 동력
    Power(PowerArgs),
    /// 표준 모터 선정
    Motor {
        /// 요구 동력 [kW]
        required_kw: f64,
    },
    /// 상사법칙 환산
    #[command(subcommand)]
    Affinity(AffinityCommand),
    /// 비속도 및 펌프 형식 분류
    SpecificSpeed(SpecificSpeedArgs),
    /// 밸브 Cv 계산
    #[command(subcommand)]
    Cv(CvCommand),
    /// 액체 조절밸브 사이징
    ValveSize(ValveSizeArgs),
    /// 시스템 저항 곡선
    SystemCurve(SystemArgs),
    /// 펌프 곡선과 시스템 곡선의 운전점
    OperatingPoint {
        /// 펌프 곡선 TOML 파일
        #[arg(long)]
        curve: PathBuf,
        #[command(flatten)]
        system: SystemArgs,
    },
    /// 펌프 곡선 보간
    Interpolate {
        /// 펌프 곡선 TOML 파일
        #[arg(long)]
        curve: PathBuf,
        /// 유량 [m3/h]
        flow_m3h: f64,
    },
    /// 운전점의 허용 운전 범위 점검
    Validate(ValidateArgs),
    /// 견적용 펌프 사이징 요약
    Sizing(SizingArgs),
    /// 기본 단위 시스템 조회/변경
    Units {
        /// 변경할 단위 시스템 (생략 시 현재 설정 표시)
        system: Option<UnitSystemArg>,
    },
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// 물리량: flow, pressure, viscosity
    pub kind: QuantityKind,
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
    /// 입력 단위 (ex: m3/h, GPM, bar, mWC, cP, cSt)
    pub from: String,
    /// 변환 단위 (생략 시 설정의 기본 단위)
    pub to: Option<String>,
    /// 비중 (동점도↔점도 변환 시)
    #[arg(long)]
    pub sg: Option<f64>,
}

#[derive(Args, Debug)]
pub struct NpshArgs {
    /// 흡입 정수두 [m] (액면이 펌프 중심보다 낮으면 음수)
    #[arg(long, allow_negative_numbers = true)]
    pub static_head_m: f64,
    /// 흡입 배관 마찰손실 [m]
    #[arg(long, default_value_t = 0.0)]
    pub friction_loss_m: f64,
    /// 액체 증기압 [bar(a)]
    #[arg(long, conflicts_with = "temperature_c")]
    pub vapor_pressure_bar: Option<f64>,
    /// 물 온도 [°C] (증기압을 계산해 사용)
    #[arg(long)]
    pub temperature_c: Option<f64>,
    /// 대기압 [bar(a)]
    #[arg(long)]
    pub atmospheric_pressure_bar: Option<f64>,
    #[arg(long)]
    pub sg: Option<f64>,
    /// 요구 NPSH [m] (주어지면 여유 판정)
    #[arg(long)]
    pub npsh_required_m: Option<f64>,
    #[arg(long)]
    pub safety_margin_m: Option<f64>,
}

#[derive(Args, Debug)]
pub struct PowerArgs {
    /// 유량 [m3/h]
    pub flow_m3h: f64,
    /// 양정 [m]
    pub head_m: f64,
    /// 펌프 효율 [%]
    pub efficiency_percent: f64,
    #[arg(long)]
    pub sg: Option<f64>,
    /// 서비스 팩터 [%]
    #[arg(long)]
    pub service_factor_percent: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum AffinityCommand {
    /// 회전수 변경
    Speed {
        flow_m3h: f64,
        head_m: f64,
        power_kw: f64,
        from_rpm: f64,
        to_rpm: f64,
    },
    /// 임펠러 직경 변경
    Diameter {
        flow_m3h: f64,
        head_m: f64,
        power_kw: f64,
        from_mm: f64,
        to_mm: f64,
    },
}

#[derive(Args, Debug)]
pub struct SpecificSpeedArgs {
    /// 유량 [m3/h]
    pub flow_m3h: f64,
    /// 단당 양정 [m]
    pub head_m: f64,
    /// 회전수 [rpm] (생략 시 설정값)
    #[arg(long)]
    pub speed_rpm: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum CvCommand {
    /// 액체 요구 Cv
    Liquid {
        flow_gpm: f64,
        pressure_drop_psi: f64,
        #[arg(long)]
        sg: Option<f64>,
    },
    /// 기체 요구 Cv
    Gas {
        flow_scfh: f64,
        upstream_psia: f64,
        downstream_psia: f64,
        #[arg(allow_negative_numbers = true)]
        temperature_f: f64,
        /// 공기 기준 비중
        #[arg(long, default_value_t = 1.0)]
        gas_sg: f64,
        /// 압력강하비 계수 xT
        #[arg(long, default_value_t = valve::DEFAULT_PRESSURE_DROP_RATIO_FACTOR)]
        xt: f64,
    },
    /// Cv와 차압으로 통과 유량
    Flow {
        cv: f64,
        pressure_drop_psi: f64,
        #[arg(long)]
        sg: Option<f64>,
    },
    /// Cv와 유량으로 차압
    PressureDrop {
        cv: f64,
        flow_gpm: f64,
        #[arg(long)]
        sg: Option<f64>,
    },
}

#[derive(Args, Debug)]
pub struct ValveSizeArgs {
    /// 유량 [m3/h]
    pub flow_m3h: f64,
    /// 입구 압력 [bar(a)]
    pub inlet_bar: f64,
    /// 출구 압력 [bar(a)]
    pub outlet_bar: f64,
    #[arg(long)]
    pub sg: Option<f64>,
    /// 압력회복계수 FL
    #[arg(long, default_value_t = valve::DEFAULT_PRESSURE_RECOVERY_FACTOR)]
    pub fl: f64,
}

#[derive(Args, Debug, Clone)]
pub struct SystemArgs {
    /// 정수두 [m]
    #[arg(allow_negative_numbers = true)]
    pub static_head_m: f64,
    /// 설계 유량에서의 마찰손실 [m]
    pub friction_loss_m: f64,
    /// 설계 유량 [m3/h]
    pub design_flow_m3h: f64,
    /// 구간 수
    #[arg(long)]
    pub points: Option<usize>,
    /// 최대 유량 배수
    #[arg(long)]
    pub max_flow_factor: Option<f64>,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// 펌프 곡선 TOML 파일
    #[arg(long)]
    pub curve: PathBuf,
    /// 운전 유량 [m3/h]
    pub flow_m3h: f64,
    /// 운전 양정 [m]
    pub head_m: f64,
    /// 유효흡입양정 [m]
    #[arg(long)]
    pub npsh_available_m: Option<f64>,
}

#[derive(Args, Debug)]
pub struct SizingArgs {
    /// 유량 [m3/h]
    pub flow_m3h: f64,
    /// 전양정 [m]
    pub head_m: f64,
    #[arg(long)]
    pub sg: Option<f64>,
    /// 점도 [cP]
    #[arg(long)]
    pub viscosity_cp: Option<f64>,
    #[arg(long)]
    pub speed_rpm: Option<f64>,
    #[arg(long)]
    pub npsh_available_m: Option<f64>,
    /// 가정 효율로 간이 추정만 수행
    #[arg(long)]
    pub quick: bool,
    /// 간이 추정용 가정 효율 [%]
    #[arg(long, default_value_t = 70.0)]
    pub efficiency_percent: f64,
    /// 간이 추정용 요구 NPSH [m]
    #[arg(long, default_value_t = 3.0)]
    pub npsh_required_m: f64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystemArg {
    Metric,
    Imperial,
}

impl From<UnitSystemArg> for UnitSystem {
    fn from(value: UnitSystemArg) -> Self {
        match value {
            UnitSystemArg::Metric => UnitSystem::Metric,
            UnitSystemArg::Imperial => UnitSystem::Imperial,
        }
    }
}

/// TOML 펌프 곡선 파일을 읽는다.
pub fn load_curve(path: &Path) -> Result<PumpCurve, AppError> {
    let content = fs::read_to_string(path)?;
    let curve: PumpCurve = toml::from_str(&content).map_err(|source| AppError::CurveFile {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(model = %curve.pump_model, points = curve.points.len(), "곡선 로드");
    Ok(curve)
}

/// 단위 변환 명령을 처리한다.
pub fn handle_convert(args: &ConvertArgs, cfg: &Config) -> Result<(), AppError> {
    let to = match &args.to {
        Some(unit) => unit.clone(),
        None => match args.kind {
            QuantityKind::Flow => cfg.default_units.flow.to_string(),
            QuantityKind::Pressure => cfg.default_units.pressure.to_string(),
            QuantityKind::Viscosity => cfg.default_units.viscosity.to_string(),
        },
    };
    let sg = args.sg.unwrap_or(cfg.engine.specific_gravity);
    let result = conversion::convert(args.kind, args.value, &args.from, &to, sg)?;
    println!("변환 결과: {result} {to}");
    Ok(())
}

pub fn handle_vapor_pressure(temperature_c: f64) -> Result<(), AppError> {
    let pv = pump::water_vapor_pressure_bar(temperature_c)?;
    println!("물 {temperature_c} °C 증기압: {pv:.5} bar(a)");
    Ok(())
}

/// NPSHa 계산 및 여유 판정.
pub fn handle_npsh(args: &NpshArgs, cfg: &Config) -> Result<(), AppError> {
    let vapor = match (args.vapor_pressure_bar, args.temperature_c) {
        (Some(pv), _) => pv,
        (None, Some(t)) => pump::water_vapor_pressure_bar(t)?,
        (None, None) => {
            return Err(HydraulicsError::Unsupported(
                "--vapor-pressure-bar 또는 --temperature-c 중 하나가 필요합니다".to_string(),
            )
            .into())
        }
    };
    let input = pump::NpshAvailableInput {
        liquid_vapor_pressure_bar: vapor,
        static_suction_head_m: args.static_head_m,
        friction_loss_m: args.friction_loss_m,
        atmospheric_pressure_bar: args
            .atmospheric_pressure_bar
            .unwrap_or(cfg.engine.atmospheric_pressure_bar),
        specific_gravity: args.sg.unwrap_or(cfg.engine.specific_gravity),
    };
    let npsha = pump::calculate_npsh_available(&input)?;
    println!("증기압: {vapor:.5} bar(a)");
    println!("NPSHa: {npsha:.2} m");

    if let Some(npshr) = args.npsh_required_m {
        let safety = args.safety_margin_m.unwrap_or(cfg.engine.npsh_safety_margin_m);
        let check = pump::check_npsh_margin(npsha, npshr, safety)?;
        tracing::debug!(margin = check.margin_m, adequate = check.is_adequate, "NPSH 판정");
        println!("NPSHr: {npshr:.2} m, 여유: {:.2} m", check.margin_m);
        if let Some(pct) = check.margin_percent {
            println!("여유율: {pct:.1} %");
        }
        println!("판정: {}", if check.is_adequate { "적정" } else { "부족" });
        println!("{}", check.recommendation);
    }
    Ok(())
}

/// 동력 계산과 모터 선정.
pub fn handle_power(args: &PowerArgs, cfg: &Config) -> Result<(), AppError> {
    let sg = args.sg.unwrap_or(cfg.engine.specific_gravity);
    let sf = args
        .service_factor_percent
        .unwrap_or(cfg.engine.service_factor_percent);
    let hydraulic = pump::calculate_hydraulic_power(args.flow_m3h, args.head_m, sg)?;
    let shaft = pump::calculate_shaft_power(hydraulic, args.efficiency_percent)?;
    let motor_power = pump::calculate_motor_power(shaft, sf)?;
    println!("수동력: {hydraulic:.3} kW");
    println!("축동력: {shaft:.3} kW");
    println!("모터 요구 동력 (SF {sf}%): {motor_power:.3} kW");
    print_motor(pump::select_motor(motor_power)?);
    Ok(())
}

pub fn handle_motor(required_kw: f64) -> Result<(), AppError> {
    print_motor(pump::select_motor(required_kw)?);
    Ok(())
}

fn print_motor(selection: pump::MotorSelection) {
    println!("표준 모터: {} kW", selection.size_kw);
    if selection.saturated {
        tracing::warn!(size_kw = selection.size_kw, "요구 동력이 표준 모터 표 최대값 초과");
        println!("주의: 요구 동력이 표준 모터 최대 용량을 넘습니다. 별도 검토가 필요합니다.");
    }
}

pub fn handle_affinity(cmd: &AffinityCommand) -> Result<(), AppError> {
    let result = match *cmd {
        AffinityCommand::Speed {
            flow_m3h,
            head_m,
            power_kw,
            from_rpm,
            to_rpm,
        } => pump::calculate_affinity_laws_speed(flow_m3h, head_m, power_kw, from_rpm, to_rpm)?,
        AffinityCommand::Diameter {
            flow_m3h,
            head_m,
            power_kw,
            from_mm,
            to_mm,
        } => pump::calculate_affinity_laws_diameter(flow_m3h, head_m, power_kw, from_mm, to_mm)?,
    };
    println!(
        "회전수비: {:.4}, 직경비: {:.4}",
        result.speed_ratio, result.diameter_ratio
    );
    println!(
        "유량: {:.2} m3/h, 양정: {:.2} m, 동력: {:.3} kW",
        result.new_flow_m3h, result.new_head_m, result.new_power_kw
    );
    Ok(())
}

pub fn handle_specific_speed(args: &SpecificSpeedArgs, cfg: &Config) -> Result<(), AppError> {
    let speed = args.speed_rpm.unwrap_or(cfg.engine.speed_rpm);
    let ns = pump::calculate_specific_speed_metric(args.flow_m3h, args.head_m, speed)?;
    let ns_us = pump::calculate_specific_speed_us(
        m3h_to_gpm(args.flow_m3h),
        args.head_m / METER_PER_FOOT,
        speed,
    )?;
    let class = pump::get_pump_type_by_specific_speed(ns)?;
    println!("비속도 Ns (metric): {ns:.1}");
    println!("비속도 Ns (US): {ns_us:.0}");
    println!("형식: {} - {}", class.pump_type, class.description);
    println!("대표 효율: {}", class.typical_efficiency);
    Ok(())
}

pub fn handle_cv(cmd: &CvCommand, cfg: &Config) -> Result<(), AppError> {
    let default_sg = cfg.engine.specific_gravity;
    match *cmd {
        CvCommand::Liquid {
            flow_gpm,
            pressure_drop_psi,
            sg,
        } => {
            let result = valve::calculate_cv_liquid(&CvLiquidInput {
                flow_rate_gpm: flow_gpm,
                pressure_drop_psi,
                specific_gravity: sg.unwrap_or(default_sg),
            })?;
            println!(
                "요구 Cv: {:.3}, Kv: {:.3}",
                result.cv,
                valve::kv_from_cv(result.cv)
            );
        }
        CvCommand::Gas {
            flow_scfh,
            upstream_psia,
            downstream_psia,
            temperature_f,
            gas_sg,
            xt,
        } => {
            let result = valve::calculate_cv_gas(&CvGasInput {
                flow_rate_scfh: flow_scfh,
                upstream_pressure_psia: upstream_psia,
                downstream_pressure_psia: downstream_psia,
                temperature_f,
                specific_gravity_gas: gas_sg,
                pressure_drop_ratio_factor: xt,
            })?;
            println!(
                "요구 Cv: {:.3}, Kv: {:.3}",
                result.cv,
                valve::kv_from_cv(result.cv)
            );
            println!(
                "팽창계수 Y: {:.3}, 압력강하비 x: {:.3}",
                result.expansion_factor, result.pressure_drop_ratio
            );
            if result.regime == GasFlowRegime::Critical {
                println!("임계(choked) 유동: 차압을 늘려도 유량이 증가하지 않습니다.");
            }
        }
        CvCommand::Flow {
            cv,
            pressure_drop_psi,
            sg,
        } => {
            let flow =
                valve::calculate_flow_from_cv(cv, pressure_drop_psi, sg.unwrap_or(default_sg))?;
            println!("통과 유량: {flow:.3} GPM");
        }
        CvCommand::PressureDrop { cv, flow_gpm, sg } => {
            let dp =
                valve::calculate_pressure_drop_from_cv(cv, flow_gpm, sg.unwrap_or(default_sg))?;
            println!("차압: {dp:.3} psi");
        }
    }
    Ok(())
}

pub fn handle_valve_size(args: &ValveSizeArgs, cfg: &Config) -> Result<(), AppError> {
    let result = valve::size_control_valve(&ValveSizingInput {
        flow_rate_m3h: args.flow_m3h,
        inlet_pressure_bar: args.inlet_bar,
        outlet_pressure_bar: args.outlet_bar,
        specific_gravity: args.sg.unwrap_or(cfg.engine.specific_gravity),
        pressure_recovery_factor: args.fl,
    })?;
    println!(
        "요구 Cv (안전율 포함): {:.2}, Kv: {:.2}",
        result.required_cv,
        valve::kv_from_cv(result.required_cv)
    );
    println!(
        "추천 구경: {} (Cv {})",
        result.recommended_valve.size, result.recommended_valve.cv
    );
    if result.exceeds_largest_size {
        println!("주의: 요구 Cv가 표준 최대 구경을 넘습니다. 병렬 밸브를 검토하세요.");
    }
    println!("캐비테이션 지수 σ: {:.3}", result.cavitation_index);
    if let Some(warning) = &result.cavitation_warning {
        println!("{warning}");
    }
    Ok(())
}

fn system_parts(args: &SystemArgs, cfg: &Config) -> (SystemCurveConfig, SystemCurveOptions) {
    let mut options = cfg.system_curve_options();
    if let Some(n) = args.points {
        options.num_points = n;
    }
    if let Some(factor) = args.max_flow_factor {
        options.max_flow_factor = factor;
    }
    let system = SystemCurveConfig {
        static_head_m: args.static_head_m,
        friction_loss_at_design_flow_m: args.friction_loss_m,
        design_flow_m3h: args.design_flow_m3h,
    };
    (system, options)
}

pub fn handle_system_curve(args: &SystemArgs, cfg: &Config) -> Result<(), AppError> {
    let (system, options) = system_parts(args, cfg);
    let points = pump::calculate_system_curve(&system, &options)?;
    println!("{:>12} {:>10}", "유량[m3/h]", "양정[m]");
    for p in &points {
        println!("{:>12.2} {:>10.2}", p.flow_m3h, p.head_m);
    }
    Ok(())
}

pub fn handle_operating_point(
    curve_path: &Path,
    args: &SystemArgs,
    cfg: &Config,
) -> Result<(), AppError> {
    let curve = load_curve(curve_path)?;
    let (system, options) = system_parts(args, cfg);
    match pump::operating_point_for_system(&curve, &system, &options)? {
        Some(op) => {
            tracing::debug!(flow = op.flow_m3h, head = op.head_m, "운전점 발견");
            println!("운전점: {:.2} m3/h, {:.2} m", op.flow_m3h, op.head_m);
            if let Some(eff) = op.efficiency_percent {
                println!("효율: {eff:.1} %");
            }
        }
        None => {
            tracing::info!(model = %curve.pump_model, "운전점 없음");
            println!("공통 유량 범위 안에서 두 곡선이 만나지 않습니다.");
        }
    }
    Ok(())
}

pub fn handle_interpolate(curve_path: &Path, flow_m3h: f64) -> Result<(), AppError> {
    let curve = load_curve(curve_path)?;
    match pump::interpolate_pump_curve(&curve, flow_m3h)? {
        Some(sample) => {
            println!("유량: {:.2} m3/h, 양정: {:.2} m", sample.flow_m3h, sample.head_m);
            if let Some(eff) = sample.efficiency_percent {
                println!("효율: {eff:.1} %");
            }
            if let Some(power) = sample.power_kw {
                println!("동력: {power:.2} kW");
            }
            if let Some(npshr) = sample.npsh_required_m {
                println!("NPSHr: {npshr:.2} m");
            }
        }
        None => println!("유량 {flow_m3h} m3/h 는 곡선 범위를 벗어납니다."),
    }
    Ok(())
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "정보",
        Severity::Warning => "경고",
        Severity::Error => "오류",
    }
}

pub fn handle_validate(args: &ValidateArgs) -> Result<(), AppError> {
    let curve = load_curve(&args.curve)?;
    let report =
        validate_operating_point(&curve, args.flow_m3h, args.head_m, args.npsh_available_m)?;
    println!("판정: {:?} (유효: {})", report.status, report.is_valid);
    println!(
        "BEP 대비 유량 {:.0}%, 양정 {:.0}%",
        report.metrics.flow_ratio_to_bep * 100.0,
        report.metrics.head_ratio_to_bep * 100.0
    );
    for issue in &report.issues {
        println!("[{}] {}", severity_label(issue.severity), issue.message);
        if let Some(rec) = issue.recommendation {
            println!("    → {rec}");
        }
    }
    Ok(())
}

pub fn handle_sizing(args: &SizingArgs, cfg: &Config) -> Result<(), AppError> {
    let sg = args.sg.unwrap_or(cfg.engine.specific_gravity);
    if args.quick {
        let req = estimate_pump_requirements(&PumpRequirementsInput {
            flow_m3h: args.flow_m3h,
            head_m: args.head_m,
            specific_gravity: sg,
            estimated_efficiency_percent: args.efficiency_percent,
            estimated_npsh_required_m: args.npsh_required_m,
        })?;
        println!(
            "수동력: {:.3} kW, 축동력: {:.3} kW",
            req.hydraulic_power_kw, req.estimated_shaft_power_kw
        );
        println!("추천 모터: {} kW", req.recommended_motor_kw);
        println!("요구 NPSH: {:.1} m", req.npsh_required_m);
        println!(
            "권장 유량 범위: {:.1} ~ {:.1} m3/h",
            req.min_recommended_flow_m3h, req.max_recommended_flow_m3h
        );
        return Ok(());
    }

    let summary = pump_sizing_summary(&PumpSizingInput {
        flow_m3h: args.flow_m3h,
        total_head_m: args.head_m,
        specific_gravity: sg,
        viscosity_cp: args.viscosity_cp,
        speed_rpm: args.speed_rpm.unwrap_or(cfg.engine.speed_rpm),
        npsh_available_m: args.npsh_available_m,
    })?;
    println!(
        "비속도 Ns: {:.1} → {} ({})",
        summary.specific_speed_metric, summary.pump_type.pump_type, summary.pump_type.description
    );
    println!("추정 효율: {:.1} %", summary.estimated_efficiency_percent);
    println!(
        "수동력: {:.3} kW, 축동력: {:.3} kW",
        summary.hydraulic_power_kw, summary.estimated_shaft_power_kw
    );
    println!("추천 모터: {} kW", summary.recommended_motor_kw);
    if summary.motor_saturated {
        println!("주의: 표준 모터 최대 용량을 넘습니다.");
    }
    if let Some(status) = summary.npsh_status {
        let label = match status {
            NpshStatus::Ok { .. } => "양호",
            NpshStatus::Marginal { .. } => "여유 부족",
            NpshStatus::CavitationRisk { .. } => "캐비테이션 위험",
        };
        println!("NPSH: {label} (여유 {:.2} m)", status.margin_m());
    }
    if let Some(advice) = summary.viscosity_advice {
        println!("점도: {}", advice.message());
    }
    println!(
        "연속 운전 범위: {:.1} ~ {:.1} m3/h",
        summary.min_continuous_flow_m3h, summary.max_continuous_flow_m3h
    );
    Ok(())
}

/// 단위 시스템을 표시하거나 바꾼다. 바뀌었으면 true.
pub fn handle_units(system: Option<UnitSystemArg>, cfg: &mut Config) -> bool {
    let changed = match system {
        Some(arg) => {
            cfg.set_unit_system(arg.into());
            println!("단위 시스템이 {:?} 로 설정되었습니다.", cfg.unit_system);
            true
        }
        None => {
            println!("현재 단위 시스템: {:?}", cfg.unit_system);
            false
        }
    };
    let units = &cfg.default_units;
    println!(
        "기본 단위: 유량 {}, 압력 {}, 점도 {}",
        units.flow, units.pressure, units.viscosity
    );
    changed
}
