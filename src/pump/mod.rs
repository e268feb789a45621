//! 원심 펌프 수리 계산 모듈을 모아둔다.
//! NPSH, 동력/모터, 상사법칙, 비속도, 성능 곡선 보간, 시스템 곡선/운전점, 사이징 요약으로 구성한다.

pub mod affinity;
pub mod curve;
pub mod npsh;
pub mod operating_range;
pub mod power;
pub mod sizing;
pub mod specific_speed;
pub mod system_curve;

pub use affinity::*;
pub use curve::{
    interpolate_pump_curve, BestEfficiencyPoint, CurveSample, PumpCurve, PumpCurvePoint,
};
pub use npsh::*;
pub use power::*;
pub use specific_speed::*;
pub use system_curve::*;
