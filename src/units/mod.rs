//! 단위 정의 및 변환 모듈 모음.
//! 유량은 m³/h, 압력은 bar, 점도는 cP를 내부 기준으로 삼는다.

pub mod flow;
pub mod pressure;
pub mod viscosity;

pub use flow::{convert_flow, FlowUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
