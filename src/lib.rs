//! 펌프/밸브 수리 계산 엔진. 핵심 계산은 라이브러리로 분리하고 CLI는 얇은 표현 계층으로 둔다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod error;
pub mod pump;
pub mod quantity;
pub mod ui_cli;
pub mod units;
pub mod valve;

pub use error::{HydraulicsError, HydraulicsResult};
