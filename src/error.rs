//! 수리 계산 엔진 공통 오류 정의.
//!
//! 엔진 함수는 오류를 감지한 지점에서 즉시 `Err`로 반환하며, 로그를 남기거나
//! 재시도하지 않는다. 표시/복구는 호출자(CLI 등)의 몫이다.

use thiserror::Error;

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

/// 엔진 오류 분류.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    /// 물리적으로 유효하지 않거나 지원 범위를 벗어난 입력값
    #[error("입력 범위 오류: {what} (값: {value})")]
    DomainRange {
        what: &'static str,
        value: f64,
    },

    /// 숫자가 아닌 입력(단위 기호 등)이 지원 범위를 벗어난 경우
    #[error("입력 범위 오류: {0}")]
    Unsupported(String),

    /// 점 개수 부족, 정렬 위반, 비유한값 등 잘못된 곡선 데이터
    #[error("곡선 데이터 오류: {0}")]
    InvalidCurve(String),
}

impl HydraulicsError {
    pub(crate) fn domain(what: &'static str, value: f64) -> Self {
        HydraulicsError::DomainRange { what, value }
    }

    /// 입력 범위 계열 오류인지 여부. 단위 기호 오류도 여기에 속한다.
    pub fn is_domain_range(&self) -> bool {
        matches!(
            self,
            HydraulicsError::DomainRange { .. } | HydraulicsError::Unsupported(_)
        )
    }
}

/// 유한한 값인지 확인한다.
pub(crate) fn check_finite(what: &'static str, value: f64) -> HydraulicsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HydraulicsError::domain(what, value))
    }
}

/// 유한하고 0보다 큰 값인지 확인한다.
pub(crate) fn check_positive(what: &'static str, value: f64) -> HydraulicsResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(HydraulicsError::domain(what, value))
    }
}

/// 유한하고 0 이상인 값인지 확인한다.
pub(crate) fn check_non_negative(what: &'static str, value: f64) -> HydraulicsResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(HydraulicsError::domain(what, value))
    }
}
