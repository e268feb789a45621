use crate::error::HydraulicsResult;
use crate::quantity::QuantityKind;
use crate::units::*;

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `m3/h`, `GPM`, `bar`, `mWC`, `cP`, `cSt` 등을 사용할 수 있다.
/// `specific_gravity`는 점도를 동점도↔점도로 바꿀 때만 쓰인다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
    specific_gravity: f64,
) -> HydraulicsResult<f64> {
    match kind {
        QuantityKind::Flow => {
            let from: FlowUnit = from_unit_str.parse()?;
            let to: FlowUnit = to_unit_str.parse()?;
            convert_flow(value, from, to)
        }
        QuantityKind::Pressure => {
            let from: PressureUnit = from_unit_str.parse()?;
            let to: PressureUnit = to_unit_str.parse()?;
            convert_pressure(value, from, to)
        }
        QuantityKind::Viscosity => {
            let from: ViscosityUnit = from_unit_str.parse()?;
            let to: ViscosityUnit = to_unit_str.parse()?;
            convert_viscosity(value, from, to, specific_gravity)
        }
    }
}
