//! 운전점이 펌프 곡선의 허용 운전 범위 안에 있는지 점검한다.

use serde::Serialize;

use crate::error::{check_finite, check_positive, HydraulicsResult};
use crate::pump::curve::{sample_points, PumpCurve};

/// 점검 항목 심각도
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    MinimumFlow,
    MaximumFlow,
    BepRange,
    Efficiency,
    Npsh,
    HeadMatch,
}

/// 점검 결과 한 건.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
    pub recommendation: Option<&'static str>,
}

/// 종합 판정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Optimal,
    Acceptable,
    Marginal,
    Unacceptable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatingMetrics {
    pub flow_ratio_to_bep: f64,
    pub head_ratio_to_bep: f64,
    pub efficiency_at_operating_point: Option<f64>,
    pub npsh_margin_m: Option<f64>,
    pub distance_from_min_flow_m3h: f64,
    pub distance_from_max_flow_m3h: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatingRangeReport {
    pub is_valid: bool,
    pub status: OverallStatus,
    pub issues: Vec<ValidationIssue>,
    pub metrics: OperatingMetrics,
}

impl OperatingRangeReport {
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

struct Issues(Vec<ValidationIssue>);

impl Issues {
    fn push(
        &mut self,
        severity: Severity,
        category: IssueCategory,
        message: String,
        recommendation: Option<&'static str>,
    ) {
        self.0.push(ValidationIssue {
            severity,
            category,
            message,
            recommendation,
        });
    }
}

/// 운전점(유량, 양정)을 곡선의 최소/최대 유량, BEP, 효율, NPSH, 양정 일치 기준으로 점검한다.
pub fn validate_operating_point(
    curve: &PumpCurve,
    operating_flow_m3h: f64,
    operating_head_m: f64,
    npsh_available_m: Option<f64>,
) -> HydraulicsResult<OperatingRangeReport> {
    curve.validate()?;
    let flow = check_finite("운전 유량", operating_flow_m3h)?;
    let head = check_finite("운전 양정", operating_head_m)?;
    let bep = &curve.best_efficiency_point;
    check_positive("BEP 유량", bep.flow_m3h)?;
    check_positive("BEP 양정", bep.head_m)?;

    let min_flow = curve.min_continuous_flow_m3h;
    let max_flow = curve.max_flow_m3h;
    let flow_ratio = flow / bep.flow_m3h;
    let head_ratio = head / bep.head_m;

    let first_flow = curve.points[0].flow_m3h;
    let sample = if flow >= first_flow && flow <= max_flow {
        sample_points(&curve.points, flow)
    } else {
        None
    };
    let efficiency = sample.as_ref().and_then(|s| s.efficiency_percent);
    let npsh_margin = match (npsh_available_m, sample.as_ref().and_then(|s| s.npsh_required_m)) {
        (Some(available), Some(required)) => Some(available - required),
        _ => None,
    };

    let mut issues = Issues(Vec::new());

    if flow < min_flow {
        issues.push(
            Severity::Error,
            IssueCategory::MinimumFlow,
            format!(
                "Operating flow {flow:.1} m³/h is below minimum continuous flow of {min_flow} m³/h"
            ),
            Some("Install minimum flow bypass or recirculation line to protect the pump"),
        );
    } else if flow - min_flow < min_flow * 0.1 {
        issues.push(
            Severity::Warning,
            IssueCategory::MinimumFlow,
            format!(
                "Operating close to minimum continuous flow ({:.0}% of minimum)",
                flow / min_flow * 100.0
            ),
            Some("Monitor for signs of recirculation such as vibration and noise"),
        );
    }

    if flow > max_flow {
        issues.push(
            Severity::Error,
            IssueCategory::MaximumFlow,
            format!("Operating flow {flow:.1} m³/h exceeds maximum flow of {max_flow} m³/h"),
            Some("Throttle discharge or resize pump - motor may overload"),
        );
    } else if max_flow - flow < max_flow * 0.05 {
        issues.push(
            Severity::Warning,
            IssueCategory::MaximumFlow,
            format!(
                "Operating near maximum flow limit ({:.0}% of maximum)",
                flow / max_flow * 100.0
            ),
            Some("Verify motor has adequate power margin"),
        );
    }

    if flow_ratio < 0.7 {
        issues.push(
            Severity::Warning,
            IssueCategory::BepRange,
            format!(
                "Operating at {:.0}% of BEP flow - suction recirculation may occur",
                flow_ratio * 100.0
            ),
            Some("Consider a smaller pump or variable speed drive to improve efficiency"),
        );
    } else if flow_ratio > 1.2 {
        issues.push(
            Severity::Warning,
            IssueCategory::BepRange,
            format!(
                "Operating at {:.0}% of BEP flow - discharge recirculation risk increases",
                flow_ratio * 100.0
            ),
            Some("Monitor NPSH margin closely as NPSH required increases with flow"),
        );
    } else if (0.8..=1.1).contains(&flow_ratio) {
        issues.push(
            Severity::Info,
            IssueCategory::BepRange,
            format!(
                "Operating in preferred range at {:.0}% of BEP flow",
                flow_ratio * 100.0
            ),
            None,
        );
    }

    if let Some(eff) = efficiency {
        let loss = bep.efficiency_percent - eff;
        if loss > 10.0 {
            issues.push(
                Severity::Warning,
                IssueCategory::Efficiency,
                format!("Efficiency at operating point ({eff:.1}%) is {loss:.1} points below BEP"),
                Some("Consider trimming impeller or using VFD for better efficiency match"),
            );
        } else if loss > 5.0 {
            issues.push(
                Severity::Info,
                IssueCategory::Efficiency,
                format!("Efficiency at operating point is {eff:.1}% ({loss:.1} points below BEP)"),
                None,
            );
        }
    }

    if let Some(margin) = npsh_margin {
        if margin < 0.0 {
            issues.push(
                Severity::Error,
                IssueCategory::Npsh,
                format!(
                    "NPSHa is {:.1}m below NPSHr - cavitation will occur",
                    margin.abs()
                ),
                Some("Increase suction pressure, reduce friction losses, or lower pump elevation"),
            );
        } else if margin < 0.5 {
            issues.push(
                Severity::Warning,
                IssueCategory::Npsh,
                format!("NPSH margin of {margin:.2}m is below recommended 0.5m minimum"),
                Some("Increase NPSHa to provide adequate safety margin"),
            );
        } else if margin < 1.0 {
            issues.push(
                Severity::Info,
                IssueCategory::Npsh,
                format!("NPSH margin of {margin:.2}m is acceptable"),
                None,
            );
        }
    }

    // 운전 유량 ±5 % 안에 있는 곡선 점들의 평균 양정과 비교
    let nearby: Vec<f64> = curve
        .points
        .iter()
        .filter(|p| p.flow_m3h >= flow * 0.95 && p.flow_m3h <= flow * 1.05)
        .map(|p| p.head_m)
        .collect();
    if !nearby.is_empty() {
        let expected = nearby.iter().sum::<f64>() / nearby.len() as f64;
        let deviation = (head - expected).abs();
        if deviation > expected.abs() * 0.1 {
            issues.push(
                Severity::Warning,
                IssueCategory::HeadMatch,
                format!(
                    "Operating head {head:.1}m differs from curve ({expected:.1}m) by {:.0}%",
                    deviation / expected.abs() * 100.0
                ),
                Some("Verify system resistance calculation or check for blockages"),
            );
        }
    }

    let issues = issues.0;
    let count = |severity: Severity| issues.iter().filter(|i| i.severity == severity).count();
    let errors = count(Severity::Error);
    let warnings = count(Severity::Warning);
    let status = if errors > 0 {
        OverallStatus::Unacceptable
    } else if warnings >= 2 {
        OverallStatus::Marginal
    } else if warnings == 1 {
        OverallStatus::Acceptable
    } else {
        OverallStatus::Optimal
    };

    Ok(OperatingRangeReport {
        is_valid: errors == 0,
        status,
        issues,
        metrics: OperatingMetrics {
            flow_ratio_to_bep: flow_ratio,
            head_ratio_to_bep: head_ratio,
            efficiency_at_operating_point: efficiency,
            npsh_margin_m: npsh_margin,
            distance_from_min_flow_m3h: flow - min_flow,
            distance_from_max_flow_m3h: max_flow - flow,
        },
    })
}
