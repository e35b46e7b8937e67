// ==========================================
// 缺陷登记系统 - 统计结果模型
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::Shift;

// ==========================================
// SummaryStats - 汇总统计
// ==========================================
// 注意: defect_rate 是近似指标 = 今日缺陷数 / 日计划产量 * 100,
// 并非真正的"每件产品缺陷率"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_defects: i64,
    pub today_defects: i64,
    pub critical_defects: i64,
    pub defect_rate: f64,
}

impl SummaryStats {
    /// 由原始计数构造,计算近似缺陷率（保留两位小数）
    pub fn from_counts(total: i64, today: i64, critical: i64, daily_unit_volume: u32) -> Self {
        Self {
            total_defects: total,
            today_defects: today,
            critical_defects: critical,
            defect_rate: approximate_defect_rate(today, daily_unit_volume),
        }
    }
}

/// round(today / volume * 100, 2)
///
/// 两位小数处恰好为 .5 时取偶数（与 Python 的 round 一致）,
/// 例如 1 / 800 → 0.125 → 0.12
pub fn approximate_defect_rate(today: i64, daily_unit_volume: u32) -> f64 {
    if daily_unit_volume == 0 {
        return 0.0;
    }
    let pct = today as f64 / daily_unit_volume as f64 * 100.0;
    (pct * 100.0).round_ties_even() / 100.0
}

// ==========================================
// 分组计数
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub defect_type: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationCount {
    pub operation: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCount {
    pub shift: Shift,
    pub count: i64,
}
