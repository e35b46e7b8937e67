// ==========================================
// 缺陷登记系统 - 班次判定引擎
// ==========================================
// 规则（本地墙钟小时,左闭右开,互不重叠,覆盖全天）:
// - [6, 14)  → утро
// - [14, 22) → вечер
// - 其余      → ночь
// ==========================================

use chrono::{NaiveDateTime, Timelike};

use crate::domain::types::Shift;

/// 早班开始小时
pub const MORNING_START_HOUR: u32 = 6;
/// 中班开始小时
pub const EVENING_START_HOUR: u32 = 14;
/// 夜班开始小时
pub const NIGHT_START_HOUR: u32 = 22;

// ==========================================
// ShiftClassifier - 班次判定
// ==========================================
pub struct ShiftClassifier;

impl ShiftClassifier {
    /// 按时刻判定班次
    pub fn classify(instant: &NaiveDateTime) -> Shift {
        Self::classify_hour(instant.hour())
    }

    /// 按小时（0-23）判定班次
    ///
    /// 超出 0-23 的值不会由 chrono 产生,按夜班处理
    pub fn classify_hour(hour: u32) -> Shift {
        if (MORNING_START_HOUR..EVENING_START_HOUR).contains(&hour) {
            Shift::Morning
        } else if (EVENING_START_HOUR..NIGHT_START_HOUR).contains(&hour) {
            Shift::Evening
        } else {
            Shift::Night
        }
    }
}
