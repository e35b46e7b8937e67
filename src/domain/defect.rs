// ==========================================
// 缺陷登记系统 - 缺陷记录领域模型
// ==========================================
// 对齐: defects 表（7 列）
// 红线: 只追加,不修改,不删除
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::Shift;

/// 时间戳存储格式（字典序即时间序）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 日期部分格式（用于"今日"统计）
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ==========================================
// DefectRecord - 缺陷记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefectRecord {
    pub id: i64,                 // 自增主键,永不复用
    pub qr_code: String,         // 产品二维码
    pub defect_type: String,     // 缺陷类型（自由文本）
    pub sr_characteristic: bool, // 是否涉及安全/法规特性
    pub operation: String,       // 发现缺陷的工序
    pub shift: Shift,            // 班次（服务端推导）
    pub timestamp: String,       // 写入时刻 YYYY-MM-DD HH:MM:SS
}

// ==========================================
// NewDefect - 待写入记录
// ==========================================
// 已通过校验、已盖时间戳和班次,只差 id
#[derive(Debug, Clone, PartialEq)]
pub struct NewDefect {
    pub qr_code: String,
    pub defect_type: String,
    pub sr_characteristic: bool,
    pub operation: String,
    pub shift: Shift,
    pub recorded_at: NaiveDateTime,
}

impl NewDefect {
    pub fn timestamp_string(&self) -> String {
        self.recorded_at.format(TIMESTAMP_FORMAT).to_string()
    }
}
