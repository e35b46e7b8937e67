// ==========================================
// 缺陷登记系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、统计结果
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod defect;
pub mod stats;
pub mod types;

// 重导出核心类型
pub use defect::{DefectRecord, NewDefect, DATE_FORMAT, TIMESTAMP_FORMAT};
pub use stats::{OperationCount, ShiftCount, SummaryStats, TypeCount};
pub use types::Shift;
