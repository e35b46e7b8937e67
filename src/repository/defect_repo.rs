// ==========================================
// 缺陷登记系统 - 缺陷记录数据仓储
// ==========================================
// 对齐: defects 表
// 红线: 只追加;不提供更新/删除
// ==========================================

mod core;
mod queries;


pub use self::core::DefectRepository;
pub use self::queries::{DefectCounts, GroupColumn};
