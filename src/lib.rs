// ==========================================
// 缺陷登记系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 缺陷记录持久化与聚合统计（传输层由外部提供）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 班次判定与时钟
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/建表）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态装配与命令
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{DefectRecord, OperationCount, Shift, ShiftCount, SummaryStats, TypeCount};
pub use engine::{Clock, FixedClock, LocalClock, ShiftClassifier};
pub use api::{ApiError, ApiResult, CreateDefectRequest, DefectApi, StatsApi};
pub use app::{AppState, CommandResponse};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "缺陷登记系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
