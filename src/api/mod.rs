// ==========================================
// 缺陷登记系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供命令层/外部传输层调用
// ==========================================

pub mod defect_api;
pub mod error;
pub mod stats_api;
pub mod validator;

// 重导出核心类型
pub use defect_api::DefectApi;
pub use error::{ApiError, ApiResult};
pub use stats_api::StatsApi;
pub use validator::{validate_create_request, CreateDefectRequest, ValidatedDefect};
