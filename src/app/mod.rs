// ==========================================
// 缺陷登记系统 - 应用层
// ==========================================
// 职责: 共享状态装配与命令入口,供外部传输层调用
// ==========================================

pub mod commands;
pub mod state;

// 重导出
pub use commands::{dispatch, Command, CommandResponse};
pub use state::{get_default_db_path, AppState};
