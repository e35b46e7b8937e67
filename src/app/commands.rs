// ==========================================
// 缺陷登记系统 - 命令层（按域拆分）
// ==========================================
// 职责: 与传输无关的命令函数,外部 HTTP 层按 1:1 映射为路由
// 返回: CommandResponse { status, content_type, body(JSON) }
// ==========================================

mod common;
mod defect;
mod service;
mod stats;

use std::fmt;
use std::str::FromStr;

use crate::api::error::ApiError;
use crate::app::state::AppState;

pub use common::{CommandResponse, ErrorResponse, JSON_CONTENT_TYPE};
pub use defect::*;
pub use service::*;
pub use stats::*;

// ==========================================
// Command - 命令名
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CreateDefect,
    ListDefects,
    SummaryStats,
    StatsByType,
    StatsByOperation,
    StatsByShift,
    ServiceInfo,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::CreateDefect,
        Command::ListDefects,
        Command::SummaryStats,
        Command::StatsByType,
        Command::StatsByOperation,
        Command::StatsByShift,
        Command::ServiceInfo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateDefect => "create_defect",
            Command::ListDefects => "list_defects",
            Command::SummaryStats => "get_summary_stats",
            Command::StatsByType => "get_stats_by_type",
            Command::StatsByOperation => "get_stats_by_operation",
            Command::StatsByShift => "get_stats_by_shift",
            Command::ServiceInfo => "service_info",
        }
    }

    /// 是否需要请求体
    pub fn takes_body(&self) -> bool {
        matches!(self, Command::CreateDefect)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s.trim())
            .ok_or_else(|| crate::i18n::t_with_args("error.unknown_command", &[("name", s)]))
    }
}

/// 按命令名分发
///
/// # 参数
/// - name: 命令名（见 Command::name）
/// - body: 请求体（需要请求体的命令缺少时返回 400,其余命令忽略）
pub fn dispatch(state: &AppState, name: &str, body: Option<&str>) -> CommandResponse {
    let command = match name.parse::<Command>() {
        Ok(c) => c,
        Err(message) => return common::error_response(404, "UNKNOWN_COMMAND", message),
    };

    let body = match (command.takes_body(), body) {
        (true, None) => {
            return common::map_api_error(ApiError::ValidationError(format!(
                "命令 {} 缺少请求体",
                command
            )))
        }
        (_, body) => body.unwrap_or_default(),
    };

    tracing::debug!(command = %command, "执行命令");

    match command {
        Command::CreateDefect => create_defect(state, body),
        Command::ListDefects => list_defects(state),
        Command::SummaryStats => get_summary_stats(state),
        Command::StatsByType => get_stats_by_type(state),
        Command::StatsByOperation => get_stats_by_operation(state),
        Command::StatsByShift => get_stats_by_shift(state),
        Command::ServiceInfo => service_info(),
    }
}
