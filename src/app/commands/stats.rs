use crate::app::state::AppState;

use super::common::{map_api_error, ok_json, CommandResponse};

// ==========================================
// 统计相关命令
// ==========================================

/// 汇总统计
pub fn get_summary_stats(state: &AppState) -> CommandResponse {
    match state.stats_api.get_summary_stats() {
        Ok(stats) => ok_json(&stats),
        Err(e) => map_api_error(e),
    }
}

/// 按缺陷类型统计
pub fn get_stats_by_type(state: &AppState) -> CommandResponse {
    match state.stats_api.get_stats_by_type() {
        Ok(rows) => ok_json(&rows),
        Err(e) => map_api_error(e),
    }
}

/// 按工序统计
pub fn get_stats_by_operation(state: &AppState) -> CommandResponse {
    match state.stats_api.get_stats_by_operation() {
        Ok(rows) => ok_json(&rows),
        Err(e) => map_api_error(e),
    }
}

/// 按班次统计
pub fn get_stats_by_shift(state: &AppState) -> CommandResponse {
    match state.stats_api.get_stats_by_shift() {
        Ok(rows) => ok_json(&rows),
        Err(e) => map_api_error(e),
    }
}
