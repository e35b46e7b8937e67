use crate::app::state::AppState;

use super::common::{map_api_error, ok_json, CommandResponse};

// ==========================================
// 缺陷登记相关命令
// ==========================================

/// 登记缺陷
///
/// 请求体: {qr_code, defect_type, operation, sr_characteristic?}
pub fn create_defect(state: &AppState, body: &str) -> CommandResponse {
    match state.defect_api.create_defect_from_json(body) {
        Ok(record) => ok_json(&record),
        Err(e) => map_api_error(e),
    }
}

/// 查询缺陷列表（最新在前）
pub fn list_defects(state: &AppState) -> CommandResponse {
    match state.defect_api.list_defects() {
        Ok(records) => ok_json(&records),
        Err(e) => map_api_error(e),
    }
}
