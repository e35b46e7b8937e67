use serde::{Deserialize, Serialize};

use super::common::{ok_json, CommandResponse};

// ==========================================
// 服务信息（根路径探活）
// ==========================================

/// 服务信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
    pub version: String,
}

/// 服务信息（不访问数据库,始终成功）
pub fn service_info() -> CommandResponse {
    ok_json(&ServiceInfo {
        message: "Defect Tracking System API".to_string(),
        status: "running".to_string(),
        version: crate::VERSION.to_string(),
    })
}
