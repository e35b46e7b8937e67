use crate::api::error::ApiError;
use serde::{Deserialize, Serialize};

// ==========================================
// 公共工具：响应封装、错误映射
// ==========================================

/// 响应体编码（中文/俄文标签需要 UTF-8）
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// 命令响应（传输层原样映射为 HTTP 状态码与响应体）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// HTTP 状态码
    pub status: u16,

    /// 响应类型
    pub content_type: String,

    /// JSON 响应体
    pub body: String,
}

impl CommandResponse {
    pub fn json(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: JSON_CONTENT_TYPE.to_string(),
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 错误响应（返回给调用方）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,
}

/// 序列化成功结果
pub(super) fn ok_json<T: Serialize>(value: &T) -> CommandResponse {
    match serde_json::to_string(value) {
        Ok(body) => CommandResponse::json(200, body),
        Err(e) => {
            let reason = e.to_string();
            map_api_error(ApiError::InternalError(crate::i18n::t_with_args(
                "error.serialize_failed",
                &[("reason", reason.as_str())],
            )))
        }
    }
}

/// 将ApiError转换为错误响应（消息按当前 locale 本地化）
pub(super) fn map_api_error(err: ApiError) -> CommandResponse {
    if err.is_client_error() {
        tracing::warn!(code = err.code(), error = %err, "请求被拒绝");
    } else {
        tracing::error!(code = err.code(), error = %err, "请求处理失败");
    }
    error_response(err.status_code(), err.code(), err.localized_message())
}

pub(super) fn error_response(status: u16, code: &str, message: String) -> CommandResponse {
    let error = ErrorResponse {
        code: code.to_string(),
        message,
    };
    let body = serde_json::to_string(&error).unwrap_or_else(|_| {
        format!(r#"{{"code":"{}","message":"{}"}}"#, error.code, error.code)
    });
    CommandResponse::json(status, body)
}
