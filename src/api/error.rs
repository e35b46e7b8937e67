// ==========================================
// 缺陷登记系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换Repository错误为调用方可判别的错误
// 分类:
// - ValidationError    → 客户端错误（400）
// - StorageUnavailable → 服务端错误（500），核心不重试
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("数据验证失败: {0}")]
    ValidationError(String),

    // ==========================================
    // 数据访问错误
    // ==========================================
    #[error("存储不可用: {0}")]
    StorageUnavailable(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),
}

impl ApiError {
    /// 错误代码（返回给调用方）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::ValidationError(_) => 400,
            ApiError::StorageUnavailable(_) | ApiError::InternalError(_) => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// 错误详情（不含分类前缀）
    pub fn detail(&self) -> &str {
        match self {
            ApiError::ValidationError(msg)
            | ApiError::StorageUnavailable(msg)
            | ApiError::InternalError(msg) => msg,
        }
    }

    /// 按当前 locale 生成的错误消息（分类前缀本地化,详情原样保留）
    pub fn localized_message(&self) -> String {
        let key = match self {
            ApiError::ValidationError(_) => "error.validation",
            ApiError::StorageUnavailable(_) => "error.storage_unavailable",
            ApiError::InternalError(_) => "error.internal",
        };
        crate::i18n::t_with_args(key, &[("detail", self.detail())])
    }
}

// ==========================================
// 从 RepositoryError 转换
// 数据库层的所有失败（打开/锁/读写/数据损坏）统一视为存储不可用
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DatabaseConnectionError(msg) => {
                ApiError::StorageUnavailable(format!("数据库连接失败: {}", msg))
            }
            RepositoryError::LockError(msg) => {
                ApiError::StorageUnavailable(format!("数据库锁获取失败: {}", msg))
            }
            RepositoryError::DatabaseTransactionError(msg) => {
                ApiError::StorageUnavailable(format!("数据库事务失败: {}", msg))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::StorageUnavailable(msg),
            RepositoryError::FieldValueError { field, message } => {
                ApiError::StorageUnavailable(format!("数据损坏 (field={}): {}", field, message))
            }
        }
    }
}

/// 记录存储失败日志并转换为 ApiError
pub(crate) fn storage_failure(operation: &'static str) -> impl Fn(RepositoryError) -> ApiError {
    move |err| {
        tracing::error!(operation, error = %err, "存储操作失败");
        ApiError::from(err)
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_conversion() {
        let api_err: ApiError = RepositoryError::LockError("poisoned".to_string()).into();
        match &api_err {
            ApiError::StorageUnavailable(msg) => assert!(msg.contains("poisoned")),
            _ => panic!("Expected StorageUnavailable"),
        }
        assert_eq!(api_err.status_code(), 500);
        assert_eq!(api_err.code(), "STORAGE_UNAVAILABLE");

        let api_err: ApiError = RepositoryError::FieldValueError {
            field: "shift".to_string(),
            message: "未知班次标签: day".to_string(),
        }
        .into();
        assert!(matches!(api_err, ApiError::StorageUnavailable(_)));
    }

    #[test]
    fn test_validation_error_is_client_error() {
        let err = ApiError::ValidationError("缺少必填字段: operation".to_string());
        assert!(err.is_client_error());
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.code(), "VALIDATION_ERROR");

        let err = ApiError::InternalError("boom".to_string());
        assert!(!err.is_client_error());
    }
}
