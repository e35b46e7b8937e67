// ==========================================
// 缺陷登记系统 - 登记请求校验器
// ==========================================
// 职责: 解析与校验"登记缺陷"请求
// - qr_code / defect_type / operation: 必填,去除首尾空白后非空
// - sr_characteristic: 布尔,缺省为 false
// - 客户端传入的 shift 等多余字段一律忽略（班次只由服务端推导）
// ==========================================

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};

// ==========================================
// CreateDefectRequest - 登记请求
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDefectRequest {
    pub qr_code: Option<String>,
    pub defect_type: Option<String>,
    pub operation: Option<String>,
    pub sr_characteristic: Option<bool>,
}

impl CreateDefectRequest {
    pub fn new(qr_code: &str, defect_type: &str, operation: &str, sr_characteristic: bool) -> Self {
        Self {
            qr_code: Some(qr_code.to_string()),
            defect_type: Some(defect_type.to_string()),
            operation: Some(operation.to_string()),
            sr_characteristic: Some(sr_characteristic),
        }
    }

    /// 从 JSON 请求体解析
    ///
    /// - 请求体必须是 JSON 对象（数组等按位置匹配的形式一律拒绝）
    /// - 类型错误（如 sr_characteristic 传字符串）视为校验失败
    pub fn from_json(body: &str) -> ApiResult<Self> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| ApiError::ValidationError(format!("请求体格式错误: {}", e)))?;

        if !value.is_object() {
            return Err(ApiError::ValidationError(
                "请求体必须是 JSON 对象".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| ApiError::ValidationError(format!("请求体格式错误: {}", e)))
    }
}

// ==========================================
// ValidatedDefect - 校验通过的输入
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDefect {
    pub qr_code: String,
    pub defect_type: String,
    pub operation: String,
    pub sr_characteristic: bool,
}

/// 校验登记请求
///
/// # 返回
/// - Ok(ValidatedDefect): 校验通过（字符串已去除首尾空白）
/// - Err(ApiError::ValidationError): 列出全部缺失/为空的字段
pub fn validate_create_request(request: &CreateDefectRequest) -> ApiResult<ValidatedDefect> {
    let mut missing = Vec::new();

    let mut required = |name: &'static str, value: &Option<String>| -> String {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => {
                missing.push(name);
                String::new()
            }
        }
    };

    let qr_code = required("qr_code", &request.qr_code);
    let defect_type = required("defect_type", &request.defect_type);
    let operation = required("operation", &request.operation);

    if !missing.is_empty() {
        return Err(ApiError::ValidationError(format!(
            "缺少必填字段或字段为空: {}",
            missing.join(", ")
        )));
    }

    Ok(ValidatedDefect {
        qr_code,
        defect_type,
        operation,
        sr_characteristic: request.sr_characteristic.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let req = CreateDefectRequest::new(" A1 ", "scratch", "paint", true);
        let v = validate_create_request(&req).unwrap();
        assert_eq!(v.qr_code, "A1");
        assert!(v.sr_characteristic);
    }

    #[test]
    fn test_missing_fields_are_listed() {
        let req = CreateDefectRequest {
            qr_code: Some("A1".to_string()),
            defect_type: Some("   ".to_string()),
            operation: None,
            sr_characteristic: None,
        };
        match validate_create_request(&req) {
            Err(ApiError::ValidationError(msg)) => {
                assert!(msg.contains("defect_type"));
                assert!(msg.contains("operation"));
                assert!(!msg.contains("qr_code"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_sr_characteristic_defaults_to_false() {
        let req = CreateDefectRequest::from_json(
            r#"{"qr_code":"A1","defect_type":"scratch","operation":"paint"}"#,
        )
        .unwrap();
        assert!(!validate_create_request(&req).unwrap().sr_characteristic);
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let err = CreateDefectRequest::from_json(
            r#"{"qr_code":"A1","defect_type":"scratch","operation":"paint","sr_characteristic":"yes"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));

        let err = CreateDefectRequest::from_json(r#"{"qr_code":42}"#).unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));

        let err = CreateDefectRequest::from_json("not json").unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        for body in [r#"["A1","scratch","paint",true]"#, r#""A1""#, "42", "null"] {
            match CreateDefectRequest::from_json(body) {
                Err(ApiError::ValidationError(msg)) => assert!(msg.contains("JSON 对象"), "{}", body),
                other => panic!("Expected ValidationError for {}, got {:?}", body, other),
            }
        }
    }

    #[test]
    fn test_client_shift_is_ignored() {
        let req = CreateDefectRequest::from_json(
            r#"{"qr_code":"A1","defect_type":"scratch","operation":"paint","shift":"ночь"}"#,
        )
        .unwrap();
        assert!(validate_create_request(&req).is_ok());
    }
}
