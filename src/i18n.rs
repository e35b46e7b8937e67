// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）、英文、俄文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 注意: 只用于错误消息等展示文本,数据库中的班次标签不做翻译
// ==========================================

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN"、"en" 或 "ru"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use defect_tracker::i18n::t_with_args;
/// let msg = t_with_args("error.unknown_command", &[("name", "drop_table")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = t(key);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对 i18n 相关测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("ru");
        assert_eq!(current_locale(), "ru");

        // 恢复默认语言
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");
    }

    #[test]
    fn test_api_error_localized_message() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        let err = ApiError::ValidationError("qr_code".to_string());

        set_locale("en");
        assert_eq!(err.localized_message(), "Validation failed: qr_code");
        assert_eq!(
            ApiError::StorageUnavailable("no such table: defects".to_string()).localized_message(),
            "Storage unavailable: no such table: defects"
        );

        set_locale("ru");
        assert_eq!(err.localized_message(), "Ошибка проверки данных: qr_code");

        // 默认语言与 Display 输出一致
        set_locale("zh-CN");
        assert_eq!(err.localized_message(), err.to_string());
        let err = ApiError::InternalError("boom".to_string());
        assert_eq!(err.localized_message(), err.to_string());
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let msg = t_with_args("error.unknown_command", &[("name", "drop_table")]);
        assert_eq!(msg, "Unknown command: drop_table");

        set_locale("zh-CN");
        let msg = t_with_args("error.unknown_command", &[("name", "drop_table")]);
        assert!(msg.contains("未知命令"));
        assert!(msg.contains("drop_table"));
    }
}
