// ==========================================
// 缺陷登记系统 - 应用状态
// ==========================================
// 职责: 进程启动时创建一次共享连接与各 API 实例,
//       之后由每个请求按引用使用（不按请求开关连接）
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::{DefectApi, StatsApi};
use crate::config::ConfigManager;
use crate::db::{ensure_schema, open_sqlite_connection};
use crate::engine::{Clock, LocalClock};
use crate::repository::DefectRepository;

/// 应用状态
///
/// 包含所有API实例和共享资源
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 缺陷API
    pub defect_api: Arc<DefectApi>,

    /// 统计API
    pub stats_api: Arc<StatsApi>,

    /// 配置管理器
    pub config_manager: Arc<ConfigManager>,
}

impl AppState {
    /// 创建新的AppState实例（使用本机本地时间）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 初始化错误
    pub fn new(db_path: String) -> Result<Self, String> {
        Self::with_clock(db_path, Arc::new(LocalClock))
    }

    /// 创建AppState实例并注入时钟
    ///
    /// 该方法会：
    /// 1. 打开共享连接并幂等建表
    /// 2. 初始化Repository与ConfigManager
    /// 3. 创建所有API实例
    pub fn with_clock(db_path: String, clock: Arc<dyn Clock>) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        let conn = open_sqlite_connection(&db_path)
            .map_err(|e| format!("无法打开数据库: {}", e))?;
        ensure_schema(&conn).map_err(|e| format!("无法初始化数据库表结构: {}", e))?;
        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // 初始化Repository层
        // ==========================================
        let defect_repo = Arc::new(DefectRepository::new(conn.clone()));
        let config_manager = Arc::new(ConfigManager::new(conn.clone()));

        // ==========================================
        // 初始化API层
        // ==========================================
        let defect_api = Arc::new(DefectApi::new(defect_repo.clone(), clock.clone()));
        let stats_api = Arc::new(StatsApi::new(
            defect_repo,
            config_manager.clone(),
            clock,
        ));

        tracing::info!("AppState初始化完成");

        Ok(Self {
            db_path,
            defect_api,
            stats_api,
            config_manager,
        })
    }
}

/// 获取默认数据库路径
///
/// 优先级:
/// 1. 环境变量 DEFECT_TRACKER_DB_PATH
/// 2. 用户数据目录下 defect-tracker/defects.db
/// 3. 当前目录 ./defects.db
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    // 允许通过环境变量显式指定 DB 路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var("DEFECT_TRACKER_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./defects.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("defect-tracker");
        // 目录创建失败时回退到当前目录
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("defects.db");
        }
    }

    path.to_string_lossy().to_string()
}
