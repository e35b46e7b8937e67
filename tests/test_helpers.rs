// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供临时数据库、固定时钟的测试环境
// ==========================================

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use defect_tracker::api::CreateDefectRequest;
use defect_tracker::app::AppState;
use defect_tracker::domain::DefectRecord;
use defect_tracker::engine::FixedClock;
use std::error::Error;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// 测试环境
///
/// temp_file 需要保持存活,否则数据库文件会被删除
pub struct TestEnv {
    pub temp_file: NamedTempFile,
    pub db_path: String,
    pub state: AppState,
    pub clock: Arc<FixedClock>,
}

impl TestEnv {
    /// 在指定时刻创建测试环境
    pub fn at(instant: NaiveDateTime) -> Result<Self, Box<dyn Error>> {
        defect_tracker::logging::init_test();

        let temp_file = NamedTempFile::new()?;
        let db_path = temp_file
            .path()
            .to_str()
            .ok_or("临时文件路径不是 UTF-8")?
            .to_string();

        let clock = Arc::new(FixedClock::new(instant));
        let state = AppState::with_clock(db_path.clone(), clock.clone())?;

        Ok(Self {
            temp_file,
            db_path,
            state,
            clock,
        })
    }

    /// 默认时刻: 2026-06-15 10:00:00（早班）
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Self::at(ts(2026, 6, 15, 10, 0, 0))
    }

    /// 登记一条缺陷（测试数据用,失败直接 panic）
    pub fn insert(&self, qr: &str, defect_type: &str, operation: &str, sr: bool) -> DefectRecord {
        self.state
            .defect_api
            .create_defect(CreateDefectRequest::new(qr, defect_type, operation, sr))
            .expect("登记失败")
    }
}

pub fn ts(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}
