use crate::domain::defect::{DefectRecord, NewDefect};
use crate::domain::types::Shift;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// DefectRepository - 缺陷记录仓储
// ==========================================
// 红线: Repository 不做业务逻辑,只做数据映射
// 并发: 所有操作在同一把连接锁内完成,锁随 guard 在函数返回时释放
pub struct DefectRepository {
    conn: Arc<Mutex<Connection>>,
}

pub(super) const SELECT_COLUMNS: &str =
    "id, qr_code, defect_type, sr_characteristic, operation, shift, timestamp";

impl DefectRepository {
    /// 创建新的缺陷仓储
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    pub(super) fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // 写入操作
    // ==========================================

    /// 追加一条缺陷记录
    ///
    /// # 参数
    /// - `defect`: 已校验、已盖时间戳与班次的记录
    ///
    /// # 返回
    /// - `Ok(record)`: 写入后的完整记录（含分配的 id）
    /// - `Err(...)`: 数据库错误;事务回滚,不留半条记录
    pub fn insert(&self, defect: &NewDefect) -> RepositoryResult<DefectRecord> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tx.execute(
            r#"
            INSERT INTO defects (
                qr_code, defect_type, sr_characteristic, operation, shift, timestamp
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                defect.qr_code,
                defect.defect_type,
                defect.sr_characteristic,
                defect.operation,
                defect.shift.as_str(),
                defect.timestamp_string(),
            ],
        )?;

        let id = tx.last_insert_rowid();
        let record = tx.query_row(
            &format!("SELECT {} FROM defects WHERE id = ?1", SELECT_COLUMNS),
            params![id],
            map_row,
        )?;

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        Ok(record)
    }
}

/// 将数据库行映射为 DefectRecord
pub(super) fn map_row(row: &Row) -> SqliteResult<DefectRecord> {
    let shift_label: String = row.get(5)?;
    let shift = shift_label.parse::<Shift>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, e.into())
    })?;

    Ok(DefectRecord {
        id: row.get(0)?,
        qr_code: row.get(1)?,
        defect_type: row.get(2)?,
        sr_characteristic: row.get(3)?,
        operation: row.get(4)?,
        shift,
        timestamp: row.get(6)?,
    })
}
