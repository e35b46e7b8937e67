use super::core::{map_row, DefectRepository, SELECT_COLUMNS};
use crate::domain::defect::{DefectRecord, DATE_FORMAT};
use crate::domain::stats::{OperationCount, ShiftCount, TypeCount};
use crate::domain::types::Shift;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Result as SqliteResult};

/// 汇总计数（同一条 SQL 读出,保证快照一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefectCounts {
    pub total: i64,
    pub today: i64,
    pub critical: i64,
}

/// 可分组的列（白名单,避免拼接任意列名）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupColumn {
    DefectType,
    Operation,
    Shift,
}

impl GroupColumn {
    pub fn column_name(&self) -> &'static str {
        match self {
            GroupColumn::DefectType => "defect_type",
            GroupColumn::Operation => "operation",
            GroupColumn::Shift => "shift",
        }
    }
}

impl DefectRepository {
    // ==========================================
    // 查询操作
    // ==========================================

    /// 查询全部记录
    ///
    /// 排序: timestamp DESC, id DESC（同一秒内按 id 倒序,保证结果确定）
    pub fn list_all(&self) -> RepositoryResult<Vec<DefectRecord>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM defects ORDER BY timestamp DESC, id DESC",
            SELECT_COLUMNS
        ))?;

        let records = stmt
            .query_map([], map_row)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(records)
    }

    /// 汇总计数: 总数 / 指定日期当日数 / 安全法规特性数
    pub fn summary_counts(&self, today: NaiveDate) -> RepositoryResult<DefectCounts> {
        let conn = self.get_conn()?;

        let counts = conn.query_row(
            r#"
            SELECT
                COUNT(*),
                COALESCE(SUM(CASE WHEN substr(timestamp, 1, 10) = ?1 THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN sr_characteristic <> 0 THEN 1 ELSE 0 END), 0)
            FROM defects
            "#,
            params![today.format(DATE_FORMAT).to_string()],
            |row| {
                Ok(DefectCounts {
                    total: row.get(0)?,
                    today: row.get(1)?,
                    critical: row.get(2)?,
                })
            },
        )?;

        Ok(counts)
    }

    /// 按列分组计数
    ///
    /// 排序: count DESC, key ASC（同数按键的字节序,保证结果确定）
    pub fn group_counts(&self, column: GroupColumn) -> RepositoryResult<Vec<(String, i64)>> {
        let conn = self.get_conn()?;
        let col = column.column_name();

        let mut stmt = conn.prepare(&format!(
            "SELECT {col}, COUNT(*) AS cnt FROM defects GROUP BY {col} ORDER BY cnt DESC, {col} ASC"
        ))?;

        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// 按缺陷类型统计
    pub fn count_by_type(&self) -> RepositoryResult<Vec<TypeCount>> {
        Ok(self
            .group_counts(GroupColumn::DefectType)?
            .into_iter()
            .map(|(defect_type, count)| TypeCount { defect_type, count })
            .collect())
    }

    /// 按工序统计
    pub fn count_by_operation(&self) -> RepositoryResult<Vec<OperationCount>> {
        Ok(self
            .group_counts(GroupColumn::Operation)?
            .into_iter()
            .map(|(operation, count)| OperationCount { operation, count })
            .collect())
    }

    /// 按班次统计
    pub fn count_by_shift(&self) -> RepositoryResult<Vec<ShiftCount>> {
        self.group_counts(GroupColumn::Shift)?
            .into_iter()
            .map(|(label, count)| {
                let shift = label
                    .parse::<Shift>()
                    .map_err(|message| RepositoryError::FieldValueError {
                        field: "shift".to_string(),
                        message,
                    })?;
                Ok(ShiftCount { shift, count })
            })
            .collect()
    }
}
