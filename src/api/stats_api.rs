// ==========================================
// 缺陷登记系统 - 统计 API
// ==========================================
// 职责: 汇总统计、按类型/工序/班次分组统计
// 说明: defect_rate 为近似指标（今日缺陷数 / 日计划产量 * 100）
// ==========================================

use std::sync::Arc;

use crate::api::error::{storage_failure, ApiResult};
use crate::config::ConfigManager;
use crate::domain::stats::{OperationCount, ShiftCount, SummaryStats, TypeCount};
use crate::engine::Clock;
use crate::repository::defect_repo::DefectRepository;

// ==========================================
// StatsApi - 统计 API
// ==========================================
pub struct StatsApi {
    defect_repo: Arc<DefectRepository>,
    config_manager: Arc<ConfigManager>,
    clock: Arc<dyn Clock>,
}

impl StatsApi {
    /// 创建新的StatsApi实例
    pub fn new(
        defect_repo: Arc<DefectRepository>,
        config_manager: Arc<ConfigManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            defect_repo,
            config_manager,
            clock,
        }
    }

    /// 汇总统计
    ///
    /// - total_defects: 全部记录数
    /// - today_defects: 时间戳日期等于当前日期的记录数
    /// - critical_defects: 涉及安全/法规特性的记录数
    /// - defect_rate: round(today / 日计划产量 * 100, 2)
    pub fn get_summary_stats(&self) -> ApiResult<SummaryStats> {
        let daily_unit_volume = self
            .config_manager
            .get_daily_unit_volume()
            .map_err(storage_failure("get_summary_stats"))?;

        let counts = self
            .defect_repo
            .summary_counts(self.clock.today())
            .map_err(storage_failure("get_summary_stats"))?;

        Ok(SummaryStats::from_counts(
            counts.total,
            counts.today,
            counts.critical,
            daily_unit_volume,
        ))
    }

    /// 按缺陷类型统计（数量降序,同数按类型字典序）
    pub fn get_stats_by_type(&self) -> ApiResult<Vec<TypeCount>> {
        self.defect_repo
            .count_by_type()
            .map_err(storage_failure("get_stats_by_type"))
    }

    /// 按工序统计
    pub fn get_stats_by_operation(&self) -> ApiResult<Vec<OperationCount>> {
        self.defect_repo
            .count_by_operation()
            .map_err(storage_failure("get_stats_by_operation"))
    }

    /// 按班次统计
    pub fn get_stats_by_shift(&self) -> ApiResult<Vec<ShiftCount>> {
        self.defect_repo
            .count_by_shift()
            .map_err(storage_failure("get_stats_by_shift"))
    }
}
