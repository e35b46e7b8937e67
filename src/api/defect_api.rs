// ==========================================
// 缺陷登记系统 - 缺陷 API
// ==========================================
// 职责: 登记缺陷、查询缺陷列表
// 红线: 时间戳与班次只取服务端时钟,不接受客户端传值
// ==========================================

use std::sync::Arc;

use crate::api::error::{storage_failure, ApiError, ApiResult};
use crate::api::validator::{validate_create_request, CreateDefectRequest};
use crate::domain::defect::{DefectRecord, NewDefect};
use crate::engine::{Clock, ShiftClassifier};
use crate::repository::defect_repo::DefectRepository;

// ==========================================
// DefectApi - 缺陷 API
// ==========================================
pub struct DefectApi {
    defect_repo: Arc<DefectRepository>,
    clock: Arc<dyn Clock>,
}

impl DefectApi {
    /// 创建新的DefectApi实例
    ///
    /// # 参数
    /// - defect_repo: 缺陷仓储
    /// - clock: 当前时刻提供者（生产用 LocalClock,测试注入 FixedClock）
    pub fn new(defect_repo: Arc<DefectRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { defect_repo, clock }
    }

    /// 登记缺陷
    ///
    /// # 流程
    /// 1. 校验必填字段
    /// 2. 取当前时刻,判定班次
    /// 3. 追加记录（id 由数据库分配）
    ///
    /// # 返回
    /// - Ok(DefectRecord): 写入后的完整记录
    /// - Err(ApiError::ValidationError): 输入非法,未写入任何数据
    /// - Err(ApiError::StorageUnavailable): 存储失败,未写入任何数据
    pub fn create_defect(&self, request: CreateDefectRequest) -> ApiResult<DefectRecord> {
        let input = validate_create_request(&request).map_err(|e| {
            tracing::warn!(error = %e, "缺陷登记请求被拒绝");
            e
        })?;

        let now = self.clock.now();
        let new_defect = NewDefect {
            qr_code: input.qr_code,
            defect_type: input.defect_type,
            sr_characteristic: input.sr_characteristic,
            operation: input.operation,
            shift: ShiftClassifier::classify(&now),
            recorded_at: now,
        };

        let record = self
            .defect_repo
            .insert(&new_defect)
            .map_err(storage_failure("create_defect"))?;

        tracing::info!(
            id = record.id,
            qr_code = %record.qr_code,
            shift = %record.shift,
            sr_characteristic = record.sr_characteristic,
            "缺陷已登记"
        );

        Ok(record)
    }

    /// 从 JSON 请求体登记缺陷
    pub fn create_defect_from_json(&self, body: &str) -> ApiResult<DefectRecord> {
        let request = CreateDefectRequest::from_json(body).map_err(|e: ApiError| {
            tracing::warn!(error = %e, "缺陷登记请求体无法解析");
            e
        })?;
        self.create_defect(request)
    }

    /// 查询全部缺陷（最新在前）
    pub fn list_defects(&self) -> ApiResult<Vec<DefectRecord>> {
        self.defect_repo
            .list_all()
            .map_err(storage_failure("list_defects"))
    }
}
