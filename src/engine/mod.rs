// ==========================================
// 缺陷登记系统 - 引擎层
// ==========================================
// 职责: 业务规则（纯函数）与时钟抽象
// 红线: 不访问数据库
// ==========================================

pub mod clock;
pub mod shift_classifier;

pub use clock::{Clock, FixedClock, LocalClock};
pub use shift_classifier::ShiftClassifier;
