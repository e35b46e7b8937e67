// ==========================================
// 缺陷登记系统 - 时钟抽象
// ==========================================
// 职责: 提供"当前时刻",使写入时间戳/班次/今日统计可在测试中固定
// ==========================================

use chrono::{Local, NaiveDate, NaiveDateTime};
use std::sync::Mutex;

/// 当前时刻提供者
///
/// 返回参考时区下的墙钟时间（无时区信息）,
/// 班次判定与"今日"统计都基于该时刻。
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

// ==========================================
// LocalClock - 本机本地时间
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

// ==========================================
// FixedClock - 固定时刻（测试用）
// ==========================================
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    /// 拨动时钟
    pub fn set(&self, instant: NaiveDateTime) {
        if let Ok(mut guard) = self.instant.lock() {
            *guard = instant;
        }
    }

    /// 前进指定秒数
    pub fn advance_secs(&self, secs: i64) {
        if let Ok(mut guard) = self.instant.lock() {
            *guard += chrono::Duration::seconds(secs);
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        match self.instant.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_fixed_clock_set_and_advance() {
        let clock = FixedClock::new(at(10, 0));
        assert_eq!(clock.now(), at(10, 0));

        clock.advance_secs(90);
        assert_eq!(clock.now(), at(10, 1) + chrono::Duration::seconds(30));

        clock.set(at(23, 59));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    }
}
