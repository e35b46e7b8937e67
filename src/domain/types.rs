// ==========================================
// 缺陷登记系统 - 领域类型定义
// ==========================================
// 班次标签为俄文原值（与数据库、接口一致），不做翻译
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 班次 (Shift)
// ==========================================
// 红线: 班次只能由服务端根据写入时刻推导,不接受客户端传值
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shift {
    #[serde(rename = "утро")]
    Morning, // 早班 [06:00, 14:00)
    #[serde(rename = "вечер")]
    Evening, // 中班 [14:00, 22:00)
    #[serde(rename = "ночь")]
    Night, // 夜班 [22:00, 06:00)
}

impl Shift {
    /// 全部班次（按一天内的先后顺序）
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Evening, Shift::Night];

    /// 数据库/接口中的标签
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Morning => "утро",
            Shift::Evening => "вечер",
            Shift::Night => "ночь",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "утро" => Ok(Shift::Morning),
            "вечер" => Ok(Shift::Evening),
            "ночь" => Ok(Shift::Night),
            other => Err(format!("未知班次标签: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_label_roundtrip() {
        for shift in Shift::ALL {
            assert_eq!(shift.as_str().parse::<Shift>().unwrap(), shift);
        }
        assert!("day".parse::<Shift>().is_err());
    }

    #[test]
    fn test_shift_serializes_as_label() {
        let json = serde_json::to_string(&Shift::Evening).unwrap();
        assert_eq!(json, "\"вечер\"");

        let parsed: Shift = serde_json::from_str("\"ночь\"").unwrap();
        assert_eq!(parsed, Shift::Night);
    }
}
