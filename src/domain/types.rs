// ==========================================
// 策略配置向导 - 领域类型定义
// ==========================================
// 职责: 定义向导静态数据的值对象
// 红线: 全部为不可变值对象,构造后不再修改
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 分区粒度 (Partition Granularity)
// ==========================================
// 序列化格式: 小写 (与前端下拉选项一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionGranularity {
    Year,   // 年
    Month,  // 月
    Day,    // 日
    Hour,   // 时
    Minute, // 分
}

impl PartitionGranularity {
    /// 全部粒度,按展示顺序(从粗到细)
    pub const ALL: [PartitionGranularity; 5] = [
        PartitionGranularity::Year,
        PartitionGranularity::Month,
        PartitionGranularity::Day,
        PartitionGranularity::Hour,
        PartitionGranularity::Minute,
    ];

    /// 规范标识符(同时作为展示文本)
    pub fn as_str(&self) -> &'static str {
        match self {
            PartitionGranularity::Year => "year",
            PartitionGranularity::Month => "month",
            PartitionGranularity::Day => "day",
            PartitionGranularity::Hour => "hour",
            PartitionGranularity::Minute => "minute",
        }
    }

    /// 从字符串解析分区粒度
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "year" => Some(PartitionGranularity::Year),
            "month" => Some(PartitionGranularity::Month),
            "day" => Some(PartitionGranularity::Day),
            "hour" => Some(PartitionGranularity::Hour),
            "minute" => Some(PartitionGranularity::Minute),
            _ => None,
        }
    }

    /// 转换为下拉选项 (label 与 value 一致)
    pub fn to_option(&self) -> SelectOption {
        SelectOption {
            label: self.as_str().to_string(),
            value: self.as_str().to_string(),
        }
    }
}

impl fmt::Display for PartitionGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 向导步骤 (Wizard Step)
// ==========================================
// 顺序即向导页面顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardStep {
    /// 步骤名称 (i18n 键,由前端解析为展示文本)
    pub name: String,

    /// 图标标识符
    pub icon: String,
}

impl WizardStep {
    pub fn new(name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}

// ==========================================
// 数值范围 (Numeric Range)
// ==========================================
// 不变式: min <= max (由数据声明保证,构造不做校验)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: i64,
    pub max: i64,
}

impl NumericRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// 判断取值是否落在范围内(闭区间)
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

// ==========================================
// 下拉选项 (Select Option)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// 展示文本
    pub label: String,

    /// 规范标识符
    pub value: String,
}

// ==========================================
// 选项集 (Option Set)
// ==========================================
// 顺序即展示顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    pub values: Vec<SelectOption>,
}

// ==========================================
// 帮助链接 (Help Links)
// ==========================================
// 五个固定主题,编译期确定,不是动态映射
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpLinks {
    /// 基本配置说明
    pub description: String,

    /// 输入配置说明
    pub inputs: String,

    /// 模型(转换)配置说明
    pub models: String,

    /// 立方体配置说明
    pub cubes: String,

    /// 输出配置说明
    pub outputs: String,
}

// ==========================================
// 策略静态数据 (Policy Static Data) - 根对象
// ==========================================
// 序列化格式: camelCase (与前端消费的对象字面量一致)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyStaticData {
    /// 向导步骤序列(固定 6 步,顺序有意义)
    pub steps: Vec<WizardStep>,

    /// 流式处理窗口长度范围
    pub spark_streaming_window: NumericRange,

    /// 检查点间隔范围
    pub checkpoint_interval: NumericRange,

    /// 检查点可用性范围
    pub checkpoint_availability: NumericRange,

    /// 分区格式选项集
    pub partition_format: OptionSet,

    /// 文档帮助链接
    pub help_links: HelpLinks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_as_str_roundtrip() {
        for g in PartitionGranularity::ALL {
            assert_eq!(
                PartitionGranularity::from_str(g.as_str()),
                Some(g),
                "as_str/from_str should roundtrip"
            );
        }
    }

    #[test]
    fn test_granularity_from_str_rejects_unknown() {
        assert_eq!(PartitionGranularity::from_str("week"), None);
        assert_eq!(PartitionGranularity::from_str(""), None);
    }

    #[test]
    fn test_granularity_from_str_is_lenient() {
        // 允许大小写与首尾空白
        assert_eq!(
            PartitionGranularity::from_str(" YEAR "),
            Some(PartitionGranularity::Year)
        );
    }

    #[test]
    fn test_granularity_to_option_label_equals_value() {
        for g in PartitionGranularity::ALL {
            let opt = g.to_option();
            assert_eq!(opt.label, opt.value, "label should equal value");
            assert_eq!(opt.value, g.as_str());
        }
    }

    #[test]
    fn test_granularity_serde_lowercase() {
        let json = serde_json::to_string(&PartitionGranularity::Minute).unwrap();
        assert_eq!(json, "\"minute\"");
    }

    #[test]
    fn test_numeric_range_contains() {
        let range = NumericRange::new(0, 10000);
        assert!(range.contains(0));
        assert!(range.contains(10000));
        assert!(!range.contains(-1));
        assert!(!range.contains(10001));
    }
}
