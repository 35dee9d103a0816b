// ==========================================
// 策略配置向导 - 领域模型层
// ==========================================
// 职责: 定义向导静态数据的领域类型
// 红线: 不含数据访问逻辑,不含 UI 逻辑
// ==========================================

pub mod types;

// 重导出核心类型
pub use types::{
    HelpLinks, NumericRange, OptionSet, PartitionGranularity, PolicyStaticData, SelectOption,
    WizardStep,
};
