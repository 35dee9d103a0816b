// ==========================================
// 策略配置向导 - 静态数据服务核心库
// ==========================================
// 技术栈: Rust + serde
// 系统定位: 向导 UI 的只读静态数据来源
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 值对象与类型
pub mod domain;

// 配置层 - 静态数据声明与访问器
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 宿主应用接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    HelpLinks, NumericRange, OptionSet, PartitionGranularity, PolicyStaticData, SelectOption,
    WizardStep,
};

// 静态数据访问器
pub use config::static_data::get_policy_static_data;

// API
pub use api::{ApiError, ApiResult, StaticDataApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "策略配置向导静态数据服务";

// ==========================================
// 预编译检查
// ==========================================
