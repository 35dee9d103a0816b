// ==========================================
// 策略配置向导 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供宿主应用调用
// ==========================================

pub mod error;
pub mod static_data_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use static_data_api::StaticDataApi;
