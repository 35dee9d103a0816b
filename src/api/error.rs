// ==========================================
// 策略配置向导 - API层错误类型
// ==========================================
// 职责: 定义 API 层错误类型
// 说明: 类型化访问器不可能失败,仅序列化出口可失败
// ==========================================

use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 静态数据序列化失败
    #[error("序列化失败: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
