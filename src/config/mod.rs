// ==========================================
// 策略配置向导 - 配置层
// ==========================================
// 职责: 声明并提供向导静态数据 (唯一数据来源)
// 存储: 进程内不可变字面量,无外部存储
// ==========================================

pub mod static_data;

// 重导出静态数据访问器与常量
pub use static_data::{
    data_keys, get_policy_static_data, CHECKPOINT_AVAILABILITY_RANGE, CHECKPOINT_INTERVAL_RANGE,
    SPARK_STREAMING_WINDOW_RANGE,
};
