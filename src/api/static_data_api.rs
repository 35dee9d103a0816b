// ==========================================
// 策略配置向导 - 静态数据 API
// ==========================================
// 职责: 向宿主应用提供静态数据读取接口
// 说明: 宿主的依赖注入机制在本 crate 之外,这里只暴露普通句柄
// ==========================================

use crate::api::error::ApiResult;
use crate::config::static_data::get_policy_static_data;
use crate::domain::types::PolicyStaticData;

// ==========================================
// StaticDataApi - 静态数据接口
// ==========================================
// 无状态句柄,可自由复制
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDataApi;

impl StaticDataApi {
    /// 创建 StaticDataApi 句柄
    pub fn new() -> Self {
        Self
    }

    /// 获取策略静态数据(类型化)
    ///
    /// # 返回
    /// 进程内共享的不可变实例引用,多次调用返回同一实例
    pub fn get_policy_static_data(&self) -> &'static PolicyStaticData {
        tracing::debug!("读取策略静态数据");
        get_policy_static_data()
    }

    /// 获取策略静态数据(JSON 文档)
    ///
    /// # 返回
    /// - Ok(String): camelCase 字段的 JSON 文档,与前端消费的对象字面量同形
    /// - Err: 序列化失败
    pub fn get_policy_static_data_json(&self) -> ApiResult<String> {
        let json = serde_json::to_string_pretty(get_policy_static_data())?;
        tracing::debug!(bytes = json.len(), "序列化策略静态数据");
        Ok(json)
    }
}
