// ==========================================
// 策略配置向导 - 静态数据配置
// ==========================================
// 职责: 声明向导消费的静态数据字面量,并提供只读访问器
// 存储: 进程内共享不可变实例 (LazyLock,首次访问时构造)
// ==========================================

use crate::domain::types::{
    HelpLinks, NumericRange, OptionSet, PartitionGranularity, PolicyStaticData, WizardStep,
};
use std::sync::LazyLock;

// ==========================================
// 数据键常量
// ==========================================
// 步骤名称为 i18n 键,由前端解析;图标为前端图标库标识符
pub mod data_keys {
    // 步骤名称 (i18n 键)
    pub const STEP_DESCRIPTION: &str = "_POLICY_._STEPS_._DESCRIPTION_";
    pub const STEP_INPUT: &str = "_POLICY_._STEPS_._INPUT_";
    pub const STEP_MODEL: &str = "_POLICY_._STEPS_._MODEL_";
    pub const STEP_CUBES: &str = "_POLICY_._STEPS_._CUBES_";
    pub const STEP_OUTPUTS: &str = "_POLICY_._STEPS_._OUTPUTS_";
    pub const STEP_FINISH: &str = "_POLICY_._STEPS_._FINISH_";

    // 步骤图标
    pub const ICON_DESCRIPTION: &str = "icon-tag_left";
    pub const ICON_INPUT: &str = "icon-import";
    pub const ICON_MODEL: &str = "icon-content-left";
    pub const ICON_CUBES: &str = "icon-box";
    pub const ICON_OUTPUTS: &str = "icon-export";
    pub const ICON_FINISH: &str = "icon-paper";

    // 帮助文档链接
    pub const HELP_DESCRIPTION: &str =
        "http://docs.stratio.com/modules/sparkta/development/policy.html#general-configuration";
    pub const HELP_INPUTS: &str =
        "http://docs.stratio.com/modules/sparkta/development/policy.html#inputs";
    pub const HELP_MODELS: &str =
        "http://docs.stratio.com/modules/sparkta/development/policy.html#transformations";
    pub const HELP_CUBES: &str =
        "http://docs.stratio.com/modules/sparkta/development/policy.html#cubes";
    pub const HELP_OUTPUTS: &str =
        "http://docs.stratio.com/modules/sparkta/development/policy.html#outputs";
}

// ==========================================
// 数值范围边界常量
// ==========================================
// 三个范围当前取值相同,但语义相互独立,保留为独立常量
pub const SPARK_STREAMING_WINDOW_RANGE: NumericRange = NumericRange::new(0, 10000);
pub const CHECKPOINT_INTERVAL_RANGE: NumericRange = NumericRange::new(0, 10000);
pub const CHECKPOINT_AVAILABILITY_RANGE: NumericRange = NumericRange::new(0, 10000);

// ==========================================
// 静态数据构造
// ==========================================

/// 构造静态数据字面量
///
/// 步骤顺序即向导页面顺序;分区格式选项由 PartitionGranularity
/// 枚举按声明顺序派生,保证 label 与 value 一致。
fn build_policy_static_data() -> PolicyStaticData {
    PolicyStaticData {
        steps: vec![
            WizardStep::new(data_keys::STEP_DESCRIPTION, data_keys::ICON_DESCRIPTION),
            WizardStep::new(data_keys::STEP_INPUT, data_keys::ICON_INPUT),
            WizardStep::new(data_keys::STEP_MODEL, data_keys::ICON_MODEL),
            WizardStep::new(data_keys::STEP_CUBES, data_keys::ICON_CUBES),
            WizardStep::new(data_keys::STEP_OUTPUTS, data_keys::ICON_OUTPUTS),
            WizardStep::new(data_keys::STEP_FINISH, data_keys::ICON_FINISH),
        ],
        spark_streaming_window: SPARK_STREAMING_WINDOW_RANGE,
        checkpoint_interval: CHECKPOINT_INTERVAL_RANGE,
        checkpoint_availability: CHECKPOINT_AVAILABILITY_RANGE,
        partition_format: OptionSet {
            values: PartitionGranularity::ALL
                .iter()
                .map(PartitionGranularity::to_option)
                .collect(),
        },
        help_links: HelpLinks {
            description: data_keys::HELP_DESCRIPTION.to_string(),
            inputs: data_keys::HELP_INPUTS.to_string(),
            models: data_keys::HELP_MODELS.to_string(),
            cubes: data_keys::HELP_CUBES.to_string(),
            outputs: data_keys::HELP_OUTPUTS.to_string(),
        },
    }
}

// 进程内唯一实例,首次访问时构造,之后只读共享
static POLICY_STATIC_DATA: LazyLock<PolicyStaticData> = LazyLock::new(build_policy_static_data);

/// 获取策略静态数据
///
/// # 共享策略
/// 返回进程内共享的不可变实例(非副本)。多次调用返回同一引用,
/// 任意线程可并发读取;需要持有所有权时由调用方 `clone()`。
///
/// # 错误
/// 无。本访问器不做 I/O、不做校验,不可能失败。
pub fn get_policy_static_data() -> &'static PolicyStaticData {
    &POLICY_STATIC_DATA
}
