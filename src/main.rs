// ==========================================
// 策略配置向导 - 静态数据导出入口
// ==========================================
// 用途: 将向导静态数据以 JSON 输出到 stdout,
//       供宿主应用或调试时直接查看数据契约
// 用法: cargo run --bin policy-wizard
// ==========================================

use policy_wizard::api::StaticDataApi;
use policy_wizard::logging;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("{} v{}", policy_wizard::APP_NAME, policy_wizard::VERSION);

    let api = StaticDataApi::new();
    let json = api.get_policy_static_data_json()?;
    println!("{}", json);

    Ok(())
}
