// ==========================================
// StaticDataApi 集成测试
// ==========================================
// 测试目标: 验证 API 层输出的 JSON 文档形状
// ==========================================

use policy_wizard::api::StaticDataApi;
use policy_wizard::domain::types::PolicyStaticData;
use policy_wizard::get_policy_static_data;
use serde_json::Value;

#[test]
fn test_json_document_uses_camel_case_members() {
    policy_wizard::logging::init_test();

    let api = StaticDataApi::new();
    let json = api
        .get_policy_static_data_json()
        .expect("Should serialize static data");

    let doc: Value = serde_json::from_str(&json).expect("Should parse exported JSON");
    let root = doc.as_object().expect("Root should be an object");

    // 与前端消费的对象字面量同形: camelCase 成员名
    for member in [
        "steps",
        "sparkStreamingWindow",
        "checkpointInterval",
        "checkpointAvailability",
        "partitionFormat",
        "helpLinks",
    ] {
        assert!(root.contains_key(member), "Missing member '{}'", member);
    }
    assert_eq!(root.len(), 6, "Root should have exactly 6 members");
}

#[test]
fn test_json_document_values() {
    let api = StaticDataApi::new();
    let json = api
        .get_policy_static_data_json()
        .expect("Should serialize static data");
    let doc: Value = serde_json::from_str(&json).expect("Should parse exported JSON");

    assert_eq!(
        doc["steps"][0]["name"], "_POLICY_._STEPS_._DESCRIPTION_",
        "First step name should survive serialization"
    );
    assert_eq!(doc["sparkStreamingWindow"]["min"], 0);
    assert_eq!(doc["sparkStreamingWindow"]["max"], 10000);
    assert_eq!(
        doc["partitionFormat"]["values"]
            .as_array()
            .expect("values should be an array")
            .len(),
        5
    );
    assert_eq!(doc["partitionFormat"]["values"][2]["label"], "day");
    assert_eq!(
        doc["helpLinks"]["outputs"],
        "http://docs.stratio.com/modules/sparkta/development/policy.html#outputs"
    );
}

#[test]
fn test_json_document_roundtrips_to_typed_model() {
    let api = StaticDataApi::new();
    let json = api
        .get_policy_static_data_json()
        .expect("Should serialize static data");

    let parsed: PolicyStaticData =
        serde_json::from_str(&json).expect("Exported document should deserialize");
    assert_eq!(
        &parsed,
        get_policy_static_data(),
        "Roundtrip should preserve the data contract"
    );
}

#[test]
fn test_typed_accessor_matches_config_layer() {
    let api = StaticDataApi::default();
    assert!(
        std::ptr::eq(api.get_policy_static_data(), get_policy_static_data()),
        "API should expose the shared config instance"
    );
}
