use crate::common::env::TestEnv;
use crate::common::fixtures::{ORDER_MODEL, ORDER_MODEL_YAML};

#[test]
fn columns_lists_every_mapped_property() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);

    let result = env.run(&["columns", "model.toml"]);
    assert!(result.success, "columns failed: {}", result.stderr);

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert!(lines[0].starts_with("FEATURE"));
    assert!(lines[1].contains("price1") && lines[1].contains("DECIMAL(21,2)"));
    assert!(lines[2].contains("price2") && lines[2].contains("VARCHAR(3)"));
    assert!(lines[3].contains("Order#sku") && lines[3].contains("VARCHAR(255)"));
    assert_eq!(lines.len(), 4);
}

#[test]
fn columns_reads_yaml_models() {
    let env = TestEnv::new();
    env.write_project_file("model.yaml", ORDER_MODEL_YAML);

    let result = env.run(&["columns", "model.yaml"]);
    assert!(result.success);
    assert!(result.stdout.contains("Order#sku"));
}

#[test]
fn columns_json() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);

    let result = env.run(&["--json", "columns", "model.toml"]);
    assert!(result.success);
    let json: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(json["type"], "columns");
    let features = json["data"]["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["semantics"], "money");
    assert_eq!(features[0]["columns"][1]["name"], "price2");
}
