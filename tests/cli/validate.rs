use crate::common::env::TestEnv;
use crate::common::fixtures::ORDER_MODEL;

#[test]
fn accepted_value_exits_zero() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);

    let result = env.run(&["validate", "model.toml", "Order#sku", "AB-12"]);
    assert!(result.success, "validate failed: {}", result.combined_output());
    assert_eq!(result.stdout, "✓ Order#sku accepts 'AB-12'\n");
}

#[test]
fn rejected_value_exits_one_with_reasons() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);

    let result = env.run(&["validate", "model.toml", "Order#sku", "ABCDEFGHIJ", "--ascii"]);
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.starts_with("[FAIL] Order#sku rejects 'ABCDEFGHIJ'"));
    assert!(result
        .stdout
        .contains("- must be at most 8 characters long (was 10)"));
    assert!(result
        .stdout
        .contains("rules: NotBlank, MaxLength(8), MinLength(3)"));
}

#[test]
fn money_literal_is_checked_against_money_rules() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);

    let accepted = env.run(&["validate", "model.toml", "Order#price", "12.50 USD"]);
    assert!(accepted.success);

    let rejected = env.run(&["validate", "model.toml", "Order#price", "0 usd"]);
    assert_eq!(rejected.exit_code, 1);
    assert!(rejected.stdout.contains("must be positive"));
    assert!(rejected.stdout.contains("'usd' is not a currency code"));
}

#[test]
fn feature_without_rules_accepts_anything() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);

    let result = env.run(&["validate", "model.toml", "Order#status", "anything"]);
    assert!(result.success);
    assert!(result.stdout.contains("no rules declared"));
}

#[test]
fn unknown_feature_is_an_error() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);

    let result = env.run(&["validate", "model.toml", "Order#colour", "blue"]);
    assert!(!result.success);
    assert!(result.stderr.contains("unknown feature 'Order#colour'"));
}

#[test]
fn json_report_carries_the_verdict() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);

    let result = env.run(&["validate", "model.toml", "Order#sku", " ", "--json"]);
    assert_eq!(result.exit_code, 1);
    let json: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(json["type"], "validate");
    assert_eq!(json["data"]["valid"], false);
    assert_eq!(json["data"]["reasons"][0], "must not be blank");
}
