use crate::common::env::TestEnv;
use crate::common::fixtures::{BROKEN_RULE_MODEL, ORDER_MODEL};

#[test]
fn inspect_lists_features_and_facets() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);

    let result = env.run(&["inspect", "model.toml"]);
    assert!(result.success, "inspect failed: {}", result.stderr);
    assert!(result.stdout.contains("Order#price"));
    assert!(result.stdout.contains("Order#ship(Address)"));
    assert!(result.stdout.contains("\"Ship\""));
    assert!(result.stdout.contains("value type: money"));
    assert!(!result.stdout.contains("Diagnostics"));
}

#[test]
fn inspect_filter_narrows_the_features() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);

    let result = env.run(&["inspect", "model.toml", "--filter", "sku"]);
    assert!(result.success);
    assert!(result.stdout.contains("Order#sku"));
    assert!(!result.stdout.contains("Order#price"));
}

#[test]
fn inspect_reports_skipped_rules() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", BROKEN_RULE_MODEL);

    let result = env.run(&["inspect", "model.toml", "--ascii"]);
    assert!(result.success, "a skipped rule must not fail the build");
    assert!(result.stdout.contains("Diagnostics (1):"));
    assert!(result
        .stdout
        .contains("[!] Customer#email [must-satisfy-annotation]: rule skipped: unknown specification 'IsEmail'"));
}

#[test]
fn inspect_json_is_one_document() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", BROKEN_RULE_MODEL);

    let result = env.run(&["inspect", "model.toml", "--json"]);
    assert!(result.success);
    let json: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(json["type"], "inspect");
    assert_eq!(json["data"]["classes"], 1);
    assert_eq!(
        json["data"]["diagnostics"][0]["factory"],
        "must-satisfy-annotation"
    );
}

#[test]
fn inspect_verbose_shows_installations() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);

    let result = env.run(&["inspect", "model.toml", "-v", "--filter", "status"]);
    assert!(result.success);
    assert!(result.stdout.contains("installed by:"));
    assert!(result.stdout.contains("posts-property-changed-event"));
}

#[test]
fn inspect_missing_model_fails() {
    let env = TestEnv::new();

    let result = env.run(&["inspect", "absent.toml"]);
    assert!(!result.success);
    assert!(result.stderr.contains("failed to build metamodel from absent.toml"));
}

#[test]
fn inspect_invalid_model_fails() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", "[[classes]]\nname = \"Order\"\ncolour = \"blue\"\n");

    let result = env.run(&["inspect", "model.toml"]);
    assert!(!result.success);
    assert!(result.combined_output().contains("invalid model declaration"));
}
