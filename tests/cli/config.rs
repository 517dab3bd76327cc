use crate::common::env::TestEnv;
use crate::common::fixtures::ORDER_MODEL;

#[test]
fn project_config_changes_column_types() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);
    env.write_project_file(
        "metafacet.toml",
        "[mapping]\nmoney_amount_type = \"NUMERIC(12,2)\"\n",
    );

    let result = env.run(&["columns", "model.toml"]);
    assert!(result.success);
    assert!(result.stdout.contains("NUMERIC(12,2)"));
    assert!(!result.stdout.contains("DECIMAL(21,2)"));
}

#[test]
fn explicit_config_flag_wins() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);
    env.write_project_file("metafacet.toml", "[mapping]\ntext_type = \"TEXT\"\n");
    env.write_project_file("other.toml", "[mapping]\ntext_type = \"CLOB\"\n");

    let result = env.run(&["columns", "model.toml", "--config", "other.toml"]);
    assert!(result.success);
    assert!(result.stdout.contains("CLOB"));
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);
    env.write_project_file("metafacet.toml", "[mapping]\ntext_typ = \"TEXT\"\n");

    let result = env.run(&["columns", "model.toml"]);
    assert!(result.success);
    assert!(result
        .stderr
        .contains("unknown config key 'text_typ' in metafacet.toml:2 (did you mean 'text_type'?)"));
}

#[test]
fn env_disables_factories() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);

    let result = env.run_with_env(
        &["columns", "model.toml"],
        &[("METAFACET_DISABLED_FACTORIES", "value-semantics")],
    );
    assert!(result.success);
    assert_eq!(result.stdout, "No mapped properties\n");
}

#[test]
fn missing_explicit_config_is_an_error() {
    let env = TestEnv::new();
    env.write_project_file("model.toml", ORDER_MODEL);

    let result = env.run(&["inspect", "model.toml", "--config", "absent.toml"]);
    assert!(!result.success);
    assert!(result.stderr.contains("failed to load config absent.toml"));
}
