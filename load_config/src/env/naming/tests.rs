//! Unit tests for environment name normalisation.

use anyhow::{Result, ensure};
use rstest::rstest;
use serde_json::{Value, json};

use super::NamingContext;
use crate::EnvSnapshot;

fn env(vars: &[(&str, &str)]) -> EnvSnapshot {
    vars.iter().copied().collect()
}

fn resolve(ctx: &NamingContext, vars: &[(&str, &str)], keys: &[&str]) -> Value {
    Value::Object(ctx.collect(keys.iter().copied(), &env(vars)))
}

#[rstest]
fn scalar_lookup_applies_prefix_case_insensitively() {
    let ctx = NamingContext::new("prefix_", false);
    let out = resolve(&ctx, &[("PREFIX_PARAM3", "env_value1")], &["Param3", "param4"]);
    assert_eq!(out, json!({"param3": "env_value1"}));
}

#[rstest]
fn nested_names_become_trees() {
    let ctx = NamingContext::new("PREFIX123_", false);
    let out = resolve(
        &ctx,
        &[
            ("PREFIX123_PARAM123.KEY1", "env_value1"),
            ("PREFIX123_PARAM123.KEY2", "env_value2"),
        ],
        &["param123"],
    );
    assert_eq!(
        out,
        json!({"param123": {"key1": "env_value1", "key2": "env_value2"}})
    );
}

#[rstest]
fn nesting_recurses_through_every_dot() {
    let ctx = NamingContext::new("APP_", false);
    let out = resolve(
        &ctx,
        &[
            ("APP_DB.PRIMARY.HOST", "h"),
            ("APP_DB.PRIMARY.PORT", "5432"),
            ("APP_DB.REPLICA", "r"),
        ],
        &["db"],
    );
    assert_eq!(
        out,
        json!({"db": {"primary": {"host": "h", "port": "5432"}, "replica": "r"}})
    );
}

#[rstest]
fn tree_takes_precedence_over_scalar() {
    let ctx = NamingContext::new("", false);
    let out = resolve(
        &ctx,
        &[("PARAM", "flat"), ("PARAM.KEY", "nested"), ("PARAM.KEY.DEEP", "deeper")],
        &["param"],
    );
    assert_eq!(out, json!({"param": {"key": {"deep": "deeper"}}}));
}

#[rstest]
fn empty_segments_are_skipped() {
    let ctx = NamingContext::new("", false);
    let out = resolve(&ctx, &[("PARAM.", "x"), ("PARAM..KEY", "y")], &["param"]);
    assert_eq!(out, json!({"param": {"key": "y"}}));
}

#[rstest]
fn platform_escaping_reconstructs_trees() {
    let ctx = NamingContext::new("PREFIX125_", true);
    let out = resolve(
        &ctx,
        &[
            ("APPSETTING_PREFIX125_PARAM125_KEY1", "env_value1"),
            ("APPSETTING_PREFIX125_PARAM125_KEY2", "env_value2"),
        ],
        &["param125"],
    );
    assert_eq!(
        out,
        json!({"param125": {"key1": "env_value1", "key2": "env_value2"}})
    );
}

#[rstest]
fn platform_names_are_ignored_without_the_flag() {
    let ctx = NamingContext::new("PREFIX125_", false);
    let out = resolve(
        &ctx,
        &[("APPSETTING_PREFIX125_PARAM125_KEY1", "env_value1")],
        &["param125"],
    );
    assert_eq!(out, json!({}));
}

#[rstest]
fn dotted_keys_and_their_tree_coexist() {
    let ctx = NamingContext::new("PREFIX127_", true);
    let out = resolve(
        &ctx,
        &[
            ("APPSETTING_PREFIX127_PARAM127_KEY1", "env_value1"),
            ("APPSETTING_PREFIX127_PARAM127_KEY2", "env_value2"),
        ],
        &["param127", "param127.key1", "param127.key2"],
    );
    assert_eq!(
        out,
        json!({
            "param127": {"key1": "env_value1", "key2": "env_value2"},
            "param127.key1": "env_value1",
            "param127.key2": "env_value2",
        })
    );
}

#[rstest]
#[case("param1", &[("PARAM1", "system")], "system")]
#[case("param1", &[("PARAM1", "system"), ("APPSETTING_PARAM1", "platform")], "platform")]
#[case("param.key", &[("PARAM_KEY", "underscore")], "underscore")]
#[case("param.key", &[("PARAM_KEY", "underscore"), ("PARAM.KEY", "dotted")], "dotted")]
fn platform_scalar_precedence(
    #[case] key: &str,
    #[case] vars: &[(&str, &str)],
    #[case] expected: &str,
) -> Result<()> {
    let ctx = NamingContext::new("", true);
    let value = ctx.resolve_key(key, &env(vars));
    ensure!(
        value == Some(Value::String(expected.to_owned())),
        "expected {expected} for {key}, got {value:?}"
    );
    Ok(())
}

#[rstest]
fn platform_member_shadows_standard_member() {
    let ctx = NamingContext::new("", true);
    let out = resolve(
        &ctx,
        &[("PARAM.KEY1", "standard"), ("APPSETTING_PARAM_KEY1", "platform")],
        &["param"],
    );
    assert_eq!(out, json!({"param": {"key1": "platform"}}));
}

#[rstest]
#[case(false, &["param1", "param123"])]
#[case(true, &["param1", "param123", "param125_key1"])]
fn discovers_prefixed_top_level_keys(#[case] platform: bool, #[case] expected: &[&str]) {
    let ctx = NamingContext::new("Prefix_", platform);
    let snapshot = env(&[
        ("PREFIX_PARAM1", "a"),
        ("PREFIX_PARAM123.KEY1", "b"),
        ("APPSETTING_PREFIX_PARAM125_KEY1", "c"),
        ("OTHER", "d"),
        ("PREFIX_", "empty"),
    ]);
    let keys: Vec<String> = ctx.discover(&snapshot).into_iter().collect();
    assert_eq!(keys, expected);
}

#[rstest]
#[case("prefix_", false, "param1", "PREFIX_PARAM1")]
#[case("prefix_", true, "param.key1", "APPSETTING_PREFIX_PARAM_KEY1")]
fn reports_env_var_names(
    #[case] prefix: &str,
    #[case] platform: bool,
    #[case] key: &str,
    #[case] expected: &str,
) {
    assert_eq!(NamingContext::new(prefix, platform).env_var_name(key), expected);
}
