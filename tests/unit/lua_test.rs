//! Tests for the deterministic Lua serializer

use nestgen::lua::{LuaValue, TableKey, ToLua, is_array, quote, serialize};
use nestgen::convert::{Rule, RuleSet};

fn rule_set(entries: &[(&str, &str)]) -> RuleSet {
    entries.iter().map(|(k, v)| ((*k).to_string(), Rule::from_entry(k, v))).collect()
}

#[test]
fn test_quote_escapes() {
    assert_eq!(quote("plain"), "'plain'");
    assert_eq!(quote("it's"), r"'it\'s'");
    assert_eq!(quote(r"a\b"), r"'a\\b'");
    assert_eq!(quote("a\nb"), r"'a\nb'");
}

#[test]
fn test_is_array_dense_from_one() {
    let LuaValue::Table(dense) = LuaValue::array([LuaValue::Int(5), LuaValue::Int(6)]) else {
        unreachable!()
    };
    assert!(is_array(&dense));

    let mut sparse = dense.clone();
    sparse.remove(&TableKey::Int(1));
    assert!(!is_array(&sparse));

    let mut mixed = dense;
    mixed.insert(TableKey::from("x"), LuaValue::Bool(true));
    assert!(!is_array(&mixed));
}

#[test]
fn test_zero_based_keys_are_object() {
    let mut value = LuaValue::table();
    value.insert(0_i64, LuaValue::from("a"));
    value.insert(1_i64, LuaValue::from("b"));
    assert_eq!(value.to_lua_literal(), "{\n  [\"0\"] = 'a',\n  [\"1\"] = 'b',\n}");
}

#[test]
fn test_scalar_ignores_insert() {
    let mut value = LuaValue::Bool(false);
    value.insert("k", LuaValue::Int(1));
    assert_eq!(serialize(&value, 3), "false");
}

#[test]
fn test_rule_set_rendering() {
    let rules = rule_set(&[
        ("package.json", "package-lock.json, yarn.lock"),
        ("README.md", "LICENSE*"),
    ]);
    let expected = "\
{
  [\"README.md\"] = {
    [\"files\"] = {
      'LICENSE.*',
    },
    [\"ignore_case\"] = true,
    [\"pattern\"] = 'README%.md$',
  },
  [\"package.json\"] = {
    [\"files\"] = {
      'package-lock%.json',
      'yarn%.lock',
    },
    [\"pattern\"] = 'package%.json$',
  },
}";
    assert_eq!(rules.to_lua().to_lua_literal(), expected);
}

#[test]
fn test_rendering_is_deterministic() {
    let a = rule_set(&[("b.js", "b.map"), ("a.js", "a.map"), ("c.js", "c.map")]);
    let b = rule_set(&[("c.js", "c.map"), ("a.js", "a.map"), ("b.js", "b.map")]);
    assert_eq!(a.to_lua().to_lua_literal(), b.to_lua().to_lua_literal());
}

#[test]
fn test_empty_files_list_renders_empty_table() {
    let rules = rule_set(&[("a", " , ")]);
    assert!(rules.to_lua().to_lua_literal().contains("[\"files\"] = {},"));
}

#[test]
fn test_key_with_apostrophe_is_escaped() {
    let rules = rule_set(&[("it's.md", "notes.md")]);
    let text = rules.to_lua().to_lua_literal();
    assert!(text.starts_with("{\n  [\"it\\'s.md\"] = {\n"));
    assert!(text.replace('"', "'").contains(r"['it\'s.md'] = {"));
}

#[test]
fn test_key_backslash_matches_value_escaping() {
    let mut value = LuaValue::table();
    value.insert(r"a\b", LuaValue::from(r"a\b"));
    assert_eq!(value.to_lua_literal(), "{\n  [\"a\\\\b\"] = 'a\\\\b',\n}");
}
