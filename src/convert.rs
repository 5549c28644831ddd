//! Glob → Lua pattern conversion
//!
//! Parent keys become anchored patterns whose wildcards are capture groups.
//! Child lists become plain patterns whose wildcards never capture, so the
//! renderer's `%1` style back-references keep pointing at the parent capture.

use std::collections::BTreeMap;

use crate::lua::{LuaValue, ToLua};
use crate::parser::PatternMap;

/// Characters with special meaning in Lua patterns that a key may contain
const LUA_MAGIC: &[char] = &['.', '+', '-', '^', '$', '(', ')', '%'];

/// Key prefix that gets case-insensitive matching
const CASE_INSENSITIVE_PREFIX: &str = "README";

/// A single nesting rule for one parent glob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Lua pattern matched against the parent filename
    pub pattern: String,
    /// Lua patterns for the nested children, in source order
    pub files: Vec<String>,
    /// `Some(true)` for case-insensitive rules, absent otherwise
    pub ignore_case: Option<bool>,
}

/// All rules keyed by their source glob, sorted by key
pub type RuleSet = BTreeMap<String, Rule>;

/// Convert a parent glob into an end-anchored Lua pattern
///
/// ```
/// assert_eq!(nestgen::convert::convert_key("*.config.js"), "(.*)%.config%.js$");
/// ```
#[must_use]
pub fn convert_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 8);
    for c in key.chars() {
        if LUA_MAGIC.contains(&c) {
            out.push('%');
            out.push(c);
        } else if c == '*' {
            out.push_str("(.*)");
        } else {
            out.push(c);
        }
    }
    out.push('$');
    out
}

/// Convert one child glob into a non-capturing Lua pattern
#[must_use]
pub fn convert_file(glob: &str) -> String {
    glob.replace('.', "%.").replace('*', ".*")
}

/// Split a comma-separated child list and convert each piece, keeping order
#[must_use]
pub fn convert_files(list: &str) -> Vec<String> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty()).map(convert_file).collect()
}

/// Whether a key's rule should match case-insensitively
#[must_use]
pub fn is_case_insensitive(key: &str) -> bool {
    key.starts_with(CASE_INSENSITIVE_PREFIX)
}

impl Rule {
    /// Build the rule for one settings entry
    #[must_use]
    pub fn from_entry(key: &str, value: &str) -> Self {
        Self {
            pattern: convert_key(key),
            files: convert_files(value),
            ignore_case: is_case_insensitive(key).then_some(true),
        }
    }
}

/// Build one rule per extracted pattern
#[must_use]
pub fn build_rule_set(patterns: &PatternMap) -> RuleSet {
    patterns.iter().map(|(key, value)| (key.clone(), Rule::from_entry(key, value))).collect()
}

impl ToLua for Rule {
    fn to_lua(&self) -> LuaValue {
        let mut table = LuaValue::table();
        table.insert("pattern", LuaValue::from(self.pattern.as_str()));
        table.insert("files", LuaValue::array(self.files.iter().map(|f| LuaValue::from(f.as_str()))));
        if let Some(ignore_case) = self.ignore_case {
            table.insert("ignore_case", LuaValue::Bool(ignore_case));
        }
        table
    }
}

impl ToLua for RuleSet {
    fn to_lua(&self) -> LuaValue {
        let mut table = LuaValue::table();
        for (key, rule) in self {
            table.insert(key.as_str(), rule.to_lua());
        }
        table
    }
}
