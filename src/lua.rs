//! Deterministic Lua table literal serializer
//!
//! Tables whose keys are exactly `1..=n` render as arrays. Every other table
//! renders as an object with `["key"]` entries sorted by the key's string
//! form, so the same value always produces byte-identical text.

use std::collections::BTreeMap;
use std::fmt::Write;

/// Indentation for one nesting level
const INDENT: &str = "  ";

/// A key in a Lua table
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TableKey {
    /// Integer key
    Int(i64),
    /// String key
    Str(String),
}

impl std::fmt::Display for TableKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for TableKey {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<i64> for TableKey {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

/// A value that can be rendered as a Lua literal
#[derive(Debug, Clone, PartialEq)]
pub enum LuaValue {
    /// String, rendered single-quoted
    Str(String),
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Table (array or object depending on its keys)
    Table(BTreeMap<TableKey, LuaValue>),
}

impl From<&str> for LuaValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<bool> for LuaValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for LuaValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

/// Conversion into a serializable Lua value
pub trait ToLua {
    /// Build the Lua value
    fn to_lua(&self) -> LuaValue;
}

impl LuaValue {
    /// An empty table
    #[must_use]
    pub const fn table() -> Self {
        Self::Table(BTreeMap::new())
    }

    /// A table with keys `1..=n` holding `items` in order
    #[must_use]
    pub fn array(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Table((1..).map(TableKey::Int).zip(items).collect())
    }

    /// Insert into a table; no-op on scalars
    pub fn insert(&mut self, key: impl Into<TableKey>, value: Self) {
        if let Self::Table(entries) = self {
            entries.insert(key.into(), value);
        }
    }

    /// Render at the top level
    #[must_use]
    pub fn to_lua_literal(&self) -> String {
        serialize(self, 0)
    }
}

/// Whether a table's keys are exactly the integers `1..=len`
#[must_use]
pub fn is_array(entries: &BTreeMap<TableKey, LuaValue>) -> bool {
    // BTreeMap orders Int keys ascending and before any Str key
    entries.keys().zip(1_i64..).all(|(key, expected)| *key == TableKey::Int(expected))
}

/// Quote a string for Lua using single quotes
#[must_use]
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Quote a table key for Lua using double quotes
///
/// Both `"` and `'` are escaped.
#[must_use]
pub fn quote_key(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render `value` with nested tables indented `depth` levels
#[must_use]
pub fn serialize(value: &LuaValue, depth: usize) -> String {
    match value {
        LuaValue::Str(s) => quote(s),
        LuaValue::Bool(b) => b.to_string(),
        LuaValue::Int(i) => i.to_string(),
        LuaValue::Table(entries) => serialize_table(entries, depth),
    }
}

fn serialize_table(entries: &BTreeMap<TableKey, LuaValue>, depth: usize) -> String {
    if entries.is_empty() {
        return "{}".to_string();
    }

    let outer = INDENT.repeat(depth);
    let inner = INDENT.repeat(depth + 1);
    let mut out = String::from("{\n");

    if is_array(entries) {
        for value in entries.values() {
            let _ = writeln!(out, "{inner}{},", serialize(value, depth + 1));
        }
    } else {
        let mut sorted: Vec<(String, &LuaValue)> =
            entries.iter().map(|(k, v)| (k.to_string(), v)).collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, value) in sorted {
            let _ =
                writeln!(out, "{inner}[{}] = {},", quote_key(&key), serialize(value, depth + 1));
        }
    }

    out.push_str(&outer);
    out.push('}');
    out
}
