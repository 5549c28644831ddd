//! Print the serialized rules table

use nestgen::lua::ToLua;
use nestgen::{GeneratorConfig, Pipeline};

/// Write the rules literal to stdout without touching any output file
pub fn print(config: GeneratorConfig) -> anyhow::Result<bool> {
    let rules = Pipeline::new(config).quiet(true).load_rules()?;
    println!("{}", rules.to_lua().to_lua_literal());
    Ok(true)
}
