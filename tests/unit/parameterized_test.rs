//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use nestgen::convert::{Rule, convert_file, convert_key};
use test_case::test_case;

// =============================================================================
// Key conversion
// =============================================================================

#[test_case("package.json", "package%.json$" ; "literal file")]
#[test_case("*.config.js", "(.*)%.config%.js$" ; "wildcard prefix")]
#[test_case("Dockerfile", "Dockerfile$" ; "no magic characters")]
#[test_case("*", "(.*)$" ; "bare wildcard")]
#[test_case("go.mod", "go%.mod$" ; "short extension")]
#[test_case("tsconfig-base.json", "tsconfig%-base%.json$" ; "dash escaped")]
#[test_case("CMakeLists.txt", "CMakeLists%.txt$" ; "mixed case untouched")]
#[test_case("$(x).js", "%$%(x%)%.js$" ; "dollar and parens escaped")]
fn test_convert_key(key: &str, expected: &str) {
    assert_eq!(convert_key(key), expected);
}

// =============================================================================
// Child glob conversion
// =============================================================================

#[test_case("yarn.lock", "yarn%.lock" ; "literal child")]
#[test_case("*.d.ts", ".*%.d%.ts" ; "wildcard child")]
#[test_case("$(capture).test.ts", "$(capture)%.test%.ts" ; "capture token kept")]
#[test_case("CHANGELOG*", "CHANGELOG.*" ; "trailing wildcard")]
#[test_case(".npmrc", "%.npmrc" ; "dotfile")]
fn test_convert_file(glob: &str, expected: &str) {
    assert_eq!(convert_file(glob), expected);
}

// =============================================================================
// Case-insensitivity policy
// =============================================================================

#[test_case("README.md", Some(true) ; "readme markdown")]
#[test_case("README*", Some(true) ; "readme glob")]
#[test_case("README", Some(true) ; "bare readme")]
#[test_case("readme.md", None ; "lowercase readme")]
#[test_case("package.json", None ; "package json")]
#[test_case("LICENSE", None ; "other uppercase family")]
fn test_ignore_case(key: &str, expected: Option<bool>) {
    assert_eq!(Rule::from_entry(key, "x").ignore_case, expected);
}
