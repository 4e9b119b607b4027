//! Health-check match blocks.
//!
//! An expectation string is a literal payload unless it starts with a
//! regex modifier. Modifiers are tried in table order, longest first,
//! because `~*` also starts with `~`.

use crate::compiler::output::{Match, RegexModifier};
use crate::config::Match as DeclaredMatch;

/// Regex prefixes, longest first.
pub const EXPECT_MODIFIERS: &[(&str, RegexModifier)] = &[
    ("~*", RegexModifier::CaseInsensitive),
    ("~", RegexModifier::CaseSensitive),
];

/// Split an expectation into its modifier and the remaining pattern.
pub fn parse_expect(expect: &str) -> (RegexModifier, &str) {
    for (prefix, modifier) in EXPECT_MODIFIERS {
        if let Some(rest) = expect.strip_prefix(prefix) {
            return (*modifier, rest);
        }
    }
    (RegexModifier::None, expect)
}

/// Name of the match block owned by an upstream.
pub fn match_name(upstream_name: &str) -> String {
    format!("match_{}", upstream_name)
}

pub fn build_match(declared: &DeclaredMatch, name: String) -> Match {
    let (modifier, expect) = parse_expect(&declared.expect);
    Match {
        name,
        send: declared.send.clone(),
        expect_regex_modifier: modifier,
        expect: expect.to_string(),
    }
}
