use rstest::rstest;

use super::*;

#[test]
fn test_literal_pattern_is_exact_equality() {
    assert!(matches("hello", "hello"));
    assert!(!matches("hello", "hell"));
    assert!(!matches("hell", "hello"));
    assert!(!matches("hello", "hellx"));
}

#[test]
fn test_empty_pattern_and_text() {
    assert!(matches("", ""));
    assert!(!matches("", "x"));
    assert!(!matches("x", ""));
}

#[test]
fn test_lone_wildcard_matches_everything() {
    assert!(matches("*", ""));
    assert!(matches("*", "x"));
    assert!(matches("*", "anything at all"));
    assert!(matches("*", "héllo wörld"));
}

#[rstest]
#[case("a*b", "ab", true)]
#[case("a*b", "axxxb", true)]
#[case("a*b", "a", false)]
#[case("a*b", "b", false)]
#[case("a*b", "axxx", false)]
#[case("a*b", "xxxb", false)]
#[case("*b", "b", true)]
#[case("*b", "aaab", true)]
#[case("a*", "a", true)]
#[case("a*", "abc", true)]
#[case("a*", "ba", false)]
#[case("a*b*c", "abc", true)]
#[case("a*b*c", "aXbYc", true)]
#[case("a*b*c", "aXbY", false)]
#[case("*a*", "bab", true)]
#[case("*a*", "bbb", false)]
fn test_wildcard_matching(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(
        matches(pattern, text),
        expected,
        "pattern {pattern:?} against {text:?}"
    );
}

#[test]
fn test_consecutive_wildcards_behave_as_one() {
    assert!(matches("**", ""));
    assert!(matches("***", "abc"));
    assert!(matches("a**b", "ab"));
    assert!(matches("a**b", "axxxb"));
    assert!(!matches("a**b", "a"));
}

#[test]
fn test_multibyte_characters_are_atomic() {
    assert!(matches("héllo", "héllo"));
    assert!(!matches("héllo", "hello"));
    assert!(matches("日*語", "日本語"));
    assert!(matches("日*", "日"));
    assert!(!matches("日", "日本"));
}

#[test]
fn test_no_escape_for_literal_asterisk() {
    // A backslash is an ordinary literal; the asterisk stays a wildcard.
    assert!(matches(r"a\*b", r"a\xxxb"));
    assert!(!matches(r"a\*b", "a*b"));
}

#[test]
fn test_matching_is_deterministic() {
    for _ in 0..3 {
        assert!(matches("a*b*c", "aXbYc"));
        assert!(!matches("a*b*c", "aXbY"));
    }
}

#[test]
fn test_compiled_pattern_is_reusable() {
    let pattern = Pattern::new("*.log");
    assert!(pattern.matches("app.log"));
    assert!(pattern.matches(".log"));
    assert!(!pattern.matches("app.log.gz"));
}

#[test]
fn test_display_round_trip() {
    let raw = "a*b*c";
    assert_eq!(Pattern::new(raw).to_string(), raw);
}
