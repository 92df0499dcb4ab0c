use pagedom::text::{display_width, truncate_to_width, wrap_chars, wrap_words};

#[test]
fn test_wrap_short_text() {
    assert_eq!(wrap_words("hello world", 20), vec!["hello world"]);
}

#[test]
fn test_wrap_at_word_boundary() {
    assert_eq!(wrap_words("hello world", 8), vec!["hello", "world"]);
}

#[test]
fn test_wrap_long_word() {
    assert_eq!(
        wrap_words("supercalifragilistic", 5),
        vec!["super", "calif", "ragil", "istic"]
    );
}

#[test]
fn test_wrap_preserves_empty_lines() {
    assert_eq!(wrap_words("hello\n\nworld", 20), vec!["hello", "", "world"]);
}

#[test]
fn test_wrap_zero_width() {
    assert!(wrap_words("hello", 0).is_empty());
}

#[test]
fn test_wrap_multiple_words_per_line() {
    assert_eq!(
        wrap_words("the quick brown fox jumps", 15),
        vec!["the quick brown", "fox jumps"]
    );
}

#[test]
fn test_wrap_exact_fit() {
    assert_eq!(wrap_words("hello", 5), vec!["hello"]);
}

#[test]
fn test_wrap_chars_breaks_mid_word() {
    assert_eq!(wrap_chars("abcdef", 4), vec!["abcd", "ef"]);
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("Example detail", 8), "Example…");
    assert_eq!(truncate_to_width("short", 8), "short");
}

#[test]
fn test_display_width_counts_wide_chars() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("日本"), 4);
}
