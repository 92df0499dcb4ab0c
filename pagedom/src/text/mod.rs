use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::element::Span;
use crate::types::Style;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = "…";
    let ellipsis_width = 1;
    let target_width = max_width.saturating_sub(ellipsis_width);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

/// Greedy word wrap. Runs of whitespace collapse to a single space,
/// explicit newlines are kept, words longer than the line are broken.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                if !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                }

                let mut broken = wrap_chars(word, max_width);
                let last = broken.pop().unwrap_or_default();
                lines.extend(broken);
                current_width = display_width(&last);
                current_line = last;
                continue;
            }

            let space_width = if current_line.is_empty() { 0 } else { 1 };

            if current_width + space_width + word_width > max_width {
                lines.push(std::mem::take(&mut current_line));
                current_line.push_str(word);
                current_width = word_width;
            } else {
                if space_width == 1 {
                    current_line.push(' ');
                    current_width += 1;
                }
                current_line.push_str(word);
                current_width += word_width;
            }
        }

        lines.push(current_line);
    }

    lines
}

pub fn wrap_chars(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        let mut current_line = String::new();
        let mut current_width = 0;

        for ch in input_line.chars() {
            let ch_width = char_width(ch);

            if ch_width == 0 {
                // Zero-width char (combining, etc.) - just add it
                current_line.push(ch);
                continue;
            }

            if current_width + ch_width > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }

            current_line.push(ch);
            current_width += ch_width;
        }

        lines.push(current_line);
    }

    lines
}

/// A wrapped line of styled characters.
pub type StyledLine = Vec<(char, Style)>;

/// Wrap styled spans, keeping every character (whitespace included) and its
/// style. Lines break after whitespace where possible; the whitespace that
/// ends a line is dropped.
pub fn wrap_spans(spans: &[Span], max_width: usize) -> Vec<StyledLine> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines: Vec<StyledLine> = Vec::new();
    let mut current: StyledLine = Vec::new();
    let mut current_width = 0;
    // Index in `current` just after the last whitespace char
    let mut last_break: Option<usize> = None;

    for span in spans {
        for ch in span.text.chars() {
            if ch == '\n' {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
                last_break = None;
                continue;
            }

            let ch_width = char_width(ch);
            if current_width + ch_width > max_width {
                if ch.is_whitespace() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                    last_break = None;
                    continue;
                }

                match last_break {
                    Some(idx) if idx < current.len() => {
                        let carried = current.split_off(idx);
                        while current.last().is_some_and(|(c, _)| c.is_whitespace()) {
                            current.pop();
                        }
                        lines.push(std::mem::take(&mut current));
                        current_width = carried.iter().map(|(c, _)| char_width(*c)).sum();
                        current = carried;
                    }
                    _ => {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                }
                last_break = None;
            }

            current.push((ch, span.style));
            current_width += ch_width;
            if ch.is_whitespace() {
                last_break = Some(current.len());
            }
        }
    }

    lines.push(current);
    lines
}
