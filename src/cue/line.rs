use crate::cue::error::{DirectiveError, DirectiveResult};

const BLANKS: [char; 2] = [' ', '\t'];
const LINE_END_BLANKS: [char; 4] = ['\n', '\r', ' ', '\t'];

/// A line classified by its leading keyword.
///
/// Quoted and numeric payloads carry the text after the keyword. `Index`
/// carries the whole line because the timestamp reader locates `INDEX` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Directive<'a> {
    File(&'a str),
    Track(&'a str),
    Title(&'a str),
    Performer(&'a str),
    Index(&'a str),
}

/// Strips line endings and surrounding blanks, `None` for blank lines.
pub(crate) fn trim_line(raw: &str) -> Option<&str> {
    let line = raw
        .trim_end_matches(LINE_END_BLANKS)
        .trim_start_matches(BLANKS);

    if line.is_empty() { None } else { Some(line) }
}

pub(crate) fn classify(line: &str) -> Option<Directive<'_>> {
    if let Some(rest) = strip_keyword(line, "FILE") {
        Some(Directive::File(rest))
    } else if let Some(rest) = strip_keyword(line, "TRACK") {
        Some(Directive::Track(rest))
    } else if let Some(rest) = strip_keyword(line, "TITLE") {
        Some(Directive::Title(rest))
    } else if let Some(rest) = strip_keyword(line, "PERFORMER") {
        Some(Directive::Performer(rest))
    } else if find_ignore_ascii_case(line, "INDEX").is_some() {
        Some(Directive::Index(line))
    } else {
        None
    }
}

/// Matches `keyword` case-insensitively at the start of `line`, followed by a blank.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }

    line.get(keyword.len()..)?.strip_prefix(BLANKS)
}

pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Copies the text between the first two double quotes, cut to `capacity - 1` bytes.
pub(crate) fn extract_quoted(text: &str, capacity: usize) -> DirectiveResult<String> {
    let (_, after_open) = text.split_once('"').ok_or(DirectiveError::MissingQuote)?;
    let (inner, _) = after_open
        .split_once('"')
        .ok_or(DirectiveError::MissingQuote)?;

    Ok(truncate_to_char_boundary(inner, capacity.saturating_sub(1)).to_string())
}

fn truncate_to_char_boundary(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }

    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}

/// Reads a decimal integer the way C's `atoi` does: leading blanks, an
/// optional sign, then digits up to the first non-digit. No digits reads as 0.
pub(crate) fn leading_int(text: &str) -> i64 {
    let text = text.trim_start_matches(BLANKS);
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add((digit - b'0') as i64)
        });

    if negative { -value } else { value }
}

/// Skips the current non-blank token and the blanks after it.
pub(crate) fn skip_token(text: &str) -> &str {
    text.trim_start_matches(|c: char| !BLANKS.contains(&c))
        .trim_start_matches(BLANKS)
}
