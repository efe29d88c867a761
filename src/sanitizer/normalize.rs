//! Token Normalization
//!
//! Producers serialize records with their language's native encoding of non-finite
//! numbers (`NaN`, `Infinity`), which is not valid JSON. This step rewrites those tokens
//! to `null` before the text reaches the JSON parser.

use super::types::NormalizationMode;

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static NAN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bNaN\b").expect("NaN word pattern is valid"));

/// Rewrites non-finite numeric tokens into `null` according to `mode`.
///
/// Returns the input unchanged (borrowed) when nothing had to be rewritten.
pub fn normalize_tokens(raw: &str, mode: NormalizationMode) -> Cow<'_, str> {
    match mode {
        NormalizationMode::Grammar => normalize_outside_strings(raw),
        NormalizationMode::Textual => NAN_WORD.replace_all(raw, "null"),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Grammar-aware scan: string literals are copied verbatim, and outside of them every
/// maximal run of word characters is compared as a whole token.
fn normalize_outside_strings(raw: &str) -> Cow<'_, str> {
    let mut out = String::with_capacity(raw.len());
    let mut changed = false;
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = raw.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            continue;
        }

        if !is_word_char(c) {
            out.push(c);
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(idx, next)) = chars.peek() {
            if !is_word_char(next) {
                break;
            }
            end = idx + next.len_utf8();
            chars.next();
        }

        match &raw[start..end] {
            "NaN" => {
                out.push_str("null");
                changed = true;
            }
            "Infinity" => {
                // `-Infinity`: the sign was already copied, drop it with the token.
                if out.ends_with('-') {
                    out.pop();
                }
                out.push_str("null");
                changed = true;
            }
            token => out.push_str(token),
        }
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(raw)
    }
}
