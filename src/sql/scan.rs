//! Scanner primitives shared by the table parser and the reference auditor.
//!
//! BigQuery has eight string literal forms (single/double quoted, their
//! triple-quoted variants, and raw `r`-prefixed versions of all four) and
//! three comment forms (`--`, `#`, `/* */`). Both scanners must agree exactly
//! on where these begin and end, so the transition logic lives here.

/// Mode of the scanner. Exactly one state is active at a time; every opened
/// string or comment returns to `Normal` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    Normal,
    SingleQuote,
    DoubleQuote,
    TripleSingle,
    TripleDouble,
    RawSingle,
    RawDouble,
    RawTripleSingle,
    RawTripleDouble,
    LineCommentDash,
    LineCommentHash,
    BlockComment,
}

/// Check whether `pattern` occurs at `chars[i..]`.
pub(crate) fn has_prefix(chars: &[char], i: usize, pattern: &str) -> bool {
    pattern
        .chars()
        .enumerate()
        .all(|(k, c)| chars.get(i + k) == Some(&c))
}

/// If a string literal opens at `chars[i..]`, return its state and the length
/// of the opening sequence. Raw prefixes are checked before plain quotes and
/// triple quotes before single ones; the `r` is case-insensitive.
pub(crate) fn string_start(chars: &[char], i: usize) -> Option<(ScanState, usize)> {
    let c = chars[i];
    if c == 'r' || c == 'R' {
        if has_prefix(chars, i + 1, "'''") {
            return Some((ScanState::RawTripleSingle, 4));
        }
        if has_prefix(chars, i + 1, "\"\"\"") {
            return Some((ScanState::RawTripleDouble, 4));
        }
        if chars.get(i + 1) == Some(&'\'') {
            return Some((ScanState::RawSingle, 2));
        }
        if chars.get(i + 1) == Some(&'"') {
            return Some((ScanState::RawDouble, 2));
        }
        return None;
    }
    if has_prefix(chars, i, "'''") {
        return Some((ScanState::TripleSingle, 3));
    }
    if has_prefix(chars, i, "\"\"\"") {
        return Some((ScanState::TripleDouble, 3));
    }
    if c == '\'' {
        return Some((ScanState::SingleQuote, 1));
    }
    if c == '"' {
        return Some((ScanState::DoubleQuote, 1));
    }
    None
}

/// Advance one step inside a string or comment. Returns the next state and
/// position. Backslash escapes are honored only in the non-raw single and
/// double quoted forms; triple-quoted strings close only on the full triple
/// sequence.
pub(crate) fn step_inside(state: ScanState, chars: &[char], i: usize) -> (ScanState, usize) {
    let c = chars[i];
    match state {
        ScanState::SingleQuote | ScanState::DoubleQuote => {
            if c == '\\' {
                return (state, i + 2);
            }
            let close = if state == ScanState::SingleQuote {
                '\''
            } else {
                '"'
            };
            if c == close {
                (ScanState::Normal, i + 1)
            } else {
                (state, i + 1)
            }
        }
        ScanState::TripleSingle | ScanState::RawTripleSingle => {
            if has_prefix(chars, i, "'''") {
                (ScanState::Normal, i + 3)
            } else {
                (state, i + 1)
            }
        }
        ScanState::TripleDouble | ScanState::RawTripleDouble => {
            if has_prefix(chars, i, "\"\"\"") {
                (ScanState::Normal, i + 3)
            } else {
                (state, i + 1)
            }
        }
        ScanState::RawSingle => {
            if c == '\'' {
                (ScanState::Normal, i + 1)
            } else {
                (state, i + 1)
            }
        }
        ScanState::RawDouble => {
            if c == '"' {
                (ScanState::Normal, i + 1)
            } else {
                (state, i + 1)
            }
        }
        ScanState::LineCommentDash | ScanState::LineCommentHash => {
            if c == '\n' {
                (ScanState::Normal, i + 1)
            } else {
                (state, i + 1)
            }
        }
        ScanState::BlockComment => {
            if has_prefix(chars, i, "*/") {
                (ScanState::Normal, i + 2)
            } else {
                (state, i + 1)
            }
        }
        ScanState::Normal => (state, i + 1),
    }
}

/// If a comment opens at `chars[i..]`, return its state and opener length.
pub(crate) fn comment_start(chars: &[char], i: usize) -> Option<(ScanState, usize)> {
    if has_prefix(chars, i, "--") {
        return Some((ScanState::LineCommentDash, 2));
    }
    if chars.get(i) == Some(&'#') {
        return Some((ScanState::LineCommentHash, 1));
    }
    if has_prefix(chars, i, "/*") {
        return Some((ScanState::BlockComment, 2));
    }
    None
}
