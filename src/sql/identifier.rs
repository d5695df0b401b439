//! Dot-separated identifier scanning.
//!
//! Table names arrive in many spellings: `proj.ds.t`, `` `proj.ds.t` ``,
//! `` `proj`.`ds`.`t` ``, or split across whitespace and comments. The scanner
//! normalizes all of them into a flat list of parts.

use crate::error::{GuardError, GuardResult};

use super::scan::{ScanState, comment_start, has_prefix};

/// Skip past whitespace and any run of comments starting at `i`, returning
/// the first position that is neither.
pub(crate) fn skip_whitespace_and_comments(chars: &[char], mut i: usize) -> usize {
    loop {
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        match comment_start(chars, i) {
            Some((ScanState::BlockComment, skip)) => {
                i += skip;
                while i < chars.len() && !has_prefix(chars, i, "*/") {
                    i += 1;
                }
                i = chars.len().min(i + 2);
            }
            Some((_, skip)) => {
                i += skip;
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            None => return i,
        }
    }
}

/// Scan a sequence of dot-separated identifier parts starting at `chars[0]`.
///
/// Returns the parts and the number of code points consumed. Backtick-quoted
/// parts may themselves contain dots; those split into separate parts, so
/// `` `proj.ds.t` `` and `proj.ds.t` produce the same sequence. Unquoted
/// parts allow letters, digits, `_`, and `-` (projects may carry dashes).
pub(crate) fn parse_identifier_sequence(chars: &[char]) -> GuardResult<(Vec<String>, usize)> {
    let mut parts: Vec<String> = Vec::new();
    let mut i = 0usize;
    loop {
        i = skip_whitespace_and_comments(chars, i);
        if i >= chars.len() {
            break;
        }

        let part: String;
        if chars[i] == '`' {
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '`' {
                end += 1;
            }
            if end >= chars.len() {
                return Err(GuardError::UnclosedBacktick);
            }
            part = chars[i + 1..end].iter().collect();
            i = end + 1;
        } else if chars[i].is_alphabetic() || chars[i] == '_' {
            let start = i;
            while i < chars.len()
                && (chars[i].is_alphanumeric() || chars[i] == '_' || chars[i] == '-')
            {
                i += 1;
            }
            part = chars[start..i].iter().collect();
        } else {
            break;
        }

        parts.extend(part.split('.').map(str::to_owned));

        i = skip_whitespace_and_comments(chars, i);
        if i >= chars.len() || chars[i] != '.' {
            break;
        }
        i += 1;
    }
    Ok((parts, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts_of(s: &str) -> Vec<String> {
        let chars: Vec<char> = s.chars().collect();
        parse_identifier_sequence(&chars).unwrap().0
    }

    #[test]
    fn test_plain_three_part() {
        assert_eq!(parts_of("proj.ds.t"), ["proj", "ds", "t"]);
    }

    #[test]
    fn test_backticked_whole_reference_splits_on_dots() {
        assert_eq!(parts_of("`proj.ds.t`"), ["proj", "ds", "t"]);
    }

    #[test]
    fn test_backticked_parts() {
        assert_eq!(parts_of("`proj`.`ds`.`t`"), ["proj", "ds", "t"]);
    }

    #[test]
    fn test_dashes_in_unquoted_parts() {
        assert_eq!(parts_of("my-proj.ds.t"), ["my-proj", "ds", "t"]);
    }

    #[test]
    fn test_whitespace_around_dots() {
        assert_eq!(parts_of("proj . ds\n. t"), ["proj", "ds", "t"]);
    }

    #[test]
    fn test_comments_between_parts() {
        assert_eq!(
            parts_of("proj/* a */. -- b\nds.#c\nt"),
            ["proj", "ds", "t"]
        );
    }

    #[test]
    fn test_stops_at_non_identifier() {
        let chars: Vec<char> = "a.b, c".chars().collect();
        let (parts, consumed) = parse_identifier_sequence(&chars).unwrap();
        assert_eq!(parts, ["a", "b"]);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_unclosed_backtick() {
        let chars: Vec<char> = "`proj.ds.t".chars().collect();
        assert_eq!(
            parse_identifier_sequence(&chars),
            Err(GuardError::UnclosedBacktick)
        );
    }

    #[test]
    fn test_trailing_dot_without_part() {
        let chars: Vec<char> = "a.1".chars().collect();
        let (parts, consumed) = parse_identifier_sequence(&chars).unwrap();
        assert_eq!(parts, ["a"]);
        assert_eq!(consumed, 2);
    }
}
