use glob::{MatchOptions, Pattern};

use crate::error::{FileOpsError, Result};

/// Shell-style file name matcher (`*`, `?`, `[...]`, `[!...]`).
#[derive(Debug, Clone)]
pub(crate) struct NamePattern {
    pattern: Pattern,
    options: MatchOptions,
}

impl NamePattern {
    pub(crate) fn new(raw: &str, case_sensitive: bool) -> Result<Self> {
        let pattern = Pattern::new(&normalize(raw)).map_err(|err| FileOpsError::InvalidPattern {
            pattern: raw.to_string(),
            message: err.msg.to_string(),
        })?;
        Ok(Self {
            pattern,
            options: MatchOptions {
                case_sensitive,
                require_literal_separator: false,
                require_literal_leading_dot: false,
            },
        })
    }

    pub(crate) fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches_with(file_name, self.options)
    }
}

/// Rewrites shell-glob forms the `glob` crate rejects: a run of `*` becomes one `*`, and a `[`
/// without a closing `]` is matched literally.
fn normalize(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut idx = 0;
    while idx < chars.len() {
        match chars[idx] {
            '*' => {
                out.push('*');
                while chars.get(idx + 1) == Some(&'*') {
                    idx += 1;
                }
            }
            '[' => match class_end(&chars, idx) {
                Some(end) => {
                    out.extend(&chars[idx..=end]);
                    idx = end;
                }
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        idx += 1;
    }
    out
}

/// Index of the `]` closing the class opened at `open`. A `]` right after `[` or `[!` is a
/// member, not the terminator.
fn class_end(chars: &[char], open: usize) -> Option<usize> {
    let mut idx = open + 1;
    if chars.get(idx) == Some(&'!') {
        idx += 1;
    }
    if chars.get(idx) == Some(&']') {
        idx += 1;
    }
    chars
        .get(idx..)?
        .iter()
        .position(|c| *c == ']')
        .map(|pos| idx + pos)
}
