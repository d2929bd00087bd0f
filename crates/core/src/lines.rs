use std::io::{self, BufRead};

/// Number of lines under universal-newline rules (`\n`, `\r\n`, lone `\r`).
///
/// A trailing terminator does not open an extra line, so `"a\n"` has one line and `""` none.
pub(crate) fn count_lines(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut terminators = 0usize;
    let mut idx = 0usize;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\n' => terminators += 1,
            b'\r' => {
                terminators += 1;
                if bytes.get(idx + 1) == Some(&b'\n') {
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }

    match bytes.last() {
        None => 0,
        Some(b'\n' | b'\r') => terminators,
        Some(_) => terminators + 1,
    }
}

/// Streams raw lines from a reader, splitting on `\n`, `\r\n` and lone `\r`.
///
/// Terminators are not included in the yielded buffers.
pub(crate) struct UniversalLines<R> {
    reader: R,
    pending: Vec<Vec<u8>>,
    buf: Vec<u8>,
}

impl<R: BufRead> UniversalLines<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for UniversalLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop() {
            return Some(Ok(line));
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(err) => return Some(Err(err)),
        }

        let mut chunk = self.buf.as_slice();
        if let Some(stripped) = chunk.strip_suffix(b"\n") {
            chunk = stripped;
        }
        if let Some(stripped) = chunk.strip_suffix(b"\r") {
            chunk = stripped;
        }

        // Lone `\r` separators inside the chunk; stored reversed so `pop` yields in order.
        let mut parts: Vec<Vec<u8>> = chunk.split(|b| *b == b'\r').map(<[u8]>::to_vec).collect();
        parts.reverse();
        let first = parts.pop().unwrap_or_default();
        self.pending = parts;
        Some(Ok(first))
    }
}

/// Cuts `input` to at most `max_chars` characters (not bytes).
pub(crate) fn truncate_to_chars(input: &str, max_chars: usize) -> String {
    let mut cut_byte = input.len();
    for (seen, (idx, _)) in input.char_indices().enumerate() {
        if seen == max_chars {
            cut_byte = idx;
            break;
        }
    }
    input[..cut_byte].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect(input: &[u8]) -> Vec<Vec<u8>> {
        UniversalLines::new(input)
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn counts_lines_like_splitlines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("one"), 1);
        assert_eq!(count_lines("one\n"), 1);
        assert_eq!(count_lines("Hello, MCP!\nLine two."), 2);
        assert_eq!(count_lines("a\r\nb\rc\n"), 3);
        assert_eq!(count_lines("\n\n"), 2);
    }

    #[test]
    fn streams_universal_newlines() {
        assert_eq!(
            collect(b"a\nb\r\nc\rd"),
            vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec(), b"d".to_vec()]
        );
        assert_eq!(collect(b"x\r\r\n"), vec![b"x".to_vec(), Vec::new()]);
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_to_chars("héllo", 2), "hé");
        assert_eq!(truncate_to_chars("short", 100), "short");
        assert_eq!(truncate_to_chars("abc", 0), "");
    }
}
