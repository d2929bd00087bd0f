//! Text codecs for read/write, resolved from caller-supplied labels.

use encoding_rs::{Encoding, REPLACEMENT, UTF_16BE, UTF_16LE, UTF_8};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TextCodec {
    encoding: &'static Encoding,
}

impl TextCodec {
    /// Looks up a codec by WHATWG label (`utf-8`, `latin1`, `utf-16le`, `shift_jis`, ...).
    ///
    /// Underscore spellings (`utf_8`) are accepted as well. The WHATWG "replacement" encoding is
    /// rejected since it can neither decode nor encode text.
    pub(crate) fn for_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let encoding = Encoding::for_label(label.as_bytes())
            .or_else(|| Encoding::for_label(label.replace('_', "-").as_bytes()))?;
        if encoding == REPLACEMENT {
            return None;
        }
        Some(Self { encoding })
    }

    pub(crate) fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decodes the whole buffer, substituting U+FFFD for malformed sequences.
    ///
    /// A UTF-8 BOM is kept as content; a matching UTF-16 BOM is stripped.
    pub(crate) fn decode(&self, bytes: &[u8]) -> String {
        if self.encoding == UTF_16LE || self.encoding == UTF_16BE {
            return self.encoding.decode_with_bom_removal(bytes).0.into_owned();
        }
        self.encoding
            .decode_without_bom_handling(bytes)
            .0
            .into_owned()
    }

    /// Encodes `text`, failing on characters the target encoding cannot represent.
    pub(crate) fn encode(&self, text: &str) -> Result<Vec<u8>, String> {
        if self.encoding == UTF_8 {
            return Ok(text.as_bytes().to_vec());
        }
        if self.encoding == UTF_16LE {
            return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
        }
        if self.encoding == UTF_16BE {
            return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
        }

        let (bytes, _, had_unmappable) = self.encoding.encode(text);
        if had_unmappable {
            return Err(format!(
                "content has characters not representable in {}",
                self.encoding.name()
            ));
        }
        Ok(bytes.into_owned())
    }
}

/// Best-effort UTF-8 decode that drops invalid bytes instead of replacing them.
pub(crate) fn decode_utf8_lossy_dropping(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(err) => {
                let (valid, rest) = bytes.split_at(err.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let skip = err.error_len().unwrap_or(rest.len());
                bytes = &rest[skip..];
            }
        }
    }
}
