//! Canonical escaped renderings of a decoded string buffer

use super::EscapeError;

/// Escape `b` into `out`: the named escapes for newline, carriage return,
/// tab, quotes and backslash, printable ASCII verbatim, anything else as
/// three octal digits.
fn push_escaped_byte(out: &mut String, b: u8) {
    match b {
        b'\n' => out.push_str("\\n"),
        b'\r' => out.push_str("\\r"),
        b'\t' => out.push_str("\\t"),
        b'\'' => out.push_str("\\'"),
        b'"' => out.push_str("\\\""),
        b'\\' => out.push_str("\\\\"),
        32..=126 => out.push(b as char),
        _ => out.push_str(&format!("\\{:03o}", b)),
    }
}

/// Byte-literal rendering: every byte outside printable ASCII is escaped.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        push_escaped_byte(&mut out, b);
    }
    out
}

/// Text rendering: ASCII is escaped like [`escape_bytes`], other characters
/// are kept as text.
///
/// Non-ASCII characters pass through unescaped rather than as `\ddd`: code
/// points above `0o777` do not fit in three octal digits.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            push_escaped_byte(&mut out, c as u8);
        } else {
            out.push(c);
        }
    }
    out
}

/// Decode `bytes` as UTF-8 and render it with [`escape_text`].
pub fn render_utf8(bytes: &[u8]) -> Result<String, EscapeError> {
    let text = std::str::from_utf8(bytes).map_err(|e| EscapeError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })?;
    Ok(escape_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::decoder::decode;
    use assert_matches::assert_matches;

    #[test]
    fn test_named_escapes() {
        assert_eq!(escape_bytes(b"a\nb\rc\td"), "a\\nb\\rc\\td");
        assert_eq!(escape_bytes(b"'\"\\"), "\\'\\\"\\\\");
    }

    #[test]
    fn test_non_printable_bytes_are_three_digit_octal() {
        for b in (0u8..32).chain(127..=255) {
            // Named escapes take precedence over the octal form
            if matches!(b, b'\n' | b'\r' | b'\t') {
                continue;
            }
            let rendered = escape_bytes(&[b]);
            assert_eq!(rendered.len(), 4, "byte {}", b);
            assert!(rendered.starts_with('\\'));
            assert_eq!(u8::from_str_radix(&rendered[1..], 8).unwrap(), b);
        }
    }

    #[test]
    fn test_printable_ascii_round_trips() {
        // Backslash and both quotes always render as named escapes, never verbatim
        let printable: String = (32u8..=126)
            .map(char::from)
            .filter(|c| !matches!(c, '\\' | '"' | '\''))
            .collect();

        let decoded = decode(&printable).unwrap();
        assert_eq!(escape_bytes(&decoded), printable);
        assert_eq!(render_utf8(&decoded).unwrap(), printable);
    }

    #[test]
    fn test_octal_escapes_render_as_ascii() {
        let decoded = decode(r"\101\102").unwrap();
        assert_eq!(decoded, vec![0x41, 0x42]);
        assert_eq!(escape_bytes(&decoded), "AB");
    }

    #[test]
    fn test_text_rendering_keeps_non_ascii() {
        assert_eq!(escape_text("caf\u{e9}\u{1}"), "caf\u{e9}\\001");
        assert_eq!(escape_bytes("\u{e9}".as_bytes()), "\\303\\251");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        assert_matches!(
            render_utf8(&[b'o', b'k', 0xFF]),
            Err(EscapeError::InvalidUtf8 { valid_up_to: 2 })
        );
    }
}
