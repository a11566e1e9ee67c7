//! Backslash escape decoding for string literal bodies
//!
//! Octal (`\101`) and hex (`\x41`) escapes produce raw bytes that are appended
//! as-is. Every other character, escaped or not, is a code point and is
//! appended UTF-8 encoded, so `\351` is the single byte 0xE9 while a literal
//! `é` in the source becomes 0xC3 0xA9.

use super::EscapeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    Normal,
    /// Just read a `\`
    Escape,
    /// Inside `\ooo`, up to 3 digits
    Octal,
    /// Inside `\xhh`, up to 2 digits
    Hex,
}

struct EscapeDecoder<'a> {
    out: &'a mut Vec<u8>,
    state: DecodeState,
    value: u32,
    digits: u8,
}

impl<'a> EscapeDecoder<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self {
            out,
            state: DecodeState::Normal,
            value: 0,
            digits: 0,
        }
    }

    fn feed(&mut self, c: char) -> Result<(), EscapeError> {
        match self.state {
            DecodeState::Normal => self.normal(c),
            DecodeState::Escape => self.escape(c)?,
            DecodeState::Octal => self.octal(c),
            DecodeState::Hex => self.hex(c),
        }
        Ok(())
    }

    fn normal(&mut self, c: char) {
        if c == '\\' {
            self.state = DecodeState::Escape;
        } else {
            self.push_char(c);
        }
    }

    fn escape(&mut self, c: char) -> Result<(), EscapeError> {
        if let Some(digit) = c.to_digit(8) {
            self.value = digit;
            self.digits = 1;
            self.state = DecodeState::Octal;
        } else if c == 'x' {
            self.value = 0;
            self.digits = 0;
            self.state = DecodeState::Hex;
        } else if c == 'u' || c == 'U' {
            return Err(EscapeError::UnsupportedEscape(c));
        } else {
            self.push_char(unescape_char(c));
            self.state = DecodeState::Normal;
        }
        Ok(())
    }

    fn octal(&mut self, c: char) {
        match c.to_digit(8) {
            Some(digit) => {
                self.value = self.value * 8 + digit;
                self.digits += 1;
                if self.digits == 3 {
                    self.flush_accumulator();
                }
            }
            None => {
                self.flush_accumulator();
                self.normal(c);
            }
        }
    }

    fn hex(&mut self, c: char) {
        match c.to_digit(16) {
            Some(digit) => {
                self.value = self.value * 16 + digit;
                self.digits += 1;
                if self.digits == 2 {
                    self.flush_accumulator();
                }
            }
            None => {
                self.flush_accumulator();
                self.normal(c);
            }
        }
    }

    /// Emit the pending octal/hex value as one raw byte and return to Normal.
    /// A `\x` with no digits is kept as the literal text `\x`.
    fn flush_accumulator(&mut self) {
        if self.digits == 0 {
            if self.state == DecodeState::Hex {
                self.out.extend_from_slice(b"\\x");
            }
        } else {
            self.out.push(self.value as u8);
        }
        self.value = 0;
        self.digits = 0;
        self.state = DecodeState::Normal;
    }

    fn push_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    fn finish(mut self) {
        match self.state {
            DecodeState::Octal | DecodeState::Hex => self.flush_accumulator(),
            // a trailing lone backslash has nothing to escape
            DecodeState::Escape | DecodeState::Normal => {}
        }
    }
}

/// Character denoted by `\c` for a non-numeric escape
fn unescape_char(c: char) -> char {
    match c {
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'v' => '\u{0B}',
        't' => '\t',
        'n' => '\n',
        'r' => '\r',
        '\\' | '?' | '\'' | '"' => c,
        _ => '?',
    }
}

/// Decode one raw literal body and append the result to `out`.
///
/// Escape state does not carry over between calls, so adjacent literals are
/// decoded one at a time into the same buffer.
pub fn decode_into(raw: &str, out: &mut Vec<u8>) -> Result<(), EscapeError> {
    let mut decoder = EscapeDecoder::new(out);
    for c in raw.chars() {
        decoder.feed(c)?;
    }
    decoder.finish();
    Ok(())
}

/// Decode a single literal body into a fresh buffer.
pub fn decode(raw: &str) -> Result<Vec<u8>, EscapeError> {
    let mut out = Vec::with_capacity(raw.len());
    decode_into(raw, &mut out)?;
    Ok(out)
}
