//! Integer literal forms accepted by `consume_int32`

/// Parse `text` as a 32-bit integer.
///
/// Forms are tried in order: the `max` sentinel (only when a ceiling is
/// given), `0x`/`-0x` hexadecimal of up to eight digits read as a 32-bit
/// pattern, then signed decimal with an optional exponent.
pub fn parse_int32(text: &str, max: Option<i32>) -> Option<i32> {
    if text == "max" {
        if let Some(ceiling) = max {
            return Some(ceiling);
        }
    }

    parse_hex(text).or_else(|| parse_decimal(text))
}

fn parse_hex(text: &str) -> Option<i32> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let digits = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))?;

    if digits.is_empty() || digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let value = u32::from_str_radix(digits, 16).ok()? as i32;
    Some(if negative { value.wrapping_neg() } else { value })
}

fn parse_decimal(text: &str) -> Option<i32> {
    let (negative, rest) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match rest.find(|c: char| c == 'e' || c == 'E') {
        Some(at) => (&rest[..at], Some(&rest[at + 1..])),
        None => (rest, None),
    };

    let mut value = digits_value(mantissa)?;

    if let Some(exponent) = exponent {
        let (shrink, digits) = match exponent.as_bytes().first()? {
            b'-' => (true, &exponent[1..]),
            b'+' => (false, &exponent[1..]),
            _ => (false, exponent),
        };
        let power = digits_value(digits)?;

        if value != 0 {
            let scale = u32::try_from(power)
                .ok()
                .and_then(|power| 10i128.checked_pow(power))?;
            value = if shrink {
                if value % scale != 0 {
                    return None;
                }
                value / scale
            } else {
                value.checked_mul(scale)?
            };
        }
    }

    i32::try_from(if negative { -value } else { value }).ok()
}

/// Value of a non-empty run of ASCII digits, `None` on anything else or overflow
fn digits_value(digits: &str) -> Option<i128> {
    if digits.is_empty() {
        return None;
    }

    digits.bytes().try_fold(0i128, |acc, b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(i128::from(b - b'0'))
    })
}
