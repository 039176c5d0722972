//! Literal grammar matching.
//!
//! Priority order: `True`, `False`, `None`, integer, float, quoted string,
//! then opaque. Matching is exact; surrounding whitespace is not trimmed.

use super::value::NormalizedValue;

/// Normalize one raw argument or option text.
pub fn normalize_value(raw: &str) -> NormalizedValue {
    match raw {
        "True" => return NormalizedValue::Bool(true),
        "False" => return NormalizedValue::Bool(false),
        "None" => return NormalizedValue::Null,
        _ => {}
    }
    if let Some(i) = parse_int(raw) {
        return NormalizedValue::Int(i);
    }
    if let Some(f) = parse_float(raw) {
        return NormalizedValue::Float(f);
    }
    if let Some(s) = unquote(raw) {
        return NormalizedValue::Str(s.to_string());
    }
    NormalizedValue::Opaque(raw.to_string())
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

/// Digits of `radix`, single underscores allowed between digits.
fn is_digit_part(text: &str, radix: u32) -> bool {
    if text.is_empty() || text.starts_with('_') || text.ends_with('_') || text.contains("__") {
        return false;
    }
    text.chars().all(|c| c == '_' || c.is_digit(radix))
}

fn strip_radix_prefix(body: &str) -> Option<(u32, &str)> {
    let (prefix, rest) = body.split_at_checked(2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    // `0x_ff` is a valid literal.
    Some((radix, rest.strip_prefix('_').unwrap_or(rest)))
}

fn parse_int(text: &str) -> Option<i64> {
    let (negative, body) = split_sign(text);
    let (radix, digits) = strip_radix_prefix(body).unwrap_or((10, body));
    if !is_digit_part(digits, radix) {
        return None;
    }
    // Decimal literals other than zero cannot have leading zeros.
    if radix == 10 && digits.starts_with('0') && digits.chars().any(|c| c != '0' && c != '_') {
        return None;
    }
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    let magnitude = i128::from_str_radix(&cleaned, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

fn parse_float(text: &str) -> Option<f64> {
    let (_, body) = split_sign(text);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    if let Some(exp) = exponent {
        let (_, exp_digits) = split_sign(exp);
        if !is_digit_part(exp_digits, 10) {
            return None;
        }
    }

    match mantissa.split_once('.') {
        Some((int_part, frac_part)) => {
            if int_part.is_empty() && frac_part.is_empty() {
                return None;
            }
            let int_ok = int_part.is_empty() || is_digit_part(int_part, 10);
            let frac_ok = frac_part.is_empty() || is_digit_part(frac_part, 10);
            if !int_ok || !frac_ok {
                return None;
            }
        }
        None => {
            // Without a dot an exponent is required, or it is an integer.
            if exponent.is_none() || !is_digit_part(mantissa, 10) {
                return None;
            }
        }
    }

    // Out-of-range literals (`1e400`) stay opaque, like integers past i64.
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    cleaned.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Inner text of a string wrapped in one matching pair of quotes. The inner
/// text may not contain an unescaped copy of the quote character.
fn unquote(text: &str) -> Option<&str> {
    let quote = text.chars().next()?;
    if quote != '\'' && quote != '"' {
        return None;
    }
    if text.len() < 2 || !text.ends_with(quote) {
        return None;
    }
    let inner = &text[1..text.len() - 1];

    let mut escaped = false;
    for c in inner.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return None;
        }
    }
    // A trailing backslash escapes the closing quote.
    if escaped {
        return None;
    }
    Some(inner)
}
