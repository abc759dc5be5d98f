//! Character-level scan for power tokens in license spec text.
//!
//! Spec text separates tokens both with real control characters and with the
//! literal two-character escapes `\n` / `\t` that the lookup API returns
//! verbatim; the delimiter helpers here accept both forms.

use super::units::unit_multiplier;

/// A `number [km]?W` occurrence with its byte span in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PowerToken {
    pub start: usize,
    pub end: usize,
    pub watts: f64,
}

/// All power tokens in `text`, in document order.
pub(crate) fn power_tokens(text: &str) -> Vec<PowerToken> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        let Some(c) = rest.chars().next() else { break };
        if !c.is_ascii_digit() {
            pos += c.len_utf8();
            continue;
        }
        let number_len = scan_decimal(rest);
        // whitespace is allowed between the number and its unit
        let mut unit_at = number_len;
        for ws in rest[number_len..].chars() {
            if ws.is_whitespace() {
                unit_at += ws.len_utf8();
            } else {
                break;
            }
        }
        match scan_unit(&rest[unit_at..]) {
            Some(unit_len) => {
                let value: f64 = rest[..number_len].parse().unwrap_or(0.0);
                let unit = &rest[unit_at..unit_at + unit_len];
                tokens.push(PowerToken {
                    start: pos,
                    end: pos + unit_at + unit_len,
                    watts: value * unit_multiplier(unit),
                });
                pos += unit_at + unit_len;
            }
            None => pos += number_len,
        }
    }
    tokens
}

/// Ordered sequence of canonical watt values in `fragment`, left to right.
/// Empty when the fragment defines no power value.
pub fn extract_watts(fragment: &str) -> Vec<f64> {
    power_tokens(fragment).iter().map(|t| t.watts).collect()
}

/// Byte length of a leading `\d+(\.\d+)?` decimal literal, 0 when absent.
pub(crate) fn scan_decimal(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i > 0
        && i < bytes.len()
        && bytes[i] == b'.'
        && bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit())
    {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    i
}

fn scan_unit(s: &str) -> Option<usize> {
    if s.starts_with("kW") || s.starts_with("mW") {
        Some(2)
    } else if s.starts_with('W') {
        Some(1)
    } else {
        None
    }
}

/// Byte length of the leading run of delimiter content: whitespace characters
/// and literal `\n` / `\t` escape pairs.
pub(crate) fn leading_delimiters(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    loop {
        let Some(c) = s[i..].chars().next() else { return i };
        if c.is_whitespace() {
            i += c.len_utf8();
        } else if c == '\\' && matches!(bytes.get(i + 1), Some(b'n') | Some(b't')) {
            i += 2;
        } else {
            return i;
        }
    }
}

/// True when `s` consists of delimiter content only.
pub(crate) fn delimiters_only(s: &str) -> bool {
    leading_delimiters(s) == s.len()
}
