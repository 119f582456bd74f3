//! Number formatting for money display.

use crate::config::money::{DEFAULT_DIGITS, GROUP_SEPARATOR, GROUP_SIZE, MAX_DIGITS};
use crate::core::error::FormatError;

/// Fractional digits of the exact decimal expansion of any finite `f64`.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Format `num` with `digits` fraction digits and comma-grouped thousands.
///
/// `1234567.5` with 2 digits gives `"1,234,567.50"`. Rounding follows
/// [`to_fixed`]. Fraction digits are never grouped.
pub fn format_money(num: f64, digits: usize) -> Result<String, FormatError> {
    let fixed = to_fixed(num, digits)?;
    Ok(group_thousands(&fixed))
}

/// [`format_money`] with two fraction digits.
pub fn format_money_default(num: f64) -> String {
    // DEFAULT_DIGITS is within range, so this cannot fail.
    format_money(num, DEFAULT_DIGITS).unwrap_or_default()
}

/// Render `num` in fixed-point notation with `digits` fraction digits.
///
/// Rounds the exact binary value to the nearest representable decimal,
/// taking the larger magnitude on a tie (`0.5` -> `"1"`, `2.5` -> `"3"`).
/// Values like `1.005` round down because their binary value sits just
/// below the midpoint. A negative input keeps its sign even when it rounds
/// to zero (`-0.001` -> `"-0.00"`). Magnitudes of `1e21` and above are
/// still written out in full digits, never in exponent form.
pub fn to_fixed(num: f64, digits: usize) -> Result<String, FormatError> {
    if digits > MAX_DIGITS {
        return Err(FormatError::DigitsOutOfRange(digits));
    }
    if num.is_nan() {
        return Ok("NaN".to_string());
    }
    if num.is_infinite() {
        let text = if num > 0.0 { "Infinity" } else { "-Infinity" };
        return Ok(text.to_string());
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, num.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|&next| next >= b'5');

    if round_up && !increment_decimal(&mut kept) {
        kept.insert(0, b'1');
    }

    let int_len = kept.len() - digits;
    let mut fixed = String::with_capacity(kept.len() + 2);
    if num < 0.0 {
        fixed.push('-');
    }
    fixed.extend(kept[..int_len].iter().map(|&b| char::from(b)));
    if digits > 0 {
        fixed.push('.');
        fixed.extend(kept[int_len..].iter().map(|&b| char::from(b)));
    }
    Ok(fixed)
}

/// Add one unit in the last place. Returns `false` on carry out of the
/// leading digit (`999` -> `000`).
fn increment_decimal(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

/// Insert separators between groups of three integer digits.
fn group_thousands(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = unsigned.split_at(unsigned.find('.').unwrap_or(unsigned.len()));

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return fixed.to_string();
    }

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / GROUP_SIZE);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % GROUP_SIZE == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped.push_str(frac_part);
    grouped
}
