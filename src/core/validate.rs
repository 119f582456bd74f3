//! Format validators for Chinese ID numbers, license plates and mobile
//! numbers.
//!
//! These are shape checks only. None of them verify checksums or look the
//! value up anywhere.

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::PLATE_TRACE_TARGET;

/// 18-digit resident ID: region, birth date (1800-2099), sequence, check char.
static ID_CARD_NEW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{6}(18|19|20)[0-9]{2}(0[0-9]|10|11|12)([0-2][0-9]|30|31)[0-9]{3}[0-9Xx]$")
        .expect("18-digit ID pattern is valid")
});

/// 15-digit first-generation ID: region, two-digit year, date, sequence.
static ID_CARD_LEGACY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{6}[0-9]{2}(0[0-9]|10|11|12)([0-2][0-9]|30|31)[0-9]{3}$")
        .expect("15-digit ID pattern is valid")
});

// The `^` binds to the new-energy branch and the `$` to the standard branch
// only, so the first matches as a prefix and the second as a suffix.
static LICENSE_PLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:[京津沪渝冀豫云辽黑湘皖鲁新苏浙赣鄂桂甘晋蒙陕吉闽贵粤青藏川宁琼使领 A-Z]{1}[A-HJ-NP-Z]{1}",
        r"(?:(?:[0-9]{5}[DF])|(?:[DF](?:[A-HJ-NP-Z0-9])[0-9]{4})))",
        r"|",
        r"(?:[京津沪渝冀豫云辽黑湘皖鲁新苏浙赣鄂桂甘晋蒙陕吉闽贵粤青藏川宁琼使领 A-Z]{1}[A-Z]{1}",
        r"[A-HJ-NP-Z0-9]{4}[A-HJ-NP-Z0-9 挂学警港澳]{1})$",
    ))
    .expect("license plate pattern is valid")
});

// Matches `1`, a digit 3-9, any digit, then a literal `9`. Only the prefix is
// checked.
static MOBILE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[3-9][0-9]9").expect("mobile pattern is valid"));

/// Check an 18-digit resident ID number.
///
/// Month `00` and day `00` pass; day ranges are not checked per month.
pub fn is_id_card_new(value: &str) -> bool {
    ID_CARD_NEW.is_match(value)
}

/// Check a 15-digit first-generation resident ID number.
pub fn is_id_card_legacy(value: &str) -> bool {
    ID_CARD_LEGACY.is_match(value)
}

/// Check a license plate, new-energy or standard.
///
/// Returns `None` for empty input, which is handed back unchecked. Every
/// call emits an info trace on the `best_utils::plate` target; use
/// [`is_license_plate_number_with`] to redirect or silence it.
pub fn is_license_plate_number(value: &str) -> Option<bool> {
    is_license_plate_number_with(value, |value| {
        tracing::info!(target: PLATE_TRACE_TARGET, "车牌号：{}", value);
    })
}

/// [`is_license_plate_number`] with a caller-supplied trace hook.
pub fn is_license_plate_number_with(value: &str, mut trace: impl FnMut(&str)) -> Option<bool> {
    trace(value);
    if value.is_empty() {
        return None;
    }
    Some(LICENSE_PLATE.is_match(&value.to_uppercase()))
}

/// Check the leading digits of a mobile number.
///
/// Accepts anything with a `Display` impl so numeric input works too.
pub fn is_mobile_number(value: impl Display) -> bool {
    MOBILE_NUMBER.is_match(&value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_plate(value: &str) -> Option<bool> {
        is_license_plate_number_with(value, |_| {})
    }

    #[test]
    fn test_id_card_new_valid() {
        assert!(is_id_card_new("110101199003070017"));
        assert!(is_id_card_new("44030418001231123X"));
        assert!(is_id_card_new("44030420991231123x"));
    }

    #[test]
    fn test_id_card_new_invalid() {
        // Month 13
        assert!(!is_id_card_new("110101199013070017"));
        // Day 32
        assert!(!is_id_card_new("110101199003320017"));
        // Century 17
        assert!(!is_id_card_new("110101179003070017"));
        // Wrong length
        assert!(!is_id_card_new("11010119900307001"));
        assert!(!is_id_card_new("1101011990030700171"));
        // Check char must be a digit or X
        assert!(!is_id_card_new("11010119900307001Y"));
        assert!(!is_id_card_new(""));
    }

    #[test]
    fn test_id_card_new_loose_date_parts() {
        // Shape-only: zero month/day and 31 in any month pass.
        assert!(is_id_card_new("110101199000000017"));
        assert!(is_id_card_new("110101199002310017"));
    }

    #[test]
    fn test_id_card_new_rejects_non_ascii_digits() {
        assert!(!is_id_card_new("١١٠١٠١199003070017"));
    }

    #[test]
    fn test_id_card_legacy() {
        assert!(is_id_card_legacy("110101900307001"));
        assert!(!is_id_card_legacy("110101901307001"));
        assert!(!is_id_card_legacy("110101199003070017"));
    }

    #[test]
    fn test_plate_standard() {
        assert_eq!(check_plate("京A12345"), Some(true));
        assert_eq!(check_plate("京a12345"), Some(true));
        assert_eq!(check_plate("京A1234挂"), Some(true));
        assert_eq!(check_plate("粤Z1234港"), Some(true));
    }

    #[test]
    fn test_plate_new_energy() {
        assert_eq!(check_plate("沪A12345D"), Some(true));
        assert_eq!(check_plate("粤BD12345"), Some(true));
        assert_eq!(check_plate("粤BFA1234"), Some(true));
    }

    #[test]
    fn test_plate_invalid() {
        assert_eq!(check_plate("京A1234"), Some(false));
        assert_eq!(check_plate("京AI2345"), Some(false));
        assert_eq!(check_plate("12345"), Some(false));
    }

    #[test]
    fn test_plate_branch_anchoring() {
        // New-energy branch only anchors at the start.
        assert_eq!(check_plate("京AD12345XYZ"), Some(true));
        // Standard branch only anchors at the end.
        assert_eq!(check_plate("garbage京A12345"), Some(true));
    }

    #[test]
    fn test_plate_empty_input_is_unchecked() {
        assert_eq!(check_plate(""), None);
    }

    #[test]
    fn test_plate_traces_every_call() {
        let mut seen = Vec::new();
        is_license_plate_number_with("京A12345", |v| seen.push(v.to_string()));
        is_license_plate_number_with("", |v| seen.push(v.to_string()));
        assert_eq!(seen, vec!["京A12345".to_string(), String::new()]);
    }

    #[test]
    fn test_plate_default_trace() {
        assert_eq!(is_license_plate_number("京A12345"), Some(true));
    }

    #[test]
    fn test_mobile_number_prefix() {
        assert!(is_mobile_number("13999999999"));
        assert!(is_mobile_number("1389"));
        assert!(is_mobile_number(13_891_234_567_u64));
        // Fourth digit must be 9.
        assert!(!is_mobile_number("13912345678"));
        assert!(!is_mobile_number("12999999999"));
        assert!(!is_mobile_number("139"));
        assert!(!is_mobile_number(""));
    }
}
