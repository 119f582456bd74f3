//! Integration tests for the public helper surface.
//!
//! These exercise the crate the way a consumer would: through the root
//! re-exports, with an explicit host context instead of browser globals.

use best_utils::{
    BestUtils, DecodeError, HostContext, Location, OsEnv, QueryValue, capitalization,
    escape_html, filter_empty_params, format_money, is_id_card_new, is_license_plate_number_with,
    os_type, parse_query, parse_query_str, random_num, sleep,
};
use serde_json::{Value, json};
use std::time::{Duration, Instant};

const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8)";

#[test]
fn test_query_pairs_and_repeats() {
    let map = parse_query_str("k1=v1&k2=v2").unwrap();
    assert_eq!(map.get_first("k1"), Some("v1"));
    assert_eq!(map.get_first("k2"), Some("v2"));

    let map = parse_query_str("k=a&k=b&k=c").unwrap();
    assert_eq!(
        serde_json::to_value(&map).unwrap(),
        json!({ "k": ["a", "b", "c"] })
    );
}

#[test]
fn test_empty_query_without_location_is_empty() {
    assert!(parse_query("", &Location::default()).unwrap().is_empty());
}

#[test]
fn test_decode_errors_propagate() {
    let err = parse_query("a=%E0%A4%A", &Location::default()).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedEscape { .. }));
}

#[test]
fn test_parsed_query_feeds_the_empty_filter() {
    let map = parse_query_str("a=&b=null&c&d=x").unwrap();
    let filtered = filter_empty_params(&map.to_value());
    assert_eq!(Value::Object(filtered), json!({ "d": "x" }));
}

#[test]
fn test_filter_empty_params_example() {
    let params = json!({ "a": "", "b": "null", "c": null, "d": "x", "e": 0 });
    let Value::Object(params) = params else {
        unreachable!()
    };
    assert_eq!(
        Value::Object(filter_empty_params(&params)),
        json!({ "d": "x", "e": 0 })
    );
}

#[test]
fn test_string_helpers() {
    assert_eq!(capitalization("hello"), "Hello");
    assert_eq!(capitalization(""), "");
    assert_eq!(
        escape_html(r#"<a href="x">'s</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&#39;s&lt;/a&gt;"
    );
}

#[test]
fn test_money() {
    assert_eq!(format_money(1234567.5, 2).unwrap(), "1,234,567.50");
    assert_eq!(format_money(999.0, 0).unwrap(), "999");
}

#[test]
fn test_validators() {
    assert!(is_id_card_new("110101199003070017"));
    assert!(!is_id_card_new("110101199013070017"));
    assert_eq!(is_license_plate_number_with("", |_| {}), None);
}

#[test]
fn test_random_num_bounds() {
    for _ in 0..1000 {
        let r = random_num(-3, 3);
        assert!((-3..=3).contains(&r));
    }
}

#[test]
fn test_os_type() {
    assert!(os_type("IOS", IPHONE_UA));
    assert!(!os_type("IOS", ANDROID_UA));
}

#[test]
fn test_bundle_snapshot_is_fixed_at_construction() {
    let mut context = HostContext::new(Location::new("?tab=1", ""), ANDROID_UA);
    let utils = BestUtils::new(context.clone()).unwrap();

    // Changing the host afterwards does not touch the snapshot.
    context.location.search = "?tab=2".into();
    context.user_agent = IPHONE_UA.into();

    assert_eq!(utils.query.get("tab"), Some(&QueryValue::from("1")));
    assert_eq!(
        utils.os_env,
        OsEnv {
            ios: false,
            android: true,
            we_chat: false,
        }
    );
}

#[tokio::test]
async fn test_sleep_resolves_after_delay() {
    let start = Instant::now();
    sleep(50).await;
    assert!(start.elapsed() >= Duration::from_millis(50));
}
