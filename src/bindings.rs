//! JavaScript exports.
//!
//! Mirrors the helpers under their camelCase names for use from a bundle.
//! Structured values cross the boundary as plain JS objects via
//! `serde-wasm-bindgen`; Rust errors surface as thrown `Error`s.

use serde::Serialize;
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;

use crate::core::{env, params, query, validate};
use crate::models::Location;
use crate::utils::{dom, format, random, script, text, timer};
use crate::{aggregate, config, telemetry};

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

fn current_user_agent() -> String {
    dom::user_agent().unwrap_or_default()
}

/// Module-load hook: installs logging and snapshots the page for
/// [`defaults`].
#[wasm_bindgen(start)]
pub fn start() {
    telemetry::init_tracing();
    aggregate::init_defaults();
}

#[wasm_bindgen(js_name = parseQuery)]
pub fn parse_query(query_string: Option<String>) -> Result<JsValue, JsError> {
    let parsed = query::parse_query(query_string.as_deref().unwrap_or(""), &Location::current())?;
    to_js(&parsed)
}

#[wasm_bindgen]
pub fn capitalization(value: &str) -> String {
    text::capitalization(value)
}

#[wasm_bindgen(js_name = loadApi)]
pub async fn load_api(src: String) -> Result<(), JsError> {
    script::load_api(&src).await?;
    Ok(())
}

#[wasm_bindgen(js_name = filterEmptyParams)]
pub fn filter_empty_params(input: JsValue) -> Result<JsValue, JsError> {
    let input: Map<String, Value> = serde_wasm_bindgen::from_value(input)?;
    to_js(&params::filter_empty_params(&input))
}

/// Returns the input itself when it is empty, otherwise a boolean.
#[wasm_bindgen(js_name = isLicensePlateNumber)]
pub fn is_license_plate_number(value: &str) -> JsValue {
    match validate::is_license_plate_number(value) {
        Some(valid) => JsValue::from_bool(valid),
        None => JsValue::from_str(value),
    }
}

#[wasm_bindgen(js_name = isIDCardNew)]
pub fn is_id_card_new(value: &str) -> bool {
    validate::is_id_card_new(value)
}

#[wasm_bindgen(js_name = formatMoney)]
pub fn format_money(num: f64, digits: Option<u32>) -> Result<String, JsError> {
    let digits = digits.map_or(config::money::DEFAULT_DIGITS, |d| d as usize);
    Ok(format::format_money(num, digits)?)
}

/// Bounds are truncated toward zero before use (`1.9` -> `1`); `NaN`
/// becomes `0` and out-of-range values saturate.
#[wasm_bindgen(js_name = randomNum)]
pub fn random_num(min: f64, max: f64) -> f64 {
    random::random_num(min as i64, max as i64) as f64
}

#[wasm_bindgen(js_name = escapeHTML)]
pub fn escape_html(value: &str) -> String {
    text::escape_html(value).into_owned()
}

#[wasm_bindgen(js_name = osType)]
pub fn os_type(name: &str) -> bool {
    env::os_type(name, &current_user_agent())
}

#[wasm_bindgen(js_name = isIOS)]
pub fn is_ios() -> bool {
    env::is_ios(&current_user_agent())
}

#[wasm_bindgen(js_name = isAndroid)]
pub fn is_android() -> bool {
    env::is_android(&current_user_agent())
}

#[wasm_bindgen(js_name = isWeChat)]
pub fn is_wechat() -> bool {
    env::is_wechat(&current_user_agent())
}

#[wasm_bindgen(js_name = osEnv)]
pub fn os_env() -> Result<JsValue, JsError> {
    to_js(&env::os_env(&current_user_agent()))
}

/// Accepts strings and numbers, matching `String(val)` coercion.
#[wasm_bindgen(js_name = isMobileNumber)]
pub fn is_mobile_number(value: JsValue) -> bool {
    let text = value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .unwrap_or_default();
    validate::is_mobile_number(text)
}

#[wasm_bindgen]
pub async fn sleep(msec: u32) {
    timer::sleep(msec).await;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DefaultsView<'a> {
    query: &'a crate::models::QueryMap,
    os_env: &'a crate::models::OsEnv,
}

/// The eagerly evaluated `query` and `osEnv` snapshot.
#[wasm_bindgen]
pub fn defaults() -> Result<JsValue, JsError> {
    let utils = aggregate::defaults()?;
    to_js(&DefaultsView {
        query: &utils.query,
        os_env: &utils.os_env,
    })
}
