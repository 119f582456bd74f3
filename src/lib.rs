//! Browser-oriented helpers: query parsing, empty-parameter filtering,
//! string and money formatting, ID / license plate / mobile validation,
//! user-agent sniffing, script loading and a delay.
//!
//! Browser globals are never read implicitly by the helpers themselves.
//! Location and user agent are passed in, either directly or through a
//! [`HostContext`]; [`HostContext::current`] snapshots them in a browser.
//!
//! [`BestUtils`] bundles a subset of the helpers with a query and platform
//! snapshot evaluated once at construction; [`defaults`] holds the
//! process-wide instance.

mod aggregate;
#[cfg(target_arch = "wasm32")]
mod bindings;
pub mod config;
pub mod core;
pub mod models;
pub mod telemetry;
pub mod utils;

pub use aggregate::{defaults, BestUtils};
pub use crate::core::error::{DecodeError, FormatError, ScriptLoadError, UnknownOsKind};
pub use crate::core::{
    filter_empty_params, is_android, is_id_card_legacy, is_id_card_new, is_ios,
    is_license_plate_number, is_license_plate_number_with, is_mobile_number, is_wechat, os_env,
    os_type, parse_query, parse_query_str, OsKind,
};
pub use models::{HostContext, Location, OsEnv, QueryMap, QueryValue};
pub use utils::{
    capitalization, escape_html, format_money, format_money_default, load_api, load_api_with,
    random_num, random_num_with, sleep, to_fixed, BrowserDocument, ScriptHost,
};
