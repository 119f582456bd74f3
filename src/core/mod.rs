//! Core helpers.
//!
//! This module provides:
//! - [`parse_query`] query-string parsing with location fallback
//! - [`filter_empty_params`] removal of blank request parameters
//! - [`validate`] ID number, license plate and mobile number checks
//! - [`env`] platform detection from a user agent

pub mod env;
pub mod error;
pub mod params;
pub mod query;
pub mod validate;

pub use env::{is_android, is_ios, is_wechat, os_env, os_type, OsKind};
pub use params::filter_empty_params;
pub use query::{parse_query, parse_query_str};
pub use validate::{
    is_id_card_legacy, is_id_card_new, is_license_plate_number, is_license_plate_number_with,
    is_mobile_number,
};
