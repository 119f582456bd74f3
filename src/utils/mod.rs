//! Utility modules for text, numbers, and browser APIs.
//!
//! Provides:
//! - [`capitalization`], [`escape_html`] - String helpers
//! - [`format_money`] - Thousands-grouped fixed-point formatting
//! - [`random_num`] - Inclusive random integers
//! - [`load_api`] - Dynamic script loading
//! - [`sleep`] - Timer-backed delay

pub mod dom;
pub mod format;
pub mod random;
pub mod script;
pub mod text;
pub mod timer;

pub use format::{format_money, format_money_default, to_fixed};
pub use random::{random_num, random_num_with};
pub use script::{load_api, load_api_with, BrowserDocument, ScriptHost};
pub use text::{capitalization, escape_html, trim_js};
pub use timer::sleep;
