//! Data types shared by the helpers.
//!
//! - [`Location`], [`HostContext`] - Injected replacements for browser globals
//! - [`QueryMap`], [`QueryValue`] - Parsed query strings
//! - [`OsEnv`] - Platform descriptor derived from a user agent

mod host;
mod os;
mod query;

pub use host::{HostContext, Location};
pub use os::OsEnv;
pub use query::{QueryMap, QueryValue};
