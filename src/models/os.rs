//! Operating system / app family descriptor.

use serde::Serialize;

/// Which platform families a user agent belongs to.
///
/// Each flag is computed independently, so more than one can be set
/// (WeChat on iPhone).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OsEnv {
    #[serde(rename = "iOS")]
    pub ios: bool,
    pub android: bool,
    #[serde(rename = "weChat")]
    pub we_chat: bool,
}
