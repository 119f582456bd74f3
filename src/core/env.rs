//! Platform detection from a user-agent string.
//!
//! Each [`OsKind`] has a fixed case-insensitive pattern. The checks are
//! independent, so the same user agent can match several kinds.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::os_patterns;
use crate::core::error::UnknownOsKind;
use crate::models::OsEnv;

static ANDROID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(os_patterns::ANDROID).expect("android pattern is valid"));
static IOS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(os_patterns::IOS).expect("ios pattern is valid"));
static WECHAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(os_patterns::WECHAT).expect("wechat pattern is valid"));

/// Platform families that can be detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OsKind {
    Android,
    /// iPad, iPhone or iPod.
    Ios,
    /// WeChat's embedded browser.
    WeChat,
}

impl OsKind {
    pub const ALL: [OsKind; 3] = [OsKind::Android, OsKind::Ios, OsKind::WeChat];

    /// Name accepted by [`os_type`] and `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Android => "Android",
            Self::Ios => "IOS",
            Self::WeChat => "WeChat",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Android => &*ANDROID,
            Self::Ios => &*IOS,
            Self::WeChat => &*WECHAT,
        }
    }

    pub fn matches(self, user_agent: &str) -> bool {
        self.pattern().is_match(user_agent)
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OsKind {
    type Err = UnknownOsKind;

    /// Names are exact and case-sensitive: `Android`, `IOS`, `WeChat`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownOsKind(name.to_string()))
    }
}

/// Test `user_agent` against the platform called `name`.
///
/// Unknown names never match.
pub fn os_type(name: &str, user_agent: &str) -> bool {
    name.parse::<OsKind>()
        .is_ok_and(|kind| kind.matches(user_agent))
}

pub fn is_ios(user_agent: &str) -> bool {
    OsKind::Ios.matches(user_agent)
}

pub fn is_android(user_agent: &str) -> bool {
    OsKind::Android.matches(user_agent)
}

pub fn is_wechat(user_agent: &str) -> bool {
    OsKind::WeChat.matches(user_agent)
}

/// Evaluate every platform flag for `user_agent` now.
pub fn os_env(user_agent: &str) -> OsEnv {
    OsEnv {
        ios: is_ios(user_agent),
        android: is_android(user_agent),
        we_chat: is_wechat(user_agent),
    }
}
