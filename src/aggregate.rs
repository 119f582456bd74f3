//! The pre-composed helper bundle.
//!
//! [`BestUtils`] exposes a curated subset of the library plus two values
//! computed once from the host: the page's parsed query and its platform
//! descriptor. Both are snapshots taken at construction and are not
//! refreshed if the location or user agent changes later.

use std::sync::OnceLock;

use serde_json::{Map, Value};

use crate::core::error::{DecodeError, ScriptLoadError};
use crate::core::{env, params, query, validate};
use crate::models::{HostContext, OsEnv, QueryMap};
use crate::utils::{script, text, timer};

/// Helper bundle with eagerly evaluated `query` and `os_env`.
#[derive(Clone, Debug, PartialEq)]
pub struct BestUtils {
    /// Query parsed from the location at construction time.
    pub query: QueryMap,
    /// Platform flags evaluated at construction time.
    pub os_env: OsEnv,
    context: HostContext,
}

impl BestUtils {
    /// Build the bundle, parsing the location and user agent right away.
    pub fn new(context: HostContext) -> Result<Self, DecodeError> {
        let query = query::parse_query("", &context.location)?;
        let os_env = env::os_env(&context.user_agent);
        tracing::debug!(query_keys = query.len(), ?os_env, "initialized helper bundle");

        Ok(Self {
            query,
            os_env,
            context,
        })
    }

    /// Host inputs the snapshot was taken from.
    pub fn context(&self) -> &HostContext {
        &self.context
    }

    pub fn capitalization(&self, value: &str) -> String {
        text::capitalization(value)
    }

    /// Parse `query_string`, or the captured location when it is empty.
    pub fn parse_query(&self, query_string: &str) -> Result<QueryMap, DecodeError> {
        query::parse_query(query_string, &self.context.location)
    }

    pub async fn load_api(&self, src: &str) -> Result<(), ScriptLoadError> {
        script::load_api(src).await
    }

    pub fn filter_empty_params(&self, input: &Map<String, Value>) -> Map<String, Value> {
        params::filter_empty_params(input)
    }

    /// The 18-digit resident ID check.
    pub fn is_chinese_id_card_number(&self, value: &str) -> bool {
        validate::is_id_card_new(value)
    }

    pub fn is_mobile_number(&self, value: impl std::fmt::Display) -> bool {
        validate::is_mobile_number(value)
    }

    pub async fn sleep(&self, ms: u32) {
        timer::sleep(ms).await
    }
}

static DEFAULTS: OnceLock<Result<BestUtils, DecodeError>> = OnceLock::new();

/// Process-wide bundle built from [`HostContext::current`].
///
/// On wasm32 it is built when the module loads; on native targets, on first
/// access. The result, including a decode failure, is cached; later calls
/// never re-read the location or user agent.
pub fn defaults() -> Result<&'static BestUtils, DecodeError> {
    DEFAULTS
        .get_or_init(|| BestUtils::new(HostContext::current()))
        .as_ref()
        .map_err(Clone::clone)
}

/// Build the process-wide bundle now, logging a bad location.
pub(crate) fn init_defaults() {
    if let Err(err) = defaults() {
        tracing::warn!(error = %err, "could not parse the page query");
    }
}
