//! Query-string parsing.
//!
//! Parses `a=1&b=2&a=3` style strings into a [`QueryMap`]. Repeated keys
//! collect their values into a list (`?user=tom&user=jerry` ->
//! `{user: ["tom", "jerry"]}`).

use std::borrow::Cow;

use crate::core::error::DecodeError;
use crate::models::{Location, QueryMap};
use crate::utils::text::trim_js;

/// Parse `query_string`, or the page location when it is empty.
///
/// With an empty `query_string` the input becomes `location.search` joined by
/// `&` with the query embedded in `location.hash` (text after its `?`).
///
/// The first malformed percent-escape aborts the parse with a
/// [`DecodeError`].
pub fn parse_query(query_string: &str, location: &Location) -> Result<QueryMap, DecodeError> {
    let query: Cow<'_, str> = if query_string.is_empty() {
        match location.hash_query() {
            Some(hash_query) => Cow::Owned(format!("{}&{}", location.search, hash_query)),
            None => Cow::Borrowed(location.search.as_str()),
        }
    } else {
        Cow::Borrowed(query_string)
    };

    parse_query_str(&query)
}

/// Parse an explicit query string with no location fallback.
pub fn parse_query_str(query: &str) -> Result<QueryMap, DecodeError> {
    let query = strip_leading_delimiter(trim_js(query));

    let mut map = QueryMap::new();
    if query.is_empty() {
        return Ok(map);
    }

    for param in query.split('&') {
        let param = param.replace('+', " ");
        let (raw_key, raw_value) = match param.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (param.as_str(), None),
        };

        let key = decode_component(raw_key)?;
        let value = raw_value.map(decode_component).transpose()?;
        map.append(key, value);
    }

    tracing::debug!(keys = map.len(), "parsed query string");
    Ok(map)
}

/// Drop one leading `?`, `#` or `&`.
fn strip_leading_delimiter(query: &str) -> &str {
    query
        .strip_prefix(['?', '#', '&'])
        .unwrap_or(query)
}

/// Percent-decode one key or value the way `decodeURIComponent` does.
///
/// Every `%` must start a two-digit hex escape and the decoded bytes must be
/// UTF-8.
pub fn decode_component(raw: &str) -> Result<String, DecodeError> {
    let bytes = raw.as_bytes();
    for (offset, _) in raw.match_indices('%') {
        let well_formed = bytes
            .get(offset + 1..offset + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(DecodeError::MalformedEscape {
                input: raw.to_string(),
                offset,
            });
        }
    }

    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .map_err(|_| DecodeError::InvalidUtf8 {
            input: raw.to_string(),
        })
}
