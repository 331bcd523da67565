//! URI to configuration translation.
//!
//! An `rdp://` URI carries remote desktop settings as query pairs:
//!
//! ```text
//! rdp://full%20address=s:myhost:3389&username=s:alice
//! ```
//!
//! Pairs whose key is in the [`catalog`](crate::catalog) are kept under the
//! lower-cased key with their decoded value untouched. Everything else is
//! dropped without error.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::catalog;
use crate::config::scheme;
use crate::error::{Error, Result};

/// Decoded query pairs in source order. Keys may repeat.
pub type ParsedQuery = Vec<(String, String)>;

/// Recognized settings keyed by canonical (lower-case) name.
///
/// Entries are ordered by key, so serialization is byte-stable for a given
/// set of settings regardless of their order in the URI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RdpConfig {
    entries: BTreeMap<String, String>,
}

impl RdpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter decoded pairs through the catalog. Later duplicates win.
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        let mut config = Self::new();
        for (key, value) in pairs {
            let canonical = key.to_lowercase();
            if catalog::is_recognized(&canonical) {
                config.entries.insert(canonical, value.clone());
            } else {
                debug!(key = %key, "Dropping unrecognized parameter");
            }
        }
        config
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Render as configuration file text: one `key:value` line per entry.
    pub fn to_file_contents(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RdpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{key}:{value}")?;
        }
        Ok(())
    }
}

/// Split a query string into decoded `(key, value)` pairs.
///
/// Percent escapes are decoded in both key and value; `+` stays literal.
/// Empty segments and segments without `=` are skipped.
pub fn parse_query(query: &str) -> ParsedQuery {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| match segment.split_once('=') {
            Some((key, value)) => Some((decode(key), decode(value))),
            None => {
                debug!(segment, "Skipping malformed query segment");
                None
            }
        })
        .collect()
}

fn decode(raw: &str) -> String {
    let bytes = urlencoding::decode_binary(raw.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Translate an `rdp://` URI into the settings it carries.
pub fn translate(uri: &str) -> Result<RdpConfig> {
    let rest = uri
        .strip_prefix(scheme::PREFIX)
        .ok_or_else(|| Error::InvalidScheme {
            uri: uri.to_string(),
        })?;

    let rest = rest.strip_suffix('/').unwrap_or(rest);
    let query = rest.strip_prefix('?').unwrap_or(rest);

    let pairs = parse_query(query);
    let config = RdpConfig::from_query(&pairs);
    debug!(
        pairs = pairs.len(),
        recognized = config.len(),
        "Translated URI"
    );
    Ok(config)
}
