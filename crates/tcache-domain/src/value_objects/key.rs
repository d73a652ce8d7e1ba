//! Cache key value object
//!
//! A key is `prefix + tenant + "_" + md5(uri)` rendered as lowercase hex.
//! MD5 is stable across platforms and process restarts, so an entry stored
//! by one cache instance stays addressable by the next.

use crate::constants::KEY_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters with special meaning in glob-style key patterns
const GLOB_METACHARACTERS: [char; 4] = ['*', '?', '[', ']'];

/// Length of a hex-encoded MD5 digest
pub const DIGEST_HEX_LEN: usize = 32;

/// Glob character class matching one lowercase hex digit
const HEX_DIGIT_CLASS: &str = "[0-9a-f]";

/// A derived, namespaced storage key
///
/// # Example
///
/// ```
/// use tcache_domain::value_objects::CacheKey;
///
/// let key = CacheKey::derive("th_", "acme", "/users/1");
/// assert!(key.as_str().starts_with("th_acme_"));
/// assert_eq!(key.as_str().len(), "th_acme_".len() + 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a tenant's resource under the given prefix
    pub fn derive(prefix: &str, tenant: &str, uri: &str) -> Self {
        Self(format!(
            "{}{}{}",
            tenant_namespace(prefix, tenant),
            KEY_SEPARATOR,
            resource_digest(uri)
        ))
    }

    /// Wrap an already derived key verbatim
    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of this key's entry for the given extension
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.0
    }
}

/// Hex-encoded MD5 digest of a resource identifier
pub fn resource_digest(uri: &str) -> String {
    format!("{:x}", md5::compute(uri.as_bytes()))
}

/// Literal start shared by every key of a tenant, including the separator
pub fn tenant_key_stem(prefix: &str, tenant: &str) -> String {
    format!("{}{}", tenant_namespace(prefix, tenant), KEY_SEPARATOR)
}

/// Whether `key` was derived for `tenant` under `prefix`
///
/// The stem must be followed by exactly one digest. Tenant `a` therefore
/// does not own the keys of tenant `a_b`, which share its stem.
pub fn is_tenant_key(key: &str, prefix: &str, tenant: &str) -> bool {
    key.strip_prefix(&tenant_key_stem(prefix, tenant))
        .is_some_and(is_digest)
}

/// Glob pattern matching every key of a tenant and nothing else
///
/// Metacharacters inside the prefix or tenant handle are escaped, so a
/// handle such as `a*` only matches its own keys. The digest part is spelled
/// out as hex classes so a longer tenant handle sharing the stem never
/// matches.
pub fn tenant_key_pattern(prefix: &str, tenant: &str) -> String {
    format!(
        "{}{}",
        escape_glob(&tenant_key_stem(prefix, tenant)),
        HEX_DIGIT_CLASS.repeat(DIGEST_HEX_LEN)
    )
}

fn is_digest(text: &str) -> bool {
    text.len() == DIGEST_HEX_LEN
        && text
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

fn tenant_namespace(prefix: &str, tenant: &str) -> String {
    format!("{prefix}{tenant}")
}

fn escape_glob(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len());
    for c in literal.chars() {
        if c == '\\' || GLOB_METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
