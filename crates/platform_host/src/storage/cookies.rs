//! Cookie-style persistent key/value contracts and adapters.
//!
//! Values crossing this port are plain (already decoded) strings. Wire encoding of the cookie
//! header is a concern of the concrete browser adapter.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::HostError;

/// `SameSite` policy attached to a written cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    /// Cookie is sent on top-level navigations and same-site requests.
    #[default]
    Lax,
    /// Cookie is sent on same-site requests only.
    Strict,
    /// Cookie is sent on every request (requires `Secure` in browsers).
    None,
}

impl SameSite {
    /// Returns the attribute value used in a `Set-Cookie` style string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lax => "Lax",
            Self::Strict => "Strict",
            Self::None => "None",
        }
    }
}

/// Attributes written alongside a cookie value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieAttributes {
    /// Cookie path scope.
    pub path: String,
    /// Lifetime in seconds.
    pub max_age_secs: u64,
    /// `SameSite` policy.
    pub same_site: SameSite,
}

impl CookieAttributes {
    /// Formats a full `name=value; Path=..; Max-Age=..; SameSite=..` assignment.
    ///
    /// `value` is written verbatim; callers encode it first when the host requires it.
    pub fn assignment(&self, name: &str, value: &str) -> String {
        format!(
            "{name}={value}; Path={}; Max-Age={}; SameSite={}",
            self.path,
            self.max_age_secs,
            self.same_site.as_str()
        )
    }
}

/// Looks up the raw value of `name` in a `document.cookie` style header (`a=1; b=2`).
///
/// Returns the first match, verbatim (no decoding).
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim_start().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Host service for cookie-like persistent values.
pub trait CookieStore {
    /// Loads the value stored under `name`.
    fn get(&self, name: &str) -> Result<Option<String>, HostError>;

    /// Stores `value` under `name` with the provided attributes, replacing any previous value.
    fn set(&self, name: &str, value: &str, attributes: &CookieAttributes)
        -> Result<(), HostError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op cookie store for non-document targets and server rendering.
pub struct NoopCookieStore;

impl CookieStore for NoopCookieStore {
    fn get(&self, _name: &str) -> Result<Option<String>, HostError> {
        Ok(None)
    }

    fn set(
        &self,
        _name: &str,
        _value: &str,
        _attributes: &CookieAttributes,
    ) -> Result<(), HostError> {
        Ok(())
    }
}

/// One stored entry in a [`MemoryCookieStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    /// Stored value.
    pub value: String,
    /// Attributes supplied by the last write, `None` for seeded entries.
    pub attributes: Option<CookieAttributes>,
}

#[derive(Debug, Clone, Default)]
/// In-memory cookie store keyed by name. Clones share storage.
pub struct MemoryCookieStore {
    inner: Rc<RefCell<MemoryCookies>>,
}

#[derive(Debug, Default)]
struct MemoryCookies {
    entries: BTreeMap<String, StoredCookie>,
    writes: Vec<String>,
}

impl MemoryCookieStore {
    /// Seeds a value without recording it as a write (simulates a pre-existing cookie).
    pub fn seed(&self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.borrow_mut().entries.insert(
            name.into(),
            StoredCookie {
                value: value.into(),
                attributes: None,
            },
        );
    }

    /// Returns the stored entry for `name`.
    pub fn entry(&self, name: &str) -> Option<StoredCookie> {
        self.inner.borrow().entries.get(name).cloned()
    }

    /// Returns the names written through [`CookieStore::set`], in write order.
    pub fn writes(&self) -> Vec<String> {
        self.inner.borrow().writes.clone()
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Result<Option<String>, HostError> {
        Ok(self
            .inner
            .borrow()
            .entries
            .get(name)
            .map(|entry| entry.value.clone()))
    }

    fn set(
        &self,
        name: &str,
        value: &str,
        attributes: &CookieAttributes,
    ) -> Result<(), HostError> {
        let mut inner = self.inner.borrow_mut();
        inner.entries.insert(
            name.to_string(),
            StoredCookie {
                value: value.to_string(),
                attributes: Some(attributes.clone()),
            },
        );
        inner.writes.push(name.to_string());
        Ok(())
    }
}
