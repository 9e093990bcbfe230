//! Cookie-header parsing for the request context.
//!
//! The jar is populated from a `Cookie`-header-shaped string (semicolon
//! delimited `name=value` pairs). Lookups percent-decode the stored value,
//! matching how browsers hand cookie values to scripts.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

/// A flat cookie store.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: HashMap<String, String>,
}

impl CookieJar {
    /// Creates an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `Cookie`-header-shaped string into a jar.
    ///
    /// Entries are semicolon delimited; whitespace around names and values
    /// is trimmed; malformed entries (no `=`, empty name) are skipped.
    pub fn parse(header: &str) -> Self {
        let mut jar = Self::new();

        for part in header.split(';') {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some((name, value)) = trimmed.split_once('=') {
                let name = name.trim();
                if !name.is_empty() {
                    jar.cookies
                        .insert(name.to_string(), value.trim().to_string());
                }
            }
        }

        jar
    }

    /// Inserts or replaces a cookie. The value is stored as given (encoded).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.cookies.insert(name.into(), value.into());
    }

    /// Returns the percent-decoded value of the named cookie.
    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies
            .get(name)
            .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
    }

    /// Returns the stored (still encoded) value of the named cookie.
    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// The number of cookies in the jar.
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Whether the jar is empty.
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}
