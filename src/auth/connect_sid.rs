//! Opaque session token type.

use std::fmt;

/// The `connect.sid` session cookie used to authenticate against Scrapbox.
///
/// The raw value never appears in `Debug` or `Display` output. Call
/// [`ConnectSid::expose`] at the single point where the token is handed to
/// an HTTP client.
///
/// # Examples
///
/// ```
/// use sbc::auth::ConnectSid;
///
/// let sid = ConnectSid::new("s%3Aabcdef0123456789");
/// assert_eq!(sid.expose(), "s%3Aabcdef0123456789");
/// assert_eq!(sid.to_string(), "s%3A…");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectSid(String);

/// Tokens at or below this length are masked entirely.
const MIN_PREFIX_LEN: usize = 8;

impl ConnectSid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a display-safe rendering of the token.
    pub fn masked(&self) -> String {
        let len = self.0.chars().count();
        if len == 0 {
            "(empty)".to_string()
        } else if len <= MIN_PREFIX_LEN {
            "*".repeat(len)
        } else {
            let prefix: String = self.0.chars().take(4).collect();
            format!("{}…", prefix)
        }
    }
}

impl fmt::Display for ConnectSid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl fmt::Debug for ConnectSid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConnectSid(\"{}\")", self.masked())
    }
}
