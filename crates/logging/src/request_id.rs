//! # Request ID Tracking
//!
//! Utilities for generating and propagating request IDs.
//! Uses CUID2 for collision-resistant, URL-safe identifiers.

/// Header carrying the request ID in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// A request ID type using CUID2.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random request ID using CUID2.
    #[inline]
    pub fn new() -> Self { Self(cuid2::create_id()) }

    /// Get the request ID as a string.
    #[inline]
    pub fn as_str(&self) -> &str { &self.0 }

    /// Consume and return the inner string.
    #[inline]
    pub fn into_string(self) -> String { self.0 }
}

impl Default for RequestId {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}

/// Accept an inbound request ID header if it looks like an identifier.
///
/// Values must be 20 to 64 characters of ASCII alphanumerics, `-` or `_`.
pub fn try_from_header(value: &str) -> Option<RequestId> {
    let value = value.trim();
    let well_formed = (20 ..= 64).contains(&value.len()) &&
        value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if well_formed {
        Some(RequestId(value.to_string()))
    }
    else {
        None
    }
}

/// Reuse a valid inbound request ID or generate a fresh one.
pub fn from_header_or_new(value: Option<&str>) -> RequestId { value.and_then(try_from_header).unwrap_or_default() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_is_url_safe() {
        let id = RequestId::new();
        assert!(!id.as_str().is_empty());
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::new();
        assert_eq!(format!("{}", id), id.as_str());
    }

    #[test]
    fn test_try_from_header() {
        let value = "k192v2g4w3zq8h6j5k12345678";
        let result = try_from_header(value);
        assert_eq!(result.map(RequestId::into_string), Some(value.to_string()));
    }

    #[test]
    fn test_try_from_header_invalid() {
        assert!(try_from_header("invalid!@#").is_none());
        assert!(try_from_header("short").is_none());
        assert!(try_from_header(&"a".repeat(65)).is_none());
    }

    #[test]
    fn test_from_header_or_new() {
        let inbound = "abcdefghijklmnopqrstuvwx";
        assert_eq!(from_header_or_new(Some(inbound)).as_str(), inbound);
        assert_ne!(from_header_or_new(Some("bad value")).as_str(), "bad value");
        assert!(!from_header_or_new(None).as_str().is_empty());
    }
}
