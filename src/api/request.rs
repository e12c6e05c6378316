//! Request-side helpers for the roster API.
//!
//! Create requests carry a [`TransportEmployee`](crate::models::TransportEmployee)
//! body; the acting principal comes from a request header.

use axum::http::HeaderMap;

use crate::storage::Principal;

/// Header naming the user acting on a request.
pub const PRINCIPAL_HEADER: &str = "x-user";

/// Header reporting how many detail tokens a create request dropped.
pub const DROPPED_DETAILS_HEADER: &str = "x-dropped-details";

/// Returns the principal named by the request headers, or the anonymous
/// principal when the header is missing, blank or not valid text.
pub fn principal_from_headers(headers: &HeaderMap) -> Principal {
    headers
        .get(PRINCIPAL_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Principal::new)
        .unwrap_or_else(Principal::anonymous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_principal_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(PRINCIPAL_HEADER, HeaderValue::from_static("admin"));
        assert_eq!(principal_from_headers(&headers).name(), "admin");
    }

    #[test]
    fn test_missing_header_is_anonymous() {
        assert_eq!(principal_from_headers(&HeaderMap::new()), Principal::anonymous());
    }

    #[test]
    fn test_blank_header_is_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert(PRINCIPAL_HEADER, HeaderValue::from_static("   "));
        assert_eq!(principal_from_headers(&headers), Principal::anonymous());
    }
}
