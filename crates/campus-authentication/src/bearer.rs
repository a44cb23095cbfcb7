//! Bearer header parsing
//!
//! The credential transport is a bearer-style authorization header. An
//! absent or malformed header is rejected here, before any token
//! verification or gate logic runs.

use crate::token::{AuthError, SessionToken};

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an authorization header value
pub fn bearer_token(header: Option<&str>) -> Result<SessionToken, AuthError> {
    let header = header.ok_or(AuthError::InvalidOrExpired)?;
    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::InvalidOrExpired)?;
    if token.is_empty() {
        return Err(AuthError::InvalidOrExpired);
    }
    Ok(SessionToken::from(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn extracts_token_after_bearer_prefix() {
        let token = bearer_token(Some("Bearer abc.def")).expect("well-formed header");
        assert_eq!(token.as_str(), "abc.def");
    }

    #[test]
    fn rejects_missing_header() {
        assert_matches!(bearer_token(None), Err(AuthError::InvalidOrExpired));
    }

    #[test]
    fn rejects_malformed_headers() {
        for header in ["", "Bearer", "Bearer ", "Basic abc", "bearer abc"] {
            assert_matches!(
                bearer_token(Some(header)),
                Err(AuthError::InvalidOrExpired),
                "header {header:?} should be rejected"
            );
        }
    }
}
