use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use wellness_core::models::Identity;

use crate::error::ApiError;
use crate::state::AppState;

/// Header set by the upstream authorizer for authenticated traffic.
///
/// This header is trusted as-is. The deployment must strip or overwrite any
/// client-supplied value before the request reaches this service, or any
/// caller can act as any user.
pub const USER_HEADER: &str = "x-wellness-user";

/// Cookie carrying the anonymous session token.
pub const SESSION_COOKIE: &str = "wellness_session";

const MAX_TOKEN_LEN: usize = 128;

/// Identity middleware.
///
/// Inserts an [`Identity`] into request extensions for handlers to use. An
/// authenticated user comes from [`USER_HEADER`]; anonymous requests reuse the
/// session cookie, or get a freshly issued one on the response.
pub async fn identify(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(value) = req.headers().get(USER_HEADER) {
        let user_id = value
            .to_str()
            .ok()
            .map(str::trim)
            .filter(|v| is_valid_token(v))
            .ok_or_else(|| ApiError::Unauthorized("malformed user identity".to_string()))?
            .to_string();

        req.extensions_mut().insert(Identity::User(user_id));
        return Ok(next.run(req).await);
    }

    let existing = session_from_cookies(&req);
    let issued = existing.is_none();
    let session_id = existing.unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut()
        .insert(Identity::Session(session_id.clone()));
    let mut response = next.run(req).await;

    if issued {
        let mut cookie = format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax");
        if state.config.secure_cookies {
            cookie.push_str("; Secure");
        }
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::warn!("could not encode session cookie: {e}"),
        }
    }

    Ok(response)
}

/// Extract a well-formed session token from the `Cookie` header.
fn session_from_cookies(req: &Request) -> Option<String> {
    let prefix = format!("{SESSION_COOKIE}=");
    req.headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|cookie| cookie.trim().strip_prefix(prefix.as_str()))
        .find(|value| is_valid_token(value))
        .map(str::to_string)
}

/// Identity tokens become part of storage keys, so only a conservative
/// character set is accepted.
fn is_valid_token(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_TOKEN_LEN
        && !value.starts_with('.')
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tokens() {
        assert!(is_valid_token("3f2b9c1e-aaaa-4bbb-8ccc-0123456789ab"));
        assert!(is_valid_token("jane.doe@example.org"));
    }

    #[test]
    fn test_invalid_tokens() {
        assert!(!is_valid_token(""));
        assert!(!is_valid_token("../other-user"));
        assert!(!is_valid_token("a b"));
        assert!(!is_valid_token(".."));
        assert!(!is_valid_token(&"x".repeat(MAX_TOKEN_LEN + 1)));
    }

    #[test]
    fn test_session_from_cookies() {
        let req = axum::http::Request::builder()
            .header(COOKIE, "theme=dark; wellness_session=abc-123; other=1")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(session_from_cookies(&req).as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_malformed_session_cookie_is_ignored() {
        let req = axum::http::Request::builder()
            .header(COOKIE, "wellness_session=../../etc")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(session_from_cookies(&req), None);
    }
}
