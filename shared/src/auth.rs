//! Login guard for the view handlers.
//!
//! Session issuance belongs to the host platform; this module only turns a
//! session cookie into a connected gateway. Handlers behind the guard never
//! observe an unauthenticated request.

use lambda_http::http::header::{HeaderValue, LOCATION};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};

use crate::gateway::{GatewayError, HttpGateway};
use crate::AppState;

/// Pull the named cookie's value out of a `Cookie` header.
fn session_key<'a>(cookie_header: Option<&'a str>, cookie_name: &str) -> Option<&'a str> {
    cookie_header?.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == cookie_name && !value.is_empty()).then_some(value)
    })
}

fn login_redirect(login_url: &str, original_path: &str) -> Response<Body> {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("url", original_path)
        .finish();
    let separator = if login_url.contains('?') { '&' } else { '?' };
    let location = format!("{}{}{}", login_url, separator, query);

    let mut resp = Response::new(Body::Empty);
    *resp.status_mut() = StatusCode::FOUND;
    if let Ok(value) = HeaderValue::from_str(&location) {
        resp.headers_mut().insert(LOCATION, value);
    }
    resp
}

fn gateway_unavailable(message: &str) -> Response<Body> {
    let mut resp = Response::new(
        serde_json::json!({ "error": message }).to_string().into(),
    );
    *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    resp.headers_mut().insert(
        "Content-Type",
        HeaderValue::from_static("application/json"),
    );
    resp
}

/// Resolve the request's session cookie into a gateway connection.
///
/// `Err` carries a complete response: a 302 to the login flow (with the
/// original path in `?url=`) when the session is missing or stale, or a 500
/// when the data server cannot be reached at all.
pub async fn require_session(
    state: &AppState,
    cookie_header: Option<&str>,
    original_path: &str,
) -> Result<HttpGateway, Response<Body>> {
    let key = match session_key(cookie_header, &state.config.session_cookie) {
        Some(key) => key,
        None => return Err(login_redirect(&state.config.login_url, original_path)),
    };

    match HttpGateway::connect(state.http.clone(), &state.config.gateway_url, key).await {
        Ok(gateway) => Ok(gateway),
        Err(GatewayError::InvalidSession) => {
            tracing::info!("stale session cookie, redirecting to login");
            Err(login_redirect(&state.config.login_url, original_path))
        }
        Err(e) => {
            tracing::error!("❌ gateway connect failed: {}", e);
            Err(gateway_unavailable(&e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{gateway_unavailable, login_redirect, session_key};
    use lambda_http::http::StatusCode;
    use lambda_http::Body;

    #[test]
    fn finds_session_cookie_among_others() {
        let header = "theme=dark; sessionid=abc123; csrftoken=xyz";
        assert_eq!(session_key(Some(header), "sessionid"), Some("abc123"));
    }

    #[test]
    fn missing_or_empty_cookie_is_none() {
        assert_eq!(session_key(None, "sessionid"), None);
        assert_eq!(session_key(Some("theme=dark"), "sessionid"), None);
        assert_eq!(session_key(Some("sessionid="), "sessionid"), None);
    }

    #[test]
    fn redirect_carries_return_url() {
        let resp = login_redirect("/login", "/best");
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get("Location").unwrap(),
            "/login?url=%2Fbest"
        );
    }

    #[test]
    fn redirect_appends_to_existing_query() {
        let resp = login_redirect("/login?app=gallery", "/");
        assert_eq!(
            resp.headers().get("Location").unwrap(),
            "/login?app=gallery&url=%2F"
        );
    }

    #[test]
    fn unreachable_gateway_is_500_json() {
        let resp = gateway_unavailable("gateway transport error: connect refused");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );
        let body = match resp.body() {
            Body::Text(text) => text.clone(),
            _ => String::new(),
        };
        assert_eq!(
            body,
            r#"{"error":"gateway transport error: connect refused"}"#
        );
    }
}
