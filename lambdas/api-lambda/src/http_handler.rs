use std::sync::Arc;

use gallery_atoms as atoms;
use gallery_shared::{auth, render, AppState};
use lambda_http::http::header::{HeaderValue, CACHE_CONTROL, VARY};
use lambda_http::http::{Method, StatusCode};
use lambda_http::{Body, Error, Request, RequestExt, RequestPayloadExt, Response};

/// Everything behind the login guard is per-session; keep shared caches out
/// of the way.
fn with_session_headers(mut resp: Response<Body>) -> Response<Body> {
    let headers = resp.headers_mut();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("private, no-store"));
    headers.append(VARY, HeaderValue::from_static("Cookie"));
    resp
}

fn finalize_response(resp: Result<Response<Body>, Error>) -> Result<Response<Body>, Error> {
    resp.map(with_session_headers)
}

/// Main Lambda handler - guards the session, then routes to the view
/// handlers.
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method().clone();
    let path = event.uri().path().to_string();
    tracing::info!("🚀 gallery webapp invoked - Method: {} Path: {}", method, path);

    let cookie_header = event.headers().get("Cookie").and_then(|v| v.to_str().ok());

    // Login guard: every route below requires a live session.
    let gateway = match auth::require_session(&state, cookie_header, &path).await {
        Ok(gateway) => gateway,
        Err(resp) => return Ok(with_session_headers(resp)),
    };

    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let resp = match (&method, parts.as_slice()) {
        // GET / - profile landing page
        (&Method::GET, []) => atoms::profile::index_handler(&gateway).await,
        // GET /best[?json=1] - 5-star listing
        (&Method::GET, ["best"]) => {
            let json_flag = event
                .query_string_parameters_ref()
                .and_then(|params| params.first("json"));
            atoms::ratings::best_handler(&gateway, &state.config, json_flag).await
        }
        // POST /like - toggle, then redirect to /best
        (&Method::POST, ["like"]) => {
            let form = match event.payload::<atoms::likes::LikeForm>() {
                Ok(form) => form,
                Err(e) => {
                    tracing::warn!("⚠️ unreadable like payload: {}", e);
                    None
                }
            };
            atoms::likes::like_handler(&gateway, form).await
        }
        (_, []) | (_, ["best"]) | (_, ["like"]) => method_not_allowed(),
        _ => {
            tracing::warn!("⚠️ No route matched - Method: {} Path: {}", method, path);
            not_found()
        }
    };

    finalize_response(resp)
}

fn not_found() -> Result<Response<Body>, Error> {
    render::error_response(StatusCode::NOT_FOUND, "Not found")
}

fn method_not_allowed() -> Result<Response<Body>, Error> {
    render::error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
