//! Predict proxy route.
//!
//! Forwards multipart submissions verbatim to the inference backend so that
//! deployments can keep clients on a single origin. The desktop app does not
//! use this path; it calls the backend directly. Served by the
//! `predict-proxy` binary.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct ProxyState {
    pub http: reqwest::Client,
    pub backend_url: String,
}

impl ProxyState {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            backend_url: backend_url.into(),
        }
    }
}

/// Fixed envelope returned whenever the backend cannot be reached.
pub fn error_envelope() -> Value {
    json!({
        "success": false,
        "error": "Proxy Error",
        "message": "Failed to reach backend /predict endpoint",
    })
}

pub fn router(state: ProxyState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/api/predict/backend", post(forward_predict))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Forward the raw multipart body unchanged and relay status plus JSON back.
async fn forward_predict(
    State(state): State<ProxyState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let mut request = state.http.post(&state.backend_url).body(body.to_vec());
    if let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        request = request.header(header::CONTENT_TYPE, content_type);
    }

    match request.send().await {
        Ok(response) => {
            let status = StatusCode::from_u16(response.status().as_u16())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            // Unparseable backend bodies relay as an empty object.
            let payload = response.json::<Value>().await.unwrap_or_else(|_| json!({}));
            (status, Json(payload))
        }
        Err(err) => {
            tracing::error!(backend = %state.backend_url, %err, "Failed to proxy predict request");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error_envelope()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_shape_is_fixed() {
        let envelope = error_envelope();
        assert_eq!(envelope["success"], json!(false));
        assert_eq!(envelope["error"], json!("Proxy Error"));
        assert_eq!(
            envelope["message"],
            json!("Failed to reach backend /predict endpoint")
        );
    }
}
