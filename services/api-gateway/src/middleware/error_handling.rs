use axum::{http::Request, middleware::Next, response::Response};

/// Log server-error responses with the request id they ran under. The
/// failure body a caller sees stays generic; the detail lives in the
/// log.
pub async fn error_observation_middleware(
    request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;

    if response.status().is_server_error() {
        tracing::error!(
            %method,
            %path,
            status = %response.status(),
            request_id,
            "request failed"
        );
    }

    response
}
