//! JSON and multipart calls to the analysis backend.
//!
//! Every request carries the browser's credentials. Failures are folded into
//! [`ApiError`] so views only have one message to show. Nothing is retried and
//! no timeout is set.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{ApiConfig, ApiError, Endpoint};
use web_sys::{FormData, RequestCredentials};

thread_local! {
    static CONFIG: ApiConfig = ApiConfig::from_build_env();
}

pub fn base_url() -> String {
    CONFIG.with(|config| config.base_url().to_string())
}

pub fn url(endpoint: Endpoint) -> String {
    CONFIG.with(|config| config.url(endpoint))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let target = request.url();
    let response = request.send().await.map_err(|e| {
        log::warn!("Network error calling {}: {}", target, e);
        ApiError::Network(e.to_string())
    })?;

    if response.ok() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(response.status(), &body);
    log::warn!("{} answered {:?}: {}", target, err.status(), err);
    Err(err)
}

pub async fn post_json<B, R>(endpoint: Endpoint, body: &B) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    log::info!("POST {}", endpoint.path());
    let request = Request::post(&url(endpoint))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    let response = send(request).await?;
    response
        .json::<R>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Multipart upload; the response body is not used beyond its status.
pub async fn post_form(endpoint: Endpoint, form: FormData) -> Result<(), ApiError> {
    log::info!("POST {} (multipart)", endpoint.path());
    let request = Request::post(&url(endpoint))
        .credentials(RequestCredentials::Include)
        .body(form)
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    send(request).await.map(|_| ())
}
