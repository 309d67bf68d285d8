//! Typed calls to the `/api` JSON endpoints.
//!
//! Requests are only sent from the web client; other builds get an error back so pages render
//! their error state instead of panicking. Failures are reported as the message of the server's
//! [`ErrorDto`](crate::model::api::ErrorDto) when there is one.

pub mod affiliate;
pub mod analytics;
pub mod campaign;
pub mod config;
pub mod message;
pub mod product;
pub mod settings;
pub mod wallet;

use serde::{de::DeserializeOwned, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

pub async fn get<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let body = fetch(Method::Get, url, None).await?;
    decode(body)
}

/// Send `body` as JSON and decode the JSON response.
pub async fn send<B: Serialize, T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: &B,
) -> Result<T, String> {
    let body = serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))?;
    let response = fetch(method, url, Some(body)).await?;
    decode(response)
}

/// Call an endpoint without a request body and decode the JSON response.
pub async fn call<T: DeserializeOwned>(method: Method, url: &str) -> Result<T, String> {
    let response = fetch(method, url, None).await?;
    decode(response)
}

/// Call an endpoint that answers `204 No Content`.
pub async fn call_empty<B: Serialize>(
    method: Method,
    url: &str,
    body: Option<&B>,
) -> Result<(), String> {
    let body = body
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| format!("Failed to encode request: {}", e))?;
    fetch(method, url, body).await.map(|_| ())
}

fn decode<T: DeserializeOwned>(body: Option<String>) -> Result<T, String> {
    let body = body.ok_or_else(|| "Response had no content".to_string())?;
    serde_json::from_str(&body).map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(feature = "web")]
async fn fetch(method: Method, url: &str, body: Option<String>) -> Result<Option<String>, String> {
    use reqwasm::http::Request;

    let request = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    };
    let request = match body {
        Some(body) => request.header("Content-Type", "application/json").body(body),
        None => request,
    };

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        204 => Ok(None),
        200..=299 => response
            .text()
            .await
            .map(Some)
            .map_err(|e| format!("Failed to read response: {}", e)),
        status => {
            use crate::model::api::ErrorDto;

            if let Ok(error_dto) = response.json::<ErrorDto>().await {
                Err(error_dto.error)
            } else {
                Err(format!("Request failed with status {}", status))
            }
        }
    }
}

#[cfg(not(feature = "web"))]
async fn fetch(method: Method, url: &str, _body: Option<String>) -> Result<Option<String>, String> {
    Err(format!(
        "{:?} {} is only available from the web client",
        method, url
    ))
}
