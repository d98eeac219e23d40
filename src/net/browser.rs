//! `gloo-net` implementation of [`HttpClient`].

use super::http::{HttpClient, HttpRequest, HttpResponse};
use crate::error::TransportError;

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let resp = gloo_net::http::Request::post(&request.url)
            .header("Content-Type", request.content_type)
            .body(request.body)
            .map_err(|e| TransportError(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
