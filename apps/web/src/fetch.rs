//! `window.fetch` transport

use async_trait::async_trait;
use clinic_core::{ClientError, HttpClient, HttpRequest, HttpResponse, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Sends requests through the browser's `fetch`
#[derive(Debug, Default)]
pub struct FetchClient;

fn network_error(err: JsValue) -> ClientError {
    ClientError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_mode(RequestMode::Cors);
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let outgoing = Request::new_with_str_and_init(&request.url, &init).map_err(network_error)?;
        if request.body.is_some() {
            outgoing
                .headers()
                .set("Content-Type", "application/json")
                .map_err(network_error)?;
        }

        let window = web_sys::window().ok_or(ClientError::Unavailable("window"))?;
        let value = JsFuture::from(window.fetch_with_request(&outgoing))
            .await
            .map_err(network_error)?;
        let response: Response = value.dyn_into().map_err(network_error)?;

        let text = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;

        Ok(HttpResponse::new(
            response.status(),
            text.as_string().unwrap_or_default(),
        ))
    }
}
