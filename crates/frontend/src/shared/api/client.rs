use contracts::shared::api_payload::ApiPayload;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use crate::shared::api_utils::join_url;
use crate::shared::config::ApiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Thin wrapper over `gloo_net` bound to the collection backend.
///
/// Every response is normalized through [`ApiPayload`] and every failure is
/// reduced to an [`ApiError`] carrying one user-facing message.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    timeout_ms: u32,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_ms: config.timeout_ms,
        }
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Send a request and return the normalized payload (`None` for null/empty)
    pub async fn request(&self, path: &str, method: Method) -> Result<Option<Value>, ApiError> {
        let url = self.url(path);
        let result = self.send(&url, method).await;
        if let Err(e) = &result {
            log::error!("API request failed: {} {}: {}", method.as_str(), url, e);
        }
        result
    }

    async fn send(&self, url: &str, method: Method) -> Result<Option<Value>, ApiError> {
        let controller = web_sys::AbortController::new()
            .map_err(|e| ApiError::Request(format!("Failed to create abort controller: {:?}", e)))?;
        let signal = controller.signal();

        let request = builder(method, url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(&signal))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        // Dropping the timer cancels it, so it only fires while the request is in flight.
        let _timeout = Timeout::new(self.timeout_ms, move || controller.abort());

        // Fetch only rejects when no response arrived (offline, CORS, aborted).
        let response = request.send().await.map_err(|_| ApiError::NoResponse)?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        let body = response.text().await.map_err(|_| ApiError::NoResponse)?;
        Ok(normalize_body(&body))
    }
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

/// Parse a 2xx body. Non-JSON text is handed back unchanged as a string.
pub(crate) fn normalize_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => ApiPayload::from(value).into_data(),
        Err(_) => Some(Value::String(body.to_string())),
    }
}

/// Decode a normalized payload into `T`, keeping null as `None`
pub(crate) fn decode_payload<T: DeserializeOwned>(payload: Option<Value>) -> Result<Option<T>, ApiError> {
    payload.map(decode_value::<T>).transpose()
}

pub(crate) fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_collection_item::aggregate::CollectionItem;
    use serde_json::json;

    #[test]
    fn test_url_building() {
        let client = HttpClient::new(&crate::shared::config::Config::default().api);
        assert_eq!(client.url("ceramics"), "/api/ceramics");
        assert_eq!(client.url("jades/2"), "/api/jades/2");
        assert_eq!(client.url("/uploads"), "/api/uploads");
    }

    #[test]
    fn test_normalize_envelope_and_bare() {
        assert_eq!(
            normalize_body(r#"{"success":true,"data":[{"id":1}]}"#),
            Some(json!([{ "id": 1 }]))
        );
        assert_eq!(normalize_body(r#"{"success":false,"data":[1]}"#), None);
        assert_eq!(normalize_body(r#"[{"id":1}]"#), Some(json!([{ "id": 1 }])));
        assert_eq!(normalize_body("null"), None);
        assert_eq!(normalize_body("  "), None);
    }

    #[test]
    fn test_normalize_plain_text() {
        assert_eq!(normalize_body("OK"), Some(json!("OK")));
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_decode_payload_keeps_null() {
        assert_eq!(decode_payload::<Vec<String>>(None).unwrap(), None);
        assert_eq!(
            decode_payload::<Vec<String>>(normalize_body(r#"{"success":true,"data":["a.jpg"]}"#)).unwrap(),
            Some(vec!["a.jpg".to_string()])
        );
    }

    #[test]
    fn test_decode_value() {
        let items: Vec<CollectionItem> =
            decode_value(json!([{ "id": 2, "name": "Ru ware dish" }])).unwrap();
        assert_eq!(items[0].name, "Ru ware dish");

        let err = decode_value::<Vec<CollectionItem>>(json!("OK")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
