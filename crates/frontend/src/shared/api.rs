//! HTTP helpers over gloo-net
//!
//! Every call goes to the backend (`api_url`). Non-2xx responses are turned
//! into [`ApiFailure`] using the backend's `ApiErrorBody` when it is present.

use contracts::domain::common::FieldError;
use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;

/// Ошибка вызова API в виде, пригодном для показа пользователю
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub message: String,
    pub field_errors: Vec<FieldError>,
}

impl ApiFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    /// Разбор тела ответа с ошибкой
    ///
    /// Тело `ApiErrorBody` используется как есть; произвольный текст
    /// становится сообщением; пустое тело даёт "HTTP <status>".
    pub fn from_response_body(status: u16, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
            let message = if parsed.message.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                parsed.message
            };
            return Self {
                message,
                field_errors: parsed.field_errors,
            };
        }

        let text = body.trim();
        if text.is_empty() {
            Self::new(format!("HTTP {}", status))
        } else {
            Self::new(text)
        }
    }

    pub fn has_field_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

async fn check(resp: Response) -> Result<Response, ApiFailure> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("API error {}: {}", status, body);
    Err(ApiFailure::from_response_body(status, &body))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiFailure> {
    let resp = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiFailure::new(format!("Request failed: {}", e)))?;

    check(resp)
        .await?
        .json()
        .await
        .map_err(|e| ApiFailure::new(format!("Failed to parse response: {}", e)))
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiFailure>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let resp = send_post(path, body).await?;
    resp.json()
        .await
        .map_err(|e| ApiFailure::new(format!("Failed to parse response: {}", e)))
}

/// POST без тела ответа (204)
pub async fn post_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiFailure> {
    send_post(path, body).await.map(|_| ())
}

async fn send_post<B: Serialize>(path: &str, body: &B) -> Result<Response, ApiFailure> {
    let resp = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiFailure::new(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiFailure::new(format!("Request failed: {}", e)))?;
    check(resp).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_with_field_errors() {
        let body = r#"{"message":"Validation failed","field_errors":[{"field":"name","message":"Name is required"}]}"#;
        let failure = ApiFailure::from_response_body(422, body);
        assert_eq!(failure.message, "Validation failed");
        assert!(failure.has_field_errors());
        assert_eq!(failure.field_errors[0].field, "name");
    }

    #[test]
    fn test_plain_text_body() {
        let failure = ApiFailure::from_response_body(502, "  Bad gateway \n");
        assert_eq!(failure.message, "Bad gateway");
        assert!(!failure.has_field_errors());
    }

    #[test]
    fn test_empty_body_uses_status() {
        assert_eq!(ApiFailure::from_response_body(500, "").message, "HTTP 500");
        assert_eq!(
            ApiFailure::from_response_body(502, r#"{"message":""}"#).message,
            "HTTP 502"
        );
    }
}
