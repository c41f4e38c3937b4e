use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{client::model::error::ApiError, model::api::ErrorDto};

/// Parses a JSON success body, or turns an error body into `ApiError`.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::local(format!("Failed to parse response: {}", e)))
    } else {
        let code = status.as_u16();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(ApiError {
            status: code,
            message: error_message(&text),
        })
    }
}

/// Sends a request, mapping transport failures to `ApiError`.
pub async fn send_request(request: RequestBuilder) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::local(format!("Failed to send request: {}", e)))
}

/// Extracts `message` from an `ErrorDto` body, falling back to the raw text.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorDto>(body) {
        Ok(dto) => dto.message,
        Err(_) if body.is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests reading the message of an error body.
    ///
    /// Expected: `message` of an `ErrorDto`, otherwise the raw text
    #[test]
    fn extracts_error_message() {
        assert_eq!(
            error_message(r#"{"error":true,"message":"User not found"}"#),
            "User not found"
        );
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(""), "Unknown error");
    }
}
