use std::fmt;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;

/// Body of an API response.
///
/// `Json` when the client decodes responses, `Raw` when it hands back the
/// body exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Json(Value),
    Raw(String),
}

impl Response {
    /// Turn a received status and body into the caller's result.
    ///
    /// Failure bodies are decoded on a best effort basis so a JSON error
    /// payload reaches the caller structured; success bodies must decode.
    pub(crate) fn from_body(
        status: StatusCode,
        body: String,
        decode: bool,
    ) -> Result<Self, ApiError> {
        if !status.is_success() {
            let body = if decode {
                serde_json::from_str(&body)
                    .map(Response::Json)
                    .unwrap_or(Response::Raw(body))
            } else {
                Response::Raw(body)
            };
            return Err(ApiError::HttpStatus { status, body });
        }

        if !decode {
            return Ok(Response::Raw(body));
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(Response::Json(value)),
            Err(source) => Err(ApiError::Decode { source, body }),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Response::Json(value) => Some(value),
            Response::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Response::Raw(body) => Some(body),
            Response::Json(_) => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Response::Json(value) => Some(value),
            Response::Raw(_) => None,
        }
    }

    /// Deserialize into a caller defined type, whichever form the body is in.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        match self {
            Response::Json(value) => T::deserialize(value),
            Response::Raw(body) => serde_json::from_str(body),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Json(value) => write!(f, "{}", value),
            Response::Raw(body) => f.write_str(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_success_bodies() {
        let response =
            Response::from_body(StatusCode::OK, r#"{"status":"OK"}"#.to_string(), true).unwrap();
        assert_eq!(response, Response::Json(json!({ "status": "OK" })));
    }

    #[test]
    fn raw_mode_returns_body_untouched() {
        let body = "not { json".to_string();
        let response = Response::from_body(StatusCode::OK, body.clone(), false).unwrap();
        assert_eq!(response.as_raw(), Some(body.as_str()));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = Response::from_body(StatusCode::OK, "<html>".to_string(), true).unwrap_err();
        match err {
            ApiError::Decode { body, .. } => assert_eq!(body, "<html>"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failure_keeps_json_payload() {
        let err = Response::from_body(
            StatusCode::FORBIDDEN,
            r#"{"error":"invalid apikey"}"#.to_string(),
            true,
        )
        .unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
        match err {
            ApiError::HttpStatus { body, .. } => {
                assert_eq!(body.as_json(), Some(&json!({ "error": "invalid apikey" })))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failure_with_non_json_body_stays_raw() {
        let err = Response::from_body(StatusCode::BAD_GATEWAY, "upstream down".to_string(), true)
            .unwrap_err();
        match err {
            ApiError::HttpStatus { status, body } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, Response::Raw("upstream down".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn deserializes_either_form() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Channel {
            id: u64,
            name: String,
        }

        let expected = Channel {
            id: 7,
            name: "Blog".to_string(),
        };
        let json = Response::Json(json!({ "id": 7, "name": "Blog" }));
        let raw = Response::Raw(r#"{"id":7,"name":"Blog"}"#.to_string());

        assert_eq!(json.deserialize::<Channel>().unwrap(), expected);
        assert_eq!(raw.deserialize::<Channel>().unwrap(), expected);
    }
}
