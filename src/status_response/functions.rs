//! The impls and functions
//!
use log::*;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Deserializer};
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::checker::Checker;
use crate::orchestrator::Endpoint;
use crate::status_response::{ApiResponse, StatusResponse};

/// Deserialize a string that can be `null`, which results in an empty string.
pub fn deserialize_null_string<'de, D>(
    deserializer: D,
) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl StatusResponse {
    pub fn is_ok(&self) -> bool {
        self.code == "OK"
    }
    /// OK if the code is `OK`, otherwise CRITICAL, with the message of the status response.
    pub fn to_checker(&self) -> Checker {
        if self.is_ok() {
            Checker::ok(self.message.clone())
        } else {
            Checker::critical(self.message.clone())
        }
    }
}

/// Classify the body of a response.
///
/// A JSON object is a [StatusResponse], a JSON array is decoded as `T`.
/// Anything else, including an empty body, is an error.
pub fn classify<T: DeserializeOwned>(
    body: &[u8],
) -> Result<ApiResponse<T>>
{
    let document: Value = serde_json::from_slice(body)
        .with_context(|| "Error parsing response as json")?;

    match document {
        Value::Object(_) => {
            let status_response: StatusResponse = serde_json::from_value(document)
                .with_context(|| "Error parsing status response")?;
            debug!("status response: {:?}", status_response);
            Ok(ApiResponse::Status(status_response))
        }
        Value::Array(_) => {
            let payload: T = serde_json::from_value(document)
                .with_context(|| "Error parsing response data")?;
            Ok(ApiResponse::Payload(payload))
        }
        other => bail!("Unexpected json in response: {}", other),
    }
}

/// Classify the body of the response of url, and turn the result into a [Checker]:
/// - a status response becomes OK or CRITICAL.
/// - the data is handed to `evaluate`.
/// - a body that can not be parsed becomes UNKNOWN, including url and the parse error.
pub fn classify_and_evaluate<T, F>(
    body: &[u8],
    url: &str,
    evaluate: F,
) -> Checker
where
    T: DeserializeOwned,
    F: FnOnce(T) -> Checker,
{
    match classify::<T>(body) {
        Ok(ApiResponse::Status(status_response)) => status_response.to_checker(),
        Ok(ApiResponse::Payload(payload)) => evaluate(payload),
        Err(e) => {
            debug!("could not parse response of {}, error: {:#}", url, e);
            Checker::unknown(format!("Could not read content for the Orchestrator API on {}\n{:#}", url, e))
        }
    }
}

/// Read path from the orchestrator and evaluate the response with [classify_and_evaluate].
/// A request that fails results in UNKNOWN, including the url.
pub fn read_and_evaluate<T, F>(
    endpoint: &Endpoint,
    path: &str,
    evaluate: F,
) -> Checker
where
    T: DeserializeOwned,
    F: FnOnce(T) -> Checker,
{
    let url = endpoint.url(path);
    match endpoint.http_get(path) {
        Ok(body) => classify_and_evaluate(&body, &url, evaluate),
        Err(e) => {
            debug!("http get of {} failed, error: {:#}", url, e);
            Checker::unknown(format!("Could not connect to Orchestrator API on {}\n{:#}", url, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::CheckStatus;

    #[test]
    fn unit_classify_status_error() {
        let json = r#"
{"Code":"ERROR","Message":"Unable to determine cluster name. clusterHint=prod9","Details":null}
        "#;
        let result = classify::<Vec<Value>>(json.as_bytes()).unwrap();
        match result {
            ApiResponse::Status(status_response) => {
                assert_eq!(status_response.code, "ERROR");
                assert_eq!(status_response.message, "Unable to determine cluster name. clusterHint=prod9");
                assert!(!status_response.is_ok());
            }
            ApiResponse::Payload(_) => panic!("expected a status response"),
        }
    }

    #[test]
    fn unit_classify_status_with_details() {
        let json = r#"
{"Code":"OK","Message":"Application node is healthy","Details":{"Healthy":true,"Hostname":"orchestrator1","Token":"8a5b1f"}}
        "#;
        let result = classify::<Vec<Value>>(json.as_bytes()).unwrap();
        assert_eq!(result, ApiResponse::Status(StatusResponse {
            code: "OK".to_string(),
            message: "Application node is healthy".to_string(),
            details: Some(serde_json::json!({"Healthy":true,"Hostname":"orchestrator1","Token":"8a5b1f"})),
        }));
    }

    #[test]
    fn unit_classify_status_with_null_fields() {
        let json = r#"
{"Code":"ERROR","Message":null,"Details":null}
        "#;
        let result = classify::<Vec<Value>>(json.as_bytes()).unwrap();
        assert_eq!(result, ApiResponse::Status(StatusResponse {
            code: "ERROR".to_string(),
            message: String::new(),
            details: None,
        }));
        let result = classify::<Vec<Value>>(br#"{"Code":null,"Message":"No cluster found"}"#).unwrap();
        match result {
            ApiResponse::Status(status_response) => {
                assert_eq!(status_response.code, "");
                assert_eq!(status_response.to_checker().status, crate::checker::CheckStatus::Critical);
            }
            ApiResponse::Payload(_) => panic!("expected a status response"),
        }
    }

    #[test]
    fn unit_classify_empty_object_is_status() {
        let result = classify::<Vec<Value>>(b"{}").unwrap();
        assert_eq!(result, ApiResponse::Status(StatusResponse::default()));
    }

    #[test]
    fn unit_classify_array_is_payload() {
        let result = classify::<Vec<u32>>(b"[1, 2, 3]").unwrap();
        assert_eq!(result, ApiResponse::Payload(vec![1, 2, 3]));
    }

    #[test]
    fn unit_classify_empty_array_is_payload() {
        let result = classify::<Vec<u32>>(b"[]").unwrap();
        assert_eq!(result, ApiResponse::Payload(Vec::new()));
    }

    #[test]
    fn unit_classify_empty_body_is_error() {
        assert!(classify::<Vec<Value>>(b"").is_err());
    }

    #[test]
    fn unit_classify_html_is_error() {
        let body = r#"
<html><body>404 page not found</body></html>
        "#;
        assert!(classify::<Vec<Value>>(body.as_bytes()).is_err());
    }

    #[test]
    fn unit_classify_scalar_is_error() {
        assert!(classify::<Vec<Value>>(b"42").is_err());
    }

    #[test]
    fn unit_classify_array_of_wrong_type_is_error() {
        assert!(classify::<Vec<u32>>(br#"["a", "b"]"#).is_err());
    }

    #[test]
    fn unit_status_ok_ignores_evaluate() {
        let json = r#"{"Code":"OK","Message":"all good"}"#;
        let checker = classify_and_evaluate::<Vec<Value>, _>(json.as_bytes(), "http://localhost:3000/api/health", |_| {
            panic!("the payload must not be evaluated for a status response")
        });
        assert_eq!(checker.status, CheckStatus::Ok);
        assert_eq!(checker.message, "all good");
    }

    #[test]
    fn unit_status_not_ok_is_critical() {
        let json = r#"{"Code":"ERROR","Message":"No cluster found for alias prod9"}"#;
        let checker = classify_and_evaluate::<Vec<Value>, _>(json.as_bytes(), "http://localhost:3000/api/cluster/alias/prod9", |_| {
            Checker::ok("not expected")
        });
        assert_eq!(checker.status, CheckStatus::Critical);
        assert_eq!(checker.message, "No cluster found for alias prod9");
    }

    #[test]
    fn unit_unparseable_body_is_unknown_with_url() {
        let checker = classify_and_evaluate::<Vec<Value>, _>(b"", "http://localhost:3000/api/health", |_| {
            Checker::ok("not expected")
        });
        assert_eq!(checker.status, CheckStatus::Unknown);
        assert!(checker.message.contains("http://localhost:3000/api/health"));
    }

    #[test]
    fn unit_payload_is_evaluated() {
        let checker = classify_and_evaluate::<Vec<u32>, _>(b"[1,2]", "http://localhost:3000/api/test", |payload| {
            Checker::warning(format!("{} entries", payload.len()))
        });
        assert_eq!(checker.status, CheckStatus::Warning);
        assert_eq!(checker.message, "2 entries");
    }
}
