//! The structs
//!
/// The generic response of the orchestrator API.
///
/// ```json
/// {"Code":"OK","Message":"Application node is healthy","Details":{"Healthy":true}}
/// ```
/// Fields that are absent or `null` are left empty.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct StatusResponse {
    #[serde(deserialize_with = "crate::status_response::deserialize_null_string")]
    pub code: String,
    #[serde(deserialize_with = "crate::status_response::deserialize_null_string")]
    pub message: String,
    pub details: Option<serde_json::Value>,
}
/// A classified response: either a status response, or the expected data.
#[derive(Debug, PartialEq)]
pub enum ApiResponse<T> {
    Status(StatusResponse),
    Payload(T),
}
