use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value of the `status` field present in every response body.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    #[serde(rename = "Ok")]
    Ok,
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "feedback")]
    Feedback,
}

/// Success envelope: `{status, message}` followed by the fields of `data`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseDto<T> {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ResponseDto<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: message.into(),
            data,
        }
    }
}

/// Payload for routes that only acknowledge.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq)]
pub struct EmptyDto {}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub status: ResponseStatus,
    pub message: String,
}
