//! The envelope every Bot API response arrives in.

use courier_core::error::CourierError;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::method::TelegramMethod;

/// `{ok, result, description, error_code, parameters}` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Response<T> {
    pub ok: bool,
    // A missing `result` is already `None`; serde's `default` attribute
    // would add a `T: Default` bound on the envelope.
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub parameters: Option<ResponseParameters>,
}

/// Hints attached to some failed requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseParameters {
    /// The group moved to a supergroup with this id.
    #[serde(default)]
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before repeating a flood-limited request.
    #[serde(default)]
    pub retry_after: Option<i64>,
}

impl<T> Response<T> {
    /// The result on success, or the API error the envelope describes.
    pub fn into_result(self) -> Result<T, CourierError> {
        if !self.ok {
            let code = self.error_code.unwrap_or_default();
            let description = self.description.unwrap_or_default();
            if let Some(params) = self.parameters {
                warn!(
                    "telegram api error {code}: {description} (retry_after={:?}, migrate_to_chat_id={:?})",
                    params.retry_after, params.migrate_to_chat_id
                );
            } else {
                warn!("telegram api error {code}: {description}");
            }
            return Err(CourierError::Api { code, description });
        }

        self.result.ok_or_else(|| {
            CourierError::MalformedResponse("response is ok but carries no result".to_string())
        })
    }
}

/// Parse a decoded response envelope into `M`'s declared result type.
pub fn parse_response<M: TelegramMethod>(payload: Value) -> Result<M::Return, CourierError> {
    let response: Response<M::Return> = serde_json::from_value(payload)
        .map_err(|e| CourierError::MalformedResponse(format!("{}: {e}", M::NAME)))?;
    response.into_result()
}
