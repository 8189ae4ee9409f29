use courier_core::{context::RequestContext, error::CourierError};
use courier_types::{ChatId, Message};
use serde::{Deserialize, Serialize};

use crate::method::{validate_message_id, TelegramMethod};

/// Forward a message of any kind. Returns the forwarded [`Message`].
///
/// Docs: <https://core.telegram.org/bots/api#forwardmessage>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardMessage {
    pub chat_id: ChatId,
    pub from_chat_id: ChatId,
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl ForwardMessage {
    pub fn new(
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            from_chat_id: from_chat_id.into(),
            message_id,
            disable_notification: None,
        }
    }

    pub fn disable_notification(mut self, disable: bool) -> Self {
        self.disable_notification = Some(disable);
        self
    }
}

impl TelegramMethod for ForwardMessage {
    type Return = Message;
    const NAME: &'static str = "forwardMessage";

    fn validate(&self, _ctx: &RequestContext) -> Result<(), CourierError> {
        self.chat_id.validate("chat_id")?;
        self.from_chat_id.validate("from_chat_id")?;
        validate_message_id("message_id", self.message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::context::{ParseMode, RequestContext};
    use serde_json::json;

    #[test]
    fn test_forward_has_no_parse_mode() {
        let ctx = RequestContext::new().with_parse_mode(ParseMode::Html);
        let request = ForwardMessage::new(1, -200, 15)
            .disable_notification(false)
            .build_request(&ctx)
            .unwrap();
        assert_eq!(request.method, "forwardMessage");
        assert_eq!(
            serde_json::Value::Object(request.data),
            json!({"chat_id": 1, "from_chat_id": -200, "message_id": 15, "disable_notification": false})
        );
    }
}
