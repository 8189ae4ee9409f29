use courier_core::{context::RequestContext, error::CourierError};
use courier_types::ChatId;
use serde::{Deserialize, Serialize};

use crate::method::{validate_message_id, TelegramMethod};

/// Pin a message in a chat. Returns `true` on success.
///
/// Docs: <https://core.telegram.org/bots/api#pinchatmessage>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinChatMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl PinChatMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            disable_notification: None,
        }
    }

    pub fn disable_notification(mut self, disable: bool) -> Self {
        self.disable_notification = Some(disable);
        self
    }
}

impl TelegramMethod for PinChatMessage {
    type Return = bool;
    const NAME: &'static str = "pinChatMessage";

    fn validate(&self, _ctx: &RequestContext) -> Result<(), CourierError> {
        self.chat_id.validate("chat_id")?;
        validate_message_id("message_id", self.message_id)
    }
}
