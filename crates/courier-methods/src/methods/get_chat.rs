use courier_core::{context::RequestContext, error::CourierError};
use courier_types::{Chat, ChatId};
use serde::{Deserialize, Serialize};

use crate::method::TelegramMethod;

/// Get up to date information about a chat. Returns a [`Chat`].
///
/// Docs: <https://core.telegram.org/bots/api#getchat>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetChat {
    pub chat_id: ChatId,
}

impl GetChat {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl TelegramMethod for GetChat {
    type Return = Chat;
    const NAME: &'static str = "getChat";

    fn validate(&self, _ctx: &RequestContext) -> Result<(), CourierError> {
        self.chat_id.validate("chat_id")
    }
}
