use courier_core::{
    context::{ParseMode, RequestContext},
    error::CourierError,
};
use courier_types::{ChatId, Field, MessageEntity, MessageId, ReplyMarkup};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::method::{prepare_parse_mode, validate_entities, validate_message_id, TelegramMethod};

/// Copy a message of any kind. Like `forwardMessage`, but the copy has no
/// link back to the original. Returns the [`MessageId`] of the copy.
///
/// Docs: <https://core.telegram.org/bots/api#copymessage>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyMessage {
    /// Target chat id or `@channelusername`.
    pub chat_id: ChatId,
    /// Chat the original message was sent in.
    pub from_chat_id: ChatId,
    /// Message identifier in `from_chat_id`.
    pub message_id: i64,
    /// New caption for media. The original caption is kept when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Unset falls back to the bot's default parse mode.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub parse_mode: Field<ParseMode>,
    /// Entities in the new caption, used instead of `parse_mode`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl CopyMessage {
    pub fn new(
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            from_chat_id: from_chat_id.into(),
            message_id,
            caption: None,
            parse_mode: Field::Unset,
            caption_entities: None,
            disable_notification: None,
            reply_to_message_id: None,
            allow_sending_without_reply: None,
            reply_markup: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode.into();
        self
    }

    /// Send the caption as plain text even if the bot has a default mode.
    pub fn no_parse_mode(mut self) -> Self {
        self.parse_mode = Field::Null;
        self
    }

    pub fn caption_entities(mut self, entities: Vec<MessageEntity>) -> Self {
        self.caption_entities = Some(entities);
        self
    }

    pub fn disable_notification(mut self, disable: bool) -> Self {
        self.disable_notification = Some(disable);
        self
    }

    pub fn reply_to_message_id(mut self, id: i64) -> Self {
        self.reply_to_message_id = Some(id);
        self
    }

    pub fn allow_sending_without_reply(mut self, allow: bool) -> Self {
        self.allow_sending_without_reply = Some(allow);
        self
    }

    pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into());
        self
    }
}

impl TelegramMethod for CopyMessage {
    type Return = MessageId;
    const NAME: &'static str = "copyMessage";

    fn validate(&self, _ctx: &RequestContext) -> Result<(), CourierError> {
        self.chat_id.validate("chat_id")?;
        self.from_chat_id.validate("from_chat_id")?;
        validate_message_id("message_id", self.message_id)?;
        validate_entities("caption_entities", self.caption_entities.as_ref())
    }

    fn shape(&self, data: &mut Map<String, Value>, ctx: &RequestContext) {
        prepare_parse_mode(ctx, data, "parse_mode", "caption_entities");
    }
}
