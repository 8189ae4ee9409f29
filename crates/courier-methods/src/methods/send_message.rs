use courier_core::{
    context::{ParseMode, RequestContext},
    error::CourierError,
};
use courier_types::{ChatId, Field, Message, MessageEntity, ReplyMarkup};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::method::{prepare_parse_mode, validate_entities, TelegramMethod};

/// Longest text `sendMessage` accepts, in characters after entity parsing.
pub const MAX_TEXT_LEN: usize = 4096;

/// Send a text message. Returns the sent [`Message`].
///
/// Docs: <https://core.telegram.org/bots/api#sendmessage>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessage {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub parse_mode: Field<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: Field::Unset,
            entities: None,
            disable_web_page_preview: None,
            disable_notification: None,
            reply_to_message_id: None,
            allow_sending_without_reply: None,
            reply_markup: None,
        }
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode.into();
        self
    }

    pub fn no_parse_mode(mut self) -> Self {
        self.parse_mode = Field::Null;
        self
    }

    pub fn entities(mut self, entities: Vec<MessageEntity>) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn disable_web_page_preview(mut self, disable: bool) -> Self {
        self.disable_web_page_preview = Some(disable);
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

    /// Whether the request will carry a parse mode once shaped.
    fn markup_parsed(&self, ctx: &RequestContext) -> bool {
        let has_entities = self.entities.as_ref().is_some_and(|e| !e.is_empty());
        if has_entities {
            return false;
        }
        match self.parse_mode {
            Field::Unset => ctx.parse_mode.is_some(),
            Field::Null => false,
            Field::Value(_) => true,
        }
    }
}

impl TelegramMethod for SendMessage {
    type Return = Message;
    const NAME: &'static str = "sendMessage";

    fn validate(&self, ctx: &RequestContext) -> Result<(), CourierError> {
        self.chat_id.validate("chat_id")?;
        if self.text.is_empty() {
            return Err(CourierError::invalid("text must not be empty"));
        }
        // The limit counts characters after markup parsing, so raw text
        // can only be measured when no parse mode will be sent.
        if !self.markup_parsed(ctx) {
            let len = self.text.chars().count();
            if len > MAX_TEXT_LEN {
                return Err(CourierError::invalid(format!(
                    "text must be 1-{MAX_TEXT_LEN} characters, got {len}"
                )));
            }
        }
        validate_entities("entities", self.entities.as_ref())
    }

    fn shape(&self, data: &mut Map<String, Value>, ctx: &RequestContext) {
        prepare_parse_mode(ctx, data, "parse_mode", "entities");
    }
}
