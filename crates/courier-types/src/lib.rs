//! # courier-types
//!
//! Schema entities returned by (or sent to) the Telegram Bot API.
//! Docs: <https://core.telegram.org/bots/api#available-types>
//!
//! Every entity is a plain serde record whose field list doubles as its
//! wire description: `rename` pins the documented key, `default` resolves
//! missing optional keys to unset, `skip_serializing_if` keeps unset keys
//! off the wire.

pub mod chat;
pub mod chat_id;
pub mod field;
pub mod markup;
pub mod message;
pub mod object;
pub mod time;
pub mod user;

pub use chat::{Chat, ChatLocation, ChatPermissions, ChatPhoto, Location};
pub use chat_id::ChatId;
pub use field::Field;
pub use markup::{
    ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup,
    ReplyKeyboardRemove, ReplyMarkup,
};
pub use message::{Message, MessageEntity, MessageId, PhotoSize};
pub use object::TelegramObject;
pub use time::Timestamp;
pub use user::User;
