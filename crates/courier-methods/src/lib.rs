//! # courier-methods
//!
//! Method descriptors for the Telegram Bot API. A descriptor turns itself
//! into a [`Request`] (endpoint name plus a flat JSON payload) and names
//! the type its successful response parses into. Sending the request is
//! left to a [`Transport`] implementation.

pub mod bot;
pub mod catalog;
pub mod method;
pub mod methods;
pub mod response;
pub mod traits;

pub use bot::Bot;
pub use method::{prepare_parse_mode, Request, TelegramMethod};
pub use methods::{CopyMessage, ForwardMessage, GetChat, PinChatMessage, SendMessage};
pub use response::{parse_response, Response, ResponseParameters};
pub use traits::Transport;
