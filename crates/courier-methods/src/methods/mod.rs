//! The method descriptors shipped with Courier.

mod copy_message;
mod forward_message;
mod get_chat;
mod pin_chat_message;
mod send_message;

pub use copy_message::CopyMessage;
pub use forward_message::ForwardMessage;
pub use get_chat::GetChat;
pub use pin_chat_message::PinChatMessage;
pub use send_message::SendMessage;
