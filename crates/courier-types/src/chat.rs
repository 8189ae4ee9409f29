//! The chat entity and the records it embeds.

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::object::TelegramObject;

/// This object represents a chat.
///
/// Docs: <https://core.telegram.org/bots/api#chat>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    /// Unique identifier for this chat. Fits in a signed 64-bit integer.
    pub id: i64,
    /// Chat type: "private", "group", "supergroup", or "channel".
    #[serde(rename = "type")]
    pub chat_type: String,
    /// Title, for supergroups, channels and group chats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// First name of the other party in a private chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Returned only in `getChat`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<ChatPhoto>,
    /// Returned only in `getChat`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Returned only in `getChat`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Returned only in `getChat`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<String>,
    /// The most recent pinned message. Returned only in `getChat`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
    /// Default member permissions, for groups and supergroups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<ChatPermissions>,
    /// Minimum delay in seconds between consecutive messages of an
    /// unprivileged member, for supergroups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow_mode_delay: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_set_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_set_sticker_set: Option<bool>,
    /// Discussion group of a channel, or the channel of a discussion group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_chat_id: Option<i64>,
    /// For supergroups, the location the supergroup is connected to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ChatLocation>,
}

impl Chat {
    /// Minimal chat with only the required fields set.
    pub fn new(id: i64, chat_type: impl Into<String>) -> Self {
        Self {
            id,
            chat_type: chat_type.into(),
            title: None,
            username: None,
            first_name: None,
            last_name: None,
            photo: None,
            bio: None,
            description: None,
            invite_link: None,
            pinned_message: None,
            permissions: None,
            slow_mode_delay: None,
            sticker_set_name: None,
            can_set_sticker_set: None,
            linked_chat_id: None,
            location: None,
        }
    }

    /// Whether this is a group or supergroup.
    pub fn is_group(&self) -> bool {
        matches!(self.chat_type.as_str(), "group" | "supergroup")
    }

    /// Display name: the title for groups and channels, otherwise the
    /// first and last name of the other party.
    pub fn full_name(&self) -> Option<String> {
        if let Some(ref title) = self.title {
            return Some(title.clone());
        }
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }
}

/// This object represents a chat photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPhoto {
    pub small_file_id: String,
    pub small_file_unique_id: String,
    pub big_file_id: String,
    pub big_file_unique_id: String,
}

/// Actions a non-administrator member is allowed to take in a chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPermissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_messages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_media_messages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_polls: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_other_messages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_add_web_page_previews: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_change_info: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_invite_users: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
}

/// The location a supergroup is connected to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatLocation {
    pub location: Location,
    /// As defined by the chat owner.
    pub address: String,
}

/// A point on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
    /// Radius of uncertainty in meters, 0-1500.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_period: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<i64>,
}

impl TelegramObject for Chat {}
impl TelegramObject for ChatPhoto {}
impl TelegramObject for ChatPermissions {}
impl TelegramObject for ChatLocation {}
impl TelegramObject for Location {}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::error::CourierError;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_private_chat() {
        let chat = Chat::from_wire(json!({"id": 42, "type": "private", "first_name": "Ann"}))
            .unwrap();
        assert_eq!(chat.id, 42);
        assert_eq!(chat.chat_type, "private");
        assert_eq!(chat.first_name.as_deref(), Some("Ann"));
        assert!(chat.title.is_none());
        assert!(chat.username.is_none());
        assert!(chat.photo.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let chat = Chat::from_wire(json!({
            "id": -100123,
            "type": "supergroup",
            "title": "Rustaceans",
            "has_protected_content": true,
            "active_usernames": ["rust"]
        }))
        .unwrap();
        assert_eq!(chat.title.as_deref(), Some("Rustaceans"));
        assert!(chat.is_group());
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let err = Chat::from_wire(json!({"type": "private"})).unwrap_err();
        match err {
            CourierError::MalformedResponse(msg) => assert!(msg.contains("id"), "got: {msg}"),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_json_type_is_malformed() {
        let err = Chat::from_wire(json!({"id": "forty-two", "type": "private"})).unwrap_err();
        assert!(matches!(err, CourierError::MalformedResponse(_)));

        let err = Chat::from_json_str(r#"{"id": 1, "type": "group", "slow_mode_delay": "10"}"#)
            .unwrap_err();
        assert!(matches!(err, CourierError::MalformedResponse(_)));
    }

    #[test]
    fn test_required_zero_values_are_emitted() {
        let mut chat = Chat::new(0, "");
        chat.title = Some(String::new());
        let wire = chat.to_wire().unwrap();
        assert_eq!(wire, json!({"id": 0, "type": "", "title": ""}));
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let wire = Chat::new(7, "channel").to_wire().unwrap();
        let obj = wire.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(!obj.contains_key("title"));
        assert!(!obj.contains_key("pinned_message"));
    }

    #[test]
    fn test_full_chat_round_trip() {
        let payload = json!({
            "id": -1001234567890i64,
            "type": "supergroup",
            "title": "Meetup",
            "username": "meetup",
            "photo": {
                "small_file_id": "s1",
                "small_file_unique_id": "su1",
                "big_file_id": "b1",
                "big_file_unique_id": "bu1"
            },
            "description": "Monthly meetup",
            "invite_link": "https://t.me/joinchat/abc",
            "permissions": {"can_send_messages": true, "can_pin_messages": false},
            "slow_mode_delay": 30,
            "sticker_set_name": "meetup_pack",
            "can_set_sticker_set": true,
            "linked_chat_id": -1009876543210i64,
            "location": {
                "location": {"longitude": 13.4, "latitude": 52.52},
                "address": "Berlin"
            }
        });
        let chat = Chat::from_wire(payload.clone()).unwrap();
        assert_eq!(chat.to_wire().unwrap(), payload);
        assert_eq!(Chat::from_wire(chat.to_wire().unwrap()).unwrap(), chat);
        assert_eq!(chat.permissions.as_ref().unwrap().can_pin_messages, Some(false));
    }

    #[test]
    fn test_pinned_message_nests_a_chat() {
        let chat = Chat::from_wire(json!({
            "id": 100,
            "type": "group",
            "title": "Team",
            "pinned_message": {
                "message_id": 5,
                "date": 1600000000,
                "chat": {"id": 100, "type": "group", "title": "Team"},
                "text": "read the rules"
            }
        }))
        .unwrap();
        let pinned = chat.pinned_message.as_ref().unwrap();
        assert_eq!(pinned.chat.id, 100);
        assert!(pinned.chat.pinned_message.is_none());
        assert_eq!(pinned.text.as_deref(), Some("read the rules"));
        assert_eq!(Chat::from_wire(chat.to_wire().unwrap()).unwrap(), chat);
    }

    #[test]
    fn test_full_name() {
        let mut chat = Chat::new(1, "private");
        assert_eq!(chat.full_name(), None);
        chat.first_name = Some("Ann".into());
        assert_eq!(chat.full_name().as_deref(), Some("Ann"));
        chat.last_name = Some("Lee".into());
        assert_eq!(chat.full_name().as_deref(), Some("Ann Lee"));

        let mut group = Chat::new(-5, "group");
        group.title = Some("Team".into());
        assert_eq!(group.full_name().as_deref(), Some("Team"));
        assert!(group.is_group());
        assert!(!chat.is_group());
    }
}
