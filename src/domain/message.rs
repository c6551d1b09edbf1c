use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category tags a coach can attach to a board message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MessageCategory {
    General,
    Urgent,
    Info,
}

impl std::str::FromStr for MessageCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "General" => Ok(MessageCategory::General),
            "Urgent" => Ok(MessageCategory::Urgent),
            "Info" => Ok(MessageCategory::Info),
            other => Err(format!("unknown message category: {}", other)),
        }
    }
}

impl std::fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageCategory::General => write!(f, "General"),
            MessageCategory::Urgent => write!(f, "Urgent"),
            MessageCategory::Info => write!(f, "Info"),
        }
    }
}

/// A single reply under a board message. Replies are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub content: String,
    pub author_id: String,
    pub timestamp: String,
}

/// A coach-authored board message with threaded replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Stable identifier for reply targeting. Records persisted before
    /// ids existed get a fresh one assigned on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub content: String,

    /// ISO-8601, second precision, set at creation
    pub timestamp: String,

    pub author_id: String,

    pub categories: BTreeSet<MessageCategory>,

    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl Message {
    /// Create a message stamped with the current time.
    pub fn new(content: &str, author_id: &str, categories: BTreeSet<MessageCategory>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.to_string(),
            timestamp: now_timestamp(),
            author_id: author_id.to_string(),
            categories,
            replies: Vec::new(),
        }
    }

    /// Append a reply stamped with the current time.
    pub fn add_reply(&mut self, content: &str, author_id: &str) {
        self.replies.push(Reply {
            content: content.to_string(),
            author_id: author_id.to_string(),
            timestamp: now_timestamp(),
        });
    }
}

/// Current local time as an ISO-8601 string with second precision.
///
/// Stored as a plain string so timestamps round-trip byte-for-byte and
/// sort lexicographically in chronological order.
pub fn now_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_accumulate_in_order() {
        let mut msg = Message::new("Leg day moved", "user_coach", [MessageCategory::Info].into());
        msg.add_reply("Got it", "user_a");
        msg.add_reply("See you there", "user_b");

        assert_eq!(msg.replies.len(), 2);
        assert_eq!(msg.replies[0].author_id, "user_a");
        assert_eq!(msg.replies[1].author_id, "user_b");
    }

    #[test]
    fn legacy_message_without_id_gets_one() {
        let json = r#"{
            "content": "Welcome",
            "timestamp": "2024-03-01T09:00:00",
            "author_id": "user_coach",
            "categories": ["General"]
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(!msg.id.is_nil());
        assert!(msg.replies.is_empty());
    }

    #[test]
    fn timestamp_has_second_precision() {
        let ts = now_timestamp();
        // YYYY-MM-DDTHH:MM:SS
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[10..11], "T");
    }
}
