//! Coach message board: posts, deletion, threaded replies

use uuid::Uuid;

use crate::domain::{Account, Message, MessageCategory};
use crate::store::Accounts;
use std::collections::BTreeSet;

/// Append a new board message to the coach's list, stamped now.
///
/// Returns false without touching the account when the content trims
/// to nothing or no category was chosen; callers must not persist in
/// that case.
pub fn post(account: &mut Account, content: &str, categories: BTreeSet<MessageCategory>) -> bool {
    let content = content.trim();
    if content.is_empty() || categories.is_empty() {
        return false;
    }
    let message = Message::new(content, &account.user_id, categories);
    tracing::debug!("Posted message {} by {}", message.id, account.user_id);
    account.messages.push(message);
    true
}

/// Delete the author's own message by display position.
///
/// The board shows messages most-recent-first, so display index 0 is
/// the last element of the list.
pub fn delete(account: &mut Account, display_index: usize) -> Option<Message> {
    let len = account.messages.len();
    if display_index >= len {
        return None;
    }
    let real_index = len - 1 - display_index;
    Some(account.messages.remove(real_index))
}

/// Append a reply to the message with the given id, wherever it lives
/// in the account map. Returns false if the content trims to nothing
/// or no message carries the id.
pub fn reply(
    accounts: &mut Accounts,
    message_id: Uuid,
    content: &str,
    author_id: &str,
) -> bool {
    let content = content.trim();
    if content.is_empty() {
        return false;
    }
    for (_, account) in accounts.iter_mut() {
        if let Some(message) = account.messages.iter_mut().find(|m| m.id == message_id) {
            message.add_reply(content, author_id);
            return true;
        }
    }
    tracing::debug!("Reply target {} not found", message_id);
    false
}

/// All coach messages paired with their author's username, newest
/// first, for the client-facing board.
pub fn list_for_clients<'a>(accounts: &'a Accounts) -> Vec<(&'a str, &'a Message)> {
    let mut messages: Vec<(&str, &Message)> = accounts
        .coaches()
        .flat_map(|(_, account)| {
            account
                .messages
                .iter()
                .map(move |m| (account.username.as_str(), m))
        })
        .collect();

    // ISO timestamps sort lexicographically in time order
    messages.sort_by(|a, b| b.1.timestamp.cmp(&a.1.timestamp));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn coach() -> Account {
        Account::new("pat", Role::Coach, "x".to_string())
    }

    #[test]
    fn post_rejects_blank_content() {
        let mut account = coach();
        assert!(!post(&mut account, "   ", [MessageCategory::General].into()));
        assert!(!post(&mut account, "hello", BTreeSet::new()));
        assert!(account.messages.is_empty());

        assert!(post(&mut account, "  hello  ", [MessageCategory::General].into()));
        assert_eq!(account.messages[0].content, "hello");
    }

    #[test]
    fn delete_maps_display_index_to_list_order() {
        let mut account = coach();
        post(&mut account, "first", [MessageCategory::General].into());
        post(&mut account, "second", [MessageCategory::Info].into());
        post(&mut account, "third", [MessageCategory::Urgent].into());

        // Display index 0 is the newest post
        let removed = delete(&mut account, 0).unwrap();
        assert_eq!(removed.content, "third");

        // Display index 1 now refers to the oldest remaining
        let removed = delete(&mut account, 1).unwrap();
        assert_eq!(removed.content, "first");

        assert!(delete(&mut account, 5).is_none());
    }

    #[test]
    fn reply_finds_message_by_id_across_accounts() {
        let mut accounts = Accounts::new();
        let mut author = coach();
        post(&mut author, "gym closed friday", [MessageCategory::Urgent].into());
        let id = author.messages[0].id;
        accounts.insert("pat@x.example".to_string(), author);
        accounts.insert(
            "kim@x.example".to_string(),
            Account::new("kim", Role::Client, "x".to_string()),
        );

        assert!(reply(&mut accounts, id, "thanks for the heads up", "user_kim"));
        assert!(!reply(&mut accounts, id, "   ", "user_kim"));
        assert!(!reply(&mut accounts, Uuid::new_v4(), "lost", "user_kim"));

        let msg = &accounts.get("pat@x.example").unwrap().messages[0];
        assert_eq!(msg.replies.len(), 1);
        assert_eq!(msg.replies[0].author_id, "user_kim");
    }

    #[test]
    fn client_listing_is_newest_first_across_coaches() {
        let mut accounts = Accounts::new();

        let mut a = coach();
        a.messages.push(Message {
            timestamp: "2024-01-01T10:00:00".to_string(),
            ..Message::new("oldest", "user_pat", [MessageCategory::General].into())
        });
        a.messages.push(Message {
            timestamp: "2024-01-03T10:00:00".to_string(),
            ..Message::new("newest", "user_pat", [MessageCategory::General].into())
        });
        accounts.insert("pat@x.example".to_string(), a);

        let mut b = Account::new("sam", Role::Coach, "x".to_string());
        b.messages.push(Message {
            timestamp: "2024-01-02T10:00:00".to_string(),
            ..Message::new("middle", "user_sam", [MessageCategory::Info].into())
        });
        accounts.insert("sam@x.example".to_string(), b);

        let listing = list_for_clients(&accounts);
        let contents: Vec<_> = listing.iter().map(|(_, m)| m.content.as_str()).collect();
        assert_eq!(contents, ["newest", "middle", "oldest"]);
        assert_eq!(listing[1].0, "sam");
    }
}
