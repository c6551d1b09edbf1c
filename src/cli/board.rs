//! Message board commands

use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use equinox::board;
use equinox::domain::MessageCategory;
use equinox::store::AccountStore;
use uuid::Uuid;

pub fn post(data_dir: &Path, email: &str, password: &str, message: &str, categories: &[String]) -> Result<()> {
    let mut session = super::sign_in(data_dir, email, password)?;
    if !session.account.is_coach() {
        bail!("only coaches can post board messages");
    }

    let categories = categories
        .iter()
        .map(|c| MessageCategory::from_str(c).map_err(anyhow::Error::msg))
        .collect::<Result<_>>()?;

    if !board::post(&mut session.account, message, categories) {
        bail!("message was empty, nothing posted");
    }

    let store = AccountStore::in_dir(data_dir);
    session.save(&store)?;
    println!("Message posted for clients.");
    Ok(())
}

pub fn list(data_dir: &Path) -> Result<()> {
    let accounts = AccountStore::in_dir(data_dir).load()?;
    let messages = board::list_for_clients(&accounts);

    if messages.is_empty() {
        println!("No coach messages available yet.");
        return Ok(());
    }
    for (coach, msg) in messages {
        let categories: Vec<_> = msg.categories.iter().map(ToString::to_string).collect();
        println!("[{}] Coach {}: {}", msg.timestamp, coach, msg.content);
        println!("    id: {}  ({})", msg.id, categories.join(", "));
        for reply in &msg.replies {
            println!("    - {} (by {} at {})", reply.content, reply.author_id, reply.timestamp);
        }
    }
    Ok(())
}

pub fn reply(data_dir: &Path, email: &str, password: &str, id: &str, content: &str) -> Result<()> {
    let session = super::sign_in(data_dir, email, password)?;
    let message_id = Uuid::parse_str(id).context("invalid message id")?;

    let store = AccountStore::in_dir(data_dir);
    let mut accounts = store.load()?;
    if !board::reply(&mut accounts, message_id, content, &session.account.user_id) {
        bail!("no message with id {} (or empty reply)", message_id);
    }
    store.save(&accounts)?;
    println!("Reply posted.");
    Ok(())
}
