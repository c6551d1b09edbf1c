//! Core domain types for Equinox

mod account;
mod badge;
mod challenge;
mod message;

pub use account::{Account, FontSize, Preferences, Role};
pub use badge::Badge;
pub use challenge::{normalize_body_part, Challenge, Quote, DIFFICULTIES};
pub use message::{now_timestamp, Message, MessageCategory, Reply};
