//! Equinox - coaching platform core
//!
//! Persistence and ranking layer for a single-tenant fitness-coaching
//! application: Coach and Client accounts, workout catalogs, randomized
//! programs, calendar tracking, badges, leaderboards and a coach
//! message board. Everything lives in flat JSON/CSV files under one
//! data directory; the UI layer on top calls in with plain data and
//! renders what comes back.

pub mod achievements;
pub mod board;
pub mod domain;
pub mod program;
pub mod ranking;
pub mod session;
pub mod store;

pub use domain::*;
pub use session::Session;
