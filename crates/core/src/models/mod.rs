//! Data models for the Ambet GraphQL API and jackpot stats feed

mod boxes;
mod credential;
mod envelope;
mod jackpot;
mod lobby;
mod session;
mod shop;

pub use boxes::*;
pub use credential::*;
pub use envelope::*;
pub use jackpot::*;
pub use lobby::*;
pub use session::*;
pub use shop::*;
