//! High-level API wrappers over the raw GraphQL client
//!
//! Each submodule owns the operation documents for one widget surface
//! and maps the edge/node response wrappers into flat records.

mod boxes;
mod jackpot;
mod lobby;
mod sessions;
mod shop;

pub use boxes::*;
pub use jackpot::*;
pub use lobby::*;
pub use sessions::*;
pub use shop::*;
