//! Ambet Networking - cookie reader, GraphQL client, and API wrappers

pub mod api;
pub mod cookies;
pub mod graphql;

pub use cookies::BrowserCookies;
pub use graphql::AmbetClient;
