//! Data models for the platform API and its frontends.

mod competition;
mod user;

pub use competition::{CatalogMetadata, Competition, Match, PageData};
#[cfg(feature = "server")]
pub use user::User;
pub use user::{Credentials, Role, Session, UserInfo, ValidationError};
