//! # API crate — shared fullstack server functions for MatchUp
//!
//! This crate is the backbone of the MatchUp fullstack architecture. It
//! defines every Dioxus server function the web frontend calls, along with
//! the models and server-side modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`catalog`] | `server` | Static competition catalog: competitions, matches, metadata |
//! | [`users`] | `server` | In-memory account registry, Argon2 password hashing |
//! | [`models`] | — | Catalog and account models shared across the boundary |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with full
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that simply forwards the call over HTTP.
//!
//! - **Catalog**: `list_competitions`, `get_competition`,
//!   `list_competition_matches`, `get_catalog_metadata`, `get_page_data`
//! - **Accounts**: `register_user`, `login_user`
//!
//! Note that the SPA's own sign-in flow never calls the account endpoints:
//! the browser session is created locally from the login form. The endpoints
//! exist for the rest of the platform.

use dioxus::prelude::*;

#[cfg(feature = "server")]
pub mod catalog;
pub mod models;
#[cfg(feature = "server")]
pub mod users;

pub use models::{
    CatalogMetadata, Competition, Credentials, Match, PageData, Role, Session, UserInfo,
    ValidationError,
};

/// List the full competition catalog, in catalog order.
#[cfg(feature = "server")]
#[get("/api/competitions")]
pub async fn list_competitions() -> Result<Vec<Competition>, ServerFnError> {
    Ok(catalog::competitions())
}

#[cfg(not(feature = "server"))]
#[get("/api/competitions")]
pub async fn list_competitions() -> Result<Vec<Competition>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get a single competition by id.
#[cfg(feature = "server")]
#[get("/api/competitions/:id")]
pub async fn get_competition(id: i64) -> Result<Competition, ServerFnError> {
    catalog::competition(id).ok_or_else(|| ServerFnError::new("Competition not found"))
}

#[cfg(not(feature = "server"))]
#[get("/api/competitions/:id")]
pub async fn get_competition(id: i64) -> Result<Competition, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the matches scheduled for a competition.
#[cfg(feature = "server")]
#[get("/api/competitions/:id/matches")]
pub async fn list_competition_matches(id: i64) -> Result<Vec<Match>, ServerFnError> {
    let matches = catalog::matches_for(id);
    if matches.is_empty() {
        return Err(ServerFnError::new("No matches found for this competition"));
    }
    Ok(matches)
}

#[cfg(not(feature = "server"))]
#[get("/api/competitions/:id/matches")]
pub async fn list_competition_matches(id: i64) -> Result<Vec<Match>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get catalog-wide metadata.
#[cfg(feature = "server")]
#[get("/api/metadata")]
pub async fn get_catalog_metadata() -> Result<CatalogMetadata, ServerFnError> {
    Ok(catalog::metadata())
}

#[cfg(not(feature = "server"))]
#[get("/api/metadata")]
pub async fn get_catalog_metadata() -> Result<CatalogMetadata, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get the composed main-page payload.
#[cfg(feature = "server")]
#[get("/api/page")]
pub async fn get_page_data() -> Result<PageData, ServerFnError> {
    Ok(catalog::page_data())
}

#[cfg(not(feature = "server"))]
#[get("/api/page")]
pub async fn get_page_data() -> Result<PageData, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Register a new platform account.
#[cfg(feature = "server")]
#[post("/api/register")]
pub async fn register_user(
    username: String,
    email: String,
    phone: Option<String>,
    full_name: String,
    role: Role,
    post: Option<String>,
    password: String,
) -> Result<UserInfo, ServerFnError> {
    users::USERS
        .register(users::NewUser {
            username,
            email,
            phone,
            full_name,
            role,
            post,
            password,
        })
        .map_err(ServerFnError::new)
}

#[cfg(not(feature = "server"))]
#[post("/api/register")]
pub async fn register_user(
    username: String,
    email: String,
    phone: Option<String>,
    full_name: String,
    role: Role,
    post: Option<String>,
    password: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in to a platform account with an email or phone number.
#[cfg(feature = "server")]
#[post("/api/login")]
pub async fn login_user(login: String, password: String) -> Result<UserInfo, ServerFnError> {
    users::USERS
        .login(&login, &password)
        .map_err(ServerFnError::new)
}

#[cfg(not(feature = "server"))]
#[post("/api/login")]
pub async fn login_user(login: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
