//! Typed client for the `/api/v1` HTTP API.
//!
//! Build an [`api::helper::ApiClient`] pointing at a server, authenticate via
//! [`api::auth::login`] or [`api::auth::register`], then call the resource
//! functions with the token-carrying client:
//!
//! ```rust,ignore
//! use adopt_dont_shop::client::api::{self, helper::ApiClient};
//!
//! let client = ApiClient::new("http://localhost:8080");
//! let session = api::auth::login(&client, "user@example.com", "hunter22").await?;
//! let client = client.with_token(session.token);
//!
//! let feed = api::pet::discover(&client, None).await?;
//! ```

pub mod api;
pub mod model;
