/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr
//!
//! This Flickr library was created for working with the Flickr REST interface.
//!
//! For further details on the API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - Request signing (`api_sig`) for every call
//! - Authorization
//!     - Build the URL a user visits to grant permissions
//!     - Frob/token exchange and token checks
//! - Photo search
//! - Photo upload (asynchronous, returns a ticket)
//! - Lower level interface for handling the raw communication
//!
//! *Requests are signed with the API secret. The secret itself is never sent.*
//!
//! *If you want to use this library for more than what is currently implemented,
//! [`services::Client::call`] performs any signed REST call and decodes the
//! payload into any `serde::Deserialize` type describing the `<rsp>` element*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! flickr = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Flickr prior to using the API**
//!
//! ```rust,no_run
//! use flickr::services::{api_args, Client, Creds, PhotoSize};
//!
//!async fn list_photo_urls(
//!    api_key: &str,
//!    api_secret: &str,
//!    auth_token: &str,
//!) -> anyhow::Result<Vec<String>> {
//!    // The auth token is obtained via the frob exchange, see Client::auth_url
//!    let client = Client::new(Creds::from_tokens(api_key, api_secret, Some(auth_token)));
//!
//!    let page = client
//!        .search(&api_args([("user_id", "me"), ("per_page", "10")]))
//!        .await?;
//!
//!    Ok(page.photos.iter().map(|p| p.url(PhotoSize::Medium640)).collect())
//!}
//! ```
//!
pub mod services;
