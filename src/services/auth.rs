/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::services::Perm;
use crate::services::parsers::{from_perm, from_trimmed};
use serde::{Deserialize, Serialize};

/// Holds the `<auth>` block returned by `flickr.auth.getToken` and
/// `flickr.auth.checkToken`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Auth {
    #[serde(deserialize_with = "from_trimmed")]
    pub token: String,

    #[serde(deserialize_with = "from_perm")]
    pub perms: Perm,

    pub user: AuthUser,
}

/// The user an auth token was issued for
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    #[serde(rename = "@nsid")]
    pub nsid: String,

    #[serde(default, rename = "@username")]
    pub username: String,

    #[serde(default, rename = "@fullname")]
    pub fullname: String,
}

/// Short-lived value exchanged for a token during authorization
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Frob(#[serde(deserialize_with = "from_trimmed")] pub String);

#[derive(Deserialize, Debug)]
pub(crate) struct AuthResponse {
    pub auth: Auth,
}

#[derive(Deserialize, Debug)]
pub(crate) struct FrobResponse {
    pub frob: Frob,
}
