/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::services::auth::{AuthResponse, FrobResponse};
use crate::services::errors::FlickrError;
use crate::services::photo::PhotosResponse;
use crate::services::request::{AUTH_TOKEN, signed_url};
use crate::services::response::decode;
use crate::services::signing::{ApiArgs, api_args};
use crate::services::transport::{HttpTransport, fetch, post};
use crate::services::upload::{Ticket, TicketResponse, upload_request};
use crate::services::{Auth, Frob, Perm, PhotoList};
use log::debug;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Credentials used to sign every request.
///
/// The API key/secret come from the Flickr app garden. The auth token is
/// optional and is obtained through the frob exchange.
#[derive(Default, Clone)]
pub struct Creds {
    api_key: String,
    api_secret: String,
    auth_token: Option<String>,
}

impl Creds {
    pub fn from_tokens(api_key: &str, api_secret: &str, auth_token: Option<&str>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            auth_token: auth_token.filter(|t| !t.is_empty()).map(str::to_owned),
        }
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("api_key", &"xxx")
            .field("api_secret", &"xxx")
            .field("auth_token", &self.auth_token.as_ref().map(|_| "xxx"))
            .finish()
    }
}

/// Signs, sends and decodes requests to the Flickr API.
///
/// Cloning is cheap; clones share the transport but each carries its own
/// copy of the credentials.
#[derive(Clone)]
pub struct Client {
    creds: Creds,
    transport: Arc<dyn HttpTransport>,

    // Builds requests; only `transport` sends them
    http: reqwest::Client,
}

impl Client {
    /// Creates a client backed by a default [`reqwest::Client`]
    pub fn new(creds: Creds) -> Self {
        let http = reqwest::Client::new();
        Self {
            creds,
            transport: Arc::new(http.clone()),
            http,
        }
    }

    /// Creates a client that sends its requests through `transport`
    pub fn with_transport(creds: Creds, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            creds,
            transport,
            http: reqwest::Client::new(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.creds.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        &self.creds.api_secret
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.creds.auth_token.as_deref()
    }

    /// Sets the token used for authenticated calls. An empty token clears it.
    pub fn set_auth_token(&mut self, token: &str) {
        self.creds.auth_token = Some(token).filter(|t| !t.is_empty()).map(str::to_owned);
    }

    pub fn clear_auth_token(&mut self) {
        self.creds.auth_token = None;
    }

    pub(crate) fn transport(&self) -> &dyn HttpTransport {
        self.transport.as_ref()
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// URL the user visits to grant this application `perm`
    pub fn auth_url(&self, perm: Perm) -> Result<Url, FlickrError> {
        if !perm.is_requestable() {
            return Err(FlickrError::Validation(format!(
                "{perm:?} is not a permission that can be requested"
            )));
        }
        let args = api_args([("perms", <&str>::from(perm))]);
        signed_url(self.api_secret(), self.api_key(), "auth", &args)
    }

    /// URL for a signed call to the REST `method`.
    ///
    /// The client's auth token is included when one is set and left out
    /// entirely otherwise.
    pub fn rest_url(&self, method: &str, args: &ApiArgs) -> Result<Url, FlickrError> {
        let mut args = args.clone();
        args.insert("method".into(), method.into());
        match self.auth_token() {
            Some(token) => args.insert(AUTH_TOKEN.into(), token.into()),
            None => args.remove(AUTH_TOKEN),
        };
        signed_url(self.api_secret(), self.api_key(), "rest", &args)
    }

    /// Performs a signed GET of the REST `method` and decodes the payload.
    ///
    /// `T` is deserialized from the `<rsp>` element, so its fields name the
    /// children of a successful response.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        args: &ApiArgs,
    ) -> Result<T, FlickrError> {
        let url = self.rest_url(method, args)?;
        debug!("Calling {method}");
        decode(fetch(self, url).await?).await
    }

    /// Starts the authorization exchange
    pub async fn get_frob(&self) -> Result<String, FlickrError> {
        self.call::<FrobResponse>("flickr.auth.getFrob", &ApiArgs::new())
            .await
            .map(|FrobResponse { frob: Frob(frob) }| frob)
    }

    /// Exchanges an authorized frob for a token.
    ///
    /// The returned token is not stored; pass it to [`Client::set_auth_token`].
    pub async fn get_token(&self, frob: &str) -> Result<Auth, FlickrError> {
        self.call::<AuthResponse>("flickr.auth.getToken", &api_args([("frob", frob)]))
            .await
            .map(|rsp| rsp.auth)
    }

    /// Reports what the current auth token grants
    pub async fn check_token(&self) -> Result<Auth, FlickrError> {
        if self.auth_token().is_none() {
            return Err(FlickrError::Validation("no auth token is set".into()));
        }
        self.call::<AuthResponse>("flickr.auth.checkToken", &ApiArgs::new())
            .await
            .map(|rsp| rsp.auth)
    }

    /// Searches photos with `flickr.photos.search`
    pub async fn search(&self, args: &ApiArgs) -> Result<PhotoList, FlickrError> {
        self.call::<PhotosResponse>("flickr.photos.search", args)
            .await
            .map(|rsp| rsp.photos)
    }

    /// Uploads a photo and returns the ticket for the asynchronous upload.
    ///
    /// Fails before anything is sent if no content type can be inferred from
    /// `filename`.
    pub async fn upload(
        &self,
        filename: &str,
        data: &[u8],
        args: &ApiArgs,
    ) -> Result<String, FlickrError> {
        let req = upload_request(self, filename, data, args)?;
        debug!("Uploading {filename} ({} bytes)", data.len());
        decode::<TicketResponse>(post(self, req).await?)
            .await
            .map(|TicketResponse { ticket: Ticket(id) }| id)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("creds", &self.creds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_masks_credentials() {
        let creds = Creds::from_tokens("key123", "secret456", Some("token789"));
        let out = format!("{:?}", Client::new(creds));
        assert!(!out.contains("key123"));
        assert!(!out.contains("secret456"));
        assert!(!out.contains("token789"));
    }

    #[test]
    fn empty_token_means_unauthenticated() {
        let mut client = Client::new(Creds::from_tokens("k", "s", Some("")));
        assert_eq!(client.auth_token(), None);
        client.set_auth_token("abc");
        assert_eq!(client.auth_token(), Some("abc"));
        client.set_auth_token("");
        assert_eq!(client.auth_token(), None);
    }

    #[test]
    fn unknown_perm_is_never_requested() {
        let client = Client::new(Creds::from_tokens("k", "s", None));
        let err = client.auth_url(Perm::Unknown).unwrap_err();
        assert!(matches!(err, FlickrError::Validation(_)));

        let url = client.auth_url(Perm::Delete).unwrap();
        assert!(url.query_pairs().any(|(k, v)| k == "perms" && v == "delete"));
    }
}
