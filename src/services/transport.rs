/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::services::Client;
use crate::services::errors::FlickrError;
use crate::services::request::AUTH_TOKEN;
use bytes::Bytes;
use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use log::debug;
use reqwest::{Method, Request};
use url::Url;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Single-pass response body. Must be drained before being dropped.
pub type ByteStream = BoxStream<'static, Result<Bytes, BoxError>>;

/// Executes HTTP requests on behalf of a [`Client`].
///
/// Timeouts, retries and proxies are the implementation's concern. A
/// [`reqwest::Client`] is used unless a substitute is handed to
/// [`Client::with_transport`].
pub trait HttpTransport: Send + Sync {
    fn execute(&self, request: Request) -> BoxFuture<'_, Result<ByteStream, BoxError>>;
}

impl HttpTransport for reqwest::Client {
    fn execute(&self, request: Request) -> BoxFuture<'_, Result<ByteStream, BoxError>> {
        Box::pin(async move {
            let resp = reqwest::Client::execute(self, request)
                .await?
                .error_for_status()?;
            Ok::<_, BoxError>(
                resp.bytes_stream()
                    .map_err(|e| Box::new(e) as BoxError)
                    .boxed(),
            )
        })
    }
}

/// Issues a GET for `url` and hands back the body as received.
pub async fn fetch(client: &Client, url: Url) -> Result<ByteStream, FlickrError> {
    debug!("GET {}", redact(&url));
    client
        .transport()
        .execute(Request::new(Method::GET, url))
        .await
        .map_err(FlickrError::Get)
}

/// Sends a prebuilt POST request and hands back the body as received.
pub async fn post(client: &Client, request: Request) -> Result<ByteStream, FlickrError> {
    debug!("POST {}", redact(request.url()));
    client
        .transport()
        .execute(request)
        .await
        .map_err(FlickrError::Post)
}

// URL as it may appear in logs, with the auth token masked
fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == AUTH_TOKEN) {
        return url.to_string();
    }
    let mut masked = url.clone();
    masked
        .query_pairs_mut()
        .clear()
        .extend_pairs(url.query_pairs().map(|(k, v)| {
            let v = if k == AUTH_TOKEN { "xxx".into() } else { v };
            (k, v)
        }));
    masked.to_string()
}
