/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use bytes::Bytes;
use flickr::services::{BoxError, ByteStream, Client, Creds, HttpTransport};
use futures::StreamExt;
use futures::future::BoxFuture;
use http_body_util::BodyDataStream;
use reqwest::Request;
use reqwest::header::CONTENT_TYPE;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub(crate) const API_KEY: &str = "87337fd784";
#[allow(dead_code)]
pub(crate) const SECRET: &str = "sf97838dijd";

/// What a FakeTransport hands back for the next request
#[allow(dead_code)]
enum Reply {
    Body(Vec<u8>),
    Error(String),
}

/// Records every request and answers each one with the same canned reply.
#[allow(dead_code)]
pub(crate) struct FakeTransport {
    reply: Reply,
    requests: Mutex<Vec<Request>>,
}

#[allow(dead_code)]
impl FakeTransport {
    pub(crate) fn replying(body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Body(body.as_bytes().to_vec()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn failing(cause: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Error(cause.to_owned()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requests(&self) -> std::sync::MutexGuard<'_, Vec<Request>> {
        self.requests.lock().unwrap()
    }
}

impl HttpTransport for FakeTransport {
    fn execute(&self, request: Request) -> BoxFuture<'_, Result<ByteStream, BoxError>> {
        self.requests.lock().unwrap().push(request);
        let reply = match &self.reply {
            Reply::Body(body) => {
                // Split in two so consumers have to join chunks
                let (head, tail) = body.split_at(body.len() / 2);
                let chunks: Vec<Result<Bytes, BoxError>> = vec![
                    Ok(Bytes::copy_from_slice(head)),
                    Ok(Bytes::copy_from_slice(tail)),
                ];
                Ok(futures::stream::iter(chunks).boxed())
            }
            Reply::Error(cause) => Err(BoxError::from(cause.clone())),
        };
        Box::pin(async move { reply })
    }
}

#[allow(dead_code)]
pub(crate) fn client_with(transport: Arc<FakeTransport>, auth_token: Option<&str>) -> Client {
    Client::with_transport(Creds::from_tokens(API_KEY, SECRET, auth_token), transport)
}

/// A file part pulled out of a multipart body
#[allow(dead_code)]
#[derive(Debug)]
pub(crate) struct FilePart {
    pub(crate) name: String,
    pub(crate) filename: String,
    pub(crate) content_type: String,
    pub(crate) data: Vec<u8>,
}

/// Takes the multipart body out of `req` and splits it into text fields and file parts.
#[allow(dead_code)]
pub(crate) async fn read_multipart(
    req: &mut Request,
) -> anyhow::Result<(HashMap<String, Vec<String>>, Vec<FilePart>)> {
    let content_type = req.headers()[CONTENT_TYPE].to_str()?.to_owned();
    let boundary = multer::parse_boundary(&content_type)?;
    let body = req
        .body_mut()
        .take()
        .ok_or_else(|| anyhow::anyhow!("request has no body"))?;
    let mut multipart = multer::Multipart::new(BodyDataStream::new(body), boundary);

    let mut fields: HashMap<String, Vec<String>> = HashMap::new();
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let name = field
            .name()
            .ok_or_else(|| anyhow::anyhow!("part has no name"))?
            .to_owned();
        let filename = field.file_name().map(str::to_owned);
        match filename {
            Some(filename) => {
                let content_type = field
                    .content_type()
                    .map(|m| m.to_string())
                    .unwrap_or_default();
                files.push(FilePart {
                    name,
                    filename,
                    content_type,
                    data: field.bytes().await?.to_vec(),
                });
            }
            None => fields.entry(name).or_default().push(field.text().await?),
        }
    }
    Ok((fields, files))
}

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn get_live_creds() -> anyhow::Result<Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;
    let auth_token = std::env::var("FLICKR_AUTH_TOKEN").ok();

    Ok(Creds::from_tokens(
        &api_key,
        &api_secret,
        auth_token.as_deref(),
    ))
}
