/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::services::errors::FlickrError;
use crate::services::parsers::from_trimmed;
use crate::services::request::{API_KEY, API_SIG, AUTH_TOKEN, UPLOAD_ORIGIN};
use crate::services::signing::{ApiArgs, sign};
use crate::services::{Client, MediaType};
use reqwest::Request;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::collections::BTreeMap;
use url::Url;

/// Form part that carries the file
pub const PHOTO_PART: &str = "photo";

const ASYNC: &str = "async";

/// Ticket handed back for an asynchronous upload
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Ticket(#[serde(deserialize_with = "from_trimmed")] pub String);

#[derive(Deserialize, Debug)]
pub(crate) struct TicketResponse {
    #[serde(rename = "ticketid")]
    pub ticket: Ticket,
}

/// Builds the signed multipart POST for uploading `data` as `filename`.
///
/// The form holds the caller's arguments plus `api_key`, `auth_token` (only
/// when the client has one), `async=1` and `api_sig`, followed by the file
/// under [`PHOTO_PART`]. The content type is taken from the file extension.
///
/// Names and the file name are written into the part headers verbatim, so
/// ones containing a quote or line break are rejected.
pub fn upload_request(
    client: &Client,
    filename: &str,
    data: &[u8],
    args: &ApiArgs,
) -> Result<Request, FlickrError> {
    let media_type = MediaType::from_filename(filename).ok_or_else(|| {
        FlickrError::Validation(format!("cannot infer a content type for {filename:?}"))
    })?;
    check_header_safe("file name", filename)?;
    for name in args.keys() {
        check_header_safe("field name", name)?;
    }

    let mut args = args.clone();
    args.remove(API_SIG);
    args.insert(API_KEY.into(), client.api_key().into());
    match client.auth_token() {
        Some(token) => args.insert(AUTH_TOKEN.into(), token.into()),
        None => args.remove(AUTH_TOKEN),
    };
    args.insert(ASYNC.into(), "1".into());
    let sig = sign(client.api_secret(), &args);

    let mut fields: BTreeMap<String, String> = args.into_iter().collect();
    fields.insert(API_SIG.into(), sig);

    // Signed names must reach the service exactly as they were signed
    let form = fields
        .into_iter()
        .fold(Form::new().percent_encode_noop(), |form, (k, v)| form.text(k, v));
    let photo = Part::bytes(data.to_vec())
        .file_name(filename.to_owned())
        .mime_str(media_type.mime())?;
    let form = form.part(PHOTO_PART, photo);

    let url = Url::parse(UPLOAD_ORIGIN)?.join("/services/upload/")?;
    Ok(client.http().post(url).multipart(form).build()?)
}

fn check_header_safe(what: &str, value: &str) -> Result<(), FlickrError> {
    if value.contains(['"', '\r', '\n']) {
        return Err(FlickrError::Validation(format!(
            "{what} {value:?} cannot be sent in a form part header"
        )));
    }
    Ok(())
}
