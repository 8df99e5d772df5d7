/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::services::errors::{ApiError, FlickrError};
use crate::services::transport::ByteStream;
use futures::TryStreamExt;
use log::{trace, warn};
use quick_xml::DeError;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use serde::de::DeserializeOwned;

// Status and failure record common to every response
#[derive(Deserialize, Debug)]
struct Envelope {
    #[serde(rename = "@stat")]
    stat: Option<String>,

    err: Option<ErrorRecord>,
}

#[derive(Deserialize, Debug)]
struct ErrorRecord {
    #[serde(rename = "@code")]
    code: String,

    #[serde(rename = "@msg")]
    msg: String,
}

/// Drains `body` and decodes it.
pub async fn decode<T: DeserializeOwned>(body: ByteStream) -> Result<T, FlickrError> {
    let chunks: Vec<_> = body.try_collect().await.map_err(FlickrError::Body)?;
    let bytes = chunks.concat();
    trace!("Response body: {} bytes", bytes.len());
    decode_bytes(&bytes)
}

/// Decodes a complete response document.
///
/// `T` describes the children of a `<rsp stat="ok">` element. A
/// `stat="fail"` envelope becomes [`FlickrError::Api`]; anything that is not
/// a well-formed `rsp` envelope becomes a protocol error.
pub fn decode_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, FlickrError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| FlickrError::Protocol(format!("response is not UTF-8: {e}")))?;

    let root = root_name(text)?;
    if root != "rsp" {
        return Err(FlickrError::Protocol(format!(
            "expected <rsp> root, found <{root}>"
        )));
    }

    let envelope: Envelope = quick_xml::de::from_str(text)?;
    match envelope.stat.as_deref() {
        Some("ok") => Ok(quick_xml::de::from_str(text)?),
        Some("fail") => {
            let record = envelope
                .err
                .ok_or_else(|| FlickrError::Protocol("failure has no <err> element".into()))?;
            let code = record.code.trim().parse::<u32>().map_err(|_| {
                FlickrError::Protocol(format!("error code is not numeric: {:?}", record.code))
            })?;
            let err = ApiError::new(code, record.msg);
            warn!("API reported failure: {err}");
            Err(err.into())
        }
        Some(other) => Err(FlickrError::Protocol(format!("unknown stat {other:?}"))),
        None => Err(FlickrError::Protocol("<rsp> has no stat attribute".into())),
    }
}

// Local name of the document's first element
fn root_name(text: &str) -> Result<String, FlickrError> {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event().map_err(DeError::from)? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Event::Eof => return Err(FlickrError::Protocol("document has no elements".into())),
            _ => {}
        }
    }
}
