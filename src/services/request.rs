/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::services::errors::FlickrError;
use crate::services::signing::{ApiArgs, sign};
use std::collections::BTreeMap;
use url::Url;

// Origin for REST and auth requests
pub const REST_ORIGIN: &str = "http://www.flickr.com";

// Origin for photo uploads
pub const UPLOAD_ORIGIN: &str = "http://api.flickr.com";

pub(crate) const API_KEY: &str = "api_key";
pub(crate) const API_SIG: &str = "api_sig";
pub(crate) const AUTH_TOKEN: &str = "auth_token";

/// Builds `http://<host>/services/<method>/?<args>` with `api_key` and `api_sig` added.
///
/// The signature is computed over the raw values; form-urlencoding is only
/// applied when the query string is serialized. Pairs are emitted in name order.
/// `method` always stays a single path segment.
pub fn signed_url(
    secret: &str,
    api_key: &str,
    method: &str,
    args: &ApiArgs,
) -> Result<Url, FlickrError> {
    let mut args = args.clone();
    args.remove(API_SIG);
    args.insert(API_KEY.into(), api_key.into());
    let sig = sign(secret, &args);

    let mut query: BTreeMap<&str, &str> =
        args.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    query.insert(API_SIG, sig.as_str());

    let mut url = Url::parse(REST_ORIGIN)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .clear()
        .push("services")
        .push(method)
        .push("");
    url.query_pairs_mut().extend_pairs(query);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signing::api_args;

    const SECRET: &str = "sf97838dijd";

    #[test]
    fn builds_sorted_encoded_query() {
        let args = api_args([("abc", "abc def"), ("xyz", "xyz"), ("123", "98765")]);
        let url = signed_url(SECRET, "apap983 key", "srv", &args).unwrap();

        let mut signed = args.clone();
        signed.insert("api_key".into(), "apap983 key".into());
        let sig = sign(SECRET, &signed);

        assert_eq!(
            url.as_str(),
            format!(
                "http://www.flickr.com/services/srv/?123=98765&abc=abc+def&api_key=apap983+key&api_sig={sig}&xyz=xyz"
            )
        );
    }

    #[test]
    fn signature_survives_a_round_trip() {
        let args = api_args([("text", "a&b=c d"), ("tags", "über,cat"), ("x", "")]);
        let url = signed_url(SECRET, "key", "rest", &args).unwrap();

        let mut parsed: ApiArgs = url.query_pairs().into_owned().collect();
        let embedded = parsed.remove("api_sig").unwrap();
        assert_eq!(parsed.get("text").map(String::as_str), Some("a&b=c d"));
        assert_eq!(sign(SECRET, &parsed), embedded);
    }

    #[test]
    fn caller_cannot_override_api_key() {
        let args = api_args([("api_key", "spoofed")]);
        let url = signed_url(SECRET, "real", "rest", &args).unwrap();
        let keys: Vec<_> = url
            .query_pairs()
            .filter(|(k, _)| k == "api_key")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(keys, vec!["real".to_string()]);
    }

    #[test]
    fn method_cannot_escape_its_path_segment() {
        let args = api_args([("a", "1")]);
        let url = signed_url(SECRET, "real", "rest/?api_key=evil&x", &args).unwrap();

        assert_eq!(url.path(), "/services/rest%2F%3Fapi_key=evil&x/");
        let mut parsed: ApiArgs = url.query_pairs().into_owned().collect();
        assert_eq!(url.query_pairs().filter(|(k, _)| k == "api_key").count(), 1);
        assert_eq!(parsed.get("api_key").map(String::as_str), Some("real"));
        let embedded = parsed.remove("api_sig").unwrap();
        assert_eq!(sign(SECRET, &parsed), embedded);
    }

    #[test]
    fn caller_supplied_signature_is_replaced() {
        let args = api_args([("api_sig", "forged"), ("a", "1")]);
        let url = signed_url(SECRET, "key", "rest", &args).unwrap();

        let mut parsed: ApiArgs = url.query_pairs().into_owned().collect();
        let embedded = parsed.remove("api_sig").unwrap();
        assert_ne!(embedded, "forged");
        assert_eq!(sign(SECRET, &parsed), embedded);
    }
}
