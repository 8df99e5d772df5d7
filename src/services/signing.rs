/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use std::collections::HashMap;

/// Named arguments sent with a request. Order is irrelevant to the caller,
/// [`sign`] imposes its own.
pub type ApiArgs = HashMap<String, String>;

/// Builds an [`ApiArgs`] from borrowed pairs.
pub fn api_args<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> ApiArgs {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

/// Computes the `api_sig` value for a set of arguments.
///
/// The digest input is the secret followed by every `name` + `value` pair with
/// names sorted byte-wise. Values are signed raw; any encoding happens later
/// when the URL or body is built.
pub fn sign(secret: &str, args: &ApiArgs) -> String {
    let mut names: Vec<&String> = args.keys().collect();
    names.sort();

    let mut buf = Vec::with_capacity(
        secret.len() + args.iter().map(|(k, v)| k.len() + v.len()).sum::<usize>(),
    );
    buf.extend_from_slice(secret.as_bytes());
    for name in names {
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(args[name].as_bytes());
    }

    format!("{:x}", md5::compute(&buf))
}
