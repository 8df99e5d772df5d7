/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::services::Perm;
use serde::de::Error;
use serde::Deserialize;
use std::str::FromStr;

// Parses perms, falling back to Unknown for values this crate does not know
pub fn from_perm<'de, D>(deserializer: D) -> Result<Perm, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(Perm::from_str(s.trim()).unwrap_or(Perm::Unknown))
}

// Parses "1"/"0" visibility flags
pub fn from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    match s.trim() {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(D::Error::custom(format!("not a flag: {other:?}"))),
    }
}

// Element text with surrounding whitespace removed
pub fn from_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(s.trim().to_owned())
}
