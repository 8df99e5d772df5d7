/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};

/// Permission level requested during authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Perm {
    Unknown,
    Read,
    Write,
    Delete,
}

impl Perm {
    /// False for [`Perm::Unknown`], which only stands in for unrecognized replies.
    pub fn is_requestable(self) -> bool {
        !matches!(self, Perm::Unknown)
    }
}

/// Static image sizes served for a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum PhotoSize {
    #[strum(to_string = "s")]
    Square,
    #[strum(to_string = "t")]
    Thumbnail,
    #[strum(to_string = "m")]
    Small,
    #[strum(to_string = "-")]
    Medium500,
    #[strum(to_string = "z")]
    Medium640,
    #[strum(to_string = "b")]
    Large,
}

/// Upload content types, keyed by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum MediaType {
    #[strum(serialize = "jpg", serialize = "jpeg", serialize = "jpe", to_string = "image/jpeg")]
    Jpeg,
    #[strum(serialize = "png", to_string = "image/png")]
    Png,
    #[strum(serialize = "gif", to_string = "image/gif")]
    Gif,
    #[strum(serialize = "bmp", to_string = "image/bmp")]
    Bmp,
    #[strum(serialize = "tif", serialize = "tiff", to_string = "image/tiff")]
    Tiff,
    #[strum(serialize = "mp4", to_string = "video/mp4")]
    Mp4,
    #[strum(serialize = "m4v", to_string = "video/x-m4v")]
    M4v,
    #[strum(serialize = "mov", to_string = "video/quicktime")]
    QuickTime,
    #[strum(serialize = "avi", to_string = "video/x-msvideo")]
    Avi,
    #[strum(serialize = "mpg", serialize = "mpeg", to_string = "video/mpeg")]
    Mpeg,
    #[strum(serialize = "wmv", to_string = "video/x-ms-wmv")]
    Wmv,
    #[strum(serialize = "3gp", to_string = "video/3gpp")]
    ThreeGp,
}

impl MediaType {
    /// Infers the content type from the file name's extension alone.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (stem, ext) = filename.rsplit_once('.')?;
        if stem.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        ext.parse().ok()
    }

    pub fn mime(self) -> &'static str {
        self.into()
    }
}
