/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::services::PhotoSize;
use crate::services::parsers::from_flag;
use serde::{Deserialize, Serialize};

/// Holds a `<photo>` record as returned by photo listing methods such as
/// `flickr.photos.search`.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photos.search.html)
/// for more details on the individual fields.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Photo {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@owner")]
    pub owner: String,

    #[serde(rename = "@secret")]
    pub secret: String,

    #[serde(rename = "@server")]
    pub server: String,

    #[serde(rename = "@farm")]
    pub farm: String,

    #[serde(default, rename = "@title")]
    pub title: String,

    #[serde(default, rename = "@ispublic", deserialize_with = "from_flag")]
    pub is_public: bool,

    #[serde(default, rename = "@isfriend", deserialize_with = "from_flag")]
    pub is_friend: bool,

    #[serde(default, rename = "@isfamily", deserialize_with = "from_flag")]
    pub is_family: bool,
}

impl Photo {
    /// Static URL of this photo at the given size
    pub fn url(&self, size: PhotoSize) -> String {
        let suffix: &str = size.into();
        format!(
            "http://farm{}.static.flickr.com/{}/{}_{}_{}.jpg",
            self.farm, self.server, self.id, self.secret, suffix
        )
    }
}

/// One page of photos. The paging values are kept exactly as the service sent them.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PhotoList {
    #[serde(rename = "@page")]
    pub page: String,

    #[serde(rename = "@pages")]
    pub pages: String,

    #[serde(rename = "@perpage")]
    pub per_page: String,

    #[serde(rename = "@total")]
    pub total: String,

    #[serde(default, rename = "photo")]
    pub photos: Vec<Photo>,
}

// Payload of a photo listing response
#[derive(Deserialize, Debug)]
pub(crate) struct PhotosResponse {
    pub photos: PhotoList,
}
