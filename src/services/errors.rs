/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::services::transport::BoxError;
use num_enum::TryFromPrimitive;
use std::fmt;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("GET failed: {0}")]
    Get(BoxError),

    #[error("POST failed: {0}")]
    Post(BoxError),

    #[error("Reading response body failed: {0}")]
    Body(BoxError),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Malformed XML response: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("Unexpected API response: {0}")]
    Protocol(String),

    #[error("{0}")]
    Api(ApiError),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Request build error")]
    Request(#[from] reqwest::Error),
}

impl FlickrError {
    /// True when the request never produced a complete response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Get(_) | Self::Post(_) | Self::Body(_))
    }

    /// True when a response arrived but was not a document this crate understands.
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Xml(_) | Self::Protocol(_))
    }

    /// The failure reported by the service, if that is what this is.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ApiError> for FlickrError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

/// Failure record carried by a `stat="fail"` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: u32,
    pub message: String,
}

impl ApiError {
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Maps the numeric code onto the documented codes, if it is one of them.
    pub fn known_code(&self) -> Option<ApiErrorCode> {
        ApiErrorCode::try_from(self.code).ok()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error codes per the Flickr API documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCode {
    // Upload codes
    NoPhotoSpecified = 2,
    GeneralUploadFailure = 3,
    FilesizeWasZero = 4,
    FiletypeNotRecognised = 5,
    UploadLimitExceeded = 6,

    // Codes shared by every method
    InvalidSignature = 96,
    MissingSignature = 97,
    InvalidAuthToken = 98,
    InsufficientPermissions = 99,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    InvalidFrob = 108,
    FormatNotFound = 111,
    MethodNotFound = 112,
    BadUrl = 116,
}
