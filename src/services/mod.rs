/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod auth;
pub mod client;
pub mod errors;
mod parsers;
pub mod photo;
pub mod properties;
pub mod request;
pub mod response;
pub mod signing;
pub mod transport;
pub mod upload;

pub use auth::*;
pub use client::*;
pub use errors::*;
pub use photo::*;
pub use properties::*;
pub use request::{REST_ORIGIN, UPLOAD_ORIGIN, signed_url};
pub use response::{decode, decode_bytes};
pub use signing::*;
pub use transport::*;
pub use upload::*;
