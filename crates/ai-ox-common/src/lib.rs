#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Shared HTTP client abstractions for provider clients
//!
//! This crate holds the transport plumbing every provider crate repeats: the
//! bearer header set, the three body encodings (JSON, URL-encoded form,
//! multipart) and the success/failure decision on responses.

pub mod body;
pub mod error;
pub mod headers;
pub mod request_builder;

pub use body::{FilePart, FormBody, MultipartBody, MultipartField, RequestBody};
pub use error::CommonRequestError;
pub use headers::{ContentType, build_headers};
pub use request_builder::{Endpoint, HttpMethod, RequestBuilder, RequestConfig};
