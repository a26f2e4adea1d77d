//! Core types for the Gracenote identity client.
//!
//! This crate holds everything that does not touch the network:
//!
//! - **Types**: request/response envelopes and the client [`Identity`]
//! - **Endpoint**: [`ServiceEndpoint`] derivation from a client identifier
//! - **Codec**: XML [`encode`](codec::encode) / [`decode`](codec::decode)
//! - **Errors**: [`GracenoteError`]
//!
//! # Example
//!
//! ```rust
//! use gracenote_core::{codec, Queries, Query, ServiceEndpoint};
//!
//! let endpoint = ServiceEndpoint::resolve("123456");
//! assert_eq!(endpoint.host(), "c123456.web.cddbp.net");
//!
//! let body = codec::encode(&Queries::single(Query::register("123456"))).unwrap();
//! assert!(body.starts_with(b"<QUERIES>"));
//! ```

#![doc(html_root_url = "https://docs.rs/gracenote-core/0.1.0")]

pub mod codec;
mod endpoint;
mod error;
pub mod types;

pub use endpoint::{ServiceEndpoint, API_PATH, HOST_SUFFIX};
pub use error::{BoxError, GracenoteError, Result};
pub use types::*;
