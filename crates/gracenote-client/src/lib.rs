//! Blocking HTTP client for the Gracenote identity endpoint.
//!
//! This crate provides [`IdentityClient`], which registers a new user or
//! adopts an existing one, and the [`Transport`] capability it sends through.

#![doc(html_root_url = "https://docs.rs/gracenote-client/0.1.0")]

mod client;
mod config;
mod transport;

pub use client::{IdentityClient, IdentityClientBuilder};
pub use config::*;
pub use gracenote_core::{GracenoteError, Result};
pub use transport::{HttpTransport, Transport};
