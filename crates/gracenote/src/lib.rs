//! Rust client for the Gracenote identity endpoint.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gracenote::IdentityClient;
//!
//! fn main() -> gracenote::Result<()> {
//!     let mut client = IdentityClient::new()?;
//!
//!     // First run: obtain a user ID and store it somewhere durable
//!     let user_id = client.register("123456", "ABCDEF")?;
//!     println!("Registered user: {user_id}");
//!
//!     // Later runs: reuse the stored user ID without a round trip
//!     client.authenticate("123456", "ABCDEF", &user_id);
//!     assert!(client.is_authenticated());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/gracenote/0.1.0")]

// Re-export core types
pub use gracenote_core::*;

// Re-export client
pub use gracenote_client::{
    ClientConfig, HttpTransport, IdentityClient, IdentityClientBuilder, Transport,
    DEFAULT_TIMEOUT,
};
