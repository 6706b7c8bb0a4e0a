//! Typed async client for the Migadu mail hosting REST API.
//!
//! The heart of the crate is [`UrlBuilder`], which assembles the hierarchical
//! resource URLs the API uses (`domains` → `mailboxes` → `identities` /
//! `forwardings`, or `domains` → `aliases` / `rewrites`), validating the
//! dependencies between path segments as they are added. Its inverse,
//! [`UrlBuilder::destructure`], decomposes a full URL back into its segment
//! list and rejects malformed input.
//!
//! On top of the builder sits [`Migadu`], the client entry point: it carries
//! the login credentials and issues one HTTP request per CRUD call through
//! per-resource handles.
//!
//! ```no_run
//! use migadu_api::Migadu;
//!
//! #[tokio::main]
//! async fn main() -> migadu_api::Result<()> {
//!     let client = Migadu::builder()
//!         .email("admin@example.org")
//!         .api_key("secret")
//!         .domain("example.org")
//!         .build()?;
//!
//!     for mailbox in client.mailbox().get_all().await? {
//!         println!("{}", mailbox.address);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod url_builder;

pub use client::{Migadu, MigaduBuilder};
pub use error::{Error, Result};
pub use url_builder::{Segment, SegmentName, UrlBuilder, API_BASE_URL};
