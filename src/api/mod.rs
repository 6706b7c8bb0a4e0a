//! Per-resource CRUD handles over the shared transport.
//!
//! Each handle borrows the client and issues one HTTP request per call:
//! `get`, `get_all`, `create`, `update`, `delete`. Collection responses
//! arrive wrapped in a single-key object (`{"mailboxes": [...]}`); the
//! handles unwrap it, degrading to an empty list when the key is absent.

mod alias;
mod forwarding;
mod identity;
mod mailbox;
pub mod models;
pub mod requests;
mod rewrite;

pub use alias::AliasApi;
pub use forwarding::ForwardingApi;
pub use identity::IdentityApi;
pub use mailbox::MailboxApi;
pub use rewrite::RewriteApi;
