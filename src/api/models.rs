//! Data types returned by the Migadu API.

use serde::{Deserialize, Serialize};

/// What the spam filter does with a flagged message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpamAction {
    Folder,
    None,
    Subject,
    Drop,
}

/// How aggressively the spam filter classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpamAggressiveness {
    Default,
    MostPermissive,
    MorePermissive,
    Permissive,
    Strict,
    Stricter,
    Strictest,
}

/// A mailbox under a managed domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mailbox {
    /// Full address, local part and domain joined (e.g. `john@example.org`).
    pub address: String,
    /// Local part of the address, what comes before the `@`.
    pub local_part: String,
    /// Domain part of the address, what comes after the `@`.
    pub domain_name: String,
    /// Display name of the mailbox.
    pub name: String,
    pub is_active: bool,
    pub is_internal: bool,
    pub expireable: bool,
    pub expires_on: Option<String>,
    pub remove_upon_expiry: bool,
    pub activated_at: Option<String>,
    pub last_login_at: Option<String>,
    pub changed_at: Option<String>,
    pub autorespond_active: Option<bool>,
    /// Custom autoresponder message.
    pub autorespond_body: Option<String>,
    /// Subject line for the autoresponder (e.g. `Autoreply: {{subject}}`).
    pub autorespond_subject: Option<String>,
    pub autorespond_expires_on: Option<String>,
    #[serde(default)]
    pub delegations: Vec<String>,
    #[serde(default)]
    pub identities: Vec<Identity>,
    #[serde(default)]
    pub forwardings: Vec<Forwarding>,
    pub may_send: bool,
    pub may_receive: bool,
    pub may_access_imap: bool,
    pub may_access_pop3: bool,
    pub may_access_managesieve: bool,
    /// Address password recovery emails are sent to.
    pub password_recovery_email: Option<String>,
    #[serde(default)]
    pub recipient_denylist: Vec<String>,
    #[serde(default)]
    pub sender_allowlist: Vec<String>,
    #[serde(default)]
    pub sender_denylist: Vec<String>,
    pub spam_action: SpamAction,
    pub spam_aggressiveness: SpamAggressiveness,
    pub storage_usage: f64,
}

/// A send-as identity attached to a mailbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub local_part: String,
    #[serde(default)]
    pub domain: Option<String>,
    pub address: String,
    pub name: String,
    pub may_send: bool,
    pub may_receive: bool,
    pub may_access_imap: bool,
    pub may_access_pop3: bool,
    pub may_access_managesieve: bool,
}

/// An external forwarding target of a mailbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forwarding {
    /// Destination address the mail is forwarded to.
    pub address: String,
    pub blocked_at: Option<String>,
    pub confirmation_sent_at: Option<String>,
    pub confirmed_at: Option<String>,
    pub expires_on: Option<String>,
    pub is_active: bool,
    pub remove_upon_expiry: bool,
}

/// An address alias delivering to one or more mailboxes of the domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alias {
    pub address: String,
    pub local_part: String,
    pub domain_name: String,
    pub is_internal: bool,
    #[serde(default)]
    pub destinations: Vec<String>,
    pub expireable: bool,
    pub expires_on: Option<String>,
    pub remove_upon_expiry: bool,
}

/// A pattern-based rewrite rule of the domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rewrite {
    pub name: String,
    /// Glob-style pattern matched against the local part.
    pub local_part_rule: String,
    pub order_num: u32,
    /// Destination local parts. Written as a comma-separated string, but
    /// the API returns an array.
    #[serde(default)]
    pub destinations: Vec<String>,
}
