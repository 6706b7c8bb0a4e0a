//! Write-side payload types for create and update calls.
//!
//! Optional fields are skipped during serialization, so an update payload
//! only touches what it sets.

use serde::{Deserialize, Serialize};

use super::models::{SpamAction, SpamAggressiveness};

/// How the initial mailbox password is established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordMethod {
    /// Migadu emails the user an invitation to pick a password.
    Invitation,
    /// The password is supplied in the create payload.
    Password,
}

/// Which password an identity authenticates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordUse {
    Custom,
    Mailbox,
}

/// Payload for creating a mailbox.
#[derive(Debug, Clone, Serialize)]
pub struct MailboxCreate {
    /// Display name of the mailbox.
    pub name: String,
    /// Local part of the new address.
    pub local_part: String,
    pub password_method: PasswordMethod,
    pub password: String,
    pub password_recovery_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_internal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expireable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_upon_expiry: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_send: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_receive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_access_imap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_access_pop3: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_access_managesieve: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorespond_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorespond_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorespond_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorespond_expires_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_denylist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_allowlist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_denylist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spam_action: Option<SpamAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spam_aggressiveness: Option<SpamAggressiveness>,
}

impl MailboxCreate {
    /// Payload with the required fields set and every knob left at the
    /// API's default.
    pub fn new(
        name: &str,
        local_part: &str,
        password_method: PasswordMethod,
        password: &str,
        password_recovery_email: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            local_part: local_part.to_string(),
            password_method,
            password: password.to_string(),
            password_recovery_email: password_recovery_email.to_string(),
            is_internal: None,
            expireable: None,
            expires_on: None,
            remove_upon_expiry: None,
            may_send: None,
            may_receive: None,
            may_access_imap: None,
            may_access_pop3: None,
            may_access_managesieve: None,
            autorespond_active: None,
            autorespond_body: None,
            autorespond_subject: None,
            autorespond_expires_on: None,
            recipient_denylist: None,
            sender_allowlist: None,
            sender_denylist: None,
            spam_action: None,
            spam_aggressiveness: None,
        }
    }
}

/// Partial payload for updating a mailbox.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MailboxUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_method: Option<PasswordMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_recovery_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_internal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expireable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_upon_expiry: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_send: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_receive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_access_imap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_access_pop3: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_access_managesieve: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorespond_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorespond_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorespond_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorespond_expires_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_denylist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_allowlist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_denylist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spam_action: Option<SpamAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spam_aggressiveness: Option<SpamAggressiveness>,
}

/// Payload for creating a send-as identity.
#[derive(Debug, Clone, Serialize)]
pub struct IdentityCreate {
    pub local_part: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_use: Option<PasswordUse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_send: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_receive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_access_imap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_access_pop3: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_access_managesieve: Option<bool>,
}

impl IdentityCreate {
    pub fn new(local_part: &str, name: &str) -> Self {
        Self {
            local_part: local_part.to_string(),
            name: name.to_string(),
            password: None,
            password_use: None,
            may_send: None,
            may_receive: None,
            may_access_imap: None,
            may_access_pop3: None,
            may_access_managesieve: None,
        }
    }
}

/// Partial payload for updating an identity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IdentityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_use: Option<PasswordUse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_send: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_receive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_access_imap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_access_pop3: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_access_managesieve: Option<bool>,
}

/// Payload for creating a forwarding.
#[derive(Debug, Clone, Serialize)]
pub struct ForwardingCreate {
    /// Destination address the mail is forwarded to.
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_upon_expiry: Option<bool>,
}

impl ForwardingCreate {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            is_active: None,
            expires_on: None,
            remove_upon_expiry: None,
        }
    }
}

/// Partial payload for updating a forwarding.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ForwardingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_upon_expiry: Option<bool>,
}

/// Payload for creating an alias.
#[derive(Debug, Clone, Serialize)]
pub struct AliasCreate {
    pub local_part: String,
    /// Mailbox local parts the alias delivers to.
    pub destinations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_internal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expireable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_upon_expiry: Option<bool>,
}

impl AliasCreate {
    pub fn new(local_part: &str, destinations: Vec<String>) -> Self {
        Self {
            local_part: local_part.to_string(),
            destinations,
            is_internal: None,
            expireable: None,
            expires_on: None,
            remove_upon_expiry: None,
        }
    }
}

/// Partial payload for updating an alias.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AliasUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_part: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_internal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_upon_expiry: Option<bool>,
}

/// Payload for creating a rewrite rule.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteCreate {
    pub name: String,
    /// Glob-style pattern matched against the local part.
    pub local_part_rule: String,
    /// Comma-separated destination local parts (e.g. `"aa,bb,cc"`).
    pub destinations: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_num: Option<u32>,
}

impl RewriteCreate {
    pub fn new(name: &str, local_part_rule: &str, destinations: &str) -> Self {
        Self {
            name: name.to_string(),
            local_part_rule: local_part_rule.to_string(),
            destinations: destinations.to_string(),
            order_num: None,
        }
    }
}

/// Partial payload for updating a rewrite rule.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RewriteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_part_rule: Option<String>,
    /// Comma-separated destination local parts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_num: Option<u32>,
}
