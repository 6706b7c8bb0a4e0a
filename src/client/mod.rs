//! Client entry point: credentials, the shared HTTP handle, and the
//! per-resource API accessors.

pub(crate) mod request;
pub(crate) mod transport;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::debug;

use crate::api::{AliasApi, ForwardingApi, IdentityApi, MailboxApi, RewriteApi};
use crate::error::{Error, Result};
use crate::url_builder::{UrlBuilder, API_BASE_URL};

/// Entry point for everything this crate can do against the Migadu API.
///
/// Holds the login credentials and the HTTP client shared by every resource
/// handle. The API is stateless per request and so is this client: each CRUD
/// call addresses the API through its own fresh [`UrlBuilder`], so concurrent
/// calls on one client never observe each other's path state.
///
/// ```no_run
/// # async fn run() -> migadu_api::Result<()> {
/// let client = migadu_api::Migadu::builder()
///     .email("admin@example.org")
///     .api_key("secret")
///     .domain("example.org")
///     .build()?;
/// let mailbox = client.mailbox().get("john").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Migadu {
    email: String,
    api_key: String,
    domain_name: Option<String>,
    base_url: String,
    basic_auth: String,
    http: reqwest::Client,
}

impl Migadu {
    /// Creates a client with the given login email and API key and no
    /// default domain. Use [`Migadu::builder`] to set one.
    pub fn new(email: &str, api_key: &str) -> Result<Self> {
        Self::builder().email(email).api_key(api_key).build()
    }

    pub fn builder() -> MigaduBuilder {
        MigaduBuilder::default()
    }

    /// The login email used for authentication.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The default domain resource calls are scoped to, when configured.
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }

    /// The API key used for authentication.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Precomputed `base64(email:api_key)` credential for Basic auth.
    pub(crate) fn basic_auth(&self) -> &str {
        &self.basic_auth
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Fresh URL builder rooted at this client's base URL, with the default
    /// domain already applied when one is configured.
    pub(crate) fn endpoint(&self) -> Result<UrlBuilder> {
        let mut endpoint = UrlBuilder::new(&self.base_url);
        if let Some(domain) = &self.domain_name {
            endpoint.domain(domain)?;
        }
        Ok(endpoint)
    }

    /// Mailbox CRUD under the configured domain.
    pub fn mailbox(&self) -> MailboxApi<'_> {
        MailboxApi::new(self)
    }

    /// Identity CRUD; each call names the owning mailbox.
    pub fn identity(&self) -> IdentityApi<'_> {
        IdentityApi::new(self)
    }

    /// Forwarding CRUD; each call names the owning mailbox.
    pub fn forwarding(&self) -> ForwardingApi<'_> {
        ForwardingApi::new(self)
    }

    /// Alias CRUD under the configured domain.
    pub fn alias(&self) -> AliasApi<'_> {
        AliasApi::new(self)
    }

    /// Rewrite-rule CRUD under the configured domain.
    pub fn rewrite(&self) -> RewriteApi<'_> {
        RewriteApi::new(self)
    }
}

/// Builder for [`Migadu`].
#[derive(Debug, Clone, Default)]
pub struct MigaduBuilder {
    email: Option<String>,
    api_key: Option<String>,
    domain_name: Option<String>,
    base_url: Option<String>,
}

impl MigaduBuilder {
    /// The email used to log in to Migadu.
    pub fn email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// The API key generated from the Migadu admin panel.
    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Default domain every resource call is scoped to.
    pub fn domain(mut self, domain_name: &str) -> Self {
        self.domain_name = Some(domain_name.to_string());
        self
    }

    /// Overrides the API root, e.g. to point the client at a mock server.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    /// Validates the credentials and assembles the client.
    pub fn build(self) -> Result<Migadu> {
        let email = non_blank(self.email, "Email")?;
        let api_key = non_blank(self.api_key, "API key")?;
        let domain_name = self
            .domain_name
            .map(|domain| non_blank(Some(domain), "Domain name"))
            .transpose()?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| API_BASE_URL.to_string());
        let basic_auth = BASE64.encode(format!("{email}:{api_key}"));

        debug!("created migadu client for {email} against {base_url}");
        Ok(Migadu {
            email,
            api_key,
            domain_name,
            base_url,
            basic_auth,
            http: reqwest::Client::new(),
        })
    }
}

fn non_blank(value: Option<String>, label: &'static str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(Error::EmptyArgument(label)),
    }
}
