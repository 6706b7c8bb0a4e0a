//! Hierarchical resource-path construction for the Migadu v1 API.
//!
//! [`UrlBuilder`] collects named path segments (`domains`, `mailboxes`,
//! `identities`, `forwardings`, `aliases`, `rewrites`), enforcing the
//! dependencies between them as they are added, and renders the canonical
//! URL for a resource. [`UrlBuilder::destructure`] runs the process in
//! reverse over an externally supplied URL.

mod destructure;
mod segment;

pub use segment::{Segment, SegmentName, SegmentStore};

use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};

/// Versioned API root every address is built under by default.
pub const API_BASE_URL: &str = "https://api.migadu.com/v1";

/// Version token expected as the first path component when destructuring.
const API_VERSION: &str = "v1";

/// Ancestor chain each renderable resource requires, in hierarchy order.
/// Every listed ancestor must carry a value at render time. New resource
/// kinds are added here, not as new code paths.
const ASSEMBLY_RULES: &[(SegmentName, &[SegmentName])] = &[
    (SegmentName::Mailboxes, &[SegmentName::Domains]),
    (
        SegmentName::Identities,
        &[SegmentName::Domains, SegmentName::Mailboxes],
    ),
    (
        SegmentName::Forwardings,
        &[SegmentName::Domains, SegmentName::Mailboxes],
    ),
    (SegmentName::Aliases, &[SegmentName::Domains]),
    (SegmentName::Rewrites, &[SegmentName::Domains]),
];

fn assembly_rule(resource: SegmentName) -> Option<&'static [SegmentName]> {
    ASSEMBLY_RULES
        .iter()
        .find(|(name, _)| *name == resource)
        .map(|(_, ancestors)| *ancestors)
}

/// Stateful builder for Migadu resource URLs.
///
/// Each instance owns its base URL and segment sequence exclusively; two
/// concurrent addressing sessions must not share one instance, because
/// upserts silently overwrite prior values.
///
/// ```
/// use migadu_api::{SegmentName, UrlBuilder};
///
/// let mut builder = UrlBuilder::default();
/// builder.domain("example.org")?.mailboxes(Some("john"))?;
/// assert_eq!(
///     builder.render(Some(SegmentName::Mailboxes), false)?,
///     "https://api.migadu.com/v1/domains/example.org/mailboxes/john",
/// );
/// # Ok::<(), migadu_api::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: String,
    segments: SegmentStore,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl UrlBuilder {
    /// Creates a builder rooted at `base_url` with no segments.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            segments: SegmentStore::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn segments(&self) -> &SegmentStore {
        &self.segments
    }

    /// Sets the domain the rest of the path hangs off.
    ///
    /// An empty or blank name is rejected here, at the point of insertion,
    /// never deferred to render time.
    pub fn domain(&mut self, name: &str) -> Result<&mut Self> {
        if name.trim().is_empty() {
            return Err(Error::EmptyArgument("Domain name"));
        }
        self.segments
            .upsert(SegmentName::Domains, Some(name.to_string()));
        Ok(self)
    }

    /// Selects a mailbox by local part, or the mailbox collection when
    /// `local_part` is `None`. Requires the domain to be set.
    pub fn mailboxes(&mut self, local_part: Option<&str>) -> Result<&mut Self> {
        self.require_prerequisite(SegmentName::Domains)?;
        Ok(self.mailboxes_unchecked(local_part))
    }

    /// Selects an identity within the current mailbox. Requires both the
    /// domain and the mailbox to be set.
    pub fn identities(&mut self, local_part: Option<&str>) -> Result<&mut Self> {
        self.require_prerequisite(SegmentName::Domains)?;
        self.require_prerequisite(SegmentName::Mailboxes)?;
        Ok(self.identities_unchecked(local_part))
    }

    /// Selects a forwarding address within the current mailbox. Requires
    /// both the domain and the mailbox to be set.
    pub fn forwardings(&mut self, address: Option<&str>) -> Result<&mut Self> {
        self.require_prerequisite(SegmentName::Domains)?;
        self.require_prerequisite(SegmentName::Mailboxes)?;
        Ok(self.forwardings_unchecked(address))
    }

    /// Selects an alias by local part. Requires the domain to be set.
    pub fn aliases(&mut self, local_part: Option<&str>) -> Result<&mut Self> {
        self.require_prerequisite(SegmentName::Domains)?;
        Ok(self.aliases_unchecked(local_part))
    }

    /// Selects a rewrite rule by name. Requires the domain to be set.
    pub fn rewrites(&mut self, name: Option<&str>) -> Result<&mut Self> {
        self.require_prerequisite(SegmentName::Domains)?;
        Ok(self.rewrites_unchecked(name))
    }

    // Trusted twins of the dependent mutators, for the CRUD layer: it sets
    // segment values programmatically on an endpoint whose ancestors the
    // assembler re-checks at render time anyway. Not part of the public API.

    pub(crate) fn mailboxes_unchecked(&mut self, local_part: Option<&str>) -> &mut Self {
        self.upsert(SegmentName::Mailboxes, local_part)
    }

    pub(crate) fn identities_unchecked(&mut self, local_part: Option<&str>) -> &mut Self {
        self.upsert(SegmentName::Identities, local_part)
    }

    pub(crate) fn forwardings_unchecked(&mut self, address: Option<&str>) -> &mut Self {
        self.upsert(SegmentName::Forwardings, address)
    }

    pub(crate) fn aliases_unchecked(&mut self, local_part: Option<&str>) -> &mut Self {
        self.upsert(SegmentName::Aliases, local_part)
    }

    pub(crate) fn rewrites_unchecked(&mut self, name: Option<&str>) -> &mut Self {
        self.upsert(SegmentName::Rewrites, name)
    }

    fn upsert(&mut self, name: SegmentName, value: Option<&str>) -> &mut Self {
        self.segments.upsert(name, value.map(str::to_string));
        self
    }

    fn require_prerequisite(&self, ancestor: SegmentName) -> Result<()> {
        if self.segments.has_value(ancestor) {
            return Ok(());
        }
        let label = match ancestor {
            SegmentName::Domains => "Domain",
            SegmentName::Mailboxes => "Mailbox",
            other => other.as_str(),
        };
        Err(Error::MissingPrerequisite(label))
    }

    /// Renders the URL for the current segment sequence.
    ///
    /// Without a `resource`, the base URL is concatenated with every stored
    /// segment in insertion order (`/name/value`, the value only when
    /// present); `collection_only` then suppresses the value of the last
    /// segment. With a `resource`, the fixed ancestor chain for that kind
    /// is rendered instead, failing when a mandatory segment is absent
    /// ([`Error::MissingPathItem`]) or carries no value
    /// ([`Error::MissingPathData`]).
    pub fn render(&self, resource: Option<SegmentName>, collection_only: bool) -> Result<String> {
        match resource {
            Some(kind) => self.render_resource(kind, collection_only),
            None => Ok(self.render_all(collection_only)),
        }
    }

    fn render_all(&self, collection_only: bool) -> String {
        let mut url = self.base_url.clone();
        let last = self.segments.len().checked_sub(1);
        for (index, segment) in self.segments.iter().enumerate() {
            url.push('/');
            url.push_str(segment.name.as_str());
            if segment.has_value() && !(collection_only && Some(index) == last) {
                if let Some(value) = segment.value.as_deref() {
                    url.push('/');
                    url.push_str(value);
                }
            }
        }
        url
    }

    fn render_resource(&self, resource: SegmentName, collection_only: bool) -> Result<String> {
        let ancestors = assembly_rule(resource)
            .ok_or_else(|| Error::UnsupportedResourceType(resource.to_string()))?;

        let mut url = self.base_url.clone();
        for &ancestor in ancestors {
            let segment = self.require_segment(ancestor, true)?;
            url.push('/');
            url.push_str(ancestor.as_str());
            if let Some(value) = segment.value.as_deref() {
                url.push('/');
                url.push_str(value);
            }
        }

        let own = self.require_segment(resource, !collection_only)?;
        url.push('/');
        url.push_str(resource.as_str());
        if !collection_only {
            if let Some(value) = own.value.as_deref() {
                url.push('/');
                url.push_str(value);
            }
        }

        trace!("assembled {resource} url: {url}");
        Ok(url)
    }

    /// Looks a segment up, insisting it exists and, when `value_required`,
    /// that it carries a non-empty value.
    fn require_segment(&self, name: SegmentName, value_required: bool) -> Result<&Segment> {
        let segment = self
            .segments
            .find(name)
            .ok_or(Error::MissingPathItem(name))?;
        if value_required && !segment.has_value() {
            return Err(Error::MissingPathData(name));
        }
        Ok(segment)
    }

    /// Breaks a full API URL down into its ordered segment list.
    ///
    /// The inverse of [`render`](Self::render): a well-formed URL yields the
    /// segments it was assembled from; anything malformed yields an empty
    /// list, never an error.
    ///
    /// ```
    /// use migadu_api::UrlBuilder;
    ///
    /// let segments = UrlBuilder::destructure(
    ///     "https://api.migadu.com/v1/domains/example.org/rewrites/demo",
    /// );
    /// assert_eq!(segments.len(), 2);
    /// ```
    pub fn destructure(full_url: &str) -> Vec<Segment> {
        destructure::destructure(full_url)
    }
}

/// Equivalent to rendering with no target resource.
impl fmt::Display for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_all(false))
    }
}
