use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Names of the path segments understood by the Migadu v1 API.
///
/// The set is closed: every addressable resource lives under `domains`,
/// and the remaining five names select a resource collection within that
/// hierarchy. Any other path component is a usage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentName {
    Domains,
    Mailboxes,
    Identities,
    Forwardings,
    Aliases,
    Rewrites,
}

impl SegmentName {
    /// The literal path component for this segment name.
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentName::Domains => "domains",
            SegmentName::Mailboxes => "mailboxes",
            SegmentName::Identities => "identities",
            SegmentName::Forwardings => "forwardings",
            SegmentName::Aliases => "aliases",
            SegmentName::Rewrites => "rewrites",
        }
    }

    /// Maps a raw path component to a segment name, if it is one.
    pub fn from_path_component(component: &str) -> Option<Self> {
        match component {
            "domains" => Some(SegmentName::Domains),
            "mailboxes" => Some(SegmentName::Mailboxes),
            "identities" => Some(SegmentName::Identities),
            "forwardings" => Some(SegmentName::Forwardings),
            "aliases" => Some(SegmentName::Aliases),
            "rewrites" => Some(SegmentName::Rewrites),
            _ => None,
        }
    }
}

impl fmt::Display for SegmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path_component(s).ok_or_else(|| Error::UnsupportedResourceType(s.to_string()))
    }
}

/// A single named component of a resource path, optionally carrying the
/// value that selects one item within the collection (e.g. `domains` with
/// value `example.org`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub name: SegmentName,
    pub value: Option<String>,
}

impl Segment {
    pub fn new(name: SegmentName, value: Option<String>) -> Self {
        Self { name, value }
    }

    /// True iff the segment carries a non-empty value.
    pub fn has_value(&self) -> bool {
        matches!(self.value.as_deref(), Some(value) if !value.is_empty())
    }
}

/// Ordered collection of path segments.
///
/// Insertion order is preserved and names are unique: re-adding a segment
/// with an existing name overwrites its value in place rather than
/// appending a duplicate.
#[derive(Debug, Clone, Default)]
pub struct SegmentStore {
    segments: Vec<Segment>,
}

impl SegmentStore {
    /// Inserts a segment, or overwrites the value of the segment already
    /// holding that name. Position is preserved on overwrite.
    pub fn upsert(&mut self, name: SegmentName, value: Option<String>) {
        for segment in &mut self.segments {
            if segment.name == name {
                segment.value = value;
                return;
            }
        }
        self.segments.push(Segment::new(name, value));
    }

    /// Linear lookup by name.
    pub fn find(&self, name: SegmentName) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.name == name)
    }

    /// True iff a segment with that name exists and carries a non-empty value.
    pub fn has_value(&self, name: SegmentName) -> bool {
        self.find(name).map_or(false, Segment::has_value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}
