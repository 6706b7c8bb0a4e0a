//! Error types for the Migadu client.

use thiserror::Error;

use crate::url_builder::SegmentName;

/// Result type alias for Migadu client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while addressing or calling the Migadu API.
///
/// Path-builder failures (`EmptyArgument` through `UnsupportedResourceType`)
/// are raised at the point of violation and propagate unchanged; only
/// [`UrlBuilder::destructure`](crate::UrlBuilder::destructure) degrades to an
/// empty result instead of erroring, since it validates untrusted input.
#[derive(Debug, Error)]
pub enum Error {
    /// A required string argument was empty or blank.
    #[error("{0} cannot be empty")]
    EmptyArgument(&'static str),

    /// A dependent path mutator ran before its ancestor segment was set.
    #[error("{0} is not set")]
    MissingPrerequisite(&'static str),

    /// The assembler could not find an expected path segment.
    #[error("the path item [{0}] is not present")]
    MissingPathItem(SegmentName),

    /// The assembler found the segment but it carries no value.
    #[error("the path item [{0}] has no value")]
    MissingPathData(SegmentName),

    /// The assembler was asked to render an unknown resource type.
    #[error("unsupported resource type [{0}]")]
    UnsupportedResourceType(String),

    /// Request parameters failed pre-dispatch validation.
    #[error("parameter error: {0}")]
    InvalidRequest(String),

    /// The HTTP transport failed before the API produced a response.
    #[error("http request failed")]
    Request(#[from] reqwest::Error),

    /// The API reported a server-side failure (HTTP 500).
    #[error("migadu api error on {method} {path}: {message}")]
    Api {
        message: String,
        path: String,
        method: String,
    },

    /// The addressed resource path does not exist (the API answers 400).
    #[error("the path [{path}] does not exist")]
    NotFound { path: String, method: String },

    /// The API answered with a status this client does not model.
    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// A request body could not be serialized to JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
