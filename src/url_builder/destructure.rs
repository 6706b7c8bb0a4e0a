//! Inverse of the assembler: decompose a full URL into its segment list.

use tracing::trace;
use url::Url;

use super::segment::{Segment, SegmentName, SegmentStore};
use super::API_VERSION;

/// What the walker expects from the next path component.
enum WalkState {
    /// The component must be one of the known segment names.
    Name,
    /// The component is consumed as the value of the preceding name.
    Value(SegmentName),
}

/// Breaks a full API URL down into its ordered segment list.
///
/// All-or-nothing: blank input, an unparseable URL, a missing or mismatched
/// version token, or any component that is not a known segment name where a
/// name is expected discards the whole parse and yields an empty list. This
/// never errors, since it is meant to sift untrusted external input.
pub(super) fn destructure(full_url: &str) -> Vec<Segment> {
    if full_url.trim().is_empty() {
        return Vec::new();
    }

    let parsed = match Url::parse(full_url) {
        Ok(parsed) => parsed,
        Err(e) => {
            trace!("input is not a parseable URL ({e}): {full_url}");
            return Vec::new();
        }
    };

    // Only the path component matters. Raw empty components (consecutive
    // slashes) are dropped before the walk, which shifts whatever follows
    // them into the wrong position and lets the name check below reject
    // the input as a whole.
    let mut components = parsed
        .path()
        .split('/')
        .filter(|component| !component.is_empty());

    if components.next() != Some(API_VERSION) {
        trace!("missing or unsupported api version token: {full_url}");
        return Vec::new();
    }

    let mut store = SegmentStore::default();
    let mut state = WalkState::Name;

    for component in components {
        state = match state {
            WalkState::Name => match SegmentName::from_path_component(component) {
                Some(name) => WalkState::Value(name),
                None => {
                    trace!("unknown path component [{component}], discarding parse");
                    return Vec::new();
                }
            },
            // A repeated name overwrites its earlier value in place.
            WalkState::Value(name) => {
                store.upsert(name, Some(component.to_string()));
                WalkState::Name
            }
        };
    }

    // A trailing name with no value addresses the collection.
    if let WalkState::Value(name) = state {
        store.upsert(name, None);
    }

    store.into_segments()
}
