use thiserror::Error;

/// Rejected route table shapes. Returned by [`crate::RouteTable::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route table has no top-level records")]
    Empty,

    /// Two siblings would both match the same location.
    #[error("sibling routes `{first}` and `{second}` overlap under `{parent}`")]
    OverlappingPaths {
        parent: String,
        first: String,
        second: String,
    },

    #[error("more than one index route under `{parent}`")]
    DuplicateIndex { parent: String },

    #[error("index route under `{parent}` declares children")]
    IndexWithChildren { parent: String },

    #[error("invalid path segment `{segment}` in `{path}`")]
    InvalidSegment { path: String, segment: String },
}

/// A location string that cannot be resolved at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("location is empty")]
    Empty,

    #[error("location `{0}` does not start at the root `/`")]
    NotAbsolute(String),
}
