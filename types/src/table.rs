use std::fmt;

use serde::Serialize;

use crate::error::RouteError;

// ── Path patterns ────────────────────────────────────────────────────────

/// The pattern half of a route record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutePath {
    /// Matches when no segment remains under the parent.
    Index,
    /// One or more literal segments, relative to the parent.
    /// `"/"` parses to zero segments.
    Literal { segments: Vec<String> },
}

impl RoutePath {
    pub fn literal(path: &str) -> Self {
        RoutePath::Literal {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        match self {
            RoutePath::Index => &[],
            RoutePath::Literal { segments } => segments,
        }
    }

    /// Consume this pattern's segments from the front of `remaining`.
    /// Segment comparison is ASCII case-insensitive.
    pub fn strip<'r, 's>(&self, remaining: &'r [&'s str]) -> Option<&'r [&'s str]> {
        match self {
            RoutePath::Index => remaining.is_empty().then_some(remaining),
            RoutePath::Literal { segments } => {
                if remaining.len() < segments.len() {
                    return None;
                }
                let (head, rest) = remaining.split_at(segments.len());
                head.iter()
                    .zip(segments)
                    .all(|(have, want)| have.eq_ignore_ascii_case(want))
                    .then_some(rest)
            }
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutePath::Index => f.write_str("(index)"),
            RoutePath::Literal { segments } if segments.is_empty() => f.write_str("/"),
            RoutePath::Literal { segments } => f.write_str(&segments.join("/")),
        }
    }
}

// ── Route records ────────────────────────────────────────────────────────

/// One entry of the route table: a pattern, what to render for it, an
/// optional fallback for its subtree, and nested records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRecord<E> {
    pub path: RoutePath,
    pub element: E,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_element: Option<E>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteRecord<E>>,
}

impl<E> RouteRecord<E> {
    pub fn index(element: E) -> Self {
        Self {
            path: RoutePath::Index,
            element,
            error_element: None,
            children: Vec::new(),
        }
    }

    pub fn literal(path: &str, element: E) -> Self {
        Self {
            path: RoutePath::literal(path),
            element,
            error_element: None,
            children: Vec::new(),
        }
    }

    pub fn with_error_element(mut self, element: E) -> Self {
        self.error_element = Some(element);
        self
    }

    pub fn with_children(mut self, children: Vec<RouteRecord<E>>) -> Self {
        self.children = children;
        self
    }

    pub fn is_index(&self) -> bool {
        matches!(self.path, RoutePath::Index)
    }
}

// ── Route table ──────────────────────────────────────────────────────────

/// Validated, immutable route table. Build it once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteTable<E> {
    records: Vec<RouteRecord<E>>,
}

impl<E> RouteTable<E> {
    pub fn new(records: Vec<RouteRecord<E>>) -> Result<Self, RouteError> {
        if records.is_empty() {
            return Err(RouteError::Empty);
        }
        validate_level(&records, "/")?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[RouteRecord<E>] {
        &self.records
    }
}

fn validate_level<E>(records: &[RouteRecord<E>], parent: &str) -> Result<(), RouteError> {
    if records.iter().filter(|r| r.is_index()).count() > 1 {
        return Err(RouteError::DuplicateIndex {
            parent: parent.to_owned(),
        });
    }

    for record in records {
        for segment in record.path.segments() {
            if segment.contains(['?', '#']) {
                return Err(RouteError::InvalidSegment {
                    path: record.path.to_string(),
                    segment: segment.clone(),
                });
            }
        }
        if record.is_index() && !record.children.is_empty() {
            return Err(RouteError::IndexWithChildren {
                parent: parent.to_owned(),
            });
        }
    }

    for (i, first) in records.iter().enumerate() {
        for second in &records[i + 1..] {
            if first.is_index() && second.is_index() {
                continue;
            }
            if overlaps(first, second) {
                return Err(RouteError::OverlappingPaths {
                    parent: parent.to_owned(),
                    first: first.path.to_string(),
                    second: second.path.to_string(),
                });
            }
        }
    }

    for record in records.iter().filter(|r| !r.children.is_empty()) {
        let child_parent = join_paths(parent, &record.path);
        validate_level(&record.children, &child_parent)?;
    }
    Ok(())
}

/// Two siblings overlap when some location could match both. A record
/// without children only matches its own segments exactly, while one with
/// children also claims every location below it.
fn overlaps<E>(a: &RouteRecord<E>, b: &RouteRecord<E>) -> bool {
    let (sa, sb) = (a.path.segments(), b.path.segments());
    let prefix_of = |short: &[String], long: &[String]| {
        short.len() <= long.len()
            && short
                .iter()
                .zip(long)
                .all(|(x, y)| x.eq_ignore_ascii_case(y))
    };
    if sa.len() == sb.len() && prefix_of(sa, sb) {
        return true;
    }
    (!a.children.is_empty() && prefix_of(sa, sb)) || (!b.children.is_empty() && prefix_of(sb, sa))
}

pub(crate) fn join_paths(parent: &str, path: &RoutePath) -> String {
    let mut joined = parent.trim_end_matches('/').to_owned();
    for segment in path.segments() {
        joined.push('/');
        joined.push_str(segment);
    }
    if joined.is_empty() {
        joined.push('/');
    }
    joined
}
