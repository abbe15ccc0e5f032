use std::convert::Infallible;
use std::fmt;

use serde::Serialize;

use crate::error::PathError;
use crate::table::{RouteRecord, RouteTable, join_paths};

// ── Location parsing ─────────────────────────────────────────────────────

/// Split a location into its path segments. Query and fragment are dropped,
/// empty segments (`//`, trailing `/`) are skipped.
pub fn location_segments(location: &str) -> Result<Vec<&str>, PathError> {
    if location.is_empty() {
        return Err(PathError::Empty);
    }
    let path = location.split(['?', '#']).next().unwrap_or_default();
    if !path.starts_with('/') {
        return Err(PathError::NotAbsolute(location.to_owned()));
    }
    Ok(path.split('/').filter(|s| !s.is_empty()).collect())
}

// ── Resolution ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Matched,
    /// Nothing matched below the first `depth` records of the chain.
    NoMatch { depth: usize },
}

/// The records matched for one location, root first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a, E> {
    chain: Vec<&'a RouteRecord<E>>,
    outcome: Outcome,
}

/// Why a composition produced nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure<Er> {
    NoMatch,
    Render(Er),
}

impl<E> RouteTable<E> {
    /// Match `location` against the table. Siblings are tried in table
    /// order; once a parent matches, the walk commits to its children.
    pub fn resolve(&self, location: &str) -> Result<Resolution<'_, E>, PathError> {
        let segments = location_segments(location)?;
        let mut chain = Vec::new();
        let outcome = if match_level(self.records(), &segments, &mut chain) {
            Outcome::Matched
        } else {
            Outcome::NoMatch { depth: chain.len() }
        };
        let resolution = Resolution { chain, outcome };
        log::debug!(
            "resolved {location} -> {} ({:?})",
            resolution.matched_path(),
            resolution.outcome
        );
        Ok(resolution)
    }
}

fn match_level<'a, E>(
    records: &'a [RouteRecord<E>],
    remaining: &[&str],
    chain: &mut Vec<&'a RouteRecord<E>>,
) -> bool {
    for record in records {
        let Some(rest) = record.path.strip(remaining) else {
            continue;
        };
        if record.children.is_empty() {
            if rest.is_empty() {
                chain.push(record);
                return true;
            }
            continue;
        }
        chain.push(record);
        return match_level(&record.children, rest, chain);
    }
    false
}

impl<'a, E> Resolution<'a, E> {
    pub fn chain(&self) -> &[&'a RouteRecord<E>] {
        &self.chain
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_match(&self) -> bool {
        self.outcome == Outcome::Matched
    }

    /// Error element of the deepest matched record that declares one.
    pub fn nearest_error_element(&self) -> Option<&'a E> {
        self.chain
            .iter()
            .rev()
            .find_map(|record| record.error_element.as_ref())
    }

    /// Full pattern of the matched chain, e.g. `/docs/intro`.
    pub fn matched_path(&self) -> String {
        self.chain
            .iter()
            .fold(String::from("/"), |acc, record| join_paths(&acc, &record.path))
    }

    /// Fold the chain from leaf to root. `render` receives an element and
    /// the already-rendered content of its placeholder (`None` for leaves
    /// and error elements).
    ///
    /// A level whose render fails, or below which something failed, is
    /// replaced by its own error element when it declares one. Otherwise the
    /// failure moves up to the next ancestor. `Err` means nothing renders.
    pub fn compose<T, Er>(
        &self,
        mut render: impl FnMut(&E, Option<T>) -> Result<T, Er>,
    ) -> Result<T, Failure<Er>> {
        let mut state: Result<Option<T>, Failure<Er>> = match self.outcome {
            Outcome::Matched => Ok(None),
            Outcome::NoMatch { .. } => Err(Failure::NoMatch),
        };

        for record in self.chain.iter().rev() {
            let rendered = state.and_then(|slot| {
                render(&record.element, slot)
                    .map(Some)
                    .map_err(Failure::Render)
            });
            state = match (rendered, &record.error_element) {
                (Err(failure), Some(fallback)) => {
                    log::warn!(
                        "falling back at {} ({})",
                        record.path,
                        match failure {
                            Failure::NoMatch => "no match",
                            Failure::Render(_) => "render failed",
                        }
                    );
                    render(fallback, None).map(Some).map_err(Failure::Render)
                }
                (other, _) => other,
            };
        }

        match state {
            Ok(Some(rendered)) => Ok(rendered),
            Ok(None) => Err(Failure::NoMatch),
            Err(failure) => Err(failure),
        }
    }

    /// Compose into a plain data tree.
    pub fn render_tree(&self) -> Option<RenderTree<E>>
    where
        E: Clone,
    {
        self.compose(|element, outlet| {
            Ok::<_, Infallible>(RenderTree {
                element: element.clone(),
                outlet: outlet.map(Box::new),
            })
        })
        .ok()
    }
}

// ── Render tree ──────────────────────────────────────────────────────────

/// What a resolution renders, as data: each element with whatever fills its
/// content placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderTree<E> {
    pub element: E,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet: Option<Box<RenderTree<E>>>,
}

impl<E: fmt::Display> fmt::Display for RenderTree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element)?;
        if let Some(outlet) = &self.outlet {
            write!(f, "({outlet})")?;
        }
        Ok(())
    }
}
