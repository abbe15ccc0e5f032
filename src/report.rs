use route_types::{Outcome, Page, RenderTree, Resolution, RouteRecord};
use serde::Serialize;

// ── Resolve reports ──────────────────────────────────────────────────────

/// What one location resolves to, in printable form.
#[derive(Debug, Serialize)]
pub struct ResolveReport {
    pub location: String,
    pub matched_path: String,
    pub outcome: Outcome,
    pub chain: Vec<Page>,
    /// `None` when nothing renders.
    pub render: Option<RenderTree<Page>>,
}

impl ResolveReport {
    pub fn new(location: &str, resolution: &Resolution<'_, Page>) -> Self {
        Self {
            location: location.to_owned(),
            matched_path: resolution.matched_path(),
            outcome: resolution.outcome(),
            chain: resolution.chain().iter().map(|r| r.element).collect(),
            render: resolution.render_tree(),
        }
    }

    /// Two-line summary:
    ///
    /// ```text
    /// /nope -> PageNotFound
    ///     chain: MainLayout (no match below /)
    /// ```
    pub fn to_text(&self) -> String {
        let render = self
            .render
            .as_ref()
            .map_or_else(|| "(blank)".to_string(), ToString::to_string);
        let chain = self
            .chain
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(" > ");
        let status = match self.outcome {
            Outcome::Matched => format!("matched {}", self.matched_path),
            Outcome::NoMatch { .. } => format!("no match below {}", self.matched_path),
        };
        format!("{} -> {render}\n    chain: {chain} ({status})", self.location)
    }
}

// ── Route table tree ─────────────────────────────────────────────────────

fn format_record(record: &RouteRecord<Page>) -> String {
    match record.error_element {
        Some(fallback) => format!("{} -> {} [error: {fallback}]", record.path, record.element),
        None => format!("{} -> {}", record.path, record.element),
    }
}

/// Draw the table with box-drawing connectors, one record per line.
pub fn render_routes(records: &[RouteRecord<Page>]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format_record(record));
        out.push('\n');
        render_children(&record.children, "", &mut out);
    }
    out
}

fn render_children(children: &[RouteRecord<Page>], prefix: &str, out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let connector = if is_last { "└─ " } else { "├─ " };
        let continuation = if is_last { "   " } else { "│  " };

        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&format_record(child));
        out.push('\n');

        let sub_prefix = format!("{prefix}{continuation}");
        render_children(&child.children, &sub_prefix, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_types::{RouteTable, app_routes};

    #[test]
    fn test_root_report() {
        let table = app_routes().unwrap();
        let report = ResolveReport::new("/", &table.resolve("/").unwrap());
        assert_eq!(
            report.to_text(),
            "/ -> MainLayout(HomePage)\n    chain: MainLayout > HomePage (matched /)"
        );
    }

    #[test]
    fn test_unknown_report() {
        let table = app_routes().unwrap();
        let report = ResolveReport::new("/nope", &table.resolve("/nope").unwrap());
        assert_eq!(
            report.to_text(),
            "/nope -> PageNotFound\n    chain: MainLayout (no match below /)"
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"], serde_json::json!({ "kind": "no_match", "depth": 1 }));
        assert_eq!(json["render"], serde_json::json!({ "element": "PageNotFound" }));
    }

    #[test]
    fn test_blank_report() {
        let table = RouteTable::new(vec![RouteRecord::literal("/docs", Page::HomePage)]).unwrap();
        let report = ResolveReport::new("/", &table.resolve("/").unwrap());
        assert!(report.render.is_none());
        assert!(report.to_text().starts_with("/ -> (blank)"));
    }

    #[test]
    fn test_app_routes_tree() {
        let table = app_routes().unwrap();
        assert_eq!(
            render_routes(table.records()),
            "/ -> MainLayout [error: PageNotFound]\n└─ (index) -> HomePage\n"
        );
    }

    #[test]
    fn test_nested_tree_connectors() {
        let table = RouteTable::new(vec![
            RouteRecord::literal("/", Page::MainLayout).with_children(vec![
                RouteRecord::index(Page::HomePage),
                RouteRecord::literal("docs", Page::MainLayout)
                    .with_children(vec![RouteRecord::literal("intro", Page::HomePage)]),
            ]),
        ])
        .unwrap();
        assert_eq!(
            render_routes(table.records()),
            concat!(
                "/ -> MainLayout\n",
                "├─ (index) -> HomePage\n",
                "└─ docs -> MainLayout\n",
                "   └─ intro -> HomePage\n",
            )
        );
    }
}
