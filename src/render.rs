//! Plain-text rendering of fetched graph data for the terminal.

use depview_core::{short_name, Dependency, EdgeView, Node, NodeView, Properties, ResultPage};

fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_properties(out: &mut String, keys: &[&str], properties: &Properties) {
    if keys.is_empty() {
        return;
    }
    let width = keys.iter().map(|k| k.len()).max().unwrap_or(0);
    out.push_str("\nProperties\n");
    for key in keys {
        let value = properties.get(*key).map(value_text).unwrap_or_default();
        push_line(out, &format!("  {key:<width$}  {value}"));
    }
}

fn push_relation(out: &mut String, title: &str, deps: &[Dependency], show_source: bool) {
    if deps.is_empty() {
        return;
    }
    push_line(out, &format!("\n{title} ({})", deps.len()));
    for dep in deps {
        let other = if show_source { &dep.source_name } else { &dep.target_name };
        push_line(out, &format!("  {:<12} {}  [{}]", dep.type_name, other, short_name(other)));
    }
}

/// Node header, properties and all four relation lists.
pub fn render_node(node: &Node) -> String {
    let view = NodeView::new(node);
    let mut out = String::new();
    push_line(&mut out, &format!("{}  ({})", view.short_name, node.name));

    push_properties(&mut out, &view.property_keys, &node.properties);
    push_relation(&mut out, "Parents", &node.parents, true);
    push_relation(&mut out, "Children", &node.contained_deps, false);
    push_relation(&mut out, "Incoming", &node.incoming_deps, true);
    push_relation(&mut out, "Outgoing", &node.outgoing_deps, false);
    out
}

/// Edge header, type, properties and base dependencies down to `depth`.
pub fn render_edge(dependency: &Dependency, depth: usize) -> String {
    let view = EdgeView::new(dependency);
    let mut out = String::new();
    push_line(&mut out, &view.title());
    push_line(&mut out, &format!("  Source  {}", dependency.source_name));
    push_line(&mut out, &format!("  Target  {}", dependency.target_name));
    push_line(&mut out, &format!("  Type    {}", dependency.type_name));

    push_properties(&mut out, &view.property_keys, &dependency.properties);

    let bases = dependency.base_dependencies_flattened(depth);
    if !bases.is_empty() {
        push_line(
            &mut out,
            &format!("\nBase Dependencies ({})", dependency.base_dependencies.len()),
        );
        for (level, base) in bases {
            let indent = "  ".repeat(level);
            push_line(
                &mut out,
                &format!("{indent}{} -> {}  {}", base.source_name, base.target_name, base.type_name),
            );
        }
    }
    out
}

/// Pagination bar: `First  «  1 [2] 3  »  Last (3)`, current page bracketed.
pub fn render_pagination<T>(page: &ResultPage<T>) -> String {
    let pages: Vec<String> = page
        .page_window()
        .into_iter()
        .map(|n| if page.is_active(n) { format!("[{n}]") } else { n.to_string() })
        .collect();
    format!("First  \u{ab}  {}  \u{bb}  Last ({})", pages.join(" "), page.total_pages)
}

/// One node name per line followed by the pagination bar.
pub fn render_listing(page: &ResultPage<Node>) -> String {
    let mut out = String::new();
    if page.content.is_empty() {
        out.push_str("(no nodes)\n");
    }
    for node in &page.content {
        push_line(&mut out, &node.name);
    }
    push_line(
        &mut out,
        &format!("\n{} of {} nodes", page.number_of_elements, page.total_elements),
    );
    push_line(&mut out, &render_pagination(page));
    out
}
