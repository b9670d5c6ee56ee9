//! Graphviz export.

use super::ModuleGraph;
use std::fmt::Write;

/// Render the live graph in Graphviz DOT format.
///
/// Vertices are keyed by their id. Internal modules are drawn as dashed
/// rectangles, the others as solid ellipses. Ordering-only edges are
/// invisible so the rendering shows data flow only, while still
/// constraining the layout.
pub fn to_dot(graph: &ModuleGraph) -> String {
    let mut out = String::from("digraph G {\n");

    for (_, vertex) in graph.vertices() {
        let (shape, style) = if vertex.is_internal() {
            ("rectangle", "dashed")
        } else {
            ("ellipse", "solid")
        };
        let _ = writeln!(
            out,
            "{}[shape=\"{}\",color=\"black\",style=\"{}\",label=\"{}\"];",
            vertex.id.as_u32(),
            shape,
            style,
            escape(&vertex.name)
        );
    }

    for edge in graph.edges() {
        let (Some(source), Some(target)) = (graph.vertex(edge.source), graph.vertex(edge.target))
        else {
            continue;
        };
        let style = if edge.is_virtual { "invis" } else { "solid" };
        let _ = writeln!(
            out,
            "{}->{} [color=\"black\",style=\"{}\",label=\"{}\"];",
            source.id.as_u32(),
            target.id.as_u32(),
            style,
            escape(&edge.description)
        );
    }

    out.push_str("}\n");
    out
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
