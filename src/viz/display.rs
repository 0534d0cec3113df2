use super::{VizNode, VizTree};
use std::fmt;

impl fmt::Display for VizTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.root();
        writeln!(f, "{} [{}]", root.title(), root.path())?;
        let children = root.children();
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            fmt_as_tree(child, f, "", i + 1 == count)?;
        }
        Ok(())
    }
}

/// Recursively draws `node` and its children with box-drawing connectors.
fn fmt_as_tree(
    node: VizNode<'_>,
    f: &mut fmt::Formatter<'_>,
    prefix: &str,
    is_last: bool,
) -> fmt::Result {
    let node_marker = if is_last { "└── " } else { "├── " };
    let title = if node.title().is_empty() {
        "<unknown>"
    } else {
        node.title()
    };
    let group_marker = if node.is_group() { " (group)" } else { "" };
    writeln!(
        f,
        "{}{}{}{} [{}]",
        prefix,
        node_marker,
        title,
        group_marker,
        node.path()
    )?;

    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
    let children = node.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        fmt_as_tree(child, f, &child_prefix, i + 1 == count)?;
    }
    Ok(())
}
