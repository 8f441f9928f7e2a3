//! Pre-order traversal over the owned node tree.

use super::api_types::FigmaNode;

/// Visit `node`, then each child in order, depth-first.
pub fn walk<'a, F>(node: &'a FigmaNode, visit: &mut F)
where
    F: FnMut(&'a FigmaNode),
{
    visit(node);
    for child in &node.children {
        walk(child, visit);
    }
}

/// First node with the given id in pre-order, stopping as soon as it is found.
pub fn find_node<'a>(node: &'a FigmaNode, id: &str) -> Option<&'a FigmaNode> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter().find_map(|child| find_node(child, id))
}
