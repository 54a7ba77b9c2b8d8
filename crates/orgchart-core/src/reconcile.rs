//! Maps layout centers back onto the stored node records.
//!
//! Layout works in absolute coordinates. A node nested in a container stores its position
//! relative to the container, so the container's absolute top-left is subtracted. Containers
//! that were laid out use their new position; hidden ones use their stored position plus the
//! absolute position of their own container, found by walking up the container chain.

use crate::model::{Direction, Node, XYPosition};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

struct Containers<'a> {
    by_id: HashMap<&'a str, &'a Node>,
    placed: &'a IndexMap<String, XYPosition>,
}

impl<'a> Containers<'a> {
    fn new(nodes: &'a [Node], placed: &'a IndexMap<String, XYPosition>) -> Self {
        let mut by_id: HashMap<&'a str, &'a Node> = HashMap::default();
        for node in nodes {
            by_id.entry(node.id.as_str()).or_insert(node);
        }
        Self { by_id, placed }
    }

    /// Absolute top-left of `child`'s container, or `None` when the container cannot be
    /// resolved. A broken link further up the chain contributes no offset.
    fn origin(&self, child: &'a str, container: &'a str) -> Option<XYPosition> {
        let mut seen: HashSet<&'a str> = HashSet::default();
        seen.insert(child);
        let mut origin = XYPosition::default();
        let mut id = container;
        loop {
            if seen.contains(id) {
                tracing::warn!(node = %id, child = %child, "containment cycle; treating as containerless");
                break;
            }
            if let Some(p) = self.placed.get(id) {
                return Some(origin + *p);
            }
            let Some(&node) = self.by_id.get(id) else {
                tracing::debug!(container = %id, "container does not exist");
                break;
            };
            origin = origin + node.position;
            seen.insert(id);
            match node.parent_id.as_deref() {
                Some(next) => id = next,
                None => return Some(origin),
            }
        }
        (seen.len() > 1).then_some(origin)
    }
}

/// Returns `nodes` with every placed node moved to its new position and connector sides set
/// for `direction`. Nodes missing from `placed` (hidden ones) are returned unchanged.
pub fn reconcile(
    nodes: &[Node],
    placed: &IndexMap<String, XYPosition>,
    direction: Direction,
) -> Vec<Node> {
    let containers = Containers::new(nodes, placed);
    nodes
        .iter()
        .map(|node| {
            let Some(&absolute) = placed.get(&node.id) else {
                return node.clone();
            };

            let position = match node.parent_id.as_deref() {
                Some(container) => match containers.origin(&node.id, container) {
                    Some(origin) => absolute - origin,
                    None => absolute,
                },
                None => absolute,
            };

            Node {
                position,
                source_position: Some(direction.source_side()),
                target_position: Some(direction.target_side()),
                ..node.clone()
            }
        })
        .collect()
}
