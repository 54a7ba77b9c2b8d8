//! The editable chart: nodes, edges, role ranking, and direction.
//!
//! This is the shape the CLI reads and writes and the unit [`crate::History`] snapshots.
//! Every structural edit leaves layout to the caller, who calls [`Document::relayout`]
//! once the edit is done.

use crate::error::{Error, Result};
use crate::ids::IdGenerator;
use crate::layout::{LayoutOptions, layout_with};
use crate::model::{Direction, Edge, Node, NodeKind, XYPosition};
use crate::roles::RoleList;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::VecDeque;

pub const NEW_ORGANIZATION_LABEL: &str = "新規組織";
pub const NEW_PERSON_NAME: &str = "新規メンバー";
pub const NEW_PERSON_ROLE: &str = "役職";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub roles: RoleList,
    #[serde(default)]
    pub direction: Direction,
}

fn is_collapsed(node: &Node) -> bool {
    node.data.get("collapsed").and_then(Value::as_bool) == Some(true)
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn to_json_string(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Adds a node with the default payload for its kind and returns its id.
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        position: XYPosition,
        ids: &mut dyn IdGenerator,
    ) -> String {
        let mut data = Map::new();
        match kind {
            NodeKind::Organization => {
                data.insert("label".into(), Value::from(NEW_ORGANIZATION_LABEL));
            }
            _ => {
                data.insert("name".into(), Value::from(NEW_PERSON_NAME));
                data.insert("role".into(), Value::from(NEW_PERSON_ROLE));
            }
        }

        let id = ids.next_id();
        self.nodes.push(Node {
            position,
            data,
            ..Node::new(id.clone(), kind)
        });
        id
    }

    /// Connects `source` to `target`. Returns the new edge id, or `None` when the two are
    /// already connected in that direction.
    pub fn connect(
        &mut self,
        source: &str,
        target: &str,
        ids: &mut dyn IdGenerator,
    ) -> Result<Option<String>> {
        for id in [source, target] {
            if self.node(id).is_none() {
                return Err(Error::UnknownNode { id: id.to_string() });
            }
        }
        if source == target {
            return Err(Error::SelfLoop {
                id: source.to_string(),
            });
        }
        if self
            .edges
            .iter()
            .any(|e| e.source == source && e.target == target)
        {
            return Ok(None);
        }

        let mut edge = Edge::new(ids.next_id(), source, target);
        edge.extra.insert("animated".into(), Value::Bool(true));
        let id = edge.id.clone();
        self.edges.push(edge);
        Ok(Some(id))
    }

    pub fn remove_edge(&mut self, id: &str) -> Option<Edge> {
        let ix = self.edges.iter().position(|e| e.id == id)?;
        Some(self.edges.remove(ix))
    }

    /// Removes a node together with every edge touching it.
    pub fn remove_node(&mut self, id: &str) -> Option<Node> {
        let ix = self.nodes.iter().position(|n| n.id == id)?;
        self.edges.retain(|e| e.source != id && e.target != id);
        Some(self.nodes.remove(ix))
    }

    /// Collapses or expands the subtree below `id` and returns how many nodes changed.
    ///
    /// Collapsing hides every node reachable through outgoing edges, and those edges. Expanding
    /// shows them again but leaves subtrees of nested collapsed nodes hidden.
    pub fn set_collapsed(&mut self, id: &str, collapsed: bool) -> Result<usize> {
        let Some(node) = self.node_mut(id) else {
            return Err(Error::UnknownNode { id: id.to_string() });
        };
        node.data.insert("collapsed".into(), Value::Bool(collapsed));

        let nested_collapsed: HashSet<&str> = self
            .nodes
            .iter()
            .filter(|n| n.id != id && is_collapsed(n))
            .map(|n| n.id.as_str())
            .collect();
        let mut outgoing: HashMap<&str, Vec<usize>> = HashMap::default();
        for (ix, e) in self.edges.iter().enumerate() {
            outgoing.entry(e.source.as_str()).or_default().push(ix);
        }

        let mut visited: HashSet<String> = HashSet::default();
        visited.insert(id.to_string());
        let mut edge_ixs: Vec<usize> = Vec::new();
        let mut queue: VecDeque<&str> = VecDeque::from([id]);
        while let Some(v) = queue.pop_front() {
            if !collapsed && nested_collapsed.contains(v) {
                continue;
            }
            for &ix in outgoing.get(v).map(Vec::as_slice).unwrap_or_default() {
                let target = self.edges[ix].target.as_str();
                edge_ixs.push(ix);
                if visited.insert(target.to_string()) {
                    queue.push_back(target);
                }
            }
        }

        for ix in edge_ixs {
            self.edges[ix].hidden = collapsed;
        }
        let mut changed = 0;
        for node in &mut self.nodes {
            if node.id != id && visited.contains(&node.id) && node.hidden != collapsed {
                node.hidden = collapsed;
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Switches between vertical and horizontal layout and lays the chart out again.
    pub fn toggle_direction(&mut self, options: &LayoutOptions) -> Direction {
        self.direction = self.direction.toggled();
        self.relayout(options);
        self.direction
    }

    pub fn relayout(&mut self, options: &LayoutOptions) {
        let result = layout_with(
            &self.nodes,
            &self.edges,
            self.direction,
            self.roles.as_slice(),
            options,
        );
        self.nodes = result.nodes;
    }
}
