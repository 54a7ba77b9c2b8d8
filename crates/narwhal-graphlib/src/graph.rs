//! Graph container APIs used by `narwhal`.
//!
//! This module contains the core `Graph` container. Adjacency lists hold edge indices in
//! insertion order, so `in_edges` / `out_edges` / `successors` walk edges in the order they were
//! added. Storage is dense: removing edges or nodes compacts the vectors and rebuilds the
//! indices once per call, so layout stages remove in batches with [`Graph::remove_edges_where`]
//! and [`Graph::remove_nodes_where`].

use rustc_hash::{FxBuildHasher, FxHashSet as HashSet};

mod edge_key;
mod options;

use edge_key::EdgeRef;

pub use edge_key::EdgeKey;
pub use options::GraphOptions;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
struct NodeEntry<N> {
    id: String,
    label: N,
}

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    key: EdgeKey,
    v_ix: usize,
    w_ix: usize,
    label: E,
}

pub struct Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    options: GraphOptions,

    graph_label: G,
    default_edge_label: Box<dyn Fn() -> E + Send + Sync>,

    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<EdgeKey, usize>,

    out_adj: Vec<Vec<usize>>,
    in_adj: Vec<Vec<usize>>,
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            graph_label: G::default(),
            default_edge_label: Box::new(E::default),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            out_adj: Vec::new(),
            in_adj: Vec::new(),
        }
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    pub fn set_default_edge_label<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn() -> E + Send + Sync + 'static,
    {
        self.default_edge_label = Box::new(f);
        self
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(id.as_str()) {
            self.nodes[idx].label = label;
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.node_index.insert(id, idx);
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        self
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(id.as_str()) {
            return self;
        }
        self.set_node(id, N::default())
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn for_each_node_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut N),
    {
        for n in &mut self.nodes {
            f(n.id.as_str(), &mut n.label);
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges.iter().map(|e| e.key.clone()).collect()
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, None)
    }

    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, Some(label))
    }

    pub fn set_edge_named(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
        label: Option<E>,
    ) -> &mut Self {
        let v = v.into();
        let w = w.into();
        self.ensure_node(v.clone());
        self.ensure_node(w.clone());

        let name = if self.options.multigraph {
            name.map(Into::into)
        } else {
            None
        };
        let key = EdgeKey { v, w, name };

        if let Some(&idx) = self.edge_index.get(&key) {
            if let Some(label) = label {
                self.edges[idx].label = label;
            }
            return self;
        }

        let v_ix = self.node_index[key.v.as_str()];
        let w_ix = self.node_index[key.w.as_str()];
        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            key: key.clone(),
            v_ix,
            w_ix,
            label: label.unwrap_or_else(|| (self.default_edge_label)()),
        });
        self.edge_index.insert(key, idx);
        self.out_adj[v_ix].push(idx);
        self.in_adj[w_ix].push(idx);
        self
    }

    pub fn set_edge_key(&mut self, key: EdgeKey, label: E) -> &mut Self {
        self.set_edge_named(key.v, key.w, key.name, Some(label))
    }

    /// Adds `v -> w` for every consecutive pair in `nodes`.
    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    fn edge_ix(&self, v: &str, w: &str, name: Option<&str>) -> Option<usize> {
        let view = EdgeRef {
            v,
            w,
            name: if self.options.multigraph { name } else { None },
        };
        self.edge_index.get(&view).copied()
    }

    pub fn has_edge(&self, v: &str, w: &str, name: Option<&str>) -> bool {
        self.edge_ix(v, w, name).is_some()
    }

    pub fn edge(&self, v: &str, w: &str, name: Option<&str>) -> Option<&E> {
        self.edge_ix(v, w, name).map(|idx| &self.edges[idx].label)
    }

    pub fn edge_by_key(&self, key: &EdgeKey) -> Option<&E> {
        self.edge_index.get(key).map(|&idx| &self.edges[idx].label)
    }

    pub fn remove_edge_key(&mut self, key: &EdgeKey) -> bool {
        let Some(idx) = self.edge_index.get(key).copied() else {
            return false;
        };
        self.edges.remove(idx);
        self.reindex_edges();
        true
    }

    /// Removes every edge for which `pred` holds and returns them with their labels, in
    /// insertion order. Indices are rebuilt once, however many edges go.
    pub fn remove_edges_where<F>(&mut self, mut pred: F) -> Vec<(EdgeKey, E)>
    where
        F: FnMut(&EdgeKey, &E) -> bool,
    {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.edges)
            .into_iter()
            .partition(|e| pred(&e.key, &e.label));
        self.edges = kept;
        if !removed.is_empty() {
            self.reindex_edges();
        }
        removed.into_iter().map(|e| (e.key, e.label)).collect()
    }

    pub fn remove_node(&mut self, id: &str) -> bool {
        self.remove_nodes_where(|v, _| v == id) > 0
    }

    /// Removes every node for which `pred` holds together with its incident edges. Returns how
    /// many nodes were removed.
    pub fn remove_nodes_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&str, &N) -> bool,
    {
        let before = self.nodes.len();
        self.nodes.retain(|n| !pred(&n.id, &n.label));
        let removed = before - self.nodes.len();
        if removed == 0 {
            return 0;
        }

        self.node_index.clear();
        for (i, n) in self.nodes.iter().enumerate() {
            self.node_index.insert(n.id.clone(), i);
        }
        let node_index = &self.node_index;
        self.edges.retain_mut(|e| {
            match (node_index.get(e.key.v.as_str()), node_index.get(e.key.w.as_str())) {
                (Some(&v_ix), Some(&w_ix)) => {
                    e.v_ix = v_ix;
                    e.w_ix = w_ix;
                    true
                }
                _ => false,
            }
        });
        self.reindex_edges();
        removed
    }

    /// Rebuilds the edge index and adjacency after edge storage was compacted. Node indices must
    /// already be current.
    fn reindex_edges(&mut self) {
        self.edge_index.clear();
        self.out_adj = vec![Vec::new(); self.nodes.len()];
        self.in_adj = vec![Vec::new(); self.nodes.len()];
        for (i, e) in self.edges.iter().enumerate() {
            self.edge_index.insert(e.key.clone(), i);
            self.out_adj[e.v_ix].push(i);
            self.in_adj[e.w_ix].push(i);
        }
    }

    pub fn out_edges(&self, v: &str, w: Option<&str>) -> Vec<EdgeKey> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.out_adj[v_ix]
            .iter()
            .map(|&i| &self.edges[i].key)
            .filter(|k| w.is_none_or(|w| k.w == w))
            .cloned()
            .collect()
    }

    pub fn in_edges(&self, v: &str, u: Option<&str>) -> Vec<EdgeKey> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.in_adj[v_ix]
            .iter()
            .map(|&i| &self.edges[i].key)
            .filter(|k| u.is_none_or(|u| k.v == u))
            .cloned()
            .collect()
    }

    /// Distinct heads of `v`'s out-edges, in edge insertion order.
    pub fn successors(&self, v: &str) -> Vec<&str> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        let mut seen: HashSet<usize> = HashSet::default();
        self.out_adj[v_ix]
            .iter()
            .map(|&i| self.edges[i].w_ix)
            .filter(|ix| seen.insert(*ix))
            .map(|ix| self.nodes[ix].id.as_str())
            .collect()
    }

    /// Distinct tails of `v`'s in-edges, in edge insertion order.
    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        let mut seen: HashSet<usize> = HashSet::default();
        self.in_adj[v_ix]
            .iter()
            .map(|&i| self.edges[i].v_ix)
            .filter(|ix| seen.insert(*ix))
            .map(|ix| self.nodes[ix].id.as_str())
            .collect()
    }

    /// Nodes without in-edges, in insertion order.
    pub fn sources(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(i, _)| self.in_adj[*i].is_empty())
            .map(|(_, n)| n.id.as_str())
            .collect()
    }

    /// Nodes without out-edges, in insertion order.
    pub fn sinks(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(i, _)| self.out_adj[*i].is_empty())
            .map(|(_, n)| n.id.as_str())
            .collect()
    }
}

impl<N, E, G> Clone for Graph<N, E, G>
where
    N: Default + Clone + 'static,
    E: Default + Clone + 'static,
    G: Default + Clone,
{
    /// Clones storage; the clone uses `E::default` as its default edge label.
    fn clone(&self) -> Self {
        Self {
            options: self.options,
            graph_label: self.graph_label.clone(),
            default_edge_label: Box::new(E::default),
            nodes: self.nodes.clone(),
            node_index: self.node_index.clone(),
            edges: self.edges.clone(),
            edge_index: self.edge_index.clone(),
            out_adj: self.out_adj.clone(),
            in_adj: self.in_adj.clone(),
        }
    }
}
