//! Small graph algorithms shared by the layout crates.

use crate::Graph;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

/// Returns every strongly connected component with more than one node, plus single nodes that
/// carry a self-loop. Node order inside a cycle follows graph insertion order.
pub fn find_cycles<N, E, G>(g: &Graph<N, E, G>) -> Vec<Vec<String>>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    struct Tarjan<'a> {
        next_index: usize,
        indices: HashMap<&'a str, usize>,
        lowlink: HashMap<&'a str, usize>,
        on_stack: HashSet<&'a str>,
        stack: Vec<&'a str>,
        sccs: Vec<Vec<&'a str>>,
    }

    impl<'a> Tarjan<'a> {
        fn enter(&mut self, v: &'a str) {
            self.indices.insert(v, self.next_index);
            self.lowlink.insert(v, self.next_index);
            self.next_index += 1;
            self.stack.push(v);
            self.on_stack.insert(v);
        }

        fn lower(&mut self, v: &'a str, to: usize) {
            if let Some(low) = self.lowlink.get_mut(v) {
                *low = (*low).min(to);
            }
        }

        fn finish(&mut self, v: &'a str) {
            if self.lowlink.get(v) != self.indices.get(v) {
                return;
            }
            let mut scc: Vec<&str> = Vec::new();
            while let Some(w) = self.stack.pop() {
                self.on_stack.remove(w);
                scc.push(w);
                if w == v {
                    break;
                }
            }
            self.sccs.push(scc);
        }
    }

    let mut t = Tarjan {
        next_index: 0,
        indices: HashMap::default(),
        lowlink: HashMap::default(),
        on_stack: HashSet::default(),
        stack: Vec::new(),
        sccs: Vec::new(),
    };
    // Explicit frames of (node, successors, next successor) instead of recursion.
    let mut frames: Vec<(&str, Vec<&str>, usize)> = Vec::new();
    for root in g.nodes() {
        if t.indices.contains_key(root) {
            continue;
        }
        t.enter(root);
        frames.push((root, g.successors(root), 0));

        while let Some((v, succ, next)) = frames.last_mut() {
            let v = *v;
            if let Some(&w) = succ.get(*next) {
                *next += 1;
                if let Some(&w_index) = t.indices.get(w) {
                    if t.on_stack.contains(w) {
                        t.lower(v, w_index);
                    }
                } else {
                    t.enter(w);
                    frames.push((w, g.successors(w), 0));
                }
                continue;
            }

            frames.pop();
            if let Some(&(parent, _, _)) = frames.last() {
                let low = t.lowlink.get(v).copied().unwrap_or(usize::MAX);
                t.lower(parent, low);
            }
            t.finish(v);
        }
    }

    let order: HashMap<&str, usize> = g.nodes().enumerate().map(|(i, v)| (v, i)).collect();
    let mut cycles: Vec<Vec<String>> = Vec::new();
    for mut scc in t.sccs {
        if scc.len() > 1 {
            scc.sort_by_key(|v| order.get(v).copied().unwrap_or(usize::MAX));
            cycles.push(scc.into_iter().map(str::to_string).collect());
        } else if !g.out_edges(scc[0], Some(scc[0])).is_empty() {
            cycles.push(vec![scc[0].to_string()]);
        }
    }
    cycles.sort_by_key(|c| {
        c.first()
            .and_then(|v| order.get(v.as_str()).copied())
            .unwrap_or(usize::MAX)
    });
    cycles
}
