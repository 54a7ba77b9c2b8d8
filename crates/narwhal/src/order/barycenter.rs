//! Barycenter computation and sorting.

use crate::LayoutGraph;
use rustc_hash::FxHashMap as HashMap;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct BarycenterEntry {
    pub v: String,
    /// Position of `v` in the layer before sorting.
    pub i: usize,
    pub barycenter: Option<f64>,
    pub weight: Option<f64>,
}

/// Computes the weighted mean position of each node's neighbours in the fixed layer.
///
/// `downward` sweeps look at in-edges (the fixed layer is above), upward sweeps at out-edges.
/// Nodes with no neighbour in `fixed` get no barycenter and keep their slot when sorted.
pub fn barycenter(
    g: &LayoutGraph,
    layer: &[String],
    fixed: &HashMap<String, usize>,
    downward: bool,
) -> Vec<BarycenterEntry> {
    layer
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let edges = if downward {
                g.in_edges(v, None)
            } else {
                g.out_edges(v, None)
            };

            let mut sum: f64 = 0.0;
            let mut weight: f64 = 0.0;
            for e in edges {
                let other = if downward { &e.v } else { &e.w };
                let Some(&pos) = fixed.get(other) else {
                    continue;
                };
                let w = g.edge_by_key(&e).map(|l| l.weight).unwrap_or(1.0).max(0.0);
                sum += w * pos as f64;
                weight += w;
            }

            if weight > 0.0 {
                BarycenterEntry {
                    v: v.clone(),
                    i,
                    barycenter: Some(sum / weight),
                    weight: Some(weight),
                }
            } else {
                BarycenterEntry {
                    v: v.clone(),
                    i,
                    barycenter: None,
                    weight: None,
                }
            }
        })
        .collect()
}

/// Sorts entries by barycenter. Entries without a barycenter are pinned to their original
/// index; ties are broken by original index, reversed when `bias_right` is set.
pub fn sort(entries: Vec<BarycenterEntry>, bias_right: bool) -> Vec<String> {
    let (mut sortable, mut unsortable): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(|e| e.barycenter.is_some());

    sortable.sort_by(|a, b| {
        let (ab, bb) = (a.barycenter.unwrap_or(0.0), b.barycenter.unwrap_or(0.0));
        match ab.total_cmp(&bb) {
            Ordering::Equal if bias_right => b.i.cmp(&a.i),
            Ordering::Equal => a.i.cmp(&b.i),
            other => other,
        }
    });
    unsortable.sort_by(|a, b| b.i.cmp(&a.i));

    fn consume_unsortable(
        out: &mut Vec<String>,
        unsortable: &mut Vec<BarycenterEntry>,
        index: &mut usize,
    ) {
        while unsortable.last().is_some_and(|e| e.i <= *index) {
            if let Some(e) = unsortable.pop() {
                out.push(e.v);
                *index += 1;
            }
        }
    }

    let mut out: Vec<String> = Vec::with_capacity(sortable.len() + unsortable.len());
    let mut index: usize = 0;
    consume_unsortable(&mut out, &mut unsortable, &mut index);
    for e in sortable {
        out.push(e.v);
        index += 1;
        consume_unsortable(&mut out, &mut unsortable, &mut index);
    }
    while let Some(e) = unsortable.pop() {
        out.push(e.v);
    }
    out
}
