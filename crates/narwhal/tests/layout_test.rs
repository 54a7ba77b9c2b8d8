use narwhal::graphlib::{Graph, GraphOptions};
use narwhal::{EdgeLabel, GraphLabel, LayoutGraph, NodeLabel, RankDir, layout};
use std::collections::BTreeMap;

fn new_graph() -> LayoutGraph {
    let mut g: LayoutGraph = Graph::new(GraphOptions { multigraph: true });
    g.set_graph(GraphLabel::default());
    g
}

fn coords(g: &LayoutGraph) -> BTreeMap<String, (f64, f64)> {
    let mut out = BTreeMap::new();
    for id in g.nodes() {
        let n = g.node(id).unwrap();
        out.insert(id.to_string(), (n.x.unwrap(), n.y.unwrap()));
    }
    out
}

#[test]
fn layout_can_layout_a_single_node() {
    let mut g = new_graph();
    g.set_node("a", NodeLabel::with_size(50.0, 100.0));

    layout(&mut g);
    assert_eq!(coords(&g), [("a".to_string(), (25.0, 50.0))].into());
}

#[test]
fn layout_can_layout_two_nodes_on_the_same_rank() {
    let mut g = new_graph();
    g.graph_mut().nodesep = 200.0;
    g.set_node("a", NodeLabel::with_size(50.0, 100.0));
    g.set_node("b", NodeLabel::with_size(75.0, 200.0));

    layout(&mut g);
    assert_eq!(
        coords(&g),
        [
            ("a".to_string(), (25.0, 100.0)),
            ("b".to_string(), (50.0 + 200.0 + 75.0 / 2.0, 100.0)),
        ]
        .into()
    );
}

#[test]
fn layout_can_layout_two_nodes_connected_by_an_edge() {
    let mut g = new_graph();
    g.graph_mut().ranksep = 300.0;
    g.set_node("a", NodeLabel::with_size(50.0, 100.0));
    g.set_node("b", NodeLabel::with_size(75.0, 200.0));
    g.set_edge("a", "b");

    layout(&mut g);
    assert_eq!(
        coords(&g),
        [
            ("a".to_string(), (75.0 / 2.0, 100.0 / 2.0)),
            ("b".to_string(), (75.0 / 2.0, 100.0 + 300.0 + 200.0 / 2.0)),
        ]
        .into()
    );
}

#[test]
fn layout_swaps_axes_for_left_to_right() {
    let mut g = new_graph();
    g.graph_mut().rankdir = RankDir::LR;
    g.set_node("a", NodeLabel::with_size(50.0, 100.0));
    g.set_node("b", NodeLabel::with_size(75.0, 200.0));
    g.set_edge("a", "b");

    layout(&mut g);
    assert_eq!(
        coords(&g),
        [
            ("a".to_string(), (25.0, 100.0)),
            ("b".to_string(), (50.0 + 50.0 + 75.0 / 2.0, 100.0)),
        ]
        .into()
    );
    // Sizes are restored after the internal swap.
    assert_eq!(g.node("b").unwrap().width, 75.0);
    assert_eq!(g.node("b").unwrap().height, 200.0);
}

#[test]
fn layout_bottom_to_top_puts_the_source_last() {
    let mut g = new_graph();
    g.graph_mut().rankdir = RankDir::BT;
    g.set_node("a", NodeLabel::with_size(50.0, 50.0));
    g.set_node("b", NodeLabel::with_size(50.0, 50.0));
    g.set_edge("a", "b");

    layout(&mut g);
    let c = coords(&g);
    assert_eq!(c["b"].1, 25.0);
    assert_eq!(c["a"].1, 25.0 + 50.0 + 50.0);
}

#[test]
fn layout_honours_minlen_on_the_primary_axis() {
    let mut g = new_graph();
    for v in ["a", "b", "c"] {
        g.set_node(v, NodeLabel::with_size(10.0, 10.0));
    }
    g.set_edge("a", "b");
    g.set_edge_with_label(
        "a",
        "c",
        EdgeLabel {
            minlen: 2,
            ..Default::default()
        },
    );

    layout(&mut g);
    assert_eq!(g.node("a").unwrap().rank, Some(0));
    assert_eq!(g.node("b").unwrap().rank, Some(1));
    assert_eq!(g.node("c").unwrap().rank, Some(2));
    let c = coords(&g);
    assert!(c["c"].1 > c["b"].1);
    // Dummy nodes are gone and the original edge is back.
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge("a", "c", None).unwrap().minlen, 2);
}

#[test]
fn layout_keeps_zero_minlen_edges_as_same_layer_order() {
    let mut g = new_graph();
    for v in ["p", "x", "y"] {
        g.set_node(v, NodeLabel::with_size(40.0, 20.0));
    }
    g.set_edge("p", "x");
    g.set_edge("p", "y");
    g.set_edge_named(
        "y",
        "x",
        Some("order"),
        Some(EdgeLabel {
            minlen: 0,
            weight: 100.0,
            ..Default::default()
        }),
    );

    layout(&mut g);
    let x = g.node("x").unwrap();
    let y = g.node("y").unwrap();
    assert_eq!(x.rank, y.rank);
    assert!(y.x.unwrap() < x.x.unwrap(), "y must be left of x");
    assert!(g.has_edge("y", "x", Some("order")));
}

#[test]
fn layout_survives_cycles_and_self_loops() {
    let mut g = new_graph();
    for v in ["a", "b", "c"] {
        g.set_node(v, NodeLabel::with_size(30.0, 30.0));
    }
    g.set_path(&["a", "b", "c", "a"]);
    g.set_edge("b", "b");

    layout(&mut g);
    for v in ["a", "b", "c"] {
        let n = g.node(v).unwrap();
        assert!(n.x.is_some() && n.y.is_some());
    }
    assert_eq!(g.edge_count(), 4);
    assert!(g.has_edge("c", "a", None));
    assert!(g.edges().all(|e| !g.edge_by_key(e).unwrap().reversed));
}

#[test]
fn layout_is_deterministic() {
    fn build() -> LayoutGraph {
        let mut g = new_graph();
        for v in ["r", "a", "b", "c", "d", "e", "f"] {
            g.set_node(v, NodeLabel::with_size(60.0, 30.0));
        }
        g.set_path(&["r", "a", "d"]);
        g.set_path(&["r", "b", "e"]);
        g.set_path(&["r", "c", "f"]);
        g.set_edge("a", "f");
        g.set_edge("c", "d");
        g
    }

    let mut first = build();
    let mut second = build();
    layout(&mut first);
    layout(&mut second);
    assert_eq!(coords(&first), coords(&second));
}

#[test]
fn layout_never_overlaps_nodes_of_one_layer() {
    let mut g = new_graph();
    g.set_node("root", NodeLabel::with_size(100.0, 40.0));
    for i in 0..6 {
        let id = format!("n{i}");
        g.set_node(id.clone(), NodeLabel::with_size(80.0 + 10.0 * i as f64, 40.0));
        g.set_edge("root", id);
    }

    layout(&mut g);
    let mut row: Vec<(f64, f64)> = (0..6)
        .map(|i| {
            let n = g.node(&format!("n{i}")).unwrap();
            (n.x.unwrap(), n.width)
        })
        .collect();
    row.sort_by(|a, b| a.0.total_cmp(&b.0));
    for pair in row.windows(2) {
        let gap = (pair[1].0 - pair[1].1 / 2.0) - (pair[0].0 + pair[0].1 / 2.0);
        assert!(gap >= 50.0 - 1e-6, "gap {gap} is below nodesep");
    }

    // The last sweep pulls the root to the mean of its children.
    let mean = row.iter().map(|(x, _)| *x).sum::<f64>() / row.len() as f64;
    let root_x = g.node("root").unwrap().x.unwrap();
    assert!((root_x - mean).abs() < 1e-6);
}

#[test]
fn layout_handles_a_deep_chain_with_a_back_edge() {
    let mut g = new_graph();
    let n: i32 = 20_000;
    for i in 0..n {
        g.set_node(format!("n{i}"), NodeLabel::with_size(10.0, 10.0));
    }
    for i in 1..n {
        g.set_edge(format!("n{}", i - 1), format!("n{i}"));
    }
    g.set_edge(format!("n{}", n - 1), "n0");

    layout(&mut g);
    assert_eq!(g.node("n0").unwrap().rank, Some(0));
    assert_eq!(g.node(&format!("n{}", n - 1)).unwrap().rank, Some(n - 1));
    assert_eq!(g.edge_count(), n as usize);
    assert!(g.has_edge(&format!("n{}", n - 1), "n0", None));
}

#[test]
fn layout_orders_a_wide_same_layer_chain() {
    let mut g = new_graph();
    let n: usize = 2_000;
    g.set_node("root", NodeLabel::with_size(10.0, 10.0));
    for i in 0..n {
        let child = format!("c{i:04}");
        g.set_node(child.as_str(), NodeLabel::with_size(10.0, 10.0));
        g.set_edge("root", child.as_str());
    }
    for i in 1..n {
        g.set_edge_named(
            format!("c{:04}", i - 1),
            format!("c{i:04}"),
            Some(format!("order:{i}")),
            Some(EdgeLabel {
                minlen: 0,
                weight: 100.0,
                ..Default::default()
            }),
        );
    }

    layout(&mut g);
    assert_eq!(g.edge_count(), 2 * n - 1);
    let xs: Vec<f64> = (0..n)
        .map(|i| g.node(&format!("c{i:04}")).unwrap().x.unwrap())
        .collect();
    assert!(xs.windows(2).all(|w| w[0] + 10.0 + 50.0 <= w[1] + 1e-9));
    assert!(
        (0..n).all(|i| g.node(&format!("c{i:04}")).unwrap().rank == Some(1)),
        "ordering edges must keep the siblings on one layer"
    );
}
