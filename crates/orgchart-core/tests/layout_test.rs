use orgchart_core::{
    Direction, Edge, HandleSide, LayoutOptions, LayoutResult, Node, Size, XYPosition, layout,
    layout_with,
};

const NO_ROLES: &[&str] = &[];

fn node<'a>(result: &'a LayoutResult, id: &str) -> &'a Node {
    result.nodes.iter().find(|n| n.id == id).unwrap()
}

fn assert_close(a: XYPosition, b: XYPosition) {
    assert!(
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
        "{a:?} != {b:?}"
    );
}

fn department() -> (Vec<Node>, Vec<Edge>) {
    department_with("部長", "主任")
}

fn department_with(b_role: &str, c_role: &str) -> (Vec<Node>, Vec<Edge>) {
    let nodes = vec![
        Node::organization("A", "本社"),
        Node::person("B", "佐藤", b_role),
        Node::person("C", "鈴木", c_role),
    ];
    let edges = vec![Edge::new("e1", "A", "B"), Edge::new("e2", "A", "C")];
    (nodes, edges)
}

#[test]
fn layout_of_an_empty_chart_is_empty() {
    let result = layout(&[], &[], Direction::TB, NO_ROLES);
    assert!(result.nodes.is_empty());
    assert!(result.edges.is_empty());
}

#[test]
fn each_distinct_listed_role_among_siblings_takes_its_own_layer() {
    let (nodes, edges) = department();
    let result = layout(&nodes, &edges, Direction::TB, &["部長", "主任"]);

    let (a, b, c) = (node(&result, "A"), node(&result, "B"), node(&result, "C"));
    assert_eq!(result.layers["A"], 0);
    assert_eq!(result.layers["B"], 1);
    assert_eq!(result.layers["C"], 2);

    assert!(a.position.y + 80.0 <= b.position.y, "A must sit above B");
    assert!(b.position.y + 100.0 <= c.position.y, "C must sit below B");
    // The heavy ordering edge B -> C now spans two layers and pulls C under B.
    assert!((b.position.x - c.position.x).abs() < 10.0);

    for n in [a, b, c] {
        assert_eq!(n.target_position, Some(HandleSide::Top));
        assert_eq!(n.source_position, Some(HandleSide::Bottom));
    }
    assert_eq!(result.edges, edges);
}

#[test]
fn sibling_with_an_unlisted_role_goes_one_layer_deeper() {
    let (nodes, edges) = department();
    let result = layout(&nodes, &edges, Direction::TB, &["部長"]);

    assert_eq!(result.layers["B"], 1);
    assert_eq!(result.layers["C"], 2);
    assert!(node(&result, "C").position.y > node(&result, "B").position.y + 100.0);
}

#[test]
fn siblings_of_one_listed_role_share_a_layer_side_by_side() {
    let (nodes, edges) = department_with("主任", "主任");
    let result = layout(&nodes, &edges, Direction::TB, &["部長", "主任"]);

    let (a, b, c) = (node(&result, "A"), node(&result, "B"), node(&result, "C"));
    assert_eq!(result.layers["B"], 1);
    assert_eq!(result.layers["C"], 1);
    assert_eq!(b.position.y, c.position.y);
    assert!(b.position.x + 200.0 <= c.position.x, "B must sit left of C without overlap");
    assert!(a.position.y + 80.0 <= b.position.y, "A must sit above B and C");
}

#[test]
fn siblings_of_one_rank_are_ordered_by_id() {
    let nodes = vec![
        Node::organization("root", "本社"),
        Node::person("b", "B", "主任"),
        Node::person("a", "A", "主任"),
    ];
    let edges = vec![Edge::new("e1", "root", "b"), Edge::new("e2", "root", "a")];
    let result = layout(&nodes, &edges, Direction::TB, &["主任"]);

    assert_eq!(result.layers["a"], result.layers["b"]);
    assert!(node(&result, "a").position.x < node(&result, "b").position.x);
}

#[test]
fn parent_is_centered_over_its_children() {
    let (nodes, edges) = department_with("主任", "主任");
    let result = layout(&nodes, &edges, Direction::TB, &["部長", "主任"]);
    let center = |id: &str| result.absolute[id].x + if id == "A" { 75.0 } else { 100.0 };
    assert!((center("A") - (center("B") + center("C")) / 2.0).abs() < 1e-6);
}

#[test]
fn layout_is_deterministic() {
    let (nodes, edges) = department();
    let first = layout(&nodes, &edges, Direction::TB, &["部長", "主任"]);
    let second = layout(&nodes, &edges, Direction::TB, &["部長", "主任"]);
    assert_eq!(first, second);
}

#[test]
fn hidden_nodes_pass_through_untouched() {
    let (mut nodes, mut edges) = department();
    nodes.push(
        Node::person("D", "高橋", "主任")
            .with_position(12.345, 67.891)
            .with_hidden(true),
    );
    edges.push(Edge::new("e3", "C", "D").with_hidden(true));

    let result = layout(&nodes, &edges, Direction::TB, &["部長", "主任"]);
    let d = node(&result, "D");
    assert_eq!(d, &nodes[3]);
    assert_eq!(
        serde_json::to_string(&d.position).unwrap(),
        serde_json::to_string(&nodes[3].position).unwrap()
    );
    assert!(!result.absolute.contains_key("D"));
}

#[test]
fn contained_node_is_stored_relative_to_its_container() {
    let nodes = vec![
        Node::organization("C", "部署")
            .with_position(100.0, 100.0)
            .with_hidden(true),
        Node::organization("root", "本社"),
        Node::person("D", "田中", "").with_parent("C"),
    ];
    let edges = vec![Edge::new("e1", "root", "D")];
    let result = layout(&nodes, &edges, Direction::TB, NO_ROLES);

    let absolute = result.absolute["D"];
    assert_close(
        node(&result, "D").position,
        absolute - XYPosition::new(100.0, 100.0),
    );
}

#[test]
fn contained_node_follows_a_laid_out_container() {
    let nodes = vec![
        Node::organization("C", "部署"),
        Node::person("D", "田中", "").with_parent("C"),
    ];
    let edges = vec![Edge::new("e1", "C", "D")];
    let result = layout(&nodes, &edges, Direction::TB, NO_ROLES);

    assert_close(node(&result, "C").position, result.absolute["C"]);
    assert_close(
        node(&result, "D").position,
        result.absolute["D"] - result.absolute["C"],
    );
}

#[test]
fn missing_container_keeps_the_absolute_position() {
    let nodes = vec![Node::person("D", "田中", "").with_parent("nowhere")];
    let result = layout(&nodes, &[], Direction::TB, NO_ROLES);
    assert_close(node(&result, "D").position, result.absolute["D"]);
}

#[test]
fn multi_parent_node_gets_a_single_layer() {
    let nodes = vec![
        Node::organization("P1", "一課"),
        Node::organization("P2", "二課"),
        Node::person("X", "山田", ""),
    ];
    let edges = vec![Edge::new("e1", "P1", "X"), Edge::new("e2", "P2", "X")];
    let result = layout(&nodes, &edges, Direction::TB, NO_ROLES);

    assert_eq!(result.nodes.iter().filter(|n| n.id == "X").count(), 1);
    assert_eq!(result.layers["X"], 1);
    assert_eq!(result.layers["P1"], 0);
    assert_eq!(result.layers["P2"], 0);
}

#[test]
fn dangling_edges_are_ignored() {
    let nodes = vec![
        Node::organization("A", "本社"),
        Node::person("lonely", "孤立", ""),
    ];
    let edges = vec![
        Edge::new("e1", "ghost", "lonely"),
        Edge::new("e2", "A", "missing"),
    ];
    let result = layout(&nodes, &edges, Direction::TB, NO_ROLES);

    assert_eq!(result.layers["A"], 0);
    assert_eq!(result.layers["lonely"], 0);
    assert_eq!(result.edges, edges);
}

#[test]
fn cyclic_charts_still_lay_out() {
    let nodes = vec![
        Node::organization("A", "A"),
        Node::organization("B", "B"),
        Node::organization("C", "C"),
    ];
    let edges = vec![
        Edge::new("e1", "A", "B"),
        Edge::new("e2", "B", "C"),
        Edge::new("e3", "C", "A"),
    ];
    let result = layout(&nodes, &edges, Direction::TB, NO_ROLES);
    assert_eq!(result.absolute.len(), 3);
    assert_eq!(result.layers.len(), 3);
}

#[test]
fn left_to_right_is_the_transpose_of_top_to_bottom() {
    let nodes = vec![
        Node::organization("R", "R"),
        Node::organization("a", "a"),
        Node::organization("b", "b"),
        Node::organization("c", "c"),
        Node::organization("d", "d"),
    ];
    let edges = vec![
        Edge::new("e1", "R", "a"),
        Edge::new("e2", "R", "b"),
        Edge::new("e3", "R", "c"),
        Edge::new("e4", "a", "d"),
    ];
    let square = LayoutOptions::default().with_sizer(|_: &Node| Size::new(100.0, 100.0));

    let tb = layout_with(&nodes, &edges, Direction::TB, NO_ROLES, &square);
    let lr = layout_with(&nodes, &edges, Direction::LR, NO_ROLES, &square);
    for id in ["R", "a", "b", "c", "d"] {
        let p = tb.absolute[id];
        assert_close(lr.absolute[id], XYPosition::new(p.y, p.x));
        assert_eq!(node(&lr, id).target_position, Some(HandleSide::Left));
        assert_eq!(node(&lr, id).source_position, Some(HandleSide::Right));
    }
}

#[test]
fn spacing_follows_the_config() {
    let (nodes, edges) = department_with("主任", "主任");
    let mut options = LayoutOptions::default();
    options.config.ranksep = 200.0;
    options.config.nodesep = 10.0;

    let result = layout_with(&nodes, &edges, Direction::TB, &["部長", "主任"], &options);
    let (a, b, c) = (node(&result, "A"), node(&result, "B"), node(&result, "C"));
    assert_eq!(b.position.y - (a.position.y + 80.0), 200.0);
    assert!((c.position.x - (b.position.x + 200.0) - 10.0).abs() < 1e-6);
}

#[test]
fn left_to_right_orders_same_rank_siblings_top_to_bottom() {
    let nodes = vec![
        Node::organization("root", "本社"),
        Node::person("m", "M", "主任"),
        Node::person("z", "Z", "主任"),
        Node::person("k", "K", "主任"),
    ];
    let edges = vec![
        Edge::new("e1", "root", "m"),
        Edge::new("e2", "root", "z"),
        Edge::new("e3", "root", "k"),
    ];
    let result = layout(&nodes, &edges, Direction::LR, &["部長", "主任"]);

    let (k, m, z) = (node(&result, "k"), node(&result, "m"), node(&result, "z"));
    assert_eq!(result.layers["k"], 1);
    assert_eq!(result.layers["m"], 1);
    assert_eq!(result.layers["z"], 1);
    assert_eq!(k.position.x, m.position.x);
    assert_eq!(m.position.x, z.position.x);
    assert!(k.position.y + 100.0 <= m.position.y, "k must sit above m");
    assert!(m.position.y + 100.0 <= z.position.y, "m must sit above z");
    assert!(node(&result, "root").position.x + 150.0 <= k.position.x);
}

#[test]
fn a_flat_team_of_two_thousand_lays_out_in_id_order() {
    let mut nodes = vec![Node::organization("root", "本社")];
    let mut edges = Vec::new();
    for i in (0..2000).rev() {
        let id = format!("p{i:04}");
        edges.push(Edge::new(format!("e{i}"), "root", id.as_str()));
        nodes.push(Node::person(id, "メンバー", "主任"));
    }
    let result = layout(&nodes, &edges, Direction::TB, &["主任"]);

    let xs: Vec<f64> = (0..2000)
        .map(|i| node(&result, &format!("p{i:04}")).position.x)
        .collect();
    assert!(xs.windows(2).all(|w| w[0] + 200.0 <= w[1] + 1e-6));
    assert!((0..2000).all(|i| result.layers[format!("p{i:04}").as_str()] == 1));
}

#[test]
fn a_deep_reporting_line_lays_out() {
    let n = 10_000;
    let nodes: Vec<Node> = (0..n).map(|i| Node::organization(format!("o{i}"), "部署")).collect();
    let edges: Vec<Edge> = (1..n)
        .map(|i| Edge::new(format!("e{i}"), format!("o{}", i - 1), format!("o{i}")))
        .collect();
    let result = layout(&nodes, &edges, Direction::TB, NO_ROLES);

    assert_eq!(result.layers["o0"], 0);
    assert_eq!(result.layers[format!("o{}", n - 1).as_str()], n - 1);
}

#[test]
fn negative_spacing_never_overlaps_siblings() {
    let (nodes, edges) = department_with("主任", "主任");
    let mut options = LayoutOptions::default();
    options.config.nodesep = -500.0;
    options.config.edgesep = -500.0;

    let result = layout_with(&nodes, &edges, Direction::TB, &["主任"], &options);
    let (b, c) = (node(&result, "B"), node(&result, "C"));
    assert_eq!(b.position.y, c.position.y);
    assert!(b.position.x + 200.0 <= c.position.x + 1e-9);
}
