//! Unit tests for the graph data model and its derived views.

use rstest::{fixture, rstest};

use crate::{GraphError, test_utils::unordered_pairs};

use super::Graph;

#[fixture]
fn directed_triangle() -> Graph {
    let mut graph = Graph::new(3);
    for (from, to) in [(0, 1), (1, 2), (2, 0)] {
        graph
            .directional_connect(from, to)
            .expect("nodes belong to the graph");
    }
    graph
}

#[fixture]
fn undirected_path() -> Graph {
    Graph::from_pairs(false, &[0, 1, 1, 2, 2, 3]).expect("pairs are valid")
}

#[test]
fn new_allocates_dense_ids() {
    let graph = Graph::new(5);
    assert_eq!(graph.len(), 5);
    assert!(!graph.is_empty());
    let ids: Vec<_> = graph.nodes().map(|node| node.id()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    assert_eq!(graph.edge_count(), 0);
}

#[rstest]
#[case::past_end(3, 3)]
#[case::far_past_end(10, 3)]
fn node_access_is_bounds_checked(#[case] index: usize, #[case] len: usize) {
    let graph = Graph::new(len);
    assert_eq!(
        graph.node(index).map(|node| node.id()),
        Err(GraphError::NodeOutOfRange {
            index,
            node_count: len
        })
    );
}

#[rstest]
#[case::bad_from(4, 0, 4)]
#[case::bad_to(0, 7, 7)]
fn connect_rejects_foreign_nodes(#[case] from: usize, #[case] to: usize, #[case] bad: usize) {
    let mut graph = Graph::new(4);
    let expected = Err(GraphError::NodeOutOfRange {
        index: bad,
        node_count: 4,
    });
    assert_eq!(graph.directional_connect(from, to), expected);
    assert_eq!(graph.non_directional_connect(from, to), expected);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.nodes().all(|node| node.degree() == 0));
}

#[test]
fn directional_connect_registers_with_source_only() {
    let mut graph = Graph::new(2);
    graph.directional_connect(0, 1).expect("valid nodes");
    assert_eq!(graph.node(0).expect("node 0").degree(), 1);
    assert_eq!(graph.node(1).expect("node 1").degree(), 0);
}

#[test]
fn non_directional_connect_shares_one_edge() {
    let mut graph = Graph::new(2);
    let id = graph.non_directional_connect(0, 1).expect("valid nodes");
    assert_eq!(graph.edge_count(), 1);
    for node in graph.nodes() {
        let ids: Vec<_> = node.edge_ids().copied().collect();
        assert_eq!(ids, vec![id]);
    }
    let seen_from_one: Vec<_> = graph
        .node(1)
        .expect("node 1")
        .incident_nodes()
        .map(|node| node.id())
        .collect();
    assert_eq!(seen_from_one, vec![0]);
}

#[rstest]
#[case::source(2, true)]
#[case::target(5, true)]
#[case::foreign(3, false)]
fn stored_edges_know_their_endpoints(#[case] node: usize, #[case] incident: bool) {
    let mut graph = Graph::new(6);
    let id = graph.directional_connect(2, 5).expect("valid nodes");
    let edge = graph.edge(id).expect("edge was just stored");
    assert_eq!(edge.is_incident(node), incident);
}

#[test]
fn incidence_iterators_are_restartable() {
    let graph = Graph::from_pairs(false, &[0, 1, 0, 2, 0, 3]).expect("pairs are valid");
    let node = graph.node(0).expect("node 0");
    let first: Vec<_> = node.incident_nodes().map(|n| n.id()).collect();
    let second: Vec<_> = node.incident_nodes().map(|n| n.id()).collect();
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(first, second);
    assert_eq!(node.incident_edges().len(), 3);
}

#[test]
fn from_pairs_round_trip() {
    let graph = Graph::from_pairs(false, &[0, 1, 2, 3]).expect("pairs are valid");
    assert_eq!(graph.len(), 4);
    assert_eq!(unordered_pairs(&graph), vec![(0, 1), (2, 3)]);
    let list = graph.adjacency_list();
    for pair in [(0, 1), (1, 0), (2, 3), (3, 2)] {
        assert!(list.contains(&pair), "missing {pair:?} in {list:?}");
    }
    assert_eq!(list.len(), 4);
}

#[test]
fn from_pairs_sizes_to_highest_id() {
    let graph = Graph::from_pairs(true, &[5, 2]).expect("pairs are valid");
    assert_eq!(graph.len(), 6);
    assert_eq!(graph.adjacency_list(), vec![(5, 2)]);
}

#[rstest]
#[case::empty(&[], GraphError::EmptyNodeSequence)]
#[case::odd(&[0, 1, 2], GraphError::UnpairedNodeSequence { len: 3 })]
#[case::unallocatable(&[0, usize::MAX - 1], GraphError::TooLarge { node_count: usize::MAX })]
#[case::id_overflow(&[usize::MAX, 0], GraphError::TooLarge { node_count: usize::MAX })]
fn from_pairs_rejects_malformed_sequences(#[case] ids: &[usize], #[case] expected: GraphError) {
    assert_eq!(Graph::from_pairs(false, ids).map(|g| g.len()), Err(expected));
}

#[test]
fn from_pairs_sized_keeps_isolated_nodes() {
    let graph = Graph::from_pairs_sized(false, &[0, 1], 4).expect("pairs are valid");
    assert_eq!(graph.len(), 4);
    assert_eq!(graph.node(3).expect("node 3").degree(), 0);

    let grown = Graph::from_pairs_sized(false, &[0, 6], 4).expect("pairs are valid");
    assert_eq!(grown.len(), 7);
}

#[rstest]
fn adjacency_matrix_is_indexed_target_then_source(directed_triangle: Graph) {
    let matrix = directed_triangle.adjacency_matrix();
    assert_eq!((matrix.rows(), matrix.cols()), (3, 3));
    // 0 -> 1 lands in row 1, column 0.
    assert_eq!(matrix.get(1, 0), Some(1));
    assert_eq!(matrix.get(0, 1), Some(0));
    assert_eq!(matrix.row(0), Some(&[0, 0, 1][..]));
    assert_eq!(matrix.row(1), Some(&[1, 0, 0][..]));
    assert_eq!(matrix.row(2), Some(&[0, 1, 0][..]));
    assert!(!matrix.is_symmetric());
}

#[rstest]
fn adjacency_matrix_is_symmetric_for_undirected_graphs(undirected_path: Graph) {
    let matrix = undirected_path.adjacency_matrix();
    assert!(matrix.is_symmetric());
    assert_eq!(matrix.get(0, 1), Some(1));
    assert_eq!(matrix.get(1, 0), Some(1));
    assert_eq!(matrix.get(0, 2), Some(0));
}

#[test]
fn mixed_connections_break_symmetry() {
    let mut graph = Graph::new(3);
    graph.non_directional_connect(0, 1).expect("valid nodes");
    graph.directional_connect(1, 2).expect("valid nodes");
    assert!(!graph.adjacency_matrix().is_symmetric());
}

#[rstest]
fn incidence_matrix_sets_both_endpoint_rows(directed_triangle: Graph) {
    let matrix = directed_triangle.incidence_matrix();
    assert_eq!((matrix.rows(), matrix.cols()), (3, 3));
    for column in 0..matrix.cols() {
        let ones = (0..matrix.rows())
            .filter(|&row| matrix.get(row, column) == Some(1))
            .count();
        assert_eq!(ones, 2);
    }
    assert_eq!(matrix.row(0), Some(&[1, 0, 1][..]));
}

#[test]
fn incidence_matrix_merges_reverse_pairs() {
    let mut graph = Graph::new(3);
    graph.directional_connect(0, 1).expect("valid nodes");
    graph.directional_connect(1, 0).expect("valid nodes");
    graph.directional_connect(1, 2).expect("valid nodes");
    let matrix = graph.incidence_matrix();
    assert_eq!(matrix.cols(), 2);
    assert_eq!(matrix.row(1), Some(&[1, 1][..]));
}

#[rstest]
fn undirected_incidence_matrix_has_one_column_per_edge(undirected_path: Graph) {
    assert_eq!(undirected_path.incidence_matrix().cols(), 3);
}

#[rstest]
fn edge_list_reports_shared_edges_once(undirected_path: Graph) {
    let edges: Vec<_> = undirected_path
        .edge_list()
        .iter()
        .map(|edge| edge.endpoints())
        .collect();
    assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
    assert_eq!(undirected_path.edges().count(), undirected_path.edge_count());
}

#[test]
fn edge_list_follows_node_order() {
    let mut graph = Graph::new(3);
    graph.directional_connect(2, 1).expect("valid nodes");
    graph.directional_connect(0, 2).expect("valid nodes");
    let edges: Vec<_> = graph.edges().map(|edge| edge.endpoints()).collect();
    assert_eq!(edges, vec![(0, 2), (2, 1)]);
}

#[test]
fn adjacency_list_counts_directed_edges_once() {
    let mut graph = Graph::new(3);
    graph.directional_connect(0, 1).expect("valid nodes");
    graph.non_directional_connect(1, 2).expect("valid nodes");
    assert_eq!(graph.adjacency_list(), vec![(0, 1), (1, 2), (2, 1)]);
}

#[test]
fn undirected_self_loop_is_registered_twice() {
    let mut graph = Graph::new(1);
    graph.non_directional_connect(0, 0).expect("valid node");
    let node = graph.node(0).expect("node 0");
    assert_eq!(node.degree(), 2);
    assert_eq!(graph.adjacency_list(), vec![(0, 0), (0, 0)]);
    assert_eq!(graph.edge_list().len(), 1);
    assert_eq!(graph.incidence_matrix().cols(), 1);
}

#[test]
fn model_does_not_police_degrees_or_duplicates() {
    let mut graph = Graph::new(2);
    for _ in 0..5 {
        graph.non_directional_connect(0, 1).expect("valid nodes");
    }
    assert_eq!(graph.node(0).expect("node 0").degree(), 5);
    assert_eq!(graph.edge_list().len(), 5);
}

#[test]
fn matrix_display_renders_rows() {
    let graph = Graph::from_pairs(true, &[0, 1]).expect("pairs are valid");
    assert_eq!(graph.adjacency_matrix().to_string(), "0 0 \n1 0 \n");
}
