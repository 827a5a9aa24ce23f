/*
 * @Description  : Graph 句柄测试
 */

use crate::assert_err;
use crate::nn::{Graph, GraphError, NodeId};
use crate::tensor::Tensor;

#[test]
fn test_graph_handle_constant_and_sum() {
    let graph = Graph::with_name("net");
    let a = graph
        .constant(&Tensor::new_constant(1., &[2, 3]), Some("A"))
        .unwrap();
    let b = graph
        .constant(&Tensor::new_constant(3., &[2, 3]), Some("B"))
        .unwrap();
    let d = graph.sum(&[&a, &b], &[], Some("D")).unwrap();

    assert_eq!(graph.name(), "net");
    assert_eq!(graph.nodes_count(), 3);
    assert_eq!(d.eval().unwrap(), Tensor::new_constant(4., &[2, 3]));
}

#[test]
fn test_graph_handle_clone_shares_inner() {
    let graph = Graph::new();
    let other = graph.clone();
    other
        .constant(&Tensor::new_constant(1., &[1]), None)
        .unwrap();
    assert_eq!(graph.nodes_count(), 1);
    assert!(graph.same_graph(&other));
    assert!(!graph.same_graph(&Graph::new()));
}

#[test]
fn test_graph_handle_sum_rejects_foreign_ops() {
    let graph1 = Graph::new();
    let graph2 = Graph::new();
    let a = graph1
        .constant(&Tensor::new_constant(1., &[1]), None)
        .unwrap();
    let b = graph2
        .constant(&Tensor::new_constant(1., &[1]), None)
        .unwrap();

    assert_err!(
        graph1.sum(&[&a, &b], &[], None),
        GraphError::InvalidOperation(msg) if msg.starts_with("不能对来自不同 Graph 的节点进行操作")
    );
    assert_eq!(graph1.nodes_count(), 1);
}

#[test]
fn test_graph_handle_find_op_and_wrap() {
    let graph = Graph::new();
    let a = graph
        .constant(&Tensor::new_constant(1., &[1]), Some("A"))
        .unwrap();

    let found = graph.find_op("A").unwrap();
    assert_eq!(found.node_id(), a.node_id());
    assert!(graph.find_op("missing").is_none());

    let wrapped = graph.wrap_node_id(a.node_id()).unwrap();
    assert!(wrapped.same_graph(&a));
    assert_err!(graph.wrap_node_id(NodeId(99)), GraphError::NodeNotFound(NodeId(99)));
}

#[test]
fn test_graph_handle_summary_string() {
    let graph = Graph::with_name("net");
    let a = graph
        .constant(&Tensor::new_constant(1., &[2, 3]), Some("A"))
        .unwrap();
    let b = graph
        .constant(&Tensor::new_constant(3., &[2, 3]), Some("B"))
        .unwrap();
    graph.sum(&[&a, &b], &[], Some("D")).unwrap();

    let summary = graph.summary_string();
    assert!(summary.starts_with("图: net\n"));
    assert!(summary.contains("| D "));
    assert!(summary.contains("| Sum "));
    assert!(summary.contains("A, B"));
    assert!(summary.ends_with("节点总数: 3\n"));
}
