use crate::assert_err;
use crate::nn::{Graph, GraphError};
use crate::tensor::Tensor;
use crate::transformer::make_transformer;

fn build_sum_graph() -> (Graph, Vec<crate::nn::Op>) {
    let graph = Graph::new();
    let a = graph
        .constant(&Tensor::new_constant(1., &[2, 3]), Some("A"))
        .unwrap();
    let b = graph
        .constant(&Tensor::new_constant(3., &[2, 3]), Some("B"))
        .unwrap();
    let c = graph
        .constant(&Tensor::new_constant(-2., &[2, 3]), Some("C"))
        .unwrap();
    let d = graph.sum(&[&a, &b, &c], &[], Some("D")).unwrap();
    (graph, vec![a, b, c, d])
}

#[test]
fn test_computation_run() {
    let (_graph, ops) = build_sum_graph();
    let d = ops[3].clone();

    let results = make_transformer().computation(&[d]).unwrap().run().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0], Tensor::new_constant(2., &[2, 3]));
}

#[test]
fn test_computation_keeps_request_order() {
    let (_graph, ops) = build_sum_graph();
    let computation = make_transformer()
        .computation(&[ops[3].clone(), ops[0].clone(), ops[3].clone()])
        .unwrap();
    assert_eq!(computation.outputs().len(), 3);

    let results = computation.run().unwrap();
    assert_eq!(results[0], Tensor::new_constant(2., &[2, 3]));
    assert_eq!(results[1], Tensor::new_constant(1., &[2, 3]));
    assert_eq!(results[2], Tensor::new_constant(2., &[2, 3]));
}

#[test]
fn test_computation_is_rerunnable() {
    let (graph, ops) = build_sum_graph();
    let computation = make_transformer().computation(&[ops[3].clone()]).unwrap();

    assert_eq!(computation.run().unwrap()[0], Tensor::new_constant(2., &[2, 3]));
    ops[0].set_value(&Tensor::new_constant(5., &[2, 3])).unwrap();
    assert_eq!(computation.run().unwrap()[0], Tensor::new_constant(6., &[2, 3]));
    assert_eq!(graph.nodes_count(), 4);
}

#[test]
fn test_computation_requires_outputs() {
    assert_err!(
        make_transformer().computation(&[]),
        GraphError::InvalidOperation("计算至少需要1个输出节点")
    );
}

#[test]
fn test_computation_rejects_mixed_graphs() {
    let (_graph, ops) = build_sum_graph();
    let other = Graph::new()
        .constant(&Tensor::new_constant(1., &[1]), None)
        .unwrap();
    assert_err!(
        make_transformer().computation(&[ops[0].clone(), other]),
        GraphError::InvalidOperation(msg) if msg.starts_with("计算的所有输出节点须来自同一个图")
    );
}
