/*
 * @Description  : Op 句柄测试
 */

use crate::assert_err;
use crate::nn::{Graph, GraphError};
use crate::tensor::Tensor;

#[test]
fn test_op_basic_queries() {
    let graph = Graph::new();
    let a = graph
        .constant(&Tensor::new_constant(1., &[2, 3]), Some("A"))
        .unwrap();
    let b = graph
        .constant(&Tensor::new_constant(2., &[2, 3]), None)
        .unwrap();
    let s = graph.sum(&[&a, &b], &[], None).unwrap();

    assert_eq!(a.name().unwrap(), "A");
    assert_eq!(b.name().unwrap(), "constant_1");
    assert_eq!(s.name().unwrap(), "sum_1");
    assert_eq!(a.type_name().unwrap(), "constant");
    assert_eq!(s.type_name().unwrap(), "sum");
    assert_eq!(s.value_expected_shape().unwrap(), vec![2, 3]);

    let parents = s.parents().unwrap();
    assert_eq!(parents.len(), 2);
    assert_eq!(parents[0].node_id(), a.node_id());
    assert_eq!(parents[1].node_id(), b.node_id());
}

#[test]
fn test_op_value_before_and_after_eval() {
    let graph = Graph::new();
    let a = graph
        .constant(&Tensor::new_constant(1., &[2]), None)
        .unwrap();
    let s = graph.sum(&[&a, &a], &[], None).unwrap();

    assert_eq!(s.value().unwrap(), None);
    assert_eq!(s.eval().unwrap(), Tensor::new_constant(2., &[2]));
    assert_eq!(s.value().unwrap(), Some(Tensor::new_constant(2., &[2])));
}

#[test]
fn test_op_set_value() {
    let graph = Graph::new();
    let a = graph
        .constant(&Tensor::new_constant(1., &[2]), None)
        .unwrap();
    let s = graph.sum(&[&a, &a], &[], None).unwrap();

    a.set_value(&Tensor::new(&[1., 2.], &[2])).unwrap();
    assert_eq!(s.eval().unwrap(), Tensor::new(&[2., 4.], &[2]));
    assert_err!(
        s.set_value(&Tensor::zeros(&[2])),
        GraphError::InvalidOperation(_)
    );
}

#[test]
fn test_op_outlives_graph_handle() {
    let op = {
        let graph = Graph::new();
        graph
            .constant(&Tensor::new_constant(7., &[1]), Some("seven"))
            .unwrap()
    };
    assert_eq!(op.eval().unwrap(), Tensor::new_constant(7., &[1]));
    assert_eq!(op.get_graph().nodes_count(), 1);
}

#[test]
fn test_op_debug() {
    let graph = Graph::new();
    let a = graph
        .constant(&Tensor::new_constant(1., &[1]), Some("A"))
        .unwrap();
    assert_eq!(format!("{a:?}"), "Op { id: NodeId(1), name: \"A\" }");
}
