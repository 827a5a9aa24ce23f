/*
 * @Description  : Constant 节点单元测试
 */

use crate::assert_err;
use crate::nn::{GraphError, GraphInner};
use crate::tensor::Tensor;

#[test]
fn test_constant_creation() {
    let mut graph = GraphInner::new();
    let value = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    let a = graph.new_constant_node(&value, Some("A")).unwrap();

    assert_eq!(graph.get_node_name(a).unwrap(), "A");
    assert_eq!(graph.get_node_value_expected_shape(a).unwrap(), &[2, 3]);
    // 常量节点创建后立即有值
    assert!(graph.has_node_value(a).unwrap());
    assert_eq!(graph.get_node_value(a).unwrap(), Some(&value));
}

#[test]
fn test_constant_scalar_and_high_rank() {
    let mut graph = GraphInner::new();
    let scalar = graph
        .new_constant_node(&Tensor::new(&[3.], &[]), None)
        .unwrap();
    assert_eq!(graph.get_node_value_expected_shape(scalar).unwrap(), &[] as &[usize]);

    let blob = graph
        .new_constant_node(&Tensor::zeros(&[1, 3, 4, 5]), None)
        .unwrap();
    assert_eq!(
        graph.get_node_value_expected_shape(blob).unwrap(),
        &[1, 3, 4, 5]
    );
}

#[test]
fn test_constant_set_value() {
    let mut graph = GraphInner::new();
    let a = graph
        .new_constant_node(&Tensor::new_constant(1., &[2, 2]), None)
        .unwrap();

    // 同形状可以替换
    let new_value = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    graph.set_node_value(a, Some(&new_value)).unwrap();
    assert_eq!(graph.get_node_value(a).unwrap(), Some(&new_value));

    // 形状不同不行
    assert_err!(
        graph.set_node_value(a, Some(&Tensor::zeros(&[4]))),
        GraphError::ShapeMismatch([2, 2], [4], "常量节点的新值须与原值形状一致")
    );

    // 不能清空
    assert_err!(
        graph.set_node_value(a, None),
        GraphError::InvalidOperation("常量节点的值不能被清空")
    );
    assert_eq!(graph.get_node_value(a).unwrap(), Some(&new_value));
}
