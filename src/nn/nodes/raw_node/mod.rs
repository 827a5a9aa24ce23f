mod constant;
mod ops;

pub(in crate::nn) use constant::Constant;
pub(in crate::nn) use ops::*;

use enum_dispatch::enum_dispatch;

#[enum_dispatch]
#[derive(Clone)]
pub(in crate::nn) enum NodeType {
    Constant(Constant),
    Sum(Sum),
}

use super::NodeHandle;
use crate::nn::GraphError;
use crate::tensor::Tensor;

#[enum_dispatch(NodeType)]
pub(in crate::nn) trait TraitNode {
    /// 节点类型名，用于自动命名（如`sum_1`）和展示
    fn type_name(&self) -> &'static str;

    /// 节点值的形状，在创建节点时就已确定，不必等到前向传播
    fn value_expected_shape(&self) -> &[usize];

    // 根据父节点的值计算本节点的值（注意：该接口只在Graph中使用，调用前所有父节点的值都已被计算过了）
    fn calc_value_by_parents(&mut self, parents: &[&NodeHandle]) -> Result<(), GraphError>;

    fn value(&self) -> Option<&Tensor>;

    fn set_value(&mut self, _value: Option<&Tensor>) -> Result<(), GraphError> {
        Err(GraphError::InvalidOperation(
            "该类型节点的值不应该被手动设置".to_string(),
        ))
    }

    /// 值在创建时即给定、无需父节点计算的节点（如常量）
    fn is_source(&self) -> bool {
        false
    }
}
