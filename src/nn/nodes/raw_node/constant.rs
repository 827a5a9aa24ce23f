use super::TraitNode;
use crate::nn::nodes::NodeHandle;
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 常量节点：值在创建时给定，没有父节点
#[derive(Clone)]
pub(in crate::nn) struct Constant {
    value: Tensor,
    shape: Vec<usize>,
}

impl Constant {
    pub(in crate::nn) fn new(value: &Tensor) -> Self {
        Self {
            shape: value.shape().to_vec(),
            value: value.clone(),
        }
    }
}

impl TraitNode for Constant {
    fn type_name(&self) -> &'static str {
        "constant"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, _parents: &[&NodeHandle]) -> Result<(), GraphError> {
        Err(GraphError::InvalidOperation(
            "常量节点没有父节点，其值不通过前向传播计算".to_string(),
        ))
    }

    fn value(&self) -> Option<&Tensor> {
        Some(&self.value)
    }

    /// 允许替换为同形状的新值，但不允许清空
    fn set_value(&mut self, value: Option<&Tensor>) -> Result<(), GraphError> {
        let value = value.ok_or_else(|| {
            GraphError::InvalidOperation("常量节点的值不能被清空".to_string())
        })?;
        if value.shape() != self.shape.as_slice() {
            return Err(GraphError::ShapeMismatch {
                expected: self.shape.clone(),
                got: value.shape().to_vec(),
                message: "常量节点的新值须与原值形状一致".to_string(),
            });
        }
        self.value = value.clone();
        Ok(())
    }

    fn is_source(&self) -> bool {
        true
    }
}
