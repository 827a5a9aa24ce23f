use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::nodes::NodeHandle;
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 逐元素加权求和：`Σ coeffs[i] * parents[i]`，未给系数时全部为1
#[derive(Clone)]
pub(in crate::nn) struct Sum {
    value: Option<Tensor>,
    shape: Vec<usize>,
    coeffs: Vec<f32>,
}

impl Sum {
    pub(in crate::nn) fn new(parents: &[&NodeHandle], coeffs: &[f32]) -> Result<Self, GraphError> {
        // 1. 至少2个父节点
        if parents.len() < 2 {
            return Err(GraphError::InvalidOperation(format!(
                "Sum节点至少需要2个父节点，实际为{}个",
                parents.len()
            )));
        }

        // 2. 系数要么不给，要么与父节点一一对应
        if !coeffs.is_empty() && coeffs.len() != parents.len() {
            return Err(GraphError::InvalidOperation(format!(
                "Sum节点的系数个数（{}）须与父节点个数（{}）一致",
                coeffs.len(),
                parents.len()
            )));
        }

        // 3. 所有父节点形状相同（不做广播）
        let shape = parents[0].value_expected_shape().to_vec();
        for parent in &parents[1..] {
            if parent.value_expected_shape() != shape.as_slice() {
                return Err(GraphError::ShapeMismatch {
                    expected: shape,
                    got: parent.value_expected_shape().to_vec(),
                    message: format!("Sum节点的所有父节点形状必须相同，{parent}与第一个父节点不一致"),
                });
            }
        }

        let coeffs = if coeffs.is_empty() {
            vec![1.; parents.len()]
        } else {
            coeffs.to_vec()
        };

        Ok(Self {
            value: None,
            shape,
            coeffs,
        })
    }

    pub(in crate::nn) fn coeffs(&self) -> &[f32] {
        &self.coeffs
    }
}

impl TraitNode for Sum {
    fn type_name(&self) -> &'static str {
        "sum"
    }

    fn value_expected_shape(&self) -> &[usize] {
        &self.shape
    }

    fn calc_value_by_parents(&mut self, parents: &[&NodeHandle]) -> Result<(), GraphError> {
        if parents.len() != self.coeffs.len() {
            return Err(GraphError::ComputationError(format!(
                "Sum节点期望{}个父节点，实际为{}个",
                self.coeffs.len(),
                parents.len()
            )));
        }

        let mut result = Tensor::zeros(&self.shape);
        for (parent, &coeff) in parents.iter().zip(&self.coeffs) {
            let parent_value = parent.value().ok_or_else(|| {
                GraphError::ComputationError(format!("{parent}没有值"))
            })?;
            if coeff == 1. {
                result += parent_value;
            } else {
                result += parent_value * coeff;
            }
        }
        self.value = Some(result);
        Ok(())
    }

    fn value(&self) -> Option<&Tensor> {
        self.value.as_ref()
    }
}
