/*
 * @Description  : 执行后端：把一组输出节点打包成一次计算（computation），运行时做一次前向传播并返回各节点的值
 */

use crate::nn::{Graph, GraphError, NodeId, Op};
use crate::tensor::Tensor;
use tracing::debug;

#[cfg(test)]
mod tests;

/// 创建执行后端
pub fn make_transformer() -> Transformer {
    Transformer::default()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Transformer;

impl Transformer {
    /// 以`outputs`为输出构建一次计算，所有节点须来自同一个图
    pub fn computation(&self, outputs: &[Op]) -> Result<Computation, GraphError> {
        let Some(first) = outputs.first() else {
            return Err(GraphError::InvalidOperation(
                "计算至少需要1个输出节点".to_string(),
            ));
        };
        if let Some(foreign) = outputs.iter().find(|op| !op.same_graph(first)) {
            return Err(GraphError::InvalidOperation(format!(
                "计算的所有输出节点须来自同一个图，{foreign:?}与{first:?}不在同一个图中"
            )));
        }
        Ok(Computation {
            graph: first.get_graph(),
            outputs: outputs.iter().map(Op::node_id).collect(),
        })
    }
}

/// 一次可重复运行的计算
#[derive(Debug)]
pub struct Computation {
    graph: Graph,
    outputs: Vec<NodeId>,
}

impl Computation {
    pub fn outputs(&self) -> &[NodeId] {
        &self.outputs
    }

    /// 运行一次前向传播，按构建时的顺序返回各输出节点的值
    pub fn run(&self) -> Result<Vec<Tensor>, GraphError> {
        let mut graph = self.graph.inner_mut();
        graph.forward_nodes(&self.outputs)?;
        debug!(graph = graph.name(), outputs = self.outputs.len(), "计算完成");

        self.outputs
            .iter()
            .map(|&id| {
                graph.get_node_value(id)?.cloned().ok_or_else(|| {
                    GraphError::ComputationError(format!("节点{id}在前向传播后仍没有值"))
                })
            })
            .collect()
    }
}
