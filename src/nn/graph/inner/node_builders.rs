/*
 * @Description  : GraphInner 节点构建方法（new_*_node）
 */

use super::super::error::GraphError;
use super::GraphInner;
use crate::nn::nodes::NodeHandle;
use crate::nn::NodeId;
use crate::tensor::Tensor;

impl GraphInner {
    /// 添加节点到列表
    pub(in crate::nn::graph) fn add_node_to_list(
        &mut self,
        mut node_handle: NodeHandle,
        name: Option<&str>,
        node_type: &str,
        parents: &[NodeId],
    ) -> Result<NodeId, GraphError> {
        // 名字校验在分配id之前，失败时不消耗id
        let node_name = self.generate_valid_new_node_name(name.unwrap_or(""), node_type)?;
        let node_id = self.generate_valid_node_id();

        for &parent_id in parents {
            self.forward_edges
                .entry(parent_id)
                .or_default()
                .push(node_id);
        }
        self.backward_edges
            .entry(node_id)
            .or_default()
            .extend(parents);

        node_handle.bind_id_and_name(node_id, &node_name);
        self.nodes.insert(node_id, node_handle);
        Ok(node_id)
    }

    /// 创建常量节点
    pub fn new_constant_node(
        &mut self,
        value: &Tensor,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let node = NodeHandle::new_constant(value);
        self.add_node_to_list(node, name, "constant", &[])
    }

    /// 创建逐元素加权求和节点，`coeffs`为空表示所有系数为1
    pub fn new_sum_node(
        &mut self,
        parents: &[NodeId],
        coeffs: &[f32],
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let node = {
            let parent_handles = self.get_nodes(parents)?;
            NodeHandle::new_sum(&parent_handles, coeffs)?
        };
        self.add_node_to_list(node, name, "sum", parents)
    }
}
