/*
 * @Description  : GraphInner describe/summary 相关方法
 */

use super::GraphInner;
use crate::nn::descriptor::{GraphDescriptor, NodeDescriptor, NodeTypeDescriptor};
use crate::nn::nodes::NodeType;

impl GraphInner {
    // ========== 图描述（describe）==========

    /// 导出图的描述符（用于序列化、调试）
    ///
    /// # 示例
    /// ```ignore
    /// let descriptor = graph.describe();
    /// println!("{}", descriptor.to_json().unwrap());
    /// ```
    pub fn describe(&self) -> GraphDescriptor {
        let mut descriptor = GraphDescriptor::new(&self.name);

        // 按 ID 排序节点，确保输出顺序一致
        for node_id in self.nodes() {
            let Some(node) = self.nodes.get(&node_id) else {
                continue;
            };
            let parents = self
                .backward_edges
                .get(&node_id)
                .map(|ids| ids.iter().map(|id| id.0).collect())
                .unwrap_or_default();

            descriptor.add_node(NodeDescriptor::new(
                node_id.0,
                node.name(),
                Self::node_type_to_descriptor(node.node_type()),
                node.value_expected_shape().to_vec(),
                parents,
            ));
        }

        descriptor
    }

    fn node_type_to_descriptor(node_type: &NodeType) -> NodeTypeDescriptor {
        match node_type {
            NodeType::Constant(_) => NodeTypeDescriptor::Constant,
            NodeType::Sum(sum) => NodeTypeDescriptor::Sum {
                coeffs: sum.coeffs().to_vec(),
            },
        }
    }

    // ========== 摘要（summary）==========

    /// 返回图摘要字符串（文本表格，用于控制台输出）
    pub fn summary_string(&self) -> String {
        let desc = self.describe();
        let rows: Vec<[String; 4]> = desc
            .nodes
            .iter()
            .map(|node| {
                [
                    node.name.clone(),
                    node.node_type.to_string(),
                    format!("{:?}", node.output_shape),
                    desc.parent_names(node).join(", "),
                ]
            })
            .collect();

        let headers = ["节点名称", "类型", "输出形状", "父节点"];
        let mut widths = headers.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let format_row = |cells: [&str; 4]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| {
                    let pad = width.saturating_sub(cell.chars().count());
                    format!("{cell}{}", " ".repeat(pad))
                })
                .collect();
            format!("| {} |\n", padded.join(" | "))
        };

        let mut output = format!("图: {}\n", desc.name);
        output.push_str(&format_row(headers));
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        output.push_str(&format!("|-{}-|\n", separator.join("-|-")));
        for row in &rows {
            output.push_str(&format_row(row.each_ref().map(String::as_str)));
        }
        output.push_str(&format!("节点总数: {}\n", desc.nodes.len()));
        output
    }
}
