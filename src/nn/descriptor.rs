/*
 * @Description  : 图描述符（Graph Descriptor）
 *                 统一的中间表示，用于序列化和调试输出
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// 图的可序列化描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescriptor {
    /// 格式版本（用于向后兼容）
    pub version: String,
    /// 图名称
    pub name: String,
    /// 所有节点描述（按id升序）
    pub nodes: Vec<NodeDescriptor>,
}

/// 节点描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// 节点 ID
    pub id: u64,
    /// 节点名称
    pub name: String,
    /// 节点类型
    pub node_type: NodeTypeDescriptor,
    /// 输出形状
    pub output_shape: Vec<usize>,
    /// 父节点 ID 列表（定义拓扑）
    pub parents: Vec<u64>,
}

/// 节点类型描述（包含类型特定参数）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeTypeDescriptor {
    Constant,
    Sum { coeffs: Vec<f32> },
}

impl fmt::Display for NodeTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "Constant"),
            Self::Sum { coeffs } if coeffs.iter().all(|&c| c == 1.) => write!(f, "Sum"),
            Self::Sum { coeffs } => write!(f, "Sum(coeffs={coeffs:?})"),
        }
    }
}

impl GraphDescriptor {
    /// 创建新的图描述符
    pub fn new(name: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: name.to_string(),
            nodes: Vec::new(),
        }
    }

    /// 添加节点描述
    pub fn add_node(&mut self, node: NodeDescriptor) {
        self.nodes.push(node);
    }

    pub fn find_node(&self, name: &str) -> Option<&NodeDescriptor> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// 节点的父节点名称（按父节点顺序）
    pub fn parent_names(&self, node: &NodeDescriptor) -> Vec<String> {
        node.parents
            .iter()
            .map(|pid| {
                self.nodes
                    .iter()
                    .find(|n| n.id == *pid)
                    .map_or_else(|| format!("#{pid}"), |n| n.name.clone())
            })
            .collect()
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl NodeDescriptor {
    /// 创建新的节点描述
    pub fn new(
        id: u64,
        name: &str,
        node_type: NodeTypeDescriptor,
        output_shape: Vec<usize>,
        parents: Vec<u64>,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            node_type,
            output_shape,
            parents,
        }
    }
}
